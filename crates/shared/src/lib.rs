use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Уникальный идентификатор объекта в сцене
pub type ObjectId = String;

/// Вид примитива (строковый тег объекта: "cube", "sphere", ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    Cube,
    Sphere,
    Cylinder,
    Cone,
    Plane,
    Pyramid,
    Octahedron,
    Tetrahedron,
}

impl PrimitiveKind {
    /// Все виды примитивов в порядке меню «Создать»
    pub const ALL: [PrimitiveKind; 8] = [
        PrimitiveKind::Cube,
        PrimitiveKind::Sphere,
        PrimitiveKind::Cylinder,
        PrimitiveKind::Cone,
        PrimitiveKind::Plane,
        PrimitiveKind::Pyramid,
        PrimitiveKind::Octahedron,
        PrimitiveKind::Tetrahedron,
    ];

    /// Строковый тег
    pub fn tag(&self) -> &'static str {
        match self {
            PrimitiveKind::Cube => "cube",
            PrimitiveKind::Sphere => "sphere",
            PrimitiveKind::Cylinder => "cylinder",
            PrimitiveKind::Cone => "cone",
            PrimitiveKind::Plane => "plane",
            PrimitiveKind::Pyramid => "pyramid",
            PrimitiveKind::Octahedron => "octahedron",
            PrimitiveKind::Tetrahedron => "tetrahedron",
        }
    }

    /// Имя для отображения (тег с заглавной буквы)
    pub fn display_name(&self) -> &'static str {
        match self {
            PrimitiveKind::Cube => "Cube",
            PrimitiveKind::Sphere => "Sphere",
            PrimitiveKind::Cylinder => "Cylinder",
            PrimitiveKind::Cone => "Cone",
            PrimitiveKind::Plane => "Plane",
            PrimitiveKind::Pyramid => "Pyramid",
            PrimitiveKind::Octahedron => "Octahedron",
            PrimitiveKind::Tetrahedron => "Tetrahedron",
        }
    }
}

/// Примитив с параметрами
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    Cube {
        size: f64,
    },
    Sphere {
        radius: f64,
    },
    Cylinder {
        radius_top: f64,
        radius_bottom: f64,
        height: f64,
    },
    Cone {
        radius: f64,
        height: f64,
    },
    Plane {
        width: f64,
        height: f64,
    },
    Pyramid {
        size: f64,
    },
    Octahedron {
        radius: f64,
    },
    Tetrahedron {
        radius: f64,
    },
}

impl Primitive {
    /// Примитив заданного вида с размерами по умолчанию
    pub fn with_defaults(kind: PrimitiveKind) -> Self {
        match kind {
            PrimitiveKind::Cube => Primitive::Cube { size: 1.0 },
            PrimitiveKind::Sphere => Primitive::Sphere { radius: 1.0 },
            PrimitiveKind::Cylinder => Primitive::Cylinder {
                radius_top: 1.0,
                radius_bottom: 1.0,
                height: 2.0,
            },
            PrimitiveKind::Cone => Primitive::Cone { radius: 1.0, height: 2.0 },
            PrimitiveKind::Plane => Primitive::Plane { width: 2.0, height: 2.0 },
            PrimitiveKind::Pyramid => Primitive::Pyramid { size: 1.0 },
            PrimitiveKind::Octahedron => Primitive::Octahedron { radius: 1.0 },
            PrimitiveKind::Tetrahedron => Primitive::Tetrahedron { radius: 1.0 },
        }
    }

    /// Вид примитива
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Primitive::Cube { .. } => PrimitiveKind::Cube,
            Primitive::Sphere { .. } => PrimitiveKind::Sphere,
            Primitive::Cylinder { .. } => PrimitiveKind::Cylinder,
            Primitive::Cone { .. } => PrimitiveKind::Cone,
            Primitive::Plane { .. } => PrimitiveKind::Plane,
            Primitive::Pyramid { .. } => PrimitiveKind::Pyramid,
            Primitive::Octahedron { .. } => PrimitiveKind::Octahedron,
            Primitive::Tetrahedron { .. } => PrimitiveKind::Tetrahedron,
        }
    }

    /// Цвет материала по умолчанию (0xRRGGBB)
    pub fn default_color(&self) -> u32 {
        default_color(self.kind())
    }
}

/// Фиксированный цвет материала для вида примитива (0xRRGGBB)
pub fn default_color(kind: PrimitiveKind) -> u32 {
    match kind {
        PrimitiveKind::Cube => 0x00ff00,
        PrimitiveKind::Sphere => 0x0000ff,
        PrimitiveKind::Cylinder => 0xff0000,
        PrimitiveKind::Cone => 0xffff00,
        PrimitiveKind::Plane => 0xff00ff,
        PrimitiveKind::Pyramid => 0xff8800,
        PrimitiveKind::Octahedron => 0x00ffff,
        PrimitiveKind::Tetrahedron => 0x8800ff,
    }
}

/// Трансформация объекта (поворот в градусах)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: [f64; 3],
    pub rotation: [f64; 3],
    pub scale: [f64; 3],
}

impl Transform {
    pub fn new() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            rotation: [0.0, 0.0, 0.0],
            scale: [1.0, 1.0, 1.0],
        }
    }

    /// Трансформация со сдвигом в точку
    pub fn at(position: [f64; 3]) -> Self {
        Self {
            position,
            ..Self::new()
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

fn default_true() -> bool {
    true
}

fn default_version() -> u32 {
    1
}

/// Объект сцены — примитив с трансформацией и цветом
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    /// Уникальный идентификатор объекта
    pub id: ObjectId,
    /// Имя объекта (отображается в дереве)
    pub name: String,
    pub primitive: Primitive,
    #[serde(default)]
    pub transform: Transform,
    /// Цвет материала 0xRRGGBB
    pub color: u32,
    #[serde(default = "default_true")]
    pub visible: bool,
}

impl SceneObject {
    /// Строковый тег типа объекта ("cube", "sphere", ...)
    pub fn object_type(&self) -> &'static str {
        self.primitive.kind().tag()
    }
}

/// Настройки отображения сцены
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSettings {
    /// Показывать сетку
    #[serde(default = "default_true")]
    pub grid_visible: bool,
    /// Показывать оси
    #[serde(default = "default_true")]
    pub axes_visible: bool,
    /// Цвет фона RGB
    #[serde(default = "default_background")]
    pub background_color: [u8; 3],
}

fn default_background() -> [u8; 3] {
    [30, 30, 35]
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            grid_visible: true,
            axes_visible: true,
            background_color: default_background(),
        }
    }
}

/// Частичное обновление настроек сцены (None = не менять)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneSettingsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axes_visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<[u8; 3]>,
}

impl SceneSettingsPatch {
    /// Патч, меняющий только видимость сетки
    pub fn grid_visible(visible: bool) -> Self {
        Self {
            grid_visible: Some(visible),
            ..Self::default()
        }
    }

    /// Применить патч к настройкам. Возвращает true, если что-то изменилось.
    pub fn apply(&self, settings: &mut SceneSettings) -> bool {
        let before = settings.clone();
        if let Some(v) = self.grid_visible {
            settings.grid_visible = v;
        }
        if let Some(v) = self.axes_visible {
            settings.axes_visible = v;
        }
        if let Some(v) = self.background_color {
            settings.background_color = v;
        }
        *settings != before
    }
}

/// Описание сцены — объекты и настройки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Версия формата
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub settings: SceneSettings,
    #[serde(default)]
    pub objects: Vec<SceneObject>,
}

impl Default for SceneDescription {
    fn default() -> Self {
        Self {
            version: 1,
            settings: SceneSettings::default(),
            objects: Vec::new(),
        }
    }
}

/// Активный инструмент трансформации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformMode {
    #[default]
    Select,
    Move,
    Rotate,
    Scale,
    Align,
}

impl TransformMode {
    pub const ALL: [TransformMode; 5] = [
        TransformMode::Select,
        TransformMode::Move,
        TransformMode::Rotate,
        TransformMode::Scale,
        TransformMode::Align,
    ];

    /// Строковый идентификатор инструмента
    pub fn id(&self) -> &'static str {
        match self {
            TransformMode::Select => "select",
            TransformMode::Move => "move",
            TransformMode::Rotate => "rotate",
            TransformMode::Scale => "scale",
            TransformMode::Align => "align",
        }
    }

    /// Идентификатор с заглавной буквы (для строки статуса)
    pub fn label(&self) -> &'static str {
        match self {
            TransformMode::Select => "Select",
            TransformMode::Move => "Move",
            TransformMode::Rotate => "Rotate",
            TransformMode::Scale => "Scale",
            TransformMode::Align => "Align",
        }
    }
}

impl fmt::Display for TransformMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TransformMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransformMode::ALL
            .into_iter()
            .find(|m| m.id() == s)
            .ok_or_else(|| format!("Unknown transform mode '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip<T>(value: &T)
    where
        T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug,
    {
        let json = serde_json::to_string(value).unwrap();
        let back: T = serde_json::from_str(&json).unwrap();
        assert_eq!(*value, back);
    }

    // --- Primitive ---

    #[test]
    fn test_primitive_defaults_match_kind() {
        for kind in PrimitiveKind::ALL {
            assert_eq!(Primitive::with_defaults(kind).kind(), kind);
        }
    }

    #[test]
    fn test_primitive_default_dimensions() {
        assert_eq!(
            Primitive::with_defaults(PrimitiveKind::Cylinder),
            Primitive::Cylinder { radius_top: 1.0, radius_bottom: 1.0, height: 2.0 }
        );
        assert_eq!(
            Primitive::with_defaults(PrimitiveKind::Plane),
            Primitive::Plane { width: 2.0, height: 2.0 }
        );
        assert_eq!(
            Primitive::with_defaults(PrimitiveKind::Cone),
            Primitive::Cone { radius: 1.0, height: 2.0 }
        );
    }

    #[test]
    fn test_primitive_json_tag() {
        let json = r#"{"type": "pyramid", "size": 2.0}"#;
        let p: Primitive = serde_json::from_str(json).unwrap();
        assert_eq!(p, Primitive::Pyramid { size: 2.0 });
        assert_eq!(p.kind().tag(), "pyramid");
    }

    #[test]
    fn test_default_colors() {
        assert_eq!(default_color(PrimitiveKind::Cube), 0x00ff00);
        assert_eq!(default_color(PrimitiveKind::Pyramid), 0xff8800);
        assert_eq!(Primitive::Tetrahedron { radius: 1.0 }.default_color(), 0x8800ff);
    }

    // --- Scene ---

    #[test]
    fn test_scene_object_type_tag() {
        let obj = SceneObject {
            id: "o1".to_string(),
            name: "Sphere".to_string(),
            primitive: Primitive::Sphere { radius: 1.0 },
            transform: Transform::new(),
            color: 0x0000ff,
            visible: true,
        };
        assert_eq!(obj.object_type(), "sphere");
        roundtrip(&obj);
    }

    #[test]
    fn test_scene_defaults_from_minimal_json() {
        let scene: SceneDescription = serde_json::from_str("{}").unwrap();
        assert_eq!(scene.version, 1);
        assert!(scene.settings.grid_visible);
        assert!(scene.objects.is_empty());
    }

    #[test]
    fn test_settings_patch_only_touches_given_fields() {
        let mut settings = SceneSettings::default();
        let changed = SceneSettingsPatch::grid_visible(false).apply(&mut settings);
        assert!(changed);
        assert!(!settings.grid_visible);
        assert!(settings.axes_visible);
        assert_eq!(settings.background_color, [30, 30, 35]);
    }

    #[test]
    fn test_settings_patch_noop() {
        let mut settings = SceneSettings::default();
        assert!(!SceneSettingsPatch::default().apply(&mut settings));
        assert!(!SceneSettingsPatch::grid_visible(true).apply(&mut settings));
    }

    // --- TransformMode ---

    #[test]
    fn test_transform_mode_ids_roundtrip() {
        for mode in TransformMode::ALL {
            assert_eq!(mode.id().parse::<TransformMode>().unwrap(), mode);
        }
        assert!("lasso".parse::<TransformMode>().is_err());
    }

    #[test]
    fn test_transform_mode_serde() {
        let json = serde_json::to_string(&TransformMode::Rotate).unwrap();
        assert_eq!(json, "\"rotate\"");
        assert_eq!(TransformMode::default(), TransformMode::Select);
    }
}
