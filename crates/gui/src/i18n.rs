//! UI string table (English and Russian)

use std::sync::atomic::{AtomicU8, Ordering};

use shared::PrimitiveKind;

use crate::state::settings::Language;

static CURRENT_LANG: AtomicU8 = AtomicU8::new(0); // 0=En (default)

pub fn language() -> Language {
    match CURRENT_LANG.load(Ordering::Relaxed) {
        1 => Language::Ru,
        _ => Language::En,
    }
}

pub fn set_language(language: Language) {
    CURRENT_LANG.store(
        match language {
            Language::En => 0,
            Language::Ru => 1,
        },
        Ordering::Relaxed,
    );
}

/// Localized primitive name
pub fn primitive_name(kind: PrimitiveKind) -> &'static str {
    if language() == Language::En {
        return kind.display_name();
    }
    match kind {
        PrimitiveKind::Cube => "Куб",
        PrimitiveKind::Sphere => "Сфера",
        PrimitiveKind::Cylinder => "Цилиндр",
        PrimitiveKind::Cone => "Конус",
        PrimitiveKind::Plane => "Плоскость",
        PrimitiveKind::Pyramid => "Пирамида",
        PrimitiveKind::Octahedron => "Октаэдр",
        PrimitiveKind::Tetrahedron => "Тетраэдр",
    }
}

/// Translate a key to the current language.
pub fn t(key: &str) -> &'static str {
    let ru = language() == Language::Ru;
    match key {
        // ── Main menus ──────────────────────────────────────
        "menu.file" => if ru { "Файл" } else { "File" },
        "menu.new" => if ru { "Новая сцена  Ctrl+N" } else { "New scene  Ctrl+N" },
        "menu.open" => if ru { "Открыть сцену..." } else { "Open Scene..." },
        "menu.open_title" => if ru { "Открыть JSON сцены" } else { "Open Scene JSON" },
        "menu.save" => if ru { "Сохранить сцену..." } else { "Save Scene..." },
        "menu.save_title" => if ru { "Сохранить JSON сцены" } else { "Save Scene JSON" },
        "menu.demo" => if ru { "Демо-сцена" } else { "Demo scene" },
        "menu.quit" => if ru { "Выход" } else { "Quit" },

        "menu.edit" => if ru { "Правка" } else { "Edit" },
        "menu.undo" => if ru { "Отменить  Ctrl+Z" } else { "Undo  Ctrl+Z" },
        "menu.redo" => if ru { "Повторить  Ctrl+Shift+Z" } else { "Redo  Ctrl+Shift+Z" },
        "menu.duplicate" => if ru { "Дублировать  Ctrl+D" } else { "Duplicate  Ctrl+D" },
        "menu.delete" => if ru { "Удалить  Del" } else { "Delete  Del" },
        "menu.deselect_all" => if ru { "Снять выделение  Esc" } else { "Deselect  Esc" },

        "menu.view" => if ru { "Вид" } else { "View" },
        "menu.toolbar" => if ru { "Панель инструментов" } else { "Toolbar" },
        "menu.scene_tree" => if ru { "Дерево сцены" } else { "Scene tree" },
        "menu.properties" => if ru { "Свойства" } else { "Properties" },
        "menu.grid" => if ru { "Сетка  Shift+G" } else { "Grid  Shift+G" },
        "menu.axes" => if ru { "Оси" } else { "Axes" },
        "menu.reset_camera" => if ru { "Сбросить камеру" } else { "Reset camera" },
        "menu.language" => if ru { "Язык" } else { "Language" },

        "menu.create" => if ru { "Создать" } else { "Create" },
        "menu.primitives" => if ru { "Примитивы" } else { "Primitives" },

        "menu.settings" => if ru { "Настройки" } else { "Settings" },
        "menu.preferences" => if ru { "Параметры..." } else { "Preferences..." },

        // ── Toolbar ─────────────────────────────────────────
        "toolbar.new_scene" => if ru { "Новая сцена" } else { "New Scene" },
        "toolbar.tools" => if ru { "Инструменты:" } else { "Tools:" },
        "toolbar.actions" => if ru { "Действия:" } else { "Actions:" },
        "toolbar.view" => if ru { "Вид:" } else { "View:" },
        "toolbar.selected" => if ru { "Выбрано:" } else { "Selected:" },
        "toolbar.mode" => if ru { "Режим:" } else { "Mode:" },
        "toolbar.esc_hint" => if ru { "Esc - снять выделение" } else { "Press Esc to deselect" },

        // ── Confirmation ────────────────────────────────────
        "confirm.title" => if ru { "Подтверждение" } else { "Confirm" },
        "confirm.new_scene" => if ru {
            "Создать новую сцену? Все объекты будут удалены."
        } else {
            crate::toolbar::NEW_SCENE_PROMPT
        },
        "confirm.ok" => "OK",
        "confirm.cancel" => if ru { "Отмена" } else { "Cancel" },

        // ── Scene tree ──────────────────────────────────────
        "tree.scene" => if ru { "Сцена" } else { "Scene" },
        "tree.add_object" => if ru { "Добавить объект" } else { "Add object" },
        "tree.no_objects" => if ru { "Нет объектов" } else { "No objects" },
        "tree.hide" => if ru { "Скрыть" } else { "Hide" },
        "tree.show" => if ru { "Показать" } else { "Show" },

        // ── Properties ──────────────────────────────────────
        "prop.title" => if ru { "Свойства" } else { "Properties" },
        "prop.select_object" => if ru { "Выберите объект" } else { "Select an object" },
        "prop.to_view" => if ru { "для просмотра свойств" } else { "to view its properties" },
        "prop.name" => if ru { "Имя" } else { "Name" },
        "prop.type" => if ru { "Тип" } else { "Type" },
        "prop.color" => if ru { "Цвет" } else { "Color" },
        "prop.visible" => if ru { "Видимый" } else { "Visible" },
        "prop.transform" => if ru { "Трансформация" } else { "Transform" },
        "prop.position" => if ru { "Позиция" } else { "Position" },
        "prop.rotation" => if ru { "Вращение" } else { "Rotation" },
        "prop.scale" => if ru { "Масштаб" } else { "Scale" },
        "prop.reset_transform" => if ru { "Сбросить" } else { "Reset" },
        "prop.parameters" => if ru { "Параметры" } else { "Parameters" },
        "prop.size" => if ru { "Размер" } else { "Size" },
        "prop.radius" => if ru { "Радиус" } else { "Radius" },
        "prop.radius_top" => if ru { "Радиус сверху" } else { "Top radius" },
        "prop.radius_bottom" => if ru { "Радиус снизу" } else { "Bottom radius" },
        "prop.height" => if ru { "Высота" } else { "Height" },
        "prop.width" => if ru { "Ширина" } else { "Width" },

        // ── Viewport context menu ───────────────────────────
        "ctx.focus" => if ru { "Фокус камеры  F" } else { "Focus camera  F" },
        "ctx.hide" => if ru { "Скрыть" } else { "Hide" },
        "ctx.show" => if ru { "Показать" } else { "Show" },
        "ctx.duplicate" => if ru { "Дублировать" } else { "Duplicate" },
        "ctx.delete" => if ru { "Удалить" } else { "Delete" },
        "ctx.align" => if ru { "Выровнять по сетке" } else { "Align to grid" },

        // ── Viewport hints ──────────────────────────────────
        "hint.select" => if ru { "Клик - выбрать объект" } else { "Click an object to select it" },
        "hint.move" => if ru {
            "Клик по земле - переместить, тяните стрелку - сдвиг по оси"
        } else {
            "Click the ground to place, drag an arrow to slide along its axis"
        },
        "hint.rotate" => if ru { "Тяните влево/вправо - поворот" } else { "Drag left/right to rotate" },
        "hint.scale" => if ru { "Тяните вверх/вниз - масштаб" } else { "Drag up/down to scale" },
        "hint.align" => if ru { "Клик по объекту - выровнять по сетке" } else { "Click an object to snap it to the grid" },
        "hint.select_first" => if ru { "Сначала выберите объект" } else { "Select an object first" },

        // ── Status bar ──────────────────────────────────────
        "status.objects" => if ru { "Объекты" } else { "Objects" },
        "status.mode" => if ru { "Режим" } else { "Mode" },
        "status.selected" => if ru { "Выбрано" } else { "Selected" },
        "status.ready" => if ru { "Готово" } else { "Ready" },
        "status.grid_hidden" => if ru { "Сетка скрыта" } else { "Grid hidden" },
        "status.nav_hint" => if ru {
            "СКМ / Alt+ЛКМ - вращение, ПКМ - панорама, колесо - масштаб"
        } else {
            "MMB / Alt+LMB: orbit, RMB: pan, wheel: zoom"
        },

        // ── Settings window ─────────────────────────────────
        "settings.title" => if ru { "Настройки" } else { "Settings" },
        "settings.grid" => if ru { "Сетка" } else { "Grid" },
        "settings.grid_visible" => if ru { "Показывать сетку" } else { "Show grid" },
        "settings.grid_size" => if ru { "Шаг сетки" } else { "Cell size" },
        "settings.grid_range" => if ru { "Размер сетки" } else { "Extent" },
        "settings.grid_opacity" => if ru { "Прозрачность" } else { "Opacity" },
        "settings.axes" => if ru { "Оси" } else { "Axes" },
        "settings.axes_labels" => if ru { "Подписи осей" } else { "Axis labels" },
        "settings.axes_length" => if ru { "Длина" } else { "Length" },
        "settings.axes_thickness" => if ru { "Толщина" } else { "Thickness" },
        "settings.viewport" => if ru { "Вьюпорт" } else { "Viewport" },
        "settings.bg_color" => if ru { "Цвет фона" } else { "Background" },
        "settings.sel_color" => if ru { "Цвет выделения" } else { "Selection color" },
        "settings.gizmo_size" => if ru { "Размер гизмо" } else { "Gizmo size" },
        "settings.ui" => if ru { "Интерфейс" } else { "Interface" },
        "settings.font_size" => if ru { "Размер шрифта" } else { "Font size" },
        "settings.reset" => if ru { "Сбросить" } else { "Reset to defaults" },
        "settings.close" => if ru { "Закрыть" } else { "Close" },

        _ => "???",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_keys() {
        set_language(Language::En);
        assert_eq!(t("toolbar.tools"), "Tools:");
        assert_eq!(t("no.such.key"), "???");
        assert_eq!(primitive_name(PrimitiveKind::Octahedron), "Octahedron");
    }
}
