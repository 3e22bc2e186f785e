//! Toolbar model: static button descriptors and click handlers.
//!
//! Rendering lives in the binary (`ui::toolbar`); everything here only talks
//! to a [`SceneStore`], so it can be driven headlessly.

use shared::{SceneSettingsPatch, TransformMode};

use crate::state::store::SceneStore;

/// Two-stop accent gradient of a tool button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accent {
    pub from: [u8; 3],
    pub to: [u8; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolDescriptor {
    pub id: TransformMode,
    pub name: &'static str,
    pub icon: &'static str,
    pub shortcut: &'static str,
    pub accent: Option<Accent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionId {
    Duplicate,
    Delete,
}

impl ActionId {
    pub fn id(&self) -> &'static str {
        match self {
            ActionId::Duplicate => "duplicate",
            ActionId::Delete => "delete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionDescriptor {
    pub id: ActionId,
    pub name: &'static str,
    pub icon: &'static str,
    pub shortcut: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewControlId {
    Grid,
}

impl ViewControlId {
    pub fn id(&self) -> &'static str {
        match self {
            ViewControlId::Grid => "grid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewControlDescriptor {
    pub id: ViewControlId,
    pub name: &'static str,
    pub icon: &'static str,
    pub shortcut: &'static str,
}

pub const TOOLS: [ToolDescriptor; 5] = [
    ToolDescriptor {
        id: TransformMode::Select,
        name: "Select",
        icon: "🔍",
        shortcut: "V",
        accent: Some(Accent { from: [59, 130, 246], to: [37, 99, 235] }),
    },
    ToolDescriptor {
        id: TransformMode::Move,
        name: "Move (Click to Place)",
        icon: "↔",
        shortcut: "G",
        accent: Some(Accent { from: [34, 197, 94], to: [22, 163, 74] }),
    },
    ToolDescriptor {
        id: TransformMode::Rotate,
        name: "Rotate",
        icon: "🔄",
        shortcut: "R",
        accent: Some(Accent { from: [168, 85, 247], to: [147, 51, 234] }),
    },
    ToolDescriptor {
        id: TransformMode::Scale,
        name: "Scale",
        icon: "📏",
        shortcut: "S",
        accent: Some(Accent { from: [245, 158, 11], to: [217, 119, 6] }),
    },
    ToolDescriptor {
        id: TransformMode::Align,
        name: "Align",
        icon: "📐",
        shortcut: "A",
        accent: Some(Accent { from: [6, 182, 212], to: [8, 145, 178] }),
    },
];

pub const ACTIONS: [ActionDescriptor; 2] = [
    ActionDescriptor {
        id: ActionId::Duplicate,
        name: "Duplicate",
        icon: "📋",
        shortcut: "Ctrl+D",
    },
    ActionDescriptor {
        id: ActionId::Delete,
        name: "Delete",
        icon: "🗑",
        shortcut: "Del",
    },
];

pub const VIEW_CONTROLS: [ViewControlDescriptor; 1] = [ViewControlDescriptor {
    id: ViewControlId::Grid,
    name: "Toggle Grid",
    icon: "⊞",
    shortcut: "Shift+G",
}];

pub const NEW_SCENE_ICON: &str = "📄";
pub const NEW_SCENE_SHORTCUT: &str = "Ctrl+N";
pub const NEW_SCENE_PROMPT: &str = "Create new scene? This will clear all objects.";

/// Hover text: "Name (Shortcut)"
pub fn tooltip(name: &str, shortcut: &str) -> String {
    format!("{} ({})", name, shortcut)
}

pub fn tool(mode: TransformMode) -> &'static ToolDescriptor {
    TOOLS
        .iter()
        .find(|t| t.id == mode)
        .unwrap_or(&TOOLS[0])
}

/// Make `mode` the active transform tool
pub fn handle_tool_click(store: &mut impl SceneStore, mode: TransformMode) {
    store.set_transform_mode(mode);
    tracing::info!("Tool selected: {}", mode);
}

/// Whether an action button is clickable
pub fn action_enabled(store: &impl SceneStore, action: ActionId) -> bool {
    match action {
        ActionId::Duplicate | ActionId::Delete => store.selected_object().is_some(),
    }
}

pub fn handle_action_click(store: &mut impl SceneStore, action: ActionId) {
    if !action_enabled(store, action) {
        tracing::debug!("Action {} ignored: nothing selected", action.id());
        return;
    }
    match action {
        ActionId::Duplicate => {
            store.duplicate_object();
            tracing::info!("Object duplicated");
        }
        ActionId::Delete => {
            store.delete_selected_object();
            tracing::info!("Object deleted");
        }
    }
}

/// Whether a view control is currently switched on
pub fn view_control_active(store: &impl SceneStore, control: ViewControlId) -> bool {
    match control {
        ViewControlId::Grid => store.scene().settings.grid_visible,
    }
}

pub fn handle_view_control_click(store: &mut impl SceneStore, control: ViewControlId) {
    match control {
        ViewControlId::Grid => {
            let visible = !store.scene().settings.grid_visible;
            store.update_scene_settings(SceneSettingsPatch::grid_visible(visible));
            tracing::info!("Grid {}", if visible { "enabled" } else { "disabled" });
        }
    }
}

/// Clear the scene if `confirm` accepts. Returns whether the scene was cleared.
pub fn handle_new_scene(store: &mut impl SceneStore, confirm: impl FnOnce() -> bool) -> bool {
    if !confirm() {
        return false;
    }
    store.clear_scene();
    tracing::info!("Scene cleared");
    true
}

/// Status line shown while an object is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusReadout {
    pub object_type: &'static str,
    pub mode: TransformMode,
}

impl StatusReadout {
    /// Object type with a capital first letter ("Cube")
    pub fn object_label(&self) -> String {
        capitalize(self.object_type)
    }

    pub fn mode_label(&self) -> &'static str {
        self.mode.label()
    }
}

impl std::fmt::Display for StatusReadout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Selected: {}  Mode: {}  Press Esc to deselect",
            self.object_label(),
            self.mode_label()
        )
    }
}

pub fn status_readout(store: &impl SceneStore) -> Option<StatusReadout> {
    store.selected_object().map(|object| StatusReadout {
        object_type: object.object_type(),
        mode: store.transform_mode(),
    })
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
