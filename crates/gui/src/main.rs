mod app;
pub mod i18n;
mod ui;
mod viewport;

// Re-export library modules so that `crate::build`, `crate::state`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use sceneforge_gui_lib::build;
pub use sceneforge_gui_lib::keymap;
pub use sceneforge_gui_lib::state;
pub use sceneforge_gui_lib::toolbar;
pub use sceneforge_gui_lib::tools;

use std::path::Path;

use app::EditorApp;
use sceneforge_gui_lib::state::SceneState;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sceneforge=info,sceneforge_gui_lib=info".into()),
        )
        .init();

    // Parse --scene <path> argument
    let initial_scene = parse_scene_arg();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("SceneForge 3D Editor")
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "sceneforge",
        native_options,
        Box::new(move |cc| Ok(Box::new(EditorApp::new(cc, initial_scene)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

fn parse_scene_arg() -> Option<shared::SceneDescription> {
    let args: Vec<String> = std::env::args().collect();
    let pos = args.iter().position(|a| a == "--scene")?;
    let Some(path) = args.get(pos + 1) else {
        tracing::error!("--scene requires a file path");
        return None;
    };
    match SceneState::load_from_file(Path::new(path)) {
        Ok(scene) => {
            tracing::info!("Loaded scene from {path} ({} objects)", scene.objects.len());
            Some(scene)
        }
        Err(e) => {
            tracing::error!("{e}");
            None
        }
    }
}
