//! End-to-end editor scenarios driven through the headless harness.

use egui::{Key, Modifiers};
use glam::Vec3;
use sceneforge_gui_lib::fixtures;
use sceneforge_gui_lib::harness::TestHarness;
use sceneforge_gui_lib::keymap::EditorCommand;
use sceneforge_gui_lib::toolbar::{ActionId, ViewControlId};
use sceneforge_gui_lib::tools::ClickOutcome;
use sceneforge_gui_lib::viewport::picking::Ray;
use shared::{Primitive, PrimitiveKind, TransformMode};

fn down(x: f32, z: f32) -> Ray {
    Ray {
        origin: Vec3::new(x, 10.0, z),
        direction: Vec3::NEG_Y,
    }
}

/// Structural checks that hold for every tessellated primitive
fn assert_mesh_sound(h: &TestHarness, id: &str) {
    let v = h.validate_mesh(id).expect("mesh built");
    assert!(v.is_stride_valid(), "{id}: vertex stride");
    assert!(v.is_index_stride_valid(), "{id}: index stride");
    assert!(v.are_indices_in_range(), "{id}: indices");
    assert!(v.are_values_finite(), "{id}: finite");
    assert!(v.triangle_count() > 0, "{id}: empty");
}

#[test]
fn test_every_primitive_builds() {
    let mut h = TestHarness::new();
    let ids: Vec<String> = PrimitiveKind::ALL.iter().map(|&k| h.add(k)).collect();
    h.build();
    assert_eq!(h.visible_mesh_count(), PrimitiveKind::ALL.len());
    for id in &ids {
        assert_mesh_sound(&h, id);
    }
}

#[test]
fn test_cube_dimensions_and_color() {
    let mut h = TestHarness::new();
    h.add_object(fixtures::cube("box", 2.0));
    h.build();

    let v = h.validate_mesh("box").unwrap();
    assert!(v.validate_all().is_empty(), "{:?}", v.validate_all());
    assert!(v.dimensions_approx([2.0, 2.0, 2.0], 1e-4));
    assert!(v.has_uniform_color([0.0, 1.0, 0.0]));
}

#[test]
fn test_pyramid_dimensions() {
    let mut h = TestHarness::new();
    let id = h.add(PrimitiveKind::Pyramid);
    h.build();
    assert!(h.validate_mesh(&id).unwrap().dimensions_approx([2.0, 1.5, 2.0], 1e-4));
}

#[test]
fn test_set_primitive_rebuilds_mesh() {
    let mut h = TestHarness::new();
    let id = h.add(PrimitiveKind::Cube);
    h.build();
    assert!(h.validate_mesh(&id).unwrap().dimensions_approx([1.0; 3], 1e-4));

    assert!(h.set_primitive(&id, Primitive::Cube { size: 3.0 }));
    h.build();
    assert!(h.validate_mesh(&id).unwrap().dimensions_approx([3.0; 3], 1e-4));
}

#[test]
fn test_hidden_objects_are_not_built() {
    let mut h = TestHarness::new();
    h.load_scene(fixtures::demo_scene());
    let first = h.add(PrimitiveKind::Cube);
    h.hide(&first);
    h.build();
    assert_eq!(h.object_count(), 9);
    assert_eq!(h.visible_mesh_count(), 8);
}

#[test]
fn test_undo_redo_add_and_delete() {
    let mut h = TestHarness::new();
    let id = h.add(PrimitiveKind::Sphere);
    assert!(h.delete(&id));
    assert_eq!(h.object_count(), 0);

    assert!(h.undo());
    assert_eq!(h.object_count(), 1);
    assert!(h.undo());
    assert_eq!(h.object_count(), 0);
    assert!(!h.undo());

    assert!(h.redo());
    assert!(h.object(&id).is_some());
}

#[test]
fn test_json_round_trip_keeps_objects() {
    let mut h = TestHarness::new();
    h.load_scene(fixtures::demo_scene());
    h.click_view_control(ViewControlId::Grid);
    let json = h.export_scene_json();

    let mut restored = TestHarness::new();
    restored.load_scene_json(&json).unwrap();
    assert_eq!(restored.object_count(), 8);
    assert!(!restored.grid_visible());
    assert_eq!(
        restored.object("plane").unwrap().transform.rotation,
        [-90.0, 0.0, 0.0]
    );
}

#[test]
fn test_load_invalid_json_keeps_scene() {
    let mut h = TestHarness::new();
    h.load_scene(fixtures::scene_single_cube());
    assert!(h.load_scene_json("{ not json").is_err());
    assert_eq!(h.object_count(), 1);
}

#[test]
fn test_toolbar_actions_follow_selection() {
    let mut h = TestHarness::new();
    h.load_scene(fixtures::scene_single_cube());
    assert!(!h.action_enabled(ActionId::Duplicate));
    h.click_action(ActionId::Duplicate);
    assert_eq!(h.object_count(), 1);

    assert!(h.select("cube"));
    assert!(h.action_enabled(ActionId::Delete));
    h.click_action(ActionId::Duplicate);
    assert_eq!(h.object_count(), 2);

    let copy = h.selected_id().unwrap().to_string();
    assert_ne!(copy, "cube");
    h.click_action(ActionId::Delete);
    assert_eq!(h.object_count(), 1);
    assert!(h.selected_id().is_none());
    assert!(h.object("cube").is_some());
}

#[test]
fn test_status_readout_tracks_tool() {
    let mut h = TestHarness::new();
    h.load_scene(fixtures::scene_single_cube());
    assert!(h.status_readout().is_none());

    h.select("cube");
    h.click_tool(TransformMode::Scale);
    let readout = h.status_readout().unwrap();
    assert_eq!(readout.object_label(), "Cube");
    assert_eq!(readout.mode_label(), "Scale");

    h.clear_selection();
    assert!(h.status_readout().is_none());
}

#[test]
fn test_keyboard_shortcuts() {
    let mut h = TestHarness::new();
    h.load_scene(fixtures::scene_single_cube());

    assert_eq!(
        h.press(Key::R, Modifiers::NONE),
        Some(EditorCommand::SetTool(TransformMode::Rotate))
    );
    assert_eq!(h.transform_mode(), TransformMode::Rotate);

    h.press(Key::G, Modifiers::SHIFT);
    assert!(!h.grid_visible());
    assert_eq!(h.transform_mode(), TransformMode::Rotate);

    h.select("cube");
    h.press(Key::D, Modifiers::COMMAND);
    assert_eq!(h.object_count(), 2);
    h.press(Key::Z, Modifiers::COMMAND);
    assert_eq!(h.object_count(), 1);

    h.press(Key::Escape, Modifiers::NONE);
    assert!(h.selected_id().is_none());
    assert_eq!(h.press(Key::Q, Modifiers::NONE), None);
}

#[test]
fn test_new_scene_via_confirm() {
    let mut h = TestHarness::new();
    h.load_scene(fixtures::demo_scene());

    assert!(!h.click_new_scene(false));
    assert_eq!(h.object_count(), 8);

    h.press(Key::N, Modifiers::COMMAND);
    h.answer_confirm(false);
    assert_eq!(h.object_count(), 8);

    h.press(Key::N, Modifiers::COMMAND);
    h.answer_confirm(true);
    assert_eq!(h.object_count(), 0);
}

#[test]
fn test_click_selects_and_deselects() {
    let mut h = TestHarness::new();
    h.add_object(fixtures::object_at("a", PrimitiveKind::Cube, [0.0, 0.5, 0.0]));
    h.add_object(fixtures::object_at("b", PrimitiveKind::Cube, [4.0, 0.5, 0.0]));

    assert_eq!(h.click_ray(down(4.1, 0.0)), ClickOutcome::Selected("b".into()));
    assert_eq!(h.selected_id(), Some("b"));
    assert_eq!(h.click_ray(down(-5.0, 5.0)), ClickOutcome::Deselected);
    assert!(h.selected_id().is_none());
}

#[test]
fn test_click_ignores_hidden_objects() {
    let mut h = TestHarness::new();
    let id = h.add_at(PrimitiveKind::Cube, [0.0, 0.5, 0.0]);
    h.hide(&id);
    assert_eq!(h.click_ray(down(0.0, 0.0)), ClickOutcome::Deselected);
}

#[test]
fn test_move_tool_places_selection() {
    let mut h = TestHarness::new();
    h.add_object(fixtures::object_at("a", PrimitiveKind::Sphere, [0.0, 1.0, 0.0]));
    h.select("a");
    h.click_tool(TransformMode::Move);

    assert_eq!(h.click_ray(down(2.0, -3.0)), ClickOutcome::Placed { x: 2.0, z: -3.0 });
    assert_eq!(h.object("a").unwrap().transform.position, [2.0, 1.0, -3.0]);

    assert!(h.undo());
    assert_eq!(h.object("a").unwrap().transform.position, [0.0, 1.0, 0.0]);
}

#[test]
fn test_align_tool_snaps_to_grid_and_ground() {
    let mut h = TestHarness::new();
    h.add_object(fixtures::object_at("a", PrimitiveKind::Cube, [1.2, 3.0, -0.9]));
    h.click_tool(TransformMode::Align);

    assert_eq!(h.click_ray(down(1.2, -0.9)), ClickOutcome::Aligned("a".into()));
    let pos = h.object("a").unwrap().transform.position;
    assert!((pos[0] - 1.0).abs() < 1e-9);
    assert!((pos[1] - 0.5).abs() < 1e-5);
    assert!((pos[2] + 1.0).abs() < 1e-9);
}

#[test]
fn test_drag_rotate_then_scale() {
    let mut h = TestHarness::new();
    h.load_scene(fixtures::scene_single_cube());

    h.click_tool(TransformMode::Rotate);
    h.drag(60.0, 0.0);
    assert_eq!(h.object("cube").unwrap().transform.rotation, [0.0; 3]);

    h.select("cube");
    h.drag(60.0, 0.0);
    assert!((h.object("cube").unwrap().transform.rotation[1] - 30.0).abs() < 1e-9);

    h.click_tool(TransformMode::Scale);
    h.drag(0.0, 50.0);
    let scale = h.object("cube").unwrap().transform.scale;
    assert!(scale[0] < 1.0);
    assert_eq!(scale[0], scale[1]);
    assert_eq!(scale[1], scale[2]);
}
