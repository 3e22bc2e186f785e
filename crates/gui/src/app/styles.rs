//! Application style configuration

use eframe::egui;
use egui::Color32;

/// Slate panel background
const PANEL: Color32 = Color32::from_rgb(15, 23, 42);
/// Slightly lighter slate for windows and inactive widgets
const WINDOW: Color32 = Color32::from_rgb(30, 41, 59);
const WIDGET: Color32 = Color32::from_rgb(30, 41, 59);
const WIDGET_HOVER: Color32 = Color32::from_rgb(51, 65, 85);
/// Purple selection / accent
const ACCENT: Color32 = Color32::from_rgb(147, 51, 234);

/// Configure initial application styles with given font size
pub fn configure_styles(ctx: &egui::Context, font_size: f32) {
    let mut style = (*ctx.style()).clone();

    // Dark theme
    style.visuals = egui::Visuals::dark();

    // Rounding
    let rounded = egui::CornerRadius::same(6);
    style.visuals.window_corner_radius = rounded;
    style.visuals.menu_corner_radius = egui::CornerRadius::same(4);
    for widget in [
        &mut style.visuals.widgets.noninteractive,
        &mut style.visuals.widgets.inactive,
        &mut style.visuals.widgets.hovered,
        &mut style.visuals.widgets.active,
    ] {
        widget.corner_radius = rounded;
    }

    // Spacing
    style.spacing.item_spacing = egui::vec2(6.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    style.spacing.menu_margin = egui::Margin::same(4);

    style.visuals.panel_fill = PANEL;
    style.visuals.window_fill = WINDOW;
    style.visuals.widgets.inactive.weak_bg_fill = WIDGET;
    style.visuals.widgets.inactive.bg_fill = WIDGET;
    style.visuals.widgets.hovered.weak_bg_fill = WIDGET_HOVER;
    style.visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, ACCENT.gamma_multiply(0.6));

    style.visuals.selection.bg_fill = ACCENT.gamma_multiply(0.7);

    apply_text_styles(&mut style, font_size);

    ctx.set_style(style);
}

/// Apply font size to all text styles
pub fn apply_font_size(ctx: &egui::Context, font_size: f32) {
    let mut style = (*ctx.style()).clone();
    apply_text_styles(&mut style, font_size);
    ctx.set_style(style);
}

fn apply_text_styles(style: &mut egui::Style, font_size: f32) {
    let sizes = [
        (egui::TextStyle::Body, egui::FontId::proportional(font_size)),
        (egui::TextStyle::Button, egui::FontId::proportional(font_size)),
        (egui::TextStyle::Small, egui::FontId::proportional(font_size * 0.85)),
        (egui::TextStyle::Heading, egui::FontId::proportional(font_size * 1.3)),
        (egui::TextStyle::Monospace, egui::FontId::monospace(font_size)),
    ];
    style.text_styles.extend(sizes);
}
