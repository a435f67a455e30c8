use egui::{Context, Visuals, Style, Color32, Rounding, Stroke, FontId, FontFamily, TextStyle};
use std::collections::BTreeMap;

/// Theme configuration
pub struct Theme {
    pub name: String,
    pub dark_mode: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "Portfolio Light".to_string(),
            dark_mode: false,
        }
    }
}

/// Apply the page theme (light background, blue accent)
pub fn apply_theme(ctx: &Context, theme: &Theme) {
    let mut style = Style::default();
    let mut visuals = if theme.dark_mode { Visuals::dark() } else { Visuals::light() };

    let bg_color = Color32::WHITE;
    let panel_bg = Color32::from_rgb(249, 250, 251);
    let widget_bg = Color32::from_rgb(243, 244, 246);
    let hover_color = Color32::from_rgb(229, 231, 235);
    let text_color = Color32::from_rgb(55, 65, 81);

    if !theme.dark_mode {
        visuals.window_fill = bg_color;
        visuals.panel_fill = bg_color;
        visuals.extreme_bg_color = panel_bg;
        visuals.faint_bg_color = widget_bg;

        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, text_color);
        visuals.widgets.inactive.bg_fill = widget_bg;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text_color);
        visuals.widgets.hovered.bg_fill = hover_color;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, accent_color());
    }

    for widgets in [
        &mut visuals.widgets.noninteractive,
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
    ] {
        widgets.rounding = Rounding::same(6.0);
    }

    visuals.selection.bg_fill = accent_color().linear_multiply(0.25);
    visuals.selection.stroke = Stroke::new(1.0, accent_color());
    visuals.hyperlink_color = accent_color();

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);

    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(12.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(15.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(28.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(13.0, FontFamily::Monospace));
    style.text_styles = font_sizes;

    ctx.set_style(style);
    ctx.set_visuals(visuals);
}

/// Accent used for the logo, the pill and the selected label
pub fn accent_color() -> Color32 {
    Color32::from_rgb(37, 99, 235)
}

/// Colour of unselected nav labels
pub fn muted_text_color() -> Color32 {
    Color32::from_rgb(107, 114, 128)
}
