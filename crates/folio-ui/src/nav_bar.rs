//! Navigation bar
//!
//! Paints one button per registry section, reports each button's
//! geometry to the engine every frame, and slides a pill toward the
//! indicator rectangle the engine holds. Interpolation lives here only;
//! the engine's output is a discrete rectangle.

use std::sync::Arc;
use egui::{Align2, Color32, FontId, Id, Rect, Response, RichText, Rounding, Sense, Ui, Vec2, pos2, vec2};
use folio_core::{ButtonRect, IndicatorRect, NavLayout, NavSnapshot, NavigationEngine, Section, SectionId};
use tracing::debug;

use crate::theme;

/// Navigation bar configuration
#[derive(Debug, Clone)]
pub struct NavBarConfig {
    /// Label font size
    pub font_size: f32,

    /// Horizontal padding on each side of a label
    pub button_padding: f32,

    /// Height of a nav button
    pub button_height: f32,

    /// Gap between desktop buttons
    pub spacing: f32,

    /// Seconds the pill takes to reach a new target
    pub animation_time: f32,

    pub pill_color: Color32,
    pub text_color: Color32,
    pub active_text_color: Color32,

    /// Text of the logo at the left of the bar
    pub logo_text: String,
}

impl Default for NavBarConfig {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            button_padding: 14.0,
            button_height: 32.0,
            spacing: 8.0,
            animation_time: 0.3,
            pill_color: theme::accent_color().linear_multiply(0.12),
            text_color: theme::muted_text_color(),
            active_text_color: theme::accent_color(),
            logo_text: "Saron Portfolio".to_string(),
        }
    }
}

/// What the user did with the bar this frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavBarResponse {
    /// Section whose button was clicked; the page should scroll to it
    pub clicked: Option<SectionId>,
    /// Logo clicked; the page should scroll to the top
    pub home_clicked: bool,
}

/// Navigation bar widget
pub struct NavBar {
    /// Navigation engine
    engine: Arc<NavigationEngine>,

    config: NavBarConfig,

    id: Id,

    /// Last visible target, held while the pill fades out
    last_target: Option<IndicatorRect>,
}

impl NavBar {
    /// Create a new navigation bar
    pub fn new(engine: Arc<NavigationEngine>) -> Self {
        Self {
            engine,
            config: NavBarConfig::default(),
            id: Id::new("folio_nav_bar"),
            last_target: None,
        }
    }

    /// Set configuration
    pub fn with_config(mut self, config: NavBarConfig) -> Self {
        self.config = config;
        self
    }

    pub fn engine(&self) -> &Arc<NavigationEngine> {
        &self.engine
    }

    /// Header row: logo, then the desktop buttons or the mobile menu toggle
    pub fn ui(&mut self, ui: &mut Ui) -> NavBarResponse {
        let snapshot = self.engine.snapshot();
        let mut response = NavBarResponse::default();

        ui.horizontal(|ui| {
            ui.set_min_height(self.config.button_height);

            if self.logo(ui).clicked() {
                self.engine.notify_home_click();
                response.home_clicked = true;
            }

            match snapshot.layout {
                NavLayout::Desktop => {
                    response.clicked = self.desktop_buttons(ui);
                }
                NavLayout::Mobile => self.menu_toggle(ui, &snapshot),
            }
        });

        response
    }

    /// Dropdown list shown below the header while the mobile menu is open
    pub fn dropdown_ui(&mut self, ui: &mut Ui) -> Option<SectionId> {
        let snapshot = self.engine.snapshot();
        if snapshot.layout != NavLayout::Mobile || !snapshot.menu_open {
            return None;
        }

        let registry = self.engine.registry().clone();
        let font = FontId::proportional(self.config.font_size + 2.0);
        let origin = ui.max_rect().left();
        let row_size = vec2(ui.available_width(), self.config.button_height + 8.0);

        let mut rows = Vec::with_capacity(registry.len());
        ui.vertical(|ui| {
            for section in registry.sections() {
                let (rect, response) = ui.allocate_exact_size(row_size, Sense::click());
                self.engine
                    .report_button(section.id.clone(), ButtonRect::new(rect.left() - origin, rect.width()));
                rows.push((section, rect, response));
            }
        });

        let active = self.engine.active_section();
        if let Some((_, band, _)) = rows.iter().find(|(section, _, _)| section.id == active) {
            self.paint_pill(ui, *band, origin);
        }

        let clicked = self.paint_labels(ui, &rows, &active, &font, Align2::LEFT_CENTER);
        if let Some(id) = &clicked {
            self.engine.notify_navigation_click(id.as_str());
        }
        clicked
    }

    fn logo(&self, ui: &mut Ui) -> Response {
        let text = RichText::new(&self.config.logo_text)
            .size(22.0)
            .strong()
            .color(theme::accent_color());
        ui.add(egui::Label::new(text).sense(Sense::click()))
            .on_hover_cursor(egui::CursorIcon::PointingHand)
    }

    fn desktop_buttons(&mut self, ui: &mut Ui) -> Option<SectionId> {
        let registry = self.engine.registry().clone();
        let font = FontId::proportional(self.config.font_size);

        let sizes: Vec<Vec2> = registry
            .sections()
            .map(|section| self.button_size(ui, &section.label, &font))
            .collect();
        let total = sizes.iter().map(|size| size.x).sum::<f32>()
            + self.config.spacing * sizes.len().saturating_sub(1) as f32;

        // Push the buttons to the right edge
        ui.add_space((ui.available_width() - total).max(0.0));
        ui.spacing_mut().item_spacing.x = self.config.spacing;

        let origin = ui.cursor().left();
        let mut buttons = Vec::with_capacity(sizes.len());
        for (section, size) in registry.sections().zip(sizes) {
            let (rect, response) = ui.allocate_exact_size(size, Sense::click());
            self.engine
                .report_button(section.id.clone(), ButtonRect::new(rect.left() - origin, rect.width()));
            buttons.push((section, rect, response));
        }

        let row = buttons.iter().map(|(_, rect, _)| *rect).reduce(|a, b| a.union(b));
        if let Some(row) = row {
            self.paint_pill(ui, row, origin);
        }

        let active = self.engine.active_section();
        let clicked = self.paint_labels(ui, &buttons, &active, &font, Align2::CENTER_CENTER);
        if let Some(id) = &clicked {
            self.engine.notify_navigation_click(id.as_str());
        }
        clicked
    }

    fn menu_toggle(&self, ui: &mut Ui, snapshot: &NavSnapshot) {
        let icon = if snapshot.menu_open { "✕" } else { "☰" };
        ui.add_space((ui.available_width() - self.config.button_height).max(0.0));

        let toggle = ui.add(egui::Button::new(RichText::new(icon).size(20.0)).frame(false));
        if toggle.clicked() {
            debug!("Mobile menu toggled");
            self.engine.toggle_menu();
        }
    }

    fn button_size(&self, ui: &Ui, label: &str, font: &FontId) -> Vec2 {
        let galley = ui
            .painter()
            .layout_no_wrap(label.to_string(), font.clone(), self.config.text_color);
        vec2(galley.size().x + self.config.button_padding * 2.0, self.config.button_height)
    }

    /// Draw the labels over the pill; returns the clicked section
    fn paint_labels(
        &self,
        ui: &Ui,
        buttons: &[(&Section, Rect, Response)],
        active: &SectionId,
        font: &FontId,
        align: Align2,
    ) -> Option<SectionId> {
        let mut clicked = None;

        for (section, rect, response) in buttons {
            let color = if &section.id == active {
                self.config.active_text_color
            } else if response.hovered() {
                theme::accent_color()
            } else {
                self.config.text_color
            };

            let anchor = if align == Align2::LEFT_CENTER {
                pos2(rect.left() + self.config.button_padding, rect.center().y)
            } else {
                rect.center()
            };
            ui.painter().text(anchor, align, &section.label, font.clone(), color);

            if response.clicked() {
                clicked = Some(section.id.clone());
            }
        }

        clicked
    }

    /// Slide the pill toward the engine's indicator within `band`
    fn paint_pill(&mut self, ui: &Ui, band: Rect, origin: f32) {
        let target = self.engine.indicator();
        if target.visible {
            self.last_target = Some(target);
        }
        let Some(shown_target) = self.last_target else {
            return;
        };

        let ctx = ui.ctx();
        let time = self.config.animation_time;
        let opacity = ctx.animate_bool_with_time(self.id.with("pill_shown"), target.visible, time);
        if opacity <= 0.0 {
            return;
        }

        let left = ctx.animate_value_with_time(self.id.with("pill_left"), shown_target.left, time);
        let width = ctx.animate_value_with_time(self.id.with("pill_width"), shown_target.width, time);
        let top = ctx.animate_value_with_time(self.id.with("pill_top"), band.top(), time);

        let rect = pill_rect(origin, top, band.height(), left, width);
        ui.painter().rect_filled(
            rect,
            Rounding::same(rect.height() / 2.0),
            self.config.pill_color.linear_multiply(opacity),
        );
    }
}

/// Screen rectangle of the pill for an interpolated indicator position
fn pill_rect(origin: f32, top: f32, height: f32, left: f32, width: f32) -> Rect {
    Rect::from_min_size(pos2(origin + left, top), vec2(width.max(0.0), height))
}
