//! The scrolling page
//!
//! Renders the sections top to bottom and measures each one in document
//! coordinates while doing so. The measurement is the layout the engine
//! samples at the end of the frame.

use std::sync::Arc;
use egui::{Id, ProgressBar, RichText, ScrollArea, Ui};
use folio_core::{
    DocumentLayout, LayoutSnapshot, NavSnapshot, Section, SectionBounds, SectionId, SectionRegistry,
    ViewportMetrics,
};
use folio_ui::theme;
use tracing::debug;

use crate::content::PORTFOLIO;

pub struct Page {
    registry: Arc<SectionRegistry>,
    layout: LayoutSnapshot,
    /// Scroll offset to jump to on the next frame
    pending_offset: Option<f32>,
}

impl Page {
    pub fn new(registry: Arc<SectionRegistry>) -> Self {
        Self {
            registry,
            layout: LayoutSnapshot::default(),
            pending_offset: None,
        }
    }

    /// Layout measured during the last `ui` call
    pub fn layout(&self) -> &LayoutSnapshot {
        &self.layout
    }

    pub fn scroll_y(&self) -> f32 {
        self.layout.metrics.scroll_y
    }

    pub fn scroll_to(&mut self, id: &SectionId) {
        match self.layout.section_bounds(id) {
            Some(bounds) => self.pending_offset = Some(bounds.top),
            None => debug!("Section {} not measured yet, not scrolling", id),
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.pending_offset = Some(0.0);
    }

    pub fn ui(&mut self, ui: &mut Ui, snapshot: &NavSnapshot) {
        let viewport_height = ui.available_height();
        let registry = self.registry.clone();

        let mut area = ScrollArea::vertical()
            .id_source("page")
            .auto_shrink([false, false]);
        if let Some(offset) = self.pending_offset.take() {
            area = area.vertical_scroll_offset(offset);
        }

        let output = area.show(ui, |ui| {
            let origin = ui.min_rect().top();
            let mut measured = Vec::with_capacity(registry.len());

            for section in registry.sections() {
                let revealed = snapshot.revealed.contains(&section.id);
                let fade = ui
                    .ctx()
                    .animate_bool_with_time(Id::new(("reveal", section.id.as_str())), revealed, 1.0);

                let rect = ui
                    .vertical(|ui| {
                        ui.set_width(ui.available_width());
                        ui.set_min_height(min_height(section, viewport_height));
                        section_body(ui, section, fade);
                    })
                    .response
                    .rect;

                measured.push((section.id.clone(), SectionBounds::new(rect.top() - origin, rect.height())));
            }

            measured
        });

        let metrics = ViewportMetrics::new(
            output.state.offset.y,
            output.inner_rect.height(),
            output.content_size.y,
        );
        let mut layout = LayoutSnapshot::new(metrics);
        for (id, bounds) in output.inner {
            layout.set_section(id, bounds);
        }
        self.layout = layout;
    }
}

/// The hero fills the viewport; contact is only as tall as its content
fn min_height(section: &Section, viewport_height: f32) -> f32 {
    match section.id.as_str() {
        "home" => viewport_height,
        "contact" => 0.0,
        _ => viewport_height * 0.8,
    }
}

fn section_body(ui: &mut Ui, section: &Section, fade: f32) {
    let text = ui.visuals().text_color().linear_multiply(fade);
    let accent = theme::accent_color().linear_multiply(fade);

    ui.add_space(48.0);
    match section.id.as_str() {
        "home" => {
            ui.label(RichText::new(format!("Hi, I'm {}", PORTFOLIO.name)).size(44.0).strong().color(text));
            ui.label(RichText::new(PORTFOLIO.title).size(22.0).color(accent));
            ui.add_space(16.0);
            ui.label(RichText::new(PORTFOLIO.about).color(text));
        }
        "skills" => {
            ui.heading(RichText::new(&section.label).color(text));
            ui.add_space(16.0);
            for skill in PORTFOLIO.skills {
                ui.label(RichText::new(format!("{} · {}", skill.name, skill.category)).color(text));
                ui.add(
                    ProgressBar::new(f32::from(skill.level) / 100.0)
                        .text(format!("{}%", skill.level))
                        .desired_width(420.0),
                );
                ui.add_space(8.0);
            }
        }
        "projects" => {
            ui.heading(RichText::new(&section.label).color(text));
            ui.add_space(16.0);
            ui.label(RichText::new("No public projects yet.").color(text));
        }
        "experience" => {
            ui.heading(RichText::new(&section.label).color(text));
            ui.add_space(16.0);
            for entry in PORTFOLIO.experience {
                ui.label(RichText::new(entry.role).size(18.0).strong().color(text));
                ui.label(RichText::new(format!("{} · {}", entry.company, entry.period)).color(accent));
                ui.label(RichText::new(entry.description).color(text));
                ui.add_space(16.0);
            }
        }
        "contact" => {
            ui.heading(RichText::new(&section.label).color(text));
            ui.add_space(16.0);
            ui.label(RichText::new(format!("Email: {}", PORTFOLIO.email)).color(text));
            ui.label(RichText::new(format!("Location: {}", PORTFOLIO.location)).color(text));
            ui.add_space(32.0);
        }
        _ => {
            ui.heading(RichText::new(&section.label).color(text));
        }
    }
}
