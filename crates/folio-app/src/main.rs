//! Portfolio page entry point

use std::sync::Arc;
use std::time::Instant;
use anyhow::{Context as _, Result};
use eframe::egui::{self, Color32, Context, Margin, Vec2};
use tracing::info;

use folio_core::{NavConfig, NavSnapshot, NavigationEngine, NavigationSubscriber, SectionRegistry};
use folio_ui::{NavBar, Theme};

mod content;
mod page;

use page::Page;

/// Repaints the window whenever the navigation snapshot changes
struct RepaintOnChange {
    ctx: Context,
}

impl NavigationSubscriber for RepaintOnChange {
    fn on_navigation_change(&self, _snapshot: &NavSnapshot) {
        self.ctx.request_repaint();
    }
}

/// Main application state
struct PortfolioApp {
    engine: Arc<NavigationEngine>,

    /// Header navigation, the engine's render surface
    nav_bar: NavBar,

    /// The scrolling sections and their measured layout
    page: Page,

    /// Kept alive so the engine's weak reference stays valid
    _repaint: Arc<RepaintOnChange>,

    last_screen: Option<Vec2>,
    last_scroll: Option<f32>,
}

impl PortfolioApp {
    fn new(cc: &eframe::CreationContext<'_>, engine: Arc<NavigationEngine>) -> Self {
        folio_ui::apply_theme(&cc.egui_ctx, &Theme::default());

        let repaint = Arc::new(RepaintOnChange { ctx: cc.egui_ctx.clone() });
        engine.add_subscriber(repaint.clone());
        engine.mount(Instant::now());

        Self {
            nav_bar: NavBar::new(engine.clone()),
            page: Page::new(engine.registry().clone()),
            engine,
            _repaint: repaint,
            last_screen: None,
            last_scroll: None,
        }
    }

    fn header_frame(ctx: &Context, snapshot: &NavSnapshot) -> egui::Frame {
        let (fill, padding) = if snapshot.scrolled {
            (Color32::from_rgba_unmultiplied(255, 255, 255, 235), 10.0)
        } else {
            (ctx.style().visuals.panel_fill, 18.0)
        };

        egui::Frame::none()
            .fill(fill)
            .inner_margin(Margin::symmetric(24.0, padding))
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let screen = ctx.screen_rect().size();
        if self.last_screen != Some(screen) {
            self.engine.on_resize(screen.x, screen.y);
            self.last_screen = Some(screen);
        }

        let now = Instant::now();
        self.engine.poll_timers(now);
        if let Some(deadline) = self.engine.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }

        let snapshot = self.engine.snapshot();

        let mut nav = folio_ui::NavBarResponse::default();
        let mut dropdown_click = None;
        egui::TopBottomPanel::top("header")
            .frame(Self::header_frame(ctx, &snapshot))
            .show(ctx, |ui| {
                nav = self.nav_bar.ui(ui);
                dropdown_click = self.nav_bar.dropdown_ui(ui);
            });

        if let Some(id) = nav.clicked.or(dropdown_click) {
            self.page.scroll_to(&id);
        }
        if nav.home_clicked {
            self.page.scroll_to_top();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.page.ui(ui, &snapshot);
        });

        let scroll_y = self.page.scroll_y();
        if self.last_scroll != Some(scroll_y) {
            self.engine.on_scroll(scroll_y);
            self.last_scroll = Some(scroll_y);
        }

        // One layout measurement per frame
        self.engine.on_animation_frame(ctx.frame_nr(), self.page.layout());
    }
}

impl Drop for PortfolioApp {
    fn drop(&mut self) {
        self.engine.teardown();
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = match std::env::args().nth(1) {
        Some(path) => NavConfig::load(&path)
            .with_context(|| format!("Failed to load navigation config from {}", path))?,
        None => NavConfig::default(),
    };

    let engine = Arc::new(NavigationEngine::new(
        Arc::new(SectionRegistry::portfolio()),
        config,
    )?);

    info!("Starting portfolio with {:?} navigation", engine.strategy());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Saron Portfolio",
        options,
        Box::new(move |cc| Box::new(PortfolioApp::new(cc, engine))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
