//! Navigation engine implementation

use std::sync::{Arc, Weak};
use std::time::Instant;
use parking_lot::RwLock;
use tracing::{debug, info, trace, warn};

use super::{NavSnapshot, NavigationSubscriber};
use crate::config::{NavConfig, ObserverStrategy};
use crate::error::Result;
use crate::events::{NavEvent, NavLayout};
use crate::indicator::{ButtonRect, IndicatorRect, IndicatorTracker};
use crate::layout::DocumentLayout;
use crate::observer::{IntersectionEntry, ViewportObserver};
use crate::registry::{SectionId, SectionRegistry};
use crate::resolver::ActiveSectionResolver;
use crate::reveal::RevealTracker;

/// Navigation state stored internally
struct EngineState {
    config: NavConfig,
    observer: ViewportObserver,
    resolver: ActiveSectionResolver,
    indicator: IndicatorTracker,
    reveal: RevealTracker,
    scrolled: bool,
    menu_open: bool,
    layout: NavLayout,
    settle_deadline: Option<Instant>,
    torn_down: bool,
    /// Last snapshot handed to subscribers
    published: NavSnapshot,
}

impl EngineState {
    fn snapshot(&self, registry: &SectionRegistry) -> NavSnapshot {
        NavSnapshot {
            active: self.resolver.active().clone(),
            indicator: self.indicator.current(),
            scrolled: self.scrolled,
            menu_open: self.menu_open,
            layout: self.layout,
            revealed: registry
                .sections()
                .filter(|section| self.reveal.is_revealed(section.id.as_str()))
                .map(|section| section.id.clone())
                .collect(),
        }
    }

    fn refresh_indicator(&mut self) {
        self.indicator.recompute(self.resolver.active());
    }

    fn set_scroll(&mut self, scroll_y: f32) {
        self.scrolled = scroll_y > self.config.scrolled_threshold;
    }

    fn close_menu(&mut self) {
        self.menu_open = false;
        // The dropdown's buttons disappear with it
        if self.layout == NavLayout::Mobile {
            self.indicator.clear_buttons();
        }
    }

    fn swap_layout(&mut self, layout: NavLayout) {
        if layout == self.layout {
            return;
        }
        debug!("Nav layout {:?} -> {:?}", self.layout, layout);
        self.layout = layout;
        self.menu_open = false;
        self.indicator.clear_buttons();
    }
}

/// The main navigation engine
///
/// Inputs take `&self` so the engine can be shared between the layout
/// host and the render surface behind an `Arc`. Every input is applied
/// under one write lock, so concurrent inputs resolve as last write wins.
pub struct NavigationEngine {
    registry: Arc<SectionRegistry>,
    state: Arc<RwLock<EngineState>>,
    subscribers: Arc<RwLock<Vec<Weak<dyn NavigationSubscriber>>>>,
}

impl NavigationEngine {
    /// Create an engine for `registry`, validating `config`
    pub fn new(registry: Arc<SectionRegistry>, config: NavConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(registry, config))
    }

    /// Engine over the portfolio sections with default settings
    pub fn portfolio() -> Self {
        Self::build(Arc::new(SectionRegistry::portfolio()), NavConfig::default())
    }

    fn build(registry: Arc<SectionRegistry>, config: NavConfig) -> Self {
        info!(
            "Navigation engine over {} sections using {:?} strategy",
            registry.len(),
            config.strategy
        );

        let mut state = EngineState {
            observer: ViewportObserver::new(registry.clone(), &config),
            resolver: ActiveSectionResolver::new(registry.clone()),
            indicator: IndicatorTracker::new(),
            reveal: RevealTracker::new(config.reveal_threshold),
            scrolled: false,
            menu_open: false,
            layout: NavLayout::Desktop,
            settle_deadline: None,
            torn_down: false,
            published: NavSnapshot {
                active: registry.first().id.clone(),
                indicator: IndicatorRect::HIDDEN,
                scrolled: false,
                menu_open: false,
                layout: NavLayout::Desktop,
                revealed: Vec::new(),
            },
            config,
        };
        state.published = state.snapshot(&registry);

        Self {
            registry,
            state: Arc::new(RwLock::new(state)),
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Apply one input and push the new snapshot if it changed
    fn update(&self, apply: impl FnOnce(&mut EngineState)) {
        let mut state = self.state.write();
        if state.torn_down {
            trace!("Ignoring navigation input after teardown");
            return;
        }

        apply(&mut *state);

        let snapshot = state.snapshot(&self.registry);
        if snapshot == state.published {
            return;
        }
        state.published = snapshot.clone();
        drop(state);

        self.notify_subscribers(&snapshot);
    }

    /// Dispatch an inbound event
    pub fn handle(&self, event: NavEvent) {
        match event {
            NavEvent::Scroll { y } => self.on_scroll(y),
            NavEvent::Resize { width, height } => self.on_resize(width, height),
            NavEvent::LayoutChanged => self.on_layout_change(),
            NavEvent::Intersection(entries) => self.on_intersection(entries),
            NavEvent::NavigationClick(id) => self.notify_navigation_click(id.as_str()),
            NavEvent::HomeClick => self.notify_home_click(),
            NavEvent::MenuToggled => self.toggle_menu(),
            NavEvent::ButtonMounted { id, rect } => self.report_button(id, rect),
            NavEvent::ButtonUnmounted(id) => self.forget_button(id.as_str()),
            NavEvent::LayoutSwapped(layout) => self.swap_layout(layout),
        }
    }

    /// User clicked a navigation button
    ///
    /// The section becomes active before this returns, and the next
    /// observer tick cannot override it.
    pub fn notify_navigation_click(&self, id: &str) {
        self.update(|state| {
            state.resolver.click(id);
            if state.menu_open {
                state.close_menu();
            }
            state.observer.mark_dirty();
            state.refresh_indicator();
        });
    }

    /// User clicked the logo: back to the top section
    pub fn notify_home_click(&self) {
        let first = self.registry.first().id.clone();
        self.notify_navigation_click(first.as_str());
    }

    pub fn on_scroll(&self, scroll_y: f32) {
        self.update(|state| {
            state.observer.mark_dirty();
            state.set_scroll(scroll_y);
        });
    }

    pub fn on_resize(&self, width: f32, height: f32) {
        self.update(|state| {
            trace!("Viewport resized to {}x{}", width, height);
            state.observer.mark_dirty();
            let layout = NavLayout::for_width(width, state.config.mobile_breakpoint);
            state.swap_layout(layout);
            state.refresh_indicator();
        });
    }

    /// Fonts loaded or content reflowed
    pub fn on_layout_change(&self) {
        self.update(|state| {
            state.observer.mark_dirty();
            state.refresh_indicator();
        });
    }

    /// Host-reported membership changes, applied on the next frame
    pub fn on_intersection(&self, entries: Vec<IntersectionEntry>) {
        self.update(|state| state.observer.on_intersection(entries));
    }

    /// The render surface laid out a nav button
    pub fn report_button(&self, id: impl Into<SectionId>, rect: ButtonRect) {
        let id = id.into();
        self.update(|state| {
            if state.indicator.report_button(id, rect) {
                state.refresh_indicator();
            }
        });
    }

    /// The render surface stopped rendering a nav button
    pub fn forget_button(&self, id: &str) {
        self.update(|state| {
            if state.indicator.forget_button(id) {
                state.refresh_indicator();
            }
        });
    }

    pub fn swap_layout(&self, layout: NavLayout) {
        self.update(|state| {
            state.swap_layout(layout);
            state.refresh_indicator();
        });
    }

    /// Open or close the mobile dropdown
    pub fn toggle_menu(&self) {
        self.update(|state| {
            if state.menu_open {
                state.close_menu();
            } else {
                state.menu_open = true;
            }
            state.refresh_indicator();
        });
    }

    /// Run the frame-bound observation for `frame`
    ///
    /// Call once per animation frame. Scroll and layout inputs received
    /// since the previous frame are measured here, at most once.
    pub fn on_animation_frame(&self, frame: u64, layout: &dyn DocumentLayout) {
        self.update(|state| {
            let Some(sample) = state.observer.sample(frame, layout) else {
                return;
            };

            state.set_scroll(sample.metrics.scroll_y);
            if state.resolver.observe(sample.candidate.as_ref(), frame) {
                state.refresh_indicator();
            }
            state.reveal.update(&sample.metrics, &sample.measured);
        });
    }

    /// The render surface was mounted; arms the one-shot settle recomputation
    pub fn mount(&self, now: Instant) {
        self.update(|state| {
            state.settle_deadline = Some(now + state.config.settle_delay());
            state.observer.mark_dirty();
            state.refresh_indicator();
        });
    }

    /// Fire timers that are due at `now`
    pub fn poll_timers(&self, now: Instant) {
        self.update(|state| {
            if let Some(deadline) = state.settle_deadline {
                if now >= deadline {
                    debug!("Settle timer fired, recomputing indicator");
                    state.settle_deadline = None;
                    state.observer.mark_dirty();
                    state.refresh_indicator();
                }
            }
        });
    }

    /// When the host should next call [`Self::poll_timers`]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.state.read().settle_deadline
    }

    /// Release subscribers and cancel timers; later inputs are ignored
    pub fn teardown(&self) {
        let mut state = self.state.write();
        if state.torn_down {
            return;
        }
        state.torn_down = true;
        state.settle_deadline = None;
        state.indicator.clear_buttons();
        drop(state);

        self.subscribers.write().clear();
        info!("Navigation engine torn down");
    }

    pub fn is_torn_down(&self) -> bool {
        self.state.read().torn_down
    }

    /// Current navigation snapshot
    pub fn snapshot(&self) -> NavSnapshot {
        self.state.read().published.clone()
    }

    pub fn active_section(&self) -> SectionId {
        self.state.read().resolver.active().clone()
    }

    pub fn indicator(&self) -> IndicatorRect {
        self.state.read().indicator.current()
    }

    /// Rectangle the tracker would produce right now, without storing it
    pub fn compute_indicator(&self) -> IndicatorRect {
        let state = self.state.read();
        state.indicator.compute(state.resolver.active())
    }

    pub fn strategy(&self) -> ObserverStrategy {
        self.state.read().observer.strategy()
    }

    pub fn registry(&self) -> &Arc<SectionRegistry> {
        &self.registry
    }

    /// Add a subscriber
    ///
    /// Only a weak reference is kept; dropping the last `Arc` unsubscribes.
    pub fn add_subscriber(&self, subscriber: Arc<dyn NavigationSubscriber>) {
        if self.is_torn_down() {
            warn!("Subscriber added after teardown is ignored");
            return;
        }
        let mut subscribers = self.subscribers.write();
        subscribers.push(Arc::downgrade(&subscriber));
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .read()
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    /// Notify all subscribers of a navigation change
    fn notify_subscribers(&self, snapshot: &NavSnapshot) {
        let live: Vec<Arc<dyn NavigationSubscriber>> = {
            let mut subscribers = self.subscribers.write();

            // Remove any dead weak references
            subscribers.retain(|weak| weak.strong_count() > 0);
            subscribers.iter().filter_map(Weak::upgrade).collect()
        };

        for subscriber in live {
            subscriber.on_navigation_change(snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{LayoutSnapshot, ViewportMetrics};
    use parking_lot::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<NavSnapshot>>,
    }

    impl NavigationSubscriber for Recorder {
        fn on_navigation_change(&self, snapshot: &NavSnapshot) {
            self.seen.lock().push(snapshot.clone());
        }
    }

    impl Recorder {
        fn count(&self) -> usize {
            self.seen.lock().len()
        }

        fn last(&self) -> Option<NavSnapshot> {
            self.seen.lock().last().cloned()
        }
    }

    /// 5000px document, 800px viewport, contact too short to reach the spy-line
    fn page(scroll_y: f32) -> LayoutSnapshot {
        LayoutSnapshot::new(ViewportMetrics::new(scroll_y, 800.0, 5000.0))
            .with_section("home", 0.0, 1000.0)
            .with_section("skills", 1000.0, 1000.0)
            .with_section("projects", 2000.0, 1000.0)
            .with_section("experience", 3000.0, 1700.0)
            .with_section("contact", 4700.0, 300.0)
    }

    fn mount_buttons(engine: &NavigationEngine) {
        let widths = [48.0, 52.0, 70.0, 88.0, 64.0];
        let mut left = 0.0;
        for (section, width) in engine.registry().sections().zip(widths) {
            engine.report_button(section.id.clone(), ButtonRect::new(left, width));
            left += width + 32.0;
        }
    }

    /// Drives scroll + frame the way a host would
    struct Host<'a> {
        engine: &'a NavigationEngine,
        frame: u64,
    }

    impl<'a> Host<'a> {
        fn new(engine: &'a NavigationEngine) -> Self {
            Self { engine, frame: 0 }
        }

        fn scroll_to(&mut self, y: f32) {
            self.engine.on_scroll(y);
            self.frame();
            self.frame_at(y);
        }

        fn frame(&mut self) {
            self.frame += 1;
        }

        fn frame_at(&mut self, y: f32) {
            self.engine.on_animation_frame(self.frame, &page(y));
        }
    }

    #[test]
    fn test_initial_state_is_first_section() {
        let engine = NavigationEngine::portfolio();

        assert_eq!(engine.active_section().as_str(), "home");
        assert!(!engine.indicator().visible);

        let mut host = Host::new(&engine);
        host.scroll_to(0.0);
        assert_eq!(engine.active_section().as_str(), "home");
    }

    #[test]
    fn test_top_of_page_is_first_section_when_it_is_short() {
        let engine = NavigationEngine::portfolio();
        // Home ends above the 80px spy-line
        let short_home = |scroll_y: f32| {
            LayoutSnapshot::new(ViewportMetrics::new(scroll_y, 800.0, 5000.0))
                .with_section("home", 0.0, 60.0)
                .with_section("skills", 60.0, 1000.0)
                .with_section("projects", 1060.0, 1000.0)
        };

        engine.on_scroll(0.0);
        engine.on_animation_frame(1, &short_home(0.0));
        assert_eq!(engine.active_section().as_str(), "home");

        engine.on_scroll(200.0);
        engine.on_animation_frame(2, &short_home(200.0));
        assert_eq!(engine.active_section().as_str(), "skills");

        engine.on_scroll(0.0);
        engine.on_animation_frame(3, &short_home(0.0));
        assert_eq!(engine.active_section().as_str(), "home");
    }

    #[test]
    fn test_scroll_tracks_sections() {
        let engine = NavigationEngine::portfolio();
        let mut host = Host::new(&engine);

        host.scroll_to(1500.0);
        assert_eq!(engine.active_section().as_str(), "skills");
        host.scroll_to(2100.0);
        assert_eq!(engine.active_section().as_str(), "projects");
        host.scroll_to(3300.0);
        assert_eq!(engine.active_section().as_str(), "experience");
        host.scroll_to(0.0);
        assert_eq!(engine.active_section().as_str(), "home");
    }

    #[test]
    fn test_bottom_of_page_selects_last_section() {
        let engine = NavigationEngine::portfolio();
        let mut host = Host::new(&engine);

        host.scroll_to(500.0);
        // 4990 + 800 >= 5000 - 20 with a prior offset past 100
        host.scroll_to(4990.0);
        assert_eq!(engine.active_section().as_str(), "contact");
    }

    #[test]
    fn test_click_is_synchronous_and_survives_stale_sample() {
        let engine = NavigationEngine::portfolio();
        let mut host = Host::new(&engine);
        host.scroll_to(1500.0);

        engine.notify_navigation_click("contact");
        assert_eq!(engine.active_section().as_str(), "contact");

        // Frame measured before the page jumped
        host.frame();
        host.frame_at(1500.0);
        assert_eq!(engine.active_section().as_str(), "contact");

        // Page reached the target
        host.scroll_to(4990.0);
        assert_eq!(engine.active_section().as_str(), "contact");
    }

    #[test]
    fn test_home_click_selects_first_section() {
        let engine = NavigationEngine::portfolio();
        let mut host = Host::new(&engine);
        host.scroll_to(2500.0);

        engine.notify_home_click();
        assert_eq!(engine.active_section().as_str(), "home");
    }

    #[test]
    fn test_indicator_follows_active_button() {
        let engine = NavigationEngine::portfolio();
        mount_buttons(&engine);
        assert!(engine.indicator().visible);
        assert_eq!(engine.indicator().left, 0.0);

        let mut host = Host::new(&engine);
        host.scroll_to(2100.0);

        let rect = engine.indicator();
        assert!(rect.visible);
        assert_eq!(rect.left, 48.0 + 32.0 + 52.0 + 32.0);
        assert_eq!(rect.width, 70.0);
    }

    #[test]
    fn test_indicator_idempotent() {
        let engine = NavigationEngine::portfolio();
        mount_buttons(&engine);
        engine.notify_navigation_click("experience");

        let first = engine.compute_indicator();
        let second = engine.compute_indicator();
        assert_eq!(first.left.to_bits(), second.left.to_bits());
        assert_eq!(first.width.to_bits(), second.width.to_bits());

        // Overlapping triggers in one frame settle on the same rectangle
        let before = engine.indicator();
        engine.on_layout_change();
        engine.on_resize(1280.0, 800.0);
        engine.poll_timers(Instant::now());
        assert!(engine.indicator().same_bits(&before));
    }

    #[test]
    fn test_resize_moves_indicator_only() {
        let engine = NavigationEngine::portfolio();
        mount_buttons(&engine);
        engine.notify_navigation_click("skills");
        let before = engine.indicator();

        // Wider window: buttons re-laid out further right
        engine.on_resize(1600.0, 900.0);
        engine.report_button("skills", ButtonRect::new(before.left + 140.0, before.width));

        let after = engine.indicator();
        assert_eq!(after.left, before.left + 140.0);
        assert_eq!(after.width, before.width);
        assert_eq!(engine.active_section().as_str(), "skills");
    }

    #[test]
    fn test_missing_button_hides_indicator() {
        let engine = NavigationEngine::portfolio();
        engine.report_button("home", ButtonRect::new(0.0, 40.0));
        assert!(engine.indicator().visible);

        engine.notify_navigation_click("projects");
        assert!(!engine.indicator().visible);
        assert_eq!(engine.active_section().as_str(), "projects");

        engine.report_button("projects", ButtonRect::new(120.0, 60.0));
        assert!(engine.indicator().visible);
    }

    #[test]
    fn test_subscribers_receive_changes_only() {
        let engine = NavigationEngine::portfolio();
        let recorder = Arc::new(Recorder::default());
        engine.add_subscriber(recorder.clone());

        let mut host = Host::new(&engine);
        host.scroll_to(1500.0);
        let after_scroll = recorder.count();
        assert!(after_scroll >= 1);
        assert_eq!(recorder.last().unwrap().active.as_str(), "skills");

        // Same position again: nothing new to push
        host.scroll_to(1500.0);
        assert_eq!(recorder.count(), after_scroll);
    }

    #[test]
    fn test_dropped_subscriber_is_released() {
        let engine = NavigationEngine::portfolio();
        let recorder = Arc::new(Recorder::default());
        engine.add_subscriber(recorder.clone());
        assert_eq!(engine.subscriber_count(), 1);

        drop(recorder);
        assert_eq!(engine.subscriber_count(), 0);
        engine.notify_navigation_click("skills");
    }

    #[test]
    fn test_settle_timer_fires_once() {
        let engine = NavigationEngine::portfolio();
        let start = Instant::now();
        engine.mount(start);

        assert_eq!(engine.next_deadline(), Some(start + Duration::from_millis(100)));

        engine.poll_timers(start + Duration::from_millis(50));
        assert!(engine.next_deadline().is_some());

        engine.poll_timers(start + Duration::from_millis(100));
        assert!(engine.next_deadline().is_none());
    }

    #[test]
    fn test_settle_timer_picks_up_late_layout() {
        let engine = NavigationEngine::portfolio();
        let start = Instant::now();
        engine.mount(start);
        mount_buttons(&engine);

        // Font load widens the home button
        engine.report_button("home", ButtonRect::new(0.0, 56.0));
        engine.poll_timers(start + Duration::from_millis(120));
        assert_eq!(engine.indicator().width, 56.0);
    }

    #[test]
    fn test_teardown_cancels_and_releases() {
        let engine = NavigationEngine::portfolio();
        let recorder = Arc::new(Recorder::default());
        engine.add_subscriber(recorder.clone());
        engine.mount(Instant::now());

        engine.teardown();
        assert!(engine.is_torn_down());
        assert!(engine.next_deadline().is_none());
        assert_eq!(engine.subscriber_count(), 0);

        let seen = recorder.count();
        engine.notify_navigation_click("contact");
        engine.on_scroll(3000.0);
        engine.on_animation_frame(1, &page(3000.0));
        assert_eq!(engine.active_section().as_str(), "home");
        assert_eq!(recorder.count(), seen);

        engine.add_subscriber(recorder.clone());
        assert_eq!(engine.subscriber_count(), 0);
    }

    #[test]
    fn test_scrolled_header_flag() {
        let engine = NavigationEngine::portfolio();

        engine.on_scroll(20.0);
        assert!(!engine.snapshot().scrolled);
        engine.on_scroll(21.0);
        assert!(engine.snapshot().scrolled);
        engine.on_scroll(0.0);
        assert!(!engine.snapshot().scrolled);
    }

    #[test]
    fn test_mobile_menu_click_closes_menu() {
        let engine = NavigationEngine::portfolio();
        engine.on_resize(400.0, 800.0);
        assert_eq!(engine.snapshot().layout, NavLayout::Mobile);

        engine.toggle_menu();
        mount_buttons(&engine);
        assert!(engine.snapshot().menu_open);
        assert!(engine.indicator().visible);

        engine.notify_navigation_click("projects");
        let snapshot = engine.snapshot();
        assert!(!snapshot.menu_open);
        assert_eq!(snapshot.active.as_str(), "projects");
        assert!(!snapshot.indicator.visible);
    }

    #[test]
    fn test_layout_swap_drops_stale_buttons() {
        let engine = NavigationEngine::portfolio();
        mount_buttons(&engine);
        assert!(engine.indicator().visible);

        engine.on_resize(500.0, 900.0);
        assert!(!engine.indicator().visible);

        engine.on_resize(1200.0, 900.0);
        mount_buttons(&engine);
        assert!(engine.indicator().visible);
        assert_eq!(engine.snapshot().layout, NavLayout::Desktop);
    }

    #[test]
    fn test_sections_reveal_as_they_scroll_in() {
        let engine = NavigationEngine::portfolio();
        let mut host = Host::new(&engine);

        host.scroll_to(0.0);
        let revealed: Vec<String> = engine.snapshot().revealed.iter().map(|id| id.to_string()).collect();
        assert_eq!(revealed, ["home"]);

        host.scroll_to(400.0);
        let revealed: Vec<String> = engine.snapshot().revealed.iter().map(|id| id.to_string()).collect();
        assert_eq!(revealed, ["home", "skills"]);

        host.scroll_to(0.0);
        assert_eq!(engine.snapshot().revealed.len(), 2);
    }

    #[test]
    fn test_membership_strategy_engine() {
        let config = NavConfig {
            strategy: ObserverStrategy::Membership,
            ..NavConfig::default()
        };
        let engine = NavigationEngine::new(Arc::new(SectionRegistry::portfolio()), config).unwrap();
        assert_eq!(engine.strategy(), ObserverStrategy::Membership);

        let mut host = Host::new(&engine);
        // Midline at 1900
        host.scroll_to(1500.0);
        assert_eq!(engine.active_section().as_str(), "skills");

        engine.on_intersection(vec![
            IntersectionEntry::entering("projects", 0.2),
            IntersectionEntry::entering("experience", 0.1),
        ]);
        host.frame();
        host.frame_at(1500.0);
        assert_eq!(engine.active_section().as_str(), "experience");
    }

    #[test]
    fn test_handle_dispatches_events() {
        let engine = NavigationEngine::portfolio();

        engine.handle(NavEvent::ButtonMounted {
            id: SectionId::new("skills"),
            rect: ButtonRect::new(80.0, 50.0),
        });
        engine.handle(NavEvent::NavigationClick(SectionId::new("skills")));
        assert_eq!(engine.active_section().as_str(), "skills");
        assert_eq!(engine.indicator().left, 80.0);

        engine.handle(NavEvent::ButtonUnmounted(SectionId::new("skills")));
        assert!(!engine.indicator().visible);

        engine.handle(NavEvent::Scroll { y: 300.0 });
        assert!(engine.snapshot().scrolled);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = NavConfig {
            header_offset: f32::NAN,
            ..NavConfig::default()
        };
        assert!(NavigationEngine::new(Arc::new(SectionRegistry::portfolio()), config).is_err());
    }
}
