//! Timed media carousel controller
//!
//! Drives the hero slider and the showreel composer. The controller owns the
//! current index, the autoplay cycle and the pause/visibility flags, and
//! pushes every visible change into a [`Surface`]. It never listens to the
//! environment itself: the UI layer calls the named methods below from its
//! own event bindings and passes the current time in.
//!
//! Invariant: no deadline is armed while the carousel is paused, out of
//! view, in a hidden window, or running under reduced motion.

pub mod cycle;
pub mod gesture;
pub mod hud;
pub mod media;
pub mod slide;
pub mod surface;

use std::time::{Duration, Instant};

use tracing::debug;

pub use cycle::Cycle;
pub use gesture::{Swipe, SwipeTracker};
pub use hud::{Hud, Placeholders, PlayTrigger, TagFallback};
pub use media::{MediaAction, MediaSlot};
pub use slide::{Slide, SlideSet};
pub use surface::{MediaCue, PlaybackError, ProgressCue, Surface, Transition};

/// Hero autoplay interval
pub const HERO_CYCLE: Duration = Duration::from_millis(6400);
/// Showreel autoplay interval
pub const SHOWREEL_CYCLE: Duration = Duration::from_millis(5800);
/// Intersection ratio the carousel must exceed to count as visible
pub const VISIBILITY_THRESHOLD: f32 = 0.34;
/// Minimum horizontal travel for a drag to count as a swipe
pub const SWIPE_THRESHOLD: f32 = 38.0;
/// HUD fade-in duration
pub const HUD_TRANSITION: Duration = Duration::from_millis(420);

/// Carousel tuning
#[derive(Debug, Clone)]
pub struct CarouselConfig {
    /// Autoplay interval `T`
    pub cycle: Duration,
    pub visibility_threshold: f32,
    pub swipe_threshold: f32,
    pub hud_transition: Duration,
    /// Whether automatic advances animate the HUD (manual ones always do)
    pub animate_automatic: bool,
    /// Prefix of the play trigger title
    pub brand: String,
    pub placeholders: Placeholders,
}

impl CarouselConfig {
    pub fn hero() -> Self {
        Self {
            cycle: HERO_CYCLE,
            visibility_threshold: VISIBILITY_THRESHOLD,
            swipe_threshold: SWIPE_THRESHOLD,
            hud_transition: HUD_TRANSITION,
            animate_automatic: true,
            brand: "KASSABI".to_string(),
            placeholders: Placeholders::hero(),
        }
    }

    pub fn showreel() -> Self {
        Self {
            cycle: SHOWREEL_CYCLE,
            animate_automatic: false,
            placeholders: Placeholders::showreel(),
            ..Self::hero()
        }
    }

    pub fn with_cycle(mut self, cycle: Duration) -> Self {
        self.cycle = cycle;
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }
}

/// Read-only environment signals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Environment {
    /// User asked for reduced motion: no autoplay, instant transitions
    pub reduced_motion: bool,
    /// Primary pointer is coarse (touch); disables pointer parallax
    pub coarse_pointer: bool,
}

/// Timed carousel over a fixed [`SlideSet`]
#[derive(Debug)]
pub struct Carousel<S: Surface> {
    slides: SlideSet,
    config: CarouselConfig,
    environment: Environment,
    surface: S,
    current: usize,
    paused: bool,
    in_view: bool,
    tab_hidden: bool,
    cycle: Cycle,
    swipe: SwipeTracker,
}

impl<S: Surface> Carousel<S> {
    /// Create the carousel and activate the first slide
    pub fn new(
        slides: SlideSet,
        config: CarouselConfig,
        environment: Environment,
        surface: S,
        now: Instant,
    ) -> Self {
        let cycle = Cycle::new(config.cycle);
        let swipe = SwipeTracker::new(config.swipe_threshold);
        let mut carousel = Self {
            slides,
            config,
            environment,
            surface,
            current: 0,
            paused: false,
            in_view: true,
            tab_hidden: false,
            cycle,
            swipe,
        };

        for index in 0..carousel.slides.len() {
            carousel.surface.set_active(index, index == 0);
        }
        carousel.present(Transition::Instant);
        carousel.restart_cycle(now);
        carousel
    }

    /// Move to `target` (wrapped into range)
    ///
    /// A manual request for the slide already showing re-affirms it: the
    /// progress resets and the timer is re-armed, but nothing is re-rendered.
    pub fn go_to(&mut self, target: isize, automatic: bool, now: Instant) {
        let next = self.slides.wrap(target);
        if next == self.current && !automatic {
            self.restart_cycle(now);
            return;
        }

        debug!(
            "Carousel {} -> {} ({})",
            self.current,
            next,
            if automatic { "auto" } else { "manual" }
        );

        self.surface.set_active(self.current, false);
        self.surface.set_active(next, true);
        self.current = next;

        let transition = if self.environment.reduced_motion
            || (automatic && !self.config.animate_automatic)
        {
            Transition::Instant
        } else {
            Transition::Eased(self.config.hud_transition)
        };
        self.present(transition);
        self.restart_cycle(now);
    }

    pub fn go_next(&mut self, now: Instant) {
        self.go_to(self.current as isize + 1, false, now);
    }

    pub fn go_previous(&mut self, now: Instant) {
        self.go_to(self.current as isize - 1, false, now);
    }

    /// Pointer entered the interactive region
    pub fn pause(&mut self, now: Instant) {
        self.paused = true;
        self.suspend(now);
    }

    /// Pointer left the interactive region; the cycle starts over from zero
    pub fn resume(&mut self, now: Instant) {
        self.paused = false;
        self.restart_cycle(now);
    }

    /// Window/tab went to the background (`hidden`) or came back
    pub fn on_visibility_change(&mut self, hidden: bool, now: Instant) {
        self.tab_hidden = hidden;
        if hidden {
            self.suspend(now);
        } else {
            self.restart_cycle(now);
        }
    }

    /// Viewport intersection report for the carousel's section
    ///
    /// Only changes of visibility act: reports that keep the carousel on the
    /// same side of the threshold leave the running cycle alone.
    pub fn on_viewport_change(&mut self, intersecting: bool, ratio: f32, now: Instant) {
        let visible = intersecting && ratio > self.config.visibility_threshold;
        if visible == self.in_view {
            return;
        }

        self.in_view = visible;
        if visible {
            self.restart_cycle(now);
        } else {
            self.suspend(now);
        }
    }

    /// Deliver the autoplay timer. Returns `true` when the carousel advanced.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.cycle.is_due(now) {
            return false;
        }
        self.go_to(self.current as isize + 1, true, now);
        true
    }

    pub fn pointer_down(&mut self, x: f32) {
        self.swipe.press(x);
    }

    /// Finish a drag; a long enough horizontal drag navigates
    pub fn pointer_up(&mut self, x: f32, now: Instant) -> Option<Swipe> {
        let swipe = self.swipe.release(x)?;
        match swipe {
            Swipe::Left => self.go_next(now),
            Swipe::Right => self.go_previous(now),
        }
        Some(swipe)
    }

    /// Tear down: cancel any pending timer and hand the surface back
    pub fn dispose(mut self) -> S {
        self.cycle.reset();
        self.surface.set_progress(ProgressCue::Reset);
        self.surface
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &SlideSet {
        &self.slides
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_visible(&self) -> bool {
        self.in_view
    }

    pub fn is_tab_hidden(&self) -> bool {
        self.tab_hidden
    }

    pub fn autoplay_enabled(&self) -> bool {
        !self.environment.reduced_motion
    }

    pub fn is_armed(&self) -> bool {
        self.cycle.is_armed()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.cycle.deadline()
    }

    /// Progress fill in `[0, 1]`
    pub fn progress(&self, now: Instant) -> f32 {
        self.cycle.fraction(now)
    }

    /// HUD for the current slide
    pub fn hud(&self) -> Hud {
        Hud::resolve(
            &self.slides[self.current],
            self.current,
            &self.config.placeholders,
            &self.config.brand,
        )
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn can_autoplay(&self) -> bool {
        self.autoplay_enabled() && !self.paused && self.in_view && !self.tab_hidden
    }

    /// Cancel the pending advance and freeze the bar
    fn suspend(&mut self, now: Instant) {
        let fraction = self.cycle.cancel(now);
        self.surface.set_progress(ProgressCue::Freeze(fraction));
    }

    /// Start over from an empty bar; arm only when autoplay is allowed
    fn restart_cycle(&mut self, now: Instant) {
        if self.can_autoplay() {
            self.cycle.arm(now);
            self.surface.set_progress(ProgressCue::Run {
                started: now,
                duration: self.cycle.duration(),
            });
        } else {
            self.cycle.reset();
            self.surface.set_progress(ProgressCue::Reset);
        }
    }

    fn present(&mut self, transition: Transition) {
        let hud = self.hud();
        self.surface.show_hud(&hud, transition);

        let slide = &self.slides[self.current];
        let cue = MediaCue {
            media: slide.media().map(str::to_string),
            poster: slide.poster().map(str::to_string),
        };
        if let Err(e) = self.surface.load_media(&cue) {
            debug!("Ignoring media failure on slide {}: {}", self.current, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const T: Duration = Duration::from_millis(6000);

    #[derive(Debug, Default)]
    struct RecordingSurface {
        active: Vec<bool>,
        hud: Option<(Hud, Transition)>,
        progress: Option<ProgressCue>,
        media: Vec<MediaCue>,
        reject_playback: bool,
    }

    impl RecordingSurface {
        fn active_count(&self) -> usize {
            self.active.iter().filter(|a| **a).count()
        }
    }

    impl Surface for RecordingSurface {
        fn set_active(&mut self, index: usize, active: bool) {
            if self.active.len() <= index {
                self.active.resize(index + 1, false);
            }
            self.active[index] = active;
        }

        fn show_hud(&mut self, hud: &Hud, transition: Transition) {
            self.hud = Some((hud.clone(), transition));
        }

        fn set_progress(&mut self, cue: ProgressCue) {
            self.progress = Some(cue);
        }

        fn load_media(&mut self, cue: &MediaCue) -> Result<(), PlaybackError> {
            self.media.push(cue.clone());
            if self.reject_playback {
                Err(PlaybackError::Rejected("autoplay policy".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn slides(n: usize) -> SlideSet {
        SlideSet::new(
            (0..n)
                .map(|i| {
                    Slide::new()
                        .with_tag(format!("Tag {i}"))
                        .with_media(format!("media/{i}.mp4"))
                })
                .collect(),
        )
        .unwrap()
    }

    fn carousel(n: usize, env: Environment, t0: Instant) -> Carousel<RecordingSurface> {
        Carousel::new(
            slides(n),
            CarouselConfig::hero().with_cycle(T),
            env,
            RecordingSurface::default(),
            t0,
        )
    }

    fn ms(t0: Instant, millis: u64) -> Instant {
        t0 + Duration::from_millis(millis)
    }

    #[test]
    fn test_initial_state() {
        let t0 = Instant::now();
        let c = carousel(4, Environment::default(), t0);
        assert_eq!(c.current(), 0);
        assert_eq!(c.surface().active, vec![true, false, false, false]);
        assert_eq!(c.deadline(), Some(t0 + T));
        assert_eq!(c.surface().hud.as_ref().unwrap().1, Transition::Instant);
        assert_eq!(c.surface().media.len(), 1);
    }

    #[test]
    fn test_go_to_negative_wraps_to_last() {
        let t0 = Instant::now();
        let mut c = carousel(4, Environment::default(), t0);
        c.go_to(-1, false, t0);
        assert_eq!(c.current(), 3);
        assert_eq!(c.surface().active, vec![false, false, false, true]);
        let (hud, transition) = c.surface().hud.clone().unwrap();
        assert_eq!(hud.tag, "Tag 3");
        assert_eq!(transition, Transition::Eased(HUD_TRANSITION));
    }

    #[test]
    fn test_overflow_wraps_to_first() {
        let t0 = Instant::now();
        let mut c = carousel(3, Environment::default(), t0);
        c.go_to(2, false, t0);
        c.go_next(t0);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_autoplay_advances_after_cycle() {
        let t0 = Instant::now();
        let mut c = carousel(4, Environment::default(), t0);
        assert!(!c.tick(ms(t0, 5999)));
        assert!(c.tick(ms(t0, 6000)));
        assert_eq!(c.current(), 1);
        assert_eq!(c.deadline(), Some(ms(t0, 12000)));
    }

    #[test]
    fn test_manual_navigation_supersedes_pending_timer() {
        let t0 = Instant::now();
        let mut c = carousel(4, Environment::default(), t0);
        c.go_next(ms(t0, 5000));
        assert_eq!(c.current(), 1);
        // The old deadline at 6000 is gone
        assert!(!c.tick(ms(t0, 6000)));
        assert_eq!(c.current(), 1);
        assert!(c.tick(ms(t0, 11000)));
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn test_same_index_manual_reaffirms() {
        let t0 = Instant::now();
        let mut c = carousel(4, Environment::default(), t0);
        let media_before = c.surface().media.len();
        c.go_to(4, false, ms(t0, 3000));
        assert_eq!(c.current(), 0);
        assert_eq!(c.surface().media.len(), media_before);
        assert_eq!(c.deadline(), Some(ms(t0, 9000)));
        assert_eq!(c.progress(ms(t0, 3000)), 0.0);
    }

    #[test]
    fn test_pause_resume_timeline() {
        let t0 = Instant::now();
        let mut c = carousel(4, Environment::default(), t0);

        c.pause(ms(t0, 2000));
        assert!(!c.is_armed());
        for t in (2000..=10000).step_by(500) {
            assert!(!c.tick(ms(t0, t)));
        }
        assert_eq!(c.current(), 0);
        // Bar stays frozen where it stopped
        assert!((c.progress(ms(t0, 9000)) - 1.0 / 3.0).abs() < 1e-3);

        c.resume(ms(t0, 10000));
        assert_eq!(c.progress(ms(t0, 10000)), 0.0);
        assert_eq!(
            c.surface().progress,
            Some(ProgressCue::Run {
                started: ms(t0, 10000),
                duration: T
            })
        );
        assert!(!c.tick(ms(t0, 14000)));
        assert!(!c.tick(ms(t0, 15999)));
        assert!(c.tick(ms(t0, 16000)));
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn test_navigation_while_paused_does_not_arm() {
        let t0 = Instant::now();
        let mut c = carousel(4, Environment::default(), t0);
        c.pause(t0);
        c.go_next(ms(t0, 100));
        assert_eq!(c.current(), 1);
        assert!(!c.is_armed());
        assert_eq!(c.surface().progress, Some(ProgressCue::Reset));
    }

    #[test]
    fn test_visibility_hidden_cancels_and_restores() {
        let t0 = Instant::now();
        let mut c = carousel(4, Environment::default(), t0);
        c.on_visibility_change(true, ms(t0, 3000));
        assert!(!c.is_armed());
        assert!(matches!(c.surface().progress, Some(ProgressCue::Freeze(_))));
        assert!(!c.tick(ms(t0, 20000)));

        c.on_visibility_change(false, ms(t0, 20000));
        assert_eq!(c.deadline(), Some(ms(t0, 26000)));
        assert_eq!(c.progress(ms(t0, 20000)), 0.0);
    }

    #[test]
    fn test_viewport_drop_and_recovery() {
        let t0 = Instant::now();
        let mut c = carousel(4, Environment::default(), t0);

        c.on_viewport_change(true, 0.2, ms(t0, 3000));
        assert!(!c.is_visible());
        assert!(!c.is_armed());
        assert!(!c.tick(ms(t0, 6000)));

        // Still below threshold: nothing changes
        c.on_viewport_change(true, 0.34, ms(t0, 4000));
        assert!(!c.is_armed());

        c.on_viewport_change(true, 0.6, ms(t0, 8000));
        assert!(c.is_visible());
        assert_eq!(c.progress(ms(t0, 8000)), 0.0);
        assert_eq!(c.deadline(), Some(ms(t0, 14000)));
    }

    #[test]
    fn test_viewport_report_without_change_keeps_cycle() {
        let t0 = Instant::now();
        let mut c = carousel(4, Environment::default(), t0);
        c.on_viewport_change(true, 0.9, ms(t0, 2000));
        assert_eq!(c.deadline(), Some(t0 + T));
    }

    #[test]
    fn test_not_intersecting_is_never_visible() {
        let t0 = Instant::now();
        let mut c = carousel(4, Environment::default(), t0);
        c.on_viewport_change(false, 0.9, t0);
        assert!(!c.is_visible());
        assert!(!c.is_armed());
    }

    #[test]
    fn test_resume_while_hidden_stays_disarmed() {
        let t0 = Instant::now();
        let mut c = carousel(4, Environment::default(), t0);
        c.on_visibility_change(true, t0);
        c.pause(t0);
        c.resume(ms(t0, 500));
        assert!(!c.is_armed());
        c.on_visibility_change(false, ms(t0, 1000));
        assert!(c.is_armed());
    }

    #[test]
    fn test_reduced_motion_never_arms() {
        let t0 = Instant::now();
        let env = Environment {
            reduced_motion: true,
            coarse_pointer: false,
        };
        let mut c = carousel(4, env, t0);
        assert!(!c.autoplay_enabled());
        assert!(!c.is_armed());
        assert!(!c.tick(ms(t0, 60_000)));
        assert_eq!(c.current(), 0);

        c.go_next(ms(t0, 100));
        assert_eq!(c.current(), 1);
        assert!(!c.is_armed());
        assert_eq!(c.surface().hud.as_ref().unwrap().1, Transition::Instant);
        assert_eq!(c.surface().progress, Some(ProgressCue::Reset));

        c.resume(ms(t0, 200));
        c.on_visibility_change(false, ms(t0, 300));
        assert!(!c.is_armed());
    }

    #[test]
    fn test_showreel_auto_advance_is_silent() {
        let t0 = Instant::now();
        let mut c = Carousel::new(
            slides(3),
            CarouselConfig::showreel(),
            Environment::default(),
            RecordingSurface::default(),
            t0,
        );
        assert!(c.tick(t0 + SHOWREEL_CYCLE));
        assert_eq!(c.surface().hud.as_ref().unwrap().1, Transition::Instant);
        c.go_next(t0 + SHOWREEL_CYCLE);
        assert_eq!(
            c.surface().hud.as_ref().unwrap().1,
            Transition::Eased(HUD_TRANSITION)
        );
    }

    #[test]
    fn test_single_slide_auto_advance_keeps_it_active() {
        let t0 = Instant::now();
        let mut c = carousel(1, Environment::default(), t0);
        assert!(c.tick(t0 + T));
        assert_eq!(c.current(), 0);
        assert_eq!(c.surface().active, vec![true]);
        assert!(c.is_armed());
    }

    #[test]
    fn test_rejected_playback_is_swallowed() {
        let t0 = Instant::now();
        let surface = RecordingSurface {
            reject_playback: true,
            ..Default::default()
        };
        let mut c = Carousel::new(
            slides(2),
            CarouselConfig::hero(),
            Environment::default(),
            surface,
            t0,
        );
        c.go_next(t0);
        assert_eq!(c.current(), 1);
        assert_eq!(c.surface().media.len(), 2);
        assert!(c.is_armed());
    }

    #[test]
    fn test_swipe_maps_to_navigation() {
        let t0 = Instant::now();
        let mut c = carousel(4, Environment::default(), t0);
        c.pointer_down(300.0);
        assert_eq!(c.pointer_up(200.0, t0), Some(Swipe::Left));
        assert_eq!(c.current(), 1);

        c.pointer_down(300.0);
        assert_eq!(c.pointer_up(400.0, t0), Some(Swipe::Right));
        assert_eq!(c.current(), 0);

        c.pointer_down(300.0);
        assert_eq!(c.pointer_up(320.0, t0), None);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_dispose_cancels_timer() {
        let t0 = Instant::now();
        let c = carousel(4, Environment::default(), t0);
        let surface = c.dispose();
        assert_eq!(surface.progress, Some(ProgressCue::Reset));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Next,
        Previous,
        Pause,
        Resume,
        Hide(bool),
        Viewport(f32),
        Jump(isize),
        Wait(u64),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Next),
            Just(Op::Previous),
            Just(Op::Pause),
            Just(Op::Resume),
            any::<bool>().prop_map(Op::Hide),
            (0.0f32..1.0).prop_map(Op::Viewport),
            (-20isize..20).prop_map(Op::Jump),
            (0u64..15_000).prop_map(Op::Wait),
        ]
    }

    proptest! {
        #[test]
        fn prop_index_tracks_net_delta(len in 1usize..8, steps in prop::collection::vec(any::<bool>(), 0..64)) {
            let t0 = Instant::now();
            let mut c = carousel(len, Environment::default(), t0);
            let mut net: isize = 0;
            for forward in steps {
                if forward {
                    c.go_next(t0);
                    net += 1;
                } else {
                    c.go_previous(t0);
                    net -= 1;
                }
                prop_assert!(c.current() < len);
            }
            prop_assert_eq!(c.current(), net.rem_euclid(len as isize) as usize);
        }

        #[test]
        fn prop_invariants_hold_for_any_event_sequence(len in 1usize..6, ops in prop::collection::vec(op(), 0..48)) {
            let t0 = Instant::now();
            let mut now = t0;
            let mut c = carousel(len, Environment::default(), t0);
            for op in ops {
                match op {
                    Op::Next => c.go_next(now),
                    Op::Previous => c.go_previous(now),
                    Op::Pause => c.pause(now),
                    Op::Resume => c.resume(now),
                    Op::Hide(hidden) => c.on_visibility_change(hidden, now),
                    Op::Viewport(ratio) => c.on_viewport_change(true, ratio, now),
                    Op::Jump(target) => c.go_to(target, false, now),
                    Op::Wait(millis) => {
                        now += Duration::from_millis(millis);
                        c.tick(now);
                    }
                }
                prop_assert!(c.current() < len);
                prop_assert_eq!(c.surface().active_count(), 1);
                prop_assert!(c.surface().active[c.current()]);
                if c.is_paused() || !c.is_visible() || c.is_tab_hidden() {
                    prop_assert!(!c.is_armed());
                }
            }
        }
    }
}
