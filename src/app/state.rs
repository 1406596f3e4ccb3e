//! Application state definitions

use std::path::{Path, PathBuf};

use iced::Point;
use iced::time::Instant;

use crate::features::carousel::{Carousel, CarouselConfig, Environment, Slide, SlideSet};
use crate::features::page::{Equalizer, InlineVideos, NavSpy, Reveals, VideoModal};
use crate::features::{Manifest, PosterIndex, SectionEntry, Settings};
use crate::ui::StageSurface;
use crate::ui::components::{hero_stage, showreel};
use crate::ui::layout;

/// Bars in the hero equalizer meter
const EQUALIZER_BARS: usize = 7;

/// Main application state
pub struct App {
    /// Settings, environment signals and clock
    pub core: CoreState,
    /// The two carousels and their posters
    pub stage: StageState,
    /// Page chrome (nav spy, scroll progress, modal, pointer)
    pub ui: UiState,
}

pub struct CoreState {
    pub settings: Settings,
    /// Where preference changes are written; `None` keeps them in memory
    pub settings_path: Option<PathBuf>,
    pub environment: Environment,
    pub brand: String,
    /// Window is minimized; treated like a hidden tab
    pub window_hidden: bool,
    /// Equalizer clock origin
    pub started: Instant,
    /// Time of the latest frame, used by the view
    pub now: Instant,
}

pub struct StageState {
    pub hero: Option<Carousel<StageSurface>>,
    pub showreel: Option<Carousel<StageSurface>>,
    pub posters: PosterIndex,
}

pub struct UiState {
    pub sections: Vec<SectionEntry>,
    pub nav: NavSpy,
    pub scroll_progress: f32,
    /// Current page scroll offset
    pub scroll_offset: f32,
    /// Height of the page scrollable
    pub viewport_height: f32,
    pub reveals: Reveals,
    pub inline_videos: InlineVideos,
    pub modal: VideoModal,
    pub equalizer: Equalizer,
    /// Pointer over the hero stage, relative to it
    pub hero_pointer: Option<Point>,
}

fn build_carousel(
    slides: Vec<Slide>,
    config: CarouselConfig,
    environment: Environment,
    rise: f32,
    now: Instant,
) -> Option<Carousel<StageSurface>> {
    let slides = SlideSet::new(slides)?;
    Some(Carousel::new(
        slides,
        config,
        environment,
        StageSurface::new(rise),
        now,
    ))
}

impl StageState {
    pub fn new(
        manifest: &Manifest,
        settings: &Settings,
        environment: Environment,
        media_root: &Path,
        now: Instant,
    ) -> Self {
        let posters = PosterIndex::scan(
            media_root,
            manifest.hero.iter().chain(manifest.showreel.iter()),
        );

        let hero = build_carousel(
            manifest.hero.clone(),
            settings.hero_config().with_brand(manifest.brand.as_str()),
            environment,
            hero_stage::HUD_RISE,
            now,
        );
        let showreel = build_carousel(
            manifest.showreel.clone(),
            settings.showreel_config().with_brand(manifest.brand.as_str()),
            environment,
            showreel::HUD_RISE,
            now,
        );

        if hero.is_none() {
            tracing::warn!("Manifest has no hero slides");
        }
        if showreel.is_none() {
            tracing::warn!("Manifest has no showreel clips");
        }

        Self {
            hero,
            showreel,
            posters,
        }
    }

    /// Both carousels that exist
    pub fn carousels_mut(&mut self) -> impl Iterator<Item = &mut Carousel<StageSurface>> {
        self.hero.iter_mut().chain(self.showreel.iter_mut())
    }

    pub fn carousels(&self) -> impl Iterator<Item = &Carousel<StageSurface>> {
        self.hero.iter().chain(self.showreel.iter())
    }

    /// Whether any carousel has a deadline or a running transition
    pub fn needs_frames(&self, now: Instant) -> bool {
        self.carousels()
            .any(|c| c.is_armed() || c.surface().is_animating(now))
    }
}

impl UiState {
    pub fn new(sections: Vec<SectionEntry>, environment: Environment) -> Self {
        let mut rng = rand::rng();
        let viewport_height = layout::viewport_height(layout::WINDOW_HEIGHT);
        let nav = NavSpy::new(layout::sections(&sections));
        let reveals = Reveals::new(nav.sections(), environment.reduced_motion, viewport_height);
        let inline_videos = InlineVideos::new(
            sections.iter().filter_map(|entry| {
                entry
                    .video
                    .as_deref()
                    .map(|video| (entry.id.as_str(), video))
            }),
            environment.reduced_motion,
        );
        Self {
            sections,
            nav,
            scroll_progress: 0.0,
            scroll_offset: 0.0,
            viewport_height,
            reveals,
            inline_videos,
            modal: VideoModal::new(),
            equalizer: Equalizer::new(EQUALIZER_BARS, &mut rng),
            hero_pointer: None,
        }
    }
}
