//! Application messages

use iced::Point;
use iced::keyboard::{Key, Modifiers};
use iced::time::Instant;

use crate::features::carousel::PlayTrigger;

/// Application messages
#[derive(Clone)]
pub enum Message {
    /// No-op message for event interception
    Noop,
    /// Animation frame
    Frame(Instant),

    // ============ Hero ============
    HeroPrevious,
    HeroNext,
    /// Thumb clicked
    HeroSelect(usize),
    /// Pointer entered the stage (pauses autoplay)
    HeroPointerEntered,
    /// Pointer left the stage (resumes autoplay, drops parallax)
    HeroPointerExited,
    /// Pointer moved over the stage, relative to its top-left corner
    HeroPointerMoved(Point),
    /// Primary button pressed on the stage (swipe start)
    HeroPressed,
    /// Primary button released on the stage (swipe end)
    HeroReleased,

    // ============ Showreel ============
    /// Queue card or thumb clicked
    ShowreelSelect(usize),
    ShowreelPointerEntered,
    ShowreelPointerExited,

    // ============ Page ============
    /// Page scrolled; all values in logical pixels
    PageScrolled {
        offset: f32,
        viewport_height: f32,
        content_height: f32,
    },
    /// Nav link clicked
    ScrollToSection(String),
    /// Play trigger clicked
    OpenVideo(PlayTrigger),
    /// Close button, backdrop or Escape
    CloseVideo,
    /// Nav bar theme switch; persisted to settings
    ToggleTheme,

    // ============ Window ============
    /// Keyboard key pressed
    KeyPressed(Key, Modifiers),
    /// Window gained or lost focus; prompts a minimize check
    WindowActivity(iced::window::Id),
    /// Result of a minimize check
    WindowMinimized(bool),
    /// Window resized; logical size
    WindowResized(iced::Size),
    /// Main window closed
    WindowClosed,
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Use a macro to reduce boilerplate for simple variants
        macro_rules! simple {
            ($name:literal) => { write!(f, $name) };
            ($name:literal, $($arg:tt)*) => { write!(f, concat!($name, "({})"), format_args!($($arg)*)) };
        }

        match self {
            // High-frequency messages - keep minimal (no data)
            Self::Noop => simple!("Noop"),
            Self::Frame(_) => simple!("Frame"),
            Self::HeroPointerMoved(_) => simple!("HeroPointerMoved"),
            Self::PageScrolled { offset, .. } => simple!("PageScrolled", "{:.0}", offset),

            Self::HeroPrevious => simple!("HeroPrevious"),
            Self::HeroNext => simple!("HeroNext"),
            Self::HeroSelect(i) => simple!("HeroSelect", "{}", i),
            Self::HeroPointerEntered => simple!("HeroPointerEntered"),
            Self::HeroPointerExited => simple!("HeroPointerExited"),
            Self::HeroPressed => simple!("HeroPressed"),
            Self::HeroReleased => simple!("HeroReleased"),
            Self::ShowreelSelect(i) => simple!("ShowreelSelect", "{}", i),
            Self::ShowreelPointerEntered => simple!("ShowreelPointerEntered"),
            Self::ShowreelPointerExited => simple!("ShowreelPointerExited"),
            Self::ScrollToSection(id) => simple!("ScrollToSection", "{}", id),
            Self::OpenVideo(trigger) => simple!("OpenVideo", "{}", trigger.media),
            Self::CloseVideo => simple!("CloseVideo"),
            Self::ToggleTheme => simple!("ToggleTheme"),
            Self::KeyPressed(key, _) => simple!("KeyPressed", "{:?}", key),
            Self::WindowActivity(id) => simple!("WindowActivity", "{:?}", id),
            Self::WindowMinimized(minimized) => simple!("WindowMinimized", "{}", minimized),
            Self::WindowResized(size) => simple!("WindowResized", "{}x{}", size.width, size.height),
            Self::WindowClosed => simple!("WindowClosed"),
        }
    }
}
