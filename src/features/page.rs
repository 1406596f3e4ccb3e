//! Page-level behaviours around the carousels
//!
//! Pure state and geometry; the UI layer feeds in scroll offsets, pointer
//! positions and timestamps.

pub mod equalizer;
pub mod inline_video;
pub mod modal;
pub mod nav_spy;
pub mod parallax;
pub mod reveal;
pub mod scroll;
pub mod viewport;

pub use equalizer::{BarTiming, Equalizer};
pub use inline_video::{InlineAction, InlineVideos};
pub use modal::VideoModal;
pub use nav_spy::{NavSpy, Section};
pub use parallax::Parallax;
pub use reveal::{RevealStyle, Reveals};
pub use viewport::Span;
