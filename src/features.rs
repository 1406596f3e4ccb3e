//! Feature modules - showcase logic separated from UI
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI components directly.

pub mod carousel;
pub mod manifest;
pub mod page;
pub mod posters;
pub mod settings;

pub use manifest::{Manifest, SectionEntry};
pub use posters::{Poster, PosterIndex};
pub use settings::Settings;
