//! UI Components module - sections of the showcase page
//!
//! Components read feature state and map user input to `crate::app::Message`.
//! They are the only UI layer that imports from `crate::app`.

pub mod equalizer;
pub mod hero_stage;
pub mod nav_bar;
pub mod showreel;
pub mod video_modal;
