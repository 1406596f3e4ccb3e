//! UI module for the showcase stage
//! Dark mode aesthetic with neon pink accents
//!
//! # Architecture
//!
//! - **Stage** (`stage`): render-side carousel state written by the controller
//! - **Layout** (`layout`): fixed section geometry shared with the scroll logic
//! - **Components** (`components`): sections of the page with Message handling

pub mod animation;
pub mod components;
pub mod icons;
pub mod layout;
pub mod stage;
pub mod theme;

pub use stage::StageSurface;
