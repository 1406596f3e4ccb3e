//! Animation helpers for the stage HUD
//!
//! Text fades use `iced_anim` transitions; slide wipes use
//! `iced::animation::Animation` directly in the stage surface.

mod fade;

pub use fade::HudFade;
