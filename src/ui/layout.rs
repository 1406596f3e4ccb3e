//! Page geometry
//!
//! Section heights are fixed so scroll offsets map straight onto sections
//! without measuring widgets at runtime.

use crate::features::SectionEntry;
use crate::features::page::Section;

/// Scrollable id of the page body
pub const PAGE_SCROLL_ID: &str = "page_scroll";

/// Main window size at launch
pub const WINDOW_WIDTH: f32 = 1280.0;
pub const WINDOW_HEIGHT: f32 = 860.0;

pub const NAV_HEIGHT: f32 = 64.0;
pub const HERO_HEIGHT: f32 = 560.0;
pub const SHOWREEL_HEIGHT: f32 = 620.0;
pub const SECTION_HEIGHT: f32 = 420.0;
/// Padding around and gap between sections
pub const SECTION_GAP: f32 = 24.0;

/// Rendered height of a section by id
pub fn height_of(id: &str) -> f32 {
    match id {
        "hero" => HERO_HEIGHT,
        "showreel" => SHOWREEL_HEIGHT,
        _ => SECTION_HEIGHT,
    }
}

/// Height of the page scrollable inside a window of `window_height`
pub fn viewport_height(window_height: f32) -> f32 {
    (window_height - NAV_HEIGHT).max(0.0)
}

/// Content-space spans for the manifest sections, in page order
pub fn sections(entries: &[SectionEntry]) -> Vec<Section> {
    let mut top = SECTION_GAP;
    entries
        .iter()
        .map(|entry| {
            let height = height_of(&entry.id);
            let section = Section::new(entry.id.clone(), top, height);
            top += height + SECTION_GAP;
            section
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str) -> SectionEntry {
        SectionEntry::new(id, id)
    }

    #[test]
    fn test_sections_stack_with_gaps() {
        let sections = sections(&[entry("hero"), entry("showreel"), entry("venues")]);
        assert_eq!(sections[0].span.top, SECTION_GAP);
        assert_eq!(sections[1].span.top, SECTION_GAP * 2.0 + HERO_HEIGHT);
        assert_eq!(sections[1].span.height, SHOWREEL_HEIGHT);
        assert_eq!(
            sections[2].span.top,
            SECTION_GAP * 3.0 + HERO_HEIGHT + SHOWREEL_HEIGHT
        );
        assert_eq!(sections[2].span.height, SECTION_HEIGHT);
    }

    #[test]
    fn test_viewport_excludes_nav_bar() {
        assert_eq!(viewport_height(WINDOW_HEIGHT), WINDOW_HEIGHT - NAV_HEIGHT);
        assert_eq!(viewport_height(10.0), 0.0);
    }
}
