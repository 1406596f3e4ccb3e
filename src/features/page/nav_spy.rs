//! Section spy: highlights the nav link of the section in focus

use super::viewport::{Span, intersection_ratio, intersects};

/// Share of the viewport trimmed from the top before measuring
const ROOT_MARGIN_TOP: f32 = 0.18;
/// Share of the viewport trimmed from the bottom before measuring
const ROOT_MARGIN_BOTTOM: f32 = 0.38;

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub span: Span,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            span: Span::new(top, height),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NavSpy {
    sections: Vec<Section>,
    current: Option<usize>,
}

impl NavSpy {
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            sections,
            current: None,
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Update for a scroll position and return the focused section id
    ///
    /// The section with the highest visible ratio inside the trimmed
    /// viewport wins. When nothing intersects the previous pick stays.
    pub fn update(&mut self, scroll: f32, viewport_height: f32) -> Option<&str> {
        let band = Span::new(
            scroll + viewport_height * ROOT_MARGIN_TOP,
            viewport_height * (1.0 - ROOT_MARGIN_TOP - ROOT_MARGIN_BOTTOM),
        );

        let best = self
            .sections
            .iter()
            .enumerate()
            .filter(|(_, section)| intersects(section.span, band))
            .map(|(i, section)| (i, intersection_ratio(section.span, band)))
            .max_by(|a, b| a.1.total_cmp(&b.1));

        if let Some((index, _)) = best {
            self.current = Some(index);
        }
        self.current()
    }

    pub fn current(&self) -> Option<&str> {
        self.current.map(|i| self.sections[i].id.as_str())
    }

    /// Content offset of a section, for scrolling to it
    pub fn offset_of(&self, id: &str) -> Option<f32> {
        self.sections
            .iter()
            .find(|section| section.id == id)
            .map(|section| section.span.top)
    }

    pub fn span_of(&self, id: &str) -> Option<Span> {
        self.sections
            .iter()
            .find(|section| section.id == id)
            .map(|section| section.span)
    }
}
