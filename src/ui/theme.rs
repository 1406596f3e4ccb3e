//! Theme system for the showcase stage
//! Supports both dark and light modes with consistent color palette

use iced::color;
use iced::font::Weight;
use iced::widget::{button, container, scrollable};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x000000);
    pub const SURFACE: Color = color!(0x1a1a1a);
    pub const BORDER: Color = color!(0x282828);
    pub const TEXT_MUTED: Color = color!(0x888888);
    pub const TEXT_SECONDARY: Color = color!(0xb3b3b3);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const SURFACE: Color = color!(0xeeeeee);
    pub const BORDER: Color = color!(0xdddddd);
    pub const TEXT_MUTED: Color = color!(0x777777);
    pub const TEXT_SECONDARY: Color = color!(0x555555);
    pub const TEXT_PRIMARY: Color = color!(0x1a1a1a);
}

/// Heading weight
pub const BOLD_WEIGHT: Weight = Weight::Bold;

/// Neon pink accent color (same for both modes)
pub const ACCENT_PINK: Color = color!(0xff1493);

/// Hover state for accent
pub const ACCENT_PINK_HOVER: Color = color!(0xff69b4);

/// Text drawn over imagery, regardless of theme
pub const ON_MEDIA: Color = Color::WHITE;

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get surface color based on theme
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Get border color based on theme
pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

/// Get muted text color based on theme
pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

/// Get secondary text color based on theme
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Hover background color based on theme
pub fn hover_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        color!(0x2a2a2a)
    } else {
        color!(0xe0e0e0)
    }
}

/// Divider/separator color
pub fn divider(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.1)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.1)
    }
}

/// Overlay backdrop color
pub fn overlay_backdrop(theme: &Theme, opacity: f32) -> Color {
    if is_dark(theme) {
        Color::from_rgba(0.0, 0.0, 0.0, opacity)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, opacity * 0.7)
    }
}

/// Panel background (queue cards, dialogs)
pub fn panel_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.12, 0.12, 0.14)
    } else {
        Color::from_rgb(0.96, 0.96, 0.97)
    }
}

/// Stage placeholder background when a poster is missing
pub fn banner_placeholder(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.1, 0.05, 0.2)
    } else {
        Color::from_rgb(0.9, 0.85, 0.95)
    }
}

/// Stage gradient bottom
pub fn banner_gradient_bottom() -> Color {
    Color::from_rgba(0.0, 0.0, 0.0, 0.8)
}

/// Inactive thumb/indicator color
pub fn indicator_inactive(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.4)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.3)
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Main content area background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Top navigation bar
pub fn nav_bar(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            width: 1.0,
            color: divider(theme),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Hero stage container
pub fn hero_banner(theme: &Theme) -> container::Style {
    let bg = if is_dark(theme) {
        color!(0x1a1a2e)
    } else {
        color!(0xe8e8f0)
    };
    container::Style {
        background: Some(Background::Color(bg)),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 16.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Plain page section
/// Page section card, faded by `opacity` while it reveals
pub fn section(theme: &Theme, opacity: f32) -> container::Style {
    let bg = panel_bg(theme);
    let border = divider(theme);
    container::Style {
        background: Some(Background::Color(Color { a: bg.a * opacity, ..bg })),
        text_color: Some(Color {
            a: opacity,
            ..text_primary(theme)
        }),
        border: Border {
            radius: 16.0.into(),
            width: 1.0,
            color: Color {
                a: border.a * opacity,
                ..border
            },
        },
        ..Default::default()
    }
}

/// Dialog box over the backdrop, faded by `opacity`
pub fn dialog(theme: &Theme, opacity: f32) -> container::Style {
    let bg = panel_bg(theme);
    container::Style {
        background: Some(Background::Color(Color { a: opacity, ..bg })),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: Color {
                a: divider(theme).a * opacity,
                ..divider(theme)
            },
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.4 * opacity),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Carousel navigation button (semi-transparent)
pub fn carousel_nav_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.3))),
        text_color: Color::WHITE,
        border: Border {
            radius: 24.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.5))),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.7))),
            ..base
        },
        _ => base,
    }
}

/// Play button (white pill with black text)
pub fn banner_play_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::WHITE)),
        text_color: Color::BLACK,
        border: Border {
            radius: 24.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(color!(0xe0e0e0))),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(color!(0xcccccc))),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.4))),
            shadow: Shadow::default(),
            ..base
        },
        _ => base,
    }
}

/// Text button (no background, just text color change on hover)
pub fn text_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_secondary(theme),
        border: Border::default(),
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            text_color: text_primary(theme),
            ..base
        },
        _ => base,
    }
}

/// Nav link; the current section gets the accent underline color
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let base = text_button(theme, status);
        if active {
            button::Style {
                text_color: ACCENT_PINK,
                border: Border {
                    radius: 14.0.into(),
                    width: 1.0,
                    color: ACCENT_PINK,
                },
                ..base
            }
        } else {
            base
        }
    }
}

/// Slide thumb; the active one is filled
pub fn thumb(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let bg = match (active, status) {
            (true, _) => ACCENT_PINK,
            (false, button::Status::Hovered) => ACCENT_PINK_HOVER,
            (false, _) => indicator_inactive(theme),
        };
        button::Style {
            background: Some(Background::Color(bg)),
            text_color: ON_MEDIA,
            border: Border {
                radius: 10.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Showreel queue card
pub fn queue_card(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let bg = match status {
            button::Status::Hovered | button::Status::Pressed => hover_bg(theme),
            _ => panel_bg(theme),
        };
        button::Style {
            background: Some(Background::Color(bg)),
            text_color: text_primary(theme),
            border: Border {
                radius: 10.0.into(),
                width: if active { 2.0 } else { 1.0 },
                color: if active { ACCENT_PINK } else { divider(theme) },
            },
            ..Default::default()
        }
    }
}

/// Dialog close button
pub fn dialog_button(theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered => hover_bg(theme),
        _ => surface(theme),
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: text_primary(theme),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: divider(theme),
        },
        ..Default::default()
    }
}

// ============================================================================
// Scrollable Styles
// ============================================================================

/// Scrollbar style for the page
pub fn dark_scrollable(theme: &Theme, _status: scrollable::Status) -> scrollable::Style {
    let scrollbar = scrollable::Rail {
        background: Some(Background::Color(Color::TRANSPARENT)),
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(border_color(theme)),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: scrollbar.clone(),
        horizontal_rail: scrollbar,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(surface(theme)),
            border: Border::default(),
            shadow: Shadow::default(),
            icon: text_muted(theme),
        },
    }
}
