//! Colors for the counter widget.
//!
//! The renderer only talks to [`Theme`]; the counter core never sees colors.

use crate::counter::Category;
use ratatui::style::{Color, Modifier, Style};

pub const FOREST_GREEN: Color = Color::Rgb(0x4a, 0x77, 0x29);
pub const ORIGINAL_87_PINK: Color = Color::Rgb(0xbc, 0x20, 0x4b);
pub const BRICK_RED: Color = Color::Rgb(0x9c, 0x0d, 0x1b);
pub const DISCOVERY_CORAL: Color = Color::Rgb(0xe2, 0x80, 0x7b);
pub const WONDER_PURPLE: Color = Color::Rgb(0x49, 0x1d, 0x70);
pub const OPPORTUNITY_GREEN: Color = Color::Rgb(0x00, 0x85, 0x66);
pub const INVENT_ORANGE: Color = Color::Rgb(0xbf, 0x82, 0x26);
pub const ISO_WHITE: Color = Color::Rgb(0xfc, 0xfc, 0xfc);
pub const COALY_GRAY: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const LIMESTONE_GRAY: Color = Color::Rgb(0xa2, 0xaa, 0xad);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Enabled,
    Focused,
    Disabled,
}

/// Styling capability implemented by the rendering layer.
pub trait Theme {
    fn category_color(&self, category: Category) -> Color;
    fn button_style(&self, state: ButtonState) -> Style;
    fn border_color(&self) -> Color;
    fn confetti_colors(&self) -> &[Color];
}

/// Palette modeled on the DDD design-system defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct DddTheme;

const DDD_CONFETTI: [Color; 5] = [
    ORIGINAL_87_PINK,
    INVENT_ORANGE,
    OPPORTUNITY_GREEN,
    DISCOVERY_CORAL,
    ISO_WHITE,
];

impl Theme for DddTheme {
    fn category_color(&self, category: Category) -> Color {
        match category {
            Category::Default => ISO_WHITE,
            Category::Eighteen => FOREST_GREEN,
            Category::TwentyOne => ORIGINAL_87_PINK,
            Category::Limit => BRICK_RED,
        }
    }

    fn button_style(&self, state: ButtonState) -> Style {
        match state {
            ButtonState::Enabled => Style::default().fg(ISO_WHITE).bg(WONDER_PURPLE),
            ButtonState::Focused => Style::default()
                .fg(ISO_WHITE)
                .bg(OPPORTUNITY_GREEN)
                .add_modifier(Modifier::BOLD),
            ButtonState::Disabled => Style::default()
                .fg(LIMESTONE_GRAY)
                .bg(COALY_GRAY)
                .add_modifier(Modifier::DIM),
        }
    }

    fn border_color(&self) -> Color {
        GLOBAL_BORDER
    }

    fn confetti_colors(&self) -> &[Color] {
        &DDD_CONFETTI
    }
}
