use ratatui::style::Color;

use crate::preferences::ThemePreference;

/// Colours for one display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub input_background: Color,
    pub accent: Color,
    pub busy: Color,
    pub copy: Color,
    pub error: Color,
    pub highlight: Color,
}

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(0xf8, 0xf9, 0xfa),
    text: Color::Rgb(0x00, 0x00, 0x00),
    muted: Color::Rgb(0x6b, 0x72, 0x80),
    border: Color::Rgb(0xcc, 0xcc, 0xcc),
    input_background: Color::Rgb(0xff, 0xff, 0xff),
    accent: Color::Rgb(0x00, 0x7b, 0xff),
    busy: Color::Rgb(0x6c, 0x75, 0x7d),
    copy: Color::Rgb(0x28, 0xa7, 0x45),
    error: Color::Rgb(0xdc, 0x26, 0x26),
    highlight: Color::Rgb(0xe5, 0xe7, 0xeb),
};

pub const DARK: Palette = Palette {
    background: Color::Rgb(0x1a, 0x1a, 0x1a),
    text: Color::Rgb(0xff, 0xff, 0xff),
    muted: Color::Rgb(0x9c, 0xa3, 0xaf),
    border: Color::Rgb(0x40, 0x40, 0x40),
    input_background: Color::Rgb(0x33, 0x33, 0x33),
    accent: Color::Rgb(0x3b, 0x9b, 0xff),
    busy: Color::Rgb(0x6c, 0x75, 0x7d),
    copy: Color::Rgb(0x22, 0xc5, 0x5e),
    error: Color::Rgb(0xef, 0x44, 0x44),
    highlight: Color::Rgb(0x26, 0x26, 0x26),
};

pub fn palette(theme: ThemePreference) -> &'static Palette {
    match theme {
        ThemePreference::Light => &LIGHT,
        ThemePreference::Dark => &DARK,
    }
}
