use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x38, 0xbd, 0xf8);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const HEADING_TEXT: Color = Color::Rgb(0xf5, 0xf5, 0xf5);
pub const BODY_TEXT: Color = Color::Rgb(0xd4, 0xd4, 0xd4);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const ATTENTION: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const SELECTION_BG: Color = Color::Rgb(0x26, 0x26, 0x26);
