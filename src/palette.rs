//! Compiled color constants: brand ramp endpoints and the indexed series
//! palette used by the stacked histogram legend.

use crate::color::Color;

/// Terminal-purple background behind the dot grid.
pub const TERMINAL_BACKGROUND: Color = Color::rgb(0x30, 0x0a, 0x24);

/// Signaling cells: light and dark stops of the blue ramp.
pub const SIGNAL_BLUE: Color = Color::rgb(0x40, 0xa2, 0xf3);
pub const SIGNAL_BLUE_DARK: Color = Color::rgb(0x1c, 0x77, 0xd0);

/// Non-signaling cells: light and dark stops of the orange ramp.
pub const NO_SIGNAL_ORANGE: Color = Color::rgb(0xfa, 0x9f, 0x1e);
pub const NO_SIGNAL_ORANGE_DARK: Color = Color::rgb(0xee, 0x7a, 0x21);

/// Pending cells beyond the data window.
pub const PENDING_GREY: Color = Color::rgb(0x30, 0x30, 0x30);
pub const PENDING_GREY_DARK: Color = Color::rgb(0x28, 0x28, 0x28);

/// Rim greys for unattributed pie wedges.
pub const NEUTRAL_GREY: Color = Color::rgb(0x90, 0x90, 0x90);
pub const NEUTRAL_GREY_DARK: Color = Color::rgb(0x68, 0x68, 0x68);

/// Indexed palette for sub-category series, 64 entries. Sixteen hue families
/// in four brightness tiers, interleaved so adjacent ranks contrast.
pub const SERIES: [Color; 64] = [
    Color::rgb(0x1c, 0x77, 0xd0), // blue
    Color::rgb(0xee, 0x7a, 0x21), // orange
    Color::rgb(0x2e, 0xa0, 0x43), // green
    Color::rgb(0xc8, 0x28, 0x28), // red
    Color::rgb(0x8a, 0x5c, 0xd6), // violet
    Color::rgb(0x0f, 0xa8, 0x9e), // teal
    Color::rgb(0xd6, 0x42, 0x8a), // magenta
    Color::rgb(0xb8, 0x9c, 0x16), // olive
    Color::rgb(0x58, 0x58, 0x58), // grey
    Color::rgb(0x9c, 0x5a, 0x2e), // brown
    Color::rgb(0x2f, 0x54, 0x9e), // indigo
    Color::rgb(0xe0, 0xa8, 0x00), // gold
    Color::rgb(0x4e, 0x9a, 0x06), // moss
    Color::rgb(0x98, 0x20, 0x60), // plum
    Color::rgb(0x20, 0x88, 0x88), // pine
    Color::rgb(0xcc, 0x5c, 0x5c), // brick
    Color::rgb(0x40, 0xa2, 0xf3), // blue, light
    Color::rgb(0xfa, 0x9f, 0x1e), // orange, light
    Color::rgb(0x57, 0xc8, 0x6e), // green, light
    Color::rgb(0xe8, 0x55, 0x55), // red, light
    Color::rgb(0xaa, 0x85, 0xe8), // violet, light
    Color::rgb(0x38, 0xc9, 0xbe), // teal, light
    Color::rgb(0xe8, 0x70, 0xad), // magenta, light
    Color::rgb(0xd4, 0xbc, 0x3c), // olive, light
    Color::rgb(0x88, 0x88, 0x88), // grey, light
    Color::rgb(0xc0, 0x80, 0x50), // brown, light
    Color::rgb(0x58, 0x7c, 0xc4), // indigo, light
    Color::rgb(0xf4, 0xc4, 0x30), // gold, light
    Color::rgb(0x73, 0xc0, 0x2c), // moss, light
    Color::rgb(0xbe, 0x48, 0x8a), // plum, light
    Color::rgb(0x48, 0xae, 0xae), // pine, light
    Color::rgb(0xe2, 0x84, 0x84), // brick, light
    Color::rgb(0x12, 0x48, 0x8b), // blue, dark
    Color::rgb(0xb4, 0x56, 0x10), // orange, dark
    Color::rgb(0x1d, 0x6b, 0x2d), // green, dark
    Color::rgb(0x8e, 0x1a, 0x1a), // red, dark
    Color::rgb(0x63, 0x3c, 0xa4), // violet, dark
    Color::rgb(0x0a, 0x73, 0x6c), // teal, dark
    Color::rgb(0x9c, 0x2c, 0x62), // magenta, dark
    Color::rgb(0x82, 0x6e, 0x0e), // olive, dark
    Color::rgb(0x38, 0x38, 0x38), // grey, dark
    Color::rgb(0x6e, 0x40, 0x20), // brown, dark
    Color::rgb(0x1f, 0x38, 0x6e), // indigo, dark
    Color::rgb(0xa0, 0x78, 0x00), // gold, dark
    Color::rgb(0x36, 0x6c, 0x04), // moss, dark
    Color::rgb(0x6a, 0x14, 0x42), // plum, dark
    Color::rgb(0x14, 0x5e, 0x5e), // pine, dark
    Color::rgb(0x96, 0x3c, 0x3c), // brick, dark
    Color::rgb(0x7c, 0xc3, 0xf7), // blue, pale
    Color::rgb(0xfc, 0xc0, 0x6e), // orange, pale
    Color::rgb(0x92, 0xdd, 0xa2), // green, pale
    Color::rgb(0xf2, 0x94, 0x94), // red, pale
    Color::rgb(0xc9, 0xb2, 0xf2), // violet, pale
    Color::rgb(0x82, 0xde, 0xd7), // teal, pale
    Color::rgb(0xf2, 0xa6, 0xcc), // magenta, pale
    Color::rgb(0xe6, 0xd8, 0x80), // olive, pale
    Color::rgb(0xb4, 0xb4, 0xb4), // grey, pale
    Color::rgb(0xd8, 0xac, 0x88), // brown, pale
    Color::rgb(0x92, 0xaa, 0xde), // indigo, pale
    Color::rgb(0xf8, 0xdc, 0x7c), // gold, pale
    Color::rgb(0xa8, 0xd8, 0x74), // moss, pale
    Color::rgb(0xd8, 0x86, 0xb4), // plum, pale
    Color::rgb(0x84, 0xc8, 0xc8), // pine, pale
    Color::rgb(0xee, 0xb2, 0xb2), // brick, pale
];

/// Palette color for a sub-category rank. Ranks past the table wrap around;
/// series with more than 64 sub-categories repeat colors. Known limitation.
pub fn indexed(rank: usize) -> Color {
    SERIES[rank % SERIES.len()]
}
