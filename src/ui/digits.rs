//! 3x5 block font for the counter value.

pub const GLYPH_HEIGHT: u16 = 5;
const GLYPH_WIDTH: usize = 3;

const DIGITS: [[&str; 5]; 10] = [
    ["███", "█ █", "█ █", "█ █", "███"],
    ["  █", "  █", "  █", "  █", "  █"],
    ["███", "  █", "███", "█  ", "███"],
    ["███", "  █", "███", "  █", "███"],
    ["█ █", "█ █", "███", "  █", "  █"],
    ["███", "█  ", "███", "  █", "███"],
    ["███", "█  ", "███", "█ █", "███"],
    ["███", "  █", "  █", "  █", "  █"],
    ["███", "█ █", "███", "█ █", "███"],
    ["███", "█ █", "███", "  █", "███"],
];

const MINUS: [&str; 5] = ["   ", "   ", "███", "   ", "   "];

fn glyph(ch: char) -> &'static [&'static str; 5] {
    match ch.to_digit(10) {
        Some(d) => &DIGITS[d as usize],
        None => &MINUS,
    }
}

/// Render `value` as five rows of block glyphs separated by one column.
pub fn big_number(value: i64) -> [String; 5] {
    let text = value.to_string();
    let mut rows: [String; 5] = Default::default();
    for (i, ch) in text.chars().enumerate() {
        let glyph = glyph(ch);
        for (row, line) in rows.iter_mut().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(glyph[row]);
        }
    }
    rows
}

/// Display width of [`big_number`] output, in columns.
pub fn big_number_width(value: i64) -> u16 {
    let chars = value.to_string().chars().count();
    (chars * (GLYPH_WIDTH + 1)).saturating_sub(1) as u16
}
