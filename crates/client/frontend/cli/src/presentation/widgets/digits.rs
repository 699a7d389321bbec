//! Block-character digits for the point counters.

pub const GLYPH_HEIGHT: usize = 5;

fn glyph(ch: char) -> [&'static str; GLYPH_HEIGHT] {
    match ch {
        '0' => ["███", "█ █", "█ █", "█ █", "███"],
        '1' => [" █ ", "██ ", " █ ", " █ ", "███"],
        '2' => ["███", "  █", "███", "█  ", "███"],
        '3' => ["███", "  █", "███", "  █", "███"],
        '4' => ["█ █", "█ █", "███", "  █", "  █"],
        '5' => ["███", "█  ", "███", "  █", "███"],
        '6' => ["███", "█  ", "███", "█ █", "███"],
        '7' => ["███", "  █", "  █", "  █", "  █"],
        '8' => ["███", "█ █", "███", "█ █", "███"],
        '9' => ["███", "█ █", "███", "  █", "███"],
        '-' => ["   ", "   ", "███", "   ", "   "],
        _ => ["   "; GLYPH_HEIGHT],
    }
}

/// Renders `value` as five rows of block characters, one space between glyphs.
pub fn big_number(value: i32) -> [String; GLYPH_HEIGHT] {
    let text = value.to_string();
    std::array::from_fn(|row| {
        text.chars()
            .map(|ch| glyph(ch)[row])
            .collect::<Vec<_>>()
            .join(" ")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_multi_digit_numbers() {
        let rows = big_number(10);
        assert_eq!(rows[0], " █  ███");
        assert_eq!(rows[4], "███ ███");
    }

    #[test]
    fn renders_negative_numbers() {
        let rows = big_number(-1);
        assert_eq!(rows[2], "███  █ ");
        assert!(rows.iter().all(|row| row.chars().count() == 7));
    }
}
