//! Hex color string parsing.

use ratatui::style::Color;

/// Parse a raw theme color string into a terminal color.
///
/// Accepts `#RGB`, `#RRGGBB`, and `#RRGGBBAA` (alpha parsed and
/// discarded; terminals have no alpha channel). Returns `None` for
/// anything else - malformed values are treated as absence by the
/// resolver, not as errors.
pub fn parse_color(raw: &str) -> Option<Color> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let mut nibbles = hex.chars().map(|c| c.to_digit(16).unwrap_or(0) as u8);
            let (r, g, b) = (nibbles.next()?, nibbles.next()?, nibbles.next()?);
            Some(Color::Rgb(r * 17, g * 17, b * 17))
        }
        6 | 8 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(parse_color("#1e1e2e"), Some(Color::Rgb(0x1e, 0x1e, 0x2e)));
    }

    #[test]
    fn parses_short_hex_by_doubling_nibbles() {
        assert_eq!(parse_color("#fff"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_color("#a0c"), Some(Color::Rgb(0xaa, 0x00, 0xcc)));
    }

    #[test]
    fn parses_eight_digit_hex_discarding_alpha() {
        assert_eq!(parse_color("#11223380"), Some(Color::Rgb(0x11, 0x22, 0x33)));
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(parse_color("  #000000 "), Some(Color::Rgb(0, 0, 0)));
    }

    #[test]
    fn rejects_malformed_values() {
        assert_eq!(parse_color(""), None);
        assert_eq!(parse_color("red"), None);
        assert_eq!(parse_color("#"), None);
        assert_eq!(parse_color("#12"), None);
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#zzzzzz"), None);
        assert_eq!(parse_color("123456"), None);
    }
}
