//! ANSI color escape sequences and the color-tag table

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const BLACK: &str = "\x1b[30m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";
pub const WHITE: &str = "\x1b[37m";
pub const BRIGHT_RED: &str = "\x1b[91m";
pub const BRIGHT_GREEN: &str = "\x1b[92m";
pub const BRIGHT_YELLOW: &str = "\x1b[93m";
pub const BRIGHT_BLUE: &str = "\x1b[94m";
pub const BRIGHT_MAGENTA: &str = "\x1b[95m";
pub const BRIGHT_CYAN: &str = "\x1b[96m";
pub const BRIGHT_WHITE: &str = "\x1b[97m";

/// Reset sequence, turns all attributes off
pub const RESET: &str = "\x1b[0m";

/// Recognized `{{COLOR_*}}` tag tokens and their escape sequences.
///
/// Tags outside this set are not an error; they pass through template
/// formatting untouched.
pub(crate) const COLOR_TAGS: [(&str, &str); 16] = [
    ("{{COLOR_BLACK}}", BLACK),
    ("{{COLOR_RED}}", RED),
    ("{{COLOR_GREEN}}", GREEN),
    ("{{COLOR_YELLOW}}", YELLOW),
    ("{{COLOR_BLUE}}", BLUE),
    ("{{COLOR_MAGENTA}}", MAGENTA),
    ("{{COLOR_CYAN}}", CYAN),
    ("{{COLOR_WHITE}}", WHITE),
    ("{{COLOR_BRIGHT_RED}}", BRIGHT_RED),
    ("{{COLOR_BRIGHT_GREEN}}", BRIGHT_GREEN),
    ("{{COLOR_BRIGHT_YELLOW}}", BRIGHT_YELLOW),
    ("{{COLOR_BRIGHT_BLUE}}", BRIGHT_BLUE),
    ("{{COLOR_BRIGHT_MAGENTA}}", BRIGHT_MAGENTA),
    ("{{COLOR_BRIGHT_CYAN}}", BRIGHT_CYAN),
    ("{{COLOR_BRIGHT_WHITE}}", BRIGHT_WHITE),
    ("{{COLOR_NONE}}", RESET),
];

/// Color names to escape sequences, keyed by the bare name used inside a tag.
static COLOR_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    COLOR_TAGS
        .iter()
        .map(|(tag, escape)| {
            let name = tag
                .trim_start_matches("{{COLOR_")
                .trim_end_matches("}}");
            (name, *escape)
        })
        .collect()
});

/// Look up an escape sequence by bare color name.
///
/// `"NONE"` resolves to the reset sequence. Returns `None` for names outside
/// the fixed tag set.
///
/// # Examples
///
/// ```
/// assert_eq!(locres::color_code("RED"), Some("\x1b[31m"));
/// assert_eq!(locres::color_code("ORANGE"), None);
/// ```
pub fn color_code(name: &str) -> Option<&'static str> {
    COLOR_NAMES.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_code_lookup() {
        assert_eq!(color_code("RED"), Some(RED));
        assert_eq!(color_code("BRIGHT_CYAN"), Some(BRIGHT_CYAN));
        assert_eq!(color_code("NONE"), Some(RESET));
        assert_eq!(color_code("ORANGE"), None);
        assert_eq!(color_code("red"), None);
    }

    #[test]
    fn test_every_tag_has_a_name() {
        assert_eq!(COLOR_NAMES.len(), COLOR_TAGS.len());
    }
}
