use regex::Regex;
use std::sync::OnceLock;

/// Variant marker that introduces a dark-mode class.
pub const DARK_VARIANT_PREFIX: &str = "dark:";

/// Category tags stripped after the dark variant marker, in application order.
pub const DARK_CATEGORIES: [&str; 6] = ["bg-", "text-", "border-", "hover:", "active:", "opacity-"];

/// Value part of a class token: runs up to the next whitespace or quote.
///
/// The information separators U+001C..U+001F also end a token, although
/// Unicode `White_Space` (and so `\s`) omits them.
pub const TOKEN_VALUE_PATTERN: &str = r#"[^\s\x1C-\x1F"']+"#;

/// Background pairing collapsed by the literal rule.
pub const BACKGROUND_PAIR: &str = "bg-background-light dark:bg-background-dark";

/// Light-only replacement for [`BACKGROUND_PAIR`].
pub const BACKGROUND_LIGHT: &str = "bg-background-light";

/// Builds the deletion pattern for one category: a single space, the dark
/// variant marker, the category tag and a non-empty token value.
pub fn dark_variant_pattern(category: &str) -> String {
    format!(
        " {}{}{}",
        regex::escape(DARK_VARIANT_PREFIX),
        regex::escape(category),
        TOKEN_VALUE_PATTERN
    )
}

/// Compiled deletion regexes, index-aligned with [`DARK_CATEGORIES`].
///
/// # Panics
///
/// Panics if a generated pattern is invalid.
pub fn get_dark_variant_res() -> &'static [Regex] {
    static RES: OnceLock<Vec<Regex>> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RES.get_or_init(|| {
        DARK_CATEGORIES
            .iter()
            .map(|category| {
                Regex::new(&dark_variant_pattern(category))
                    .expect("Invalid dark variant regex pattern")
            })
            .collect()
    })
}

pub use get_dark_variant_res as DARK_VARIANT_RES;
