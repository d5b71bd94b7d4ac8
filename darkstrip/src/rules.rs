//! Deletion and replacement rules.
//!
//! The rule list is fixed: six [`PatternRule`]s, one per dark variant
//! category, followed by a single [`LiteralRule`]. Each rule rewrites the
//! text it is given; sequencing lives in [`crate::rewrite`].

use crate::constants::{
    BACKGROUND_LIGHT, BACKGROUND_PAIR, DARK_CATEGORIES, DARK_VARIANT_PREFIX, DARK_VARIANT_RES,
};
use regex::Regex;
use serde::Serialize;

/// How a rule changes the text it matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// Matched span is deleted.
    Pattern,
    /// Matched span is replaced with fixed text.
    Literal,
}

/// Deletes ` dark:<category><value>` tokens for one category.
#[derive(Debug, Clone)]
pub struct PatternRule {
    category: &'static str,
    regex: &'static Regex,
}

impl PatternRule {
    /// Deletes every non-overlapping match, left to right.
    ///
    /// Returns the new text and the number of deleted spans.
    pub fn apply(&self, source: &str) -> (String, usize) {
        let count = self.regex.find_iter(source).count();
        if count == 0 {
            return (source.to_owned(), 0);
        }
        (self.regex.replace_all(source, "").into_owned(), count)
    }
}

/// Exact substring replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralRule {
    /// Text to look for.
    pub find: &'static str,
    /// Text to put in its place.
    pub replace: &'static str,
}

impl LiteralRule {
    /// Replaces every non-overlapping occurrence, left to right.
    ///
    /// Returns the new text and the number of replacements.
    pub fn apply(&self, source: &str) -> (String, usize) {
        let count = source.matches(self.find).count();
        if count == 0 {
            return (source.to_owned(), 0);
        }
        (source.replace(self.find, self.replace), count)
    }
}

/// One step of the rewrite.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Dark variant deletion.
    Pattern(PatternRule),
    /// Fixed replacement.
    Literal(LiteralRule),
}

impl Rule {
    /// Short human-readable name used in reports.
    pub fn label(&self) -> String {
        match self {
            Self::Pattern(rule) => format!("{DARK_VARIANT_PREFIX}{}", rule.category),
            Self::Literal(rule) => rule.find.to_owned(),
        }
    }

    /// Whether this rule deletes or replaces.
    pub fn kind(&self) -> RuleKind {
        match self {
            Self::Pattern(_) => RuleKind::Pattern,
            Self::Literal(_) => RuleKind::Literal,
        }
    }

    /// Rewrites `source`, returning the new text and how many spans changed.
    pub fn apply(&self, source: &str) -> (String, usize) {
        match self {
            Self::Pattern(rule) => rule.apply(source),
            Self::Literal(rule) => rule.apply(source),
        }
    }
}

/// The six dark variant deletions in application order.
pub fn pattern_rules() -> Vec<PatternRule> {
    DARK_CATEGORIES
        .into_iter()
        .zip(DARK_VARIANT_RES())
        .map(|(category, regex)| PatternRule { category, regex })
        .collect()
}

/// The background pairing collapse applied after all deletions.
pub fn literal_rule() -> LiteralRule {
    LiteralRule {
        find: BACKGROUND_PAIR,
        replace: BACKGROUND_LIGHT,
    }
}

/// Full ordered rule list.
pub fn default_rules() -> Vec<Rule> {
    let mut rules: Vec<Rule> = pattern_rules().into_iter().map(Rule::Pattern).collect();
    rules.push(Rule::Literal(literal_rule()));
    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bg() -> PatternRule {
        pattern_rules().remove(0)
    }

    #[test]
    fn test_rule_order() {
        let labels: Vec<String> = default_rules().iter().map(Rule::label).collect();
        assert_eq!(
            labels,
            vec![
                "dark:bg-",
                "dark:text-",
                "dark:border-",
                "dark:hover:",
                "dark:active:",
                "dark:opacity-",
                "bg-background-light dark:bg-background-dark",
            ]
        );
    }

    #[test]
    fn test_only_last_rule_is_literal() {
        let rules = default_rules();
        let (last, patterns) = rules.split_last().unwrap();
        assert_eq!(last.kind(), RuleKind::Literal);
        assert!(patterns.iter().all(|r| r.kind() == RuleKind::Pattern));
    }

    #[test]
    fn test_pattern_requires_leading_space() {
        assert_eq!(
            bg().apply("class=\"dark:bg-red-500\""),
            ("class=\"dark:bg-red-500\"".to_owned(), 0)
        );
        assert_eq!(
            bg().apply("class=\"p-2 dark:bg-red-500\""),
            ("class=\"p-2\"".to_owned(), 1)
        );
    }

    #[test]
    fn test_pattern_requires_value() {
        for source in ["x dark:bg-", "x dark:bg- y", "x dark:bg-\""] {
            assert_eq!(bg().apply(source), (source.to_owned(), 0));
        }
    }

    #[test]
    fn test_pattern_stops_at_delimiters() {
        let text = &pattern_rules()[1];
        assert_eq!(
            text.apply("a dark:text-white\tb dark:text-red'c dark:text-x\""),
            ("a\tb'c\"".to_owned(), 3)
        );
    }

    #[test]
    fn test_information_separators_end_token() {
        assert_eq!(
            bg().apply("x dark:bg-a\u{1c}b dark:bg-c\u{1f}d"),
            ("x\u{1c}b\u{1f}d".to_owned(), 2)
        );
    }

    #[test]
    fn test_pattern_is_case_sensitive() {
        let source = "x Dark:bg-red x DARK:BG-red";
        assert_eq!(bg().apply(source), (source.to_owned(), 0));
    }

    #[test]
    fn test_unknown_category_ignored() {
        let source = "x dark:ring-2 dark:shadow-lg";
        for rule in pattern_rules() {
            assert_eq!(rule.apply(source).1, 0);
        }
    }

    #[test]
    fn test_literal_rule_apply() {
        assert_eq!(
            literal_rule().apply("a bg-background-light dark:bg-background-dark b"),
            ("a bg-background-light b".to_owned(), 1)
        );
    }
}
