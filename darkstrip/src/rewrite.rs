//! The text transform: every rule in order, each over the previous result.

use crate::rules::{default_rules, RuleKind};
use serde::Serialize;

/// How many spans one rule changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleStats {
    /// Rule label, e.g. `dark:bg-`.
    pub rule: String,
    /// Deletion or replacement.
    pub kind: RuleKind,
    /// Number of spans changed.
    pub count: usize,
}

/// Transformed text plus per-rule counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    /// Text after all rules ran.
    pub text: String,
    /// One entry per rule, in application order.
    pub rules: Vec<RuleStats>,
}

impl RewriteOutcome {
    /// Total spans deleted by pattern rules.
    pub fn removed(&self) -> usize {
        self.count_of(RuleKind::Pattern)
    }

    /// Total spans substituted by the literal rule.
    pub fn replaced(&self) -> usize {
        self.count_of(RuleKind::Literal)
    }

    fn count_of(&self, kind: RuleKind) -> usize {
        self.rules
            .iter()
            .filter(|stats| stats.kind == kind)
            .map(|stats| stats.count)
            .sum()
    }
}

/// Runs the full rule list over `source`, each rule on the previous result.
pub fn rewrite_with_summary(source: &str) -> RewriteOutcome {
    let mut text = source.to_owned();
    let mut rules = Vec::new();

    for rule in default_rules() {
        let (next, count) = rule.apply(&text);
        text = next;
        rules.push(RuleStats {
            rule: rule.label(),
            kind: rule.kind(),
            count,
        });
    }

    RewriteOutcome { text, rules }
}

/// Runs the full rule list over `source` and returns the new text.
pub fn rewrite(source: &str) -> String {
    rewrite_with_summary(source).text
}
