//! Task text refinement.
//!
//! Authors phrase the same status in many ways ("진행 중입니다",
//! "진행 중"). The refiner rewrites a fixed, ordered table of
//! verb-phrase variants into canonical short forms, dedupes the
//! resulting lines, and re-bullets them. It runs as an optional stage
//! over the aggregator's output; earlier report formats skip it.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::{BULLET, PLACEHOLDER};

/// Bullet glyphs stripped from the front of an incoming line before
/// refinement.
const BULLET_GLYPHS: &[char] = &['•', '-', '*', '·'];

/// One phrase-canonicalization rule. Rules are applied strictly in
/// list order; when patterns overlap, the order is part of the
/// configuration and changing it changes output.
#[derive(Debug, Clone)]
pub struct RewriteRule {
    pattern: Regex,
    replacement: String,
}

impl RewriteRule {
    /// Compile a rule from a pattern string.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|e| Error::InvalidRule {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            pattern,
            replacement: replacement.to_string(),
        })
    }

    fn apply(&self, line: &str) -> String {
        self.pattern.replace_all(line, self.replacement.as_str()).into_owned()
    }
}

/// The built-in rule table, in rewrite order.
static DEFAULT_RULES: LazyLock<Vec<RewriteRule>> = LazyLock::new(|| {
    [
        ("진행 중(입니다)?", "진행"),
        ("완료(하였습니다|했습니다)?", "완료"),
        ("예정(입니다)?", "예정"),
        ("팔로우업|팔로업", "F/U"),
    ]
    .iter()
    .map(|&(p, r)| RewriteRule::new(p, r).expect("built-in rule must compile"))
    .collect()
});

/// Line-level refiner: strips bullets, canonicalizes phrases, dedupes,
/// and re-bullets. Idempotent over its own output.
#[derive(Debug, Clone)]
pub struct TextRefiner {
    rules: Vec<RewriteRule>,
}

impl Default for TextRefiner {
    fn default() -> Self {
        Self {
            rules: DEFAULT_RULES.clone(),
        }
    }
}

impl TextRefiner {
    /// Refiner with the built-in rule table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Refiner with a custom ordered rule table.
    pub fn with_rules(rules: Vec<RewriteRule>) -> Self {
        Self { rules }
    }

    /// Refine one project's multi-line task block. An empty result
    /// renders as the placeholder dash.
    pub fn refine(&self, text: &str) -> String {
        let lines = self.refine_lines(text.lines());
        if lines.is_empty() {
            return PLACEHOLDER.to_string();
        }

        lines
            .into_iter()
            .map(|l| format!("{}{}", BULLET, l))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Strip, rewrite, and dedupe lines without re-bulleting.
    fn refine_lines<'a>(&self, lines: impl Iterator<Item = &'a str>) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();

        for line in lines {
            let stripped = strip_bullet(line);
            if stripped.is_empty() {
                continue;
            }

            let mut rewritten = stripped.to_string();
            for rule in &self.rules {
                rewritten = rule.apply(&rewritten);
            }
            let rewritten = rewritten.trim().to_string();

            if rewritten.is_empty() || out.contains(&rewritten) {
                continue;
            }
            out.push(rewritten);
        }

        out
    }
}

/// Remove one leading bullet glyph plus surrounding whitespace.
fn strip_bullet(line: &str) -> &str {
    let trimmed = line.trim();
    trimmed
        .strip_prefix(BULLET_GLYPHS)
        .map(str::trim_start)
        .unwrap_or(trimmed)
}
