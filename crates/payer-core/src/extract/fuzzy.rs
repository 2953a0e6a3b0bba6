//! Fuzzy matching of upper-case lines against the reference name corpus.

use tracing::trace;

use crate::models::candidate::{Candidate, Line, Stage};
use crate::text::{alpha_count, min_distance};

use super::patterns::UPPER_NAME_LINE;
use super::validator::strip_nome_label;
use super::{NameStage, StageContext};

/// Nearest-neighbor classifier over upper-case name-shaped lines.
///
/// The line containing the word closest to any reference token wins if that
/// distance is within `max_fuzzy_distance`; otherwise the line with the most
/// letters wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyMatcher;

impl FuzzyMatcher {
    pub fn new() -> Self {
        Self
    }

    fn candidate_lines<'l>(&self, lines: &'l [Line], ctx: &StageContext<'_>) -> Vec<&'l str> {
        let validator = ctx.validator();

        lines
            .iter()
            .map(|l| l.normalized.as_str())
            .filter(|text| text.chars().count() >= ctx.config.fuzzy_min_len)
            .filter(|text| UPPER_NAME_LINE.is_match(text))
            .filter(|text| validator.passes_identifier_checks(text))
            .filter(|text| !ctx.config.is_banned(text))
            .map(strip_nome_label)
            .filter(|text| !text.is_empty())
            .collect()
    }
}

impl NameStage for FuzzyMatcher {
    fn stage(&self) -> Stage {
        Stage::Fuzzy
    }

    fn extract(&self, lines: &[Line], ctx: &StageContext<'_>) -> Option<Candidate> {
        let candidates = self.candidate_lines(lines, ctx);
        if candidates.is_empty() {
            return None;
        }

        let tokens = &ctx.refs.name_tokens;
        let mut best: Option<(usize, &str)> = None;

        for &text in &candidates {
            let line_best = text
                .split_whitespace()
                .filter_map(|word| min_distance(word, tokens.iter()))
                .min();

            trace!("Fuzzy candidate {:?} best distance {:?}", text, line_best);

            if let Some(d) = line_best {
                if best.is_none_or(|(b, _)| d < b) {
                    best = Some((d, text));
                }
            }
        }

        if let Some((distance, text)) = best {
            if distance <= ctx.config.max_fuzzy_distance {
                return Some(Candidate::new(text, Stage::Fuzzy).with_distance(distance));
            }
        }

        // First of the lines with the most letters
        let mut longest: Option<(usize, &str)> = None;
        for &text in &candidates {
            let count = alpha_count(text);
            if longest.is_none_or(|(c, _)| count > c) {
                longest = Some((count, text));
            }
        }

        longest.map(|(_, text)| Candidate::new(text, Stage::Fuzzy))
    }
}
