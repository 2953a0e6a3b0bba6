//! Last-resort selection of the longest name-shaped line.

use crate::models::candidate::{Candidate, Line, Stage};
use crate::text::alpha_count;

use super::patterns::NAME_LINE;
use super::{NameStage, StageContext};

#[derive(Debug, Clone, Copy, Default)]
pub struct LastResortSelector;

impl LastResortSelector {
    pub fn new() -> Self {
        Self
    }
}

impl NameStage for LastResortSelector {
    fn stage(&self) -> Stage {
        Stage::LastResort
    }

    fn extract(&self, lines: &[Line], ctx: &StageContext<'_>) -> Option<Candidate> {
        let mut longest: Option<(usize, &str)> = None;

        for line in lines {
            let text = line.normalized.as_str();
            let count = alpha_count(text);
            if count < ctx.config.min_alpha_chars || !NAME_LINE.is_match(text) {
                continue;
            }
            if longest.is_none_or(|(c, _)| count > c) {
                longest = Some((count, text));
            }
        }

        longest.map(|(_, text)| Candidate::new(text, Stage::LastResort))
    }
}
