//! Generic payer keyword extraction.

use crate::models::candidate::{Candidate, Line, Stage};

use super::{NameStage, StageContext};

/// Looks for any payer keyword and takes the first valid line among the
/// next few lines. A miss moves on to the next keyword occurrence.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordExtractor;

impl KeywordExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl NameStage for KeywordExtractor {
    fn stage(&self) -> Stage {
        Stage::KeywordGeneric
    }

    fn extract(&self, lines: &[Line], ctx: &StageContext<'_>) -> Option<Candidate> {
        let validator = ctx.validator();

        for line in lines {
            if !ctx.refs.payer_anchors.matched_by(&line.lower) {
                continue;
            }

            let found = lines
                .iter()
                .skip(line.index + 1)
                .take(ctx.config.keyword_lookahead)
                .find_map(|l| validator.validate(&l.normalized));

            if let Some(text) = found {
                return Some(Candidate::new(text, Stage::KeywordGeneric));
            }
        }

        None
    }
}
