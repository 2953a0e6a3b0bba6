//! Anchor → "nome" → candidate extraction.

use crate::models::candidate::{Candidate, Line, Stage};

use super::{NameStage, StageContext};

/// Finds an exact anchor line, then a "nome" marker shortly after it, then
/// the first valid line after the marker.
#[derive(Debug, Clone)]
pub struct AnchoredExtractor {
    anchor: String,
    stage: Stage,
}

impl AnchoredExtractor {
    pub fn new(anchor: impl Into<String>, stage: Stage) -> Self {
        Self {
            anchor: anchor.into().to_lowercase(),
            stage,
        }
    }

    /// The "pago por" variant.
    pub fn pago_por() -> Self {
        Self::new("pago por", Stage::AnchoredPagoPor)
    }

    /// The "origem" variant.
    pub fn origem() -> Self {
        Self::new("origem", Stage::AnchoredOrigem)
    }

    pub fn anchor(&self) -> &str {
        &self.anchor
    }
}

impl NameStage for AnchoredExtractor {
    fn stage(&self) -> Stage {
        self.stage
    }

    fn extract(&self, lines: &[Line], ctx: &StageContext<'_>) -> Option<Candidate> {
        let validator = ctx.validator();
        let lookahead = ctx.config.nome_lookahead;

        for line in lines {
            if line.lower != self.anchor {
                continue;
            }

            let Some(nome_idx) = lines
                .iter()
                .skip(line.index + 1)
                .take(lookahead)
                .find(|l| l.is_nome_marker())
                .map(|l| l.index)
            else {
                continue;
            };

            let found = lines[nome_idx + 1..]
                .iter()
                .find_map(|l| validator.validate(&l.normalized));

            if let Some(text) = found {
                return Some(Candidate::new(text, self.stage));
            }
        }

        None
    }
}
