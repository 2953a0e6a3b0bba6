//! Core library for payer name extraction from Pix receipt OCR text.
//!
//! This crate provides:
//! - Line normalization of raw OCR output
//! - Reference corpora (payer anchors, ignore phrases, common name tokens)
//! - A staged heuristic pipeline: anchored blocks, generic keywords,
//!   fuzzy matching against the name corpus, and a last-resort selector
//! - A request guard so callers can discard results of superseded OCR calls

pub mod corpus;
pub mod error;
pub mod extract;
pub mod models;
pub mod session;
pub mod text;

pub use corpus::{KeywordKind, KeywordSet, ReferenceData};
pub use error::{PayerError, Result};
pub use extract::{extract_payer_name, PayerNameExtractor};
pub use models::candidate::{Candidate, ExtractionResult, Line, Stage};
pub use models::config::{CorpusConfig, ExtractionConfig, PayerConfig};
pub use session::{RequestTicket, ReviewSession};
