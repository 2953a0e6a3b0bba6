//! WASM bindings for Pix receipt payer name extraction.
//!
//! This crate lets browser review screens run the extractor on OCR output
//! produced client-side.

use wasm_bindgen::prelude::*;

use payer_core::{
    ExtractionConfig, KeywordKind, KeywordSet, PayerNameExtractor, RequestTicket, ReviewSession,
};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Extract the payer name from receipt OCR text.
///
/// Returns an empty string when no name was found.
#[wasm_bindgen]
pub fn extract_payer_name(text: Option<String>) -> String {
    payer_core::extract_payer_name(text.as_deref())
}

/// Ticket for one OCR request, see [`PayerExtractor::begin_request`].
#[wasm_bindgen]
pub struct Ticket(RequestTicket);

#[wasm_bindgen]
impl Ticket {
    /// Request number; later requests have larger ids.
    #[wasm_bindgen(getter)]
    pub fn id(&self) -> u64 {
        self.0.id()
    }
}

/// Payer name extractor class for browser use.
#[wasm_bindgen]
pub struct PayerExtractor {
    extractor: PayerNameExtractor,
    session: ReviewSession,
}

#[wasm_bindgen]
impl PayerExtractor {
    /// Create an extractor with the built-in corpora.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            extractor: PayerNameExtractor::new(),
            session: ReviewSession::new(),
        }
    }

    /// Create an extractor from an `ExtractionConfig` JSON object.
    #[wasm_bindgen]
    pub fn from_config_json(json: &str) -> Result<PayerExtractor, JsValue> {
        let config: ExtractionConfig =
            serde_json::from_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(Self {
            extractor: PayerNameExtractor::new().with_config(config),
            session: ReviewSession::new(),
        })
    }

    /// Replace one corpus: "payer_anchors", "ignore_phrases" or "name_tokens".
    #[wasm_bindgen]
    pub fn set_corpus(&mut self, kind: &str, phrases: Vec<String>) -> Result<(), JsValue> {
        let mut refs = self.extractor.reference_data().clone();
        match kind {
            "payer_anchors" => {
                refs.payer_anchors = KeywordSet::from_phrases(KeywordKind::PayerAnchors, &phrases)
            }
            "ignore_phrases" => {
                refs.ignore_phrases = KeywordSet::from_phrases(KeywordKind::IgnorePhrases, &phrases)
            }
            "name_tokens" => {
                refs.name_tokens =
                    KeywordSet::from_phrases(KeywordKind::ReferenceNameTokens, &phrases)
            }
            other => return Err(JsValue::from_str(&format!("unknown corpus: {}", other))),
        }

        let config = self.extractor.config().clone();
        self.extractor = PayerNameExtractor::new()
            .with_reference_data(refs)
            .with_config(config);
        Ok(())
    }

    /// Extract the payer name. Empty string means not found.
    #[wasm_bindgen]
    pub fn extract(&self, text: Option<String>) -> String {
        self.extractor.extract(text.as_deref()).name
    }

    /// Winning candidate with its stage and distance, or `null`.
    #[wasm_bindgen]
    pub fn extract_with_details(&self, text: Option<String>) -> Result<JsValue, JsValue> {
        let candidate = self.extractor.explain(text.as_deref());

        serde_wasm_bindgen::to_value(&candidate)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Start a new OCR request, superseding any in flight.
    #[wasm_bindgen]
    pub fn begin_request(&self) -> Ticket {
        Ticket(self.session.begin())
    }

    /// Whether `ticket` is still the latest request.
    #[wasm_bindgen]
    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.session.is_current(ticket.0)
    }

    /// Extract for a finished OCR request.
    ///
    /// Returns `undefined` when a newer request has started; the caller
    /// must not display the result.
    #[wasm_bindgen]
    pub fn complete_request(&self, ticket: &Ticket, text: Option<String>) -> Option<String> {
        self.session
            .complete(ticket.0, &self.extractor, text.as_deref())
            .map(|r| r.name)
    }
}

impl Default for PayerExtractor {
    fn default() -> Self {
        Self::new()
    }
}
