//! Request tracking for callers that run OCR asynchronously.
//!
//! A review screen may start OCR for a new receipt before the previous call
//! resolves. Each request takes a ticket; only the most recent ticket may
//! publish a result, so a stale OCR response never overwrites a newer one.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::extract::PayerNameExtractor;
use crate::models::candidate::ExtractionResult;

/// Identifier of one extraction request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Issues monotonically increasing tickets and rejects superseded ones.
#[derive(Debug, Default)]
pub struct ReviewSession {
    latest: AtomicU64,
}

impl ReviewSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every earlier ticket.
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `ticket` is still the latest request.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Run extraction for a finished OCR call.
    ///
    /// Returns `None` if a newer request was started in the meantime; the
    /// caller must then drop the OCR output.
    pub fn complete(
        &self,
        ticket: RequestTicket,
        extractor: &PayerNameExtractor,
        text: Option<&str>,
    ) -> Option<ExtractionResult> {
        if !self.is_current(ticket) {
            debug!("Discarding result of superseded request {}", ticket.0);
            return None;
        }
        let result = extractor.extract(text);

        // A request may have started while extracting
        self.is_current(ticket).then_some(result)
    }
}
