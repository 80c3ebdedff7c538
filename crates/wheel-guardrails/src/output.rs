use wheel_core::{Candidate, Rejection};

/// What a guardrail pass kept, dropped, and added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuardrailOutput {
    /// Survivors in input order, followed by any injected fallbacks.
    pub candidates: Vec<Candidate>,
    pub removed: Vec<Rejection>,
    /// How many of `candidates` came from the curated pool.
    pub injected: usize,
}

impl GuardrailOutput {
    /// Nothing triggered.
    pub fn passthrough(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates,
            ..Self::default()
        }
    }

    /// The trailing candidates that were injected rather than matched.
    pub fn injected_candidates(&self) -> &[Candidate] {
        &self.candidates[self.candidates.len().saturating_sub(self.injected)..]
    }
}
