mod inject;

pub use inject::*;

/// Script block that registers `coi-serviceworker.js` for `/dialogTest/` and
/// reloads the page once the worker activates.
pub const SERVICE_WORKER_SNIPPET: &str = include_str!("sw_register.html");

/// Insertion anchor. Matched literally and case-sensitively.
pub const HEAD_MARKER: &str = "</head>";

/// Result of a single injection attempt. Both variants are successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// Snippet was placed before the marker found at `offset` in the original text.
    Inserted { offset: usize },

    /// No marker in the text; nothing was changed.
    MarkerMissing,
}

impl PatchOutcome {
    #[inline(always)]
    pub fn is_inserted(&self) -> bool {
        matches!(self, PatchOutcome::Inserted { .. })
    }
}
