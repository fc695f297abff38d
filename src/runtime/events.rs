//! Service event stream payloads.

/// Events emitted from the single-writer service loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerEvent {
    /// A log was parsed and installed.
    LogParsed {
        /// Records decoded from the text.
        records: usize,
    },
    /// The roster index was rebuilt.
    RosterUpdated {
        /// Members indexed.
        members: usize,
    },
    /// An award computation finished.
    Calculated {
        /// Distinct members matched.
        unique_members: usize,
    },
}
