//! Errors raised while building a coverage model.

/// A malformed coverage specification.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum CoverageError {
    /// The model declares no coverpoints.
    #[error("coverage model `{model}` declares no coverpoints")]
    EmptyModel {
        /// The model name.
        model: String,
    },

    /// A coverpoint declares no bins, or a bin that can never match.
    #[error("coverpoint `{coverpoint}` has an empty bin set")]
    EmptyCoverpoint {
        /// The coverpoint name.
        coverpoint: String,
    },

    /// Two coverpoints or crosses share a name, or two bins of one coverpoint do.
    #[error("duplicate coverage name `{name}`")]
    DuplicateName {
        /// The repeated name.
        name: String,
    },

    /// A cross names a coverpoint that was not declared.
    #[error("cross `{cross}` refers to unknown coverpoint `{coverpoint}`")]
    UnknownCoverpoint {
        /// The cross name.
        cross: String,
        /// The missing coverpoint.
        coverpoint: String,
    },

    /// A cross has fewer than two constituents.
    #[error("cross `{cross}` needs at least two coverpoints, got {count}")]
    CrossTooNarrow {
        /// The cross name.
        cross: String,
        /// Number of constituents given.
        count: usize,
    },
}
