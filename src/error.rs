// src/error.rs

/// Everything that can go wrong before the pipeline runs. The passes themselves
/// are total over a tokenized document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input ended inside a tag, comment or doctype.
    #[error("unterminated {construct} starting at byte {offset}")]
    Unterminated {
        construct: &'static str,
        offset: usize,
    },

    #[error("invalid excludeComment pattern `{pattern}`")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid value `{value}` for option `{key}`")]
    InvalidOption { key: String, value: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
