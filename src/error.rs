/// Errors reported at the boundary of the approximation pipeline.
///
/// The pipeline itself is total over finite inputs; these variants cover
/// rejected input text, rejected configuration and unknown policy names.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("not a finite number: {input:?}")]
    InvalidInput { input: String },

    #[error("invalid configuration for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("unknown sort policy: {name:?}")]
    UnknownSortPolicy { name: String },
}

pub type Result<T> = std::result::Result<T, Error>;
