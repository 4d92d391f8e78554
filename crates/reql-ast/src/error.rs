use thiserror::Error;

/// Errors raised while normalizing arguments or encoding a term tree.
///
/// All of these surface synchronously to the caller building or sending
/// the query. There is no partial success: a tree either encodes
/// completely or the encode call fails as a whole.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReqlError {
    /// A raw value has no ReQL representation and was rejected during
    /// normalization.
    #[error("unsupported argument: {0}")]
    UnsupportedArgument(String),

    /// A literal survived normalization but cannot be represented in the
    /// wire format.
    #[error("value cannot be encoded for the wire: {0}")]
    UnencodableValue(String),

    /// An option name was rejected.
    #[error("invalid option key {0:?}")]
    InvalidOptionKey(String),
}

pub type Result<T> = std::result::Result<T, ReqlError>;
