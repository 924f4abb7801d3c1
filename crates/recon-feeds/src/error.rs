use thiserror::Error;

/// Failure reading an upstream collection. Normalization itself never fails;
/// these are the only errors a batch can surface.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("i/o error reading records: {0}")]
    Io(#[from] std::io::Error),

    /// `line` is the 1-based line (JSON Lines) or line within the document
    /// (JSON array) where decoding failed.
    #[error("invalid JSON at line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// `position` is the 1-based line (JSON Lines) or element (JSON array).
    #[error("record {position} is a JSON {found}, expected an object")]
    NotAnObject { position: usize, found: &'static str },

    #[error("record receiver dropped before the batch finished")]
    ChannelClosed,
}
