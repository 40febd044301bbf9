//! Unified error types for the chainspec-inject toolkit.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur during chainspec injection.
#[derive(Error, Debug)]
pub enum InjectError {
    // --- Inputs ---

    /// An input file (`statefile` or `wasmfile`) could not be read.
    #[error("input file not found at {path}")]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The wasm payload file holds something that is not hex: odd length
    /// or a non-hex character after the two-character prefix.
    #[error("malformed hex payload in {path}")]
    HexDecode {
        path: PathBuf,
        #[source]
        source: hex::FromHexError,
    },

    // --- Template ---

    /// The chainspec template could not be opened for reading.
    #[error("template not found at {path}")]
    TemplateNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The injected output file could not be created or written.
    #[error("failed to write output at {path}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- Report ---

    /// The injection report could not be serialized or parsed.
    #[error("failed to encode report at {path}")]
    ReportSerialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A catch-all for errors from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Alias for `Result<T, InjectError>`.
pub type Result<T> = std::result::Result<T, InjectError>;
