//! The injection pipeline: inputs in, injected chainspec out.
//!
//! Runs the four steps in a fixed sequence: read the genesis head, read and
//! decode the validation code, hash it, render the template. Everything is
//! blocking and single-threaded. The hash is computed before the output file
//! is touched, so a malformed payload never leaves an output behind.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::digest;
use crate::error::Result;
use crate::payload;
use crate::template::{self, RenderStats, Substitutions};

/// Default name of the genesis head input file.
pub const DEFAULT_STATE_FILE: &str = "statefile";
/// Default name of the hex validation code input file.
pub const DEFAULT_WASM_FILE: &str = "wasmfile";
/// Default name of the chainspec template.
pub const DEFAULT_TEMPLATE_FILE: &str = "kusama.yml";
/// Default name of the injected output chainspec.
pub const DEFAULT_OUTPUT_FILE: &str = "kusama_injected.yml";

/// The four file paths the pipeline operates on.
///
/// `Default` resolves everything against the current working directory using
/// the fixed names the chain export step produces.
#[derive(Debug, Clone)]
pub struct InjectPaths {
    pub state: PathBuf,
    pub wasm: PathBuf,
    pub template: PathBuf,
    pub output: PathBuf,
}

impl Default for InjectPaths {
    fn default() -> Self {
        Self {
            state: DEFAULT_STATE_FILE.into(),
            wasm: DEFAULT_WASM_FILE.into(),
            template: DEFAULT_TEMPLATE_FILE.into(),
            output: DEFAULT_OUTPUT_FILE.into(),
        }
    }
}

/// Summary of a completed injection, suitable for machine-readable output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InjectionReport {
    /// The genesis head string injected for `HEAD`.
    pub genesis_head: String,
    /// The BLAKE2b-256 code hash injected for `HASH`.
    pub code_hash: String,
    /// Decoded validation code size in bytes.
    pub code_size_bytes: usize,
    /// Path the injected chainspec was written to.
    pub output: PathBuf,
    /// Lines written and placeholder occurrences replaced.
    #[serde(flatten)]
    pub stats: RenderStats,
}

/// Run the injection pipeline over the given paths.
pub fn run(paths: &InjectPaths) -> Result<InjectionReport> {
    let genesis_head = payload::read_line_trimmed(&paths.state)?;
    tracing::debug!(head = %genesis_head, "read genesis head");

    let wasm_hex = payload::read_line_trimmed(&paths.wasm)?;
    let code = payload::decode_prefixed_hex(&wasm_hex, &paths.wasm)?;
    tracing::debug!(bytes = code.len(), "decoded validation code");

    let hash = digest::code_hash(&code);
    tracing::info!(code_hash = %hash, "computed validation code hash");

    let subs = Substitutions {
        head: genesis_head.clone(),
        hash: hash.to_string(),
        wasm: wasm_hex,
    };
    let stats = template::render_file(&paths.template, &paths.output, &subs)?;
    tracing::info!(
        lines = stats.lines,
        output = %paths.output.display(),
        "rendered chainspec"
    );

    Ok(InjectionReport {
        genesis_head,
        code_hash: hash.to_string(),
        code_size_bytes: code.len(),
        output: paths.output.clone(),
        stats,
    })
}

/// Compute only the code hash of the wasm payload file.
pub fn hash_payload(wasm_path: &Path) -> Result<digest::CodeHash> {
    let wasm_hex = payload::read_line_trimmed(wasm_path)?;
    let code = payload::decode_prefixed_hex(&wasm_hex, wasm_path)?;
    Ok(digest::code_hash(&code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InjectError;

    fn write_inputs(dir: &Path, state: &str, wasm: &str, template: &str) -> InjectPaths {
        let paths = InjectPaths {
            state: dir.join("statefile"),
            wasm: dir.join("wasmfile"),
            template: dir.join("kusama.yml"),
            output: dir.join("kusama_injected.yml"),
        };
        std::fs::write(&paths.state, state).unwrap();
        std::fs::write(&paths.wasm, wasm).unwrap();
        std::fs::write(&paths.template, template).unwrap();
        paths
    }

    #[test]
    fn test_end_to_end_injection() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_inputs(
            dir.path(),
            "0xABC123\n",
            "0x1234\n",
            "genesis: \"HEAD\" code: \"WASM\" hash: \"HASH\"\n",
        );

        let report = run(&paths).unwrap();

        assert_eq!(report.genesis_head, "0xABC123");
        assert_eq!(report.code_size_bytes, 2);
        assert_eq!(report.code_hash.len(), 66);
        assert_eq!(report.code_hash, digest::code_hash(&[0x12, 0x34]).to_string());

        let rendered = std::fs::read_to_string(&paths.output).unwrap();
        assert_eq!(
            rendered,
            format!(
                "genesis: \"0xABC123\" code: \"0x1234\" hash: \"{}\"\n",
                report.code_hash
            )
        );
    }

    #[test]
    fn test_injection_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_inputs(dir.path(), "0xABC123\n", "0xcafe\n", "hash: HASH\n");

        let first = run(&paths).unwrap();
        let second = run(&paths).unwrap();
        assert_eq!(first.code_hash, second.code_hash);
    }

    #[test]
    fn test_malformed_payload_leaves_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_inputs(dir.path(), "0xABC123\n", "0x123\n", "hash: HASH\n");

        let err = run(&paths).unwrap_err();
        assert!(matches!(err, InjectError::HexDecode { .. }));
        assert!(!paths.output.exists());
    }

    #[test]
    fn test_missing_statefile() {
        let dir = tempfile::tempdir().unwrap();
        let paths = InjectPaths {
            state: dir.path().join("statefile"),
            wasm: dir.path().join("wasmfile"),
            template: dir.path().join("kusama.yml"),
            output: dir.path().join("kusama_injected.yml"),
        };
        let err = run(&paths).unwrap_err();
        assert!(matches!(err, InjectError::InputNotFound { .. }));
    }

    #[test]
    fn test_hash_payload_matches_pipeline() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_inputs(dir.path(), "0x00\n", "0x1234\n", "HASH\n");

        let hash = hash_payload(&paths.wasm).unwrap();
        let report = run(&paths).unwrap();
        assert_eq!(hash.to_string(), report.code_hash);
    }
}
