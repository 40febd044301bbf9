//! Literal placeholder substitution over a chainspec template.
//!
//! The template is ordinary YAML text carrying three literal placeholder
//! tokens: `HEAD` (genesis head), `HASH` (validation code hash), and `WASM`
//! (hex-encoded validation code). Rendering replaces every occurrence of each
//! token as a plain substring, in the fixed order HEAD, HASH, WASM, with no
//! escaping and no check that the tokens are present at all. A template with
//! no placeholders renders as a byte-identical copy.
//!
//! Rendering streams line by line. Lines are read with their original
//! terminators attached (`\n`, `\r\n`, or none on a final unterminated line)
//! and written back immediately, so the output preserves the template's line
//! structure exactly and the full document is never buffered.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{InjectError, Result};

/// Placeholder token replaced by the genesis head.
pub const HEAD_TOKEN: &str = "HEAD";
/// Placeholder token replaced by the code hash.
pub const HASH_TOKEN: &str = "HASH";
/// Placeholder token replaced by the hex-encoded validation code.
pub const WASM_TOKEN: &str = "WASM";

/// The values substituted for the three placeholder tokens.
#[derive(Debug, Clone)]
pub struct Substitutions {
    /// Replaces `HEAD`: the genesis head (state root) string.
    pub head: String,
    /// Replaces `HASH`: the `0x`-prefixed code hash string.
    pub hash: String,
    /// Replaces `WASM`: the `0x`-prefixed hex validation code string.
    pub wasm: String,
}

/// Per-token replacement counts gathered while rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCounts {
    pub head: usize,
    pub hash: usize,
    pub wasm: usize,
}

/// What a render pass did: lines written and tokens replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    pub lines: usize,
    pub replaced: TokenCounts,
}

/// Substitute all three tokens in a single line, in the fixed order.
///
/// Each replacement applies to the result of the previous one, so a
/// replacement value that itself contains a later token is substituted
/// again. That is inherent to literal substitution and accepted here.
pub fn render_line(line: &str, subs: &Substitutions) -> String {
    line.replace(HEAD_TOKEN, &subs.head)
        .replace(HASH_TOKEN, &subs.hash)
        .replace(WASM_TOKEN, &subs.wasm)
}

fn render_line_counted(line: &str, subs: &Substitutions, counts: &mut TokenCounts) -> String {
    counts.head += line.matches(HEAD_TOKEN).count();
    let line = line.replace(HEAD_TOKEN, &subs.head);
    counts.hash += line.matches(HASH_TOKEN).count();
    let line = line.replace(HASH_TOKEN, &subs.hash);
    counts.wasm += line.matches(WASM_TOKEN).count();
    line.replace(WASM_TOKEN, &subs.wasm)
}

/// Render `template_path` into `output_path`, substituting the tokens.
///
/// Creates or truncates the output file. On a write failure mid-stream a
/// partial output file is left on disk; callers that need all-or-nothing
/// behavior should render to a scratch path and move the result.
pub fn render_file(
    template_path: &Path,
    output_path: &Path,
    subs: &Substitutions,
) -> Result<RenderStats> {
    let template = File::open(template_path).map_err(|e| InjectError::TemplateNotFound {
        path: template_path.to_path_buf(),
        source: e,
    })?;
    let output = File::create(output_path).map_err(|e| InjectError::OutputWrite {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    let mut reader = BufReader::new(template);
    let mut writer = BufWriter::new(output);
    let mut stats = RenderStats::default();
    let mut line = String::new();

    loop {
        line.clear();
        // read_line keeps the terminator, so `\n`, `\r\n`, and a missing
        // final newline all pass through unchanged. A mid-stream read
        // failure is an ordinary I/O error: the template was already opened.
        let read = reader.read_line(&mut line)?;
        if read == 0 {
            break;
        }
        let rendered = render_line_counted(&line, subs, &mut stats.replaced);
        writer
            .write_all(rendered.as_bytes())
            .map_err(|e| InjectError::OutputWrite {
                path: output_path.to_path_buf(),
                source: e,
            })?;
        stats.lines += 1;
    }

    writer.flush().map_err(|e| InjectError::OutputWrite {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(stats)
}
