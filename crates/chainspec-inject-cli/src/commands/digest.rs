use std::path::Path;

use anyhow::Result;

use chainspec_inject_core::inject;

/// Print the BLAKE2b-256 hash of the wasm payload file.
///
/// Output is the bare `0x`-prefixed digest on stdout, so it can be piped
/// into other tooling without parsing.
pub fn run(wasm_path: &Path) -> Result<()> {
    let hash = inject::hash_payload(wasm_path)?;
    println!("{hash}");
    Ok(())
}
