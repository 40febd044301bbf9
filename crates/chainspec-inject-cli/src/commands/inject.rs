use anyhow::Result;

use chainspec_inject_core::inject::{self, InjectPaths};
use chainspec_inject_core::report;

use crate::output;
use crate::InjectArgs;

/// Render the injected chainspec.
///
/// Reads the genesis head and wasm payload, hashes the decoded payload, and
/// substitutes the `HEAD`, `HASH`, and `WASM` placeholders in the template.
/// Optionally persists a JSON report of what was injected.
pub fn run(args: &InjectArgs) -> Result<()> {
    output::print_header("chainspec-inject");

    let paths = InjectPaths {
        state: args.state.clone(),
        wasm: args.wasm.clone(),
        template: args.template.clone(),
        output: args.output.clone(),
    };

    output::print_key_value("State", &paths.state.display().to_string());
    output::print_key_value("Wasm", &paths.wasm.display().to_string());
    output::print_key_value("Template", &paths.template.display().to_string());

    let injection = inject::run(&paths)?;

    if let Some(report_path) = &args.report {
        report::save(&injection, report_path)?;
        output::print_key_value("Report", &report_path.display().to_string());
    }

    output::print_success("Chainspec injected");
    output::print_key_value("Output", &injection.output.display().to_string());
    output::print_key_value("Code hash", &injection.code_hash);
    output::print_key_value(
        "Code size",
        &format!("{} bytes", injection.code_size_bytes),
    );
    output::print_key_value(
        "Replacements",
        &format!(
            "HEAD x{}, HASH x{}, WASM x{}",
            injection.stats.replaced.head,
            injection.stats.replaced.hash,
            injection.stats.replaced.wasm
        ),
    );

    Ok(())
}
