//! CLI command implementations for chainspec-inject.
//!
//! Each module corresponds to a subcommand (`chainspec-inject <command>`).

pub mod digest;
pub mod inject;
