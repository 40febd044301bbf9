//! Core library for the chainspec-inject tool.
//!
//! Injects parachain genesis material into a chainspec YAML template: reads a
//! genesis head string and a hex-encoded wasm validation code blob from two
//! files, computes the BLAKE2b-256 code hash, and rewrites the template with
//! the `HEAD`, `HASH`, and `WASM` placeholder tokens replaced.
//!
//! The pipeline entry point is [`inject::run`]; the individual steps live in
//! [`payload`], [`digest`], and [`template`].

pub mod digest;
pub mod error;
pub mod inject;
pub mod payload;
pub mod report;
pub mod template;
