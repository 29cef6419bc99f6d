//! Benchmark harness for external matrix-multiplication executables.
//!
//! The crate ships two tools. The runner (`mmbench`) sweeps matrix sizes
//! and thread counts, invokes the configured executables for every
//! repetition and writes the collected timings as CSV. The report tool
//! (`report`) merges one or more such CSVs, possibly gathered on
//! different machines, and renders four comparative figures.
//!
//! The executables are opaque collaborators: invoked as
//! `<program> <matrix_size> <threads> <seed>`, expected to print one
//! comma-separated line per thread whose last field is the elapsed time
//! in microseconds.

pub mod config;
pub mod error;
pub mod experiment;
pub mod report;
pub mod table;

pub use error::{Error, Result};
