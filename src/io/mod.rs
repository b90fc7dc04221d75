//! Codec boundary, command-line surface, and error handling

/// Command-line interface and batch file processing
pub mod cli;
/// Default parameter values and display constants
pub mod configuration;
/// Error types and exit status mapping
pub mod error;
/// PNG decoding into and encoding from planar buffers
pub mod image;
/// Multi-file progress display
pub mod progress;
