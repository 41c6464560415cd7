//! # Plotter Errors

use std::io;
use thiserror::Error;

/// Errors raised while configuring the printer or writing a program.
#[derive(Debug, Error)]
pub enum PlotterError {
    /// The printer configuration is unusable.
    #[error("invalid printer configuration: {0}")]
    InvalidConfig(String),

    /// Writing the program failed.
    #[error("failed to write G-code: {0}")]
    Io(#[from] io::Error),
}
