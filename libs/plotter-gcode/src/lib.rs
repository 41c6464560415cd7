//! # Plotter G-code
//!
//! Generates G-code that drives a pen mounted in the plotter holder on a
//! 3D printer.
//!
//! ## Usage
//!
//! ```rust
//! use plotter_gcode::{Printer, PrinterConfig};
//!
//! let mut printer = Printer::new(PrinterConfig::default())?;
//! printer.draw_point(10.0, 10.0);
//!
//! let mut out = Vec::new();
//! printer.write_to(&mut out)?;
//! assert!(String::from_utf8_lossy(&out).contains("G0 X10.0 Y10.0 F1000.0"));
//! # Ok::<(), plotter_gcode::PlotterError>(())
//! ```

pub mod code;
pub mod error;
pub mod printer;

pub use code::{Code, Point, Source};
pub use error::PlotterError;
pub use printer::{Printer, PrinterConfig};
