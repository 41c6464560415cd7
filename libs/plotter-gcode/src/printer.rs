//! # Printer
//!
//! Collects drawing commands and wraps them in the printer's start and
//! shutdown sequences.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::code::{Code, Point, ABS_COORD, HOME, OFF, SET_ORIGIN, UNITS_MM, Z_RESET};
use crate::error::PlotterError;

// =============================================================================
// CONFIG
// =============================================================================

/// Printer and pen settings. Lengths in mm, speeds in mm/min.
///
/// # Example
///
/// ```rust
/// use plotter_gcode::PrinterConfig;
///
/// let config: PrinterConfig = serde_json::from_str(r#"{"zPlunge": 3.5}"#).unwrap();
/// assert_eq!(config.z_plunge, 3.5);
/// assert_eq!(config.model.as_deref(), Some("MK3S"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrinterConfig {
    /// Printer model checked before the program runs.
    pub model: Option<String>,
    /// Lower-left corner of the work area on the bed.
    pub min: (f64, f64),
    /// Upper-right corner of the work area on the bed.
    pub max: (f64, f64),
    /// Extents of the drawing's own coordinate space, mapped onto the work area.
    pub scale: Option<(f64, f64)>,
    /// Travel height with the pen lifted.
    pub z0: f64,
    /// Height the pen is lowered to when drawing.
    pub z_plunge: f64,
    pub move_speed: f64,
    pub plunge_speed: f64,
    pub retract_speed: f64,
    /// Emit a progress message every this many body commands.
    pub progress_interval: Option<usize>,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            model: Some("MK3S".to_owned()),
            min: (0.0, 0.0),
            max: (250.0, 210.0),
            scale: None,
            z0: 6.5,
            z_plunge: 4.0,
            move_speed: 1000.0,
            plunge_speed: 400.0,
            retract_speed: 800.0,
            progress_interval: None,
        }
    }
}

impl PrinterConfig {
    fn validate(&self) -> Result<(), PlotterError> {
        let invalid = |message: String| Err(PlotterError::InvalidConfig(message));

        if !(self.max.0 > self.min.0 && self.max.1 > self.min.1) {
            return invalid(format!(
                "work area max {:?} must exceed min {:?}",
                self.max, self.min
            ));
        }
        if let Some((w, h)) = self.scale {
            if !(w > 0.0 && h > 0.0) {
                return invalid(format!("scale extents must be positive: ({w}, {h})"));
            }
        }
        for (name, speed) in [
            ("moveSpeed", self.move_speed),
            ("plungeSpeed", self.plunge_speed),
            ("retractSpeed", self.retract_speed),
        ] {
            if !(speed > 0.0) {
                return invalid(format!("{name} must be positive: {speed}"));
            }
        }
        if !(self.z_plunge < self.z0) {
            return invalid(format!(
                "zPlunge {} must be below z0 {}",
                self.z_plunge, self.z0
            ));
        }
        if self.progress_interval == Some(0) {
            return invalid("progressInterval must be at least 1".to_owned());
        }
        Ok(())
    }
}

// =============================================================================
// PRINTER
// =============================================================================

/// Accumulates the body of a plotting program.
#[derive(Debug, Clone)]
pub struct Printer {
    config: PrinterConfig,
    code: Vec<Code>,
    /// Work area width.
    pub width: f64,
    /// Work area height.
    pub height: f64,
}

impl Printer {
    /// Creates a printer with an empty program body.
    pub fn new(config: PrinterConfig) -> Result<Self, PlotterError> {
        config.validate()?;
        Ok(Self {
            width: config.max.0 - config.min.0,
            height: config.max.1 - config.min.1,
            config,
            code: Vec::new(),
        })
    }

    /// Body commands recorded so far.
    pub fn body(&self) -> &[Code] {
        &self.code
    }

    /// Appends an arbitrary command to the body.
    pub fn push(&mut self, code: Code) {
        self.code.push(code);
    }

    /// Draws a dot: travel to the point, lower the pen, lift it again.
    ///
    /// With `scale` set, `(x, y)` is mapped from the drawing's extents onto
    /// the work area.
    pub fn draw_point(&mut self, x: f64, y: f64) {
        let (bed_x, bed_y) = match self.config.scale {
            Some((w, h)) => (
                rescale(x, 0.0, w, 0.0, self.width),
                rescale(y, 0.0, h, 0.0, self.height),
            ),
            None => (x, y),
        };

        self.code.push(Code::Comment(format!("draw_point({x:.1}, {y:.1})")));
        self.code
            .push(Code::Move(Point::xy(bed_x, bed_y), self.config.move_speed));
        self.code.push(Code::Move(
            Point::z(self.config.z_plunge),
            self.config.plunge_speed,
        ));
        self.code
            .push(Code::Move(Point::z(self.config.z0), self.config.retract_speed));
    }

    /// The complete program: header, body with progress messages, footer.
    pub fn program(&self) -> Vec<Code> {
        let mut program = self.header();

        let total = self.code.len();
        for (i, code) in self.code.iter().enumerate() {
            program.push(code.clone());
            let done = i + 1;
            if let Some(interval) = self.config.progress_interval {
                if done % interval == 0 {
                    let percent = done as f64 / total as f64 * 100.0;
                    program.push(Code::Message(format!("{percent:.1}%")));
                }
            }
        }

        program.extend(self.footer());
        program
    }

    /// Writes the program, one command per line.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), PlotterError> {
        let program = self.program();
        for code in &program {
            if code.is_empty_move() {
                warn!(?code, "move without coordinates");
            }
            writeln!(writer, "{code}")?;
        }
        writer.flush()?;
        debug!(
            lines = program.len(),
            body = self.code.len(),
            "G-code program written"
        );
        Ok(())
    }

    /// Writes the program to a file, replacing any existing one.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PlotterError> {
        let file = File::create(path.as_ref())?;
        self.write_to(BufWriter::new(file))
    }

    fn header(&self) -> Vec<Code> {
        let mut header = vec![Code::Comment("Start of generated code".to_owned())];
        if let Some(model) = &self.config.model {
            header.push(Code::Model(model.clone()));
        }
        header.extend([
            UNITS_MM,
            ABS_COORD,
            HOME,
            Code::Move(
                Point::xyz(self.config.min.0, self.config.min.1, self.config.z0),
                self.config.move_speed,
            ),
            SET_ORIGIN,
            Code::Message("0.0%".to_owned()),
        ]);
        header
    }

    fn footer(&self) -> Vec<Code> {
        vec![
            Code::Comment("Lift the head up before turning off".to_owned()),
            Code::Move(Point::z(Z_RESET), self.config.move_speed),
            OFF,
        ]
    }
}

/// Maps `m` from `[rmin, rmax]` onto `[tmin, tmax]`.
fn rescale(m: f64, rmin: f64, rmax: f64, tmin: f64, tmax: f64) -> f64 {
    (m - rmin) / (rmax - rmin) * (tmax - tmin) + tmin
}
