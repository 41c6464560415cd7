//! # G-code Commands
//!
//! Individual commands and their text rendering. Coordinates and feed rates
//! are always printed with one decimal place.

use std::borrow::Cow;
use std::fmt;

/// Movement mode used for every generated move (`G0`, rapid move).
pub const G_MODE: u32 = 0;

/// Height the head is lifted to before the motors are switched off.
pub const Z_RESET: f64 = 80.0;

/// Home all axes without mesh bed levelling.
pub const HOME: Code = Code::Raw(Source::new("G28 W", Some("Home all without mesh bed level")));
/// Millimetre units.
pub const UNITS_MM: Code = Code::Raw(Source::new("G21", Some("Set units to millimeters")));
/// Absolute positioning.
pub const ABS_COORD: Code = Code::Raw(Source::new("G90", Some("Use absolute coordinates")));
/// Make the current XY position the origin.
pub const SET_ORIGIN: Code = Code::Raw(Source::new("G92 X0 Y0", Some("Set current position to origin")));
/// Disable the stepper motors.
pub const OFF: Code = Code::Raw(Source::new("M84", Some("Disable motors")));

// =============================================================================
// POINT
// =============================================================================

/// Move target; axes left as `None` keep their current position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

impl Point {
    /// Target in the XY plane.
    pub fn xy(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z: None,
        }
    }

    /// Target height only.
    pub fn z(z: f64) -> Self {
        Self {
            z: Some(z),
            ..Self::default()
        }
    }

    /// Target on all three axes.
    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z: Some(z),
        }
    }

    /// True when no axis is set.
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.z.is_none()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let axes = [('X', self.x), ('Y', self.y), ('Z', self.z)];
        let mut first = true;
        for (axis, value) in axes {
            let Some(value) = value else { continue };
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{axis}{value:.1}")?;
            first = false;
        }
        Ok(())
    }
}

// =============================================================================
// SOURCE
// =============================================================================

/// A literal G-code line with an optional trailing comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub code: Cow<'static, str>,
    pub comment: Option<Cow<'static, str>>,
}

impl Source {
    /// Creates a source line from static text.
    pub const fn new(code: &'static str, comment: Option<&'static str>) -> Self {
        let comment = match comment {
            Some(text) => Some(Cow::Borrowed(text)),
            None => None,
        };
        Self {
            code: Cow::Borrowed(code),
            comment,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.comment {
            Some(comment) => write!(f, "{} ; {}", self.code, comment),
            None => f.write_str(&self.code),
        }
    }
}

// =============================================================================
// CODE
// =============================================================================

/// A single line of a G-code program.
#[derive(Debug, Clone, PartialEq)]
pub enum Code {
    /// `; text`
    Comment(String),
    /// Printer model check (`M862.3`).
    Model(String),
    /// Text shown on the printer display (`M117`).
    Message(String),
    /// Rapid move to a point at a feed rate in mm/min.
    Move(Point, f64),
    /// Literal code.
    Raw(Source),
}

impl Code {
    /// True for a move that names no axis; it renders as a warning comment.
    pub fn is_empty_move(&self) -> bool {
        matches!(self, Code::Move(point, _) if point.is_empty())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Code::Comment(text) => write!(f, "; {text}"),
            Code::Model(model) => write!(f, "M862.3 P {model} ; printer model check"),
            Code::Message(text) => write!(f, "M117 {text}"),
            Code::Move(point, _) if point.is_empty() => {
                f.write_str("; [WARNING] Move without coordinates!")
            }
            Code::Move(point, feed) => write!(f, "G{G_MODE} {point} F{feed:.1}"),
            Code::Raw(source) => write!(f, "{source}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_message() {
        let c = Code::Message("Hello".to_owned());
        assert_eq!(c.to_string(), "M117 Hello");

        let c = Code::Message(format!("{:.1}%", 50.3));
        assert_eq!(c.to_string(), "M117 50.3%");
    }

    #[test]
    fn code_move() {
        let cases = [
            (Point::default(), "; [WARNING] Move without coordinates!"),
            (Point { x: Some(0.0), ..Point::default() }, "G0 X0.0 F1000.0"),
            (Point { x: Some(0.0), y: Some(1.0), z: None }, "G0 X0.0 Y1.0 F1000.0"),
            (Point::xyz(0.0, 1.0, 2.0), "G0 X0.0 Y1.0 Z2.0 F1000.0"),
            (Point { x: Some(0.0), y: None, z: Some(2.0) }, "G0 X0.0 Z2.0 F1000.0"),
            (Point::z(2.0), "G0 Z2.0 F1000.0"),
            (Point { y: Some(1.0), ..Point::default() }, "G0 Y1.0 F1000.0"),
        ];
        for (point, expected) in cases {
            assert_eq!(Code::Move(point, 1000.0).to_string(), expected);
        }
    }

    #[test]
    fn code_move_rounds_to_one_decimal() {
        let c = Code::Move(Point::xy(12.345, -0.06), 400.0);
        assert_eq!(c.to_string(), "G0 X12.3 Y-0.1 F400.0");
    }

    #[test]
    fn code_model_and_comment() {
        assert_eq!(
            Code::Model("MK3S".to_owned()).to_string(),
            "M862.3 P MK3S ; printer model check"
        );
        assert_eq!(Code::Comment("hi".to_owned()).to_string(), "; hi");
    }

    #[test]
    fn code_raw() {
        assert_eq!(HOME.to_string(), "G28 W ; Home all without mesh bed level");
        assert_eq!(UNITS_MM.to_string(), "G21 ; Set units to millimeters");
        assert_eq!(ABS_COORD.to_string(), "G90 ; Use absolute coordinates");
        assert_eq!(SET_ORIGIN.to_string(), "G92 X0 Y0 ; Set current position to origin");
        assert_eq!(OFF.to_string(), "M84 ; Disable motors");
        assert_eq!(Code::Raw(Source::new("M400", None)).to_string(), "M400");
    }

    #[test]
    fn empty_move_detection() {
        assert!(Code::Move(Point::default(), 1.0).is_empty_move());
        assert!(!Code::Move(Point::z(1.0), 1.0).is_empty_move());
        assert!(!OFF.is_empty_move());
    }
}
