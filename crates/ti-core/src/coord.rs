//! Coordinates and their text form.
//!
//! Points cross the geometry-service boundary as `"x,y [CRS]"`: a
//! comma-separated coordinate pair, one space, and the coordinate reference
//! system's authority code in brackets, e.g.
//!
//! ```text
//! 7642700.835310,682883.097856 [EPSG:2913]
//! ```
//!
//! The number of decimals is not fixed; the shape is.

use std::fmt;
use std::str::FromStr;

use geo_types::Point;

use crate::CoreError;

/// Authority code of a coordinate reference system (`"EPSG:2913"`).
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrsCode(pub String);

impl CrsCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CrsCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A planar point tagged with its reference system.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x:   f64,
    pub y:   f64,
    pub crs: CrsCode,
}

impl Coordinate {
    pub fn new(x: f64, y: f64, crs: CrsCode) -> Self {
        Self { x, y, crs }
    }

    /// Build from a point geometry read out of a dataset in `crs`.
    pub fn from_point(point: Point<f64>, crs: &CrsCode) -> Self {
        Self { x: point.x(), y: point.y(), crs: crs.clone() }
    }

    pub fn point(&self) -> Point<f64> {
        Point::new(self.x, self.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{} [{}]", self.x, self.y, self.crs)
    }
}

impl FromStr for Coordinate {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |why: &str| CoreError::InvalidCoordinate {
            input:  s.to_owned(),
            reason: why.to_owned(),
        };

        let (pair, crs) = s
            .trim()
            .split_once(char::is_whitespace)
            .ok_or_else(|| invalid("missing bracketed CRS"))?;

        let (x, y) = pair.split_once(',').ok_or_else(|| invalid("expected \"x,y\""))?;
        let x: f64 = x.parse().map_err(|_| invalid("x is not a number"))?;
        let y: f64 = y.parse().map_err(|_| invalid("y is not a number"))?;
        if !(x.is_finite() && y.is_finite()) {
            return Err(invalid("coordinates must be finite"));
        }

        let code = crs
            .trim()
            .strip_prefix('[')
            .and_then(|c| c.strip_suffix(']'))
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| invalid("CRS must be written as [AUTHORITY:CODE]"))?;

        Ok(Coordinate::new(x, y, CrsCode::new(code)))
    }
}
