//! CSV origin loader.
//!
//! # CSV format
//!
//! One row per search origin, coordinates in the datasets' CRS:
//!
//! ```csv
//! name,x,y,crs
//! Skatepark,7642700.835310,682883.097856,EPSG:2913
//! ,7643012.5,681990.0,EPSG:2913
//! ```
//!
//! A blank `name` is allowed; the batch runner substitutes `Point {n}`.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ti_core::{Coordinate, CrsCode};

use crate::{NetworkError, NetworkResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct OriginRecord {
    name: Option<String>,
    x:    f64,
    y:    f64,
    crs:  String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// A search origin with an optional display name.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedOrigin {
    pub name:       Option<String>,
    pub coordinate: Coordinate,
}

impl NamedOrigin {
    pub fn new(name: Option<String>, coordinate: Coordinate) -> Self {
        Self { name, coordinate }
    }
}

/// Load search origins from a CSV file, in file order.
pub fn load_origins_csv(path: &Path) -> NetworkResult<Vec<NamedOrigin>> {
    let file = std::fs::File::open(path).map_err(NetworkError::Io)?;
    load_origins_reader(file)
}

/// Like [`load_origins_csv`] but accepts any `Read` source.
pub fn load_origins_reader<R: Read>(reader: R) -> NetworkResult<Vec<NamedOrigin>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut origins = Vec::new();

    for (row, result) in csv_reader.deserialize::<OriginRecord>().enumerate() {
        let record = result.map_err(|e| NetworkError::Parse(e.to_string()))?;

        let crs = record.crs.trim();
        if crs.is_empty() {
            return Err(NetworkError::Parse(format!("row {}: empty crs", row + 1)));
        }

        let name = record
            .name
            .map(|n| n.trim().to_owned())
            .filter(|n| !n.is_empty());

        origins.push(NamedOrigin::new(
            name,
            Coordinate::new(record.x, record.y, CrsCode::new(crs)),
        ));
    }

    Ok(origins)
}
