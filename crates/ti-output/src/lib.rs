//! `ti-output` — publishing service areas.
//!
//! Three sinks are provided, the SQLite one behind a Cargo feature:
//!
//! | Feature   | Backend  | Files created                                  |
//! |-----------|----------|------------------------------------------------|
//! | *(none)*  | CSV      | `service_areas.csv`, `run_summaries.csv`       |
//! | *(none)*  | memory   | —                                              |
//! | `sqlite`  | SQLite   | `service_areas.db`                             |
//!
//! All sinks implement [`AreaSink`] and are driven by [`Publisher`], which
//! names datasets and picks the census blocks near each walking area.
//! [`run_batch`] runs one search per origin and publishes each.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ti_output::{run_batch, CsvSink, PublishOptions, Publisher};
//!
//! let origins = load_origins_csv(Path::new("origins.csv"))?;
//! let sink = CsvSink::new(Path::new("./output"))?;
//! let mut publisher = Publisher::new(&engine, &network, sink, PublishOptions::default());
//! run_batch(&mut search, &mut publisher, &origins, 30.0, &token, &mut TracingObserver)?;
//! publisher.finish()?;
//! ```

pub mod batch;
pub mod csv;
pub mod error;
pub mod memory;
pub mod publish;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use batch::{origin_name, run_batch, single_point_name, BatchReport};
pub use csv::CsvSink;
pub use error::{OutputError, OutputResult};
pub use memory::MemorySink;
pub use publish::{minutes_label, PublishOptions, Publisher};
pub use row::{AreaRow, RunSummaryRow};
pub use writer::AreaSink;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteSink;
