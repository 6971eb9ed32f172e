//! `ti-core` — foundational types for the transit isochrone workspace.
//!
//! This crate is a dependency of every other `ti-*` crate.  It has no `ti-*`
//! dependencies and minimal external ones (`geo-types` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `FeatureId`, `StopId`, `LineId`                         |
//! | [`route`]     | `Direction`, `RouteKey`                                 |
//! | [`coord`]     | `CrsCode`, `Coordinate` (the `"x,y [CRS]"` contract)    |
//! | [`feature`]   | `Attributes`, `Feature`, `FeatureSet`                   |
//! | [`time`]      | hour/minute conversion, elapsed-time formatting         |
//! | [`error`]     | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod coord;
pub mod error;
pub mod feature;
pub mod ids;
pub mod route;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use coord::{Coordinate, CrsCode};
pub use error::{CoreError, CoreResult};
pub use feature::{Attributes, Feature, FeatureSet};
pub use ids::{FeatureId, LineId, StopId};
pub use route::{Direction, RouteKey};
pub use time::{format_elapsed, hours_to_minutes, minutes_to_hours};
