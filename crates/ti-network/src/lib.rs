//! `ti-network` — the collaborator seam between the search and the outside
//! world.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`service`] | `GeometryService` trait, `EdgeSpeed`, `DirectionPolicy`, `Predicate` |
//! | [`path`]    | `PathFeature`, `PathSet`                                    |
//! | [`source`]  | `TransitData` trait, `TransitNetwork`, `Dataset`           |
//! | [`loader`]  | `NamedOrigin`, `load_origins_csv`, `load_origins_reader`    |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                          |
//!
//! # Pluggability
//!
//! `ti-search` only talks to geometry through [`GeometryService`] and to
//! datasets through [`TransitData`].  Buffering, clipping, network shortest
//! paths, and dissolving are delegated wholesale; the search never does
//! planar geometry itself.

pub mod error;
pub mod loader;
pub mod path;
pub mod service;
pub mod source;


pub use error::{NetworkError, NetworkResult};
pub use loader::{load_origins_csv, load_origins_reader, NamedOrigin};
pub use path::{PathFeature, PathSet};
pub use service::{DirectionPolicy, EdgeSpeed, GeometryService, Predicate};
pub use source::{Dataset, TransitData, TransitNetwork};
