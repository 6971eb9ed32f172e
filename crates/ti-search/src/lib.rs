//! `ti-search` — the multi-modal service-area search.
//!
//! # Main loop
//!
//! ```text
//! admit origin at t = 0
//! loop:
//!   ① Pop     — earliest current node; stale entries are dropped on the way.
//!               Frontier empty → Exhausted.
//!   ② Poll    — cancellation token set → Cancelled (popped node discarded).
//!   ③ Expand  — walk branch for origin/walk nodes, transit branch for
//!               transit nodes.  A failed collaborator call aborts only this
//!               expansion.
//! finalize both areas (one dissolve each if several features remain)
//! ```
//!
//! # Modules
//!
//! | Module          | Contents                                            |
//! |-----------------|-----------------------------------------------------|
//! | [`node`]        | `NodeKey`, `NodeMode`, `SearchNode`                 |
//! | [`ledger`]      | `NodeLedger` and its relaxation policy              |
//! | [`frontier`]    | `PriorityFrontier` with stale-entry skipping        |
//! | [`accumulator`] | `ServiceAreaAccumulator`, `AreaKind`                |
//! | [`expansion`]   | `ExpansionEngine`, `SearchTables`, `ExpansionReport`|
//! | [`search`]      | `Search`, `SearchStatus`, `SearchSummary`, `SearchOutcome` |
//! | [`builder`]     | `SearchBuilder`                                     |
//! | [`observer`]    | `SearchObserver`, `NoopObserver`, `TracingObserver` |
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | Ledger maps use `rustc-hash` instead of SipHash.         |
//! | `serde`   | `Serialize`/`Deserialize` on config and summary types.   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ti_network::TransitNetwork;
//! use ti_search::{CancellationToken, SearchBuilder, TracingObserver};
//!
//! let network = TransitNetwork::new(streets, stops, route_stops, routes)?;
//! let mut search = SearchBuilder::new(&engine, &network).build()?;
//! let outcome = search.run(
//!     "7642700.5,682883.25 [EPSG:2913]",
//!     0.5,
//!     &CancellationToken::new(),
//!     &mut TracingObserver,
//! )?;
//! ```

pub mod accumulator;
pub mod builder;
pub mod cancel;
pub mod config;
pub mod error;
pub mod expansion;
pub mod frontier;
pub mod ledger;
pub mod node;
pub mod observer;
pub mod search;


pub use accumulator::{AreaKind, ServiceAreaAccumulator};
pub use builder::SearchBuilder;
pub use cancel::CancellationToken;
pub use config::SearchConfig;
pub use error::{ExpansionError, SearchError, SearchResult};
pub use expansion::{average_wait, ExpansionEngine, ExpansionReport, SearchTables};
pub use frontier::PriorityFrontier;
pub use ledger::NodeLedger;
pub use node::{NodeKey, NodeMode, SearchNode};
pub use observer::{NoopObserver, SearchObserver, TracingObserver};
pub use search::{Search, SearchOutcome, SearchStatus, SearchSummary};
