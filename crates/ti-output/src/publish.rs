//! Turning a finished search into named datasets on a sink.
//!
//! # Dataset names
//!
//! | Dataset                      | Contents                                       | Written when           |
//! |------------------------------|------------------------------------------------|------------------------|
//! | `{name}_{minutes}`           | census blocks near the walking area (or the walking area itself without a blocks dataset) | a walking area exists |
//! | `{name}_{minutes}_walk`      | the walking area                               | `export_networks`      |
//! | `{name}_{minutes}_transit`   | the transit area                               | `export_networks`      |

use tracing::{info, warn};

use ti_core::hours_to_minutes;
use ti_network::{GeometryService, TransitData};
use ti_search::SearchOutcome;

use crate::{AreaSink, OutputResult, RunSummaryRow};

/// Export settings.
#[derive(Clone, Debug, PartialEq)]
pub struct PublishOptions {
    /// Blocks within this distance of the walking area are exported.
    pub block_search_distance: f64,
    /// Also export the raw walking and transit areas.
    pub export_networks:       bool,
}

impl Default for PublishOptions {
    fn default() -> Self {
        Self { block_search_distance: 10.0, export_networks: false }
    }
}

/// Render a budget in hours as whole minutes when it is one, otherwise as a
/// decimal.
pub fn minutes_label(time_limit: f64) -> String {
    let minutes = hours_to_minutes(time_limit);
    let whole = minutes.round();
    if (minutes - whole).abs() < 1e-6 {
        format!("{}", whole as i64)
    } else {
        format!("{minutes}")
    }
}

/// Writes search outcomes to a sink under predictable dataset names.
pub struct Publisher<'a, G: ?Sized, D: ?Sized, S> {
    service: &'a G,
    data:    &'a D,
    sink:    S,
    options: PublishOptions,
}

impl<'a, G, D, S> Publisher<'a, G, D, S>
where
    G: GeometryService + ?Sized,
    D: TransitData + ?Sized,
    S: AreaSink,
{
    pub fn new(service: &'a G, data: &'a D, sink: S, options: PublishOptions) -> Self {
        Self { service, data, sink, options }
    }

    pub fn options(&self) -> &PublishOptions {
        &self.options
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Export `outcome` for the origin called `name`.  Returns the dataset
    /// names written.
    pub fn publish(
        &mut self,
        name:       &str,
        time_limit: f64,
        outcome:    &SearchOutcome,
    ) -> OutputResult<Vec<String>> {
        let minutes = minutes_label(time_limit);
        let base = format!("{name}_{minutes}");
        let mut written = Vec::new();

        match &outcome.walking {
            Some(walking) => {
                let near = match self.data.blocks() {
                    Some(blocks) => self.service.extract_within_distance(
                        blocks,
                        walking,
                        self.options.block_search_distance,
                    )?,
                    None => walking.clone(),
                };
                self.sink.write(&near, &base)?;
                written.push(base.clone());
            }
            None => warn!(origin = name, "no walking service area found"),
        }

        if self.options.export_networks {
            for (suffix, area) in [("walk", &outcome.walking), ("transit", &outcome.transit)] {
                let Some(area) = area else {
                    warn!(origin = name, "no {suffix} service area to export");
                    continue;
                };
                let dataset = format!("{base}_{suffix}");
                self.sink.write(area, &dataset)?;
                written.push(dataset);
            }
        }

        self.sink.write_summary(&RunSummaryRow::new(name, &minutes, &outcome.summary))?;
        info!(origin = name, datasets = written.len(), "published service area");
        Ok(written)
    }

    /// Flush the sink.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.sink.finish()
    }

    /// Unwrap the inner sink (e.g. to inspect what was written).
    pub fn into_sink(self) -> S {
        self.sink
    }
}
