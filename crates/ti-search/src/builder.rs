//! Fluent builder for constructing a [`Search`].

use ti_network::{GeometryService, TransitData};

use crate::{Search, SearchConfig, SearchResult, SearchStatus};

/// Fluent builder for [`Search<G, D>`].
///
/// # Required inputs
///
/// - `G: GeometryService` — buffering, clipping, routing, dissolving
/// - `D: TransitData` — streets, stops, route stops and routes
///
/// # Optional inputs (have defaults)
///
/// | Method                          | Default      |
/// |---------------------------------|--------------|
/// | `.config(c)`                    | `SearchConfig::default()` |
/// | `.walking_speed(v)`             | `14_784.0`   |
/// | `.repeat_search_threshold(t)`   | `10.0`       |
/// | `.dissolve_threshold(n)`        | `7`          |
///
/// # Example
///
/// ```rust,ignore
/// let network = TransitNetwork::new(streets, stops, route_stops, routes)?;
/// let mut search = SearchBuilder::new(&engine, &network)
///     .walking_speed(14_784.0)
///     .build()?;
/// let outcome = search.run("7642700,682883 [EPSG:2913]", 0.5, &token, &mut NoopObserver)?;
/// ```
pub struct SearchBuilder<'a, G: ?Sized, D: ?Sized> {
    service: &'a G,
    data:    &'a D,
    config:  SearchConfig,
}

impl<'a, G, D> SearchBuilder<'a, G, D>
where
    G: GeometryService + ?Sized,
    D: TransitData + ?Sized,
{
    pub fn new(service: &'a G, data: &'a D) -> Self {
        Self { service, data, config: SearchConfig::default() }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn walking_speed(mut self, speed: f64) -> Self {
        self.config.walking_speed = speed;
        self
    }

    pub fn repeat_search_threshold(mut self, threshold: f64) -> Self {
        self.config.repeat_search_threshold = threshold;
        self
    }

    pub fn dissolve_threshold(mut self, threshold: usize) -> Self {
        self.config.dissolve_threshold = threshold;
        self
    }

    /// Validate the configuration and return an idle [`Search`].
    pub fn build(self) -> SearchResult<Search<'a, G, D>> {
        self.config.validate()?;
        Ok(Search {
            service: self.service,
            data:    self.data,
            config:  self.config,
            status:  SearchStatus::Idle,
        })
    }
}
