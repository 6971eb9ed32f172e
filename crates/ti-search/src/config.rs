//! Search tuning constants.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{SearchError, SearchResult};

/// Tuning for one [`Search`][crate::Search].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    /// Distance units per hour.  The default is 2.8 mph expressed in feet.
    pub walking_speed: f64,

    /// Slack ratio a new label must beat to replace an existing one.
    pub repeat_search_threshold: f64,

    /// Feature count above which a running service area is dissolved.
    pub dissolve_threshold: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            walking_speed:           14_784.0,
            repeat_search_threshold: 10.0,
            dissolve_threshold:      7,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> SearchResult<()> {
        if !(self.walking_speed.is_finite() && self.walking_speed > 0.0) {
            return Err(SearchError::Config(format!(
                "walking_speed must be positive (got {})",
                self.walking_speed
            )));
        }
        if !(self.repeat_search_threshold >= 1.0) {
            return Err(SearchError::Config(format!(
                "repeat_search_threshold must be at least 1 (got {})",
                self.repeat_search_threshold
            )));
        }
        if self.dissolve_threshold == 0 {
            return Err(SearchError::Config("dissolve_threshold must be non-zero".into()));
        }
        Ok(())
    }
}
