//! `ServiceAreaAccumulator` — the running walking and transit areas.
//!
//! Each expansion contributes a feature set to one of the two areas.  The
//! first contribution becomes the area; later ones are merged in through the
//! geometry service.  Once an area holds more than `dissolve_threshold`
//! features it is dissolved, which keeps the cost of later merges bounded.
//! [`finalize`][ServiceAreaAccumulator::finalize] runs one last dissolve on
//! any area with more than one feature.

use tracing::warn;

use ti_core::FeatureSet;
use ti_network::{GeometryService, NetworkResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which running area a contribution belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AreaKind {
    Walking,
    Transit,
}

impl AreaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AreaKind::Walking => "walking",
            AreaKind::Transit => "transit",
        }
    }
}

pub struct ServiceAreaAccumulator {
    walking:            Option<FeatureSet>,
    transit:            Option<FeatureSet>,
    dissolve_threshold: usize,
    dissolves:          usize,
}

impl ServiceAreaAccumulator {
    pub fn new(dissolve_threshold: usize) -> Self {
        Self { walking: None, transit: None, dissolve_threshold, dissolves: 0 }
    }

    /// The area accumulated so far, `None` until something was merged.
    pub fn area(&self, kind: AreaKind) -> Option<&FeatureSet> {
        match kind {
            AreaKind::Walking => self.walking.as_ref(),
            AreaKind::Transit => self.transit.as_ref(),
        }
    }

    /// Dissolve passes run during accumulation (not counting `finalize`).
    pub fn dissolves(&self) -> usize {
        self.dissolves
    }

    /// Fold `contribution` into the `kind` area.
    ///
    /// An empty contribution is ignored and the first one becomes the area
    /// as-is; the dissolve threshold applies only to union results.  If the
    /// merge call fails the area is
    /// left exactly as it was.  A failed or misbehaving dissolve is logged
    /// and the undissolved merge result is kept.
    pub fn merge<G>(
        &mut self,
        service:      &G,
        kind:         AreaKind,
        contribution: FeatureSet,
    ) -> NetworkResult<()>
    where
        G: GeometryService + ?Sized,
    {
        if contribution.is_empty() {
            return Ok(());
        }

        let threshold = self.dissolve_threshold;
        let slot = match kind {
            AreaKind::Walking => &mut self.walking,
            AreaKind::Transit => &mut self.transit,
        };

        let Some(area) = slot.as_ref() else {
            *slot = Some(contribution);
            return Ok(());
        };
        let merged = service.merge(&[area, &contribution])?;

        if merged.len() <= threshold {
            *slot = Some(merged);
            return Ok(());
        }

        self.dissolves += 1;
        *slot = Some(dissolve_or_keep(service, kind, merged));
        Ok(())
    }

    /// Consume the accumulator and return `(walking, transit)`, each
    /// dissolved once more if it holds several features.  Areas that never
    /// received a feature come back as `None`.
    pub fn finalize<G>(self, service: &G) -> (Option<FeatureSet>, Option<FeatureSet>)
    where
        G: GeometryService + ?Sized,
    {
        let finish = |kind: AreaKind, area: Option<FeatureSet>| {
            let area = area.filter(|a| !a.is_empty())?;
            if area.len() > 1 {
                Some(dissolve_or_keep(service, kind, area))
            } else {
                Some(area)
            }
        };
        (
            finish(AreaKind::Walking, self.walking),
            finish(AreaKind::Transit, self.transit),
        )
    }
}

fn dissolve_or_keep<G>(service: &G, kind: AreaKind, area: FeatureSet) -> FeatureSet
where
    G: GeometryService + ?Sized,
{
    match service.dissolve(&area) {
        Ok(dissolved) if dissolved.len() <= area.len() => dissolved,
        Ok(dissolved) => {
            warn!(
                area = kind.as_str(),
                before = area.len(),
                after = dissolved.len(),
                "dissolve grew the feature count; keeping the undissolved area"
            );
            area
        }
        Err(e) => {
            warn!(area = kind.as_str(), error = %e, "dissolve failed; keeping the undissolved area");
            area
        }
    }
}
