//! Strongly typed identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as ledger keys and
//! sorted collection elements without ceremony.  The values come straight
//! from the source datasets (`fid`, `stop_id`, `rte`), so there is no
//! sentinel: absence is modelled with `Option`.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The raw dataset value.
            #[inline(always)]
            pub fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(n: $inner) -> $name {
                $name(n)
            }
        }
    };
}

typed_id! {
    /// Feature id (`fid`) of a row within one dataset.  Only unique per
    /// dataset: a stop fid and a route-stop fid may collide.
    pub struct FeatureId(u32);
}

typed_id! {
    /// Agency stop identifier (`stop_id`), shared by a physical stop and every
    /// route stop that serves it.
    pub struct StopId(u32);
}

typed_id! {
    /// Transit line number (`rte`).
    pub struct LineId(u32);
}
