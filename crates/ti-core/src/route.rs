//! Route identity: a line plus the direction it runs in.

use std::fmt;

use crate::{CoreError, LineId};

/// Direction of travel along a line, stored in the datasets as `dir` 0 / 1.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Outbound,
    Inbound,
}

impl Direction {
    /// Dataset code (`0` outbound, `1` inbound).
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Direction::Outbound => 0,
            Direction::Inbound  => 1,
        }
    }

    /// The opposite direction; used as the "backward" value when constraining
    /// traversal along a route.
    #[inline]
    pub fn reverse(self) -> Direction {
        match self {
            Direction::Outbound => Direction::Inbound,
            Direction::Inbound  => Direction::Outbound,
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = CoreError;

    fn try_from(code: u8) -> Result<Direction, CoreError> {
        match code {
            0 => Ok(Direction::Outbound),
            1 => Ok(Direction::Inbound),
            n => Err(CoreError::Parse(format!("invalid direction code {n}: expected 0 or 1"))),
        }
    }
}

/// A single route: line `rte` running in direction `dir`.
///
/// Transit expansions are always confined to exactly one `RouteKey`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteKey {
    pub line:      LineId,
    pub direction: Direction,
}

impl RouteKey {
    #[inline]
    pub fn new(line: LineId, direction: Direction) -> Self {
        Self { line, direction }
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rte {} dir {}", self.line.0, self.direction.code())
    }
}
