//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for actors
///
/// Ids are handed out by [`IdGenerator`] in strictly increasing order and are
/// never reused, even after the actor dies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActorId(pub u32);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic actor id source owned by the world
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdGenerator {
    last: u32,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> ActorId {
        self.last += 1;
        ActorId(self.last)
    }

    /// Number of ids issued so far
    pub fn issued(&self) -> u32 {
        self.last
    }
}

/// Turn counter (simulation time unit)
pub type Turn = u64;

/// Index of a map inside the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MapId(pub u16);

/// A single node of the location graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LocationId {
    pub map: MapId,
    pub x: u32,
    pub y: u32,
}

impl LocationId {
    pub fn new(map: MapId, x: u32, y: u32) -> Self {
        Self { map, x, y }
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Biological sex; only the `female` capability is stored on actors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parse the single-letter factory token (`M` or `F`)
    pub fn from_token(token: char) -> crate::core::error::Result<Self> {
        match token {
            'M' => Ok(Self::Male),
            'F' => Ok(Self::Female),
            other => Err(crate::core::error::DinoError::InvalidArgument(format!(
                "gender must be either 'M' or 'F', got {other:?}"
            ))),
        }
    }
}

/// Growth stage requested from a species factory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrowthStage {
    Baby,
    Adult,
}

impl GrowthStage {
    /// Parse the factory token (`baby` or `adult`)
    pub fn from_token(token: &str) -> crate::core::error::Result<Self> {
        match token {
            "baby" => Ok(Self::Baby),
            "adult" => Ok(Self::Adult),
            other => Err(crate::core::error::DinoError::InvalidArgument(format!(
                "growth stage must be either \"baby\" or \"adult\", got {other:?}"
            ))),
        }
    }
}
