//! Zone model
//!
//! A `ZoneMap` is an ordered list of `(Shape, ZoneType)` pairs. Order is
//! evaluation priority: index 0 is tested first. Rules declared later in a
//! map file come first, so they override earlier overlapping rules.
//!
//! The map is immutable once built and is shared read-only by every query.

use crate::error::LineError;
use crate::geometry::{Point, Shape};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Alert type attached to a zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneType {
    Warn,
    Safe,
    Fire,
}

impl ZoneType {
    pub const ALL: [ZoneType; 3] = [ZoneType::Warn, ZoneType::Safe, ZoneType::Fire];

    /// Keyword used in map files
    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneType::Warn => "warn",
            ZoneType::Safe => "safe",
            ZoneType::Fire => "fire",
        }
    }
}

impl fmt::Display for ZoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive keyword match.
impl FromStr for ZoneType {
    type Err = LineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "warn" => Ok(ZoneType::Warn),
            "safe" => Ok(ZoneType::Safe),
            "fire" => Ok(ZoneType::Fire),
            _ => Err(LineError::UnknownZoneType { value: s.to_string() }),
        }
    }
}

/// Shape tagged with an alert type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Zone {
    pub shape: Shape,
    #[serde(rename = "type")]
    pub zone_type: ZoneType,
}

impl Zone {
    pub fn new(shape: impl Into<Shape>, zone_type: ZoneType) -> Self {
        Self { shape: shape.into(), zone_type }
    }

    pub fn contains(&self, p: Point) -> bool {
        self.shape.contains(p)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.zone_type, self.shape)
    }
}

/// Zones in evaluation priority order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ZoneMap {
    zones: Vec<Zone>,
}

impl ZoneMap {
    /// Build from zones listed in file order (first declared first).
    ///
    /// The result is reversed so the last declared zone is tested first.
    pub fn from_declaration_order(mut zones: Vec<Zone>) -> Self {
        zones.reverse();
        Self { zones }
    }

    /// Build from zones that are already in priority order.
    pub fn from_priority_order(zones: Vec<Zone>) -> Self {
        Self { zones }
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Zones in priority order
    pub fn iter(&self) -> std::slice::Iter<'_, Zone> {
        self.zones.iter()
    }

    /// First zone in priority order whose shape contains `p`.
    pub fn first_match(&self, p: Point) -> Option<&Zone> {
        self.zones.iter().find(|zone| zone.contains(p))
    }
}
