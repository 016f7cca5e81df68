//! Query evaluation
//!
//! A query line holds zero or more whitespace-separated plane tokens of the
//! form `ID(x,y)`. Each plane is resolved against the zone map with
//! first-match-wins over priority order, then rendered:
//!
//! | Matched zone | Output line              |
//! |--------------|--------------------------|
//! | `warn`       | `Warning {id}`           |
//! | `fire`       | `Shooting {id} at (x,y)` |
//! | `safe`       | empty line               |
//! | none         | nothing (or `nothing found` when enabled) |
//!
//! One malformed token rejects the whole line: no verdicts are produced for
//! any plane on it.

use crate::coords::parse_coord_pair;
use crate::error::QueryError;
use crate::geometry::Point;
use crate::zone::{ZoneMap, ZoneType};
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

/// Verdict text for a plane outside every zone, when reporting is enabled
pub const NOTHING_FOUND: &str = "nothing found";

/// Labeled query point
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plane {
    pub id: String,
    pub point: Point,
}

impl Plane {
    /// Parse an `ID(x,y)` token.
    pub fn parse(token: &str) -> Result<Self, QueryError> {
        let Some(open) = token.find('(') else {
            return Err(QueryError::MalformedPlane { token: token.to_string() });
        };

        // Everything before the first `(` is the id.
        let id = &token[..open];
        if id.is_empty() {
            return Err(QueryError::MissingId { token: token.to_string() });
        }

        let point = parse_coord_pair(&token[open..])
            .ok_or_else(|| QueryError::InvalidCoordinateFormat { token: token.to_string() })?;

        Ok(Self { id: id.to_string(), point })
    }
}

/// Outcome for one plane
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    Warning { id: String },
    Shooting { id: String, at: Point },
    /// Inside a safe zone: acknowledged with a blank line
    Safe { id: String },
    NothingFound { id: String },
}

impl Verdict {
    fn for_zone(zone_type: ZoneType, plane: Plane) -> Self {
        match zone_type {
            ZoneType::Warn => Verdict::Warning { id: plane.id },
            ZoneType::Fire => Verdict::Shooting { id: plane.id, at: plane.point },
            ZoneType::Safe => Verdict::Safe { id: plane.id },
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Warning { id } => write!(f, "Warning {}", id),
            Verdict::Shooting { id, at } => write!(f, "Shooting {} at {}", id, at),
            Verdict::Safe { .. } => Ok(()),
            Verdict::NothingFound { .. } => f.write_str(NOTHING_FOUND),
        }
    }
}

/// Read-only evaluator over a built zone map
#[derive(Debug, Clone, Copy)]
pub struct QueryEvaluator<'a> {
    map: &'a ZoneMap,
    report_unmatched: bool,
}

impl<'a> QueryEvaluator<'a> {
    pub fn new(map: &'a ZoneMap) -> Self {
        Self { map, report_unmatched: false }
    }

    /// Emit `nothing found` for planes outside every zone instead of staying silent.
    pub fn report_unmatched(mut self, enabled: bool) -> Self {
        self.report_unmatched = enabled;
        self
    }

    /// Parse every plane on the line, then resolve each in order.
    pub fn resolve(&self, line: &str) -> Result<Vec<Verdict>, QueryError> {
        let planes = line
            .split_whitespace()
            .map(Plane::parse)
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|err| warn!(%err, "rejected query line"))?;

        Ok(planes.into_iter().filter_map(|plane| self.resolve_plane(plane)).collect())
    }

    /// Resolve and render a query line. Each verdict ends with a newline.
    pub fn evaluate(&self, line: &str) -> Result<String, QueryError> {
        let mut out = String::new();
        for verdict in self.resolve(line)? {
            out.push_str(&verdict.to_string());
            out.push('\n');
        }
        Ok(out)
    }

    fn resolve_plane(&self, plane: Plane) -> Option<Verdict> {
        match self.map.first_match(plane.point) {
            Some(zone) => {
                debug!(id = %plane.id, point = %plane.point, zone = %zone, "plane matched");
                Some(Verdict::for_zone(zone.zone_type, plane))
            }
            None if self.report_unmatched => Some(Verdict::NothingFound { id: plane.id }),
            None => {
                debug!(id = %plane.id, point = %plane.point, "plane outside every zone");
                None
            }
        }
    }
}

/// Evaluate a query line with the default (silent on no match) rendering.
pub fn evaluate(map: &ZoneMap, line: &str) -> Result<String, QueryError> {
    QueryEvaluator::new(map).evaluate(line)
}
