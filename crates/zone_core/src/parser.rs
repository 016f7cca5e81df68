//! Map file parser
//!
//! One zone rule per non-blank line, fields separated by whitespace runs:
//!
//! ```text
//! <warn|safe|fire> <rectangle|circle> <placeholder> <(x1,y1)> <(x2,y2)|radius>
//! ```
//!
//! - Blank lines are skipped.
//! - Any other line must have exactly 5 fields. The third field is required
//!   but ignored.
//! - The first bad line aborts the whole build; no partial map is returned.
//!
//! ```
//! use zone_core::{build_zone_map, Point, ZoneType};
//!
//! let map = build_zone_map(["warn rectangle x (0,0) (10,10)", "fire circle x (5,5) 1"]).unwrap();
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.first_match(Point::new(5, 5)).unwrap().zone_type, ZoneType::Fire);
//! ```

use crate::coords::parse_coord_pair;
use crate::error::{LineError, MapError};
use crate::geometry::{Circle, Point, Rectangle, Shape, ShapeKind};
use crate::zone::{Zone, ZoneMap, ZoneType};
use tracing::{debug, info};

/// Number of fields in a map line
pub const FIELD_COUNT: usize = 5;

/// Build a zone map from raw map file lines.
pub fn build_zone_map<I, S>(lines: I) -> Result<ZoneMap, MapError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut zones = Vec::new();

    for (idx, raw) in lines.into_iter().enumerate() {
        let line_no = idx + 1;
        match parse_line(raw.as_ref()) {
            Ok(Some(zone)) => {
                debug!(line_no, zone = %zone, "parsed zone");
                zones.push(zone);
            }
            Ok(None) => {}
            Err(kind) => return Err(MapError::new(line_no, kind)),
        }
    }

    let map = ZoneMap::from_declaration_order(zones);
    info!(zones = map.len(), "zone map built");
    Ok(map)
}

/// Build a zone map from the full text of a map file.
pub fn parse_map_str(text: &str) -> Result<ZoneMap, MapError> {
    build_zone_map(text.lines())
}

/// Parse one map line. `Ok(None)` for a blank line.
pub fn parse_line(raw: &str) -> Result<Option<Zone>, LineError> {
    let fields: Vec<&str> = raw.split_whitespace().collect();
    if fields.is_empty() {
        return Ok(None);
    }
    if fields.len() != FIELD_COUNT {
        return Err(LineError::MalformedLine { line: fields.join(" ") });
    }

    let zone_type: ZoneType = fields[0].parse()?;
    let kind: ShapeKind = fields[1].parse()?;
    // fields[2] is a placeholder
    let origin = parse_point(fields[3])?;

    let shape: Shape = match kind {
        ShapeKind::Rectangle => {
            let high = parse_point(fields[4])?;
            Rectangle::new(origin, high)?.into()
        }
        ShapeKind::Circle => {
            let radius = parse_radius(fields[4])?;
            Circle::new(origin, radius)?.into()
        }
    };

    Ok(Some(Zone::new(shape, zone_type)))
}

fn parse_point(token: &str) -> Result<Point, LineError> {
    parse_coord_pair(token)
        .ok_or_else(|| LineError::InvalidCoordinateFormat { token: token.to_string() })
}

/// Any integer is accepted here; the sign is checked by `Circle::new`.
fn parse_radius(token: &str) -> Result<i64, LineError> {
    token
        .parse::<i64>()
        .map_err(|_| LineError::InvalidRadius { token: token.to_string() })
}
