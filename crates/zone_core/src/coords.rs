//! `(x,y)` coordinate tokens, shared by map lines and plane queries.

use crate::geometry::Point;
use once_cell::sync::Lazy;
use regex::Regex;

/// Two optionally-signed integers in parentheses, no whitespace.
static COORD_PAIR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\(([+-]?\d+),([+-]?\d+)\)$").expect("Invalid coordinate regex"));

/// Parse a whole token as a coordinate pair.
///
/// Returns `None` when the token does not match or a component does not fit
/// in `i64`. Callers attach their own error kind.
pub fn parse_coord_pair(token: &str) -> Option<Point> {
    let caps = COORD_PAIR.captures(token)?;
    let x = caps[1].parse::<i64>().ok()?;
    let y = caps[2].parse::<i64>().ok()?;
    Some(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_pairs() {
        assert_eq!(parse_coord_pair("(0,0)"), Some(Point::new(0, 0)));
        assert_eq!(parse_coord_pair("(-3,17)"), Some(Point::new(-3, 17)));
        assert_eq!(parse_coord_pair("(+4,-5)"), Some(Point::new(4, -5)));
    }

    #[test]
    fn test_reject_malformed_pairs() {
        for token in ["", "0,0", "(0,0", "(0 ,0)", "(0, 0)", "(a,1)", "(1,2,3)", "(1.5,2)", "x(1,2)", "(1,2)x"] {
            assert_eq!(parse_coord_pair(token), None, "token {:?} should be rejected", token);
        }
    }

    #[test]
    fn test_reject_out_of_range_component() {
        assert_eq!(parse_coord_pair("(99999999999999999999,0)"), None);
    }
}
