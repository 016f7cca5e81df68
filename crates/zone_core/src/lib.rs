//! # zone_core - Zone Map Classification Engine
//!
//! Loads named geometric zones (rectangles and circles tagged
//! `warn`/`safe`/`fire`) from map text and classifies labeled query points
//! ("planes") against them.
//!
//! ## Features
//! - Integer geometry, closed boundaries, no floating point
//! - Later map rules take priority over earlier overlapping ones
//! - Immutable `ZoneMap`: one build, any number of concurrent queries
//!
//! ## Entry points
//! - [`build_zone_map`]: map lines → [`ZoneMap`] or [`MapError`]
//! - [`evaluate`]: `ZoneMap` + query line → verdict text or [`QueryError`]

pub mod coords;
pub mod error;
pub mod evaluator;
pub mod geometry;
pub mod parser;
pub mod zone;

pub use error::{LineError, MapError, QueryError, ShapeError};
pub use evaluator::{evaluate, Plane, QueryEvaluator, Verdict, NOTHING_FOUND};
pub use geometry::{Circle, Point, Rectangle, Shape, ShapeKind};
pub use parser::{build_zone_map, parse_line, parse_map_str};
pub use zone::{Zone, ZoneMap, ZoneType};

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_json_snapshot;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_zone_map_json_shape() {
        let map = parse_map_str("warn rectangle x (0,0) (10,10)\nfire circle x (5,5) 1\n").unwrap();
        assert_json_snapshot!(map, @r#"
        [
          {
            "shape": {
              "kind": "circle",
              "center": {
                "x": 5,
                "y": 5
              },
              "radius": 1
            },
            "type": "fire"
          },
          {
            "shape": {
              "kind": "rectangle",
              "low": {
                "x": 0,
                "y": 0
              },
              "high": {
                "x": 10,
                "y": 10
              }
            },
            "type": "warn"
          }
        ]
        "#);
    }

    #[test]
    fn test_concurrent_queries_share_one_map() {
        let map = Arc::new(
            build_zone_map(["safe rectangle x (0,0) (10,10)", "fire circle x (5,5) 1"]).unwrap(),
        );

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let map = Arc::clone(&map);
                thread::spawn(move || evaluate(&map, &format!("T{}(5,5)", i)).unwrap())
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), format!("Shooting T{} at (5,5)\n", i));
        }
    }
}
