//! Zone Map Console Library
//!
//! Map file loading (extension check + zone map build), the interactive
//! query session and map summaries for the `zones` binary.

pub mod config;
pub mod session;

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use zone_core::ZoneMap;

pub use config::SessionConfig;
pub use session::{run_session, SessionStats};

/// Read and build a map file.
///
/// The file must carry the configured extension. Any bad line fails the
/// whole load; there is no partial map.
pub fn load_map_file(path: &Path, config: &SessionConfig) -> Result<ZoneMap> {
    let has_extension = path
        .extension()
        .is_some_and(|ext| ext == config.map_extension.as_str());
    if !has_extension {
        bail!(
            "Please supply correct data format: expected a .{} file, got {}",
            config.map_extension,
            path.display()
        );
    }

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read map file: {}", path.display()))?;

    let map = zone_core::parse_map_str(&text)
        .with_context(|| format!("Failed to build zone map from {}", path.display()))?;

    Ok(map)
}

/// One line per zone, in evaluation order.
pub fn describe_map(map: &ZoneMap) -> String {
    let mut out = format!("{} zone(s), highest priority first\n", map.len());
    for (rank, zone) in map.iter().enumerate() {
        out.push_str(&format!("{:>4}. {}\n", rank + 1, zone));
    }
    out
}
