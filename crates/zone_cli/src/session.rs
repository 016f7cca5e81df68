//! Interactive query loop
//!
//! Reads one query per line until the exit command or end of input. Verdict
//! text goes to the output as-is; a rejected line prints its error message
//! and the loop carries on with the next line.

use crate::config::SessionConfig;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{info, warn};
use zone_core::{QueryEvaluator, ZoneMap};

/// Printed for an input line that is not valid UTF-8
pub const INVALID_UTF8_MESSAGE: &str = "query line is not valid UTF-8";

/// Per-session counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub queries: u32,
    pub rejected: u32,
    pub exited: bool,
}

pub fn run_session<R, W>(
    map: &ZoneMap,
    config: &SessionConfig,
    input: R,
    mut output: W,
) -> Result<SessionStats>
where
    R: BufRead,
    W: Write,
{
    let evaluator = QueryEvaluator::new(map).report_unmatched(config.report_unmatched);
    let mut stats = SessionStats::default();

    writeln!(output, "{}", config.prompt)?;
    output.flush()?;
    info!(zones = map.len(), "session started");

    for raw in input.split(b'\n') {
        let mut raw = raw?;
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }

        let query = match String::from_utf8(raw) {
            Ok(query) => query,
            Err(err) => {
                warn!(%err, "rejected query line");
                stats.queries += 1;
                stats.rejected += 1;
                writeln!(output, "{}", INVALID_UTF8_MESSAGE)?;
                output.flush()?;
                continue;
            }
        };
        if query == config.exit_command {
            stats.exited = true;
            break;
        }

        stats.queries += 1;
        match evaluator.evaluate(&query) {
            Ok(text) => write!(output, "{}", text)?,
            Err(err) => {
                stats.rejected += 1;
                writeln!(output, "{}", err)?;
            }
        }
        output.flush()?;
    }

    info!(queries = stats.queries, rejected = stats.rejected, "session ended");
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use zone_core::build_zone_map;

    fn run(map_lines: &[&str], config: &SessionConfig, input: &str) -> (String, SessionStats) {
        let map = build_zone_map(map_lines.iter().copied()).unwrap();
        let mut out = Vec::new();
        let stats = run_session(&map, config, Cursor::new(input), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), stats)
    }

    #[test]
    fn test_session_prints_prompt_and_verdicts() {
        let (out, stats) = run(
            &["safe rectangle x (0,0) (10,10)", "fire circle x (5,5) 1"],
            &SessionConfig::default(),
            "P3(5,5)\nP4(20,20)\nexit\nP5(5,5)\n",
        );

        assert_eq!(out, "Awaiting for input. Type \"exit\" to quit\nShooting P3 at (5,5)\n");
        assert_eq!(stats, SessionStats { queries: 2, rejected: 0, exited: true });
    }

    #[test]
    fn test_rejected_line_does_not_stop_session() {
        let (out, stats) = run(
            &["warn rectangle x (0,0) (10,10)"],
            &SessionConfig::default(),
            "Q1 P1(1,1)\nP2(2,2)\n",
        );

        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[1].starts_with("one of the planes format was incorrect"));
        assert_eq!(lines[2], "Warning P2");
        assert_eq!(stats.rejected, 1);
        assert!(!stats.exited);
    }

    #[test]
    fn test_exit_command_must_match_exactly() {
        let (out, stats) = run(
            &["warn rectangle x (0,0) (10,10)"],
            &SessionConfig::default(),
            " exit\nEXIT\r\nexit\r\n",
        );

        // " exit" and "EXIT" are evaluated as queries and rejected.
        assert_eq!(out.lines().count(), 3);
        assert_eq!(stats, SessionStats { queries: 2, rejected: 2, exited: true });
    }

    #[test]
    fn test_non_utf8_line_is_rejected_and_session_continues() {
        let map = build_zone_map(["warn rectangle x (0,0) (10,10)"]).unwrap();
        let input: &[u8] = b"P1(1,1)\n\xff\xfe(2,2)\r\nP2(2,2)\nexit\n";
        let mut out = Vec::new();
        let stats = run_session(&map, &SessionConfig::default(), input, &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1..], ["Warning P1", INVALID_UTF8_MESSAGE, "Warning P2"]);
        assert_eq!(stats, SessionStats { queries: 3, rejected: 1, exited: true });
    }

    #[test]
    fn test_report_unmatched_from_config() {
        let config = SessionConfig { report_unmatched: true, ..SessionConfig::default() };
        let (out, _) = run(&["warn rectangle x (0,0) (10,10)"], &config, "P2(20,20)\n");
        assert!(out.ends_with("nothing found\n"));
    }

    #[test]
    fn test_custom_exit_command() {
        let config = SessionConfig::default().with_exit_command("quit");
        let (out, stats) = run(&["fire circle x (0,0) 5"], &config, "exit\nquit\n");

        assert!(out.starts_with("Awaiting for input. Type \"quit\" to quit\n"));
        // "exit" is an ordinary query here: one token without a parenthesis.
        assert_eq!(stats.rejected, 1);
        assert!(stats.exited);
    }
}
