//! Schedule command: read talks, pack them into tracks, print the result.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use cs_core::{
    Talk, build_schedule, format_schedule_json, parse_talks, plan_schedule, write_schedule,
};

use crate::Config;

/// Reads and parses the talks file.
pub fn read_talks(path: &Path) -> Result<Vec<Talk>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("input unreadable: {}", path.display()))?;
    let talks =
        parse_talks(&text).with_context(|| format!("failed to parse {}", path.display()))?;
    tracing::debug!(talks = talks.len(), path = %path.display(), "parsed talks");
    Ok(talks)
}

/// Runs the schedule command, writing text or JSON to `writer`.
pub fn run<W: Write>(writer: &mut W, input: &Path, config: &Config, json: bool) -> Result<()> {
    let talks = read_talks(input)?;
    if talks.is_empty() {
        writeln!(writer, "No talks to schedule.")?;
        return Ok(());
    }

    let conference =
        build_schedule(talks, &config.schedule).context("failed to build schedule")?;
    let plans = plan_schedule(&conference, &config.schedule);

    if json {
        let output = format_schedule_json(&plans)?;
        writeln!(writer, "{output}")?;
    } else {
        let mut output = String::new();
        write_schedule(&mut output, &plans)?;
        write!(writer, "{output}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use cs_core::{PackError, ScheduleError, StuckPolicy, TalkParseError};
    use insta::assert_snapshot;
    use tempfile::NamedTempFile;

    fn talks_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn run_to_string(input: &Path, config: &Config, json: bool) -> Result<String> {
        let mut output = Vec::new();
        run(&mut output, input, config, json)?;
        Ok(String::from_utf8(output).unwrap())
    }

    #[test]
    fn schedule_command_prints_tracks() {
        let file = talks_file(
            "Writing Fast Tests Against Enterprise Rails 60min\n\
             Overdoing it in Python 45min\n\
             Lua for the Masses 30min\n\
             Ruby Errors from Mismatched Gem Versions 45min\n",
        );
        let output = run_to_string(file.path(), &Config::default(), false).unwrap();
        assert_eq!(
            output,
            "Track 1:\n\
             09:00AM Writing Fast Tests Against Enterprise Rails \n\
             10:00AM Overdoing it in Python \n\
             10:45AM Lua for the Masses \n\
             11:15AM Ruby Errors from Mismatched Gem Versions \n\
             12:00PM Lunch\n\
             01:00PM Networking Event\n\
             \n"
        );
    }

    #[test]
    fn empty_input_prints_notice() {
        let file = talks_file("");
        let output = run_to_string(file.path(), &Config::default(), false).unwrap();
        assert_eq!(output, "No talks to schedule.\n");
    }

    #[test]
    fn json_flag_emits_json() {
        let file = talks_file("Rails Magic 180min\n");
        let output = run_to_string(file.path(), &Config::default(), true).unwrap();
        assert_snapshot!(output.trim_end(), @r#"
        {
          "tracks": [
            {
              "track": 1,
              "morning": [
                {
                  "start": "09:00AM",
                  "title": "Rails Magic ",
                  "minutes": 180
                }
              ],
              "lunch": "12:00PM",
              "afternoon": [],
              "networking": "01:00PM"
            }
          ]
        }
        "#);
    }

    #[test]
    fn missing_file_is_input_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let err = run_to_string(&path, &Config::default(), false).unwrap_err();
        assert!(err.to_string().starts_with("input unreadable: "));
        assert!(err.root_cause().downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn malformed_line_reports_line_number() {
        let file = talks_file("Woah 30min\nUntimed Talk\n");
        let err = run_to_string(file.path(), &Config::default(), false).unwrap_err();
        let parse_err = err.downcast_ref::<TalkParseError>().unwrap();
        assert_eq!(
            parse_err,
            &TalkParseError::MalformedTalkRecord {
                line_number: Some(2),
                line: "Untimed Talk".to_string(),
            }
        );
    }

    #[test]
    fn stuck_packing_fails_by_default() {
        let file = talks_file("A 100min\nB 100min\n");
        let err = run_to_string(file.path(), &Config::default(), false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScheduleError>(),
            Some(ScheduleError::Pack(PackError::NoFeasiblePacking { .. }))
        ));
    }

    #[test]
    fn seal_track_policy_prints_short_tracks() {
        let file = talks_file("A 100min\nB 100min\n");
        let mut config = Config::default();
        config.schedule.on_stuck = StuckPolicy::SealTrack;

        let output = run_to_string(file.path(), &config, false).unwrap();
        assert!(output.contains("Track 1:\n09:00AM A \n12:00PM Lunch\n"));
        assert!(output.contains("Track 2:\n09:00AM B \n12:00PM Lunch\n"));
    }
}
