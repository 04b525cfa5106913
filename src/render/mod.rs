//! Human-readable poll reports
//!
//! Pure formatting: polls in, text out. Nothing here fails on bad data;
//! an unparsable timestamp falls back to the raw string, and an empty
//! option list gets an explicit marker.

use crate::types::Poll;
use chrono::{DateTime, NaiveDateTime};
use std::io::{self, Write};

const SECTION_RULE: &str = "============================================================";
const POLL_RULE: &str = "----------------------------------------";

/// Write a formatted report for `polls` into `out`
pub fn write_polls(out: &mut impl Write, polls: &[Poll]) -> io::Result<()> {
    if polls.is_empty() {
        writeln!(out, "No polls to display.")?;
        return Ok(());
    }

    writeln!(out, "Displaying {} polls:", polls.len())?;
    writeln!(out, "{SECTION_RULE}")?;

    for poll in polls {
        writeln!(out)?;
        writeln!(out, "Poll #{}: {}", poll.id, poll.question)?;
        writeln!(out, "  Owner:   {}", poll.owner_id)?;
        writeln!(out, "  Created: {}", format_timestamp(&poll.created_at))?;

        if poll.options.is_empty() {
            writeln!(out, "  Options: none")?;
        } else {
            writeln!(out, "  Options:")?;
            for (i, option) in poll.options.iter().enumerate() {
                writeln!(out, "    {}. {} (id {})", i + 1, option.text, option.id)?;
            }
        }

        writeln!(out, "{POLL_RULE}")?;
    }

    Ok(())
}

/// Print a formatted report for `polls` to stdout
///
/// Convenience wrapper that never fails; a broken pipe ends the report
/// early and silently.
pub fn display_polls(polls: &[Poll]) {
    let stdout = io::stdout();
    let _ = write_polls(&mut stdout.lock(), polls);
}

/// Reformat an ISO 8601 / RFC 3339 timestamp as `YYYY-MM-DD HH:MM:SS`
///
/// Falls back to the input unchanged when it parses as neither an
/// offset-carrying nor a naive timestamp.
fn format_timestamp(raw: &str) -> String {
    const OUT: &str = "%Y-%m-%d %H:%M:%S";

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format(OUT).to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format(OUT).to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests;
