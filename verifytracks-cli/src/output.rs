// ============================================================================
// verifytracks-cli/src/output.rs
// ============================================================================
//
// TERMINAL OUTPUT: Rendering of Report Lines
//
// The core library produces plain report lines tagged with a tone. This
// module adds terminal colours to them. `colored` disables styling by itself
// when NO_COLOR is set or stdout is not a terminal.
//
// AI-ASSISTANT-INFO: Terminal styling for report lines

use colored::{ColoredString, Colorize};
use std::io::{self, Write};
use verifytracks_core::{Detail, ReportLine, Tone};

fn status(line: &ReportLine) -> ColoredString {
    match line.tone {
        Tone::Pass => line.status().green(),
        Tone::Fail => line.status().red(),
        Tone::Warn => line.status().yellow(),
    }
}

fn tracks(line: &ReportLine) -> ColoredString {
    match line.tone {
        Tone::Pass => line.tracks.yellow(),
        Tone::Fail | Tone::Warn => line.tracks.red(),
    }
}

fn detail(detail: &Detail) -> String {
    match detail {
        Detail::Difference(label) => format!("difference: {}", label.yellow()),
        Detail::Problem(text) => text.red().to_string(),
    }
}

/// Renders a report line with terminal styling.
#[must_use]
pub fn render(line: &ReportLine) -> String {
    let mut rendered = format!("{}{}{}", status(line), tracks(line), line.file_name);
    if let Some(d) = &line.detail {
        rendered.push_str(&format!(" ({}) ", detail(d)));
    }
    rendered
}

/// Writes every report line to `out`, one per line.
pub fn print_report(out: &mut impl Write, lines: &[ReportLine]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", render(line))?;
    }
    out.flush()
}
