use crate::timestamp::MISSING;
use crate::types::{DirectoryEntryRecord, EntryOutcome, UnreadableEntry};
use colored::{Color, Colorize};
use std::io::{self, Write};

/// Size column text for entries that could not be read.
pub const UNREADABLE_LABEL: &str = "ERR";

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Show the creation time instead of the modification time.
    pub use_created: bool,
    pub color: bool,
}

fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        text.color(color).to_string()
    } else {
        text.to_string()
    }
}

fn size_field(outcome: &EntryOutcome) -> &str {
    match outcome {
        Ok(record) => &record.size_display,
        Err(_) => UNREADABLE_LABEL,
    }
}

/// Width of the widest size field in this listing.
#[must_use]
pub fn size_width(outcomes: &[EntryOutcome]) -> usize {
    outcomes
        .iter()
        .map(|o| size_field(o).len())
        .max()
        .unwrap_or(0)
}

pub fn render_record(
    out: &mut impl Write,
    record: &DirectoryEntryRecord,
    width: usize,
    opts: &RenderOptions,
) -> io::Result<()> {
    let timestamp = if opts.use_created {
        &record.created
    } else {
        &record.modified
    };

    let name = if record.is_dir {
        format!("{}{}", record.name, std::path::MAIN_SEPARATOR)
    } else {
        record.name.clone()
    };

    writeln!(
        out,
        "{}{} {} {}",
        paint("> ", Color::Yellow, opts.color),
        paint(timestamp, Color::BrightMagenta, opts.color),
        paint(
            &format!("{:>width$}", record.size_display),
            Color::BrightGreen,
            opts.color
        ),
        paint(&name, Color::Cyan, opts.color),
    )
}

pub fn render_unreadable(
    out: &mut impl Write,
    entry: &UnreadableEntry,
    width: usize,
    opts: &RenderOptions,
) -> io::Result<()> {
    writeln!(
        out,
        "{}{} {} {}{}",
        paint("! ", Color::Red, opts.color),
        paint(MISSING, Color::BrightMagenta, opts.color),
        paint(
            &format!("{UNREADABLE_LABEL:>width$}"),
            Color::BrightGreen,
            opts.color
        ),
        paint(&entry.name, Color::Cyan, opts.color),
        paint(&format!(": {}", entry.error.reason()), Color::Red, opts.color),
    )
}

/// Write one line per outcome, in the order given.
pub fn render(
    out: &mut impl Write,
    outcomes: &[EntryOutcome],
    opts: &RenderOptions,
) -> io::Result<()> {
    let width = size_width(outcomes);

    for outcome in outcomes {
        match outcome {
            Ok(record) => render_record(out, record, width, opts)?,
            Err(entry) => render_unreadable(out, entry, width, opts)?,
        }
    }

    Ok(())
}
