//! Plain-text and JSON output for the non-interactive subcommands.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use kivaw_types::{Focus, State, TABLE, lookup};

/// One row of the recommendation table as printed by `lookup` and `table`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub state: State,
    pub focus: Focus,
    pub recommendation: &'static str,
}

impl Entry {
    #[must_use]
    pub fn new(state: State, focus: Focus) -> Self {
        Self {
            state,
            focus,
            recommendation: lookup(state, focus),
        }
    }
}

pub fn write_lookup(out: &mut impl Write, state: State, focus: Focus, json: bool) -> Result<()> {
    let entry = Entry::new(state, focus);
    if json {
        serde_json::to_writer(&mut *out, &entry).context("serialize recommendation")?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", entry.recommendation)?;
    }
    Ok(())
}

/// Every entry, states outer and focuses inner, in chooser order.
pub fn write_table(out: &mut impl Write, json: bool) -> Result<()> {
    let entries: Vec<Entry> = TABLE
        .entries()
        .map(|(state, focus, recommendation)| Entry {
            state,
            focus,
            recommendation,
        })
        .collect();

    if json {
        serde_json::to_writer_pretty(&mut *out, &entries).context("serialize table")?;
        writeln!(out)?;
        return Ok(());
    }

    for entry in entries {
        writeln!(
            out,
            "{:<13}  {:<8}  {}",
            entry.state.as_str(),
            entry.focus.as_str(),
            entry.recommendation
        )?;
    }
    Ok(())
}
