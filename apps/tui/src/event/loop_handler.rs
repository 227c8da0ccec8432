use chrono::{DateTime, Utc};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use serde::Serialize;
use std::io::{Stdout, Write};
use std::time::Duration;
use tracing::{debug, info};

use crate::app::{handle_input, App};
use crate::data::{CaseRecord, CaseStats};
use crate::ui;
use crate::ui::screens::dashboard::TOP_CATEGORY_LIMIT;

// Configure event poll timeout (ms)
const EVENT_POLL_TIMEOUT: u64 = 50;

/// Cases listed at the end of the text report.
const REPORT_RECENT_CASES: usize = 5;

#[derive(Serialize)]
struct HeadlessReport<'a> {
    generated_at: DateTime<Utc>,
    stats: &'a CaseStats,
    cases: &'a [CaseRecord],
}

/// Run the application in headless mode (no UI)
pub fn run_headless(
    cases: &[CaseRecord],
    stats: &CaseStats,
    generated_at: DateTime<Utc>,
    json: bool,
) -> Result<()> {
    info!(cases = cases.len(), json, "rendering headless report");
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if json {
        write_json_report(&mut out, cases, stats, generated_at)?;
    } else {
        write_text_report(&mut out, cases, stats)?;
    }

    out.flush()?;
    Ok(())
}

pub fn write_json_report<W: Write>(
    out: &mut W,
    cases: &[CaseRecord],
    stats: &CaseStats,
    generated_at: DateTime<Utc>,
) -> Result<()> {
    let report = HeadlessReport {
        generated_at,
        stats,
        cases,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_text_report<W: Write>(
    out: &mut W,
    cases: &[CaseRecord],
    stats: &CaseStats,
) -> Result<()> {
    writeln!(out, "\nCrime Watch Stats")?;
    writeln!(out, "=================")?;
    writeln!(out, "Total cases: {}", stats.total_cases)?;
    writeln!(out, "Open investigations: {}", stats.open_cases)?;
    writeln!(out, "Solved cases: {}", stats.solved_cases)?;
    writeln!(out, "Unsolved cases: {}", stats.unsolved_cases)?;
    writeln!(out, "Critical cases: {}", stats.critical_cases)?;
    writeln!(out, "Solve rate: {}%", stats.solve_rate())?;

    writeln!(out, "\nTop Categories:")?;
    for (category, count) in stats.top_categories(TOP_CATEGORY_LIMIT) {
        writeln!(out, "- {category}: {count}")?;
    }

    writeln!(out, "\nMonthly Trend:")?;
    for month in &stats.monthly_counts {
        writeln!(out, "- {}: {}", month.name, month.value)?;
    }

    writeln!(out, "\nRecent Cases:")?;
    for case in cases.iter().take(REPORT_RECENT_CASES) {
        writeln!(
            out,
            "- {} | {} | {} | {} | {}",
            case.id,
            case.status,
            case.category,
            case.title,
            case.date.to_rfc3339()
        )?;
    }

    Ok(())
}

/// Run the main application event loop
pub fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    info!(cases = app.cases.len(), "starting event loop");

    while app.running {
        // Update animations
        app.update();

        terminal
            .draw(|f| ui::ui(app, f))
            .map_err(|e| eyre!("Terminal draw error: {e}"))?;

        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                debug!(key = ?key.code, screen = app.screen.label(), "key pressed");
                handle_input(app, key.code);
            }
            Event::Resize(width, height) => {
                debug!(width, height, "terminal resized");
            }
            _ => {}
        }
    }

    info!("event loop finished");
    Ok(())
}
