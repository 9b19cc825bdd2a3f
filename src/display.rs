//! display.rs
//!
//! Pure text rendering of a breakdown. The loop in main only decides
//! when to redraw; everything about what a frame looks like lives here
//! so it can be tested without a terminal.

use crate::age::Breakdown;
use chrono::NaiveDateTime;

const ALIGN_WIDTH: usize = 26;

/// One aligned "key ... value" row, dot-padded to a fixed width.
fn build_row(key: &str, value: i64) -> String {
    let key_part = format!("{key}: ");
    let value = value.to_string();
    let base_len = key_part.len() + value.len();
    let available = ALIGN_WIDTH.saturating_sub(base_len);

    let dots = match available {
        0 => "".to_string(),
        1 => " ".to_string(),
        2 => ". ".to_string(),
        n => format!("{} ", ".".repeat(n - 1)),
    };

    format!("  {key_part}{dots}{value}")
}

fn plural(n: i64) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// One-line age summary, every unit pluralized.
pub fn format_summary(b: &Breakdown) -> String {
    format!(
        "{} year{}, {} month{}, {} week{}, {} day{}, {} hour{}, {} minute{}, {} second{}",
        b.years,
        plural(b.years),
        b.months,
        plural(b.months),
        b.weeks,
        plural(b.weeks),
        b.days,
        plural(b.days),
        b.hours,
        plural(b.hours),
        b.minutes,
        plural(b.minutes),
        b.seconds,
        plural(b.seconds),
    )
}

/// The "Born on ... / At ..." footer for the reference instant.
pub fn format_reference(reference: NaiveDateTime) -> String {
    format!(
        "Born on {}\nAt {}",
        reference.format("%A, %B %-d, %Y"),
        reference.format("%-I:%M %p"),
    )
}

/// A full frame: header, the seven unit rows, the absolute totals and
/// the reference footer. No terminal control codes; the caller owns
/// cursor movement.
pub fn render_frame(reference: NaiveDateTime, b: &Breakdown) -> String {
    let mut out = String::new();

    out.push_str("Age Tracker\n");
    out.push_str(&"-".repeat(ALIGN_WIDTH + 2));
    out.push('\n');

    out.push_str(&build_row("Years", b.years));
    out.push('\n');
    out.push_str(&build_row("Months", b.months));
    out.push('\n');
    out.push_str(&build_row("Weeks", b.weeks));
    out.push('\n');
    out.push_str(&build_row("Days", b.days));
    out.push('\n');
    out.push_str(&build_row("Hours", b.hours));
    out.push('\n');
    out.push_str(&build_row("Minutes", b.minutes));
    out.push('\n');
    out.push_str(&build_row("Seconds", b.seconds));
    out.push('\n');

    out.push('\n');
    out.push_str(&build_row("Total days", b.total_days));
    out.push('\n');
    out.push_str(&build_row("Total hours", b.total_hours));
    out.push('\n');

    out.push('\n');
    out.push_str(&format_reference(reference));
    out.push('\n');

    out
}
