mod age;
mod clock;
mod display;
mod store;

use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clock::{Clock, SystemClock};
use std::io::Write;
use store::Store;
use tokio::time::{self, Duration, MissedTickBehavior};

const DEFAULT_TIME: &str = "12:00";

const USAGE: &str = "\
Usage:
  agetick start <YYYY-MM-DD> [HH:MM]   begin tracking from a birth date (time defaults to 12:00)
  agetick                              resume a saved session
  agetick status                       print the current age once and exit
  agetick reset                        forget the saved session";

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let store = Store::new(Store::default_path());
    let clock = SystemClock;
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.iter().map(String::as_str).collect::<Vec<_>>()[..] {
        [] => resume(&store, &clock).await,
        ["start", date] => start(&store, &clock, date, DEFAULT_TIME).await,
        ["start", date, time] => start(&store, &clock, date, time).await,
        ["status"] => status(&store, &clock),
        ["reset"] => reset(&store),
        _ => {
            eprintln!("{USAGE}");
            Ok(())
        }
    }
}

/// Build the reference instant from user input, persist it and start
/// the live display.
async fn start(store: &Store, clock: &impl Clock, date: &str, time: &str) -> Result<()> {
    let reference = build_reference(date, time, clock.now())?;
    store.save(reference)?;
    run_loop(reference, clock).await
}

/// No arguments: pick up the persisted session, if there is one.
async fn resume(store: &Store, clock: &impl Clock) -> Result<()> {
    match store.load()? {
        Some(reference) => run_loop(reference, clock).await,
        None => {
            eprintln!("No saved session.\n{USAGE}");
            Ok(())
        }
    }
}

/// One-shot summary, no loop, no screen control.
fn status(store: &Store, clock: &impl Clock) -> Result<()> {
    match store.load()? {
        Some(reference) => {
            let breakdown = age::decompose(reference, clock.now());
            println!("{}", display::format_summary(&breakdown));
            println!("Total days: {}", breakdown.total_days);
            println!("Total hours: {}", breakdown.total_hours);
            Ok(())
        }
        None => {
            eprintln!("No saved session.\n{USAGE}");
            Ok(())
        }
    }
}

fn reset(store: &Store) -> Result<()> {
    store.clear()?;
    println!("Session cleared.");
    Ok(())
}

/// Parse the user-supplied date and time (seconds are always zero) and
/// refuse instants past `now`: an age is measured forward only.
fn build_reference(date: &str, time: &str, now: NaiveDateTime) -> Result<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .context(format!("Invalid date {date:?}, expected YYYY-MM-DD"))?;
    let time = NaiveTime::parse_from_str(time, "%H:%M")
        .context(format!("Invalid time {time:?}, expected HH:MM"))?;

    let reference = date.and_time(time);
    if reference > now {
        bail!("Birth moment {reference} is in the future");
    }
    Ok(reference)
}

/// Redraw the breakdown once a second until Ctrl-C.
///
/// Ticks are not guaranteed to land on second boundaries and may be
/// skipped entirely under load; every tick recomputes the breakdown
/// from the current wall clock, so missed ticks self-correct on the
/// next one and no catch-up is needed.
async fn run_loop(reference: NaiveDateTime, clock: &impl Clock) -> Result<()> {
    let mut ticker = time::interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut stdout = std::io::stdout();
    // Hide the cursor and start from a clean screen.
    write!(stdout, "\x1b[?25l\x1b[2J")?;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let breakdown = age::decompose(reference, clock.now());
                let frame = display::render_frame(reference, &breakdown);
                // Home the cursor, draw, then clear whatever the
                // previous frame left below.
                write!(stdout, "\x1b[H{frame}\x1b[J")?;
                stdout.flush()?;
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    writeln!(stdout, "\x1b[?25h")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall_clock() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 8, 27)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn parses_date_with_explicit_time() {
        let reference = build_reference("2000-01-15", "08:30", wall_clock()).unwrap();
        assert_eq!(reference.to_string(), "2000-01-15 08:30:00");
    }

    #[test]
    fn seconds_are_always_zeroed() {
        let reference = build_reference("1992-06-14", DEFAULT_TIME, wall_clock()).unwrap();
        assert_eq!(reference.to_string(), "1992-06-14 12:00:00");
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(build_reference("15/01/2000", "12:00", wall_clock()).is_err());
        assert!(build_reference("2000-02-30", "12:00", wall_clock()).is_err());
        assert!(build_reference("2000-01-15", "25:61", wall_clock()).is_err());
    }

    #[test]
    fn rejects_future_birth_moments() {
        assert!(build_reference("2025-08-27", "09:01", wall_clock()).is_err());
        // The current minute itself is fine.
        assert!(build_reference("2025-08-27", "09:00", wall_clock()).is_ok());
    }
}
