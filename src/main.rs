/*!
# moodtrack - A Daily Check-in Tracker

moodtrack records a mood score (0 = best, 10 = worst) for calendar days, keeps
the history on disk, and reports streaks of consecutive check-ins.

This file contains the main application flow, coordinating the various components
to implement the command-line front end.

## Usage

```
moodtrack [OPTIONS] <COMMAND>

Commands:
  checkin  Record a mood score (0 = best, 10 = worst) for a day
  remove   Remove the check-in for a day
  clear    Remove every check-in
  status   Show whether today is checked in and the current and best streaks
  show     Show the mood details recorded for a day
  events   Print calendar display events as JSON
  export   Write all check-ins as a JSON document
  import   Replace all check-ins with the contents of a JSON document
  scale    List the selectable mood levels

Options:
  -v, --verbose                  Print verbose output
      --log-format <LOG_FORMAT>  Log record format [default: text] [possible values: text, json]
  -h, --help                     Print help
  -V, --version                  Print version
```

## Configuration

- `MOODTRACK_DIR`: The directory holding persisted check-ins (defaults to "~/.moodtrack")
- `RUST_LOG`: Log filter (defaults to "info")
*/

use moodtrack::cli::{resolve_date, CliArgs, Command};
use moodtrack::config::Config;
use moodtrack::constants::SCALE_LEGEND;
use moodtrack::entry::DateKey;
use moodtrack::errors::{AppError, AppResult};
use moodtrack::logging::{init_tracing, invocation_span};
use moodtrack::presentation::mood_scale;
use moodtrack::session::Session;
use moodtrack::store::{ensure_data_directory_exists, FileStorage};
use std::fs;
use std::process;
use tracing::{debug, info, warn};

fn main() {
    // Obtain the current date once at the beginning
    let today = DateKey::today();

    let args = CliArgs::parse();

    if let Err(e) = init_tracing(args.log_format, args.verbose) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let span = invocation_span();
    let _guard = span.enter();

    info!("Starting moodtrack");
    debug!("CLI arguments: {:?}", args);

    if let Err(e) = run(args.command, today) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Runs one command against the persisted session.
fn run(command: Command, today: DateKey) -> AppResult<()> {
    let config = Config::load()?;
    config.validate()?;

    // Without a data directory the session still works, it just isn't persisted
    if let Err(e) = ensure_data_directory_exists(&config.data_dir) {
        warn!("Check-ins will not be saved: {}", e);
    }

    let mut session = Session::open(Box::new(FileStorage::new(&config.data_dir)));

    match command {
        Command::Checkin { score, date } => {
            let date = resolve_date(date.as_deref(), today)?;
            session.check_in(date, score)?;
            if let Some(detail) = session.detail(&date) {
                println!("Checked in {}: {}", date, detail.headline());
                println!("{}", detail.message);
            }
            print_summary(&session, today);
        }
        Command::Remove { date } => {
            let date = DateKey::parse_user_input(&date)?;
            if session.remove(&date) {
                println!("Removed check-in for {}", date);
            } else {
                println!("No check-in for {}", date);
            }
            print_summary(&session, today);
        }
        Command::Clear { yes } => {
            let count = session.entries().len();
            if count == 0 {
                println!("No check-ins to clear");
            } else if !yes {
                return Err(AppError::Cancelled(format!(
                    "clearing {} check-ins requires --yes",
                    count
                )));
            } else {
                session.clear();
                println!("Cleared {} check-ins", count);
            }
        }
        Command::Status => print_summary(&session, today),
        Command::Show { date } => {
            let date = DateKey::parse_user_input(&date)?;
            match session.detail(&date) {
                Some(detail) => {
                    println!("{}: {}", date, detail.headline());
                    println!("{}", detail.message);
                    println!("Color: {}", detail.color);
                }
                None => println!("No check-in for {}", date),
            }
        }
        Command::Events => {
            println!("{}", serde_json::to_string_pretty(&session.display_events())?);
        }
        Command::Export { output } => {
            let document = session.export()?;
            match output {
                Some(path) => {
                    fs::write(&path, &document)?;
                    println!(
                        "Exported {} check-ins to {}",
                        session.entries().len(),
                        path.display()
                    );
                }
                None => println!("{}", document),
            }
        }
        Command::Import { file } => {
            let count = session.import_file(&file)?;
            println!("Imported {} check-ins", count);
            print_summary(&session, today);
        }
        Command::Scale => {
            for level in mood_scale() {
                println!("{} {:>2}  {}", level.face, level.score, level.color.to_hex());
            }
            println!("{}", SCALE_LEGEND);
        }
    }

    Ok(())
}

fn print_summary(session: &Session, today: DateKey) {
    let summary = session.summary(today);
    println!("Today: {}", summary.today_label());
    println!("Current streak: {}", summary.streaks.current);
    println!("Best streak: {}", summary.streaks.best);
}
