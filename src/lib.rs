/*!
# moodtrack

moodtrack is a personal daily check-in tracker. Each calendar day can carry a
mood score from 0 (best) to 10 (worst); the history is persisted locally,
projected into calendar events, and summarized as current and best streaks.

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `entry`: Date keys, scores, and the entry map
- `store`: Persisted state, storage backends, and legacy-format migration
- `stats`: Checked-in-today and streak computation
- `presentation`: Score to color, face, and advisory message
- `events`: Calendar display events
- `codec`: JSON import and export
- `session`: The single owner of tracker state and its mutation entry points
- `cli`, `config`, `errors`, `logging`: Command line, configuration, error types, tracing setup

## Usage Example

```rust
use moodtrack::entry::DateKey;
use moodtrack::session::Session;
use moodtrack::store::MemoryStorage;

fn main() -> moodtrack::AppResult<()> {
    let mut session = Session::open(Box::new(MemoryStorage::new()));
    let today = DateKey::from_ymd(2024, 3, 5).unwrap();

    session.check_in(today, 2)?;

    let summary = session.summary(today);
    assert!(summary.checked_in_today);
    assert_eq!(summary.streaks.current, 1);
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// JSON import and export of entries
pub mod codec;
/// Configuration loading and management
pub mod config;
/// Application constants
pub mod constants;
/// Entry data model
pub mod entry;
/// Error types and utilities for error handling
pub mod errors;
/// Calendar display events
pub mod events;
/// Tracing subscriber setup
pub mod logging;
/// Mood presentation mapping
pub mod presentation;
/// Session state and mutation entry points
pub mod session;
/// Streak statistics
pub mod stats;
/// Persisted state
pub mod store;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use entry::{DateKey, EntryMap, Score};
pub use errors::{AppError, AppResult};
pub use session::{Selection, Session};
