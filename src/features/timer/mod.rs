//! The study session timer.
//!
//! - [`StudyTimer`] is the state machine and owns history
//! - [`TimerDriver`] feeds it wall-clock ticks
//! - [`SessionStore`] persists history and counters
//! - [`history`] answers questions about past sessions

pub mod clock;
pub mod driver;
pub mod engine;
pub mod format;
pub mod history;
pub mod options;
pub mod persistence;
pub mod session;
pub mod state;
pub mod ticker;

pub use clock::{Clock, ManualClock, SystemClock};
pub use driver::TimerDriver;
pub use engine::StudyTimer;
pub use format::{format_minutes, format_time, parse_minutes, render_progress_bar};
pub use history::{TodayStats, DEFAULT_HISTORY_DAYS};
pub use options::TimerOptions;
pub use persistence::{SessionStore, SESSIONS_KEY, STATS_KEY};
pub use session::{BreakKind, SessionDraft, SessionType, StudySession};
pub use state::{TimerCommand, TimerEvent, TimerState, TimerStats, TimerStatus};
pub use ticker::{Ticker, TICK_PERIOD};
