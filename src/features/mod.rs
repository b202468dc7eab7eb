//! Timer features.
//!
//! - `timer`: the session state machine, its persistence and tick source
//! - `signals`: audio cues and system notifications

pub mod signals;
pub mod timer;
