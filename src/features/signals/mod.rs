//! Audible and visual completion signals.
//!
//! Both are best-effort: a missing audio device or notification service
//! degrades to silence, never to an error.

pub mod notify;
pub mod tone;

pub use notify::{Notifier, NullNotifier, Permission};
pub use tone::{Chime, Cue, SilentChime, Tone};

#[cfg(feature = "notifications")]
pub use notify::DesktopNotifier;
#[cfg(feature = "audio")]
pub use tone::RodioChime;

/// The platform chime: audible when built with `audio`, silent otherwise.
#[must_use]
pub fn default_chime() -> Box<dyn Chime> {
    #[cfg(feature = "audio")]
    {
        Box::new(RodioChime)
    }
    #[cfg(not(feature = "audio"))]
    {
        Box::new(SilentChime)
    }
}

/// The platform notifier: desktop notifications when built with
/// `notifications`, none otherwise.
#[must_use]
pub fn default_notifier() -> Box<dyn Notifier> {
    #[cfg(feature = "notifications")]
    {
        Box::new(DesktopNotifier::new("studytimer"))
    }
    #[cfg(not(feature = "notifications"))]
    {
        Box::new(NullNotifier)
    }
}
