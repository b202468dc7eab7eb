//! System notifications.
//!
//! Denied or unsupported notifications are an expected condition, not an
//! error: the timer simply skips them.

use serde::{Deserialize, Serialize};

/// OS-level notification permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    /// Not yet decided.
    Default,
    /// Notifications may be shown.
    Granted,
    /// The user refused.
    Denied,
    /// The environment cannot show notifications.
    Unsupported,
}

impl Permission {
    /// Whether notifications may be shown.
    #[must_use]
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Default => "not decided",
            Self::Granted => "granted",
            Self::Denied => "denied",
            Self::Unsupported => "unsupported",
        };
        write!(f, "{label}")
    }
}

/// Shows system notifications.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    /// Current permission.
    fn permission(&self) -> Permission;

    /// Ask for permission if it has not been decided. Returns the outcome.
    fn request_permission(&mut self) -> Permission;

    /// Show a notification, logging and swallowing any failure.
    fn notify(&self, title: &str, body: &str);
}

/// A notifier for environments without notification support.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn permission(&self) -> Permission {
        Permission::Unsupported
    }

    fn request_permission(&mut self) -> Permission {
        Permission::Unsupported
    }

    fn notify(&self, _title: &str, _body: &str) {}
}

#[cfg(feature = "notifications")]
pub use desktop::DesktopNotifier;

#[cfg(feature = "notifications")]
mod desktop {
    use notify_rust::Notification;
    use tracing::warn;

    use super::{Notifier, Permission};

    /// Desktop notifications through the platform notification service.
    ///
    /// Desktop notification daemons have no consent prompt, so requesting
    /// permission grants it.
    #[derive(Debug, Clone)]
    pub struct DesktopNotifier {
        permission: Permission,
        appname: String,
    }

    impl DesktopNotifier {
        /// Create a notifier that has not asked for permission yet.
        #[must_use]
        pub fn new(appname: impl Into<String>) -> Self {
            Self {
                permission: Permission::Default,
                appname: appname.into(),
            }
        }
    }

    impl Notifier for DesktopNotifier {
        fn permission(&self) -> Permission {
            self.permission
        }

        fn request_permission(&mut self) -> Permission {
            if self.permission == Permission::Default {
                self.permission = Permission::Granted;
            }
            self.permission
        }

        fn notify(&self, title: &str, body: &str) {
            if let Err(e) = Notification::new()
                .summary(title)
                .body(body)
                .appname(&self.appname)
                .icon("alarm-clock")
                .show()
            {
                warn!(error = %e, "failed to show notification");
            }
        }
    }
}
