//! Identity, duration, and gesture event types for the banner subsystem

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::core::config::BannerConfig;

/// Opaque identity for a single banner request.
///
/// Ids are drawn from a process-wide counter and never reused, so "is this
/// still the current banner" checks compare by value rather than relying on
/// reference identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BannerId(u64);

impl BannerId {
    pub(crate) fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw counter value, mainly useful for log correlation.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for BannerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How long a banner stays on screen once its in-animation completes.
///
/// `Short` and `Long` resolve against [`BannerConfig`]; `Indefinite` banners
/// are never auto-dismissed and keep the slot until dismissed externally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum DurationPolicy {
    Indefinite,
    Short,
    Long,
    Custom(Duration),
}

impl DurationPolicy {
    /// Resolve the policy to a concrete auto-dismiss duration.
    ///
    /// Returns `None` for `Indefinite` (no timer is ever scheduled).
    pub fn resolve(&self, config: &BannerConfig) -> Option<Duration> {
        match self {
            DurationPolicy::Indefinite => None,
            DurationPolicy::Short => Some(config.short_duration()),
            DurationPolicy::Long => Some(config.long_duration()),
            DurationPolicy::Custom(duration) => Some(*duration),
        }
    }
}

/// Why a banner left the screen. Exactly one reason accompanies every
/// dismissal; it is delivered to the request's callback and is informational
/// only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum DismissReason {
    /// The user swiped the banner off screen.
    Swipe,
    /// The configured action was clicked.
    ActionClick,
    /// The auto-dismiss timer elapsed.
    Timeout,
    /// `dismiss()` was called explicitly.
    Manual,
    /// A newer request superseded the visible banner.
    Consecutive,
}

/// User-driven events reported by a presentation adapter.
///
/// All adapter-side reporting funnels through the controller's
/// `handle_event`; there are no per-gesture listener objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerEvent {
    /// A touch/drag began inside the banner bounds.
    DragStart,
    /// The touch/drag ended or was cancelled.
    DragEnd,
    /// A swipe-away gesture completed.
    SwipeDismissed,
    /// The action button was clicked.
    ActionClicked,
    /// The banner view finished its first layout pass.
    LayoutReady,
}
