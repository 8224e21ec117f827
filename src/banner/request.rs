//! Caller-facing banner request configuration
//!
//! A [`BannerRequest`] is the facade applications build before asking for a
//! show: message text, duration policy, an optional action button, and an
//! optional lifecycle observer. The request itself carries no view state.

use std::fmt;
use std::sync::Arc;

use crate::banner::event::{BannerId, DurationPolicy};
use crate::banner::traits::BannerCallback;

/// Action button configuration: a label plus the click handler.
///
/// Clicking the action always invokes the handler and then dismisses the
/// banner; the handler cannot veto the dismissal.
#[derive(Clone)]
pub struct BannerAction {
    label: String,
    handler: Arc<dyn Fn() + Send + Sync>,
}

impl BannerAction {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn invoke(&self) {
        (self.handler)();
    }
}

impl fmt::Debug for BannerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BannerAction")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// One configured request to show a banner.
#[derive(Clone)]
pub struct BannerRequest {
    id: BannerId,
    message: String,
    duration: DurationPolicy,
    action: Option<BannerAction>,
    callback: Option<Arc<dyn BannerCallback>>,
}

impl BannerRequest {
    /// Create a request with the given message and the default `Short`
    /// duration.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: BannerId::next(),
            message: message.into(),
            duration: DurationPolicy::Short,
            action: None,
            callback: None,
        }
    }

    /// Set how long the banner stays on screen.
    #[must_use]
    pub fn with_duration(mut self, duration: DurationPolicy) -> Self {
        self.duration = duration;
        self
    }

    /// Configure the action button. An empty label clears any previously
    /// configured action, matching "no label, no button".
    #[must_use]
    pub fn with_action(
        mut self,
        label: impl Into<String>,
        handler: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        let label = label.into();
        self.action = if label.is_empty() {
            None
        } else {
            Some(BannerAction {
                label,
                handler: Arc::new(handler),
            })
        };
        self
    }

    /// Attach a lifecycle observer.
    #[must_use]
    pub fn with_callback(mut self, callback: Arc<dyn BannerCallback>) -> Self {
        self.callback = Some(callback);
        self
    }

    /// Replace the message text.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn id(&self) -> BannerId {
        self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn duration(&self) -> DurationPolicy {
        self.duration
    }

    pub fn action(&self) -> Option<&BannerAction> {
        self.action.as_ref()
    }

    pub(crate) fn callback(&self) -> Option<Arc<dyn BannerCallback>> {
        self.callback.clone()
    }
}

impl fmt::Debug for BannerRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BannerRequest")
            .field("id", &self.id)
            .field("message", &self.message)
            .field("duration", &self.duration)
            .field("action", &self.action)
            .finish_non_exhaustive()
    }
}
