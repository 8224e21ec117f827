//! Traits for the banner subsystem

use async_trait::async_trait;

use crate::banner::event::{BannerId, DismissReason};

/// Presentation-side contract for rendering and animating a banner.
///
/// The coordinator never touches views directly; it drives one of these per
/// banner and treats animation calls as opaque async operations that return
/// once the animation has played out. Implementations report user gestures
/// and layout completion back through the controller's `handle_event`.
#[async_trait]
pub trait PresentationAdapter: Send + Sync {
    /// Add the banner view to its parent surface.
    async fn attach(&self);

    /// Remove the banner view from its parent surface.
    async fn detach(&self);

    /// Play the entrance animation to completion.
    async fn animate_in(&self);

    /// Play the exit animation to completion.
    async fn animate_out(&self, reason: DismissReason);

    /// Whether the view has completed its first layout pass. When this is
    /// false at show time, the controller waits for one `LayoutReady` event
    /// before animating in.
    fn is_laid_out(&self) -> bool;

    /// Whether the banner is currently on screen.
    fn is_visible(&self) -> bool;

    /// Whether a drag/settle gesture is in progress. A hide that arrives
    /// mid-drag skips the exit animation.
    fn is_being_dragged(&self) -> bool;
}

/// Caller-supplied observer for banner lifecycle transitions.
///
/// Both methods have empty default bodies so observers implement only what
/// they care about.
pub trait BannerCallback: Send + Sync {
    /// The banner finished its entrance animation and is on screen.
    fn on_shown(&self, _id: BannerId) {}

    /// The banner has been removed. `reason` records what caused it.
    fn on_dismissed(&self, _id: BannerId, _reason: DismissReason) {}
}
