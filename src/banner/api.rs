//! Public API for the banner subsystem
//!
//! This module provides the complete public API for the banner subsystem.
//! External modules should import from here rather than directly from
//! internal modules.

use std::sync::{Arc, LazyLock};

// Identity, duration, and event types
pub use crate::banner::event::{BannerEvent, BannerId, DismissReason, DurationPolicy};

// Errors
pub use crate::banner::error::{BannerError, BannerResult};

// Request facade and orchestration
pub use crate::banner::controller::BannerController;
pub use crate::banner::manager::{BannerManager, ManagerHandle};
pub use crate::banner::request::{BannerAction, BannerRequest};

// Collaborator contracts
pub use crate::banner::traits::{BannerCallback, PresentationAdapter};

use crate::core::config::BannerConfig;

/// Global banner service instance
static BANNER_SERVICE: LazyLock<ManagerHandle> = LazyLock::new(|| {
    log::trace!("Initializing banner service");
    BannerManager::new(BannerConfig::default()).spawn()
});

/// Access the banner service
///
/// Returns a posting handle for the process-wide banner manager. Each call
/// returns a handle to the same shared instance; the manager loop is started
/// on first access. Components that want isolated state (tests in
/// particular) construct their own [`BannerManager`] instead.
///
/// # Examples
/// ```no_run
/// # use std::sync::Arc;
/// # use overbanner::banner::api::{get_banner_service, BannerRequest, PresentationAdapter};
/// # async fn example(adapter: Arc<dyn PresentationAdapter>) -> overbanner::banner::api::BannerResult<()> {
/// let service = get_banner_service().await;
/// let controller = overbanner::banner::api::BannerController::new(
///     BannerRequest::new("saved"),
///     adapter,
///     service,
/// );
/// controller.show()?;
/// # Ok(())
/// # }
/// ```
pub async fn get_banner_service() -> ManagerHandle {
    BANNER_SERVICE.clone()
}

/// Show a banner through the global service.
///
/// Convenience wrapper that builds a controller, registers it, and hands it
/// back so the caller can dismiss it or feed it adapter events.
pub async fn show_banner(
    request: BannerRequest,
    adapter: Arc<dyn PresentationAdapter>,
) -> BannerResult<Arc<BannerController>> {
    let controller = Arc::new(BannerController::new(
        request,
        adapter,
        get_banner_service().await,
    ));
    controller.show()?;
    Ok(controller)
}
