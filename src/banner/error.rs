//! Banner Error Types

use crate::banner::event::BannerId;

#[derive(Debug, thiserror::Error)]
pub enum BannerError {
    #[error("Banner service unavailable: {context}")]
    ManagerUnavailable { context: &'static str },

    #[error("Controller for banner {id} is no longer running")]
    ControllerGone { id: BannerId },
}

/// Result type for banner operations
pub type BannerResult<T> = Result<T, BannerError>;
