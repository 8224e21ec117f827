//! Single-Slot Banner Coordination
//!
//! Transient, auto-dismissing notification banners with swipe-to-dismiss,
//! timed auto-hide, and a strict one-visible-banner policy. The subsystem
//! serializes competing show/dismiss requests from arbitrary call sites into
//! one consistent on-screen state and never produces duplicate or orphaned
//! on-screen elements.
//!
//! # Overview
//!
//! - **Manager**: owns the single visible slot plus an at-most-one-deep
//!   queue, and schedules auto-dismiss timeouts. All state transitions run
//!   inside one command loop.
//! - **Controller**: one per banner request; drives its presentation adapter
//!   through the show/hide animation sequences and reports completion back.
//! - **Presentation adapter**: the externally implemented rendering contract.
//!   Layout, styling, and animation playback live entirely behind it.
//!
//! A new request never stacks: while a banner is visible, the newest `show`
//! call occupies the single queued slot (silently displacing any earlier
//! queued request) and a finite-duration visible banner is superseded with
//! reason `Consecutive`. Indefinite banners keep the slot until dismissed
//! externally.

// Internal modules - all access should go through the api module
pub(crate) mod controller;
pub(crate) mod error;
pub(crate) mod event;
pub(crate) mod manager;
pub(crate) mod request;
pub(crate) mod timeout;
pub(crate) mod traits;

// Public API module - the only public interface for the banner subsystem
pub mod api;

#[cfg(test)]
mod tests;
