//! BannerManager - single-slot banner lifecycle coordination
//!
//! The manager owns the notion of "currently shown" and "next queued"
//! banner. All of its state lives inside one spawned task; callers hold a
//! cloneable [`ManagerHandle`] and post commands over an unbounded channel,
//! so competing `show`/`dismiss` calls from arbitrary tasks serialize in
//! submission order and no locking is needed around the slot state.
//!
//! ```text
//!  show()/dismiss()      controller reports        timer task
//!  (any task)            (on_shown/on_dismissed)   (TimeoutFired)
//!       │                        │                      │
//!       ▼                        ▼                      ▼
//!  ┌─────────────────────────────────────────────────────────┐
//!  │                 ManagerCommand channel                  │
//!  └────────────────────────────┬────────────────────────────┘
//!                               ▼
//!                    ┌─────────────────────┐
//!                    │  BannerManager loop │ current / next / timeout
//!                    └─────────────────────┘
//!                               │ Show / Hide(reason)
//!                               ▼
//!                      per-banner controller
//! ```
//!
//! Queue depth never exceeds one: a `show` that finds the slot occupied
//! replaces any previously queued request, which is dropped silently (it
//! never became visible, so it receives no callbacks).

use std::fmt;
use std::sync::Arc;

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::banner::error::{BannerError, BannerResult};
use crate::banner::event::{BannerId, DismissReason, DurationPolicy};
use crate::banner::timeout::AutoDismissTimer;
use crate::banner::traits::BannerCallback;
use crate::core::config::BannerConfig;

/// Commands the manager sends to a banner's controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BannerCommand {
    /// Render and animate in.
    Show,
    /// Animate out (or remove immediately) with the given reason.
    Hide(DismissReason),
}

/// Registration of one banner request with the manager.
pub(crate) struct Registration {
    pub(crate) id: BannerId,
    pub(crate) duration: DurationPolicy,
    pub(crate) commands: UnboundedSender<BannerCommand>,
    pub(crate) callback: Option<Arc<dyn BannerCallback>>,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("id", &self.id)
            .field("duration", &self.duration)
            .finish_non_exhaustive()
    }
}

/// Commands processed by the manager loop.
#[derive(Debug)]
pub(crate) enum ManagerCommand {
    Show(Registration),
    Dismiss { id: BannerId, reason: DismissReason },
    Shown { id: BannerId },
    Dismissed { id: BannerId },
    CancelTimeout { id: BannerId },
    RestoreTimeout { id: BannerId },
    TimeoutFired { id: BannerId, seq: u64 },
    Shutdown,
}

/// Where the slot occupant is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotState {
    /// Show command issued, entrance animation not yet complete.
    Showing,
    /// On screen.
    Visible,
    /// Hide command issued, exit not yet complete.
    Hiding,
}

struct ActiveBanner {
    registration: Registration,
    state: SlotState,
    /// True between cancel_timeout and restore_timeout; no timer may be
    /// armed while the user is interacting with the banner.
    interacting: bool,
}

/// Single-slot coordinator for banner show/dismiss requests.
///
/// Conceptually process-wide (see [`crate::banner::api::get_banner_service`]),
/// but explicitly constructible so tests run against independent instances.
/// Construct with [`BannerManager::new`] and call [`BannerManager::spawn`]
/// inside a runtime to start the command loop.
pub struct BannerManager {
    config: BannerConfig,
    current: Option<ActiveBanner>,
    next: Option<Registration>,
    timeout: Option<AutoDismissTimer>,
    timer_seq: u64,
    commands: UnboundedReceiver<ManagerCommand>,
    sender: UnboundedSender<ManagerCommand>,
}

impl BannerManager {
    pub fn new(config: BannerConfig) -> Self {
        let (sender, commands) = unbounded_channel();
        Self {
            config,
            current: None,
            next: None,
            timeout: None,
            timer_seq: 0,
            commands,
            sender,
        }
    }

    /// Start the command loop and return a handle for posting to it.
    ///
    /// Must be called within a tokio runtime. The loop runs until
    /// [`ManagerHandle::shutdown`] is posted.
    pub fn spawn(self) -> ManagerHandle {
        let handle = ManagerHandle {
            sender: self.sender.clone(),
        };
        tokio::spawn(self.run());
        handle
    }

    async fn run(mut self) {
        while let Some(command) = self.commands.recv().await {
            if !self.handle_command(command) {
                break;
            }
        }
    }

    /// Returns false once the loop should stop.
    fn handle_command(&mut self, command: ManagerCommand) -> bool {
        match command {
            ManagerCommand::Show(registration) => self.handle_show(registration),
            ManagerCommand::Dismiss { id, reason } => self.handle_dismiss(id, reason),
            ManagerCommand::Shown { id } => self.handle_shown(id),
            ManagerCommand::Dismissed { id } => self.handle_dismissed(id),
            ManagerCommand::CancelTimeout { id } => self.handle_cancel_timeout(id),
            ManagerCommand::RestoreTimeout { id } => self.handle_restore_timeout(id),
            ManagerCommand::TimeoutFired { id, seq } => self.handle_timeout_fired(id, seq),
            ManagerCommand::Shutdown => {
                log::trace!("banner manager shutting down");
                return false;
            }
        }
        true
    }

    fn handle_show(&mut self, registration: Registration) {
        let current_id = self.current.as_ref().map(|c| c.registration.id);
        match current_id {
            None => self.show_now(registration),
            Some(id) if id == registration.id => {
                // Re-show of the banner already holding the slot: restart its
                // window rather than queue a duplicate.
                let restartable = self
                    .current
                    .as_ref()
                    .map(|c| c.state == SlotState::Visible && !c.interacting)
                    .unwrap_or(false);
                if restartable {
                    log::trace!("banner {}: re-shown, restarting timeout", id);
                    self.schedule_timeout();
                }
            }
            Some(_) => {
                if self.next.as_ref().map(|n| n.id) == Some(registration.id) {
                    return;
                }
                let incoming = registration.id;
                if let Some(dropped) = self.next.replace(registration) {
                    // The superseded request never became visible; it gets no
                    // callbacks.
                    log::trace!(
                        "banner {}: queued request dropped by newer show of {}",
                        dropped.id,
                        incoming
                    );
                }
                let supersedable = self
                    .current
                    .as_ref()
                    .map(|c| {
                        c.registration.duration != DurationPolicy::Indefinite
                            && c.state != SlotState::Hiding
                    })
                    .unwrap_or(false);
                if supersedable {
                    self.dismiss_current(DismissReason::Consecutive);
                }
            }
        }
    }

    fn handle_dismiss(&mut self, id: BannerId, reason: DismissReason) {
        if self.next.as_ref().map(|n| n.id) == Some(id) {
            // Queued but never shown: drop without animation or callbacks.
            log::trace!("banner {}: dismissed while queued ({})", id, reason);
            self.next = None;
            return;
        }

        let current_state = self
            .current
            .as_ref()
            .filter(|c| c.registration.id == id)
            .map(|c| c.state);
        match current_state {
            None => {
                log::trace!("banner {}: dismiss ignored, already gone", id);
            }
            Some(SlotState::Hiding) => {
                log::trace!("banner {}: dismiss ignored, already hiding", id);
            }
            Some(_) => self.dismiss_current(reason),
        }
    }

    fn handle_shown(&mut self, id: BannerId) {
        let Some(current) = self.current.as_mut() else {
            return;
        };
        if current.registration.id != id {
            return;
        }
        if current.state != SlotState::Showing {
            // A dismissal raced the entrance animation; the hide is already
            // on its way, so neither the timer nor the shown callback fires.
            log::trace!("banner {}: shown arrived while {:?}", id, current.state);
            return;
        }
        current.state = SlotState::Visible;
        let callback = current.registration.callback.clone();
        let interacting = current.interacting;
        log::trace!("banner {}: visible", id);
        if !interacting {
            self.schedule_timeout();
        }
        if let Some(callback) = callback {
            callback.on_shown(id);
        }
    }

    fn handle_dismissed(&mut self, id: BannerId) {
        if self.current.as_ref().map(|c| c.registration.id) != Some(id) {
            return;
        }
        self.clear_timeout();
        self.current = None;
        log::trace!("banner {}: slot vacated", id);
        self.promote_next();
    }

    fn handle_cancel_timeout(&mut self, id: BannerId) {
        if let Some(current) = self.current.as_mut() {
            if current.registration.id == id {
                current.interacting = true;
                self.clear_timeout();
            }
        }
    }

    fn handle_restore_timeout(&mut self, id: BannerId) {
        let mut visible = false;
        if let Some(current) = self.current.as_mut() {
            if current.registration.id != id {
                return;
            }
            current.interacting = false;
            visible = current.state == SlotState::Visible;
        }
        // Restart counts the full duration from scratch; elapsed time before
        // the interaction is not tracked.
        if visible && self.timeout.is_none() {
            self.schedule_timeout();
        }
    }

    fn handle_timeout_fired(&mut self, id: BannerId, seq: u64) {
        let live = self.timeout.as_ref().map(|t| t.seq()) == Some(seq)
            && self.current.as_ref().map(|c| c.registration.id) == Some(id);
        if !live {
            // Raced a cancel or a faster dismissal path.
            log::trace!("banner {}: stale timeout #{} ignored", id, seq);
            return;
        }
        self.timeout = None;
        self.dismiss_current(DismissReason::Timeout);
    }

    fn show_now(&mut self, registration: Registration) {
        let id = registration.id;
        log::trace!("banner {}: show dispatched", id);
        if registration.commands.send(BannerCommand::Show).is_err() {
            log::warn!(
                "banner {}: controller gone before show, trying queued request",
                id
            );
            self.promote_next();
            return;
        }
        self.current = Some(ActiveBanner {
            registration,
            state: SlotState::Showing,
            interacting: false,
        });
    }

    fn dismiss_current(&mut self, reason: DismissReason) {
        self.clear_timeout();
        let Some(current) = self.current.as_mut() else {
            return;
        };
        current.state = SlotState::Hiding;
        let id = current.registration.id;
        log::trace!("banner {}: hide dispatched ({})", id, reason);
        let delivered = current
            .registration
            .commands
            .send(BannerCommand::Hide(reason))
            .is_ok();
        if !delivered {
            log::warn!(
                "banner {}: controller gone, completing dismissal directly",
                id
            );
            self.handle_dismissed(id);
        }
    }

    fn promote_next(&mut self) {
        if let Some(registration) = self.next.take() {
            log::trace!("banner {}: promoted from queue", registration.id);
            self.show_now(registration);
        }
    }

    fn schedule_timeout(&mut self) {
        self.clear_timeout();
        let Some(current) = self.current.as_ref() else {
            return;
        };
        let Some(duration) = current.registration.duration.resolve(&self.config) else {
            return;
        };
        self.timer_seq += 1;
        self.timeout = Some(AutoDismissTimer::schedule(
            self.timer_seq,
            current.registration.id,
            duration,
            self.sender.clone(),
        ));
    }

    fn clear_timeout(&mut self) {
        if let Some(timer) = self.timeout.take() {
            timer.cancel();
        }
    }
}

/// Cloneable posting handle for a spawned [`BannerManager`].
///
/// Every method enqueues a command; nothing executes inline in the caller's
/// stack, so a `show` immediately followed by a `dismiss` from another task
/// still lands in submission order.
#[derive(Clone)]
pub struct ManagerHandle {
    sender: UnboundedSender<ManagerCommand>,
}

impl ManagerHandle {
    fn post(&self, command: ManagerCommand) -> BannerResult<()> {
        self.sender
            .send(command)
            .map_err(|_| BannerError::ManagerUnavailable {
                context: "manager loop has stopped",
            })
    }

    pub(crate) fn show(&self, registration: Registration) -> BannerResult<()> {
        self.post(ManagerCommand::Show(registration))
    }

    /// Request termination of a specific banner. Dismissing a banner that is
    /// neither current nor queued is a no-op.
    pub fn dismiss(&self, id: BannerId, reason: DismissReason) -> BannerResult<()> {
        self.post(ManagerCommand::Dismiss { id, reason })
    }

    /// Suspend the auto-dismiss timer while the user interacts with the
    /// banner. The duration policy is untouched.
    pub fn cancel_timeout(&self, id: BannerId) -> BannerResult<()> {
        self.post(ManagerCommand::CancelTimeout { id })
    }

    /// Re-arm the auto-dismiss timer after an interaction ends. The full
    /// duration is counted again from now.
    pub fn restore_timeout(&self, id: BannerId) -> BannerResult<()> {
        self.post(ManagerCommand::RestoreTimeout { id })
    }

    /// Reported by a controller once its entrance animation completes.
    pub(crate) fn on_shown(&self, id: BannerId) -> BannerResult<()> {
        self.post(ManagerCommand::Shown { id })
    }

    /// Reported by a controller once its exit animation (or immediate
    /// removal) completes.
    pub(crate) fn on_dismissed(&self, id: BannerId) -> BannerResult<()> {
        self.post(ManagerCommand::Dismissed { id })
    }

    /// Stop the manager loop. Outstanding banners receive no further
    /// commands.
    pub fn shutdown(&self) -> BannerResult<()> {
        self.post(ManagerCommand::Shutdown)
    }
}
