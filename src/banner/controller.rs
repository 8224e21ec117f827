//! Per-banner orchestration between the manager and a presentation adapter
//!
//! A [`BannerController`] wraps one [`BannerRequest`] plus the adapter that
//! renders it. The manager decides *when* the banner may enter or leave the
//! screen; the controller owns *how*: it drives the attach/animate sequences
//! in its own task and reports completion back so the manager can advance the
//! slot state. Adapter-side gestures all arrive through
//! [`BannerController::handle_event`].

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::sync::Notify;

use crate::banner::error::{BannerError, BannerResult};
use crate::banner::event::{BannerEvent, BannerId, DismissReason};
use crate::banner::manager::{BannerCommand, ManagerHandle, Registration};
use crate::banner::request::BannerRequest;
use crate::banner::traits::{BannerCallback, PresentationAdapter};

pub struct BannerController {
    request: BannerRequest,
    adapter: Arc<dyn PresentationAdapter>,
    manager: ManagerHandle,
    commands: UnboundedSender<BannerCommand>,
    inbox: Mutex<Option<UnboundedReceiver<BannerCommand>>>,
    layout_ready: Arc<Notify>,
}

impl BannerController {
    pub fn new(
        request: BannerRequest,
        adapter: Arc<dyn PresentationAdapter>,
        manager: ManagerHandle,
    ) -> Self {
        let (commands, inbox) = unbounded_channel();
        Self {
            request,
            adapter,
            manager,
            commands,
            inbox: Mutex::new(Some(inbox)),
            layout_ready: Arc::new(Notify::new()),
        }
    }

    pub fn request(&self) -> &BannerRequest {
        &self.request
    }

    /// Register this banner with the manager.
    ///
    /// Whether it renders immediately or waits behind the currently visible
    /// banner is the manager's call. The first `show` starts the
    /// controller's command task; showing again after the banner has been
    /// dismissed is an error, since a dismissed request is never reused.
    pub fn show(&self) -> BannerResult<()> {
        let inbox = self
            .inbox
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();
        match inbox {
            Some(receiver) => {
                tokio::spawn(Self::run(
                    self.request.id(),
                    receiver,
                    Arc::clone(&self.adapter),
                    self.manager.clone(),
                    self.request.callback(),
                    Arc::clone(&self.layout_ready),
                ));
            }
            None if self.commands.is_closed() => {
                return Err(BannerError::ControllerGone {
                    id: self.request.id(),
                });
            }
            None => {}
        }

        self.manager.show(Registration {
            id: self.request.id(),
            duration: self.request.duration(),
            commands: self.commands.clone(),
            callback: self.request.callback(),
        })
    }

    /// Dismiss this banner explicitly.
    pub fn dismiss(&self) -> BannerResult<()> {
        self.manager
            .dismiss(self.request.id(), DismissReason::Manual)
    }

    /// Whether the banner is currently on screen.
    pub fn is_shown(&self) -> bool {
        self.adapter.is_visible()
    }

    /// Single entry point for adapter-reported user events.
    pub fn handle_event(&self, event: BannerEvent) -> BannerResult<()> {
        let id = self.request.id();
        match event {
            BannerEvent::DragStart => self.manager.cancel_timeout(id),
            BannerEvent::DragEnd => self.manager.restore_timeout(id),
            BannerEvent::SwipeDismissed => self.manager.dismiss(id, DismissReason::Swipe),
            BannerEvent::ActionClicked => {
                let Some(action) = self.request.action() else {
                    log::debug!("banner {}: action click without a configured action", id);
                    return Ok(());
                };
                // The handler runs first but cannot veto the dismissal.
                action.invoke();
                self.manager.dismiss(id, DismissReason::ActionClick)
            }
            BannerEvent::LayoutReady => {
                self.layout_ready.notify_one();
                Ok(())
            }
        }
    }

    async fn run(
        id: BannerId,
        mut commands: UnboundedReceiver<BannerCommand>,
        adapter: Arc<dyn PresentationAdapter>,
        manager: ManagerHandle,
        callback: Option<Arc<dyn BannerCallback>>,
        layout_ready: Arc<Notify>,
    ) {
        while let Some(command) = commands.recv().await {
            match command {
                BannerCommand::Show => {
                    adapter.attach().await;
                    if !adapter.is_laid_out() {
                        // Not measured yet; wait for exactly one layout pass
                        // before animating so the entrance has real bounds.
                        layout_ready.notified().await;
                    }
                    adapter.animate_in().await;
                    if manager.on_shown(id).is_err() {
                        break;
                    }
                }
                BannerCommand::Hide(reason) => {
                    // The request is terminal from here on: close the inbox so
                    // a late re-registration fails over to the manager's
                    // dead-controller path instead of parking a command here.
                    commands.close();
                    if adapter.is_visible() && !adapter.is_being_dragged() {
                        adapter.animate_out(reason).await;
                    }
                    // Manager first so the slot can promote, then the caller,
                    // then the view comes down.
                    let _ = manager.on_dismissed(id);
                    if let Some(callback) = &callback {
                        callback.on_dismissed(id, reason);
                    }
                    adapter.detach().await;
                    break;
                }
            }
        }
        log::trace!("banner {}: controller task finished", id);
    }
}
