//! Shared fixtures for banner subsystem tests

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::banner::controller::BannerController;
use crate::banner::event::{BannerId, DismissReason};
use crate::banner::manager::{BannerManager, ManagerHandle};
use crate::banner::request::BannerRequest;
use crate::banner::traits::{BannerCallback, PresentationAdapter};
use crate::core::config::BannerConfig;

/// Spawn a fresh manager so tests never share slot state.
pub(crate) fn test_manager() -> ManagerHandle {
    BannerManager::new(BannerConfig::default()).spawn()
}

/// Build a controller wired to the given manager and adapter.
pub(crate) fn controller(
    manager: &ManagerHandle,
    request: BannerRequest,
    adapter: Arc<TestAdapter>,
) -> BannerController {
    BannerController::new(request, adapter, manager.clone())
}

/// Poll `predicate` until it holds or `timeout` elapses.
pub(crate) async fn wait_until(timeout: Duration, mut predicate: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if predicate() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    predicate()
}

/// Scripted presentation adapter: instant attach/detach, configurable
/// animation time, and externally togglable layout/drag state.
pub(crate) struct TestAdapter {
    laid_out: AtomicBool,
    visible: AtomicBool,
    dragging: AtomicBool,
    attach_count: AtomicUsize,
    detach_count: AtomicUsize,
    animate_in_count: AtomicUsize,
    animate_out_count: AtomicUsize,
    animation: Duration,
}

impl TestAdapter {
    pub(crate) fn new() -> Arc<Self> {
        Self::with_animation(Duration::from_millis(20))
    }

    pub(crate) fn with_animation(animation: Duration) -> Arc<Self> {
        Arc::new(Self {
            laid_out: AtomicBool::new(true),
            visible: AtomicBool::new(false),
            dragging: AtomicBool::new(false),
            attach_count: AtomicUsize::new(0),
            detach_count: AtomicUsize::new(0),
            animate_in_count: AtomicUsize::new(0),
            animate_out_count: AtomicUsize::new(0),
            animation,
        })
    }

    /// An adapter whose view has not completed a layout pass yet.
    pub(crate) fn without_layout() -> Arc<Self> {
        let adapter = Self::new();
        adapter.laid_out.store(false, Ordering::SeqCst);
        adapter
    }

    pub(crate) fn set_laid_out(&self, laid_out: bool) {
        self.laid_out.store(laid_out, Ordering::SeqCst);
    }

    pub(crate) fn set_dragging(&self, dragging: bool) {
        self.dragging.store(dragging, Ordering::SeqCst);
    }

    pub(crate) fn attach_count(&self) -> usize {
        self.attach_count.load(Ordering::SeqCst)
    }

    pub(crate) fn detach_count(&self) -> usize {
        self.detach_count.load(Ordering::SeqCst)
    }

    pub(crate) fn animate_in_count(&self) -> usize {
        self.animate_in_count.load(Ordering::SeqCst)
    }

    pub(crate) fn animate_out_count(&self) -> usize {
        self.animate_out_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PresentationAdapter for TestAdapter {
    async fn attach(&self) {
        self.attach_count.fetch_add(1, Ordering::SeqCst);
        self.visible.store(true, Ordering::SeqCst);
    }

    async fn detach(&self) {
        self.detach_count.fetch_add(1, Ordering::SeqCst);
        self.visible.store(false, Ordering::SeqCst);
    }

    async fn animate_in(&self) {
        self.animate_in_count.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.animation).await;
    }

    async fn animate_out(&self, _reason: DismissReason) {
        self.animate_out_count.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.animation).await;
    }

    fn is_laid_out(&self) -> bool {
        self.laid_out.load(Ordering::SeqCst)
    }

    fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }

    fn is_being_dragged(&self) -> bool {
        self.dragging.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LifecycleNote {
    Shown(BannerId),
    Dismissed(BannerId, DismissReason),
}

/// Callback that records lifecycle transitions with timestamps.
#[derive(Default)]
pub(crate) struct RecordingCallback {
    notes: Mutex<Vec<(Instant, LifecycleNote)>>,
}

impl RecordingCallback {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn notes(&self) -> Vec<LifecycleNote> {
        self.notes
            .lock()
            .unwrap()
            .iter()
            .map(|(_, note)| *note)
            .collect()
    }

    pub(crate) fn shown_count(&self) -> usize {
        self.notes()
            .iter()
            .filter(|note| matches!(note, LifecycleNote::Shown(_)))
            .count()
    }

    pub(crate) fn dismissals(&self) -> Vec<DismissReason> {
        self.notes()
            .iter()
            .filter_map(|note| match note {
                LifecycleNote::Dismissed(_, reason) => Some(*reason),
                LifecycleNote::Shown(_) => None,
            })
            .collect()
    }

    pub(crate) fn shown_at(&self) -> Option<Instant> {
        self.notes
            .lock()
            .unwrap()
            .iter()
            .find(|(_, note)| matches!(note, LifecycleNote::Shown(_)))
            .map(|(at, _)| *at)
    }

    pub(crate) fn dismissed_at(&self) -> Option<Instant> {
        self.notes
            .lock()
            .unwrap()
            .iter()
            .find(|(_, note)| matches!(note, LifecycleNote::Dismissed(_, _)))
            .map(|(at, _)| *at)
    }

    pub(crate) fn is_shown(&self) -> bool {
        self.shown_count() > 0
    }

    pub(crate) fn is_dismissed(&self) -> bool {
        self.dismissed_at().is_some()
    }
}

impl BannerCallback for RecordingCallback {
    fn on_shown(&self, id: BannerId) {
        self.notes
            .lock()
            .unwrap()
            .push((Instant::now(), LifecycleNote::Shown(id)));
    }

    fn on_dismissed(&self, id: BannerId, reason: DismissReason) {
        self.notes
            .lock()
            .unwrap()
            .push((Instant::now(), LifecycleNote::Dismissed(id, reason)));
    }
}
