//! Shared helpers for integration tests

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;

use overbanner::banner::api::{BannerCallback, BannerId, DismissReason, PresentationAdapter};

/// Minimal scripted adapter: instant attach/detach and short animations.
pub struct StubAdapter {
    visible: AtomicBool,
    dragging: AtomicBool,
    attach_count: AtomicUsize,
}

impl StubAdapter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            visible: AtomicBool::new(false),
            dragging: AtomicBool::new(false),
            attach_count: AtomicUsize::new(0),
        })
    }

    pub fn attach_count(&self) -> usize {
        self.attach_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PresentationAdapter for StubAdapter {
    async fn attach(&self) {
        self.attach_count.fetch_add(1, Ordering::SeqCst);
        self.visible.store(true, Ordering::SeqCst);
    }

    async fn detach(&self) {
        self.visible.store(false, Ordering::SeqCst);
    }

    async fn animate_in(&self) {
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    async fn animate_out(&self, _reason: DismissReason) {
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    fn is_laid_out(&self) -> bool {
        true
    }

    fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }

    fn is_being_dragged(&self) -> bool {
        self.dragging.load(Ordering::SeqCst)
    }
}

/// Records lifecycle callbacks for assertions.
#[derive(Default)]
pub struct LifecycleLog {
    shown: Mutex<Vec<BannerId>>,
    dismissed: Mutex<Vec<(BannerId, DismissReason)>>,
}

impl LifecycleLog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn shown(&self) -> Vec<BannerId> {
        self.shown.lock().unwrap().clone()
    }

    pub fn dismissed(&self) -> Vec<(BannerId, DismissReason)> {
        self.dismissed.lock().unwrap().clone()
    }
}

impl BannerCallback for LifecycleLog {
    fn on_shown(&self, id: BannerId) {
        self.shown.lock().unwrap().push(id);
    }

    fn on_dismissed(&self, id: BannerId, reason: DismissReason) {
        self.dismissed.lock().unwrap().push((id, reason));
    }
}

/// Poll `predicate` until it holds or `timeout` elapses.
pub async fn wait_until(timeout: Duration, mut predicate: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if predicate() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    predicate()
}
