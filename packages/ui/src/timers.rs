//! Real timers behind [`api::Scheduler`].

use std::time::Duration;

use api::Scheduler;
use dioxus::core::spawn_forever;

/// Sleep on the platform timer.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Runs each task in its own root-scoped Dioxus task after the delay.
///
/// Tasks are spawned with [`spawn_forever`], so unmounting the component that
/// scheduled them does not cancel them. Tasks touching component-local signals
/// must tolerate the component being gone.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpawnScheduler;

impl Scheduler for SpawnScheduler {
    fn schedule<F>(&self, delay: Duration, task: F)
    where
        F: FnOnce() + 'static,
    {
        let _ = spawn_forever(async move {
            sleep(delay).await;
            task();
        });
    }
}
