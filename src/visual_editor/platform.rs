//! Timer glue for the simulated sync

/// Resolve after `ms` milliseconds without blocking the UI thread.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(ms: u32) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let (tx, rx) = futures::channel::oneshot::channel::<()>();
    let callback = Closure::once_into_js(move || {
        let _ = tx.send(());
    });

    let scheduled = web_sys::window().map(|window| {
        window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            i32::try_from(ms).unwrap_or(i32::MAX),
        )
    });
    if !matches!(scheduled, Some(Ok(_))) {
        tracing::warn!("setTimeout unavailable, finishing immediately");
        return;
    }
    let _ = rx.await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_sleep_waits_on_the_runtime_clock() {
        let start = tokio::time::Instant::now();
        sleep(1500).await;
        assert!(start.elapsed() >= std::time::Duration::from_millis(1500));
    }
}
