//! Subscription streams over `watch` channels

use futures::stream::{self, StreamExt};
use tokio::sync::watch;

use party_core::Subscription;

/// Turn a watch receiver into a stream: the current value first, then one
/// item per change. Ends when the sender is dropped.
pub fn watch_stream<T>(rx: watch::Receiver<T>) -> Subscription<T>
where
    T: Clone + Send + Sync + 'static,
{
    stream::unfold((rx, true), |(mut rx, first)| async move {
        if !first && rx.changed().await.is_err() {
            return None;
        }
        let value = rx.borrow_and_update().clone();
        Some((value, (rx, false)))
    })
    .boxed()
}
