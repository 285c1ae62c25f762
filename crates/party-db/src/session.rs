//! Signed-in user cache
//!
//! One `SessionState` is shared by the user and auth repositories. Auth
//! populates and clears it; user writes refresh it only for the cached id.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use party_core::{Subscription, User};

use crate::stream::watch_stream;

#[derive(Debug, Clone)]
pub struct SessionState {
    current: Arc<watch::Sender<Option<User>>>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            current: Arc::new(watch::Sender::new(None)),
        }
    }

    pub fn current(&self) -> Option<User> {
        self.current.borrow().clone()
    }

    pub fn current_id(&self) -> Option<String> {
        self.current.borrow().as_ref().map(|u| u.id.clone())
    }

    /// Cache `user` as the signed-in user
    pub fn set(&self, user: User) {
        debug!(user_id = %user.id, "Session user set");
        self.current.send_replace(Some(user));
    }

    pub fn clear(&self) {
        if self.current.send_replace(None).is_some() {
            debug!("Session cleared");
        }
    }

    /// Replace the cached user if it has the same id; returns whether it did
    pub fn refresh_if_current(&self, user: &User) -> bool {
        self.current.send_if_modified(|current| match current {
            Some(cached) if cached.id == user.id => {
                *cached = user.clone();
                true
            }
            _ => false,
        })
    }

    /// Clear the cache if it holds `user_id`; returns whether it did
    pub fn clear_if_current(&self, user_id: &str) -> bool {
        self.current.send_if_modified(|current| {
            if current.as_ref().is_some_and(|u| u.id == user_id) {
                *current = None;
                true
            } else {
                false
            }
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.current.subscribe()
    }

    /// Current value first, then every change
    pub fn observe(&self) -> Subscription<Option<User>> {
        watch_stream(self.subscribe())
    }
}
