//! In-memory backend
//!
//! Implements every data source trait over `DashMap` collections. Used by the
//! tests and the seeding binary in place of the hosted document store.

mod auth;
mod chat;
mod follows;
mod media;
mod parties;
mod users;

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use dashmap::DashMap;
use parking_lot::{Mutex, RwLock};
use tokio::sync::watch;
use tracing::warn;

use party_common::PasswordService;
use party_core::DataSourceError;

use crate::models::{
    ChatMessageDto, ChatRoomDto, MediaContentDto, PartyAttendeeDto, PartyEventDto, UserDto,
    UserFollowDto,
};
use crate::sources::SourceResult;

const USERS: &str = "users";
const PARTIES: &str = "parties";
const MEDIA: &str = "media";
const ROOMS: &str = "chatRooms";
const MESSAGES: &str = "messages";
const FOLLOWS: &str = "follows";
const ACCOUNTS: &str = "accounts";

/// Registered login
#[derive(Debug, Clone)]
struct Account {
    uid: String,
    password_hash: String,
}

/// Document counts, for logging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackendStats {
    pub users: usize,
    pub parties: usize,
    pub media: usize,
    pub rooms: usize,
    pub messages: usize,
    pub follows: usize,
}

/// Process-local stand-in for the remote document store
pub struct MemoryBackend {
    users: DashMap<String, UserDto>,
    parties: DashMap<String, PartyEventDto>,
    /// RSVPs keyed by party id
    attendees: DashMap<String, Vec<PartyAttendeeDto>>,
    media: DashMap<String, MediaContentDto>,
    blobs: DashMap<String, Vec<u8>>,
    rooms: DashMap<String, ChatRoomDto>,
    /// Messages keyed by room id, oldest first
    messages: DashMap<String, Vec<ChatMessageDto>>,
    /// Keyed `{follower}_{following}`
    follows: DashMap<String, UserFollowDto>,
    /// Keyed by lowercased email
    accounts: DashMap<String, Account>,
    session_uid: RwLock<Option<String>>,
    password_resets: Mutex<Vec<String>>,

    live_parties: watch::Sender<Vec<PartyEventDto>>,
    media_watchers: DashMap<String, watch::Sender<Option<MediaContentDto>>>,
    message_watchers: DashMap<String, watch::Sender<Vec<ChatMessageDto>>>,

    passwords: PasswordService,
    unavailable: AtomicBool,
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::with_password_service(PasswordService::new())
    }

    pub fn with_password_service(passwords: PasswordService) -> Self {
        Self {
            users: DashMap::new(),
            parties: DashMap::new(),
            attendees: DashMap::new(),
            media: DashMap::new(),
            blobs: DashMap::new(),
            rooms: DashMap::new(),
            messages: DashMap::new(),
            follows: DashMap::new(),
            accounts: DashMap::new(),
            session_uid: RwLock::new(None),
            password_resets: Mutex::new(Vec::new()),
            live_parties: watch::Sender::new(Vec::new()),
            media_watchers: DashMap::new(),
            message_watchers: DashMap::new(),
            passwords,
            unavailable: AtomicBool::new(false),
        }
    }

    /// Simulate a network outage: while set, every call fails with
    /// `DataSourceError::Unavailable`
    pub fn set_unavailable(&self, unavailable: bool) {
        if unavailable {
            warn!("Memory backend switched to unavailable");
        }
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn is_unavailable(&self) -> bool {
        self.unavailable.load(Ordering::SeqCst)
    }

    /// Stored bytes of an uploaded asset
    pub fn blob(&self, media_id: &str) -> Option<Vec<u8>> {
        self.blobs.get(media_id).map(|b| b.value().clone())
    }

    /// Emails that requested a password reset, in request order
    pub fn password_reset_requests(&self) -> Vec<String> {
        self.password_resets.lock().clone()
    }

    pub fn stats(&self) -> BackendStats {
        BackendStats {
            users: self.users.len(),
            parties: self.parties.len(),
            media: self.media.len(),
            rooms: self.rooms.len(),
            messages: self.messages.iter().map(|m| m.value().len()).sum(),
            follows: self.follows.len(),
        }
    }

    fn ensure_available(&self) -> SourceResult<()> {
        if self.is_unavailable() {
            Err(DataSourceError::Unavailable(
                "memory backend is offline".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Keep `id` unless it is empty
fn id_or_new(id: &str) -> String {
    if id.is_empty() {
        new_id()
    } else {
        id.to_string()
    }
}
