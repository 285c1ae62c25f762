use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use tracing::{debug, instrument};

use party_core::DataSourceError;

use super::{id_or_new, MemoryBackend, USERS};
use crate::models::UserDto;
use crate::sources::{SourceResult, UserDataSource};

#[async_trait]
impl UserDataSource for MemoryBackend {
    #[instrument(skip(self))]
    async fn get_user(&self, id: &str) -> SourceResult<Option<UserDto>> {
        self.ensure_available()?;
        Ok(self.users.get(id).map(|u| u.value().clone()))
    }

    #[instrument(skip(self))]
    async fn get_user_by_username(&self, username: &str) -> SourceResult<Option<UserDto>> {
        self.ensure_available()?;
        Ok(self
            .users
            .iter()
            .find(|u| u.username.eq_ignore_ascii_case(username))
            .map(|u| u.value().clone()))
    }

    #[instrument(skip(self))]
    async fn get_user_by_firebase_id(&self, firebase_id: &str) -> SourceResult<Option<UserDto>> {
        self.ensure_available()?;
        Ok(self
            .users
            .iter()
            .find(|u| u.firebase_id == firebase_id)
            .map(|u| u.value().clone()))
    }

    #[instrument(skip(self, user), fields(username = %user.username))]
    async fn create_user(&self, user: &UserDto) -> SourceResult<UserDto> {
        self.ensure_available()?;
        let mut doc = user.clone();
        doc.id = id_or_new(&user.id);

        match self.users.entry(doc.id.clone()) {
            Entry::Occupied(_) => Err(DataSourceError::already_exists(USERS, doc.id)),
            Entry::Vacant(slot) => {
                slot.insert(doc.clone());
                debug!(user_id = %doc.id, "User document created");
                Ok(doc)
            }
        }
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn update_user(&self, user: &UserDto) -> SourceResult<UserDto> {
        self.ensure_available()?;
        let mut slot = self
            .users
            .get_mut(&user.id)
            .ok_or_else(|| DataSourceError::not_found(USERS, &user.id))?;
        *slot = user.clone();
        Ok(user.clone())
    }

    #[instrument(skip(self))]
    async fn delete_user(&self, id: &str) -> SourceResult<()> {
        self.ensure_available()?;
        self.users.remove(id);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn search_users(&self, query: &str, limit: usize) -> SourceResult<Vec<UserDto>> {
        self.ensure_available()?;
        let prefix = query.trim().to_lowercase();
        let mut found: Vec<UserDto> = self
            .users
            .iter()
            .filter(|u| u.username.to_lowercase().starts_with(&prefix))
            .map(|u| u.value().clone())
            .collect();
        found.sort_by(|a, b| a.username.cmp(&b.username));
        found.truncate(limit);
        Ok(found)
    }

    #[instrument(skip(self))]
    async fn username_exists(&self, username: &str) -> SourceResult<bool> {
        self.ensure_available()?;
        Ok(self
            .users
            .iter()
            .any(|u| u.username.eq_ignore_ascii_case(username)))
    }
}
