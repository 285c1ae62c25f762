use async_trait::async_trait;
use tracing::{info, instrument};

use party_core::DataSourceError;

use super::{new_id, Account, MemoryBackend, ACCOUNTS};
use crate::sources::{AuthDataSource, SourceResult};

fn account_key(email: &str) -> String {
    email.trim().to_lowercase()
}

impl MemoryBackend {
    fn start_session(&self, uid: &str) {
        *self.session_uid.write() = Some(uid.to_string());
    }
}

#[async_trait]
impl AuthDataSource for MemoryBackend {
    #[instrument(skip(self, password))]
    async fn create_account(&self, email: &str, password: &str) -> SourceResult<String> {
        self.ensure_available()?;
        let key = account_key(email);
        if self.accounts.contains_key(&key) {
            return Err(DataSourceError::already_exists(ACCOUNTS, key));
        }

        let password_hash = self
            .passwords
            .hash(password)
            .map_err(|e| DataSourceError::Internal(e.to_string()))?;
        let uid = new_id();
        self.accounts.insert(
            key,
            Account {
                uid: uid.clone(),
                password_hash,
            },
        );
        self.start_session(&uid);
        info!(uid = %uid, "Account created");
        Ok(uid)
    }

    #[instrument(skip(self, password))]
    async fn sign_in(&self, email: &str, password: &str) -> SourceResult<String> {
        self.ensure_available()?;
        let account = self
            .accounts
            .get(&account_key(email))
            .map(|a| a.value().clone())
            .ok_or(DataSourceError::InvalidCredentials)?;

        let matches = self
            .passwords
            .verify(password, &account.password_hash)
            .map_err(|e| DataSourceError::Internal(e.to_string()))?;
        if !matches {
            return Err(DataSourceError::InvalidCredentials);
        }

        self.start_session(&account.uid);
        Ok(account.uid)
    }

    #[instrument(skip(self))]
    async fn sign_out(&self) -> SourceResult<()> {
        self.ensure_available()?;
        *self.session_uid.write() = None;
        Ok(())
    }

    fn current_uid(&self) -> Option<String> {
        self.session_uid.read().clone()
    }

    #[instrument(skip(self))]
    async fn send_password_reset(&self, email: &str) -> SourceResult<()> {
        self.ensure_available()?;
        let key = account_key(email);
        if !self.accounts.contains_key(&key) {
            return Err(DataSourceError::not_found(ACCOUNTS, key));
        }
        self.password_resets.lock().push(key);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_account(&self) -> SourceResult<()> {
        self.ensure_available()?;
        let uid = self
            .current_uid()
            .ok_or(DataSourceError::Unauthenticated)?;
        self.accounts.retain(|_, account| account.uid != uid);
        *self.session_uid.write() = None;
        info!(uid = %uid, "Account deleted");
        Ok(())
    }
}
