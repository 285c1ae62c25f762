//! PartyRepository on top of a PartyDataSource

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use futures::StreamExt;
use tracing::{info, instrument};

use party_core::traits::{PartyRepository, RepoResult, Subscription};
use party_core::{PartyAttendee, PartyEvent, PartyStatus, RsvpStatus};

use super::error::{party_not_found, source_error};
use crate::mappers::to_millis;
use crate::models::{PartyAttendeeDto, PartyEventDto};
use crate::sources::{PartyDataSource, PartyQuery};
use crate::stream::watch_stream;

#[derive(Clone)]
pub struct PartyRepositoryImpl {
    source: Arc<dyn PartyDataSource>,
}

impl PartyRepositoryImpl {
    pub fn new(source: Arc<dyn PartyDataSource>) -> Self {
        Self { source }
    }

    async fn list(&self, query: &PartyQuery, operation: &'static str) -> RepoResult<Vec<PartyEvent>> {
        let parties = self
            .source
            .list_parties(query)
            .await
            .map_err(source_error(operation))?;

        Ok(parties.into_iter().map(PartyEvent::from).collect())
    }

    /// Write the new status, then read the party back
    async fn transition(
        &self,
        id: &str,
        status: PartyStatus,
        operation: &'static str,
    ) -> RepoResult<PartyEvent> {
        self.source
            .update_party_status(id, status.as_str())
            .await
            .map_err(source_error(operation))?;

        info!(party_id = %id, status = %status.as_str(), "Party status changed");
        self.get_party(id).await
    }
}

#[async_trait]
impl PartyRepository for PartyRepositoryImpl {
    #[instrument(skip(self))]
    async fn get_party(&self, id: &str) -> RepoResult<PartyEvent> {
        self.source
            .get_party(id)
            .await
            .map_err(source_error("get_party"))?
            .map(PartyEvent::from)
            .ok_or_else(|| party_not_found(id))
    }

    #[instrument(skip(self))]
    async fn get_upcoming_parties(&self, limit: usize) -> RepoResult<Vec<PartyEvent>> {
        let query = PartyQuery::upcoming(to_millis(Utc::now()), limit);
        self.list(&query, "get_upcoming_parties").await
    }

    #[instrument(skip(self))]
    async fn get_live_parties(&self) -> RepoResult<Vec<PartyEvent>> {
        self.list(&PartyQuery::live(), "get_live_parties").await
    }

    #[instrument(skip(self))]
    async fn get_parties_by_host(&self, host_id: &str) -> RepoResult<Vec<PartyEvent>> {
        self.list(&PartyQuery::hosted_by(host_id), "get_parties_by_host")
            .await
    }

    #[instrument(skip(self, party), fields(title = %party.title))]
    async fn create_party(&self, party: &PartyEvent) -> RepoResult<PartyEvent> {
        let created = self
            .source
            .create_party(&PartyEventDto::from(party))
            .await
            .map_err(source_error("create_party"))?;

        info!(party_id = %created.id, host_id = %created.host.id, "Party created");
        Ok(PartyEvent::from(created))
    }

    #[instrument(skip(self, party), fields(party_id = %party.id))]
    async fn update_party(&self, party: &PartyEvent) -> RepoResult<PartyEvent> {
        let mut dto = PartyEventDto::from(party);
        dto.updated_at = to_millis(Utc::now());

        let updated = self
            .source
            .update_party(&dto)
            .await
            .map_err(source_error("update_party"))?;

        Ok(PartyEvent::from(updated))
    }

    #[instrument(skip(self))]
    async fn delete_party(&self, id: &str) -> RepoResult<()> {
        self.source
            .delete_party(id)
            .await
            .map_err(source_error("delete_party"))?;

        info!(party_id = %id, "Party deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn start_party(&self, id: &str) -> RepoResult<PartyEvent> {
        self.transition(id, PartyStatus::Live, "start_party").await
    }

    #[instrument(skip(self))]
    async fn end_party(&self, id: &str) -> RepoResult<PartyEvent> {
        self.transition(id, PartyStatus::Ended, "end_party").await
    }

    #[instrument(skip(self))]
    async fn cancel_party(&self, id: &str) -> RepoResult<PartyEvent> {
        self.transition(id, PartyStatus::Cancelled, "cancel_party")
            .await
    }

    #[instrument(skip(self))]
    async fn rsvp(
        &self,
        party_id: &str,
        user_id: &str,
        status: RsvpStatus,
    ) -> RepoResult<PartyAttendee> {
        let attendee = PartyAttendee::new(party_id, user_id, status);
        let stored = self
            .source
            .upsert_attendee(&PartyAttendeeDto::from(&attendee))
            .await
            .map_err(source_error("rsvp"))?;

        info!(party_id = %party_id, user_id = %user_id, status = %status.as_str(), "RSVP recorded");
        Ok(PartyAttendee::from(stored))
    }

    #[instrument(skip(self))]
    async fn get_attendees(&self, party_id: &str) -> RepoResult<Vec<PartyAttendee>> {
        let attendees = self
            .source
            .list_attendees(party_id)
            .await
            .map_err(source_error("get_attendees"))?;

        Ok(attendees.into_iter().map(PartyAttendee::from).collect())
    }

    fn observe_live_parties(&self) -> Subscription<Vec<PartyEvent>> {
        watch_stream(self.source.watch_live_parties())
            .map(|parties| parties.into_iter().map(PartyEvent::from).collect())
            .boxed()
    }
}
