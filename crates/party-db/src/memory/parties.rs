use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use tokio::sync::watch;
use tracing::{debug, instrument};

use party_core::DataSourceError;

use super::{id_or_new, now_millis, MemoryBackend, PARTIES};
use crate::models::{PartyAttendeeDto, PartyEventDto};
use crate::sources::{PartyDataSource, PartyQuery, SourceResult};

impl MemoryBackend {
    /// Recompute the live party list and push it to subscribers
    ///
    /// The list is rebuilt under the watch lock so a slower writer cannot
    /// overwrite a newer snapshot.
    fn publish_live_parties(&self) {
        self.live_parties.send_modify(|live| {
            *live = self
                .parties
                .iter()
                .filter(|p| p.status == "LIVE")
                .map(|p| p.value().clone())
                .collect();
            live.sort_by_key(|p| p.start_time);
        });
    }
}

#[async_trait]
impl PartyDataSource for MemoryBackend {
    #[instrument(skip(self))]
    async fn get_party(&self, id: &str) -> SourceResult<Option<PartyEventDto>> {
        self.ensure_available()?;
        Ok(self.parties.get(id).map(|p| p.value().clone()))
    }

    #[instrument(skip(self))]
    async fn list_parties(&self, query: &PartyQuery) -> SourceResult<Vec<PartyEventDto>> {
        self.ensure_available()?;
        let mut found: Vec<PartyEventDto> = self
            .parties
            .iter()
            .filter(|p| query.matches(p.value()))
            .map(|p| p.value().clone())
            .collect();
        if query.newest_first {
            found.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        } else {
            found.sort_by_key(|p| p.start_time);
        }
        if let Some(limit) = query.limit {
            found.truncate(limit);
        }
        Ok(found)
    }

    #[instrument(skip(self, party), fields(title = %party.title))]
    async fn create_party(&self, party: &PartyEventDto) -> SourceResult<PartyEventDto> {
        self.ensure_available()?;
        let mut doc = party.clone();
        doc.id = id_or_new(&party.id);

        match self.parties.entry(doc.id.clone()) {
            Entry::Occupied(_) => return Err(DataSourceError::already_exists(PARTIES, doc.id)),
            Entry::Vacant(slot) => {
                slot.insert(doc.clone());
            }
        }
        debug!(party_id = %doc.id, "Party document created");
        self.publish_live_parties();
        Ok(doc)
    }

    #[instrument(skip(self, party), fields(party_id = %party.id))]
    async fn update_party(&self, party: &PartyEventDto) -> SourceResult<PartyEventDto> {
        self.ensure_available()?;
        {
            let mut slot = self
                .parties
                .get_mut(&party.id)
                .ok_or_else(|| DataSourceError::not_found(PARTIES, &party.id))?;
            *slot = party.clone();
        }
        self.publish_live_parties();
        Ok(party.clone())
    }

    #[instrument(skip(self))]
    async fn update_party_status(&self, id: &str, status: &str) -> SourceResult<()> {
        self.ensure_available()?;
        {
            let mut slot = self
                .parties
                .get_mut(id)
                .ok_or_else(|| DataSourceError::not_found(PARTIES, id))?;
            slot.status = status.to_string();
            slot.updated_at = now_millis();
        }
        self.publish_live_parties();
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_party(&self, id: &str) -> SourceResult<()> {
        self.ensure_available()?;
        self.parties.remove(id);
        self.attendees.remove(id);
        self.publish_live_parties();
        Ok(())
    }

    #[instrument(skip(self, attendee), fields(party_id = %attendee.party_id, user_id = %attendee.user_id))]
    async fn upsert_attendee(&self, attendee: &PartyAttendeeDto) -> SourceResult<PartyAttendeeDto> {
        self.ensure_available()?;
        if !self.parties.contains_key(&attendee.party_id) {
            return Err(DataSourceError::not_found(PARTIES, &attendee.party_id));
        }

        let going = {
            let mut rsvps = self.attendees.entry(attendee.party_id.clone()).or_default();
            match rsvps.iter_mut().find(|a| a.user_id == attendee.user_id) {
                Some(existing) => *existing = attendee.clone(),
                None => rsvps.push(attendee.clone()),
            }
            rsvps.iter().filter(|a| a.status == "GOING").count() as i64
        };

        if let Some(mut party) = self.parties.get_mut(&attendee.party_id) {
            party.attendees_count = going;
        }
        self.publish_live_parties();
        Ok(attendee.clone())
    }

    #[instrument(skip(self))]
    async fn list_attendees(&self, party_id: &str) -> SourceResult<Vec<PartyAttendeeDto>> {
        self.ensure_available()?;
        Ok(self
            .attendees
            .get(party_id)
            .map(|a| a.value().clone())
            .unwrap_or_default())
    }

    fn watch_live_parties(&self) -> watch::Receiver<Vec<PartyEventDto>> {
        self.live_parties.subscribe()
    }
}
