//! Party entity <-> document mapper

use party_core::{PartyAttendee, PartyEvent, Venue};

use super::{from_millis, parse_or_default, to_millis};
use crate::models::{PartyAttendeeDto, PartyEventDto, VenueDto};

impl From<PartyEventDto> for PartyEvent {
    fn from(dto: PartyEventDto) -> Self {
        PartyEvent {
            status: parse_or_default(&dto.status, "party.status"),
            privacy: parse_or_default(&dto.privacy, "party.privacy"),
            id: dto.id,
            host: dto.host.into(),
            co_hosts: dto.co_hosts.into_iter().map(Into::into).collect(),
            title: dto.title,
            description: dto.description,
            cover_image_url: dto.cover_image_url,
            venue: dto.venue.into(),
            start_time: from_millis(dto.start_time),
            end_time: dto.end_time.map(from_millis),
            max_attendees: dto.max_attendees,
            attendees_count: dto.attendees_count,
            media_count: dto.media_count,
            music_genres: dto.music_genres,
            tags: dto.tags,
            created_at: from_millis(dto.created_at),
            updated_at: from_millis(dto.updated_at),
        }
    }
}

impl From<&PartyEvent> for PartyEventDto {
    fn from(party: &PartyEvent) -> Self {
        PartyEventDto {
            id: party.id.clone(),
            host: (&party.host).into(),
            co_hosts: party.co_hosts.iter().map(Into::into).collect(),
            title: party.title.clone(),
            description: party.description.clone(),
            cover_image_url: party.cover_image_url.clone(),
            venue: (&party.venue).into(),
            start_time: to_millis(party.start_time),
            end_time: party.end_time.map(to_millis),
            status: party.status.as_str().to_string(),
            privacy: party.privacy.as_str().to_string(),
            max_attendees: party.max_attendees,
            attendees_count: party.attendees_count,
            media_count: party.media_count,
            music_genres: party.music_genres.clone(),
            tags: party.tags.clone(),
            created_at: to_millis(party.created_at),
            updated_at: to_millis(party.updated_at),
        }
    }
}

impl From<VenueDto> for Venue {
    fn from(dto: VenueDto) -> Self {
        Venue {
            name: dto.name,
            address: dto.address,
            latitude: dto.latitude,
            longitude: dto.longitude,
        }
    }
}

impl From<&Venue> for VenueDto {
    fn from(venue: &Venue) -> Self {
        VenueDto {
            name: venue.name.clone(),
            address: venue.address.clone(),
            latitude: venue.latitude,
            longitude: venue.longitude,
        }
    }
}

impl From<PartyAttendeeDto> for PartyAttendee {
    fn from(dto: PartyAttendeeDto) -> Self {
        PartyAttendee {
            status: parse_or_default(&dto.status, "attendee.status"),
            party_id: dto.party_id,
            user_id: dto.user_id,
            responded_at: from_millis(dto.responded_at),
        }
    }
}

impl From<&PartyAttendee> for PartyAttendeeDto {
    fn from(attendee: &PartyAttendee) -> Self {
        PartyAttendeeDto {
            party_id: attendee.party_id.clone(),
            user_id: attendee.user_id.clone(),
            status: attendee.status.as_str().to_string(),
            responded_at: to_millis(attendee.responded_at),
        }
    }
}
