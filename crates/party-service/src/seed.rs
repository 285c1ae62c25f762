//! Mock data for local runs and demos
//!
//! Everything goes through the repositories, so seeded data follows the same
//! rules (username checks, counters, room previews) as real writes.

use chrono::{Duration, Utc};
use tracing::{info, instrument};

use party_core::{
    ChatMessage, ChatRoom, MediaContent, MediaType, PartyEvent, RepoResult, RsvpStatus, User,
    UserSummary, Venue,
};

use crate::context::AppContext;

/// Shared password of every seeded account
pub const MOCK_PASSWORD: &str = "partytime2024";

/// Ids of what `seed_mock_data` created
#[derive(Debug, Clone, Default)]
pub struct SeedReport {
    pub user_ids: Vec<String>,
    pub party_ids: Vec<String>,
    pub live_party_id: String,
    pub media_ids: Vec<String>,
    pub room_id: String,
    pub messages: usize,
}

struct MockUser {
    email: &'static str,
    username: &'static str,
    first_name: &'static str,
    bio: &'static str,
    verified: bool,
}

const MOCK_USERS: &[MockUser] = &[
    MockUser {
        email: "nova@partygallery.app",
        username: "dj_nova",
        first_name: "Nova",
        bio: "Resident DJ. House and disco all night.",
        verified: true,
    },
    MockUser {
        email: "lena@partygallery.app",
        username: "lena_lights",
        first_name: "Lena",
        bio: "Lighting design and rooftop sunsets.",
        verified: false,
    },
    MockUser {
        email: "marco@partygallery.app",
        username: "marco_beats",
        first_name: "Marco",
        bio: "Techno, warehouses, 6am endings.",
        verified: false,
    },
];

async fn seed_user(ctx: &AppContext, mock: &MockUser) -> RepoResult<User> {
    let mut user = ctx
        .auth_repo()
        .sign_up(mock.email, MOCK_PASSWORD, mock.username)
        .await?;

    user.first_name = Some(mock.first_name.to_string());
    user.bio = Some(mock.bio.to_string());
    user.is_verified = mock.verified;
    user.is_profile_complete = true;
    ctx.user_repo().update_user(&user).await
}

fn party(host: &User, title: &str, venue: Venue, starts_in: Duration, genres: &[&str]) -> PartyEvent {
    let mut party = PartyEvent::new(host.summary(), title, venue, Utc::now() + starts_in);
    party.music_genres = genres.iter().map(|g| (*g).to_string()).collect();
    party
}

fn photo(party_id: &str, uploader: UserSummary, caption: &str) -> MediaContent {
    let mut media = MediaContent::new(party_id, uploader, MediaType::Photo);
    media.caption = Some(caption.to_string());
    media.metadata.width = Some(1080);
    media.metadata.height = Some(1350);
    media.metadata.mime_type = Some("image/jpeg".to_string());
    media
}

/// Populate the backend with users, parties (one live), media and a party
/// chat room. Leaves nobody signed in.
#[instrument(skip(ctx))]
pub async fn seed_mock_data(ctx: &AppContext) -> RepoResult<SeedReport> {
    let mut users = Vec::with_capacity(MOCK_USERS.len());
    for mock in MOCK_USERS {
        users.push(seed_user(ctx, mock).await?);
    }
    let (nova, lena, marco) = (&users[0], &users[1], &users[2]);

    let follows = ctx.follow_repo();
    follows.follow_user(&lena.id, &nova.id).await?;
    follows.follow_user(&marco.id, &nova.id).await?;
    follows.follow_user(&nova.id, &lena.id).await?;

    let parties = ctx.party_repo();
    let rooftop = parties
        .create_party(&party(
            nova,
            "Neon Rooftop Sessions",
            Venue::new("Skyline Terrace").with_coordinates(40.7411, -73.9897),
            -Duration::hours(1),
            &["house", "disco"],
        ))
        .await?;
    let rooftop = parties.start_party(&rooftop.id).await?;

    let boat = parties
        .create_party(&party(
            lena,
            "Sunset Boat Party",
            Venue::new("Pier 17"),
            Duration::days(2),
            &["afro house"],
        ))
        .await?;
    let warehouse = parties
        .create_party(&party(
            marco,
            "Warehouse Techno Night",
            Venue::new("Dock Street Warehouse"),
            Duration::days(7),
            &["techno"],
        ))
        .await?;

    parties.rsvp(&rooftop.id, &lena.id, RsvpStatus::Going).await?;
    parties.rsvp(&rooftop.id, &marco.id, RsvpStatus::Going).await?;
    parties.rsvp(&boat.id, &nova.id, RsvpStatus::Interested).await?;
    parties.rsvp(&warehouse.id, &lena.id, RsvpStatus::Going).await?;

    let media = ctx.media_repo();
    let mut media_ids = Vec::new();
    for (uploader, caption) in [(lena, "Golden hour on the roof"), (marco, "Nova on the decks")] {
        let stored = media
            .upload_media(&photo(&rooftop.id, uploader.summary(), caption), vec![0; 2048])
            .await?;
        media_ids.push(stored.id);
    }
    let mut clip = MediaContent::new(&rooftop.id, nova.summary(), MediaType::Video);
    clip.caption = Some("Drop at midnight".to_string());
    clip.metadata.duration_ms = Some(15_000);
    clip.metadata.mime_type = Some("video/mp4".to_string());
    media_ids.push(media.upload_media(&clip, vec![0; 8192]).await?.id);

    media.like_media(&media_ids[0], &nova.id).await?;
    media.like_media(&media_ids[0], &marco.id).await?;
    media.like_media(&media_ids[2], &lena.id).await?;

    let chat = ctx.chat_repo();
    let room = chat
        .create_chat_room(&ChatRoom::for_party(
            &rooftop.id,
            &rooftop.title,
            users.iter().map(|u| u.id.clone()).collect(),
        ))
        .await?;
    let lines = [
        (nova, "Doors are open, come up to the roof"),
        (lena, "On my way!"),
        (marco, "Saving a spot by the booth"),
    ];
    for (sender, text) in lines {
        let message = ChatMessage::text(&room.id, &sender.id, sender.display_name(), text);
        chat.send_message(&message).await?;
    }

    ctx.auth_repo().sign_out().await?;

    let report = SeedReport {
        user_ids: users.iter().map(|u| u.id.clone()).collect(),
        party_ids: vec![rooftop.id.clone(), boat.id, warehouse.id],
        live_party_id: rooftop.id,
        media_ids,
        room_id: room.id,
        messages: lines.len(),
    };
    info!(
        users = report.user_ids.len(),
        parties = report.party_ids.len(),
        media = report.media_ids.len(),
        "Mock data seeded"
    );
    Ok(report)
}
