//! Party lifecycle, RSVPs and the live party feed
//!
//! Run with: cargo test -p integration-tests --test party_tests

use chrono::Duration;
use integration_tests::{next_item, planned_party, TestApp};
use party_core::{PartyStatus, RsvpStatus};

#[tokio::test]
async fn test_status_transitions() {
    let app = TestApp::start();
    let host = app.create_user().await.unwrap();
    let parties = app.ctx.party_repo();

    let party = parties
        .create_party(&planned_party(&host, "Lifecycle", Duration::hours(1)))
        .await
        .unwrap();
    assert_eq!(party.status, PartyStatus::Planned);

    let live = parties.start_party(&party.id).await.unwrap();
    assert!(live.is_live());

    let ended = parties.end_party(&party.id).await.unwrap();
    assert!(ended.has_ended());

    // no transition guard: an ended party can still be cancelled
    let cancelled = parties.cancel_party(&party.id).await.unwrap();
    assert!(cancelled.is_cancelled());
}

#[tokio::test]
async fn test_listings() {
    let app = TestApp::start();
    let host = app.create_user().await.unwrap();
    let guest = app.create_user().await.unwrap();
    let parties = app.ctx.party_repo();

    let later = parties
        .create_party(&planned_party(&host, "Later", Duration::days(3)))
        .await
        .unwrap();
    let sooner = parties
        .create_party(&planned_party(&guest, "Sooner", Duration::days(1)))
        .await
        .unwrap();

    let upcoming = parties.get_upcoming_parties(10).await.unwrap();
    let ids: Vec<_> = upcoming.iter().map(|p| p.id.clone()).collect();
    assert_eq!(ids, vec![sooner.id.clone(), later.id.clone()]);
    assert_eq!(parties.get_upcoming_parties(1).await.unwrap().len(), 1);

    let hosted = parties.get_parties_by_host(&host.id).await.unwrap();
    assert_eq!(hosted.len(), 1);
    assert!(hosted[0].is_hosted_by(&host.id));

    parties.delete_party(&later.id).await.unwrap();
    parties.delete_party(&later.id).await.unwrap();
    assert!(parties.get_parties_by_host(&host.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_rsvp_replaces_previous_answer() {
    let app = TestApp::start();
    let host = app.create_user().await.unwrap();
    let guest = app.create_user().await.unwrap();
    let parties = app.ctx.party_repo();
    let party = parties
        .create_party(&planned_party(&host, "RSVP", Duration::hours(4)))
        .await
        .unwrap();

    parties
        .rsvp(&party.id, &guest.id, RsvpStatus::Interested)
        .await
        .unwrap();
    let attendee = parties
        .rsvp(&party.id, &guest.id, RsvpStatus::Going)
        .await
        .unwrap();
    assert!(attendee.status.is_attending());

    let attendees = parties.get_attendees(&party.id).await.unwrap();
    assert_eq!(attendees.len(), 1);
    assert_eq!(attendees[0].status, RsvpStatus::Going);
    assert_eq!(parties.get_party(&party.id).await.unwrap().attendees_count, 1);
}

#[tokio::test]
async fn test_update_party_keeps_id() {
    let app = TestApp::start();
    let host = app.create_user().await.unwrap();
    let parties = app.ctx.party_repo();
    let mut party = parties
        .create_party(&planned_party(&host, "Draft", Duration::hours(4)))
        .await
        .unwrap();

    party.title = "Final".to_string();
    party.tags = vec!["outdoor".to_string()];
    let updated = parties.update_party(&party).await.unwrap();
    assert_eq!(updated.id, party.id);
    assert_eq!(parties.get_party(&party.id).await.unwrap().title, "Final");
}

#[tokio::test]
async fn test_observe_live_parties() {
    let app = TestApp::start();
    let host = app.create_user().await.unwrap();
    let parties = app.ctx.party_repo();
    let party = parties
        .create_party(&planned_party(&host, "Going live", Duration::minutes(5)))
        .await
        .unwrap();

    let mut live = parties.observe_live_parties();
    assert!(next_item(&mut live).await.unwrap().is_empty());

    parties.start_party(&party.id).await.unwrap();
    let snapshot = next_item(&mut live).await.unwrap();
    assert_eq!(snapshot.len(), 1);
    assert!(snapshot[0].is_live());

    parties.end_party(&party.id).await.unwrap();
    assert!(next_item(&mut live).await.unwrap().is_empty());
}
