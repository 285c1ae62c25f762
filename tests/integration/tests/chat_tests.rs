//! Chat rooms, messages and read receipts
//!
//! Run with: cargo test -p integration-tests --test chat_tests

use integration_tests::{next_item, TestApp};
use party_core::{ChatMessage, ChatRoom, ChatRoomType, User};

async fn room_for(app: &TestApp, users: &[&User]) -> ChatRoom {
    app.ctx
        .chat_repo()
        .create_chat_room(&ChatRoom::new(
            ChatRoomType::Group,
            users.iter().map(|u| u.id.clone()).collect(),
        ))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_history_is_oldest_first_and_limited() {
    let app = TestApp::start();
    let ana = app.create_user().await.unwrap();
    let ben = app.create_user().await.unwrap();
    let room = room_for(&app, &[&ana, &ben]).await;
    let chat = app.ctx.chat_repo();

    let mut sent = Vec::new();
    for text in ["one", "two", "three"] {
        let message = ChatMessage::text(&room.id, &ana.id, ana.display_name(), text);
        sent.push(chat.send_message(&message).await.unwrap());
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    }

    let all = chat.get_messages(&room.id, 10, None).await.unwrap();
    let texts: Vec<_> = all.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(texts, vec!["one", "two", "three"]);

    let latest = chat.get_messages(&room.id, 2, None).await.unwrap();
    assert_eq!(latest.len(), 2);
    assert_eq!(latest[0].content, "two");

    let older = chat
        .get_messages(&room.id, 10, Some(sent[2].created_at))
        .await
        .unwrap();
    assert_eq!(older.len(), 2);
}

#[tokio::test]
async fn test_room_preview_and_ordering() {
    let app = TestApp::start();
    let ana = app.create_user().await.unwrap();
    let ben = app.create_user().await.unwrap();
    let pinged = room_for(&app, &[&ana, &ben]).await;
    tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    let idle = room_for(&app, &[&ana, &ben]).await;
    let chat = app.ctx.chat_repo();

    tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    chat.send_message(&ChatMessage::text(&pinged.id, &ben.id, "Ben", "ping"))
        .await
        .unwrap();

    let rooms = chat.get_chat_rooms(&ana.id).await.unwrap();
    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[0].id, pinged.id);
    let preview = rooms[0].last_message.as_ref().unwrap();
    assert_eq!(preview.content, "ping");
    assert!(rooms[1].last_message.is_none());
    assert_eq!(rooms[1].id, idle.id);
}

#[tokio::test]
async fn test_read_receipts() {
    let app = TestApp::start();
    let ana = app.create_user().await.unwrap();
    let ben = app.create_user().await.unwrap();
    let room = room_for(&app, &[&ana, &ben]).await;
    let chat = app.ctx.chat_repo();

    let sent = chat
        .send_message(&ChatMessage::text(&room.id, &ana.id, "Ana", "hi"))
        .await
        .unwrap();
    assert!(sent.is_read_by(&ana.id));
    assert!(!sent.is_read_by(&ben.id));

    assert_eq!(chat.mark_as_read(&room.id, &ben.id).await.unwrap(), 1);
    let messages = chat.get_messages(&room.id, 10, None).await.unwrap();
    assert!(messages[0].is_read_by(&ben.id));
}

#[tokio::test]
async fn test_reaction_counts() {
    let app = TestApp::start();
    let ana = app.create_user().await.unwrap();
    let ben = app.create_user().await.unwrap();
    let room = room_for(&app, &[&ana, &ben]).await;
    let chat = app.ctx.chat_repo();

    let sent = chat
        .send_message(&ChatMessage::text(&room.id, &ana.id, "Ana", "tonight?"))
        .await
        .unwrap();
    chat.add_reaction(&room.id, &sent.id, "🎉", &ana.id).await.unwrap();
    let message = chat.add_reaction(&room.id, &sent.id, "🎉", &ben.id).await.unwrap();

    let counts = message.reaction_counts(&ben.id);
    assert_eq!(counts.len(), 1);
    assert_eq!(counts[0].count, 2);
    assert!(counts[0].me);
}

#[tokio::test]
async fn test_observe_messages_sees_edits() {
    let app = TestApp::start();
    let ana = app.create_user().await.unwrap();
    let room = room_for(&app, &[&ana]).await;
    let chat = app.ctx.chat_repo();

    let mut stream = chat.observe_messages(&room.id);
    assert!(next_item(&mut stream).await.unwrap().is_empty());

    let sent = chat
        .send_message(&ChatMessage::text(&room.id, &ana.id, "Ana", "drft"))
        .await
        .unwrap();
    assert_eq!(next_item(&mut stream).await.unwrap().len(), 1);

    chat.edit_message(&room.id, &sent.id, "draft").await.unwrap();
    let snapshot = next_item(&mut stream).await.unwrap();
    assert_eq!(snapshot[0].content, "draft");
    assert!(snapshot[0].is_edited());
}

#[tokio::test]
async fn test_leave_room() {
    let app = TestApp::start();
    let ana = app.create_user().await.unwrap();
    let ben = app.create_user().await.unwrap();
    let room = room_for(&app, &[&ana, &ben]).await;

    app.ctx.chat_repo().leave_chat_room(&room.id, &ben.id).await.unwrap();
    let room = app.ctx.chat_repo().get_chat_room(&room.id).await.unwrap();
    assert!(room.has_participant(&ana.id));
    assert!(!room.has_participant(&ben.id));
}
