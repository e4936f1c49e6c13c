//! End-to-end scenario across all services
//!
//! Two principals, one playlist, a collaboration grant, membership writes
//! from both sides, the activity log, and an export: the whole flow the
//! HTTP layer drives, minus HTTP.

mod common;

use chorus_cache::MemoryCache;
use chorus_core::access::{AccessDecision, DenialReason};
use chorus_core::types::{ActivityAction, CreatePlaylist, ExportMessage};
use chorus_service::{
    AccessResolver, ActivityRecorder, CollaborationService, ExportListener, ExportProducer,
    PlaylistCacheGateway, EXPORT_TOPIC,
};
use common::{MemMailer, MemQueue, MemStore};
use std::sync::Arc;

#[tokio::test]
async fn shared_playlist_lifecycle() {
    let store = Arc::new(MemStore::new());
    let cache = Arc::new(MemoryCache::new());
    let queue = Arc::new(MemQueue::new());
    let mailer = Arc::new(MemMailer::new());

    let resolver = AccessResolver::new(Arc::clone(&store));
    let gateway = PlaylistCacheGateway::new(Arc::clone(&store), Arc::clone(&cache));
    let recorder = ActivityRecorder::new(Arc::clone(&store));
    let collaborations = CollaborationService::new(Arc::clone(&store), Arc::clone(&cache));
    let producer = ExportProducer::new(Arc::clone(&store), Arc::clone(&queue));
    let listener = ExportListener::new(gateway.clone(), Arc::clone(&mailer));

    let alice = store.seed_user("user-a", "alice");
    let bob = store.seed_user("user-b", "bob");
    let first = store.seed_song("song-abc123", "Highway Song", "The Examples");
    let second = store.seed_song("song-def456", "Detour", "The Examples");

    // Alice creates "Road Trip" and adds a song
    let playlist_id = gateway
        .create_playlist(CreatePlaylist {
            name: "Road Trip".to_string(),
            owner: alice.clone(),
        })
        .await
        .unwrap();
    gateway.add_song(&playlist_id, &first, &alice).await.unwrap();

    // Bob is neither owner nor collaborator: denied
    let decision = resolver.resolve(&playlist_id, &bob).await.unwrap();
    assert_eq!(decision, AccessDecision::Denied(DenialReason::NotOwner));

    // Alice grants Bob a collaboration; now he resolves and can write
    collaborations.grant(&playlist_id, &bob).await.unwrap();
    assert!(resolver.resolve(&playlist_id, &bob).await.unwrap().is_granted());

    gateway.add_song(&playlist_id, &second, &bob).await.unwrap();

    // Both principals see both songs
    for _user in [&alice, &bob] {
        let snapshot = gateway.get_playlist_songs(&playlist_id).await.unwrap();
        assert_eq!(snapshot.songs.len(), 2);
    }

    // Bob's list view includes the shared playlist
    let bobs_lists = gateway.list_playlists(&bob).await.unwrap();
    assert_eq!(bobs_lists.len(), 1);
    assert_eq!(bobs_lists[0].id, playlist_id);

    // The log shows two adds in insertion order, by the right principals
    let entries = recorder.list(&playlist_id).await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].action, ActivityAction::Add);
    assert_eq!(entries[0].username, "alice");
    assert_eq!(entries[1].action, ActivityAction::Add);
    assert_eq!(entries[1].username, "bob");

    // Alice exports to a friend; the consumer mails a two-song snapshot
    producer
        .submit(&playlist_id, &alice, "friend@example.com")
        .await
        .unwrap();

    let published = queue.published(EXPORT_TOPIC);
    assert_eq!(published.len(), 1);
    let message: ExportMessage = serde_json::from_slice(&published[0]).unwrap();
    assert_eq!(message.playlist_id, playlist_id);

    listener.on_message(&published[0]).await;

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "friend@example.com");
    assert!(sent[0].1.contains("Highway Song"));
    assert!(sent[0].1.contains("Detour"));

    // Revoking Bob drops him back to the pre-grant denial
    collaborations.revoke(&playlist_id, &bob).await.unwrap();
    let decision = resolver.resolve(&playlist_id, &bob).await.unwrap();
    assert_eq!(decision, AccessDecision::Denied(DenialReason::NotOwner));

    // And his cached list view was invalidated by the revoke
    assert!(gateway.list_playlists(&bob).await.unwrap().is_empty());
}
