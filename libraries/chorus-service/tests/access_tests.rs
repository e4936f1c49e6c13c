//! Authorization resolution tests
//!
//! Owner always wins, collaborators pass the fallback, and a missing
//! playlist is never masked by the collaborator check.

mod common;

use chorus_core::access::{AccessDecision, DenialReason, GrantPath};
use chorus_core::types::{CreatePlaylist, PlaylistId};
use chorus_service::{AccessResolver, CollaborationService};
use common::{MemStore, UnavailableCache};
use std::sync::Arc;

async fn seed_playlist(store: &Arc<MemStore>, owner: &chorus_core::UserId) -> PlaylistId {
    use chorus_core::store::PlaylistStore;
    store
        .insert_playlist(CreatePlaylist {
            name: "Road Trip".to_string(),
            owner: owner.clone(),
        })
        .await
        .unwrap()
}

#[tokio::test]
async fn owner_is_always_granted() {
    let store = Arc::new(MemStore::new());
    let owner = store.seed_user("user-a", "alice");
    let playlist_id = seed_playlist(&store, &owner).await;

    let resolver = AccessResolver::new(Arc::clone(&store));

    let decision = resolver.resolve(&playlist_id, &owner).await.unwrap();
    assert_eq!(decision, AccessDecision::Granted(GrantPath::Owner));

    // Collaboration state does not matter for the owner
    let bob = store.seed_user("user-b", "bob");
    let collab = CollaborationService::new(Arc::clone(&store), Arc::new(UnavailableCache));
    collab.grant(&playlist_id, &bob).await.unwrap();

    let decision = resolver.resolve(&playlist_id, &owner).await.unwrap();
    assert_eq!(decision, AccessDecision::Granted(GrantPath::Owner));
}

#[tokio::test]
async fn collaborator_is_granted_until_revoked() {
    let store = Arc::new(MemStore::new());
    let owner = store.seed_user("user-a", "alice");
    let bob = store.seed_user("user-b", "bob");
    let playlist_id = seed_playlist(&store, &owner).await;

    let resolver = AccessResolver::new(Arc::clone(&store));
    let collab = CollaborationService::new(Arc::clone(&store), Arc::new(UnavailableCache));

    // Before any grant: denied as not-owner
    let before = resolver.resolve(&playlist_id, &bob).await.unwrap();
    assert_eq!(before, AccessDecision::Denied(DenialReason::NotOwner));

    collab.grant(&playlist_id, &bob).await.unwrap();
    let during = resolver.resolve(&playlist_id, &bob).await.unwrap();
    assert_eq!(during, AccessDecision::Granted(GrantPath::Collaborator));

    // After revoke: same error class as if Bob had never been granted
    collab.revoke(&playlist_id, &bob).await.unwrap();
    let after = resolver.resolve(&playlist_id, &bob).await.unwrap();
    assert_eq!(after, before);
}

#[tokio::test]
async fn missing_playlist_wins_over_authorization() {
    let store = Arc::new(MemStore::new());
    let user = store.seed_user("user-a", "alice");
    let resolver = AccessResolver::new(Arc::clone(&store));

    let gone = PlaylistId::new("playlist-gone");
    let decision = resolver.resolve(&gone, &user).await.unwrap();
    assert_eq!(
        decision,
        AccessDecision::Denied(DenialReason::PlaylistMissing(gone.clone()))
    );

    // require() maps it to not-found, not permission-denied
    let err = decision.require().unwrap_err();
    assert!(err.is_not_found());
    assert!(!err.is_permission_denied());
}

#[tokio::test]
async fn owner_only_gate_rejects_collaborators() {
    let store = Arc::new(MemStore::new());
    let owner = store.seed_user("user-a", "alice");
    let bob = store.seed_user("user-b", "bob");
    let playlist_id = seed_playlist(&store, &owner).await;

    let resolver = AccessResolver::new(Arc::clone(&store));
    let collab = CollaborationService::new(Arc::clone(&store), Arc::new(UnavailableCache));
    collab.grant(&playlist_id, &bob).await.unwrap();

    // The collaborator fallback passes the general gate...
    assert!(resolver.resolve(&playlist_id, &bob).await.unwrap().is_granted());

    // ...but the owner-only gate skips it
    let decision = resolver.resolve_owner_only(&playlist_id, &bob).await.unwrap();
    assert_eq!(decision, AccessDecision::Denied(DenialReason::NotOwner));
    assert!(decision.require().unwrap_err().is_permission_denied());

    // The owner still passes
    assert!(resolver
        .resolve_owner_only(&playlist_id, &owner)
        .await
        .unwrap()
        .is_granted());
}
