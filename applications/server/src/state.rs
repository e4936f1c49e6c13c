/// Shared application state
use crate::services::AuthService;
use chorus_cache::RedisCache;
use chorus_service::{
    AccessResolver, ActivityRecorder, CollaborationService, ExportProducer,
    PlaylistCacheGateway, RedisQueue,
};
use chorus_storage::PgStore;
use std::sync::Arc;

pub type Resolver = AccessResolver<PgStore>;
pub type Gateway = PlaylistCacheGateway<PgStore, RedisCache>;
pub type Collaborations = CollaborationService<PgStore, RedisCache>;
pub type Activities = ActivityRecorder<PgStore>;
pub type Exports = ExportProducer<PgStore, RedisQueue>;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PgStore>,
    pub resolver: Arc<Resolver>,
    pub gateway: Arc<Gateway>,
    pub collaborations: Arc<Collaborations>,
    pub activities: Arc<Activities>,
    pub exports: Arc<Exports>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    /// Wire the domain services onto their injected collaborator handles
    pub fn new(
        store: Arc<PgStore>,
        cache: Arc<RedisCache>,
        queue: Arc<RedisQueue>,
        auth_service: Arc<AuthService>,
    ) -> Self {
        let resolver = Arc::new(AccessResolver::new(Arc::clone(&store)));
        let gateway = Arc::new(PlaylistCacheGateway::new(
            Arc::clone(&store),
            Arc::clone(&cache),
        ));
        let collaborations = Arc::new(CollaborationService::new(
            Arc::clone(&store),
            Arc::clone(&cache),
        ));
        let activities = Arc::new(ActivityRecorder::new(Arc::clone(&store)));
        let exports = Arc::new(ExportProducer::new(Arc::clone(&store), queue));

        Self {
            store,
            resolver,
            gateway,
            collaborations,
            activities,
            exports,
            auth_service,
        }
    }
}
