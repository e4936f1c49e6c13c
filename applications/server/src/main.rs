/// Chorus Server - playlist-sharing backend
use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post},
    Router,
};
use chorus_cache::RedisCache;
use chorus_core::types::CreateUser;
use chorus_server::{
    api, config::ServerConfig, middleware, services::AuthService, state::AppState,
};
use chorus_service::RedisQueue;
use chorus_storage::PgStore;
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "chorus-server")]
#[command(about = "Chorus playlist-sharing server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Create a new user
    AddUser {
        /// Username
        #[arg(short, long)]
        username: String,
        /// Password
        #[arg(short, long)]
        password: String,
        /// Display name
        #[arg(short, long)]
        fullname: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chorus_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => {
            serve().await?;
        }
        Commands::AddUser {
            username,
            password,
            fullname,
        } => {
            add_user(&username, &password, &fullname).await?;
        }
    }

    Ok(())
}

async fn serve() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;
    config.validate()?;

    tracing::info!("Starting Chorus Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    let pool = chorus_storage::create_pool(&config.database.url).await?;
    chorus_storage::run_migrations(&pool).await?;
    let store = Arc::new(PgStore::new(pool));
    tracing::info!("Database connected");

    // Initialize cache and delivery queue (one Redis serves both)
    let cache = Arc::new(RedisCache::connect(&config.redis.url).await?);
    let queue = Arc::new(RedisQueue::connect(&config.redis.url).await?);
    tracing::info!("Redis connected");

    // Initialize auth service
    let auth_service = Arc::new(AuthService::new(
        &config.auth.jwt_secret,
        config.auth.jwt_expiration_hours,
        config.auth.jwt_refresh_expiration_days,
    ));
    tracing::info!("Auth service initialized");

    // Build application state
    let app_state = AppState::new(store, cache, queue, Arc::clone(&auth_service));

    // Build router
    let app = create_router(app_state, auth_service);

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn create_router(app_state: AppState, auth_service: Arc<AuthService>) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/users", post(api::users::register))
        .route("/auth/login", post(api::auth::login))
        .route("/auth/refresh", post(api::auth::refresh));

    // Protected routes (auth required)
    let protected_routes = Router::new()
        // Songs
        .route("/songs", post(api::songs::create_song))
        .route("/songs", get(api::songs::list_songs))
        .route("/songs/:id", get(api::songs::get_song))
        // Playlists
        .route("/playlists", get(api::playlists::list_playlists))
        .route("/playlists", post(api::playlists::create_playlist))
        .route("/playlists/:id", delete(api::playlists::delete_playlist))
        // Playlist songs
        .route("/playlists/:id/songs", post(api::playlists::add_song))
        .route(
            "/playlists/:id/songs",
            get(api::playlists::get_playlist_songs),
        )
        .route("/playlists/:id/songs", delete(api::playlists::remove_song))
        // Activities
        .route(
            "/playlists/:id/activities",
            get(api::activities::list_activities),
        )
        // Collaborations
        .route(
            "/playlists/:id/collaborations",
            post(api::collaborations::grant),
        )
        .route(
            "/playlists/:id/collaborations/:user_id",
            delete(api::collaborations::revoke),
        )
        // Export
        .route("/playlists/:id/export", post(api::exports::export_playlist))
        .layer(axum_middleware::from_fn_with_state(
            Arc::clone(&auth_service),
            middleware::auth_middleware,
        ));

    // Combine routes
    Router::new()
        .nest("/api", public_routes.merge(protected_routes))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(false)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn add_user(username: &str, password: &str, fullname: &str) -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    config.validate()?;

    let pool = chorus_storage::create_pool(&config.database.url).await?;
    chorus_storage::run_migrations(&pool).await?;

    let auth_service = AuthService::new(
        &config.auth.jwt_secret,
        config.auth.jwt_expiration_hours,
        config.auth.jwt_refresh_expiration_days,
    );

    let password_hash = auth_service.hash_password(password)?;

    let user_id = chorus_storage::users::create(
        &pool,
        CreateUser {
            username: username.to_string(),
            password_hash,
            fullname: fullname.to_string(),
        },
    )
    .await?;

    println!("Created user {username} ({user_id})");

    Ok(())
}
