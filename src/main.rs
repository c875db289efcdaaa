use cinema_booking_ddd::{
    adapters::{
        clock::SystemClock,
        memory::{BookingStore as InMemoryBookingStore, demo::demo_catalog},
        postgres::{PostgresBookingStore, PostgresShowTimeLookup},
    },
    api::{handlers::AppState, router::create_router},
    application::ServiceDependencies,
    config::Config,
    ports::Clock,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinema_booking_ddd=debug,tower_http=debug,axum=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let clock = Arc::new(SystemClock::new());

    // Initialize adapters
    let service_deps = match &config.database_url {
        Some(database_url) => {
            tracing::info!("Using PostgreSQL storage");

            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(database_url)
                .await?;

            sqlx::migrate!("./migrations").run(&pool).await?;

            ServiceDependencies {
                show_time_lookup: Arc::new(PostgresShowTimeLookup::new(pool.clone())),
                booking_store: Arc::new(PostgresBookingStore::new(pool)),
                clock,
            }
        }
        None => {
            tracing::info!("DATABASE_URL not set, using in-memory storage with demo show times");

            ServiceDependencies {
                show_time_lookup: Arc::new(demo_catalog(clock.now())?),
                booking_store: Arc::new(InMemoryBookingStore::new()),
                clock,
            }
        }
    };

    // Create application state
    let app_state = Arc::new(AppState { service_deps });

    // Create router
    let app = create_router(app_state);

    // Server configuration
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app).await?;

    Ok(())
}
