use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use paceplan::config::Config;
use paceplan::handlers::{dashboard, plans, profile, stats, workouts};
use paceplan::repositories::{
    PlanRepository, PlanStore, ProfileRepository, ProfileStore, WorkoutRepository, WorkoutStore,
};
use paceplan::{db, migrations, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paceplan=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    tracing::info!("Connecting to database: {}", config.database_url);

    let pool = db::create_pool(&config.database_url)?;
    migrations::run_migrations(&pool)?;

    // Create stores
    let profile_store: Arc<dyn ProfileStore> = Arc::new(ProfileRepository::new(pool.clone()));
    let plan_store: Arc<dyn PlanStore> = Arc::new(PlanRepository::new(pool.clone()));
    let workout_store: Arc<dyn WorkoutStore> = Arc::new(WorkoutRepository::new(pool.clone()));

    // Create handler states
    let profile_state = profile::ProfileState {
        profile_store: profile_store.clone(),
        race_max_hr_estimate: config.race_max_hr_estimate,
    };
    let plan_state = plans::PlanState {
        plan_store: plan_store.clone(),
    };
    let workouts_state = workouts::WorkoutsState {
        workout_store: workout_store.clone(),
        plan_store: plan_store.clone(),
    };
    let stats_state = stats::StatsState {
        workout_store: workout_store.clone(),
        profile_store: profile_store.clone(),
        plan_store: plan_store.clone(),
    };
    let dashboard_state = dashboard::DashboardState {
        workout_store,
        profile_store,
        plan_store,
    };

    let app = routes::create_router(
        profile_state,
        plan_state,
        workouts_state,
        stats_state,
        dashboard_state,
    );

    let addr = config.server_addr();
    tracing::info!("Starting server at http://{}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
