use anyhow::Result;
use crossblog::application::{ports::time::Clock, services::ApplicationServices};
use crossblog::config::{AppConfig, StoreBackend};
use crossblog::domain::{
    article::{Article, ArticleRepository},
    comment::{Comment, CommentRepository},
};
use crossblog::infrastructure::{
    database,
    repositories::{InMemoryRepository, PostgresArticleRepository, PostgresCommentRepository},
    time::SystemClock,
};
use crossblog::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let (article_repo, comment_repo) = build_repositories(&config).await?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        article_repo,
        comment_repo,
        Arc::clone(&clock),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn build_repositories(
    config: &AppConfig,
) -> Result<(Arc<ArticleRepository>, Arc<CommentRepository>)> {
    match config.store_backend() {
        StoreBackend::Postgres => {
            let pool =
                database::init_pool(config.database_url(), config.database_max_connections())
                    .await?;
            database::run_migrations(&pool).await?;
            tracing::info!("using postgres store");

            let articles: Arc<ArticleRepository> =
                Arc::new(PostgresArticleRepository::new(pool.clone()));
            let comments: Arc<CommentRepository> = Arc::new(PostgresCommentRepository::new(pool));
            Ok((articles, comments))
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory store, data is lost on shutdown");
            let articles: Arc<ArticleRepository> = Arc::new(InMemoryRepository::<Article>::new());
            let comments: Arc<CommentRepository> = Arc::new(InMemoryRepository::<Comment>::new());
            Ok((articles, comments))
        }
    }
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
