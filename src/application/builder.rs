use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::api::router::AppState;
use crate::application::{
    ports::{AssociationRepository, CacheStore, NewsRepository, TaxonomyRepository},
    use_cases::{NewsUseCase, ResponseCache, TaxonomyKind, TaxonomyUseCase},
};
use crate::config::Config;
use crate::infrastructure::{
    cache::{InMemoryCache, NoopCache},
    persistence::{
        PostgresAssociationRepository, PostgresNewsRepository, PostgresTaxonomyRepository,
    },
};

/// Application builder for dependency injection and setup
pub struct ApplicationBuilder {
    config: Config,
    pool: Option<sqlx::PgPool>,
    news_repo: Option<Arc<dyn NewsRepository>>,
    topics_repo: Option<Arc<dyn TaxonomyRepository>>,
    tags_repo: Option<Arc<dyn TaxonomyRepository>>,
    topics_assoc: Option<Arc<dyn AssociationRepository>>,
    tags_assoc: Option<Arc<dyn AssociationRepository>>,
    cache_store: Option<Arc<dyn CacheStore>>,
}

impl ApplicationBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            pool: None,
            news_repo: None,
            topics_repo: None,
            tags_repo: None,
            topics_assoc: None,
            tags_assoc: None,
            cache_store: None,
        }
    }

    /// Connect the pool with retry, then run migrations
    pub async fn with_database(mut self) -> Result<Self, Box<dyn std::error::Error>> {
        info!("Connecting to database");

        let mut retries = 3;
        let mut delay = Duration::from_secs(1);
        let pool = loop {
            match PgPoolOptions::new()
                .max_connections(self.config.db_max_connections)
                .min_connections(self.config.db_min_connections)
                .acquire_timeout(Duration::from_secs(self.config.db_acquire_timeout_secs))
                .idle_timeout(Some(Duration::from_secs(self.config.db_idle_timeout_secs)))
                .max_lifetime(Some(Duration::from_secs(self.config.db_max_lifetime_secs)))
                .connect(&self.config.database_url)
                .await
            {
                Ok(pool) => break pool,
                Err(e) if retries > 0 => {
                    retries -= 1;
                    tracing::warn!(
                        "Database connection failed, retrying in {:?} ({} retries left): {}",
                        delay,
                        retries,
                        e
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
                Err(e) => {
                    tracing::error!("Failed to connect to database after retries: {}", e);
                    return Err(Box::new(e));
                }
            }
        };

        info!(
            "Database pool configured: max={}, min={}, acquire_timeout={}s",
            self.config.db_max_connections,
            self.config.db_min_connections,
            self.config.db_acquire_timeout_secs,
        );

        info!("Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to run migrations: {}", e);
                e
            })?;

        self.pool = Some(pool);
        Ok(self)
    }

    /// Repositories over the pool plus the response cache adapter
    pub fn with_infrastructure(mut self) -> Result<Self, Box<dyn std::error::Error>> {
        let pool = self.pool.as_ref().ok_or("Database pool not initialized")?;

        self.news_repo = Some(Arc::new(PostgresNewsRepository::new(pool.clone())));
        self.topics_repo = Some(Arc::new(PostgresTaxonomyRepository::topics(pool.clone())));
        self.tags_repo = Some(Arc::new(PostgresTaxonomyRepository::tags(pool.clone())));
        self.topics_assoc = Some(Arc::new(PostgresAssociationRepository::news_topics(
            pool.clone(),
        )));
        self.tags_assoc = Some(Arc::new(PostgresAssociationRepository::news_tags(
            pool.clone(),
        )));

        let cache_store: Arc<dyn CacheStore> = if self.config.cache_enabled {
            info!(ttl_secs = self.config.cache_ttl_secs, "Response cache enabled");
            Arc::new(InMemoryCache::new())
        } else {
            info!("Response cache disabled");
            Arc::new(NoopCache)
        };
        self.cache_store = Some(cache_store);

        info!("Infrastructure layer initialized");
        Ok(self)
    }

    /// Build application state with all use cases
    pub fn build(self) -> Result<AppState, Box<dyn std::error::Error>> {
        let pool = self.pool.ok_or("Database pool not initialized")?;
        let news_repo = self.news_repo.ok_or("News repository not initialized")?;
        let topics_repo = self.topics_repo.ok_or("Topic repository not initialized")?;
        let tags_repo = self.tags_repo.ok_or("Tag repository not initialized")?;
        let topics_assoc = self
            .topics_assoc
            .ok_or("Topic association repository not initialized")?;
        let tags_assoc = self
            .tags_assoc
            .ok_or("Tag association repository not initialized")?;
        let cache_store = self.cache_store.ok_or("Cache store not initialized")?;

        let cache = ResponseCache::new(
            cache_store,
            Duration::from_secs(self.config.cache_ttl_secs),
        );

        let news_use_case = Arc::new(NewsUseCase::new(
            news_repo,
            topics_assoc,
            tags_assoc,
            cache.clone(),
        ));
        let topics_use_case = Arc::new(TaxonomyUseCase::new(
            TaxonomyKind::Topic,
            topics_repo,
            cache.clone(),
        ));
        let tags_use_case = Arc::new(TaxonomyUseCase::new(TaxonomyKind::Tag, tags_repo, cache));

        info!("Application layer initialized");

        Ok(AppState {
            pool: Arc::new(pool),
            news_use_case,
            topics_use_case,
            tags_use_case,
            config: self.config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
