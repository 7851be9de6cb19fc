use std::sync::Arc;

use crate::{
    config::Config,
    database::Database,
    notifier::{self, Notifier},
    services::{ArticleService, ExportService, InteractionService, ListingService},
};

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub articles: ArticleService,
    pub interactions: InteractionService,
    pub listing: ListingService,
    pub exports: ExportService,
    pub config: Config,
}

impl AppState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let db = Database::connect(&config.database.url).await?;
        db.init().await?;

        let notifier = notifier::from_config(&config.mail);
        Ok(Self::assemble(Arc::new(db), notifier, config))
    }

    /// Wiring seam: tests hand in an in-memory store and a recording
    /// notifier here.
    pub fn assemble(db: Arc<Database>, notifier: Arc<dyn Notifier>, config: Config) -> Self {
        let articles = ArticleService::new(db.clone());
        let interactions =
            InteractionService::new(db.clone(), notifier, config.mail.from_address.clone());
        let listing = ListingService::new(db.clone());
        let exports = ExportService::new(db.clone());

        Self {
            db,
            articles,
            interactions,
            listing,
            exports,
            config,
        }
    }
}
