use anyhow::{Context, Result};
use briefly_core::{
    account::handler::AccountService, helpers::config::ClientConfig,
    history::storage::HistoryStore, services::handler::Services, session::handler::Session,
    summarize::handler::SummarizeService, usage::handler::UsageService,
};

#[derive(Clone)]
pub struct AppDependencies {
    pub db: sled::Db,
    pub session: Session,
    pub history: HistoryStore,
    pub summarizer: SummarizeService,
    pub usage: UsageService,
    pub account: AccountService,
}

impl AppDependencies {
    /// Open storage, build the shared HTTP client and start the session,
    /// which fires its initial auth probe.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let db = sled::open(config.db_path())
            .with_context(|| format!("opening database at {}", config.db_path().display()))?;
        let history = HistoryStore::new(&db).context("opening history trees")?;
        let services = Services::new(config).context("building HTTP client")?;

        let session = Session::start(services.clone());
        let summarizer = SummarizeService::new(services.clone(), session.clone(), history.clone());
        let usage = UsageService::new(services.clone());
        let account = AccountService::new(services, session.clone());

        Ok(Self {
            db,
            session,
            history,
            summarizer,
            usage,
            account,
        })
    }

    /// Tear down the session and flush storage.
    pub async fn shutdown(&self) -> Result<()> {
        self.session.shutdown();
        self.history.flush().context("flushing history")?;
        self.db.flush_async().await.context("flushing database")?;
        Ok(())
    }
}
