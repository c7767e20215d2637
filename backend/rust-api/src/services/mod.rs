use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::Config;
use crate::store::RecordStore;

pub mod auth_service;

/// Subjects installed on first initialization (name, description, icon).
const SEED_SUBJECTS: [(&str, &str, &str); 3] = [
    ("Mathematics", "Test your math skills", "🧮"),
    ("Science", "Explore scientific concepts", "🔬"),
    ("History", "Discover historical events", "📜"),
];

pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn RecordStore>,
    ready: AtomicBool,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn RecordStore>) -> Self {
        Self {
            config,
            store,
            ready: AtomicBool::new(false),
        }
    }

    /// One-time startup work: seed the subject list if it is empty, then
    /// leave the loading state for good. Calling this again adds nothing.
    pub async fn initialize(&self) -> anyhow::Result<()> {
        if self.store.subjects().await?.is_empty() {
            for (name, description, icon) in SEED_SUBJECTS {
                self.store.create_subject(name, description, icon).await?;
            }
            tracing::info!("Seeded {} subjects", SEED_SUBJECTS.len());
        }
        self.ready.store(true, Ordering::Release);
        Ok(())
    }

    /// False only while startup initialization has not finished. Never
    /// reverts to false once set.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }
}
