use hms_config::Config;
use hms_core::PatientStore;
use hms_menu::MenuSession;
use std::io;
use tracing::info;

/// Input parameters for the Run command strategy.
#[derive(Debug, Clone)]
pub struct RunInput {
    pub config: Config,
    /// Optional capacity override
    pub capacity: Option<usize>,
    /// Optional menu title override
    pub title: Option<String>,
}

/// Strategy for running the interactive patient menu on stdin/stdout.
///
/// The store lives only for the duration of the session; nothing is written
/// to disk.
#[derive(Debug, Clone, Copy)]
pub struct RunStrategy;

impl super::CommandStrategy for RunStrategy {
    type Input = RunInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let mut store_config = input.config.store;
        if let Some(capacity) = input.capacity {
            store_config.capacity = capacity;
        }
        let title = input.title.unwrap_or(input.config.menu.title);

        info!("Starting menu with capacity {}", store_config.capacity);

        let store = PatientStore::from_config(&store_config);
        let mut session = MenuSession::new(store, io::stdin().lock(), io::stdout().lock())
            .with_title(title);
        session.run()?;

        Ok(())
    }
}
