//! The Executor - single entry point to NeoDB.
//!
//! The Executor owns the loaded record store and routes commands to the
//! handlers. The store is immutable after loading, so commands never
//! interfere with each other.

use std::sync::Arc;

use neodb_storage::RecordStore;
use tracing::{debug, info};

use crate::config::NeoConfig;
use crate::writer::NeoWriter;
use crate::{Command, Error, Output, Result};

/// The command executor - single entry point to NeoDB.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and can be shared across threads.
///
/// # Example
///
/// ```ignore
/// use neodb_executor::{Command, Executor, NeoConfig, QueryParams};
///
/// let executor = Executor::open(NeoConfig::default().with_data_file("neos.csv"))?;
///
/// // Single command execution
/// let output = executor.execute(Command::Search {
///     query: QueryParams::between("2020-01-01", "2020-01-31").returning("Path"),
/// })?;
///
/// // Batch execution
/// let outputs = executor.execute_many(vec![
///     Command::Lookup { name: "433 Eros".into() },
///     Command::Info,
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct Executor {
    store: Arc<RecordStore>,
    config: NeoConfig,
    writer: NeoWriter,
}

impl Executor {
    /// Load the configured data file and create an executor over it.
    ///
    /// # Errors
    ///
    /// - `Configuration` if no data file is configured
    /// - `Load` if the file cannot be read or parsed
    pub fn open(config: NeoConfig) -> Result<Self> {
        if config.data_file.as_os_str().is_empty() {
            return Err(Error::configuration("no data file provided"));
        }
        let store = neodb_storage::load(&config.data_file)?;
        info!(
            target: "neodb::executor",
            data_file = %config.data_file.display(),
            neos = store.neo_count(),
            "Executor ready"
        );
        Ok(Self::new(Arc::new(store), config))
    }

    /// Create an executor over an already loaded store.
    pub fn new(store: Arc<RecordStore>, config: NeoConfig) -> Self {
        let writer = NeoWriter::new(config.output_file.clone());
        Self {
            store,
            config,
            writer,
        }
    }

    /// Execute a single command.
    ///
    /// Returns the command result or an error.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        debug!(target: "neodb::executor", command = cmd.name(), "Executing");
        match cmd {
            Command::Search { query } => {
                crate::handlers::search::search(&self.store, &self.config, query)
            }
            Command::Lookup { name } => crate::handlers::store::lookup(&self.store, &name),
            Command::Info => crate::handlers::store::info(&self.store),
        }
    }

    /// Execute multiple commands sequentially.
    ///
    /// Every command runs even if an earlier one fails; results come back in
    /// command order.
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }

    /// Write an output in the named format (`"display"` or `"csv_file"`).
    ///
    /// Returns `false` if the format is unknown or the write failed.
    pub fn write(&self, format: &str, output: &Output) -> bool {
        self.writer.write(format, output, &self.store)
    }

    /// Number of rows `write("csv_file", output)` writes.
    pub fn csv_row_count(&self, output: &Output) -> usize {
        self.writer.csv_row_count(output, &self.store)
    }

    /// The loaded record store.
    pub fn store(&self) -> &Arc<RecordStore> {
        &self.store
    }

    /// Active configuration.
    pub fn config(&self) -> &NeoConfig {
        &self.config
    }

    /// Result writer.
    pub fn writer(&self) -> &NeoWriter {
        &self.writer
    }
}
