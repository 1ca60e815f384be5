//! Application state for the advocate directory API.
//!
//! Handlers share one [`AppState`]: the repository, the record validator and
//! the server configuration.

use std::sync::Arc;

use advocate_persistence::core::RecordStorage;
use advocate_persistence::repository::Repository;
use advocate_persistence::types::AdvocateValidator;

use crate::config::ServerConfig;
use crate::error::RestResult;

/// Shared application state for the API.
///
/// # Type Parameters
///
/// * `S` - The storage backend type (must implement [`RecordStorage`])
///
/// # Example
///
/// ```rust,ignore
/// use advocate_rest::{AppState, ServerConfig};
/// use advocate_persistence::backends::sqlite::SqliteBackend;
/// use std::sync::Arc;
///
/// let backend = SqliteBackend::in_memory()?;
/// backend.init_schema()?;
/// let state = AppState::new(Arc::new(backend), ServerConfig::default())?;
/// ```
pub struct AppState<S: RecordStorage> {
    /// Search repository over the storage backend.
    repository: Repository<S>,

    /// Field rules for submitted records.
    validator: Arc<AdvocateValidator>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

impl<S: RecordStorage> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            validator: Arc::clone(&self.validator),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: RecordStorage> AppState<S> {
    /// Creates the state over `storage` searching the advocate fields.
    ///
    /// Fails when the backend lacks a capability the repository needs or the
    /// validator rules do not compile.
    pub fn new(storage: Arc<S>, config: ServerConfig) -> RestResult<Self> {
        let repository = Repository::advocates(storage)?;
        Ok(Self::with_repository(
            repository,
            AdvocateValidator::new()?,
            config,
        ))
    }

    /// Creates the state from already-built parts.
    pub fn with_repository(
        repository: Repository<S>,
        validator: AdvocateValidator,
        config: ServerConfig,
    ) -> Self {
        Self {
            repository,
            validator: Arc::new(validator),
            config: Arc::new(config),
        }
    }

    /// Returns the repository.
    pub fn repository(&self) -> &Repository<S> {
        &self.repository
    }

    /// Returns a reference to the storage backend.
    pub fn storage(&self) -> &S {
        self.repository.storage()
    }

    /// Returns the record validator.
    pub fn validator(&self) -> &AdvocateValidator {
        &self.validator
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the page size used when a request does not name one.
    pub fn default_page_size(&self) -> u32 {
        self.config.default_page_size
    }
}
