//! Driver resolution
//!
//! `SmsManager` hands out a fresh [`Driver`] per call. Real providers are
//! rebuilt on every resolution so no send ever reuses another's state; fakes
//! stay registered until the manager is dropped so tests can inspect them.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tracing::{debug, info};

use iran_sms_core::domain::value_objects::MockResponse;
use iran_sms_core::errors::SmsError;
use iran_sms_core::repositories::SmsLogRepository;
use iran_sms_core::services::{Driver, Provider};
use iran_sms_shared::config::{ProviderCredentials, SmsConfig};

use super::fake::FakeProvider;
use super::http::{build_client, DEFAULT_TIMEOUT_SECS};
use super::providers::{create_provider, is_builtin};
use crate::InfrastructureError;

/// Builds a provider for a custom driver name
pub type ProviderCreator = Arc<dyn Fn(&ProviderCredentials) -> Arc<dyn Provider> + Send + Sync>;

/// Name that always refers to the configured default driver
const DEFAULT_ALIAS: &str = "default";

pub struct SmsManager {
    config: SmsConfig,
    client: reqwest::Client,
    log_repository: Option<Arc<dyn SmsLogRepository>>,
    creators: Mutex<HashMap<String, ProviderCreator>>,
    providers: Mutex<HashMap<String, Arc<dyn Provider>>>,
}

impl SmsManager {
    /// Create a manager sharing one HTTP client across every adapter it builds
    pub fn new(config: SmsConfig) -> Result<Self, InfrastructureError> {
        let client = build_client(Duration::from_secs(DEFAULT_TIMEOUT_SECS))?;
        Ok(Self::with_client(config, client))
    }

    pub fn with_client(config: SmsConfig, client: reqwest::Client) -> Self {
        info!(default_driver = %config.default, "SMS manager initialized");
        Self {
            config,
            client,
            log_repository: None,
            creators: Mutex::new(HashMap::new()),
            providers: Mutex::new(HashMap::new()),
        }
    }

    /// Persist matching messages through `repository`
    pub fn with_log_repository(mut self, repository: Arc<dyn SmsLogRepository>) -> Self {
        self.log_repository = Some(repository);
        self
    }

    pub fn config(&self) -> &SmsConfig {
        &self.config
    }

    pub fn default_driver(&self) -> &str {
        &self.config.default
    }

    /// Resolve a driver by name, or the default driver for `None`
    ///
    /// # Errors
    /// * `UnsupportedDriver` for names that are neither built in nor registered
    /// * `MissingCredentials` for built-in names without configured credentials
    pub fn driver(&self, name: Option<&str>) -> Result<Driver, SmsError> {
        let name = self.resolve_name(name);
        let provider = self.resolve_provider(&name)?;

        let driver = Driver::new(provider);
        Ok(match &self.log_repository {
            Some(repository) => driver.with_log_repository(repository.clone()),
            None => driver,
        })
    }

    /// Alias of [`driver`](Self::driver)
    pub fn provider(&self, name: Option<&str>) -> Result<Driver, SmsError> {
        self.driver(name)
    }

    /// Register a ready-made provider under `name`
    ///
    /// Only fakes survive the next resolution; any other provider is replaced
    /// by a freshly built one.
    pub fn set_driver(&self, name: impl Into<String>, provider: Arc<dyn Provider>) -> &Self {
        lock(&self.providers).insert(name.into(), provider);
        self
    }

    /// Register a custom driver, or override a built-in one
    pub fn extend<F>(&self, name: impl Into<String>, creator: F) -> &Self
    where
        F: Fn(&ProviderCredentials) -> Arc<dyn Provider> + Send + Sync + 'static,
    {
        let name = name.into();
        debug!(driver = %name, "Custom SMS driver registered");
        lock(&self.creators).insert(name, Arc::new(creator));
        self
    }

    /// Replace the named drivers with fakes answering `response`
    ///
    /// An empty list fakes the default driver.
    pub fn fake<I, S>(&self, names: I, response: MockResponse) -> Vec<Arc<FakeProvider>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<String> = names
            .into_iter()
            .map(|name| self.resolve_name(Some(name.as_ref())))
            .collect();
        if names.is_empty() {
            names.push(self.config.default.clone());
        }

        self.fake_each(names.into_iter().map(|name| (name, response.clone())))
    }

    /// Fake each named driver with its own response
    pub fn fake_each<I, S>(&self, responses: I) -> Vec<Arc<FakeProvider>>
    where
        I: IntoIterator<Item = (S, MockResponse)>,
        S: AsRef<str>,
    {
        let mut providers = lock(&self.providers);
        responses
            .into_iter()
            .map(|(name, response)| {
                let name = self.resolve_name(Some(name.as_ref()));
                let fake = Arc::new(FakeProvider::new(response));
                debug!(driver = %name, "SMS driver faked");
                providers.insert(name, fake.clone() as Arc<dyn Provider>);
                fake
            })
            .collect()
    }

    fn resolve_name(&self, name: Option<&str>) -> String {
        match name {
            None | Some(DEFAULT_ALIAS) => self.config.default.clone(),
            Some(name) => name.to_string(),
        }
    }

    fn resolve_provider(&self, name: &str) -> Result<Arc<dyn Provider>, SmsError> {
        let mut providers = lock(&self.providers);

        if providers.get(name).is_some_and(|provider| !provider.is_fake()) {
            providers.remove(name);
        }

        if let Some(provider) = providers.get(name) {
            return Ok(provider.clone());
        }

        let provider = self.create(name)?;
        providers.insert(name.to_string(), provider.clone());
        Ok(provider)
    }

    fn create(&self, name: &str) -> Result<Arc<dyn Provider>, SmsError> {
        let creator = lock(&self.creators).get(name).cloned();
        if let Some(creator) = creator {
            let credentials = self.config.credentials(name).cloned().unwrap_or_default();
            return Ok(creator(&credentials));
        }

        if !is_builtin(name) {
            return Err(SmsError::UnsupportedDriver(name.to_string()));
        }

        let credentials = self
            .config
            .credentials(name)
            .ok_or_else(|| SmsError::MissingCredentials(name.to_string()))?;

        create_provider(name, self.client.clone(), credentials)
            .ok_or_else(|| SmsError::UnsupportedDriver(name.to_string()))
    }
}

impl std::fmt::Debug for SmsManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmsManager")
            .field("default", &self.config.default)
            .field("providers", &lock(&self.providers).keys().collect::<Vec<_>>())
            .finish()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Fake answering every message as delivered
pub fn successful_request() -> MockResponse {
    MockResponse::successful()
}

/// Fake rejecting every message with `message` and `code`
pub fn failed_request(
    message: impl Into<String>,
    code: impl Into<iran_sms_core::domain::value_objects::ErrorCode>,
) -> MockResponse {
    MockResponse::failed(message, code)
}

/// Fake whose gateway cannot be reached
pub fn failed_connection() -> MockResponse {
    MockResponse::throw()
}
