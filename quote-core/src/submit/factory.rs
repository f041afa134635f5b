use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::submission::{SubmissionError, Submitter};

/// Backend-agnostic delivery configuration.
///
/// `backend` must match the [`SubmitterFactory::backend_name`] of a
/// registered factory. `endpoint` is passed through unchanged and only
/// means something to backends that talk to a remote service.
///
/// | backend     | endpoint examples                     |
/// |-------------|---------------------------------------|
/// | `log`       | ignored                               |
/// | `form-post` | `https://studio.example.com/`         |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitConfig {
    /// Lowercase identifier matching a registered factory (e.g. `"log"`).
    pub backend: String,
    pub endpoint: Option<String>,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            backend: "log".to_string(),
            endpoint: None,
        }
    }
}

/// One implementation per delivery backend, registered with a
/// [`SubmitterRegistry`] at startup.
#[async_trait]
pub trait SubmitterFactory: Send + Sync {
    /// Unique, lowercase identifier for this backend.
    fn backend_name(&self) -> &'static str;

    /// Build a ready-to-use submitter. Endpoint parsing and HTTP client
    /// construction belong here so that misconfiguration surfaces before
    /// the questionnaire starts.
    async fn create(
        &self,
        config: &SubmitConfig,
    ) -> Result<Box<dyn Submitter>, SubmissionError>;
}

/// Registry of [`SubmitterFactory`] instances, keyed by backend name.
pub struct SubmitterRegistry {
    factories: HashMap<&'static str, Box<dyn SubmitterFactory>>,
}

impl SubmitterRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a backend factory, replacing any previous one with the same
    /// name.
    pub fn register(
        &mut self,
        factory: Box<dyn SubmitterFactory>,
    ) {
        self.factories.insert(factory.backend_name(), factory);
    }

    /// Names of every registered backend, sorted alphabetically.
    pub fn available_backends(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Dispatch to the factory that matches `config.backend`.
    ///
    /// # Errors
    /// * [`SubmissionError::Configuration`] when no factory is registered
    ///   for the requested backend name.
    /// * Any error the chosen factory itself returns.
    pub async fn create(
        &self,
        config: &SubmitConfig,
    ) -> Result<Box<dyn Submitter>, SubmissionError> {
        let factory = self
            .factories
            .get(config.backend.as_str())
            .ok_or_else(|| {
                SubmissionError::Configuration(format!(
                    "unknown backend '{}'; available: {:?}",
                    config.backend,
                    self.available_backends()
                ))
            })?;

        factory.create(config).await
    }
}

impl Default for SubmitterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// tests
// ─────────────────────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::submit::Submission;

    struct NullSubmitter;

    #[async_trait]
    impl Submitter for NullSubmitter {
        async fn submit(
            &self,
            _submission: &Submission,
        ) -> Result<(), SubmissionError> {
            Ok(())
        }
    }

    /// Flips `called` so tests can prove dispatch reached it.
    struct StubFactory {
        name: &'static str,
        called: Arc<AtomicBool>,
    }

    #[async_trait]
    impl SubmitterFactory for StubFactory {
        fn backend_name(&self) -> &'static str {
            self.name
        }

        async fn create(
            &self,
            _config: &SubmitConfig,
        ) -> Result<Box<dyn Submitter>, SubmissionError> {
            self.called.store(true, Ordering::SeqCst);
            Ok(Box::new(NullSubmitter))
        }
    }

    struct FailingFactory;

    #[async_trait]
    impl SubmitterFactory for FailingFactory {
        fn backend_name(&self) -> &'static str {
            "failing"
        }

        async fn create(
            &self,
            _config: &SubmitConfig,
        ) -> Result<Box<dyn Submitter>, SubmissionError> {
            Err(SubmissionError::Configuration("missing endpoint".to_string()))
        }
    }

    fn stub_factory(name: &'static str) -> (Box<dyn SubmitterFactory>, Arc<AtomicBool>) {
        let flag = Arc::new(AtomicBool::new(false));
        (
            Box::new(StubFactory {
                name,
                called: flag.clone(),
            }),
            flag,
        )
    }

    fn config(backend: &str) -> SubmitConfig {
        SubmitConfig {
            backend: backend.to_string(),
            endpoint: None,
        }
    }

    // ── SubmitConfig ─────────────────────────────────────────────────────
    #[test]
    fn default_config_logs_locally() {
        let cfg = SubmitConfig::default();
        assert_eq!(cfg.backend, "log");
        assert_eq!(cfg.endpoint, None);
    }

    // ── registration ─────────────────────────────────────────────────────
    #[test]
    fn new_registry_has_no_backends() {
        assert!(SubmitterRegistry::new().available_backends().is_empty());
    }

    #[test]
    fn available_backends_is_sorted() {
        let mut reg = SubmitterRegistry::new();
        let (f1, _) = stub_factory("log");
        let (f2, _) = stub_factory("form-post");
        reg.register(f1);
        reg.register(f2);
        assert_eq!(reg.available_backends(), vec!["form-post", "log"]);
    }

    #[test]
    fn duplicate_registration_replaces_previous() {
        let mut reg = SubmitterRegistry::new();
        let (old, _) = stub_factory("log");
        let (new, _) = stub_factory("log");
        reg.register(old);
        reg.register(new);
        assert_eq!(reg.available_backends(), vec!["log"]);
    }

    // ── dispatch ─────────────────────────────────────────────────────────
    #[tokio::test]
    async fn create_calls_only_the_matching_factory() {
        let mut reg = SubmitterRegistry::new();
        let (log_factory, log_called) = stub_factory("log");
        let (post_factory, post_called) = stub_factory("form-post");
        reg.register(log_factory);
        reg.register(post_factory);

        let result = reg.create(&config("log")).await;

        assert!(result.is_ok(), "expected Ok, got {:#?}", result.err());
        assert!(log_called.load(Ordering::SeqCst));
        assert!(!post_called.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn configuration_error_names_requested_and_available_backends() {
        let mut reg = SubmitterRegistry::new();
        let (f, _) = stub_factory("log");
        reg.register(f);

        match reg.create(&config("smtp")).await {
            Err(SubmissionError::Configuration(msg)) => {
                assert!(msg.contains("smtp"), "error should name the requested backend");
                assert!(msg.contains("log"), "error should list available backends");
            }
            Err(other) => panic!("expected Configuration error, got {other:?}"),
            Ok(_) => panic!("expected Configuration error, got a submitter"),
        }
    }

    #[tokio::test]
    async fn create_propagates_factory_error() {
        let mut reg = SubmitterRegistry::new();
        reg.register(Box::new(FailingFactory));

        let err = reg.create(&config("failing")).await.err();

        assert_eq!(
            err,
            Some(SubmissionError::Configuration("missing endpoint".to_string()))
        );
    }
}
