use async_trait::async_trait;
use tracing::info;

use quote_core::submit::{
    Submission, SubmissionError, Submitter, SubmitConfig, SubmitterFactory,
};

/// Writes the lead message to the log instead of sending it anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSubmitter;

#[async_trait]
impl Submitter for LogSubmitter {
    async fn submit(
        &self,
        submission: &Submission,
    ) -> Result<(), SubmissionError> {
        info!(
            target: "quote_submit::lead",
            email = %submission.contact.email,
            variant = submission.variant.as_str(),
            submitted_at = %submission.submitted_at,
            "new lead\n{}",
            submission.message()
        );
        Ok(())
    }
}

/// [`SubmitterFactory`] for the `"log"` backend. Ignores the endpoint.
///
/// ```rust,no_run
/// use quote_core::submit::SubmitterRegistry;
/// use quote_submit::LogSubmitterFactory;
///
/// let mut registry = SubmitterRegistry::new();
/// registry.register(Box::new(LogSubmitterFactory));
/// ```
pub struct LogSubmitterFactory;

#[async_trait]
impl SubmitterFactory for LogSubmitterFactory {
    fn backend_name(&self) -> &'static str {
        "log"
    }

    async fn create(
        &self,
        _config: &SubmitConfig,
    ) -> Result<Box<dyn Submitter>, SubmissionError> {
        Ok(Box::new(LogSubmitter))
    }
}
