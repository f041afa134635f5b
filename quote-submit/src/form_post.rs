use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use quote_core::submit::{
    Submission, SubmissionError, Submitter, SubmitConfig, SubmitterFactory,
};

/// Name of the form the static-site host routes submissions by.
const FORM_NAME: &str = "contact";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Posts the lead as `application/x-www-form-urlencoded` to a form endpoint.
#[derive(Debug, Clone)]
pub struct FormPostSubmitter {
    client: Client,
    endpoint: Url,
}

impl FormPostSubmitter {
    pub fn new(endpoint: Url) -> Result<Self, SubmissionError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SubmissionError::Configuration(e.to_string()))?;
        Ok(Self::with_client(client, endpoint))
    }

    pub fn with_client(
        client: Client,
        endpoint: Url,
    ) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Parse and check an endpoint string. Only `http` and `https` are
    /// accepted.
    pub fn parse_endpoint(raw: &str) -> Result<Url, SubmissionError> {
        let url = Url::parse(raw.trim()).map_err(|e| {
            SubmissionError::Configuration(format!("invalid endpoint '{raw}': {e}"))
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(SubmissionError::Configuration(format!(
                "unsupported endpoint scheme '{other}'"
            ))),
        }
    }
}

fn form_fields(submission: &Submission) -> [(&'static str, String); 4] {
    [
        ("form-name", FORM_NAME.to_string()),
        ("name", submission.contact.name.clone()),
        ("email", submission.contact.email.clone()),
        ("message", submission.message()),
    ]
}

#[async_trait]
impl Submitter for FormPostSubmitter {
    async fn submit(
        &self,
        submission: &Submission,
    ) -> Result<(), SubmissionError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .form(&form_fields(submission))
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        let status = response.status();
        debug!(endpoint = %self.endpoint, %status, "form post answered");

        if status.is_success() {
            Ok(())
        } else {
            Err(SubmissionError::Status(status.as_u16()))
        }
    }
}

/// [`SubmitterFactory`] for the `"form-post"` backend.
///
/// Requires `endpoint` in the [`SubmitConfig`]; a missing or malformed
/// endpoint is a [`SubmissionError::Configuration`].
pub struct FormPostSubmitterFactory;

#[async_trait]
impl SubmitterFactory for FormPostSubmitterFactory {
    fn backend_name(&self) -> &'static str {
        "form-post"
    }

    async fn create(
        &self,
        config: &SubmitConfig,
    ) -> Result<Box<dyn Submitter>, SubmissionError> {
        let raw = config.endpoint.as_deref().ok_or_else(|| {
            SubmissionError::Configuration("the form-post backend needs an endpoint".to_string())
        })?;
        let endpoint = FormPostSubmitter::parse_endpoint(raw)?;

        Ok(Box::new(FormPostSubmitter::new(endpoint)?))
    }
}
