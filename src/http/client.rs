use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use tracing::{debug, warn};

use super::AuthEndpoint;
use crate::analyzer::StatusClassifier;
use crate::error::EndpointError;
use crate::models::{AttemptResult, Candidate};

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

pub struct HttpEndpoint {
    client: Client,
    url: String,
    account: String,
}

impl HttpEndpoint {
    pub fn new(url: &str, account: &str, timeout: Duration) -> Result<Self, EndpointError> {
        // Connect gets its own budget, shorter than the whole request, so a
        // connect that never completes surfaces as a connect error.
        let client = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout * 2)
            .danger_accept_invalid_certs(false)
            .build()?;

        Ok(Self {
            client,
            url: url.to_string(),
            account: account.to_string(),
        })
    }
}

impl AuthEndpoint for HttpEndpoint {
    async fn attempt(&self, candidate: &Candidate) -> Result<AttemptResult, EndpointError> {
        let body = LoginRequest {
            email: &self.account,
            password: candidate.as_str(),
        };

        let request = self
            .client
            .post(&self.url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&body);

        let response = match request.send().await {
            Ok(response) => response,
            // Connect failures win over timeouts: a connect timeout is unreachable.
            Err(e) if e.is_connect() => {
                return Err(EndpointError::Unreachable {
                    url: self.url.clone(),
                    reason: e.to_string(),
                });
            }
            Err(e) if e.is_timeout() => {
                warn!(url = %self.url, "request timed out");
                return Ok(AttemptResult::TransientError("request timeout".to_string()));
            }
            Err(e) => {
                warn!(url = %self.url, error = %e, "request failed");
                return Ok(AttemptResult::TransientError(e.to_string()));
            }
        };

        let status = response.status().as_u16();
        if status != 200 {
            return Ok(StatusClassifier::classify(status, &[]));
        }

        match response.bytes().await {
            Ok(bytes) => Ok(StatusClassifier::classify(status, &bytes)),
            Err(e) => {
                debug!(error = %e, "failed to read 200 response body");
                Ok(AttemptResult::Failure)
            }
        }
    }
}
