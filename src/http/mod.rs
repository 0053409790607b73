mod client;

pub use client::HttpEndpoint;

use crate::error::EndpointError;
use crate::models::{AttemptResult, Candidate};

/// A login target bound to one account.
///
/// `Ok` carries the verdict for a request that was issued. `Err` means the
/// endpoint itself could not be reached and the session must stop.
#[allow(async_fn_in_trait)]
pub trait AuthEndpoint {
    async fn attempt(&self, candidate: &Candidate) -> Result<AttemptResult, EndpointError>;
}
