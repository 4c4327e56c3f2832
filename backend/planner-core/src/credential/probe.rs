use crate::error::ProbeError;

use common::RedactedApiKey;

use async_trait::async_trait;

/// Read-only call used to confirm the provider accepts a key.
///
/// Implementations must not retry: one call, one verdict.
#[async_trait]
pub trait CredentialProbe: Send + Sync {
    async fn probe(&self, candidate: &RedactedApiKey) -> Result<(), ProbeError>;
}

#[async_trait]
impl<T: CredentialProbe + ?Sized> CredentialProbe for std::sync::Arc<T> {
    async fn probe(&self, candidate: &RedactedApiKey) -> Result<(), ProbeError> {
        (**self).probe(candidate).await
    }
}
