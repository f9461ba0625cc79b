// Trait abstraction over the social-graph provider.
//
// The discovery and stats paths depend on this seam instead of the concrete
// NeynarClient, which keeps them testable with an in-memory MockProvider:
// no network, no API key, `cargo test` in seconds.

use async_trait::async_trait;

use castmetrics_common::ApiError;
use neynar_client::error::{NeynarError, Result};
use neynar_client::{NeynarClient, RawUser};

#[async_trait]
pub trait SocialGraphProvider: Send + Sync {
    /// Fetch raw records for a batch of fids (callers keep batches ≤ 50).
    async fn users_by_fids(&self, fids: &[u64]) -> Result<Vec<RawUser>>;

    /// Fids the given user follows, up to `limit`.
    async fn following_fids(&self, fid: u64, limit: u32) -> Result<Vec<u64>>;

    /// Resolve a handle to a fid. `Ok(None)` when no account matches.
    async fn fid_by_username(&self, username: &str) -> Result<Option<u64>>;
}

#[async_trait]
impl SocialGraphProvider for NeynarClient {
    async fn users_by_fids(&self, fids: &[u64]) -> Result<Vec<RawUser>> {
        NeynarClient::users_by_fids(self, fids).await
    }

    async fn following_fids(&self, fid: u64, limit: u32) -> Result<Vec<u64>> {
        NeynarClient::following_fids(self, fid, limit).await
    }

    async fn fid_by_username(&self, username: &str) -> Result<Option<u64>> {
        NeynarClient::fid_by_username(self, username).await
    }
}

/// Collapse a provider failure into the request-level taxonomy. Not-found is
/// never decided here: it falls out of empty result sets at the call sites.
pub(crate) fn upstream_error(err: NeynarError) -> ApiError {
    ApiError::Upstream(err.to_string())
}
