pub mod error;
pub mod types;

pub use error::{NeynarError, Result};
pub use types::RawUser;

use std::time::Duration;

use serde::de::DeserializeOwned;

use types::{BulkUsersResponse, FollowingResponse, UserByUsernameResponse};

const BASE_URL: &str = "https://api.neynar.com";

/// Bound on every outbound call so an unresponsive provider cannot hang a
/// request indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Largest id batch the provider accepts on the bulk endpoint.
pub const MAX_BATCH: usize = 50;

pub struct NeynarClient {
    client: reqwest::Client,
    api_key: String,
}

impl NeynarClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("reqwest client construction"),
            api_key,
        }
    }

    /// Fetch user records for a batch of fids in a single bulk call.
    ///
    /// Ids are deduplicated with order preserved before joining; callers keep
    /// batches within [`MAX_BATCH`].
    pub async fn users_by_fids(&self, fids: &[u64]) -> Result<Vec<RawUser>> {
        let unique = dedup_fids(fids);
        let fid_list = unique
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let url = format!("{BASE_URL}/v2/farcaster/user/bulk?fids={fid_list}");
        let resp: BulkUsersResponse = self.get_json(&url).await?;
        let users = resp.users.unwrap_or_default();
        tracing::debug!(requested = unique.len(), returned = users.len(), "Fetched user batch");
        Ok(users)
    }

    /// Fetch the fids a user follows, up to `limit`.
    pub async fn following_fids(&self, fid: u64, limit: u32) -> Result<Vec<u64>> {
        let url = format!("{BASE_URL}/v2/farcaster/following?fid={fid}&limit={limit}");
        let resp: FollowingResponse = self.get_json(&url).await?;
        let fids: Vec<u64> = resp
            .users
            .unwrap_or_default()
            .into_iter()
            .map(|u| u.fid)
            .collect();
        tracing::debug!(fid, count = fids.len(), "Fetched following list");
        Ok(fids)
    }

    /// Resolve a username to a fid. Returns `Ok(None)` when the provider
    /// reports no matching account.
    pub async fn fid_by_username(&self, username: &str) -> Result<Option<u64>> {
        let url = format!("{BASE_URL}/v1/farcaster/user-by-username");
        let resp = self
            .client
            .get(&url)
            .query(&[("username", username)])
            .header("accept", "application/json")
            .header("api_key", &self.api_key)
            .send()
            .await?;

        let status = resp.status();
        if status.as_u16() == 404 {
            return Ok(None);
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(NeynarError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let resp: UserByUsernameResponse = resp.json().await?;
        Ok(resp.result.and_then(|r| r.user).map(|u| u.fid))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let resp = self
            .client
            .get(url)
            .header("accept", "application/json")
            .header("api_key", &self.api_key)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(NeynarError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(resp.json().await?)
    }
}

/// Drop duplicate fids, preserving first-seen order. The deduplicated list
/// is what gets joined into the bulk query and what the call logs count.
fn dedup_fids(fids: &[u64]) -> Vec<u64> {
    let mut seen = std::collections::HashSet::new();
    fids.iter()
        .copied()
        .filter(|fid| seen.insert(*fid))
        .collect()
}
