use serde::{Deserialize, Serialize};

/// Canonical user-metrics record, post-normalization.
///
/// `fid` is the one guaranteed field; everything else is best-effort from the
/// provider. `score: None` means the provider has not computed a reputation
/// score, which is distinct from a score of zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMetrics {
    pub fid: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pfp_url: Option<String>,
    pub follower_count: u64,
    pub following_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Output of one discovery request. Built fresh per request, never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryResult {
    /// Global top-scored users from the candidate pool, score-descending.
    pub trending: Vec<UserMetrics>,
    /// Pool entries the requester does not already follow. Empty without a
    /// requester or when the following fetch degraded.
    pub recommendations: Vec<UserMetrics>,
    /// Trending entries whose follower count falls in a window around the
    /// requester's own. Empty without a requester or on degraded fetch.
    pub similar_users: Vec<UserMetrics>,
}

/// The uniform response envelope shared by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}
