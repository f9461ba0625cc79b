//! Single-user lookups and the leaderboard. Thin compared to discovery, but
//! they share the provider seam, the normalizer and the ranking helper.

use castmetrics_common::{ApiError, UserMetrics};

use crate::candidates;
use crate::discovery::rank_by_score;
use crate::normalize::normalize;
use crate::provider::{upstream_error, SocialGraphProvider};

/// Cap on the leaderboard.
const LEADERBOARD_LIMIT: usize = 20;

/// Fetch a single user's metrics. An empty provider result set is the
/// not-found signal for identifier lookups.
pub async fn user_by_fid<P: SocialGraphProvider>(
    provider: &P,
    fid: u64,
) -> Result<UserMetrics, ApiError> {
    let raw = provider
        .users_by_fids(&[fid])
        .await
        .map_err(upstream_error)?;

    let Some(raw) = raw.into_iter().next() else {
        return Err(ApiError::NotFound);
    };

    let user = normalize(raw);
    if user.fid == 0 {
        return Err(ApiError::Validation("record has no fid".to_string()));
    }
    Ok(user)
}

/// Two-step handle lookup: resolve the username to a fid, then fetch metrics.
pub async fn user_by_username<P: SocialGraphProvider>(
    provider: &P,
    username: &str,
) -> Result<UserMetrics, ApiError> {
    let Some(fid) = provider
        .fid_by_username(username)
        .await
        .map_err(upstream_error)?
    else {
        return Err(ApiError::NotFound);
    };

    user_by_fid(provider, fid).await
}

/// Top-scored users from the fixed pool, score-descending.
pub async fn leaderboard<P: SocialGraphProvider>(
    provider: &P,
) -> Result<Vec<UserMetrics>, ApiError> {
    let raw = provider
        .users_by_fids(candidates::leaderboard_slice())
        .await
        .map_err(upstream_error)?;

    if raw.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(rank_by_score(raw, LEADERBOARD_LIMIT))
}
