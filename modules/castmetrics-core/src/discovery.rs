//! The discovery orchestrator: one trending fetch that the whole request
//! depends on, plus two best-effort personalization branches layered on top.

use std::collections::HashSet;

use tracing::warn;

use castmetrics_common::{ApiError, DiscoveryResult, UserMetrics};
use neynar_client::error::Result as ProviderResult;
use neynar_client::RawUser;

use crate::candidates;
use crate::normalize::normalize;
use crate::provider::{upstream_error, SocialGraphProvider};

/// Cap on the global trending list.
const TRENDING_LIMIT: usize = 10;
/// Cap on personalized recommendations.
const RECOMMENDATION_LIMIT: usize = 8;
/// Cap on similar-metric users.
const SIMILAR_LIMIT: usize = 8;
/// How many unfollowed pool candidates to fetch before trimming to the
/// recommendation cap.
const CANDIDATE_FETCH_LIMIT: usize = 12;
/// How far into the requester's following list to look.
const FOLLOWING_LIMIT: u32 = 50;

/// Run one discovery request.
///
/// The trending fetch is the only fatal dependency. Both personalization
/// branches return their own `Result` and are mapped to empty lists on
/// failure, so a flaky secondary call (rate-limited following fetch, missing
/// profile) never takes down the whole feed.
pub async fn discover<P: SocialGraphProvider>(
    provider: &P,
    requester: Option<u64>,
) -> Result<DiscoveryResult, ApiError> {
    let trending = trending(provider).await.map_err(upstream_error)?;

    let Some(fid) = requester else {
        return Ok(DiscoveryResult {
            trending,
            ..Default::default()
        });
    };

    // The two branches are independent of each other; only the similar-users
    // branch reads the already-computed trending list.
    let (recs, similar) = tokio::join!(
        recommendations(provider, fid),
        similar_users(provider, fid, &trending),
    );

    let recommendations = match recs {
        Ok(users) => users,
        Err(err) => {
            warn!(fid, error = %err, "Recommendations degraded to empty");
            Vec::new()
        }
    };
    let similar_users = match similar {
        Ok(users) => users,
        Err(err) => {
            warn!(fid, error = %err, "Similar users degraded to empty");
            Vec::new()
        }
    };

    Ok(DiscoveryResult {
        trending,
        recommendations,
        similar_users,
    })
}

async fn trending<P: SocialGraphProvider>(provider: &P) -> ProviderResult<Vec<UserMetrics>> {
    let raw = provider.users_by_fids(candidates::trending_slice()).await?;
    Ok(rank_by_score(raw, TRENDING_LIMIT))
}

/// Normalize, drop records without a computed score, sort score-descending
/// and truncate. `sort_by` is stable, so tied scores keep provider order.
pub(crate) fn rank_by_score(raw: Vec<RawUser>, limit: usize) -> Vec<UserMetrics> {
    let mut users: Vec<UserMetrics> = raw
        .into_iter()
        .map(normalize)
        .filter(|u| u.score.is_some())
        .collect();
    users.sort_by(|a, b| {
        b.score
            .unwrap_or(0.0)
            .total_cmp(&a.score.unwrap_or(0.0))
    });
    users.truncate(limit);
    users
}

/// Pool entries the requester does not already follow, excluding the
/// requester themselves. No score filtering on this path.
async fn recommendations<P: SocialGraphProvider>(
    provider: &P,
    fid: u64,
) -> ProviderResult<Vec<UserMetrics>> {
    let followed: HashSet<u64> = provider
        .following_fids(fid, FOLLOWING_LIMIT)
        .await?
        .into_iter()
        .collect();

    let candidate_fids: Vec<u64> = candidates::full_pool()
        .iter()
        .copied()
        .filter(|c| *c != fid && !followed.contains(c))
        .take(CANDIDATE_FETCH_LIMIT)
        .collect();

    if candidate_fids.is_empty() {
        return Ok(Vec::new());
    }

    let raw = provider.users_by_fids(&candidate_fids).await?;
    Ok(raw
        .into_iter()
        .map(normalize)
        .take(RECOMMENDATION_LIMIT)
        .collect())
}

/// Trending entries whose follower count falls within a multiplicative
/// window around the requester's own: `[fc * 0.5, fc * 2]` inclusive. At
/// zero followers the window collapses to `[0, 0]`; that matches observed
/// provider-side behavior and is intentionally left as-is.
async fn similar_users<P: SocialGraphProvider>(
    provider: &P,
    fid: u64,
    trending: &[UserMetrics],
) -> ProviderResult<Vec<UserMetrics>> {
    let raw = provider.users_by_fids(&[fid]).await?;
    let Some(requester) = raw.into_iter().next() else {
        return Ok(Vec::new());
    };

    let follower_count = normalize(requester).follower_count as f64;
    let min = (follower_count * 0.5).max(0.0);
    let max = follower_count * 2.0;

    Ok(trending
        .iter()
        .filter(|u| u.fid != fid)
        .filter(|u| {
            let count = u.follower_count as f64;
            count >= min && count <= max
        })
        .take(SIMILAR_LIMIT)
        .cloned()
        .collect())
}
