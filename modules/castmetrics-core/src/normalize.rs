use castmetrics_common::UserMetrics;
use neynar_client::RawUser;

type ScoreAccessor = fn(&RawUser) -> Option<f64>;

/// Score field variants across provider API generations, tried in order:
/// nested experimental block, then flat provider-prefixed key, then the
/// generic key. First present wins.
const SCORE_ACCESSORS: &[ScoreAccessor] = &[
    |raw| raw.experimental.as_ref().and_then(|e| e.neynar_user_score),
    |raw| raw.neynar_user_score,
    |raw| raw.score,
];

/// Map a raw provider record into the canonical metrics shape.
///
/// Infallible by construction: every variant field is already optional on
/// [`RawUser`], so heterogeneous records resolve to absence instead of
/// erroring. Counts default to 0 when omitted; `score` stays `None` when no
/// variant is present, which is distinct from a provider-computed zero.
pub fn normalize(raw: RawUser) -> UserMetrics {
    let score = SCORE_ACCESSORS.iter().find_map(|accessor| accessor(&raw));
    let display_name = first_non_empty([&raw.display_name, &raw.display_name_camel]);
    let pfp_url = first_non_empty([
        &raw.pfp_url,
        &raw.pfp.as_ref().and_then(|p| p.url.clone()),
    ]);

    UserMetrics {
        fid: raw.fid,
        username: raw.username,
        display_name,
        pfp_url,
        follower_count: raw.follower_count.unwrap_or(0),
        following_count: raw.following_count.unwrap_or(0),
        score,
    }
}

fn first_non_empty(candidates: [&Option<String>; 2]) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .cloned()
}
