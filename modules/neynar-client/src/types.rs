use serde::Deserialize;

/// A raw user record from the Neynar API.
///
/// Field names vary across provider API generations, so every known variant
/// is modeled explicitly as an optional field; collapsing them into the
/// canonical shape is the normalizer's job, not the wire layer's.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawUser {
    pub fid: u64,
    pub username: Option<String>,
    pub display_name: Option<String>,
    #[serde(rename = "displayName")]
    pub display_name_camel: Option<String>,
    pub pfp_url: Option<String>,
    pub pfp: Option<Pfp>,
    pub follower_count: Option<u64>,
    pub following_count: Option<u64>,
    pub experimental: Option<Experimental>,
    pub neynar_user_score: Option<f64>,
    pub score: Option<f64>,
}

/// Nested avatar object used by older API generations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pfp {
    pub url: Option<String>,
}

/// Experimental block carrying the nested score variant.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Experimental {
    pub neynar_user_score: Option<f64>,
}

/// Wrapper for `/v2/farcaster/user/bulk` responses.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkUsersResponse {
    pub users: Option<Vec<RawUser>>,
}

/// A bare fid reference, as returned by the following endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRef {
    pub fid: u64,
}

/// Wrapper for `/v2/farcaster/following` responses.
#[derive(Debug, Clone, Deserialize)]
pub struct FollowingResponse {
    pub users: Option<Vec<UserRef>>,
}

/// Wrapper for `/v1/farcaster/user-by-username` responses.
#[derive(Debug, Clone, Deserialize)]
pub struct UserByUsernameResponse {
    pub result: Option<UsernameResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UsernameResult {
    pub user: Option<UserRef>,
}
