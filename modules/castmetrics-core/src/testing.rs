// Test mocks for the provider seam.
//
// MockProvider (SocialGraphProvider) — HashMap-based, builder-style, with
// failure injection per endpoint and per exact bulk id-list. Records every
// bulk request so tests can assert on derived candidate lists.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use neynar_client::error::{NeynarError, Result};
use neynar_client::RawUser;

use crate::provider::SocialGraphProvider;

/// A minimal scored record: fid, follower count and a generic-key score.
pub fn scored_user(fid: u64, follower_count: u64, score: f64) -> RawUser {
    RawUser {
        fid,
        follower_count: Some(follower_count),
        score: Some(score),
        ..Default::default()
    }
}

pub struct MockProvider {
    users: HashMap<u64, RawUser>,
    following: HashMap<u64, Vec<u64>>,
    usernames: HashMap<String, u64>,
    fail_all_bulk: bool,
    fail_following: bool,
    fail_bulk_for: Vec<Vec<u64>>,
    bulk_calls: Mutex<Vec<Vec<u64>>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
            following: HashMap::new(),
            usernames: HashMap::new(),
            fail_all_bulk: false,
            fail_following: false,
            fail_bulk_for: Vec::new(),
            bulk_calls: Mutex::new(Vec::new()),
        }
    }

    /// Register a record, keyed by its own fid.
    pub fn with_user(mut self, raw: RawUser) -> Self {
        self.users.insert(raw.fid, raw);
        self
    }

    /// Register a record under an arbitrary lookup fid, for contract-breach
    /// fixtures (e.g. a record whose fid is 0).
    pub fn with_user_keyed(mut self, key: u64, raw: RawUser) -> Self {
        self.users.insert(key, raw);
        self
    }

    pub fn with_following(mut self, fid: u64, follows: Vec<u64>) -> Self {
        self.following.insert(fid, follows);
        self
    }

    pub fn with_username(mut self, username: &str, fid: u64) -> Self {
        self.usernames.insert(username.to_string(), fid);
        self
    }

    /// Every bulk fetch fails.
    pub fn fail_bulk(mut self) -> Self {
        self.fail_all_bulk = true;
        self
    }

    /// Every following fetch fails.
    pub fn fail_following(mut self) -> Self {
        self.fail_following = true;
        self
    }

    /// Only the bulk fetch whose id list exactly matches `fids` fails.
    pub fn fail_bulk_for(mut self, fids: Vec<u64>) -> Self {
        self.fail_bulk_for.push(fids);
        self
    }

    /// Every bulk id-list requested so far, in call order.
    pub fn bulk_calls(&self) -> Vec<Vec<u64>> {
        self.bulk_calls.lock().unwrap().clone()
    }

    fn upstream_500() -> NeynarError {
        NeynarError::Api {
            status: 500,
            message: "mock upstream failure".to_string(),
        }
    }
}

#[async_trait]
impl SocialGraphProvider for MockProvider {
    async fn users_by_fids(&self, fids: &[u64]) -> Result<Vec<RawUser>> {
        self.bulk_calls.lock().unwrap().push(fids.to_vec());
        if self.fail_all_bulk || self.fail_bulk_for.iter().any(|ids| ids == fids) {
            return Err(Self::upstream_500());
        }
        Ok(fids
            .iter()
            .filter_map(|fid| self.users.get(fid).cloned())
            .collect())
    }

    async fn following_fids(&self, fid: u64, limit: u32) -> Result<Vec<u64>> {
        if self.fail_following {
            return Err(Self::upstream_500());
        }
        Ok(self
            .following
            .get(&fid)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .take(limit as usize)
            .collect())
    }

    async fn fid_by_username(&self, username: &str) -> Result<Option<u64>> {
        Ok(self.usernames.get(username).copied())
    }
}
