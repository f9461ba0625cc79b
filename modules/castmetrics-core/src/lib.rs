pub mod candidates;
pub mod discovery;
pub mod normalize;
pub mod provider;
pub mod stats;

#[cfg(test)]
pub(crate) mod testing;

pub use discovery::discover;
pub use normalize::normalize;
pub use provider::SocialGraphProvider;
