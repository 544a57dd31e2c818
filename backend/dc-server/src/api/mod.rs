pub mod error;
pub mod extractors;
pub mod github;
pub mod identities;
pub mod profiles;
pub mod session;
