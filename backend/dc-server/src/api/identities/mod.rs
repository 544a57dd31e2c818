pub mod identities;
pub mod register_request;
