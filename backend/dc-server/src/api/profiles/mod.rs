pub mod delete_response;
pub mod education_request;
pub mod experience_request;
pub mod profile_list_response;
pub mod profile_response;
pub mod profiles;
pub mod upsert_profile_request;
