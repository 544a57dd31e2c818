pub mod github;
pub mod repo_list_response;
