mod auth_user;
mod error;
