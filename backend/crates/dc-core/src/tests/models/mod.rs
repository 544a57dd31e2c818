mod profile;
mod social_links;
mod subcollection;
mod user;
