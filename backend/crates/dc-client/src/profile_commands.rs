use crate::ProfileForm;

use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show your profile
    Me,
    /// List all profiles
    List,
    /// Show the profile of a user
    Get {
        /// Owner user ID (UUID)
        owner_id: String,
    },
    /// Create your profile, or update only the given fields
    Upsert(ProfileArgs),
    /// Delete your profile and account
    Delete,
}

#[derive(Args)]
pub struct ProfileArgs {
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub website: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub bio: Option<String>,
    /// Required when creating
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub github_username: Option<String>,
    /// Comma-separated, required when creating
    #[arg(long)]
    pub skills: Option<String>,
    #[arg(long)]
    pub youtube: Option<String>,
    #[arg(long)]
    pub twitter: Option<String>,
    #[arg(long)]
    pub facebook: Option<String>,
    #[arg(long)]
    pub linkedin: Option<String>,
    #[arg(long)]
    pub instagram: Option<String>,
}

impl From<ProfileArgs> for ProfileForm {
    fn from(args: ProfileArgs) -> Self {
        Self {
            company: args.company,
            website: args.website,
            location: args.location,
            bio: args.bio,
            status: args.status,
            github_username: args.github_username,
            skills: args.skills,
            youtube: args.youtube,
            twitter: args.twitter,
            facebook: args.facebook,
            linkedin: args.linkedin,
            instagram: args.instagram,
        }
    }
}
