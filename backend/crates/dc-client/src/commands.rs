use crate::{
    education_commands::EducationCommands, experience_commands::ExperienceCommands,
    profile_commands::ProfileCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account and sign in
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Sign in
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Forget the stored session token
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Profile operations
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },

    /// Experience entries of your profile
    Experience {
        #[command(subcommand)]
        action: ExperienceCommands,
    },

    /// Education entries of your profile
    Education {
        #[command(subcommand)]
        action: EducationCommands,
    },

    /// List a GitHub user's public repositories
    Github {
        /// GitHub username
        handle: String,
    },
}

impl Commands {
    /// Commands that settle the session themselves
    pub fn resolves_session(&self) -> bool {
        matches!(
            self,
            Commands::Register { .. } | Commands::Login { .. } | Commands::Logout | Commands::Whoami
        )
    }
}
