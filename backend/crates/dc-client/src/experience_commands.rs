use crate::ExperienceForm;

use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum ExperienceCommands {
    /// Add an entry at the top of your experience
    Add(ExperienceArgs),
    /// Remove an entry
    Remove {
        /// Entry ID (UUID)
        id: String,
    },
}

#[derive(Args)]
pub struct ExperienceArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long, alias = "company")]
    pub organization: String,
    #[arg(long)]
    pub location: Option<String>,
    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub from: String,
    /// End date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
    #[arg(long)]
    pub current: bool,
    #[arg(long)]
    pub description: Option<String>,
}

impl From<ExperienceArgs> for ExperienceForm {
    fn from(args: ExperienceArgs) -> Self {
        Self {
            title: args.title,
            organization: args.organization,
            location: args.location,
            from: args.from,
            to: args.to,
            is_current: args.current,
            description: args.description,
        }
    }
}
