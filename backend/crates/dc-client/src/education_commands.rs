use crate::EducationForm;

use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum EducationCommands {
    /// Add an entry at the top of your education
    Add(EducationArgs),
    /// Remove an entry
    Remove {
        /// Entry ID (UUID)
        id: String,
    },
}

#[derive(Args)]
pub struct EducationArgs {
    #[arg(long)]
    pub school: String,
    #[arg(long)]
    pub degree: String,
    #[arg(long)]
    pub field_of_study: String,
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

impl From<EducationArgs> for EducationForm {
    fn from(args: EducationArgs) -> Self {
        Self {
            school: args.school,
            degree: args.degree,
            field_of_study: args.field_of_study,
            from: args.from,
            to: args.to,
            is_current: args.current,
            description: args.description,
        }
    }
}
