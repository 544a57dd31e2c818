//! dc - DevConnect CLI
//!
//! Drives the client-side mirror against a dc-server and prints the resulting
//! state as JSON.
//!
//! # Examples
//!
//! ```bash
//! dc register --name "Ada Lovelace" --email ada@example.com --password secret123
//! dc profile upsert --status Developer --skills "rust, sql"
//! dc experience add --title Engineer --organization Acme --from 2020-01-15
//! dc profile me --pretty
//! ```

use dc_client::{
    Cli, Client, ClientResult, Commands, Notification, ProfileState, SessionState, Store,
    TokenFile, actions,
    education_commands::EducationCommands,
    experience_commands::ExperienceCommands,
    profile_commands::ProfileCommands,
};
use dc_config::Config;

use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

/// What the CLI prints after every command
#[derive(Serialize)]
struct Snapshot<'a> {
    session: &'a SessionState,
    profile: &'a ProfileState,
    notifications: Vec<Notification>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let token_file = match Config::token_path() {
        Ok(path) => TokenFile::new(path),
        Err(e) => {
            eprintln!("Error locating token file: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let initial_token = match token_file.load() {
        Ok(token) => token,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let server_url = cli.server.unwrap_or(config.client.server_url);
    let mut client = Client::new(&server_url, initial_token.as_deref());
    let mut store = Store::new(initial_token).with_token_file(token_file);

    if !cli.command.resolves_session() {
        actions::resume_session(&mut store, &mut client).await;
    }

    let result = run(cli.command, &mut store, &mut client).await;

    let notifications = store.notifications.drain();
    let snapshot = Snapshot {
        session: store.session(),
        profile: store.profile(),
        notifications,
    };
    let output = if cli.pretty {
        serde_json::to_string_pretty(&snapshot)
    } else {
        serde_json::to_string(&snapshot)
    };

    match output {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing state: {}", e);
            return ExitCode::FAILURE;
        }
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands, store: &mut Store, client: &mut Client) -> ClientResult<()> {
    match command {
        Commands::Register {
            name,
            email,
            password,
        } => actions::register(store, client, &name, &email, &password).await,
        Commands::Login { email, password } => {
            actions::login(store, client, &email, &password).await
        }
        Commands::Logout => {
            actions::logout(store, client);
            Ok(())
        }
        Commands::Whoami => actions::load_user(store, client).await,

        Commands::Profile { action } => match action {
            ProfileCommands::Me => actions::get_current_profile(store, client).await,
            ProfileCommands::List => actions::get_profiles(store, client).await,
            ProfileCommands::Get { owner_id } => {
                actions::get_profile_by_owner(store, client, &owner_id).await
            }
            ProfileCommands::Upsert(args) => {
                // An existing profile turns the upsert into an edit
                let edit = client.get_current_profile().await.is_ok();
                actions::create_profile(store, client, &args.into(), edit).await
            }
            ProfileCommands::Delete => actions::delete_account(store, client).await,
        },

        Commands::Experience { action } => match action {
            ExperienceCommands::Add(args) => actions::add_experience(store, client, &args.into()).await,
            ExperienceCommands::Remove { id } => {
                actions::delete_experience(store, client, &id).await
            }
        },

        Commands::Education { action } => match action {
            EducationCommands::Add(args) => actions::add_education(store, client, &args.into()).await,
            EducationCommands::Remove { id } => actions::delete_education(store, client, &id).await,
        },

        Commands::Github { handle } => actions::get_github_repos(store, client, &handle).await,
    }
}
