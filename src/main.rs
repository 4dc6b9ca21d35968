//! KuHub command line
//!
//! Drives the access gate, session context and declaration form against a
//! file-backed session store.

use anyhow::Context;
use clap::{Parser, Subcommand};
use kuhub::{
    AppError,
    access_control::RouteTable,
    auth::create_credential_provider,
    config::{AppConfig, LogFormat, load_config},
    declaration::{
        DeclarationForm, DeclarationId, DeclarationInput, DeclarationSession, DeclarationSummary,
    },
    error::{SessionError, ValidationErrors},
    profile::{PasswordChangeForm, change_avatar, change_password},
    session::{AuthContext, FileSessionStore},
};
use serde::Serialize;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// KuHub - role-gated navigation and sworn declarations
#[derive(Parser, Debug)]
#[command(name = "kuhub")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "KUHUB_CONFIG")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "KUHUB_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format (pretty, json)
    #[arg(long, env = "KUHUB_LOG_FORMAT")]
    log_format: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and store the session
    Login {
        username: String,

        /// Password (read from stdin when omitted)
        #[arg(long, env = "KUHUB_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// End the current session
    Logout,

    /// Show the current session
    Whoami,

    /// Resolve a path against the route table for the current session
    Access { path: String },

    /// List the pages visible to the current session
    Menu,

    /// Profile settings
    #[command(subcommand)]
    Profile(ProfileCommand),

    /// Joint SAG and customs declaration
    #[command(subcommand)]
    Declaration(DeclarationCommand),
}

#[derive(Subcommand, Debug)]
enum ProfileCommand {
    /// Change the avatar of the current user
    Avatar { url: String },

    /// Change the password of the current user
    Password {
        #[arg(long)]
        current: String,
        #[arg(long)]
        new: String,
        #[arg(long)]
        confirm: String,
    },
}

#[derive(Subcommand, Debug)]
enum DeclarationCommand {
    /// Print a fresh declaration identifier
    Id,

    /// Validate a declaration and print its review summary
    Submit {
        /// TOML file with the form values
        form: PathBuf,

        /// Write the simulated report into this directory
        #[arg(long)]
        export: Option<PathBuf>,
    },
}

fn init_logging(args: &Args, config: &AppConfig) {
    let level = args.log_level.as_deref().unwrap_or(&config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let format = match args.log_format.as_deref() {
        Some("json") => LogFormat::Json,
        Some("pretty") => LogFormat::Pretty,
        _ => config.logging.format,
    };

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_field_errors(errors: &ValidationErrors) {
    for (field, message) in errors.iter() {
        eprintln!("{field}: {message}");
    }
}

fn read_password() -> anyhow::Result<String> {
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn read_declaration(path: &Path) -> anyhow::Result<DeclarationForm> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let input: DeclarationInput =
        toml::from_str(&raw).with_context(|| format!("Invalid declaration {}", path.display()))?;
    Ok(DeclarationForm::from_input(&input))
}

fn print_summary(summary: &DeclarationSummary) {
    for (label, value) in summary.rows() {
        println!("{label}: {value}");
    }
}

/// Map user-correctable failures to a non-zero exit; anything else bubbles up
fn report(result: kuhub::Result<()>) -> anyhow::Result<ExitCode> {
    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(AppError::Auth(e)) => {
            eprintln!("{e}");
            Ok(ExitCode::FAILURE)
        }
        Err(AppError::Validation(errors)) => {
            print_field_errors(&errors);
            Ok(ExitCode::FAILURE)
        }
        Err(AppError::Session(SessionError::NotLoggedIn)) => {
            eprintln!("Not logged in");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env before clap reads environment-backed arguments
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let config = load_config(args.config.as_deref())?;
    init_logging(&args, &config);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting kuhub");

    let routes = RouteTable::new(&config.effective_routes())
        .inspect_err(|e| error!(error = %e, "Failed to build route table"))?;

    let store = FileSessionStore::new(config.session.storage_path(), &config.session.storage_key);
    let mut ctx = AuthContext::new(create_credential_provider(&config.auth), Box::new(store))
        .with_login_delay(Duration::from_millis(config.auth.login_delay_ms));

    ctx.restore()
        .inspect_err(|e| error!(error = %e, "Failed to restore session"))?;

    match args.command {
        Command::Login { username, password } => {
            let password = match password {
                Some(p) => p,
                None => read_password()?,
            };
            let result = ctx.login(&username, &password).await.map(|user| {
                println!("Logged in as {} ({})", user.name, user.role);
            });
            report(result)
        }

        Command::Logout => {
            ctx.logout()?;
            println!("Logged out");
            Ok(ExitCode::SUCCESS)
        }

        Command::Whoami => match ctx.current() {
            Some(user) => {
                print_json(user)?;
                Ok(ExitCode::SUCCESS)
            }
            None => {
                eprintln!("Not logged in");
                Ok(ExitCode::FAILURE)
            }
        },

        Command::Access { path } => {
            print_json(&routes.navigate(ctx.current(), &path))?;
            Ok(ExitCode::SUCCESS)
        }

        Command::Menu => {
            for entry in routes.menu(ctx.current()) {
                println!("{}\t{}", entry.path, entry.label);
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::Profile(ProfileCommand::Avatar { url }) => {
            let result = change_avatar(&mut ctx, &url).map(|user| {
                println!("Avatar updated: {}", user.avatar);
            });
            report(result)
        }

        Command::Profile(ProfileCommand::Password {
            current,
            new,
            confirm,
        }) => {
            if !ctx.is_authenticated() {
                eprintln!("Not logged in");
                return Ok(ExitCode::FAILURE);
            }

            let mut form = PasswordChangeForm {
                current_password: current,
                new_password: new,
                confirm_password: confirm,
            };
            let delay = Duration::from_millis(config.auth.password_change_delay_ms);
            let result = change_password(&mut form, delay)
                .await
                .map(|()| println!("Password updated"));
            report(result)
        }

        Command::Declaration(DeclarationCommand::Id) => {
            println!("{}", DeclarationSession::new().id());
            Ok(ExitCode::SUCCESS)
        }

        Command::Declaration(DeclarationCommand::Submit { form, export }) => {
            let mut session =
                DeclarationSession::with_form(DeclarationId::generate(), read_declaration(&form)?);

            match session.submit() {
                Ok(summary) => print_summary(summary),
                Err(errors) => {
                    print_field_errors(&errors);
                    return Ok(ExitCode::FAILURE);
                }
            }

            if let (Some(dir), Some(doc)) = (export, session.export()) {
                let path = doc.write_to(&dir).map_err(AppError::Export)?;
                println!("Report written to {}", path.display());
            }

            Ok(ExitCode::SUCCESS)
        }
    }
}
