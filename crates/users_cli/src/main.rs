//! Command-line entry point for the users core.
//!
//! # Responsibility
//! - Build the database settings once from flags and environment.
//! - Map one subcommand onto each user operation and print the envelope.
//!
//! # Invariants
//! - Business logic never reads the environment; only argument parsing does.
//! - Exit status is non-zero only for invalid settings or unclassified
//!   failures. Not-found, data and connectivity outcomes are envelopes.

use clap::{Args, Parser, Subcommand};
use log::error;
use std::process::ExitCode;
use users_core::{
    core_version, default_log_level, init_logging, init_stderr_logging, DbConfig, SqliteGateway,
    SqliteUserRepository, UserResponse, UserService, UserWrite,
};

#[derive(Debug, Parser)]
#[command(name = "users", version, about = "Create, read, update and delete user records")]
struct Cli {
    #[command(flatten)]
    database: DatabaseArgs,

    /// One of trace|debug|info|warn|error.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files. Logs go to stderr when unset.
    #[arg(long, global = true, env = "USERS_LOG_DIR")]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct DatabaseArgs {
    #[arg(long = "db-name", env = "DATABASE", default_value = "users", global = true)]
    name: String,

    #[arg(long = "db-user", env = "DATABASE_USER", default_value = "", global = true)]
    user: String,

    #[arg(
        long = "db-password",
        env = "DATABASE_PWD",
        default_value = "",
        hide_env_values = true,
        global = true
    )]
    password: String,

    /// Directory holding the database file.
    #[arg(long = "db-host", env = "DATABASE_HOST", default_value = ".", global = true)]
    host: String,
}

impl DatabaseArgs {
    fn to_config(&self) -> DbConfig {
        DbConfig::new(&self.name, &self.user, &self.password, &self.host)
    }
}

#[derive(Debug, Args)]
struct UserFields {
    #[arg(long)]
    fullname: Option<String>,

    #[arg(long)]
    age: Option<i64>,

    #[arg(long)]
    email: Option<String>,

    #[arg(long)]
    location: Option<String>,
}

impl From<UserFields> for UserWrite {
    fn from(fields: UserFields) -> Self {
        Self {
            fullname: fields.fullname,
            age: fields.age,
            email: fields.email,
            location: fields.location,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a user; the id is generated.
    Create(UserFields),
    /// Delete a user by id.
    Delete { id: String },
    /// Replace every attribute of a user.
    Update {
        id: String,
        #[command(flatten)]
        fields: UserFields,
    },
    /// Show one user.
    Get { id: String },
    /// Show all users.
    List,
    /// Print the core version.
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    let logging = match cli.log_dir.as_deref() {
        Some(dir) => init_logging(level, dir),
        None => init_stderr_logging(level),
    };
    if let Err(err) = logging {
        eprintln!("logging init failed: {err}");
        return ExitCode::FAILURE;
    }

    if matches!(cli.command, Command::Version) {
        println!("users_core version={}", core_version());
        return ExitCode::SUCCESS;
    }

    let gateway = match SqliteGateway::new(cli.database.to_config()) {
        Ok(gateway) => gateway,
        Err(err) => {
            error!("event=cli_config module=cli status=error error={err}");
            eprintln!("invalid database settings: {err}");
            return ExitCode::FAILURE;
        }
    };
    let service = UserService::new(SqliteUserRepository::new(&gateway));

    match dispatch(&service, cli.command) {
        Ok(envelope) => {
            println!("{envelope}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

/// Runs one operation and renders its envelope as pretty JSON.
fn dispatch(
    service: &UserService<SqliteUserRepository<&SqliteGateway>>,
    command: Command,
) -> Result<String, String> {
    let outcome: UserResponse = match command {
        Command::Create(fields) => service.add_user(&fields.into()),
        Command::Delete { id } => service.delete_user(&id),
        Command::Update { id, fields } => service.update_user(&id, &fields.into()),
        Command::Get { id } => service.get_user_by_id(&id),
        Command::List => service.get_all_users(),
        Command::Version => return Ok(core_version().to_string()),
    };

    let response = outcome.map_err(|err| {
        error!("event=cli_dispatch module=cli status=error error={err}");
        format!("operation failed: {err}")
    })?;
    serde_json::to_string_pretty(&response)
        .map_err(|err| format!("failed to render response: {err}"))
}
