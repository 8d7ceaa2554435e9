//! Subcommands and their execution against the wired services.

use clap::Subcommand;

use user_directory::{App, CreateUserDto, DomainError, DomainResult, UpdateUserDto, User};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Sign in and remember the session.
    Login { login: String, password: String },

    /// End the current session.
    Logout,

    /// Show who is signed in.
    Whoami,

    /// List all users (requires a session).
    List,

    /// Show one user (requires a session).
    Show { id: String },

    /// Register a new user.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        login: String,
        #[arg(long)]
        password: String,
        /// Repeat the password.
        #[arg(long)]
        confirm: String,
    },

    /// Change a user's fields; omitted fields stay as they are (requires a session).
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        login: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        confirm: Option<String>,
    },

    /// Delete a user (requires a session).
    Delete { id: String },
}

/// Run `command` and return the text to print on success.
pub async fn execute(app: &App, command: Command) -> DomainResult<String> {
    match command {
        Command::Login { login, password } => {
            let user = app.auth.login(&login, &password).await?;
            Ok(format!("Signed in as {} ({})", user.name, user.login))
        }
        Command::Logout => {
            app.auth.logout().await?;
            Ok("Signed out".to_string())
        }
        Command::Whoami => Ok(match app.auth.current_user().await? {
            Some(user) => describe(&user),
            None => "Not signed in".to_string(),
        }),
        Command::List => {
            app.auth.require_session().await?;
            let users = app.directory.list_users().await?;
            if users.is_empty() {
                return Ok("No users registered".to_string());
            }
            Ok(users.iter().map(describe).collect::<Vec<_>>().join("\n"))
        }
        Command::Show { id } => {
            app.auth.require_session().await?;
            let user = app
                .directory
                .get_user(&id)
                .await?
                .ok_or_else(|| not_found(&id))?;
            Ok(describe(&user))
        }
        Command::Add {
            name,
            login,
            password,
            confirm,
        } => {
            let user = app
                .directory
                .add_user(CreateUserDto {
                    name,
                    login,
                    password,
                    password_confirmation: confirm,
                })
                .await?;
            Ok(format!("User registered: {}", describe(&user)))
        }
        Command::Edit {
            id,
            name,
            login,
            password,
            confirm,
        } => {
            app.auth.require_session().await?;
            let dto = UpdateUserDto {
                name,
                login,
                password,
                password_confirmation: confirm,
            };
            let user = app
                .directory
                .update_user(&id, dto)
                .await?
                .ok_or_else(|| not_found(&id))?;
            Ok(format!("User updated: {}", describe(&user)))
        }
        Command::Delete { id } => {
            app.auth.require_session().await?;
            if !app.directory.delete_user(&id).await? {
                return Err(not_found(&id));
            }
            Ok(format!("User {} deleted", id))
        }
    }
}

/// Message shown to the user for a failed command.
pub fn failure_message(err: &DomainError) -> String {
    if err.is_storage_failure() {
        format!("Operation failed: {}", err)
    } else {
        err.to_string()
    }
}

fn describe(user: &User) -> String {
    format!("{}\t{}\t{}", user.id, user.login, user.name)
}

fn not_found(id: &str) -> DomainError {
    DomainError::NotFound {
        entity: "User",
        field: "id",
        value: id.to_string(),
    }
}
