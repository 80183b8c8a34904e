//! User lookup and creation

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use lightbnb_db::models::{Email, NewUser};
use lightbnb_db::Database;

use super::print_json;

#[derive(Parser, Debug)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommands,
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Find a user by email address
    Email {
        /// Email address (exact match)
        email: String,
    },
    /// Find a user by id
    Id {
        /// User id
        id: i32,
    },
    /// Add a new user
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Password hash to store
        #[arg(long)]
        password: String,
    },
}

impl UserArgs {
    pub fn validate(&self) -> Result<()> {
        match &self.command {
            UserCommands::Email { email } => {
                Email::new(email)?;
            }
            UserCommands::Id { .. } => {}
            UserCommands::Add {
                name,
                email,
                password,
            } => {
                NewUser::new(name, email, password)?;
            }
        }
        Ok(())
    }
}

pub async fn run_user(args: UserArgs, db: &Database) -> Result<()> {
    match args.command {
        UserCommands::Email { email } => {
            let email = Email::new(&email)?;
            let user = db
                .users()
                .get_with_email(email.as_str())
                .await
                .context("Failed to look up user")?;
            match user {
                Some(user) => print_json(&user),
                None => bail!("No user with email '{}'", email.as_str()),
            }
        }
        UserCommands::Id { id } => {
            let user = db
                .users()
                .get_with_id(id)
                .await
                .context("Failed to look up user")?;
            match user {
                Some(user) => print_json(&user),
                None => bail!("No user with id {}", id),
            }
        }
        UserCommands::Add {
            name,
            email,
            password,
        } => {
            let new_user = NewUser::new(&name, &email, &password)?;
            let user = db
                .users()
                .add(new_user)
                .await
                .context("Failed to add user")?;
            print_json(&user)
        }
    }
}
