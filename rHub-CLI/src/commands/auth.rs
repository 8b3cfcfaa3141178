//! Authentication commands.

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use rhub::models::RegisterForm;
use rust_i18n::t;

use crate::config::AppContext;
use crate::output::{print_ack, OutputFormat};

#[derive(Subcommand)]
pub enum AuthAction {
    /// Login with username and password
    Login {
        /// Username
        #[arg(short, long)]
        username: String,
        /// Password
        #[arg(short, long, env = "RHUB_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Logout
    Logout,
    /// Show current auth status
    Status,
    /// Create an account
    Register {
        /// Username
        #[arg(short, long)]
        username: String,
        /// Password
        #[arg(short, long, env = "RHUB_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

pub async fn handle(ctx: &AppContext, action: AuthAction, format: OutputFormat) -> Result<()> {
    match action {
        AuthAction::Login { username, password } => {
            ctx.session.login(&ctx.client, &username, &password).await?;
            println!(
                "{} {}",
                "✓".green().bold(),
                t!("logged_in_as", name = ctx.session.display_name())
            );
            Ok(())
        }
        AuthAction::Logout => {
            ctx.session.logout();
            println!("{}", t!("logged_out"));
            Ok(())
        }
        AuthAction::Status => {
            let state = ctx.session.snapshot();
            if state.is_logged_in() {
                println!("{}", t!("logged_in_as", name = state.profile.display_name()));
                if let Some(id) = state.profile.id {
                    println!("{}", t!("user_id", uid = id));
                }
                if let Some(fans) = state.profile.fans_number {
                    println!("{}", t!("fans", count = fans));
                }
            } else {
                println!("{}", t!("not_logged_in"));
            }
            Ok(())
        }
        AuthAction::Register { username, password } => {
            let form = RegisterForm { username, password };
            let response = ctx.client.users().register(&form).await?;
            print_ack(&response, format);
            Ok(())
        }
    }
}
