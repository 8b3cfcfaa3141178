//! Favorite commands.

use anyhow::Result;
use clap::Subcommand;
use rhub::models::FavoriteDto;

use crate::config::AppContext;
use crate::output::{print_ack, OutputFormat};

#[derive(Subcommand)]
pub enum FavoriteAction {
    /// Favorite a post
    Add {
        /// Post ID
        post_id: i64,
    },

    /// Remove a post from favorites
    Remove {
        /// Post ID
        post_id: i64,
    },
}

pub async fn handle(ctx: &AppContext, action: FavoriteAction, format: OutputFormat) -> Result<()> {
    let response = match action {
        FavoriteAction::Add { post_id } => {
            ctx.client.favorites().add(&FavoriteDto::post(post_id)).await?
        }
        FavoriteAction::Remove { post_id } => {
            ctx.client.favorites().cancel(&FavoriteDto::post(post_id)).await?
        }
    };

    print_ack(&response, format);
    Ok(())
}
