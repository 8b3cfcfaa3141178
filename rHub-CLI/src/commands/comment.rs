//! Comment commands.

use anyhow::Result;
use clap::Subcommand;
use rhub::models::*;

use crate::config::AppContext;
use crate::output::{print_ack, print_page, CommentRow, OutputFormat};

#[derive(Subcommand)]
pub enum CommentAction {
    /// List comments on a post or shop
    List {
        /// Target ID
        target_id: i64,
        /// Comment type (0 post, 1 shop, 2 reply)
        #[arg(short = 't', long = "type", default_value = "0")]
        kind: i32,
        /// Page number
        #[arg(short, long, default_value = "1")]
        page: u32,
        /// Page size
        #[arg(short, long, default_value = "10")]
        size: u32,
        /// Oldest first
        #[arg(long)]
        asc: bool,
    },

    /// Add a comment
    Add {
        /// Target ID
        target_id: i64,
        /// Comment content
        content: String,
        /// Comment type (0 post, 1 shop, 2 reply)
        #[arg(short = 't', long = "type", default_value = "0")]
        kind: i32,
    },

    /// Delete a comment
    Delete {
        /// Comment ID
        comment_id: i64,
    },
}

pub async fn handle(ctx: &AppContext, action: CommentAction, format: OutputFormat) -> Result<()> {
    match action {
        CommentAction::List {
            target_id,
            kind,
            page,
            size,
            asc,
        } => {
            let query = CommentPageQuery {
                page: Some(page),
                page_size: Some(size),
                is_asc: Some(asc),
                kind: Some(kind),
                target_id: Some(target_id),
                ..Default::default()
            };
            let result = ctx.client.comments().page(&query).await?.into_data();
            print_page::<_, CommentRow>(&result, page, size, format);
        }
        CommentAction::Add {
            target_id,
            content,
            kind,
        } => {
            let comment = CommentDto {
                username: ctx.session.profile().username,
                kind: Some(kind),
                target_id: Some(target_id),
                content: Some(content),
            };
            print_ack(&ctx.client.comments().add(&comment).await?, format);
        }
        CommentAction::Delete { comment_id } => {
            print_ack(&ctx.client.comments().delete(comment_id).await?, format);
        }
    }

    Ok(())
}
