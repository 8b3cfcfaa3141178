//! Thumb-up commands.

use anyhow::Result;
use clap::Subcommand;
use rhub::models::*;

use crate::config::AppContext;
use crate::output::{print_ack, print_page, OutputFormat, ThumbRow};

#[derive(Subcommand)]
pub enum ThumbAction {
    /// List the current user's thumbs
    List {
        /// Thumb type (0 post, 1 shop, 2 comment)
        #[arg(short = 't', long = "type")]
        kind: Option<i32>,
        /// Page number
        #[arg(short, long, default_value = "1")]
        page: u32,
        /// Page size
        #[arg(short, long, default_value = "10")]
        size: u32,
    },

    /// Thumb up a post, shop or comment
    Add {
        /// Target ID
        target_id: i64,
        /// Thumb type (0 post, 1 shop, 2 comment)
        #[arg(short = 't', long = "type", default_value = "0")]
        kind: i32,
        /// Snippet of the target to keep with the thumb
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Take a thumb back
    Remove {
        /// Target ID
        target_id: i64,
        /// Thumb type (0 post, 1 shop, 2 comment)
        #[arg(short = 't', long = "type", default_value = "0")]
        kind: i32,
    },
}

pub async fn handle(ctx: &AppContext, action: ThumbAction, format: OutputFormat) -> Result<()> {
    let thumbs = ctx.client.thumbs();

    match action {
        ThumbAction::List { kind, page, size } => {
            let query = ThumbPageQuery {
                page: Some(page),
                page_size: Some(size),
                kind,
                ..Default::default()
            };
            let result = thumbs.page(&query).await?.into_data();
            print_page::<_, ThumbRow>(&result, page, size, format);
        }
        ThumbAction::Add {
            target_id,
            kind,
            content,
        } => {
            let thumb = ThumbDto {
                kind: Some(kind),
                target_id: Some(target_id),
                content,
            };
            print_ack(&thumbs.add(&thumb).await?, format);
        }
        ThumbAction::Remove { target_id, kind } => {
            let thumb = ThumbDto {
                kind: Some(kind),
                target_id: Some(target_id),
                content: None,
            };
            print_ack(&thumbs.cancel(&thumb).await?, format);
        }
    }

    Ok(())
}
