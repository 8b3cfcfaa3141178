//! Follow commands.

use anyhow::Result;
use clap::Subcommand;
use rhub::models::*;

use crate::config::AppContext;
use crate::output::{print_ack, print_page, FollowRow, OutputFormat};

#[derive(Subcommand)]
pub enum FollowAction {
    /// List what the current user follows
    List {
        /// Follow type (0 user, 1 shop)
        #[arg(short = 't', long = "type")]
        kind: Option<i32>,
        /// Page number
        #[arg(short, long, default_value = "1")]
        page: u32,
        /// Page size
        #[arg(short, long, default_value = "10")]
        size: u32,
    },

    /// Follow a user or shop
    Add {
        /// Target ID
        target_id: i64,
        /// Follow type (0 user, 1 shop)
        #[arg(short = 't', long = "type", default_value = "0")]
        kind: i32,
        /// Display name of the target
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Stop following a user or shop
    Remove {
        /// Target ID
        target_id: i64,
        /// Follow type (0 user, 1 shop)
        #[arg(short = 't', long = "type", default_value = "0")]
        kind: i32,
    },
}

pub async fn handle(ctx: &AppContext, action: FollowAction, format: OutputFormat) -> Result<()> {
    match action {
        FollowAction::List { kind, page, size } => {
            let query = FollowPageQuery {
                page: Some(page),
                page_size: Some(size),
                kind,
                ..Default::default()
            };
            let result = ctx.client.follows().page(&query).await?.into_data();
            print_page::<_, FollowRow>(&result, page, size, format);
        }
        FollowAction::Add {
            target_id,
            kind,
            name,
        } => {
            let follow = dto(ctx, kind, target_id, name);
            print_ack(&ctx.client.follows().add(&follow).await?, format);
        }
        FollowAction::Remove { target_id, kind } => {
            let follow = dto(ctx, kind, target_id, None);
            print_ack(&ctx.client.follows().cancel(&follow).await?, format);
        }
    }

    Ok(())
}

fn dto(ctx: &AppContext, kind: i32, target_id: i64, target_name: Option<String>) -> FollowDto {
    FollowDto {
        fans_id: ctx.session.profile().id,
        kind: Some(kind),
        target_id: Some(target_id),
        target_name,
    }
}
