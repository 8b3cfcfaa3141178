//! Post commands.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;
use rhub::models::*;
use rust_i18n::t;

use crate::config::AppContext;
use crate::output::{print_ack, print_table, OutputFormat, PostRow};

#[derive(Subcommand)]
pub enum PostAction {
    /// Browse the post feed
    Feed {
        /// Cursor from the previous page (0 for the first page)
        #[arg(short, long, default_value = "0")]
        cursor: i64,
        /// Offset from the previous page
        #[arg(short, long, default_value = "0")]
        offset: i64,
    },

    /// View a post
    Get {
        /// Post ID
        post_id: i64,
    },

    /// Publish a post
    Add {
        /// Title
        title: String,
        /// Content
        content: String,
        /// Image URLs returned by `post upload`
        #[arg(short, long)]
        url: Vec<String>,
        /// Post type
        #[arg(short = 't', long = "type")]
        kind: Option<i32>,
    },

    /// Upload an image for a post
    Upload {
        /// Path of the file to upload
        file: PathBuf,
        /// MIME type of the file
        #[arg(short, long)]
        mime: Option<String>,
    },
}

pub async fn handle(
    ctx: &AppContext,
    action: PostAction,
    format: OutputFormat,
    verbose: bool,
) -> Result<()> {
    match action {
        PostAction::Feed { cursor, offset } => feed(ctx, cursor, offset, format, verbose).await,
        PostAction::Get { post_id } => {
            let post = ctx.client.posts().get(post_id).await?.into_data();
            print_table(vec![PostRow::from(&post)], format);
            Ok(())
        }
        PostAction::Add {
            title,
            content,
            url,
            kind,
        } => {
            let profile = ctx.session.profile();
            let post = PostDto {
                publisher_id: profile.id.map(|id| id.get()),
                publisher_name: profile.username.clone(),
                kind,
                title: Some(title),
                content: Some(content),
                urls: (!url.is_empty()).then(|| url.join(",")),
                ..Default::default()
            };
            let response = ctx.client.posts().add(&post).await?;
            print_ack(&response, format);
            Ok(())
        }
        PostAction::Upload { file, mime } => {
            let bytes = fs::read(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let file_name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .context("Upload path has no file name")?;

            let mut upload = UploadFile::new(file_name, bytes);
            if let Some(mime) = mime {
                upload = upload.mime(mime);
            }

            let response = ctx.client.posts().upload(upload).await?;
            print_ack(&response, format);
            Ok(())
        }
    }
}

async fn feed(
    ctx: &AppContext,
    cursor: i64,
    offset: i64,
    format: OutputFormat,
    verbose: bool,
) -> Result<()> {
    let page = ctx.client.posts().feed(cursor, offset).await?.into_data();

    let rows: Vec<PostRow> = page.records.iter().map(PostRow::from).collect();
    print_table(rows, format);

    if matches!(format, OutputFormat::Plain) {
        if page.is_exhausted() {
            println!("{}", t!("feed_end").dimmed());
        } else {
            println!(
                "{}",
                t!("feed_next", cursor = page.cursor, offset = page.offset).dimmed()
            );
        }
        if verbose {
            println!("{}", t!("session_user", name = ctx.session.display_name()).dimmed());
        }
    }

    Ok(())
}
