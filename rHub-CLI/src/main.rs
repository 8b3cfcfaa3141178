//! rHub CLI.

mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{auth, comment, coupon, favorite, follow, order, post, shop, thumb};
use config::AppContext;
use rhub::Navigation;
use rust_i18n::t;

rust_i18n::i18n!("src/locales", fallback = "en");

/// rHub local life platform CLI
#[derive(Parser)]
#[command(name = "rhub")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "plain")]
    format: output::OutputFormat,

    /// Show verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Language for output (en, zh-CN)
    #[arg(short, long, global = true, default_value = "en")]
    lang: String,

    /// Server base URL, overriding the config file
    #[arg(long, global = true, env = "RHUB_BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage authentication
    Auth {
        #[command(subcommand)]
        action: auth::AuthAction,
    },

    /// Post operations
    #[command(alias = "p")]
    Post {
        #[command(subcommand)]
        action: post::PostAction,
    },

    /// Shop operations
    #[command(alias = "s")]
    Shop {
        #[command(subcommand)]
        action: shop::ShopAction,
    },

    /// Coupon operations
    #[command(alias = "c")]
    Coupon {
        #[command(subcommand)]
        action: coupon::CouponAction,
    },

    /// Comment operations
    Comment {
        #[command(subcommand)]
        action: comment::CommentAction,
    },

    /// Follow operations
    Follow {
        #[command(subcommand)]
        action: follow::FollowAction,
    },

    /// Thumb-up operations
    Thumb {
        #[command(subcommand)]
        action: thumb::ThumbAction,
    },

    /// Favorite operations
    Favorite {
        #[command(subcommand)]
        action: favorite::FavoriteAction,
    },

    /// Order operations
    #[command(alias = "o")]
    Order {
        #[command(subcommand)]
        action: order::OrderAction,
    },

    /// Navigate to an app route and show where the guard lands
    Open {
        /// Route path, e.g. /profile
        path: String,
    },

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    rust_i18n::set_locale(&cli.lang);
    init_tracing(cli.verbose);

    let ctx = AppContext::load(cli.base_url.as_deref())?;
    let format = cli.format;

    match cli.command {
        Commands::Auth { action } => auth::handle(&ctx, action, format).await,
        Commands::Post { action } => post::handle(&ctx, action, format, cli.verbose).await,
        Commands::Shop { action } => shop::handle(&ctx, action, format).await,
        Commands::Coupon { action } => coupon::handle(&ctx, action, format).await,
        Commands::Comment { action } => comment::handle(&ctx, action, format).await,
        Commands::Follow { action } => follow::handle(&ctx, action, format).await,
        Commands::Thumb { action } => thumb::handle(&ctx, action, format).await,
        Commands::Favorite { action } => favorite::handle(&ctx, action, format).await,
        Commands::Order { action } => order::handle(&ctx, action, format).await,
        Commands::Open { path } => open(&ctx, &path),
        Commands::Config => {
            println!(
                "{}",
                t!("config_file", path = config::config_path()?.display())
            );
            println!(
                "{}",
                t!("credentials_file", path = config::credentials_path()?.display())
            );
            println!("{}", t!("base_url", url = &ctx.client.config().base_url));
            println!("{}", t!("authenticated", status = ctx.session.is_logged_in()));
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn open(ctx: &AppContext, path: &str) -> Result<()> {
    match ctx.router.navigate(&ctx.session, path)? {
        Navigation::Allowed(route) => {
            println!("{} {} ({})", "→".green(), route.path.bold(), route.name);
            for (name, value) in &route.params {
                println!("   {} = {}", name.cyan(), value);
            }
        }
        Navigation::Redirected { from, to } => {
            println!(
                "{} {}",
                "↪".yellow(),
                t!("redirected", from = &from.path, to = &to)
            );
        }
    }
    Ok(())
}
