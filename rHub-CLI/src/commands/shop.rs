//! Shop commands.

use anyhow::{Context, Result};
use chrono::NaiveTime;
use clap::Subcommand;
use rhub::models::*;

use crate::config::AppContext;
use crate::output::{print_ack, print_page, print_table, OutputFormat, ShopRow};

#[derive(Subcommand)]
pub enum ShopAction {
    /// List shops
    List {
        /// Page number
        #[arg(short, long, default_value = "1")]
        page: u32,
        /// Page size
        #[arg(short, long, default_value = "10")]
        size: u32,
        /// Filter by name
        #[arg(short, long)]
        name: Option<String>,
    },

    /// View a shop
    Get {
        /// Shop ID
        shop_id: i64,
    },

    /// Register a shop
    Add {
        /// Shop name
        name: String,
        /// Address
        #[arg(short, long)]
        address: Option<String>,
        /// Opening time (HH:MM)
        #[arg(long, default_value = "09:00")]
        open: String,
        /// Closing time (HH:MM)
        #[arg(long, default_value = "21:00")]
        close: String,
    },

    /// Delete a shop
    Delete {
        /// Shop ID
        shop_id: i64,
    },

    /// List shops owned by the current user
    Owned,
}

pub async fn handle(ctx: &AppContext, action: ShopAction, format: OutputFormat) -> Result<()> {
    match action {
        ShopAction::List { page, size, name } => {
            let query = ShopPageQuery {
                page: Some(page),
                page_size: Some(size),
                name,
                ..Default::default()
            };
            let result = ctx.client.shops().page(&query).await?.into_data();
            print_page::<_, ShopRow>(&result, page, size, format);
            Ok(())
        }
        ShopAction::Get { shop_id } => {
            let shop = ctx.client.shops().get(shop_id).await?.into_data();
            print_table(vec![ShopRow::from(&shop)], format);
            Ok(())
        }
        ShopAction::Add {
            name,
            address,
            open,
            close,
        } => {
            let shop = ShopDto {
                name: Some(name),
                address,
                begin_time: parse_time(&open)?,
                end_time: parse_time(&close)?,
            };
            let response = ctx.client.shops().register(&shop).await?;
            print_ack(&response, format);
            Ok(())
        }
        ShopAction::Delete { shop_id } => {
            let response = ctx.client.shops().delete(shop_id).await?;
            print_ack(&response, format);
            Ok(())
        }
        ShopAction::Owned => {
            let shops = ctx.client.shops().owned().await?.into_data();
            let rows: Vec<ShopRow> = shops.iter().map(ShopRow::from).collect();
            print_table(rows, format);
            Ok(())
        }
    }
}

fn parse_time(raw: &str) -> Result<LocalTime> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map(LocalTime::from)
        .with_context(|| format!("Invalid time '{}', expected HH:MM", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("09:30").unwrap(), LocalTime::hms(9, 30, 0));
        assert_eq!(parse_time("21:05:10").unwrap(), LocalTime::hms(21, 5, 10));
        assert!(parse_time("25:00").is_err());
        assert!(parse_time("noon").is_err());
    }
}
