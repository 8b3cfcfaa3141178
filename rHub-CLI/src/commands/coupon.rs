//! Coupon commands.

use anyhow::Result;
use clap::Subcommand;
use rhub::models::*;
use rust_i18n::t;

use crate::config::AppContext;
use crate::output::{print_ack, print_table, CouponRow, OutputFormat};

#[derive(Subcommand)]
pub enum CouponAction {
    /// List the coupons of a shop
    List {
        /// Shop ID
        shop_id: i64,
    },

    /// Create a coupon
    Add {
        /// Shop ID
        #[arg(short, long)]
        shop: i64,
        /// Coupon name
        name: String,
        /// Description
        #[arg(short, long)]
        description: Option<String>,
        /// Coupon type
        #[arg(short = 't', long = "type")]
        kind: Option<i32>,
        /// Initial stock
        #[arg(long, default_value = "0")]
        stock: i64,
        /// Discount rate, e.g. 0.8
        #[arg(long)]
        discount: Option<f64>,
        /// Spend threshold for a reduction coupon
        #[arg(long)]
        full: Option<f64>,
        /// Amount taken off once the threshold is reached
        #[arg(long)]
        reduce: Option<f64>,
        /// Start of validity (yyyy-MM-dd HH:mm:ss)
        #[arg(long)]
        begin: Option<String>,
        /// End of validity (yyyy-MM-dd HH:mm:ss)
        #[arg(long)]
        end: Option<String>,
    },

    /// Delete a coupon
    Delete {
        /// Coupon ID
        coupon_id: i64,
    },

    /// Show the remaining stock of a coupon
    Stock {
        /// Coupon ID
        coupon_id: i64,
    },

    /// Change the stock of a coupon by a (possibly negative) amount
    SetStock {
        /// Coupon ID
        coupon_id: i64,
        /// Stock change
        #[arg(allow_hyphen_values = true)]
        change: i64,
    },

    /// Grab a flash-sale coupon
    Seckill {
        /// Coupon ID
        coupon_id: i64,
    },
}

pub async fn handle(ctx: &AppContext, action: CouponAction, format: OutputFormat) -> Result<()> {
    let coupons = ctx.client.coupons();

    match action {
        CouponAction::List { shop_id } => {
            let list = coupons.by_shop(shop_id).await?.into_data();
            let rows: Vec<CouponRow> = list.iter().map(CouponRow::from).collect();
            print_table(rows, format);
        }
        CouponAction::Add {
            shop,
            name,
            description,
            kind,
            stock,
            discount,
            full,
            reduce,
            begin,
            end,
        } => {
            let coupon = CouponDto {
                shop_id: Some(ShopId::new(shop)),
                kind,
                name: Some(name),
                description,
                stock: Some(stock),
                discount_rate: discount,
                full_amount: full,
                reduce_amount: reduce,
                begin_time: begin,
                end_time: end,
            };
            print_ack(&coupons.add(&coupon).await?, format);
        }
        CouponAction::Delete { coupon_id } => {
            print_ack(&coupons.delete(coupon_id).await?, format);
        }
        CouponAction::Stock { coupon_id } => {
            let stock = *coupons.stock(coupon_id).await?.data();
            match format {
                OutputFormat::Json => println!("{}", stock),
                _ => println!("{}", t!("stock_label", stock = stock)),
            }
        }
        CouponAction::SetStock { coupon_id, change } => {
            print_ack(&coupons.update_stock(coupon_id, change).await?, format);
        }
        CouponAction::Seckill { coupon_id } => {
            print_ack(&coupons.sec_kill(coupon_id).await?, format);
        }
    }

    Ok(())
}
