//! Order commands.

use anyhow::Result;
use clap::Subcommand;

use crate::config::AppContext;
use crate::output::{print_ack, print_table, OrderRow, OutputFormat};

#[derive(Subcommand)]
pub enum OrderAction {
    /// List the current user's orders
    List,

    /// Pay an order
    Pay {
        /// Order ID
        order_id: i64,
    },
}

pub async fn handle(ctx: &AppContext, action: OrderAction, format: OutputFormat) -> Result<()> {
    match action {
        OrderAction::List => {
            let orders = ctx.client.orders().owned().await?.into_data();
            let rows: Vec<OrderRow> = orders.iter().map(OrderRow::from).collect();
            print_table(rows, format);
        }
        OrderAction::Pay { order_id } => {
            print_ack(&ctx.client.orders().pay(order_id).await?, format);
        }
    }

    Ok(())
}
