//! Subcommand handlers.

pub mod auth;
pub mod comment;
pub mod coupon;
pub mod favorite;
pub mod follow;
pub mod order;
pub mod post;
pub mod shop;
pub mod thumb;
