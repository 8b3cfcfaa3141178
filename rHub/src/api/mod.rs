//! API modules.
//!
//! One method per REST operation. Methods only marshal parameters; errors
//! and successful responses come back exactly as the transport produced
//! them.

mod comment;
mod coupon;
mod favorite;
mod follow;
mod order;
mod post;
mod shop;
mod thumb;
mod user;

pub use comment::CommentApi;
pub use coupon::CouponApi;
pub use favorite::FavoriteApi;
pub use follow::FollowApi;
pub use order::OrderApi;
pub use post::PostApi;
pub use shop::ShopApi;
pub use thumb::ThumbApi;
pub use user::UserApi;
