//! Data models for platform entities.

mod comment;
mod coupon;
mod favorite;
mod follow;
mod ids;
mod order;
mod nullable;
mod page;
mod post;
mod shop;
mod thumb;
mod user;

pub use comment::{CommentDto, CommentPageQuery, CommentVo};
pub use coupon::{CouponDto, CouponVo};
pub use favorite::FavoriteDto;
pub use follow::{FollowDto, FollowPageQuery, FollowVo};
pub use ids::{CommentId, CouponId, FollowId, OrderId, PostId, ShopId, ThumbId, UserId};
pub use order::OrderVo;
pub use page::{PageResult, ScrollResult};
pub use post::{PostDto, PostVo, UploadFile};
pub use shop::{LocalTime, ShopDto, ShopPageQuery, ShopVo};
pub use thumb::{ThumbDto, ThumbPageQuery, ThumbVo};
pub use user::{LoginData, LoginForm, RegisterForm, UserProfile, GUEST_NAME};
