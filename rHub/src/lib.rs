//! Rust client library for the rHub local life platform.
//!
//! The pieces fit together like this:
//!
//! - [`Session`] holds the token and profile, loaded from a
//!   [`storage::KeyValueStorage`] and written back on login and logout.
//! - [`HubClient`] sends every request with the session's token attached,
//!   turns failed responses into [`Error`]s, reports them through a
//!   [`Notifier`] and logs the session out on HTTP 401.
//! - [`Router`] maps paths to views and keeps signed-out users away from
//!   protected ones.
//!
//! ```no_run
//! use std::sync::Arc;
//! use rhub::{HubClient, Router, Session};
//! use rhub::storage::FileStorage;
//!
//! # async fn run() -> rhub::Result<()> {
//! let router = Arc::new(Router::standard()?);
//! let storage = Arc::new(FileStorage::open("credentials.json")?);
//! let session = Arc::new(Session::initialize(storage).with_redirect(router.clone()));
//!
//! let client = HubClient::builder()
//!     .base_url("http://127.0.0.1:8090")
//!     .session(session.clone())
//!     .build()?;
//!
//! session.login(&client, "alice", "secret").await?;
//! let feed = client.posts().feed(0, 10).await?;
//! println!("{} posts", feed.data().records.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod models;
pub mod router;
pub mod session;
pub mod storage;

// Re-export main types
pub use client::{
    ApiResponse, HttpConfig, HubClient, HubClientBuilder, LogNotifier, Notifier, SessionHook,
    CREDENTIAL_HEADER,
};
pub use error::{Error, Result};
pub use router::{Navigation, Redirect, ResolvedRoute, Route, Router, LOGIN_PATH};
pub use session::{Session, SessionState};

// Re-export commonly used models
pub use models::{
    CommentDto, CommentId, CommentPageQuery, CommentVo, CouponDto, CouponId, CouponVo,
    FavoriteDto, FollowDto, FollowId, FollowPageQuery, FollowVo, LocalTime, OrderId, OrderVo,
    PageResult, PostDto, PostId, PostVo, ScrollResult, ShopDto, ShopId, ShopPageQuery, ShopVo,
    ThumbDto, ThumbId, ThumbPageQuery, ThumbVo, UploadFile, UserId, UserProfile,
};
