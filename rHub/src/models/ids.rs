//! Type-safe ID wrappers.

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Create a new ID.
            pub fn new(id: i64) -> Self {
                $name(id)
            }

            /// Check if this ID is unset.
            pub fn is_empty(&self) -> bool {
                self.0 == 0
            }

            /// Get the inner value.
            pub fn get(&self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(n: i64) -> Self {
                $name(n)
            }
        }

        impl From<i32> for $name {
            fn from(n: i32) -> Self {
                $name(i64::from(n))
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map($name)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserialize_id(deserializer).map($name)
            }
        }
    };
}

/// Accept IDs as JSON numbers or as numeric strings.
///
/// Servers that emit 64-bit IDs often quote them to survive JavaScript
/// number precision.
fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    struct IdVisitor;

    impl<'de> de::Visitor<'de> for IdVisitor {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an integer or a numeric string")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            i64::try_from(v).map_err(|_| E::custom(format!("id {} out of range", v)))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
            v.trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid id '{}'", v)))
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

define_id!(UserId, "A user identifier.");
define_id!(PostId, "A post identifier.");
define_id!(ShopId, "A shop identifier.");
define_id!(CouponId, "A coupon identifier.");
define_id!(CommentId, "A comment identifier.");
define_id!(OrderId, "An order identifier.");
define_id!(ThumbId, "A thumb (like) record identifier.");
define_id!(FollowId, "A follow record identifier.");
