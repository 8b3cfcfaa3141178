//! Response bodies as handed back to callers.

use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The server's uniform `{ code, msg, data }` wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Application status code.
    #[serde(default)]
    pub code: Option<i64>,
    /// Application message.
    #[serde(default)]
    pub msg: Option<String>,
    /// Payload.
    pub data: T,
}

/// A decoded body: either wrapped in an [`Envelope`] or the bare payload.
///
/// A JSON object with a `data` key is an envelope and must decode as one;
/// anything else is the bare payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload<T> {
    /// `{ code, msg, data }`.
    Envelope(Envelope<T>),
    /// The payload itself.
    Bare(T),
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Payload<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let enveloped = value
            .as_object()
            .is_some_and(|object| object.contains_key("data"));

        if enveloped {
            serde_json::from_value(value)
                .map(Payload::Envelope)
                .map_err(D::Error::custom)
        } else {
            serde_json::from_value(value)
                .map(Payload::Bare)
                .map_err(D::Error::custom)
        }
    }
}

/// A successful (2xx) response, decoded but otherwise untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    /// HTTP status.
    pub status: u16,
    /// Decoded body.
    pub body: Payload<T>,
}

impl<T> ApiResponse<T> {
    /// The payload, wherever the server put it.
    pub fn data(&self) -> &T {
        match &self.body {
            Payload::Envelope(envelope) => &envelope.data,
            Payload::Bare(data) => data,
        }
    }

    /// Take the payload.
    pub fn into_data(self) -> T {
        match self.body {
            Payload::Envelope(envelope) => envelope.data,
            Payload::Bare(data) => data,
        }
    }

    /// Application code, when the body was enveloped.
    pub fn code(&self) -> Option<i64> {
        match &self.body {
            Payload::Envelope(envelope) => envelope.code,
            Payload::Bare(_) => None,
        }
    }

    /// Application message, when the body was enveloped.
    pub fn msg(&self) -> Option<&str> {
        match &self.body {
            Payload::Envelope(envelope) => envelope.msg.as_deref(),
            Payload::Bare(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PostVo, ScrollResult};

    #[test]
    fn test_bare_body() {
        let raw = r#"{"cursor":17,"offset":10,"records":[1,2]}"#;
        let body: Payload<ScrollResult<i32>> = serde_json::from_str(raw).unwrap();
        let response = ApiResponse { status: 200, body };

        assert_eq!(response.data().cursor, 17);
        assert_eq!(response.code(), None);
        assert_eq!(response.into_data().records, vec![1, 2]);
    }

    #[test]
    fn test_enveloped_body() {
        let raw = r#"{"code":1,"msg":"ok","data":{"cursor":3,"offset":1,"records":[]}}"#;
        let body: Payload<ScrollResult<i32>> = serde_json::from_str(raw).unwrap();
        let response = ApiResponse { status: 200, body };

        assert_eq!(response.code(), Some(1));
        assert_eq!(response.msg(), Some("ok"));
        assert_eq!(response.data().cursor, 3);
    }

    #[test]
    fn test_untyped_body_without_data() {
        let body: Payload<Value> = serde_json::from_str(r#"{"ok":true}"#).unwrap();
        assert!(matches!(body, Payload::Bare(_)));

        let body: Payload<Value> = serde_json::from_str(r#"{"code":1,"data":null}"#).unwrap();
        assert!(matches!(body, Payload::Envelope(ref e) if e.data.is_null()));
    }

    #[test]
    fn test_bad_envelope_is_not_read_as_bare() {
        let raw = r#"{"code":1,"msg":"ok","data":{"cursor":17,"offset":10,"records":[{"id":[]}]}}"#;
        let result: serde_json::Result<Payload<ScrollResult<PostVo>>> = serde_json::from_str(raw);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_body_as_null() {
        let body: Payload<Value> = serde_json::from_value(Value::Null).unwrap();
        assert_eq!(body, Payload::Bare(Value::Null));
    }
}
