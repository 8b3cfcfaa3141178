//! Tolerant decoding for server-shaped structs.

use serde::{Deserialize, Deserializer};

/// Read `null` as the type's default, like a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Row {
        #[serde(deserialize_with = "null_as_default")]
        name: String,
        #[serde(deserialize_with = "null_as_default")]
        count: i64,
        #[serde(deserialize_with = "null_as_default")]
        flag: bool,
    }

    #[test]
    fn test_null_reads_as_default() {
        let row: Row = serde_json::from_str(r#"{"name":null,"count":null,"flag":null}"#).unwrap();
        assert_eq!(row.name, "");
        assert_eq!(row.count, 0);
        assert!(!row.flag);
    }

    #[test]
    fn test_values_and_missing_keys() {
        let row: Row = serde_json::from_str(r#"{"name":"tea","flag":true}"#).unwrap();
        assert_eq!(row.name, "tea");
        assert_eq!(row.count, 0);
        assert!(row.flag);

        assert!(serde_json::from_str::<Row>(r#"{"count":"many"}"#).is_err());
    }
}
