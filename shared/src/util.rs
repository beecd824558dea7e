/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Serialize Unix-millisecond fields as RFC 3339 UTC strings.
///
/// ```ignore
/// #[serde(with = "shared::util::rfc3339_millis")]
/// pub created_at: i64,
/// ```
pub mod rfc3339_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn format(millis: i64) -> Option<String> {
        DateTime::<Utc>::from_timestamp_millis(millis)
            .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    pub fn serialize<S: Serializer>(millis: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        match format(*millis) {
            Some(s) => serializer.serialize_str(&s),
            None => serializer.serialize_i64(*millis),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.timestamp_millis())
            .map_err(de::Error::custom)
    }
}
