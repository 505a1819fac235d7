use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

/// An RFC 3339 timestamp as sent by the storefront (`previewTo`,
/// `preview_to`).
///
/// Anything that does not parse, including a non-string value, decodes to
/// the zero value instead of failing the surrounding document. The zero
/// value is rendered as `null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timestamp(pub Option<DateTime<FixedOffset>>);

impl Timestamp {
    pub fn parse(text: &str) -> Self {
        match DateTime::parse_from_rfc3339(text) {
            Ok(ts) => Timestamp(Some(ts)),
            Err(err) => {
                warn!(%text, %err, "unparsable timestamp, using zero value");
                Timestamp(None)
            }
        }
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_none()
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(ts) => serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(match raw {
            serde_json::Value::String(text) => Timestamp::parse(&text),
            _ => Timestamp(None),
        })
    }
}
