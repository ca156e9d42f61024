use serde::{Deserialize, Serialize};

use crate::timestamp;

/// Attribute name of the partition key.
pub const ATTR_ID: &str = "Id";
/// Attribute name of the sort key.
pub const ATTR_TIMESTAMP: &str = "Timestamp";

/// One entry in the request-records table.
///
/// Identity is the composite primary key (`Id`, `Timestamp`); writing a
/// record whose key already exists overwrites it in place. `CompanyId` and
/// `JSON` are plain non-key attributes. The `JSON` payload embeds the
/// record's own timestamp, so a row read back later can be traced to the
/// write that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestRecord {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "CompanyId")]
    pub company_id: String,
    #[serde(rename = "JSON")]
    pub json: String,
}

impl RequestRecord {
    /// Builds a record for the given identifiers. When `timestamp` is `None`
    /// the current time is generated at nanosecond precision.
    pub fn new(
        id: impl Into<String>,
        company_id: impl Into<String>,
        timestamp: Option<String>,
    ) -> Self {
        let timestamp = timestamp.unwrap_or_else(timestamp::generate);
        let json = format!(r#"{{ "key": "value-{timestamp}" }}"#);
        Self {
            id: id.into(),
            timestamp,
            company_id: company_id.into(),
            json,
        }
    }
}
