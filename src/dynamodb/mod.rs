//! # DynamoDB Module
//!
//! High-level interface to the request-records table in Amazon DynamoDB.
//!
//! ## Components
//!
//! - `DynamoDb`: A client wrapper for the operations the utility performs.
//! - `RequestRecord`: A typed view of one entry in the table.
//! - `Table`: A table name plus the attributes of its primary key.
//!
//! ## Usage
//!
//! Credentials and region come from the ambient environment:
//!
//! - `AWS_ACCESS_KEY_ID`: Your AWS access key ID.
//! - `AWS_SECRET_ACCESS_KEY`: Your AWS secret access key.
//! - `AWS_REGION`: The AWS region where the table is located.
//!
//! Optionally, you can also set:
//! - `AWS_SESSION_TOKEN`: If you're using temporary credentials.
//! - `AWS_ENDPOINT_URL`: For a custom endpoint (e.g. DynamoDB Local).
//!
//! ## Example
//!
//! ```rust
//! let sdk_config = aws_config::load_from_env().await;
//! let ddb = DynamoDb::new(&sdk_config);
//!
//! // Fail fast if the environment is unusable
//! ddb.check_auth().await?;
//! ddb.check_schema(&Table::new("RequestRecords", ATTR_ID, Some(ATTR_TIMESTAMP))).await?;
//!
//! // Write, read back, delete
//! let record = RequestRecord::new("1234567", "0987654321", None);
//! ddb.put_record("RequestRecords", &record).await?;
//! let records = ddb.query_records("RequestRecords", &record.id).await?;
//! ddb.delete_record("RequestRecords", &record.id, &record.timestamp).await?;
//! ```

mod client;
mod record;
mod table;

pub use client::DynamoDb;
pub use record::{RequestRecord, ATTR_ID, ATTR_TIMESTAMP};
pub use table::Table;
