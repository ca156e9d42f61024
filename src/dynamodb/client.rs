use anyhow::{anyhow, ensure, Result};
use aws_sdk_dynamodb::{
    operation::describe_table::DescribeTableOutput,
    types::{
        AttributeDefinition, AttributeValue, BillingMode, KeySchemaElement, KeyType,
        ScalarAttributeType,
    },
    Client,
};
use serde_dynamo::aws_sdk_dynamodb_1::{from_items, to_item};
use tracing::{error, info};

use crate::dynamodb::{RequestRecord, Table, ATTR_ID, ATTR_TIMESTAMP};

/// DynamoDB client wrapper for the request-records table.
///
/// Provides the handful of operations the utility needs, on top of the AWS
/// SDK client:
///
/// - **Connectivity checks**: verify credentials and the table's key schema
///   before touching any data.
/// - **Record operations**: put, query, and delete `RequestRecord`s by
///   their composite key.
/// - **Test bootstrap**: create a scratch table with the expected schema.
///
/// # Key Schema
///
/// Every operation assumes the composite primary key the table was
/// provisioned with: `Id` as the partition key and `Timestamp` as the sort
/// key, both strings. `check_schema` validates that assumption up front so
/// a misprovisioned table fails loudly instead of corrupting data.
///
/// # Error Handling
///
/// Methods return `Result<T, anyhow::Error>`. Failures that indicate the
/// environment is unusable (bad credentials, missing table) are logged at
/// error level before being returned; the caller decides whether to abort.
#[derive(Debug)]
pub struct DynamoDb {
    client: Client,
}

impl DynamoDb {
    /// Creates a new `DynamoDb` instance.
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }

    // --- Connectivity Checks ---

    /// Verifies authentication by attempting to list tables.
    pub async fn check_auth(&self) -> Result<()> {
        self.client.list_tables().limit(1).send().await.map_err(|e| {
            error!("Authentication check failed: {e}");
            anyhow!("could not reach DynamoDB with the ambient credentials")
        })?;
        info!("Authentication successful");
        Ok(())
    }

    /// Verifies that the table exists and carries the expected primary key.
    ///
    /// The utility exists to validate schema assumptions, so a missing table
    /// or a key schema that differs from `table` is an error, not something
    /// to work around.
    pub async fn check_schema(&self, table: &Table<'_>) -> Result<()> {
        let output = self.describe_table(table.name()).await.map_err(|e| {
            error!("Could not describe table '{}': {e}", table.name());
            anyhow!(
                "table '{}' is not reachable; it must be provisioned before running",
                table.name()
            )
        })?;
        let description = output
            .table()
            .ok_or_else(|| anyhow!("empty description for table '{}'", table.name()))?;

        let mut expected = vec![(table.partition_key(), KeyType::Hash)];
        if let Some(sort_key) = table.sort_key() {
            expected.push((sort_key, KeyType::Range));
        }

        let key_schema = description.key_schema();
        ensure!(
            key_schema.len() == expected.len(),
            "table '{}' has {} key attribute(s), expected {}",
            table.name(),
            key_schema.len(),
            expected.len()
        );
        for (attribute_name, key_type) in expected {
            ensure!(
                key_schema.iter().any(|element| {
                    element.attribute_name() == attribute_name && *element.key_type() == key_type
                }),
                "table '{}' is missing the {} key '{attribute_name}'",
                table.name(),
                if key_type == KeyType::Hash {
                    "partition"
                } else {
                    "sort"
                }
            );
        }

        // Key attributes are declared alongside the key schema; both parts
        // of the composite key must be strings.
        for definition in description.attribute_definitions() {
            ensure!(
                *definition.attribute_type() == ScalarAttributeType::S,
                "key attribute '{}' of table '{}' has type {:?}, expected a string",
                definition.attribute_name(),
                table.name(),
                definition.attribute_type()
            );
        }

        info!("Table '{}' matches the expected key schema", table.name());
        Ok(())
    }

    /// Retrieves table description.
    pub async fn describe_table(&self, table_name: &str) -> Result<DescribeTableOutput> {
        self.client
            .describe_table()
            .table_name(table_name)
            .send()
            .await
            .map_err(Into::into)
    }

    // --- Record Operations ---

    /// Upserts a record.
    ///
    /// `PutItem` replaces any existing item with the same composite key, so
    /// writing the same (`Id`, `Timestamp`) twice leaves a single record.
    pub async fn put_record(&self, table_name: &str, record: &RequestRecord) -> Result<()> {
        let item = to_item(record)?;
        self.client
            .put_item()
            .table_name(table_name)
            .set_item(Some(item))
            .send()
            .await?;

        info!(
            "Stored record ({}, {}) in '{table_name}'",
            record.id, record.timestamp
        );
        Ok(())
    }

    /// Queries all records sharing a partition key.
    ///
    /// Records come back in the table's native key order, ascending by
    /// `Timestamp`. Query and decode failures are logged here and returned
    /// as errors; the caller decides whether they are fatal.
    pub async fn query_records(&self, table_name: &str, id: &str) -> Result<Vec<RequestRecord>> {
        let response = self
            .client
            .query()
            .table_name(table_name)
            .key_condition_expression("#pk = :pkval")
            .expression_attribute_names("#pk", ATTR_ID)
            .expression_attribute_values(":pkval", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| {
                error!("Query for id '{id}' failed: {e}");
                anyhow!("unable to query records for id '{id}'")
            })?;

        let records: Vec<RequestRecord> =
            from_items(response.items.unwrap_or_default()).map_err(|e| {
                error!("Could not decode query response for id '{id}': {e}");
                anyhow!("query response for id '{id}' did not match the record shape")
            })?;

        info!("Query returned {} record(s) for id '{id}'", records.len());
        Ok(records)
    }

    /// Deletes the record with the given composite key.
    ///
    /// Deleting a key that is not present is not an error; `DeleteItem`
    /// without a condition expression is idempotent.
    pub async fn delete_record(&self, table_name: &str, id: &str, timestamp: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(table_name)
            .key(ATTR_ID, AttributeValue::S(id.to_string()))
            .key(ATTR_TIMESTAMP, AttributeValue::S(timestamp.to_string()))
            .send()
            .await?;

        info!("Deleted record ({id}, {timestamp}) from '{table_name}'");
        Ok(())
    }

    // --- Test Bootstrap ---

    /// Checks if a table exists.
    #[allow(dead_code)]
    pub async fn table_exists(&self, table_name: &str) -> Result<bool> {
        let tables = self.client.list_tables().send().await?;
        Ok(tables.table_names().contains(&table_name.to_string()))
    }

    /// Creates a table with the expected key schema if it doesn't exist.
    ///
    /// The production flow never creates tables (they are provisioned out of
    /// band); integration tests use this to bootstrap a scratch table.
    #[allow(dead_code)]
    pub async fn create_table_if_not_exists(&self, table: &Table<'_>) -> Result<()> {
        if self.table_exists(table.name()).await? {
            info!("Table '{}' exists", table.name());
            return Ok(());
        }

        let mut attribute_definitions = vec![AttributeDefinition::builder()
            .attribute_name(table.partition_key())
            .attribute_type(ScalarAttributeType::S)
            .build()?];

        let mut key_schema = vec![KeySchemaElement::builder()
            .attribute_name(table.partition_key())
            .key_type(KeyType::Hash)
            .build()?];

        if let Some(sort_key) = table.sort_key() {
            attribute_definitions.push(
                AttributeDefinition::builder()
                    .attribute_name(sort_key)
                    .attribute_type(ScalarAttributeType::S)
                    .build()?,
            );
            key_schema.push(
                KeySchemaElement::builder()
                    .attribute_name(sort_key)
                    .key_type(KeyType::Range)
                    .build()?,
            );
        }

        self.client
            .create_table()
            .table_name(table.name())
            .billing_mode(BillingMode::PayPerRequest)
            .set_attribute_definitions(Some(attribute_definitions))
            .set_key_schema(Some(key_schema))
            .send()
            .await?;

        info!("Table '{}' created", table.name());
        Ok(())
    }
}
