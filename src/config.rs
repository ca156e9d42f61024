use aws_config::{BehaviorVersion, Region, SdkConfig};

/// Default table name; override with `REQUEST_RECORDS_TABLE`.
const DEFAULT_TABLE_NAME: &str = "RequestRecords";
/// Default region; override with `AWS_REGION`.
const DEFAULT_REGION: &str = "us-east-1";
/// Default partition key value for the demonstration records; override with
/// `RECORD_ID`.
const DEFAULT_RECORD_ID: &str = "1234567";
/// Default `CompanyId` attribute value; override with `COMPANY_ID`.
const DEFAULT_COMPANY_ID: &str = "0987654321";

/// Runtime configuration, resolved from the environment.
///
/// Table name, region, and the identifiers written by the demonstration all
/// live here, so a run can be pointed at another table or environment
/// without touching code.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the request-records table.
    pub table_name: String,
    /// AWS region the table lives in.
    pub region: String,
    /// Custom endpoint URL (e.g. DynamoDB Local); `None` for real AWS.
    pub endpoint_url: Option<String>,
    /// Partition key value used for the demonstration records.
    pub record_id: String,
    /// `CompanyId` attribute stored with every record.
    pub company_id: String,
}

impl Config {
    /// Resolves the configuration from the environment, falling back to the
    /// defaults above. Call after `dotenv` so `.env` entries are visible.
    pub fn from_env() -> Self {
        Self {
            table_name: env_or("REQUEST_RECORDS_TABLE", DEFAULT_TABLE_NAME),
            region: env_or("AWS_REGION", DEFAULT_REGION),
            endpoint_url: std::env::var("AWS_ENDPOINT_URL").ok(),
            record_id: env_or("RECORD_ID", DEFAULT_RECORD_ID),
            company_id: env_or("COMPANY_ID", DEFAULT_COMPANY_ID),
        }
    }

    /// Loads the SDK configuration for this `Config`: ambient credentials,
    /// the configured region, and the custom endpoint when one is set.
    pub async fn load_sdk_config(&self) -> SdkConfig {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(self.region.clone()));

        if let Some(endpoint) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        loader.load().await
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
