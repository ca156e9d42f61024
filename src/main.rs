mod config;
mod dynamodb;
mod logging;
mod scenario;
mod timestamp;

#[cfg(test)]
mod utils;

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::dynamodb::{DynamoDb, Table, ATTR_ID, ATTR_TIMESTAMP};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging()?;
    dotenv::dotenv().ok();

    let config = Config::from_env();
    info!(
        "Validating table '{}' in region '{}'",
        config.table_name, config.region
    );

    let sdk_config = config.load_sdk_config().await;
    let ddb = DynamoDb::new(&sdk_config);

    ddb.check_auth().await?;
    ddb.check_schema(&Table::new(&config.table_name, ATTR_ID, Some(ATTR_TIMESTAMP)))
        .await?;

    scenario::run(&ddb, &config).await
}
