/// DynamoDB table configuration.
///
/// Identifies a table and the attributes making up its primary key. The
/// request-records table keys every row by a composite primary key:
///
/// - **Partition Key** (`Id`): groups the records of one request source.
/// - **Sort Key** (`Timestamp`): orders the records within a partition;
///   DynamoDB returns them ascending by this attribute.
///
/// Both key attributes are strings. Tables are provisioned out of band;
/// this struct only describes the shape the code expects to find.
///
/// # Example
///
/// ```rust
/// let table = Table::new("RequestRecords", "Id", Some("Timestamp"));
/// assert_eq!(table.partition_key(), "Id");
/// ```
#[derive(Debug)]
pub struct Table<'a> {
    name: &'a str,
    partition_key: &'a str,
    sort_key: Option<&'a str>,
}

impl<'a> Table<'a> {
    /// Creates a new `Table` instance.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the DynamoDB table.
    /// * `partition_key` - The name of the partition key attribute.
    /// * `sort_key` - The name of the sort key attribute, if any.
    pub fn new(name: &'a str, partition_key: &'a str, sort_key: Option<&'a str>) -> Self {
        Self {
            name,
            partition_key,
            sort_key,
        }
    }

    /// Returns the name of the table.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Returns the partition key of the table.
    pub fn partition_key(&self) -> &str {
        self.partition_key
    }

    /// Returns the sort key of the table, if any.
    pub fn sort_key(&self) -> Option<&str> {
        self.sort_key
    }
}
