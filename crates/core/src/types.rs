/// All collection identifiers are positive 64-bit integers.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar date without a time component (repair dates, plan due dates).
pub type Date = chrono::NaiveDate;
