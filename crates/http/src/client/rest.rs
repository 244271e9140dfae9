//! REST (table) endpoint methods

use super::{ClientError, ProviderClient};
use reqwest::Method;
use serde_json::Value;

/// Preference that turns an insert into an upsert
pub const MERGE_DUPLICATES: &str = "resolution=merge-duplicates";

impl ProviderClient {
    /// Insert `record` into `table`, merging with the row that matches on `on_conflict`
    pub async fn upsert(
        &self,
        table: &str,
        record: &Value,
        on_conflict: &str,
        bearer: Option<&str>,
    ) -> Result<(), ClientError> {
        let path = format!("/rest/v1/{table}");
        let req = match bearer {
            Some(token) => self.request_as(Method::POST, &path, token),
            None => self.request(Method::POST, &path),
        }
        .query(&[("on_conflict", on_conflict)])
        .header("Prefer", MERGE_DUPLICATES)
        .json(record);
        self.execute_empty(req).await
    }
}
