use crate::data_api::{DataClient, Query, QueryError, SelectArgs, TableRef};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const FILE_TABLE: &str = "hf_file";
pub const FILE_SCHEMA: &str = "hf_catalog";
pub const FILE_COLUMNS: [&str; 3] = ["file_id", "content_type", "file_size"];

/// A file stored in the filestore, as listed by the catalog
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct FileRecord {
    /// Identifier used to download the file from the filestore
    pub file_id: String,
    /// MIME type given at upload
    pub content_type: String,
    /// Size in bytes
    pub file_size: i64,
}

/// Select the files owned by `user_id` from the filestore catalog
pub fn user_files_query(user_id: &str) -> Query {
    Query::Select(
        SelectArgs::new(
            TableRef::Qualified {
                name: FILE_TABLE.to_string(),
                schema: FILE_SCHEMA.to_string(),
            },
            &FILE_COLUMNS,
        )
        .filter_eq("user_id", user_id),
    )
}

pub async fn select_user_files(
    client: &DataClient,
    user_id: &str,
) -> Result<Vec<FileRecord>, QueryError> {
    client.send_query(&user_files_query(user_id)).await
}
