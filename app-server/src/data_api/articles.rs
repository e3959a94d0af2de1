use crate::data_api::{DataClient, Query, QueryError, SelectArgs, TableRef};
use serde_json::Value;

pub const ARTICLE_TABLE: &str = "article";
pub const ARTICLE_COLUMNS: [&str; 4] = ["title", "id", "author_id", "rating"];

/// Select every article with a fixed set of columns
pub fn articles_query() -> Query {
    Query::Select(SelectArgs::new(
        TableRef::Name(ARTICLE_TABLE.to_string()),
        &ARTICLE_COLUMNS,
    ))
}

/// Fetch the articles as an untyped JSON document
pub async fn select_articles(client: &DataClient) -> Result<Value, QueryError> {
    client.send_query(&articles_query()).await
}
