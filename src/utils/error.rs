use thiserror::Error;

#[derive(Error, Debug)]
pub enum GroupingError {
    #[error("Query was not accepted for product ID {product_id}")]
    QueryRejected { product_id: String },

    #[error("Query failed for product ID {product_id}: {number} {body}")]
    QueryFailed {
        product_id: String,
        number: i64,
        body: String,
    },

    #[error("Malformed order document for product ID {product_id}")]
    MalformedDocument {
        product_id: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, GroupingError>;
