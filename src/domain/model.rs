use serde::{Deserialize, Serialize};

/// Grouping record produced per input product identifier.
///
/// `customer_ids` keeps the order the query engine returned the rows in and
/// preserves duplicates; a product with no matching orders carries an empty
/// vector rather than being omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomersGroupedByProduct {
    #[serde(rename = "productId")]
    pub product_id: String,
    #[serde(rename = "customerIds")]
    pub customer_ids: Vec<String>,
}

/// Stored shape of an order document in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDocument {
    #[serde(rename = "productId")]
    pub product_id: String,
    #[serde(rename = "customerId")]
    pub customer_id: String,
}

/// Shape of one feed row after the order query projects the customer field.
/// Decoding fails when the row carries no `customerId`.
#[derive(Debug, Deserialize)]
pub struct CustomerIdRow {
    #[serde(rename = "customerId")]
    pub customer_id: String,
}

/// A document-store SQL template plus its bound values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterizedQuery {
    pub query: String,
    pub parameters: Vec<QueryParameter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryParameter {
    pub name: String,
    pub value: String,
}

impl ParameterizedQuery {
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }
}
