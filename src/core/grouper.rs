use crate::core::{QuerySubmission, QueryableCollection};
use crate::domain::model::{
    CustomerIdRow, CustomersGroupedByProduct, ParameterizedQuery, QueryParameter,
};
use crate::utils::error::{GroupingError, Result};

const PRODUCT_PARAM: &str = "@productId";
const ORDERS_FOR_PRODUCT: &str =
    "SELECT r.customerId FROM root r WHERE r.productId = @productId";

/// Groups ordering customers by product by issuing one collection query per
/// product identifier.
///
/// The whole computation is all-or-nothing: a rejected query aborts it and no
/// partial output is ever returned. The collection handle is read-only and no
/// state survives a call.
pub struct OrderGrouper<C: QueryableCollection> {
    collection: C,
}

impl<C: QueryableCollection> OrderGrouper<C> {
    pub fn new(collection: C) -> Self {
        Self { collection }
    }

    /// Computes one [`CustomersGroupedByProduct`] record per input product
    /// identifier, in input order. Duplicate identifiers each get their own
    /// query and their own record; a product with no matching orders yields a
    /// record with an empty `customer_ids`.
    ///
    /// Empty input returns an empty vector without touching the collection.
    pub async fn compute_grouped_orders(
        &self,
        product_ids: &[String],
    ) -> Result<Vec<CustomersGroupedByProduct>> {
        if product_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut grouped = Vec::with_capacity(product_ids.len());

        for product_id in product_ids {
            // The scope token is fetched per query; the engine may rebind it.
            let self_link = self.collection.self_link();
            let query = orders_for_product(product_id);

            tracing::debug!(%product_id, "submitting order query");
            let feed = match self.collection.query_documents(&self_link, &query).await {
                QuerySubmission::Rejected => {
                    return Err(GroupingError::QueryRejected {
                        product_id: product_id.clone(),
                    });
                }
                QuerySubmission::Completed(feed) => feed,
            };

            if let Some(error) = feed.error {
                return Err(GroupingError::QueryFailed {
                    product_id: product_id.clone(),
                    number: error.number,
                    body: error.body,
                });
            }

            let mut customer_ids = Vec::with_capacity(feed.resources.len());
            for resource in feed.resources {
                let row: CustomerIdRow = serde_json::from_value(resource).map_err(|source| {
                    GroupingError::MalformedDocument {
                        product_id: product_id.clone(),
                        source,
                    }
                })?;
                customer_ids.push(row.customer_id);
            }

            tracing::debug!(%product_id, customers = customer_ids.len(), "grouped product");
            grouped.push(CustomersGroupedByProduct {
                product_id: product_id.clone(),
                customer_ids,
            });
        }

        Ok(grouped)
    }
}

fn orders_for_product(product_id: &str) -> ParameterizedQuery {
    ParameterizedQuery {
        query: ORDERS_FOR_PRODUCT.to_string(),
        parameters: vec![QueryParameter {
            name: PRODUCT_PARAM.to_string(),
            value: product_id.to_string(),
        }],
    }
}
