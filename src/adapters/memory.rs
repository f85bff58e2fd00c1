use crate::domain::model::{OrderDocument, ParameterizedQuery};
use crate::domain::ports::{Feed, QuerySubmission, QueryableCollection};
use async_trait::async_trait;

const PRODUCT_PARAM: &str = "@productId";

/// In-process document collection for tests and embedding scenarios.
///
/// Plays the query engine's part: a query presented with a foreign self-link
/// or without a bound `@productId` parameter is rejected outright, anything
/// else completes with the matching documents projected to their
/// `customerId`, in insertion order.
pub struct InMemoryCollection {
    self_link: String,
    documents: Vec<OrderDocument>,
}

impl InMemoryCollection {
    pub fn new(self_link: impl Into<String>, documents: Vec<OrderDocument>) -> Self {
        Self {
            self_link: self_link.into(),
            documents,
        }
    }
}

#[async_trait]
impl QueryableCollection for InMemoryCollection {
    fn self_link(&self) -> String {
        self.self_link.clone()
    }

    async fn query_documents(
        &self,
        self_link: &str,
        query: &ParameterizedQuery,
    ) -> QuerySubmission {
        if self_link != self.self_link {
            tracing::warn!(presented = %self_link, "query scoped to a foreign self-link");
            return QuerySubmission::Rejected;
        }
        let Some(product_id) = query.parameter(PRODUCT_PARAM) else {
            tracing::warn!("query carries no {PRODUCT_PARAM} parameter");
            return QuerySubmission::Rejected;
        };

        let resources = self
            .documents
            .iter()
            .filter(|doc| doc.product_id == product_id)
            .map(|doc| serde_json::json!({ "customerId": doc.customer_id }))
            .collect();

        QuerySubmission::Completed(Feed::of(resources))
    }
}
