use crate::domain::model::ParameterizedQuery;
use async_trait::async_trait;

/// Outcome of submitting a query to the collection engine.
///
/// The engine first signals whether it accepted the query for execution at
/// all, then delivers a feed. Both are folded into the single awaited return
/// of [`QueryableCollection::query_documents`] so callers see an explicit
/// request/response with no ordering ambiguity.
#[derive(Debug)]
pub enum QuerySubmission {
    /// The engine refused to schedule the query.
    Rejected,
    /// The engine ran the query and delivered a feed.
    Completed(Feed),
}

/// What an accepted query delivers on completion: either a feed-level error
/// or the matching resources, in engine order.
#[derive(Debug, Default)]
pub struct Feed {
    pub error: Option<FeedError>,
    pub resources: Vec<serde_json::Value>,
}

impl Feed {
    pub fn of(resources: Vec<serde_json::Value>) -> Self {
        Self {
            error: None,
            resources,
        }
    }
}

/// Feed-level error reported by the query engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedError {
    pub number: i64,
    pub body: String,
}

#[async_trait]
pub trait QueryableCollection: Send + Sync {
    /// Opaque scope token binding a query to this collection instance.
    fn self_link(&self) -> String;

    /// Submits a parameterized query scoped by `self_link` and awaits its
    /// completion. Callers issue at most one submission at a time.
    async fn query_documents(
        &self,
        self_link: &str,
        query: &ParameterizedQuery,
    ) -> QuerySubmission;
}
