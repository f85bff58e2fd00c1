pub mod adapters;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::memory::InMemoryCollection;
pub use crate::core::grouper::OrderGrouper;
pub use crate::domain::model::{
    CustomersGroupedByProduct, OrderDocument, ParameterizedQuery, QueryParameter,
};
pub use crate::domain::ports::{Feed, FeedError, QuerySubmission, QueryableCollection};
pub use crate::utils::error::{GroupingError, Result};
