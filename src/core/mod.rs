pub mod grouper;

pub use crate::domain::model::CustomersGroupedByProduct;
pub use crate::domain::ports::{QuerySubmission, QueryableCollection};
pub use crate::utils::error::Result;
