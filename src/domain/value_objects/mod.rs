mod filters;
mod news_status;
mod pagination;

pub use filters::{NewsFilter, TagFilter, TaxonomyFilter, TopicFilter};
pub use news_status::NewsStatus;
pub use pagination::Pagination;
