mod news;
mod response_cache;
mod taxonomy;

pub use news::NewsUseCase;
pub use response_cache::ResponseCache;
pub use taxonomy::{TaxonomyKind, TaxonomyUseCase};

/// Query tokens sent as empty strings count as absent
fn non_empty(token: Option<&str>) -> Option<&str> {
    token.filter(|t| !t.is_empty())
}
