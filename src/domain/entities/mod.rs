mod association;
mod news;
mod taxonomy;

pub use association::Association;
pub use news::{News, NewsDraft, NewsUpdate};
pub use taxonomy::{TaxonomyDraft, TaxonomyItem, TaxonomyUpdate};
