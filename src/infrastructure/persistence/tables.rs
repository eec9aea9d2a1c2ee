use super::query_builder::{StatementBuilder, SqlParam};
use crate::domain::entities::{NewsDraft, NewsUpdate, TaxonomyDraft, TaxonomyUpdate};
use crate::domain::value_objects::Pagination;

/// Column that takes part in a bulk update, with the cast applied to its
/// value literal inside `VALUES (...)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub sql_type: &'static str,
}

impl Column {
    pub const fn new(name: &'static str, sql_type: &'static str) -> Self {
        Self { name, sql_type }
    }
}

/// Everything the generic repository needs to know about an entity table
#[derive(Debug, Clone, Copy)]
pub struct TableSpec {
    pub name: &'static str,
    /// Operation prefix used in statement labels
    pub label: &'static str,
    pub insert_columns: &'static [&'static str],
    pub update_columns: &'static [Column],
    /// Alias of the `VALUES` list in bulk updates
    pub update_alias: &'static str,
    /// Also set `updated_at = now()` on bulk update
    pub touch_updated_at: bool,
    /// SELECT list, FROM clause and joins of the list query
    pub select: &'static str,
    pub group_by: Option<&'static str>,
    pub order_by: &'static str,
}

impl TableSpec {
    pub fn operation(&self, action: &str) -> String {
        format!("{}.{}", self.label, action)
    }

    /// Builder positioned right after the joins, ready for filters
    pub fn list_builder(&self) -> StatementBuilder {
        StatementBuilder::new(self.operation("list"), self.select)
    }

    /// Append grouping, ordering and the optional page window
    pub fn finish_list(
        &self,
        mut builder: StatementBuilder,
        pagination: Option<&Pagination>,
    ) -> StatementBuilder {
        if let Some(group_by) = self.group_by {
            builder.push_sql(&format!(" GROUP BY {}", group_by));
        }
        builder.push_sql(&format!(" ORDER BY {}", self.order_by));
        if let Some(pagination) = pagination {
            builder.paginate(pagination);
        }
        builder
    }
}

pub const NEWS_TABLE: TableSpec = TableSpec {
    name: "news",
    label: "news",
    insert_columns: &["title", "content", "status"],
    update_columns: &[
        Column::new("title", "TEXT"),
        Column::new("content", "TEXT"),
        Column::new("status", "INTEGER"),
    ],
    update_alias: "new_news",
    touch_updated_at: true,
    select: "SELECT news.id, news.created_at, news.updated_at, news.title, news.content, \
             string_agg(DISTINCT topics.name, ', ') AS topics_name, \
             string_agg(DISTINCT tags.name, ', ') AS tags_name, \
             news.status \
             FROM news \
             LEFT JOIN assoc_news_topics a_topics ON news.id = a_topics.news_id \
             LEFT JOIN news_topics topics ON a_topics.news_topic_id = topics.id \
             LEFT JOIN assoc_news_tags a_tags ON news.id = a_tags.news_id \
             LEFT JOIN news_tags tags ON a_tags.news_tag_id = tags.id",
    group_by: Some("news.id"),
    order_by: "news.id",
};

pub const TOPICS_TABLE: TableSpec = TableSpec {
    name: "news_topics",
    label: "topics",
    insert_columns: &["name"],
    update_columns: &[Column::new("name", "TEXT")],
    update_alias: "new_values",
    touch_updated_at: false,
    select: "SELECT id, name FROM news_topics",
    group_by: None,
    order_by: "id",
};

pub const TAGS_TABLE: TableSpec = TableSpec {
    name: "news_tags",
    label: "tags",
    insert_columns: &["name"],
    update_columns: &[Column::new("name", "TEXT")],
    update_alias: "new_values",
    touch_updated_at: false,
    select: "SELECT id, name FROM news_tags",
    group_by: None,
    order_by: "id",
};

/// Join table between news and one taxonomy
#[derive(Debug, Clone, Copy)]
pub struct AssocSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub parent_column: &'static str,
    pub child_column: &'static str,
}

pub const NEWS_TOPICS_ASSOC: AssocSpec = AssocSpec {
    name: "assoc_news_topics",
    label: "news_topics_assoc",
    parent_column: "news_id",
    child_column: "news_topic_id",
};

pub const NEWS_TAGS_ASSOC: AssocSpec = AssocSpec {
    name: "assoc_news_tags",
    label: "news_tags_assoc",
    parent_column: "news_id",
    child_column: "news_tag_id",
};

/// Values of one row in a bulk insert, in `insert_columns` order
pub trait InsertRow {
    fn insert_values(&self) -> Vec<SqlParam>;
}

/// Id plus values of one row in a bulk update, in `update_columns` order
pub trait UpdateRow {
    fn row_id(&self) -> i64;
    fn update_values(&self) -> Vec<SqlParam>;
}

impl InsertRow for NewsDraft {
    fn insert_values(&self) -> Vec<SqlParam> {
        vec![
            self.title().into(),
            self.content().into(),
            self.status().as_i32().into(),
        ]
    }
}

impl UpdateRow for NewsUpdate {
    fn row_id(&self) -> i64 {
        self.id()
    }

    fn update_values(&self) -> Vec<SqlParam> {
        self.draft().insert_values()
    }
}

impl InsertRow for TaxonomyDraft {
    fn insert_values(&self) -> Vec<SqlParam> {
        vec![self.name().into()]
    }
}

impl UpdateRow for TaxonomyUpdate {
    fn row_id(&self) -> i64 {
        self.id()
    }

    fn update_values(&self) -> Vec<SqlParam> {
        vec![self.name().into()]
    }
}

/// One flattened `(parent, child)` join row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssocRow {
    pub parent_id: i64,
    pub child_id: i64,
}

impl InsertRow for AssocRow {
    fn insert_values(&self) -> Vec<SqlParam> {
        vec![self.parent_id.into(), self.child_id.into()]
    }
}
