use crate::domain::value_objects::Pagination;

/// A value bound to a positional `$N` placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlParam {
    Int(i32),
    BigInt(i64),
    Text(String),
    BigIntArray(Vec<i64>),
}

impl From<i32> for SqlParam {
    fn from(value: i32) -> Self {
        SqlParam::Int(value)
    }
}

impl From<i64> for SqlParam {
    fn from(value: i64) -> Self {
        SqlParam::BigInt(value)
    }
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        SqlParam::Text(value)
    }
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        SqlParam::Text(value.to_string())
    }
}

impl From<Vec<i64>> for SqlParam {
    fn from(value: Vec<i64>) -> Self {
        SqlParam::BigIntArray(value)
    }
}

impl From<&[i64]> for SqlParam {
    fn from(value: &[i64]) -> Self {
        SqlParam::BigIntArray(value.to_vec())
    }
}

/// Finished SQL text plus its parameters, in placeholder order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// Label used in logs and errors, e.g. `news.bulk_insert`
    pub operation: String,
    pub sql: String,
    pub params: Vec<SqlParam>,
}

/// Keyword joining a filter to the ones before it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    And,
    Or,
}

impl Connector {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Connector::And => "AND",
            Connector::Or => "OR",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Equal,
    Like,
}

impl Comparator {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Comparator::Equal => "=",
            Comparator::Like => "LIKE",
        }
    }
}

/// How the placeholder appears on the right-hand side of a filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamExpr {
    /// `$N`
    Placeholder,
    /// `ANY($N)`, for array membership
    Any,
}

impl ParamExpr {
    pub fn render(&self, index: usize) -> String {
        match self {
            ParamExpr::Placeholder => format!("${}", index),
            ParamExpr::Any => format!("ANY(${})", index),
        }
    }
}

/// Accumulates one statement: the SQL text, its bound values and whether a
/// `WHERE` keyword has been emitted yet.
///
/// The next placeholder index is always `params.len() + 1`, so binding a value
/// and referencing its placeholder happen in a single call and cannot drift.
/// Columns, comparators and connectors must be code-controlled constants; only
/// bound values come from callers' input.
#[derive(Debug, Clone)]
pub struct StatementBuilder {
    operation: String,
    sql: String,
    params: Vec<SqlParam>,
    has_where: bool,
}

impl StatementBuilder {
    /// Start from a base statement that has no `WHERE` clause yet
    pub fn new(operation: impl Into<String>, base: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            sql: base.into(),
            params: Vec::new(),
            has_where: false,
        }
    }

    /// Start from a base statement that already carries a `WHERE` clause
    pub fn with_where(operation: impl Into<String>, base: impl Into<String>) -> Self {
        Self {
            has_where: true,
            ..Self::new(operation, base)
        }
    }

    pub fn has_where(&self) -> bool {
        self.has_where
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[SqlParam] {
        &self.params
    }

    /// Index the next bound value will receive
    pub fn next_index(&self) -> usize {
        self.params.len() + 1
    }

    /// Append a value and return its placeholder index
    pub fn bind(&mut self, value: impl Into<SqlParam>) -> usize {
        self.params.push(value.into());
        self.params.len()
    }

    /// Append raw SQL text (GROUP BY, ORDER BY, ...)
    pub fn push_sql(&mut self, fragment: &str) -> &mut Self {
        self.sql.push_str(fragment);
        self
    }

    /// `column comparator $N`
    pub fn add_filter(
        &mut self,
        connector: Connector,
        column: &'static str,
        comparator: Comparator,
        value: impl Into<SqlParam>,
    ) -> &mut Self {
        self.add_custom_filter(connector, column, comparator, ParamExpr::Placeholder, value)
    }

    /// `column comparator <expr around $N>`
    ///
    /// The first filter emits `WHERE`; later ones emit `connector`.
    pub fn add_custom_filter(
        &mut self,
        connector: Connector,
        column: &'static str,
        comparator: Comparator,
        expr: ParamExpr,
        value: impl Into<SqlParam>,
    ) -> &mut Self {
        let index = self.bind(value);
        let keyword = if self.has_where {
            connector.as_sql()
        } else {
            self.has_where = true;
            "WHERE"
        };

        self.sql.push_str(&format!(
            " {} {} {} {}",
            keyword,
            column,
            comparator.as_sql(),
            expr.render(index)
        ));
        self
    }

    /// ` LIMIT $a OFFSET $b`, binding count then offset
    pub fn paginate(&mut self, pagination: &Pagination) -> &mut Self {
        let limit = self.bind(pagination.count);
        let offset = self.bind(pagination.offset);
        self.sql
            .push_str(&format!(" LIMIT ${} OFFSET ${}", limit, offset));
        self
    }

    pub fn build(self) -> Statement {
        Statement {
            operation: self.operation,
            sql: self.sql,
            params: self.params,
        }
    }
}
