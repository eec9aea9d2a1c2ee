//! Multi-row INSERT / UPDATE / DELETE assembly.
//!
//! Every function returns `None` for an empty batch so callers never send a
//! statement such as `VALUES RETURNING id` to the database.

use super::query_builder::{SqlParam, Statement};
use super::tables::{AssocRow, AssocSpec, InsertRow, TableSpec, UpdateRow};

/// `($start, $start+1, ...)` with `width` placeholders, each optionally cast
fn value_tuple(start: usize, casts: &[Option<&str>]) -> String {
    let placeholders: Vec<String> = casts
        .iter()
        .enumerate()
        .map(|(offset, cast)| match cast {
            Some(sql_type) => format!("${}::{}", start + offset, sql_type),
            None => format!("${}", start + offset),
        })
        .collect();
    format!("({})", placeholders.join(", "))
}

/// `VALUES` tuples plus flattened parameters for insert rows
fn insert_values<R: InsertRow>(rows: &[R], width: usize) -> (String, Vec<SqlParam>) {
    let casts = vec![None; width];
    let mut tuples = Vec::with_capacity(rows.len());
    let mut params = Vec::with_capacity(rows.len() * width);

    for row in rows {
        let values = row.insert_values();
        debug_assert_eq!(values.len(), width, "row width does not match column list");
        tuples.push(value_tuple(params.len() + 1, &casts));
        params.extend(values);
    }

    (tuples.join(", "), params)
}

/// `INSERT INTO table (cols) VALUES ($1, ...), (...) RETURNING id`
pub fn bulk_insert<R: InsertRow>(table: &TableSpec, rows: &[R]) -> Option<Statement> {
    if rows.is_empty() {
        return None;
    }

    let (values, params) = insert_values(rows, table.insert_columns.len());
    Some(Statement {
        operation: table.operation("bulk_insert"),
        sql: format!(
            "INSERT INTO {} ({}) VALUES {} RETURNING id",
            table.name,
            table.insert_columns.join(", "),
            values
        ),
        params,
    })
}

/// `UPDATE table SET col = alias.col ... FROM (VALUES ...) AS alias (id, cols)
/// WHERE table.id = alias.id RETURNING table.id`
///
/// Ids that match no row are left out of the RETURNING set.
pub fn bulk_update<R: UpdateRow>(table: &TableSpec, rows: &[R]) -> Option<Statement> {
    if rows.is_empty() {
        return None;
    }

    let alias = table.update_alias;
    let mut casts: Vec<Option<&str>> = vec![Some("BIGINT")];
    casts.extend(table.update_columns.iter().map(|c| Some(c.sql_type)));

    let mut tuples = Vec::with_capacity(rows.len());
    let mut params = Vec::with_capacity(rows.len() * casts.len());
    for row in rows {
        let values = row.update_values();
        debug_assert_eq!(values.len(), table.update_columns.len());
        tuples.push(value_tuple(params.len() + 1, &casts));
        params.push(SqlParam::BigInt(row.row_id()));
        params.extend(values);
    }

    let mut assignments: Vec<String> = table
        .update_columns
        .iter()
        .map(|c| format!("{} = {}.{}", c.name, alias, c.name))
        .collect();
    if table.touch_updated_at {
        assignments.push("updated_at = now()".to_string());
    }

    let column_names: Vec<&str> = table.update_columns.iter().map(|c| c.name).collect();

    Some(Statement {
        operation: table.operation("bulk_update"),
        sql: format!(
            "UPDATE {table} SET {set} FROM (VALUES {values}) AS {alias} (id, {cols}) \
             WHERE {table}.id = {alias}.id RETURNING {table}.id",
            table = table.name,
            set = assignments.join(", "),
            values = tuples.join(", "),
            alias = alias,
            cols = column_names.join(", "),
        ),
        params,
    })
}

/// `DELETE FROM table WHERE id = ANY($1) RETURNING id`
pub fn bulk_delete(table: &TableSpec, ids: &[i64]) -> Option<Statement> {
    if ids.is_empty() {
        return None;
    }

    Some(Statement {
        operation: table.operation("bulk_delete"),
        sql: format!("DELETE FROM {} WHERE id = ANY($1) RETURNING id", table.name),
        params: vec![SqlParam::from(ids)],
    })
}

/// Join-row insert; duplicates are skipped so the affected-row count can be
/// checked against the number of rows sent
pub fn assoc_insert(assoc: &AssocSpec, rows: &[AssocRow]) -> Option<Statement> {
    if rows.is_empty() {
        return None;
    }

    let (values, params) = insert_values(rows, 2);
    Some(Statement {
        operation: format!("{}.insert", assoc.label),
        sql: format!(
            "INSERT INTO {} ({}, {}) VALUES {} ON CONFLICT DO NOTHING",
            assoc.name, assoc.parent_column, assoc.child_column, values
        ),
        params,
    })
}

/// Delete every join row that references one of `parent_ids`
pub fn assoc_delete(assoc: &AssocSpec, parent_ids: &[i64]) -> Option<Statement> {
    if parent_ids.is_empty() {
        return None;
    }

    Some(Statement {
        operation: format!("{}.clean", assoc.label),
        sql: format!(
            "DELETE FROM {} WHERE {} = ANY($1)",
            assoc.name, assoc.parent_column
        ),
        params: vec![SqlParam::from(parent_ids)],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{NewsDraft, NewsUpdate, TaxonomyDraft, TaxonomyUpdate};
    use crate::infrastructure::persistence::tables::{
        NEWS_TABLE, NEWS_TOPICS_ASSOC, TAGS_TABLE, TOPICS_TABLE,
    };

    fn draft(title: &str, status: i32) -> NewsDraft {
        NewsDraft::new(title.to_string(), format!("{} body", title), status).unwrap()
    }

    #[test]
    fn test_bulk_insert_news() {
        let rows = vec![draft("A", 1), draft("D", 2)];
        let statement = bulk_insert(&NEWS_TABLE, &rows).unwrap();

        assert_eq!(
            statement.sql,
            "INSERT INTO news (title, content, status) VALUES ($1, $2, $3), ($4, $5, $6) RETURNING id"
        );
        assert_eq!(
            statement.params,
            vec![
                SqlParam::Text("A".into()),
                SqlParam::Text("A body".into()),
                SqlParam::Int(1),
                SqlParam::Text("D".into()),
                SqlParam::Text("D body".into()),
                SqlParam::Int(2),
            ]
        );
        assert_eq!(statement.operation, "news.bulk_insert");
    }

    #[test]
    fn test_bulk_insert_single_column() {
        let rows: Vec<TaxonomyDraft> = ["a", "b", "c"]
            .iter()
            .map(|n| TaxonomyDraft::new(n.to_string()).unwrap())
            .collect();
        let statement = bulk_insert(&TOPICS_TABLE, &rows).unwrap();

        assert_eq!(
            statement.sql,
            "INSERT INTO news_topics (name) VALUES ($1), ($2), ($3) RETURNING id"
        );
        assert_eq!(statement.params.len(), 3);
    }

    #[test]
    fn test_bulk_insert_empty_batch_is_skipped() {
        let rows: Vec<NewsDraft> = Vec::new();
        assert!(bulk_insert(&NEWS_TABLE, &rows).is_none());
    }

    #[test]
    fn test_bulk_update_news() {
        let rows = vec![
            NewsUpdate::new(7, draft("A", 1)).unwrap(),
            NewsUpdate::new(9, draft("B", 3)).unwrap(),
        ];
        let statement = bulk_update(&NEWS_TABLE, &rows).unwrap();

        assert_eq!(
            statement.sql,
            "UPDATE news SET title = new_news.title, content = new_news.content, \
             status = new_news.status, updated_at = now() \
             FROM (VALUES ($1::BIGINT, $2::TEXT, $3::TEXT, $4::INTEGER), \
             ($5::BIGINT, $6::TEXT, $7::TEXT, $8::INTEGER)) \
             AS new_news (id, title, content, status) \
             WHERE news.id = new_news.id RETURNING news.id"
        );
        assert_eq!(statement.params[0], SqlParam::BigInt(7));
        assert_eq!(statement.params[4], SqlParam::BigInt(9));
        assert_eq!(statement.params[7], SqlParam::Int(3));
    }

    #[test]
    fn test_bulk_update_tags() {
        let rows = vec![TaxonomyUpdate::new(1, "x".into()).unwrap()];
        let statement = bulk_update(&TAGS_TABLE, &rows).unwrap();

        assert_eq!(
            statement.sql,
            "UPDATE news_tags SET name = new_values.name \
             FROM (VALUES ($1::BIGINT, $2::TEXT)) AS new_values (id, name) \
             WHERE news_tags.id = new_values.id RETURNING news_tags.id"
        );
        assert_eq!(
            statement.params,
            vec![SqlParam::BigInt(1), SqlParam::Text("x".into())]
        );
    }

    #[test]
    fn test_bulk_update_empty_batch_is_skipped() {
        let rows: Vec<TaxonomyUpdate> = Vec::new();
        assert!(bulk_update(&TAGS_TABLE, &rows).is_none());
    }

    #[test]
    fn test_bulk_delete_binds_single_array() {
        let statement = bulk_delete(&TAGS_TABLE, &[1, 2, 3, 4]).unwrap();

        assert_eq!(
            statement.sql,
            "DELETE FROM news_tags WHERE id = ANY($1) RETURNING id"
        );
        assert_eq!(statement.params, vec![SqlParam::BigIntArray(vec![1, 2, 3, 4])]);
        assert!(bulk_delete(&TAGS_TABLE, &[]).is_none());
    }

    #[test]
    fn test_assoc_statements() {
        let rows = vec![
            AssocRow {
                parent_id: 1,
                child_id: 10,
            },
            AssocRow {
                parent_id: 1,
                child_id: 11,
            },
        ];
        let insert = assoc_insert(&NEWS_TOPICS_ASSOC, &rows).unwrap();
        assert_eq!(
            insert.sql,
            "INSERT INTO assoc_news_topics (news_id, news_topic_id) VALUES ($1, $2), ($3, $4) ON CONFLICT DO NOTHING"
        );
        assert_eq!(insert.params.len(), 4);

        let clean = assoc_delete(&NEWS_TOPICS_ASSOC, &[1]).unwrap();
        assert_eq!(clean.sql, "DELETE FROM assoc_news_topics WHERE news_id = ANY($1)");
        assert!(assoc_insert(&NEWS_TOPICS_ASSOC, &[]).is_none());
        assert!(assoc_delete(&NEWS_TOPICS_ASSOC, &[]).is_none());
    }
}
