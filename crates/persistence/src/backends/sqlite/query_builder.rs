//! SQL generation for directory searches.
//!
//! Translates a [`Predicate`] into a WHERE clause over the `advocates` table
//! and wraps it in the single paged statement `fetch_page` runs.

use crate::search::{Predicate, SearchField};

/// A fragment of SQL with bound parameters.
#[derive(Debug, Clone, Default)]
pub struct SqlFragment {
    /// The SQL clause.
    pub sql: String,
    /// Bound parameter values, numbered `?1..?N` in order.
    pub params: Vec<SqlParam>,
}

/// A bound SQL parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    /// String parameter.
    String(String),
    /// Integer parameter.
    Integer(i64),
}

impl SqlParam {
    /// Creates a string parameter.
    pub fn string(s: impl Into<String>) -> Self {
        SqlParam::String(s.into())
    }

    /// Creates an integer parameter.
    pub fn integer(i: i64) -> Self {
        SqlParam::Integer(i)
    }

    /// Boxes the value for rusqlite binding.
    pub fn to_boxed(&self) -> Box<dyn rusqlite::ToSql> {
        match self {
            SqlParam::String(s) => Box::new(s.clone()),
            SqlParam::Integer(i) => Box::new(*i),
        }
    }
}

impl SqlFragment {
    /// Creates a new SQL fragment.
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// Adds a parameter and returns its placeholder.
    pub fn add_param(&mut self, param: SqlParam) -> String {
        self.params.push(param);
        format!("?{}", self.params.len())
    }

    /// Returns true if this fragment is empty.
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }
}

/// Columns of the `advocates` table, in the order rows are read back.
pub const ADVOCATE_COLUMNS: &str = "id, first_name, last_name, city, degree, specialties, \
     years_of_experience, phone_number, created_at";

/// Renders `predicate` as a WHERE clause.
pub fn where_clause(predicate: &Predicate) -> SqlFragment {
    let mut fragment = SqlFragment::default();
    let sql = render(predicate, &mut fragment);
    fragment.sql = sql;
    fragment
}

fn render(predicate: &Predicate, out: &mut SqlFragment) -> String {
    match predicate {
        Predicate::Always => "1".to_string(),
        Predicate::Contains { field, term } => {
            let placeholder = out.add_param(SqlParam::string(like_pattern(term)));
            format!(
                "{} LIKE '%' || {} || '%' ESCAPE '\\'",
                column_expr(field),
                placeholder
            )
        }
        Predicate::Not(inner) => format!("NOT ({})", render(inner, out)),
        Predicate::All(items) => join(items, " AND ", out),
        Predicate::Any(items) => join(items, " OR ", out),
    }
}

fn join(items: &[Predicate], separator: &str, out: &mut SqlFragment) -> String {
    let parts: Vec<String> = items
        .iter()
        .map(|item| format!("({})", render(item, out)))
        .collect();
    format!("({})", parts.join(separator))
}

/// List columns hold a JSON array; matching runs over its text.
fn column_expr(field: &SearchField) -> String {
    if field.is_list() {
        format!("CAST({} AS TEXT)", field.column)
    } else {
        field.column.to_string()
    }
}

/// Escapes the LIKE wildcards in `term` so it matches literally. Case is left
/// alone; `LIKE` folds ASCII case itself.
pub fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Builds the paged statement: one page of matches ordered by `id`, each row
/// carrying the total match count.
///
/// When the page is past the end of the matching set the statement still
/// yields one row, with the count and NULL record columns.
pub fn page_statement(predicate: &Predicate, limit: u64, offset: u64) -> SqlFragment {
    let mut fragment = where_clause(predicate);
    let limit = fragment.add_param(SqlParam::integer(clamp(limit)));
    let offset = fragment.add_param(SqlParam::integer(clamp(offset)));

    fragment.sql = format!(
        "WITH matched AS (\
             SELECT {columns} FROM advocates WHERE {filter}\
         ), \
         counted AS (SELECT COUNT(*) AS total FROM matched), \
         page AS (SELECT * FROM matched ORDER BY id LIMIT {limit} OFFSET {offset}) \
         SELECT counted.total, page.id, page.first_name, page.last_name, page.city, \
                page.degree, page.specialties, page.years_of_experience, \
                page.phone_number, page.created_at \
         FROM counted LEFT JOIN page ON 1 = 1 \
         ORDER BY page.id",
        columns = ADVOCATE_COLUMNS,
        filter = fragment.sql,
    );
    fragment
}

fn clamp(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Insert statement for one advocate, returning the engine-assigned fields.
pub const INSERT_ADVOCATE: &str = "INSERT INTO advocates \
     (first_name, last_name, city, degree, specialties, years_of_experience, phone_number) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) \
     RETURNING id, created_at";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{ADVOCATE_FIELDS, compile, parse};

    const CITY: SearchField = SearchField::text("city", "city");
    const SPECIALTIES: SearchField = SearchField::list("specialties", "specialties");

    #[test]
    fn test_always() {
        let fragment = where_clause(&Predicate::Always);
        assert_eq!(fragment.sql, "1");
        assert!(fragment.params.is_empty());
    }

    #[test]
    fn test_contains_text_column() {
        let fragment = where_clause(&Predicate::contains(CITY, "Bos"));
        assert_eq!(fragment.sql, "city LIKE '%' || ?1 || '%' ESCAPE '\\'");
        assert_eq!(fragment.params, vec![SqlParam::string("Bos")]);
    }

    #[test]
    fn test_contains_list_column_is_cast() {
        let fragment = where_clause(&Predicate::contains(SPECIALTIES, "CBT"));
        assert!(fragment.sql.starts_with("CAST(specialties AS TEXT) LIKE"));
    }

    #[test]
    fn test_placeholders_are_numbered_in_order() {
        let predicate = Predicate::all(vec![
            Predicate::contains(CITY, "a"),
            Predicate::not(Predicate::contains(SPECIALTIES, "b")),
        ]);
        let fragment = where_clause(&predicate);
        assert_eq!(
            fragment.sql,
            "((city LIKE '%' || ?1 || '%' ESCAPE '\\') AND \
             (NOT (CAST(specialties AS TEXT) LIKE '%' || ?2 || '%' ESCAPE '\\')))"
        );
        assert_eq!(
            fragment.params,
            vec![SqlParam::string("a"), SqlParam::string("b")]
        );
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("100%"), "100\\%");
        assert_eq!(like_pattern("a_b"), "a\\_b");
        assert_eq!(like_pattern("C:\\Path"), "C:\\\\Path");
        assert_eq!(like_pattern("CBT"), "CBT");
        assert_eq!(like_pattern("\",\""), "\",\"");
    }

    #[test]
    fn test_page_statement_params() {
        let predicate = compile(&parse("PTSD OR Trauma"), &ADVOCATE_FIELDS);
        let fragment = page_statement(&predicate, 10, 20);

        // Two terms over five fields, then LIMIT and OFFSET.
        assert_eq!(fragment.params.len(), 12);
        assert_eq!(fragment.params[10], SqlParam::integer(10));
        assert_eq!(fragment.params[11], SqlParam::integer(20));
        assert!(fragment.sql.contains("LIMIT ?11 OFFSET ?12"));
        assert!(fragment.sql.contains("LEFT JOIN page"));
    }

    #[test]
    fn test_page_statement_match_all() {
        let fragment = page_statement(&Predicate::Always, 5, 0);
        assert!(fragment.sql.contains("FROM advocates WHERE 1"));
        assert_eq!(
            fragment.params,
            vec![SqlParam::integer(5), SqlParam::integer(0)]
        );
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(u64::MAX), i64::MAX);
        assert_eq!(clamp(7), 7);
    }
}
