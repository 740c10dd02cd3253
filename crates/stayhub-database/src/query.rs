//! Structured SQL composition for dynamic queries.
//!
//! [`SqlBuilder`] grows a query string and its positional parameter list
//! together. The only way to add a parameter is through the internal bind
//! operation, which appends the value and emits the matching `$N`
//! placeholder in one step, so the query text and the parameter list can
//! never drift out of sync.
//!
//! Row-level predicates (`WHERE`/`AND`) and aggregate predicates
//! (`HAVING`/`AND`) keep separate connector state: whether a `HAVING`
//! clause opens with its keyword depends only on earlier aggregate
//! predicates, never on how many row-level predicates were emitted.

use std::fmt;

/// A positional query parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryParam {
    /// A text value.
    Text(String),
    /// A 64-bit integer value.
    Int(i64),
    /// A double-precision float value.
    Float(f64),
}

impl fmt::Display for QueryParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

/// Accumulator for a dynamically composed query.
#[derive(Debug, Clone)]
pub struct SqlBuilder {
    sql: String,
    params: Vec<QueryParam>,
    has_row_predicate: bool,
    has_aggregate_predicate: bool,
}

impl SqlBuilder {
    /// Start a query from a base `SELECT ... FROM ... JOIN ...` fragment.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            sql: base.into(),
            params: Vec::new(),
            has_row_predicate: false,
            has_aggregate_predicate: false,
        }
    }

    /// Append `value` to the parameter list and return its 1-based ordinal.
    fn bind(&mut self, value: QueryParam) -> usize {
        self.params.push(value);
        self.params.len()
    }

    /// Append a row-level predicate comparing `expr` against `value`.
    ///
    /// `expr` is the column and operator, e.g. `"properties.owner_id ="`;
    /// the placeholder is appended here. The first row-level predicate
    /// opens the clause with `WHERE`, later ones join with `AND`.
    pub fn push_predicate(&mut self, expr: &str, value: QueryParam) {
        let connector = if self.has_row_predicate {
            "AND"
        } else {
            "WHERE"
        };
        self.has_row_predicate = true;
        let ordinal = self.bind(value);
        self.sql.push_str(&format!(" {connector} {expr} ${ordinal}"));
    }

    /// Append a post-aggregation predicate comparing `expr` against `value`.
    ///
    /// The first aggregate predicate opens the clause with `HAVING`, later
    /// ones join with `AND`, regardless of any row-level predicates.
    pub fn push_aggregate_predicate(&mut self, expr: &str, value: QueryParam) {
        let connector = if self.has_aggregate_predicate {
            "AND"
        } else {
            "HAVING"
        };
        self.has_aggregate_predicate = true;
        let ordinal = self.bind(value);
        self.sql.push_str(&format!(" {connector} {expr} ${ordinal}"));
    }

    /// Append a raw clause fragment (`GROUP BY ...`, `ORDER BY ...`) that
    /// carries no parameters.
    pub fn push_sql(&mut self, fragment: &str) {
        self.sql.push(' ');
        self.sql.push_str(fragment);
    }

    /// Append a `LIMIT` clause with its bound row count.
    pub fn push_limit(&mut self, limit: i64) {
        let ordinal = self.bind(QueryParam::Int(limit));
        self.sql.push_str(&format!(" LIMIT ${ordinal}"));
    }

    /// Finish composition, yielding the query text and its parameters.
    pub fn into_parts(self) -> (String, Vec<QueryParam>) {
        (self.sql, self.params)
    }
}
