//! Parameterized query plans
//!
//! A [`QueryPlan`] is query text plus the values bound to its `$N`
//! placeholders. The Nth placeholder always refers to the Nth parameter.
//! Values never appear in the text itself.

use std::fmt;

use serde::Serialize;
use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::QueryAs;

use crate::models::{Limit, SearchCriteria};

/// A value bound to a query placeholder
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SqlParam {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for SqlParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(v) => write!(f, "{:?}", v),
        }
    }
}

/// Query text with its ordered bound parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryPlan {
    sql: String,
    predicates: Vec<String>,
    params: Vec<SqlParam>,
}

impl QueryPlan {
    /// Full query text, ready for the executor.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Filter predicates in the order they were applied.
    pub fn predicates(&self) -> &[String] {
        &self.predicates
    }

    /// Bound values; `params()[n - 1]` belongs to `$n`.
    pub fn params(&self) -> &[SqlParam] {
        &self.params
    }

    pub fn into_parts(self) -> (String, Vec<SqlParam>) {
        (self.sql, self.params)
    }

    /// Bind every parameter, in order, onto a typed sqlx query.
    pub fn bind<'q, O>(
        &self,
        mut query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        for param in &self.params {
            query = match param {
                SqlParam::Int(v) => query.bind(*v),
                SqlParam::Float(v) => query.bind(*v),
                SqlParam::Text(v) => query.bind(v.clone()),
            };
        }
        query
    }
}

impl fmt::Display for QueryPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.sql)?;
        for (i, param) in self.params.iter().enumerate() {
            writeln!(f, "  ${} = {}", i + 1, param)?;
        }
        Ok(())
    }
}

const PROPERTY_SEARCH_BASE: &str = "SELECT properties.*, avg(property_reviews.rating)::float8 AS average_rating
FROM properties
JOIN property_reviews ON properties.id = property_reviews.property_id";

const PROPERTY_SEARCH_TAIL: &str = "GROUP BY properties.id
ORDER BY properties.cost_per_night";

/// One filter predicate: `<lhs> <op> $N<rhs_suffix>`
#[derive(Debug, Clone, Copy)]
struct Predicate {
    lhs: &'static str,
    op: &'static str,
    rhs_suffix: &'static str,
}

impl Predicate {
    const fn new(lhs: &'static str, op: &'static str) -> Self {
        Self {
            lhs,
            op,
            rhs_suffix: "",
        }
    }

    const fn scaled(lhs: &'static str, op: &'static str, rhs_suffix: &'static str) -> Self {
        Self { lhs, op, rhs_suffix }
    }

    fn render(self, index: usize) -> String {
        format!("{} {} ${}{}", self.lhs, self.op, index, self.rhs_suffix)
    }
}

const OWNER: Predicate = Predicate::new("properties.owner_id", "=");
const CITY: Predicate = Predicate::new("properties.city", "LIKE");
// cost_per_night is stored in cents; scale the bound, never truncate the column
const MIN_PRICE: Predicate = Predicate::scaled("properties.cost_per_night", ">=", " * 100");
const MAX_PRICE: Predicate = Predicate::scaled("properties.cost_per_night", "<=", " * 100");
const MIN_RATING: Predicate = Predicate::new("property_reviews.rating", ">=");

/// Build the property search query for `criteria`, returning at most
/// `limit` rows ordered by nightly cost.
///
/// Filters are applied in a fixed order (owner, city, min price, max
/// price, min rating) so placeholder numbering is deterministic. Pure:
/// no I/O, no logging, never fails. Callers validate `criteria` first.
pub fn build_property_search(criteria: &SearchCriteria, limit: Limit) -> QueryPlan {
    let filters = [
        (OWNER, criteria.owner_id.map(|id| SqlParam::Int(id.into()))),
        (
            CITY,
            criteria
                .city
                .as_ref()
                .map(|city| SqlParam::Text(format!("%{}%", city))),
        ),
        (MIN_PRICE, criteria.min_price_per_night.map(SqlParam::Float)),
        (MAX_PRICE, criteria.max_price_per_night.map(SqlParam::Float)),
        (MIN_RATING, criteria.min_rating.map(SqlParam::Float)),
    ];

    let (predicates, mut params) = filters
        .into_iter()
        .filter_map(|(predicate, value)| value.map(|v| (predicate, v)))
        .fold(
            (Vec::new(), Vec::new()),
            |(mut predicates, mut params), (predicate, value)| {
                params.push(value);
                predicates.push(predicate.render(params.len()));
                (predicates, params)
            },
        );

    let mut sql = String::from(PROPERTY_SEARCH_BASE);
    if !predicates.is_empty() {
        sql.push_str("\nWHERE ");
        sql.push_str(&predicates.join(" AND "));
    }

    params.push(SqlParam::Int(limit.as_i64()));
    sql.push('\n');
    sql.push_str(PROPERTY_SEARCH_TAIL);
    sql.push_str(&format!("\nLIMIT ${}", params.len()));

    QueryPlan {
        sql,
        predicates,
        params,
    }
}
