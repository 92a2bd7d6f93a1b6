//! Translates search parameters into a [`QueryExpression`].

use crate::types::SearchParameters;

use super::expression::{Clause, QueryExpression, fields};

/// Builds query expressions from request parameters.
///
/// Pure and deterministic: the same parameters always yield the same
/// expression, and no I/O is performed. Clauses are emitted in a fixed order:
/// text match, then category term, then price range. Absent or empty
/// parameters contribute nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryBuilder;

impl QueryBuilder {
    /// Creates a new query builder.
    pub fn new() -> Self {
        Self
    }

    /// Builds the expression for `params`.
    pub fn build(&self, params: &SearchParameters) -> QueryExpression {
        let mut expr = QueryExpression::match_all();

        if let Some(text) = non_empty(params.text_query.as_deref()) {
            expr.push(Clause::Match {
                field: fields::NAME,
                text: text.to_string(),
            });
        }

        if let Some(category) = non_empty(params.category.as_deref()) {
            expr.push(Clause::Term {
                field: fields::CATEGORY,
                value: category.to_string(),
            });
        }

        if let Some(range) = params.price_range {
            expr.push(Clause::Range {
                field: fields::PRICE,
                gte: range.min,
                lte: range.max,
            });
        }

        expr
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
