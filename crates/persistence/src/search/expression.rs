//! Structured query expressions and their query DSL rendering.

use serde_json::{Map, Value, json};

/// Field names the query builder is allowed to target.
///
/// Clauses only ever reference these constants; request input never chooses a
/// field.
pub mod fields {
    /// Product name, target of free-text matching.
    pub const NAME: &str = "name";
    /// Product category, target of exact-term filtering.
    pub const CATEGORY: &str = "category";
    /// Product price, target of range filtering.
    pub const PRICE: &str = "price";
}

/// One atomic condition within a query expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    /// Analyzed full-text match; contributes to relevance.
    Match {
        /// Target field.
        field: &'static str,
        /// Raw user text.
        text: String,
    },
    /// Exact, non-scoring term filter.
    Term {
        /// Target field.
        field: &'static str,
        /// Value that must match exactly.
        value: String,
    },
    /// Inclusive numeric range filter.
    Range {
        /// Target field.
        field: &'static str,
        /// Inclusive lower bound.
        gte: f64,
        /// Inclusive upper bound.
        lte: f64,
    },
}

impl Clause {
    /// Returns true for clauses that filter without scoring.
    pub fn is_filter(&self) -> bool {
        !matches!(self, Clause::Match { .. })
    }

    /// Renders this clause as a query DSL leaf.
    pub fn to_dsl(&self) -> Value {
        match self {
            Clause::Match { field, text } => json!({ "match": { *field: text } }),
            Clause::Term { field, value } => json!({ "term": { *field: value } }),
            Clause::Range { field, gte, lte } => {
                json!({ "range": { *field: { "gte": gte, "lte": lte } } })
            }
        }
    }
}

/// A boolean composition of zero or more clauses.
///
/// Clause order is significant and preserved through rendering. An expression
/// without clauses matches every document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryExpression {
    clauses: Vec<Clause>,
}

impl QueryExpression {
    /// Creates an expression that matches everything.
    pub fn match_all() -> Self {
        Self::default()
    }

    /// Appends a clause.
    pub fn push(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    /// Appends a clause, builder style.
    pub fn with_clause(mut self, clause: Clause) -> Self {
        self.push(clause);
        self
    }

    /// Returns the clauses in evaluation order.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Returns true if this expression has no clauses.
    pub fn is_match_all(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Renders the complete search request body.
    ///
    /// Scoring clauses go under `bool.must` and filters under `bool.filter`,
    /// each keeping their relative order. An empty expression renders as
    /// `{"query": {"match_all": {}}}`. Values are embedded as JSON strings
    /// and numbers, so user text can never alter the query structure.
    pub fn to_body(&self) -> Value {
        if self.is_match_all() {
            return json!({ "query": { "match_all": {} } });
        }

        let (filters, musts): (Vec<&Clause>, Vec<&Clause>) =
            self.clauses.iter().partition(|c| c.is_filter());

        let mut bool_query = Map::new();
        if !musts.is_empty() {
            bool_query.insert(
                "must".to_string(),
                Value::Array(musts.iter().map(|c| c.to_dsl()).collect()),
            );
        }
        if !filters.is_empty() {
            bool_query.insert(
                "filter".to_string(),
                Value::Array(filters.iter().map(|c| c.to_dsl()).collect()),
            );
        }

        json!({ "query": { "bool": Value::Object(bool_query) } })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_all_body() {
        let body = QueryExpression::match_all().to_body();
        assert_eq!(body, json!({ "query": { "match_all": {} } }));
    }

    #[test]
    fn test_clause_dsl() {
        let clause = Clause::Match {
            field: fields::NAME,
            text: "phone".to_string(),
        };
        assert_eq!(clause.to_dsl(), json!({ "match": { "name": "phone" } }));

        let clause = Clause::Range {
            field: fields::PRICE,
            gte: 10.0,
            lte: 50.0,
        };
        assert_eq!(
            clause.to_dsl(),
            json!({ "range": { "price": { "gte": 10.0, "lte": 50.0 } } })
        );
    }

    #[test]
    fn test_filters_only_omits_must() {
        let body = QueryExpression::match_all()
            .with_clause(Clause::Term {
                field: fields::CATEGORY,
                value: "Books".to_string(),
            })
            .to_body();

        assert!(body["query"]["bool"].get("must").is_none());
        assert_eq!(
            body["query"]["bool"]["filter"],
            json!([{ "term": { "category": "Books" } }])
        );
    }

    #[test]
    fn test_quotes_in_text_stay_inside_the_value() {
        let hostile = r#"x"}},{"match_all":{}}"#;
        let body = QueryExpression::match_all()
            .with_clause(Clause::Match {
                field: fields::NAME,
                text: hostile.to_string(),
            })
            .to_body();

        let wire = serde_json::to_string(&body).unwrap();
        let reparsed: Value = serde_json::from_str(&wire).unwrap();
        assert_eq!(reparsed["query"]["bool"]["must"][0]["match"]["name"], hostile);
        assert!(reparsed["query"].get("match_all").is_none());
    }
}
