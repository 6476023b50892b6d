//! Filtered-query builder for the data API.
//!
//! Covers exactly the query surface the panels use: equality and
//! greater-or-equal filters, ordering, and a row limit. Filters render to
//! PostgREST operator syntax (`?user_id=eq.<uuid>&date=gte.<date>`).

use std::fmt::Display;

/// Sort direction for `Query::order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    fn suffix(self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

/// A row filter for one collection.
#[derive(Debug, Clone, Default)]
pub struct Query {
    filters: Vec<(String, String)>,
    order: Option<String>,
    limit: Option<u32>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// `column = value`.
    pub fn eq(mut self, column: &str, value: impl Display) -> Self {
        self.filters.push((column.to_string(), format!("eq.{value}")));
        self
    }

    /// `column >= value`. Used for trailing-window date ranges.
    pub fn gte(mut self, column: &str, value: impl Display) -> Self {
        self.filters.push((column.to_string(), format!("gte.{value}")));
        self
    }

    pub fn order(mut self, column: &str, direction: Order) -> Self {
        self.order = Some(format!("{column}.{}", direction.suffix()));
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Render to request query parameters. `select=*` is included only for
    /// reads; mutations filter rows without projecting them.
    pub(crate) fn params(&self, with_select: bool) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if with_select {
            params.push(("select".to_string(), "*".to_string()));
        }
        params.extend(self.filters.iter().cloned());
        if let Some(order) = &self.order {
            params.push(("order".to_string(), order.clone()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        params
    }
}
