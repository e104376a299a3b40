use serde::{Deserialize, Serialize};

/// Operation type token understood by the backend filter grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationType {
    /// Equality (`eq`)
    #[serde(rename = "eq")]
    Eq,
    /// Case-insensitive substring match (`ilike`)
    #[serde(rename = "ilike")]
    ILike,
    /// Set membership (`in`)
    #[serde(rename = "in")]
    In,
    /// String set membership (`inStrings`)
    #[serde(rename = "inStrings")]
    InStrings,
    /// Not equal to null (`neNull`)
    #[serde(rename = "neNull")]
    NeNull,
    /// Greater or equal (`gte`)
    #[serde(rename = "gte")]
    Gte,
    /// Less or equal (`lte`)
    #[serde(rename = "lte")]
    Lte,
}

impl OperationType {
    /// Token as it appears in `filter[i][type]=...`
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Eq => "eq",
            OperationType::ILike => "ilike",
            OperationType::In => "in",
            OperationType::InStrings => "inStrings",
            OperationType::NeNull => "neNull",
            OperationType::Gte => "gte",
            OperationType::Lte => "lte",
        }
    }

    /// `in` and `inStrings` accept an array value in a single clause
    pub fn is_set_membership(&self) -> bool {
        matches!(self, OperationType::In | OperationType::InStrings)
    }
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value carried by a filter clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClauseValue {
    Single(String),
    Multiple(Vec<String>),
}

impl From<&str> for ClauseValue {
    fn from(value: &str) -> Self {
        ClauseValue::Single(value.to_string())
    }
}

impl From<String> for ClauseValue {
    fn from(value: String) -> Self {
        ClauseValue::Single(value)
    }
}

impl From<Vec<String>> for ClauseValue {
    fn from(values: Vec<String>) -> Self {
        ClauseValue::Multiple(values)
    }
}

/// One backend filter clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterClause {
    pub field: String,
    #[serde(rename = "type")]
    pub op: OperationType,
    pub value: ClauseValue,
}

impl FilterClause {
    pub fn new(field: impl Into<String>, op: OperationType, value: impl Into<ClauseValue>) -> Self {
        Self {
            field: field.into(),
            op,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// One backend order clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderClause {
    pub field: String,
    pub dir: SortDirection,
}

/// Compiled list query, ready for query-string serialization.
///
/// `limit` and `offset` are derived from the page and cannot be set
/// separately: `limit = pageSize`, `offset = pageIndex * pageSize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListQuery {
    limit: u64,
    offset: u64,
    filter: Vec<FilterClause>,
    order: Vec<OrderClause>,
}

impl ListQuery {
    /// `None` if `page_index * page_size` overflows
    pub fn for_page(
        page_index: u64,
        page_size: u64,
        filter: Vec<FilterClause>,
        order: Vec<OrderClause>,
    ) -> Option<Self> {
        let offset = page_index.checked_mul(page_size)?;
        Some(Self {
            limit: page_size,
            offset,
            filter,
            order,
        })
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn filter(&self) -> &[FilterClause] {
        &self.filter
    }

    pub fn order(&self) -> &[OrderClause] {
        &self.order
    }
}
