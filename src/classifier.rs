//! Query classification module
//!
//! Inspects the shape of an identifier string and maps it to the single
//! upstream registry parameter that can answer it. Rules are evaluated
//! top to bottom; the first match wins.

use crate::error::{LookupError, Result};

/// The identifier shapes the upstream registry understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// National identity number, prefixed "CM" (male) or "CF" (female)
    NationalId,
    /// Tax identification number, always 10 characters
    TaxId,
    /// Business registration number, 14 characters or longer
    BusinessId,
}

impl QueryKind {
    /// Upstream query parameter carrying this identifier kind.
    pub fn param_name(&self) -> &'static str {
        match self {
            QueryKind::NationalId => "nin",
            QueryKind::TaxId => "tin",
            QueryKind::BusinessId => "ursb",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QueryKind::NationalId => "national ID",
            QueryKind::TaxId => "tax ID",
            QueryKind::BusinessId => "business registration number",
        }
    }
}

impl std::fmt::Display for QueryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn is_national_id(query: &str) -> bool {
    let lower = query.to_lowercase();
    lower.starts_with("cm") || lower.starts_with("cf")
}

fn is_tax_id(query: &str) -> bool {
    query.chars().count() == 10
}

fn is_business_id(query: &str) -> bool {
    query.chars().count() >= 14
}

/// Ordered classification rules. Precedence matters: a 10-character string
/// starting with "cm" is a national ID, not a tax ID.
const RULES: &[(fn(&str) -> bool, QueryKind)] = &[
    (is_national_id, QueryKind::NationalId),
    (is_tax_id, QueryKind::TaxId),
    (is_business_id, QueryKind::BusinessId),
];

/// Classify an identifier by shape.
///
/// Inputs matching none of the rules are an explicit error, not a silent
/// no-result: the caller turns this into an "unrecognized query format"
/// failure without ever touching the network.
pub fn classify(query: &str) -> Result<QueryKind> {
    for (matches, kind) in RULES {
        if matches(query) {
            return Ok(*kind);
        }
    }
    Err(LookupError::UnrecognizedQuery(query.to_string()))
}
