//! Identifier checks for generated schemas
//!
//! The mapper writes entity and attribute names verbatim. Names that are not
//! plain identifiers, or that collide with reserved words, still produce
//! output but may need quoting before the SQL runs.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::models::GeneratedSchema;

static PLAIN_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// PostgreSQL reserved key words that cannot be used as bare column or table names
const RESERVED_WORDS: &[&str] = &[
    "all", "analyse", "analyze", "and", "any", "array", "as", "asc", "asymmetric", "both",
    "case", "cast", "check", "collate", "column", "constraint", "create", "current_catalog",
    "current_date", "current_role", "current_time", "current_timestamp", "current_user",
    "default", "deferrable", "desc", "distinct", "do", "else", "end", "except", "false",
    "fetch", "for", "foreign", "from", "grant", "group", "having", "in", "initially",
    "intersect", "into", "lateral", "leading", "limit", "localtime", "localtimestamp", "not",
    "null", "offset", "on", "only", "or", "order", "placing", "primary", "references",
    "returning", "select", "session_user", "some", "symmetric", "table", "then", "to",
    "trailing", "true", "union", "unique", "user", "using", "variadic", "when", "where",
    "window", "with",
];

/// Where in the schema an identifier was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Table,
    Column,
    EnumType,
}

/// Why an identifier would need attention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierProblem {
    /// Contains characters outside `[A-Za-z0-9_]` or starts with a digit
    NotPlain,
    /// A PostgreSQL reserved key word
    Reserved,
    /// A column name that appears more than once in the table
    Duplicate,
}

/// A single identifier finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierIssue {
    pub kind: IdentifierKind,
    pub name: String,
    pub problem: IdentifierProblem,
}

impl std::fmt::Display for IdentifierIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.kind {
            IdentifierKind::Table => "table",
            IdentifierKind::Column => "column",
            IdentifierKind::EnumType => "enum type",
        };
        let problem = match self.problem {
            IdentifierProblem::NotPlain => "is not a plain SQL identifier",
            IdentifierProblem::Reserved => "is a reserved word",
            IdentifierProblem::Duplicate => "appears more than once",
        };
        write!(f, "{} '{}' {}", kind, self.name, problem)
    }
}

fn check_name(kind: IdentifierKind, name: &str, issues: &mut Vec<IdentifierIssue>) {
    let problem = if !PLAIN_IDENTIFIER.is_match(name) {
        Some(IdentifierProblem::NotPlain)
    } else if RESERVED_WORDS.contains(&name.to_lowercase().as_str()) {
        Some(IdentifierProblem::Reserved)
    } else {
        None
    };

    if let Some(problem) = problem {
        issues.push(IdentifierIssue {
            kind,
            name: name.to_string(),
            problem,
        });
    }
}

/// Check every identifier of a generated schema
pub fn check_identifiers(schema: &GeneratedSchema) -> Vec<IdentifierIssue> {
    let mut issues = Vec::new();

    check_name(IdentifierKind::Table, &schema.entity, &mut issues);
    for enum_type in &schema.enum_types {
        check_name(IdentifierKind::EnumType, &enum_type.name, &mut issues);
    }

    let mut seen = HashSet::new();
    for column in &schema.columns {
        check_name(IdentifierKind::Column, &column.name, &mut issues);
        if !seen.insert(column.name.as_str()) {
            issues.push(IdentifierIssue {
                kind: IdentifierKind::Column,
                name: column.name.clone(),
                problem: IdentifierProblem::Duplicate,
            });
        }
    }

    issues
}
