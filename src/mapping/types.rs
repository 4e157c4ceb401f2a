//! Fixed type and format tables
//!
//! Matching is exact and case-sensitive. Values outside these tables are
//! reported as unmapped by the mapper.

use std::str::FromStr;

use crate::models::SqlType;

/// A JSON Schema `type` value recognised by the mapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonType {
    String,
    Integer,
    Number,
    Boolean,
    Object,
    Array,
}

impl JsonType {
    pub fn sql_type(&self) -> SqlType {
        match self {
            JsonType::String => SqlType::Text,
            JsonType::Integer => SqlType::Integer,
            JsonType::Number => SqlType::Numeric,
            JsonType::Boolean => SqlType::Boolean,
            JsonType::Object | JsonType::Array => SqlType::Json,
        }
    }
}

impl FromStr for JsonType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(JsonType::String),
            "integer" => Ok(JsonType::Integer),
            "number" => Ok(JsonType::Number),
            "boolean" => Ok(JsonType::Boolean),
            "object" => Ok(JsonType::Object),
            "array" => Ok(JsonType::Array),
            _ => Err(format!("unknown type: {}", s)),
        }
    }
}

/// A JSON Schema `format` value recognised by the mapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    DateTime,
    Date,
    Time,
    Uri,
    Email,
    IdnEmail,
    Hostname,
    Duration,
}

impl Format {
    pub fn sql_type(&self) -> SqlType {
        match self {
            Format::DateTime => SqlType::Timestamp,
            Format::Date => SqlType::Date,
            Format::Time => SqlType::Time,
            Format::Uri
            | Format::Email
            | Format::IdnEmail
            | Format::Hostname
            | Format::Duration => SqlType::Text,
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date-time" => Ok(Format::DateTime),
            "date" => Ok(Format::Date),
            "time" => Ok(Format::Time),
            "uri" => Ok(Format::Uri),
            "email" => Ok(Format::Email),
            "idn-email" => Ok(Format::IdnEmail),
            "hostname" => Ok(Format::Hostname),
            "duration" => Ok(Format::Duration),
            _ => Err(format!("unknown format: {}", s)),
        }
    }
}
