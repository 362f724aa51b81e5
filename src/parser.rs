//! `CREATE TABLE` statement parsing
//!
//! The parser is line oriented. Everything up to the first `CREATE TABLE `
//! marker is discarded, the table name is taken from the first backtick-quoted
//! identifier after it, and every following line is classified as a column
//! definition, a primary-key declaration or something to skip (indexes,
//! engine options, the closing parenthesis).

use crate::error::ParseError;
use crate::table::{Column, ColumnType, Table};
use regex::Regex;
use std::sync::LazyLock;

const HEADER_MARKER: &str = "CREATE TABLE ";
const PRIMARY_KEY_MARKER: &str = "PRIMARY KEY";
const NOT_NULL_MARKER: &str = "NOT NULL";

static VARCHAR_LENGTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^varchar\((\d+)\)").expect("varchar pattern is valid"));

#[derive(Debug, Clone, Copy)]
enum TypeFamily {
    Int,
    Varchar,
    Date,
    Decimal,
    Double,
}

/// Checked in order against the SQL type token; first match wins.
const TYPE_RULES: &[(&str, TypeFamily)] = &[
    ("int", TypeFamily::Int),
    ("varchar", TypeFamily::Varchar),
    ("date", TypeFamily::Date),
    ("decimal", TypeFamily::Decimal),
    ("double", TypeFamily::Double),
];

/// What a single line of the table body turned out to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A column definition; `declares_key` is set for an inline `PRIMARY KEY`
    Column { column: Column, declares_key: bool },
    /// A table-level `PRIMARY KEY (...)` line
    PrimaryKey,
    Other,
}

/// Build a [`Table`] from the text of a `CREATE TABLE` statement
pub fn build_table(raw: &str) -> Result<Table, ParseError> {
    let (_, rest) = raw
        .split_once(HEADER_MARKER)
        .ok_or(ParseError::MissingHeader)?;
    // Only the first statement is considered
    let body = rest.split(HEADER_MARKER).next().unwrap_or(rest);

    let table_name = body
        .split('`')
        .nth(1)
        .ok_or(ParseError::MissingTableName)?
        .to_string();

    let mut columns: Vec<Column> = Vec::new();
    for line in body.lines().skip(1) {
        match classify_line(line) {
            LineKind::Column {
                column,
                declares_key,
            } => {
                columns.push(column);
                if declares_key {
                    mark_primary_key(&mut columns, line);
                }
            }
            LineKind::PrimaryKey => mark_primary_key(&mut columns, line),
            LineKind::Other => {
                if !line.trim().is_empty() {
                    log::debug!("Skipping line: {}", line.trim());
                }
            }
        }
    }

    Ok(Table {
        table_name,
        columns,
    })
}

/// Classify one line of the statement body
pub fn classify_line(line: &str) -> LineKind {
    let declares_key = line.contains(PRIMARY_KEY_MARKER);
    match parse_column(line) {
        Some(column) => LineKind::Column {
            column,
            declares_key,
        },
        None if declares_key => LineKind::PrimaryKey,
        None => LineKind::Other,
    }
}

/// Parse a column definition line such as
/// `` `name` varchar(32) DEFAULT NULL COMMENT 'Full name', ``
///
/// Returns `None` when the first token holds no backtick, which rules out
/// blank lines, key and index lines and the closing parenthesis.
pub fn parse_column(line: &str) -> Option<Column> {
    let tokens: Vec<&str> = line.trim().split(' ').collect();
    let first = tokens.first().copied().unwrap_or_default();
    if !first.contains('`') {
        return None;
    }

    let mut column = Column::new(first.split('`').nth(1).unwrap_or_default());
    column.nullable = !line.contains(NOT_NULL_MARKER);

    let type_token = tokens.get(1).copied().unwrap_or_default();
    let (ty, length) = resolve_type(type_token, column.nullable);
    column.ty = ty;
    column.length = length;

    if let Some(comment) = line.split('\'').nth(1) {
        column.comment = comment.to_string();
    }

    Some(column)
}

fn resolve_type(token: &str, nullable: bool) -> (ColumnType, u32) {
    let family = TYPE_RULES
        .iter()
        .find(|(needle, _)| token.contains(needle))
        .map(|(_, family)| *family);

    match family {
        Some(TypeFamily::Int) => (ColumnType::Int, 0),
        Some(TypeFamily::Varchar) => {
            let length = if token.contains('(') {
                varchar_length(token).unwrap_or_else(|| {
                    log::warn!("Could not read length from `{}`, using 0", token);
                    0
                })
            } else {
                0
            };
            (ColumnType::String, length)
        }
        Some(TypeFamily::Date) if nullable => (ColumnType::NullableDateTime, 0),
        Some(TypeFamily::Date) => (ColumnType::DateTime, 0),
        Some(TypeFamily::Decimal) => (ColumnType::Decimal, 0),
        Some(TypeFamily::Double) => (ColumnType::Double, 0),
        None => {
            log::debug!("Unrecognized column type `{}`", token);
            (ColumnType::Unknown, 0)
        }
    }
}

fn varchar_length(token: &str) -> Option<u32> {
    VARCHAR_LENGTH
        .captures(token)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Identifiers named on a key line: the backtick-quoted ones when present,
/// otherwise every bare word.
fn key_identifiers(line: &str) -> Vec<&str> {
    if line.contains('`') {
        line.split('`').skip(1).step_by(2).collect()
    } else {
        line.split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .filter(|s| !s.is_empty())
            .collect()
    }
}

fn mark_primary_key(columns: &mut [Column], line: &str) {
    let identifiers = key_identifiers(line);
    for column in columns.iter_mut() {
        if identifiers.contains(&column.name.as_str()) {
            log::debug!("Column `{}` is part of the primary key", column.name);
            column.is_primary_key = true;
        }
    }
}
