//! Error types for sql2entity

use std::path::PathBuf;
use thiserror::Error;

/// Failures while turning statement text into a [`Table`](crate::Table)
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("input does not contain a `CREATE TABLE ` header")]
    MissingHeader,
    #[error("no backtick-quoted table name follows `CREATE TABLE`")]
    MissingTableName,
}

#[derive(Debug, Error)]
pub enum Sql2EntityError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("failed to read input file {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write output file {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Sql2EntityError>;
