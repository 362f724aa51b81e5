//! sql2entity
//!
//! Turns a MySQL `CREATE TABLE` statement into an annotated C# entity class.
//! [`build_table`] parses the statement into a [`Table`], and
//! [`EntityWriter`] renders it. [`generate_file`] runs both against files
//! on disk.

pub mod config;
pub mod error;
pub mod naming;
pub mod parser;
pub mod pipeline;
pub mod table;
pub mod writer;

pub use config::GeneratorConfig;
pub use error::{ParseError, Sql2EntityError};
pub use naming::to_pascal_case;
pub use parser::{build_table, parse_column};
pub use pipeline::{generate_file, generate_file_to};
pub use table::{Column, ColumnType, Table};
pub use writer::EntityWriter;
