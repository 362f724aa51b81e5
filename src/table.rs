//! Table and column model produced by the parser and consumed by the writer

use std::fmt;

/// Normalized semantic type of a column, as written into the generated property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnType {
    Int,
    String,
    DateTime,
    NullableDateTime,
    Decimal,
    Double,
    /// The SQL type matched none of the known families
    #[default]
    Unknown,
}

impl ColumnType {
    /// The type name used in the generated property declaration
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Int => "int",
            ColumnType::String => "string",
            ColumnType::DateTime => "DateTime",
            ColumnType::NullableDateTime => "DateTime?",
            ColumnType::Decimal => "decimal",
            ColumnType::Double => "double",
            ColumnType::Unknown => "",
        }
    }

    /// Whether the generated property carries a `[StringLength]` annotation
    pub fn is_bounded_string(&self) -> bool {
        matches!(self, ColumnType::String)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One column of a `CREATE TABLE` body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Raw identifier as it appeared between backticks
    pub name: String,
    pub ty: ColumnType,
    /// `true` unless the definition says `NOT NULL`
    pub nullable: bool,
    /// Bound of a `varchar(N)` column, zero otherwise
    pub length: u32,
    pub is_primary_key: bool,
    /// Text of the inline `COMMENT '...'`, empty when absent
    pub comment: String,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ColumnType::Unknown,
            nullable: true,
            length: 0,
            is_primary_key: false,
            comment: String::new(),
        }
    }
}

/// A parsed table: its name and columns in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub table_name: String,
    pub columns: Vec<Column>,
}

impl Table {
    /// Look up a column by its raw name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Columns flagged as part of the primary key, in declaration order
    pub fn primary_key(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.is_primary_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_type_renders_empty() {
        assert_eq!(ColumnType::Unknown.to_string(), "");
        assert_eq!(ColumnType::default(), ColumnType::Unknown);
    }

    #[test]
    fn test_only_string_is_bounded() {
        assert!(ColumnType::String.is_bounded_string());
        assert!(!ColumnType::Int.is_bounded_string());
        assert!(!ColumnType::NullableDateTime.is_bounded_string());
    }

    #[test]
    fn test_new_column_defaults() {
        let column = Column::new("id");
        assert!(column.nullable);
        assert!(!column.is_primary_key);
        assert_eq!(column.length, 0);
        assert_eq!(column.ty, ColumnType::Unknown);
        assert!(column.comment.is_empty());
    }
}
