//! C# entity class generation

use crate::naming::to_pascal_case;
use crate::table::{Column, Table};
use std::fmt;

/// Interface implemented by every generated entity
pub const ENTITY_INTERFACE: &str = "IEntity";

/// One templated piece of the generated class, keyed by its role
#[derive(Debug, Clone, Copy)]
enum Fragment<'a> {
    Summary(&'a str),
    Table(&'a str),
    Class(&'a str),
    Key,
    Required,
    Column(&'a str),
    StringLength(u32),
    Property { ty: &'a str, name: &'a str },
}

impl fmt::Display for Fragment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Summary(text) => {
                writeln!(f, "/// <summary>")?;
                writeln!(f, "/// {}", text)?;
                writeln!(f, "/// </summary>")
            }
            Fragment::Table(name) => writeln!(f, "[Table(\"{}\")]", name),
            Fragment::Class(name) => writeln!(f, "public class {} : {}", name, ENTITY_INTERFACE),
            Fragment::Key => writeln!(f, "[Key]"),
            Fragment::Required => writeln!(f, "[Required]"),
            Fragment::Column(name) => writeln!(f, "[Column(\"{}\")]", name),
            Fragment::StringLength(length) => writeln!(f, "[StringLength({})]", length),
            Fragment::Property { ty, name } => {
                writeln!(f, "public {} {} {{ get; set; }}", ty, name)
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EntityWriter;

impl EntityWriter {
    pub fn new() -> Self {
        Self
    }

    /// Render `table` as a class named `entity_name`
    ///
    /// Output is a pure function of the inputs: the class-level summary is
    /// left blank, and each column gets its comment, `[Key]`/`[Required]`
    /// markers, a `[Column]` mapping, a `[StringLength]` for strings and an
    /// auto-property.
    pub fn generate(&self, table: &Table, entity_name: &str) -> String {
        let mut out = String::new();
        push(&mut out, Fragment::Summary(""));
        push(&mut out, Fragment::Table(&table.table_name));
        push(&mut out, Fragment::Class(entity_name));
        out.push_str("{\n");

        for (i, column) in table.columns.iter().enumerate() {
            if i != 0 {
                out.push('\n');
            }
            self.write_column(&mut out, column);
        }

        out.push_str("}\n");
        out
    }

    fn write_column(&self, out: &mut String, column: &Column) {
        push(out, Fragment::Summary(&column.comment));
        if column.is_primary_key {
            push(out, Fragment::Key);
        }
        if !column.nullable {
            push(out, Fragment::Required);
        }
        push(out, Fragment::Column(&column.name));
        if column.ty.is_bounded_string() {
            push(out, Fragment::StringLength(column.length));
        }
        let name = to_pascal_case(&column.name);
        push(
            out,
            Fragment::Property {
                ty: column.ty.as_str(),
                name: &name,
            },
        );
    }
}

fn push(out: &mut String, fragment: Fragment<'_>) {
    out.push_str(&fragment.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragments() {
        assert_eq!(
            Fragment::Summary("Full name").to_string(),
            "/// <summary>\n/// Full name\n/// </summary>\n"
        );
        assert_eq!(Fragment::Table("users").to_string(), "[Table(\"users\")]\n");
        assert_eq!(
            Fragment::Class("User").to_string(),
            "public class User : IEntity\n"
        );
        assert_eq!(Fragment::StringLength(32).to_string(), "[StringLength(32)]\n");
        assert_eq!(
            Fragment::Property { ty: "int", name: "Id" }.to_string(),
            "public int Id { get; set; }\n"
        );
    }

    #[test]
    fn test_empty_table() {
        let table = Table {
            table_name: "empty".to_string(),
            columns: vec![],
        };
        let code = EntityWriter::new().generate(&table, "Empty");
        assert_eq!(
            code,
            "/// <summary>\n/// \n/// </summary>\n[Table(\"empty\")]\npublic class Empty : IEntity\n{\n}\n"
        );
    }
}
