use serde::{Deserialize, Serialize};

/// Column type of a scalar field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScalarKind {
    Int,
    BigInt,
    Real,
    Double,
    Timestamp,
    Text,
    Bytes,
}

impl ScalarKind {
    /// Column type clause used by DDL generation. Every kind maps to a
    /// type; there is no unrecognized fallthrough.
    pub const fn sql_type(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::BigInt => "bigint",
            Self::Real => "float",
            Self::Double => "double",
            Self::Timestamp => "timestamp",
            Self::Text => "varchar(255)",
            Self::Bytes => "blob",
        }
    }
}

/// Classification of one record field.
///
/// A relation target is a function pointer rather than a reference so
/// descriptors can be plain `static` items without initialization order
/// concerns.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Scalar(ScalarKind),
    Relation(fn() -> &'static Descriptor),
}

/// One field of a record type, in declaration order.
#[derive(Debug)]
pub struct FieldDef {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldDef {
    pub const fn is_relation(&self) -> bool {
        matches!(self.kind, FieldKind::Relation(_))
    }

    /// Target descriptor for a relation field, `None` for scalars.
    pub fn target(&self) -> Option<&'static Descriptor> {
        match self.kind {
            FieldKind::Relation(target) => Some(target()),
            FieldKind::Scalar(_) => None,
        }
    }

    /// Column name backing this field: the field name itself for scalars,
    /// `<Name>_id` for relations.
    pub fn column_name(&self) -> String {
        if self.is_relation() {
            format!("{}_id", self.name)
        } else {
            self.name.to_string()
        }
    }
}

/// Schema descriptor of one record type: a named, ordered field list.
///
/// Field order is semantically significant: it is select-list order,
/// insert-column order and positional-placeholder order. Field 0 is the
/// numeric primary key by convention (assumed, not validated).
#[derive(Debug)]
pub struct Descriptor {
    pub name: &'static str,
    pub fields: &'static [FieldDef],
}

impl Descriptor {
    /// Table name used by INSERT and the sequence generator.
    pub fn table(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn scalar_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| !f.is_relation())
    }

    pub fn relation_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| f.is_relation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static MASTER: Descriptor = Descriptor {
        name: "Master1",
        fields: &[
            FieldDef {
                name: "Id",
                kind: FieldKind::Scalar(ScalarKind::BigInt),
            },
            FieldDef {
                name: "Name",
                kind: FieldKind::Scalar(ScalarKind::Text),
            },
        ],
    };

    static DETAIL: Descriptor = Descriptor {
        name: "Detail",
        fields: &[
            FieldDef {
                name: "Id",
                kind: FieldKind::Scalar(ScalarKind::BigInt),
            },
            FieldDef {
                name: "Master1",
                kind: FieldKind::Relation(|| &MASTER),
            },
            FieldDef {
                name: "Name",
                kind: FieldKind::Scalar(ScalarKind::Text),
            },
        ],
    };

    #[test]
    fn test_table_name_is_lowercased() {
        assert_eq!(DETAIL.table(), "detail");
    }

    #[test]
    fn test_column_names() {
        assert_eq!(DETAIL.fields[0].column_name(), "Id");
        assert_eq!(DETAIL.fields[1].column_name(), "Master1_id");
        assert_eq!(DETAIL.fields[2].column_name(), "Name");
    }

    #[test]
    fn test_relation_target() {
        let target = DETAIL.fields[1].target().unwrap();
        assert_eq!(target.name, "Master1");
        assert!(DETAIL.fields[0].target().is_none());
    }

    #[test]
    fn test_field_partition() {
        assert_eq!(DETAIL.scalar_fields().count(), 2);
        assert_eq!(DETAIL.relation_fields().count(), 1);
    }

    #[test]
    fn test_sql_types_are_total() {
        for kind in [
            ScalarKind::Int,
            ScalarKind::BigInt,
            ScalarKind::Real,
            ScalarKind::Double,
            ScalarKind::Timestamp,
            ScalarKind::Text,
            ScalarKind::Bytes,
        ] {
            assert!(!kind.sql_type().is_empty());
        }
    }
}
