use crate::schema::Descriptor;

/// Compiles the insert statement for one record type:
/// `insert into <table>(<columns>) values($1..$N)`.
///
/// Columns are every field in declaration order, relation fields as
/// `<Name>_id`; the table name is the lowercased type name.
pub fn compile_insert(descriptor: &Descriptor) -> String {
    let columns: Vec<String> = descriptor
        .fields
        .iter()
        .map(crate::schema::FieldDef::column_name)
        .collect();
    let placeholders: Vec<String> = (1..=descriptor.fields.len())
        .map(|i| format!("${i}"))
        .collect();
    format!(
        "insert into {}({}) values({})",
        descriptor.table(),
        columns.join(", "),
        placeholders.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldDef, FieldKind, ScalarKind};

    static MASTER1: Descriptor = Descriptor {
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
                kind: FieldKind::Relation(|| &MASTER1),
            },
            FieldDef {
                name: "Name",
                kind: FieldKind::Scalar(ScalarKind::Text),
            },
        ],
    };

    #[test]
    fn test_insert_scalars_only() {
        assert_eq!(
            compile_insert(&MASTER1),
            "insert into master1(Id, Name) values($1, $2)"
        );
    }

    #[test]
    fn test_insert_with_relation_column() {
        assert_eq!(
            compile_insert(&DETAIL),
            "insert into detail(Id, Master1_id, Name) values($1, $2, $3)"
        );
    }
}
