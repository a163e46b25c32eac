use crate::schema::{Descriptor, FieldKind};

/// Compiles the `create table` statement for one record type.
///
/// The naming contract here is load-bearing: column names/types and
/// foreign-key constraints must match exactly what the select and insert
/// compilers assume (`<Field>_id bigint` for relations, `primary key(id)`,
/// `foreign key(<Field>_id) references <Target>(id)`).
pub fn create_table(descriptor: &Descriptor) -> String {
    let mut sql = String::from("create table ");
    sql.push_str(descriptor.name);
    sql.push_str("(\r\n");
    for (i, field) in descriptor.fields.iter().enumerate() {
        if i > 0 {
            sql.push_str(",\r\n");
        }
        sql.push_str(field.name);
        match field.kind {
            FieldKind::Relation(_) => sql.push_str("_id bigint"),
            FieldKind::Scalar(kind) => {
                sql.push(' ');
                sql.push_str(kind.sql_type());
            }
        }
        sql.push_str(" not null");
    }
    sql.push_str(",\r\nprimary key(id)");
    for field in descriptor.relation_fields() {
        let Some(target) = field.target() else {
            continue;
        };
        sql.push_str(",\r\n foreign key(");
        sql.push_str(field.name);
        sql.push_str("_id) references ");
        sql.push_str(target.name);
        sql.push_str("(id)");
    }
    sql.push_str(");");
    sql
}
