//! SELECT compilation.
//!
//! One select statement fetches a record and every transitively reachable
//! many-to-one relation. Each relation field named `F` reached from alias
//! path `P` joins its target table under the alias `P_F`; the walk is
//! depth-first, so recompiling the same type yields byte-identical SQL.

use crate::core::OrmError;
use crate::schema::Descriptor;
use crate::sql::joins::{JoinKind, JoinSpec};

/// Compiles the select statement for one record type:
/// `select <flattened columns> from <Name> o <joins>`.
///
/// Pure function of the type shape; memoization lives in the statement
/// cache. The caller appends any trailing condition fragment afterwards.
pub fn compile_select(descriptor: &Descriptor) -> String {
    let mut columns = Vec::new();
    let mut joins = String::new();
    flatten(descriptor, "o", JoinKind::Inner, &mut columns, &mut joins);
    format!(
        "select {} from {} o{}",
        columns.join(", "),
        descriptor.name,
        joins
    )
}

/// Compiles a multi-root select: the flattened columns of every requested
/// type in request order, roots aliased `o1..oN` by position, joined by the
/// caller-supplied join specification (`descriptors.len()` must equal
/// `joins.len() + 1`).
///
/// Each root's own relation-fetch joins inherit that root's join kind, so a
/// left-outer root with no matching row survives as an all-null column
/// group instead of being eliminated by an inner join on its relations.
pub fn compile_multi_select(
    descriptors: &[&Descriptor],
    spec: &JoinSpec,
) -> Result<String, OrmError> {
    if descriptors.len() != spec.len() + 1 {
        return Err(OrmError::JoinCount {
            types: descriptors.len(),
            joins: spec.len(),
        });
    }
    let mut columns = Vec::new();
    let mut joins = String::new();
    for (i, descriptor) in descriptors.iter().enumerate() {
        let alias = format!("o{}", i + 1);
        let kind = if i == 0 {
            JoinKind::Inner
        } else {
            let entry = spec.kind(i - 1);
            joins.push_str(&format!(
                " {} {} {} on {}",
                entry.sql(),
                descriptor.name,
                alias,
                spec.on(i - 1)
            ));
            entry
        };
        flatten(descriptor, &alias, kind, &mut columns, &mut joins);
    }
    Ok(format!(
        "select {} from {} o1{}",
        columns.join(", "),
        descriptors[0].name,
        joins
    ))
}

/// Depth-first walk shared by both compilers: emits the type's own scalar
/// columns, then per relation field a join clause followed by the target's
/// flattened columns and nested joins.
fn flatten(
    descriptor: &Descriptor,
    path: &str,
    kind: JoinKind,
    columns: &mut Vec<String>,
    joins: &mut String,
) {
    for field in descriptor.scalar_fields() {
        columns.push(format!("{path}.{}", field.name));
    }
    for field in descriptor.relation_fields() {
        let Some(target) = field.target() else {
            continue;
        };
        let child = format!("{path}_{}", field.name);
        joins.push_str(&format!(
            " {} {} {child} on {child}.id = {path}.{}_id",
            kind.sql(),
            target.name,
            field.name
        ));
        flatten(target, &child, kind, columns, joins);
    }
}
