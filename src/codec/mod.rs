//! Row buffer codec.
//!
//! A select statement for a record type returns one flat row per result:
//! the type's own scalar columns first, then each relation field's
//! flattened columns in declaration order, recursively. This module builds
//! the matching scan-slot list and decodes flat rows back into records.

use chrono::NaiveDateTime;

use crate::core::{OrmError, Value};
use crate::schema::{Descriptor, FieldKind, Record, ScalarKind};

/// Converts one driver value into a field's Rust type. Strict per kind;
/// a wrong variant (including `Null` where a value is required) is a
/// `TypeMismatch`, never a silent coercion.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Result<Self, OrmError>;
}

macro_rules! impl_from_value {
    ($ty:ty, $variant:ident, $expected:literal) => {
        impl FromValue for $ty {
            fn from_value(value: &Value) -> Result<Self, OrmError> {
                match value {
                    Value::$variant(v) => Ok(v.clone()),
                    other => Err(OrmError::TypeMismatch {
                        expected: $expected,
                        actual: other.kind_name(),
                    }),
                }
            }
        }
    };
}

impl_from_value!(i32, Int, "int");
impl_from_value!(i64, BigInt, "bigint");
impl_from_value!(f32, Real, "real");
impl_from_value!(f64, Double, "double");
impl_from_value!(NaiveDateTime, Timestamp, "timestamp");
impl_from_value!(String, Text, "text");
impl_from_value!(Vec<u8>, Bytes, "bytes");

/// Flattened scan-slot list for one record type: the scalar kind of every
/// column the compiled select for that type produces, in select-list order.
pub fn scan_slots(descriptor: &Descriptor) -> Vec<ScalarKind> {
    let mut slots = Vec::new();
    collect_slots(descriptor, &mut slots);
    slots
}

fn collect_slots(descriptor: &Descriptor, slots: &mut Vec<ScalarKind>) {
    for field in descriptor.fields {
        if let FieldKind::Scalar(kind) = field.kind {
            slots.push(kind);
        }
    }
    for field in descriptor.relation_fields() {
        if let Some(target) = field.target() {
            collect_slots(target, slots);
        }
    }
}

/// Number of flattened columns for one record type.
pub fn column_count(descriptor: &Descriptor) -> usize {
    let mut count = descriptor.scalar_fields().count();
    for field in descriptor.relation_fields() {
        if let Some(target) = field.target() {
            count += column_count(target);
        }
    }
    count
}

/// Consumes one scalar slot at `*at`, advancing it. Used by `Record::from_row`
/// implementations.
pub fn scalar<T: FromValue>(values: &[Value], at: &mut usize) -> Result<T, OrmError> {
    let value = values.get(*at).ok_or(OrmError::ShapeMismatch {
        expected: *at + 1,
        actual: values.len(),
    })?;
    *at += 1;
    T::from_value(value)
}

/// Decodes one root of a multi-root row. A `Null` primary-key slot means a
/// left outer join produced no row for this root: the result is `None` and
/// the offset still advances by the type's full flattened width, so the
/// next root decodes at the right position.
pub fn decode_optional<R: Record>(
    values: &[Value],
    offset: usize,
) -> Result<(Option<R>, usize), OrmError> {
    let descriptor = R::descriptor();
    let end = offset + column_count(descriptor);
    if values.len() < end {
        return Err(OrmError::ShapeMismatch {
            expected: end,
            actual: values.len(),
        });
    }
    if values[offset].is_null() {
        return Ok((None, end));
    }
    let (record, next) = R::from_row(values, offset)?;
    Ok((Some(record), next))
}
