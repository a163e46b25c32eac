use crate::codec;
use crate::core::{OrmError, Value};
use crate::schema::Descriptor;

/// A record type mapped to one table.
///
/// Implementations are mechanical and mirror the field list declared in
/// [`Record::descriptor`]; the decode order is the flattened column list
/// (own scalars first, then each relation in declaration order), while
/// [`Record::insert_args`] follows plain declaration order.
pub trait Record: Sized {
    /// Schema descriptor; must return the same `'static` descriptor on
    /// every call, or cached SQL and scan slots drift apart.
    fn descriptor() -> &'static Descriptor;

    /// Primary key value (field 0 by convention).
    fn record_id(&self) -> i64;

    /// Stores a generated primary key into field 0.
    fn assign_id(&mut self, id: i64);

    /// Reconstructs an instance from a flattened row starting at `offset`.
    /// Returns the instance and the offset one past the last consumed slot,
    /// so callers can chain several record types across one row.
    fn from_row(values: &[Value], offset: usize) -> Result<(Self, usize), OrmError>;

    /// Insert arguments in field-declaration order. Relation fields
    /// contribute the referenced record's id; the referenced record must
    /// already be persisted, no cascading insert happens.
    fn insert_args(&self) -> Vec<Value>;
}

/// A fixed-width row of several independent record types, as produced by
/// a multi-root join query. Elements are `Option` because a left outer
/// join may produce no row for a root; an absent root decodes to `None`
/// while still consuming its full flattened width.
pub trait RecordSet: Sized {
    fn descriptors() -> Vec<&'static Descriptor>;

    fn decode(values: &[Value]) -> Result<Self, OrmError>;
}

macro_rules! impl_record_set {
    ($($name:ident),+) => {
        impl<$($name: Record),+> RecordSet for ($(Option<$name>,)+) {
            fn descriptors() -> Vec<&'static Descriptor> {
                vec![$($name::descriptor()),+]
            }

            fn decode(values: &[Value]) -> Result<Self, OrmError> {
                let mut at = 0usize;
                let row = ($(
                    {
                        let (record, next) = codec::decode_optional::<$name>(values, at)?;
                        at = next;
                        record
                    },
                )+);
                if at != values.len() {
                    return Err(OrmError::ShapeMismatch {
                        expected: at,
                        actual: values.len(),
                    });
                }
                Ok(row)
            }
        }
    };
}

impl_record_set!(A);
impl_record_set!(A, B);
impl_record_set!(A, B, C);
impl_record_set!(A, B, C, D);
