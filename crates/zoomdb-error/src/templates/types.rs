//! Type-system errors: casts, range checks, mismatches.

use zoomdb_common::printf::Arg;
use zoomdb_common::TypeId;

use super::{
    CAST, INCOMPATIBLE_TYPE, NUMERIC_OUT_OF_RANGE, TYPE_MISMATCH, UNKNOWN_TYPE,
    VALUE_OUT_OF_RANGE_FLOAT, VALUE_OUT_OF_RANGE_INT, VALUE_TOO_LONG,
};
use crate::error::ZError;

/// Direction of a numeric range violation. The discriminant is what the
/// message prints.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericFault {
    Underflow = 1,
    Overflow = 2,
}

impl ZError {
    /// `value` of type `from` does not fit in `to`.
    pub fn value_out_of_range(from: TypeId, value: i64, to: TypeId) -> Self {
        VALUE_OUT_OF_RANGE_INT.format_with(&[
            Arg::from(from.name()),
            Arg::from(value),
            Arg::from(to.name()),
        ])
    }

    pub fn value_out_of_range_float(from: TypeId, value: f64, to: TypeId) -> Self {
        VALUE_OUT_OF_RANGE_FLOAT.format_with(&[
            Arg::from(from.name()),
            Arg::from(value),
            Arg::from(to.name()),
        ])
    }

    /// A variable-length value exceeds `length`.
    pub fn value_too_long(ty: TypeId, length: usize) -> Self {
        VALUE_TOO_LONG.format_with(&[Arg::from(ty.name()), Arg::from(length)])
    }

    pub fn cast(from: TypeId, to: TypeId) -> Self {
        CAST.format_with(&[Arg::from(from.name()), Arg::from(to.name())])
    }

    /// `detail` is appended directly after the code.
    pub fn unknown_type(code: i64, detail: &str) -> Self {
        UNKNOWN_TYPE.format_with(&[Arg::from(code), Arg::from(detail)])
    }

    pub fn type_mismatch(actual: TypeId, expected: TypeId, detail: &str) -> Self {
        TYPE_MISMATCH.format_with(&[
            Arg::from(actual.name()),
            Arg::from(expected.name()),
            Arg::from(detail),
        ])
    }

    pub fn numeric_out_of_range(detail: &str, fault: NumericFault) -> Self {
        NUMERIC_OUT_OF_RANGE.format_with(&[Arg::from(detail), Arg::from(fault as i32)])
    }

    /// `code` is a raw type discriminant; unknown codes print as `INVALID`.
    pub fn incompatible_type(code: i64, detail: &str) -> Self {
        let ty = TypeId::from_code(code);
        INCOMPATIBLE_TYPE.format_with(&[Arg::from(ty.name()), Arg::from(detail)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::ErrorKind;

    #[test]
    fn integer_out_of_range() {
        let e = ZError::value_out_of_range(TypeId::BigInt, 300, TypeId::TinyInt);
        assert_eq!(
            e.message(),
            "Conversion: Type BIGINT with value 300 can't be cast as TINYINT \
             because the value is out of range for the destination type"
        );
        assert_eq!(e.kind(), ErrorKind::Conversion);
    }

    #[test]
    fn negative_integer_out_of_range() {
        let e = ZError::value_out_of_range(TypeId::Integer, i64::MIN, TypeId::SmallInt);
        assert!(e.message().contains("with value -9223372036854775808 can't"));
    }

    #[test]
    fn float_out_of_range() {
        let e = ZError::value_out_of_range_float(TypeId::Decimal, 1.5e10, TypeId::Integer);
        assert!(e.message().starts_with(
            "Conversion: Type DECIMAL with value 15000000000.000000 can't be cast as INTEGER"
        ));
    }

    #[test]
    fn too_long() {
        let e = ZError::value_too_long(TypeId::VarChar, 10);
        assert_eq!(
            e.message(),
            "Out of Range: The value is too long to fit into type VARCHAR(10)"
        );
        assert_eq!(e.kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn cast() {
        let e = ZError::cast(TypeId::Boolean, TypeId::Timestamp);
        assert_eq!(e.message(), "Conversion: Type BOOLEAN can't be cast as TIMESTAMP");
    }

    #[test]
    fn unknown_type() {
        let e = ZError::unknown_type(99, " in catalog entry");
        assert_eq!(e.message(), "Unknown Type: Unknown type 99 in catalog entry");
        assert_eq!(ZError::unknown_type(7, "").message(), "Unknown Type: Unknown type 7");
    }

    #[test]
    fn mismatch() {
        let e = ZError::type_mismatch(TypeId::Integer, TypeId::VarChar, "in comparison");
        assert_eq!(
            e.message(),
            "Mismatch Type: Type INTEGER does not match with VARCHAR in comparison"
        );
    }

    #[test]
    fn numeric_faults() {
        assert_eq!(
            ZError::numeric_out_of_range("sum", NumericFault::Overflow).message(),
            "Out of Range: sum 2"
        );
        assert_eq!(
            ZError::numeric_out_of_range("product", NumericFault::Underflow).message(),
            "Out of Range: product 1"
        );
    }

    #[test]
    fn incompatible() {
        let e = ZError::incompatible_type(TypeId::Boolean as i64, "for addition");
        assert_eq!(e.message(), "Incompatible Type: Incompatible type BOOLEAN for addition");
    }

    #[test]
    fn incompatible_unknown_code() {
        let e = ZError::incompatible_type(1000, "from wire");
        assert_eq!(e.message(), "Incompatible Type: Incompatible type INVALID from wire");
        let e = ZError::incompatible_type(-3, "");
        assert_eq!(e.message(), "Incompatible Type: Incompatible type INVALID ");
    }

    #[test]
    fn user_text_is_not_a_template() {
        let e = ZError::type_mismatch(TypeId::Date, TypeId::Array, "near '%s%d'");
        assert!(e.message().ends_with("ARRAY near '%s%d'"));
    }
}
