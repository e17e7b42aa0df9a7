//! SQL value type identifiers and their canonical names.

use core::fmt;

/// SQL value types.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeId {
    Invalid = 0,
    ParameterOffset,
    Boolean,
    TinyInt,
    SmallInt,
    Integer,
    BigInt,
    Decimal,
    Timestamp,
    Date,
    VarChar,
    VarBinary,
    Array,
    UndefinedType,
}

impl TypeId {
    pub const ALL: [TypeId; 14] = [
        TypeId::Invalid,
        TypeId::ParameterOffset,
        TypeId::Boolean,
        TypeId::TinyInt,
        TypeId::SmallInt,
        TypeId::Integer,
        TypeId::BigInt,
        TypeId::Decimal,
        TypeId::Timestamp,
        TypeId::Date,
        TypeId::VarChar,
        TypeId::VarBinary,
        TypeId::Array,
        TypeId::UndefinedType,
    ];

    /// Canonical upper-case name, as used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            TypeId::Invalid => "INVALID",
            TypeId::ParameterOffset => "PARAMETER_OFFSET",
            TypeId::Boolean => "BOOLEAN",
            TypeId::TinyInt => "TINYINT",
            TypeId::SmallInt => "SMALLINT",
            TypeId::Integer => "INTEGER",
            TypeId::BigInt => "BIGINT",
            TypeId::Decimal => "DECIMAL",
            TypeId::Timestamp => "TIMESTAMP",
            TypeId::Date => "DATE",
            TypeId::VarChar => "VARCHAR",
            TypeId::VarBinary => "VARBINARY",
            TypeId::Array => "ARRAY",
            TypeId::UndefinedType => "UDT",
        }
    }

    /// Case-insensitive reverse lookup. Unknown names map to `Invalid`.
    pub fn from_name(name: &str) -> TypeId {
        let upper = name.trim().to_ascii_uppercase();
        TypeId::ALL
            .iter()
            .copied()
            .find(|t| t.name() == upper)
            .unwrap_or(TypeId::Invalid)
    }

    /// Lookup by raw discriminant. Out-of-range values map to `Invalid`.
    pub fn from_code(code: i64) -> TypeId {
        usize::try_from(code)
            .ok()
            .and_then(|i| TypeId::ALL.get(i).copied())
            .unwrap_or(TypeId::Invalid)
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_lookup() {
        for t in TypeId::ALL {
            assert_eq!(TypeId::from_name(t.name()), t);
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(TypeId::from_name("varchar"), TypeId::VarChar);
        assert_eq!(TypeId::from_name("BigInt"), TypeId::BigInt);
        assert_eq!(TypeId::from_name("udt"), TypeId::UndefinedType);
    }

    #[test]
    fn unknown_name_is_invalid() {
        assert_eq!(TypeId::from_name("TEXT"), TypeId::Invalid);
        assert_eq!(TypeId::from_name(""), TypeId::Invalid);
    }

    #[test]
    fn codes_match_discriminants() {
        for t in TypeId::ALL {
            assert_eq!(TypeId::from_code(t as i64), t);
        }
        assert_eq!(TypeId::from_code(-1), TypeId::Invalid);
        assert_eq!(TypeId::from_code(14), TypeId::Invalid);
    }

    #[test]
    fn display_uses_canonical_name() {
        assert_eq!(TypeId::Integer.to_string(), "INTEGER");
        assert_eq!(format!("{}", TypeId::UndefinedType), "UDT");
    }
}
