use crate::intrinsics::see_jvm_spec;

/// A primitive type in Java.
#[doc = see_jvm_spec!(4, 3, 2)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, derive_more::Display)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum BaseType {
    /// The `byte` type.
    #[display("B")]
    Byte,
    /// The `char` type.
    #[display("C")]
    Char,
    /// The `double` type.
    #[display("D")]
    Double,
    /// The `float` type.
    #[display("F")]
    Float,
    /// The `int` type.
    #[display("I")]
    Int,
    /// The `long` type.
    #[display("J")]
    Long,
    /// The `short` type.
    #[display("S")]
    Short,
    /// The `boolean` type.
    #[display("Z")]
    Boolean,
}

impl BaseType {
    /// All the primitive types, in the order of their descriptors.
    pub const ALL: [Self; 8] = [
        Self::Byte,
        Self::Char,
        Self::Double,
        Self::Float,
        Self::Int,
        Self::Long,
        Self::Short,
        Self::Boolean,
    ];

    /// Returns the descriptor character of the type.
    #[must_use]
    pub const fn descriptor_char(self) -> char {
        match self {
            Self::Byte => 'B',
            Self::Char => 'C',
            Self::Double => 'D',
            Self::Float => 'F',
            Self::Int => 'I',
            Self::Long => 'J',
            Self::Short => 'S',
            Self::Boolean => 'Z',
        }
    }

    /// Returns the keyword used for the type in Java source code.
    #[must_use]
    pub const fn java_name(self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::Char => "char",
            Self::Double => "double",
            Self::Float => "float",
            Self::Int => "int",
            Self::Long => "long",
            Self::Short => "short",
            Self::Boolean => "boolean",
        }
    }
}

/// An error indicating that a character is not the descriptor of a primitive type.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("Invalid primitive type descriptor: {0}")]
pub struct InvalidBaseType(pub char);

impl TryFrom<char> for BaseType {
    type Error = InvalidBaseType;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'B' => Ok(Self::Byte),
            'C' => Ok(Self::Char),
            'D' => Ok(Self::Double),
            'F' => Ok(Self::Float),
            'I' => Ok(Self::Int),
            'J' => Ok(Self::Long),
            'S' => Ok(Self::Short),
            'Z' => Ok(Self::Boolean),
            c => Err(InvalidBaseType(c)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn descriptor_char_round_trip(base_type in any::<BaseType>()) {
            let c = base_type.descriptor_char();
            assert_eq!(BaseType::try_from(c), Ok(base_type));
            assert_eq!(base_type.to_string(), c.to_string());
        }
    }

    #[test]
    fn void_is_not_a_base_type() {
        assert_eq!(BaseType::try_from('V'), Err(InvalidBaseType('V')));
        assert_eq!(BaseType::try_from('L'), Err(InvalidBaseType('L')));
    }

    #[test]
    fn java_names() {
        let names = BaseType::ALL.map(BaseType::java_name);
        assert_eq!(
            names,
            ["byte", "char", "double", "float", "int", "long", "short", "boolean"]
        );
    }
}
