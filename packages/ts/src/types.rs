use bitflags::bitflags;
use std::fmt;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TypeFlags: u32 {
        const ANY = 1;
        const UNKNOWN = 1 << 1;
        const STRING = 1 << 2;
        const NUMBER = 1 << 3;
        const BOOLEAN = 1 << 4;
        const ENUM = 1 << 5;
        const BIGINT = 1 << 6;
        const STRING_LITERAL = 1 << 7;
        const NUMBER_LITERAL = 1 << 8;
        const BOOLEAN_LITERAL = 1 << 9;
        const VOID = 1 << 14;
        const UNDEFINED = 1 << 15;
        const NULL = 1 << 16;
        const NEVER = 1 << 17;
        const TYPE_PARAMETER = 1 << 18;
        const OBJECT = 1 << 19;
        const UNION = 1 << 20;

        const NULLABLE = Self::UNDEFINED.bits() | Self::NULL.bits();
        const ANY_OR_UNKNOWN = Self::ANY.bits() | Self::UNKNOWN.bits();
    }
}

/// A resolved type from the host type checker.
///
/// Types compare structurally: two unions with the same members in the same
/// order are the same type. This stands in for the reference identity the
/// host checker gives its interned types.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Type {
    flags: TypeFlags,
    name: String,
    types: Vec<Type>,
}

impl Type {
    fn intrinsic(flags: TypeFlags, name: &str) -> Self {
        Type {
            flags,
            name: name.to_string(),
            types: Vec::new(),
        }
    }

    pub fn any() -> Self {
        Self::intrinsic(TypeFlags::ANY, "any")
    }

    pub fn unknown() -> Self {
        Self::intrinsic(TypeFlags::UNKNOWN, "unknown")
    }

    pub fn string() -> Self {
        Self::intrinsic(TypeFlags::STRING, "string")
    }

    pub fn number() -> Self {
        Self::intrinsic(TypeFlags::NUMBER, "number")
    }

    pub fn boolean() -> Self {
        Self::intrinsic(TypeFlags::BOOLEAN, "boolean")
    }

    pub fn null() -> Self {
        Self::intrinsic(TypeFlags::NULL, "null")
    }

    pub fn undefined() -> Self {
        Self::intrinsic(TypeFlags::UNDEFINED, "undefined")
    }

    pub fn void() -> Self {
        Self::intrinsic(TypeFlags::VOID, "void")
    }

    pub fn never() -> Self {
        Self::intrinsic(TypeFlags::NEVER, "never")
    }

    pub fn string_literal(value: &str) -> Self {
        Type {
            flags: TypeFlags::STRING_LITERAL,
            name: format!("\"{}\"", value),
            types: Vec::new(),
        }
    }

    /// A class, interface or object literal type.
    pub fn object(name: impl Into<String>) -> Self {
        Type {
            flags: TypeFlags::OBJECT,
            name: name.into(),
            types: Vec::new(),
        }
    }

    /// Builds a union, flattening nested unions and dropping duplicates.
    ///
    /// `any` and `unknown` absorb every other member, `never` disappears, and
    /// a union of one member is that member.
    pub fn union(types: impl IntoIterator<Item = Type>) -> Self {
        let mut members: Vec<Type> = Vec::new();
        for ty in types {
            let flattened = if ty.is_union() { ty.types } else { vec![ty] };
            for member in flattened {
                if !members.contains(&member) {
                    members.push(member);
                }
            }
        }

        if let Some(top) = members
            .iter()
            .find(|t| t.flags.intersects(TypeFlags::ANY_OR_UNKNOWN))
        {
            return top.clone();
        }
        members.retain(|t| !t.flags.contains(TypeFlags::NEVER));

        match members.len() {
            0 => Type::never(),
            1 => members.remove(0),
            _ => Type {
                flags: TypeFlags::UNION,
                name: members
                    .iter()
                    .map(|t| t.name.as_str())
                    .collect::<Vec<_>>()
                    .join(" | "),
                types: members,
            },
        }
    }

    pub fn flags(&self) -> TypeFlags {
        self.flags
    }

    pub fn is_union(&self) -> bool {
        self.flags.contains(TypeFlags::UNION)
    }

    /// Union members, empty for non-union types.
    pub fn types(&self) -> &[Type] {
        &self.types
    }

    pub fn is_nullable(&self) -> bool {
        if self.is_union() {
            self.types.iter().any(Type::is_nullable)
        } else {
            self.flags.intersects(TypeFlags::NULLABLE | TypeFlags::VOID)
        }
    }

    /// The type with `null`, `undefined` and `void` removed.
    pub fn get_non_nullable_type(&self) -> Type {
        if self.is_union() {
            Type::union(self.types.iter().filter(|t| !t.is_nullable()).cloned())
        } else if self.is_nullable() {
            Type::never()
        } else {
            self.clone()
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
