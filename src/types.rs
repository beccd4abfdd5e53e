//! Type tags and type descriptors.
//!
//! A [`Type`] classifies a [`Value`](crate::Value): a closed [`TypeTag`] plus,
//! for struct types only, the name of the struct declaration it refers to.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::name::FullName;

/// The closed set of value kinds the style DSL can express.
///
/// `Invalid` is the default and means "no type assigned".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum TypeTag {
    #[default]
    Invalid,
    Int,
    Double,
    Pixels,
    String,
    Color,
    Point,
    Sprite,
    Size,
    Transition,
    Cursor,
    Align,
    Margins,
    Font,
    Struct,
}

/// Keyword-to-tag table for the scalar type keywords.
///
/// `Struct` has no keyword: struct types are referenced by declared name.
static KEYWORDS: Lazy<HashMap<&'static str, TypeTag>> = Lazy::new(|| {
    HashMap::from([
        ("int", TypeTag::Int),
        ("double", TypeTag::Double),
        ("pixels", TypeTag::Pixels),
        ("string", TypeTag::String),
        ("color", TypeTag::Color),
        ("point", TypeTag::Point),
        ("sprite", TypeTag::Sprite),
        ("size", TypeTag::Size),
        ("transition", TypeTag::Transition),
        ("cursor", TypeTag::Cursor),
        ("align", TypeTag::Align),
        ("margins", TypeTag::Margins),
        ("font", TypeTag::Font),
    ])
});

impl TypeTag {
    /// Looks up the tag for a DSL type keyword like `pixels` or `color`.
    ///
    /// Returns `None` for unknown keywords; struct names are not keywords.
    pub fn from_keyword(keyword: &str) -> Option<TypeTag> {
        KEYWORDS.get(keyword).copied()
    }

    /// Returns the DSL keyword for this tag, if it has one.
    pub fn keyword(self) -> Option<&'static str> {
        KEYWORDS
            .iter()
            .find(|(_, tag)| **tag == self)
            .map(|(keyword, _)| *keyword)
    }
}

/// A value's type: a tag plus, for [`TypeTag::Struct`] only, the name of the
/// struct declaration.
///
/// Two types are equal iff their tags are equal and, for struct types, their
/// names are equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Type {
    pub tag: TypeTag,
    /// Only set when `tag` is [`TypeTag::Struct`].
    pub name: FullName,
}

impl Type {
    /// A type for any non-struct tag.
    pub fn plain(tag: TypeTag) -> Self {
        Self {
            tag,
            name: FullName::new(),
        }
    }

    /// The type of values conforming to the named struct declaration.
    pub fn structure(name: FullName) -> Self {
        Self {
            tag: TypeTag::Struct,
            name,
        }
    }

    /// Returns true unless the tag is [`TypeTag::Invalid`].
    pub fn is_set(&self) -> bool {
        self.tag != TypeTag::Invalid
    }
}
