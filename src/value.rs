//! The tagged value union.
//!
//! A [`Value`] holds exactly one payload matching its [`Type`]. Construction
//! is keyed on the payload shape, so a tag/payload mismatch cannot be built.
//! Accessors are total: asking a value for a payload shape it does not carry
//! yields that shape's zero value, which lets traversal code probe values
//! without pre-checking the tag.

use serde::Serialize;

use crate::data::{Color, Font, Margins, Point, Size, Sprite};
use crate::name::FullName;
use crate::structure::Field;
use crate::types::{Type, TypeTag};

/// A style constant: a [`Type`] plus the matching payload.
///
/// Values are built by the parser, one constructor call per literal, and read
/// back by the emitter via [`Value::ty`] and the payload accessors.
///
/// # Example
///
/// ```rust
/// use styledef::{Color, TypeTag, Value};
///
/// let value = Value::from(Color::rgba(255, 0, 0, 255));
/// assert_eq!(value.ty().tag, TypeTag::Color);
/// assert_eq!(value.color(), Color::rgba(255, 0, 0, 255));
/// // Mismatched accessors return the zero value instead of failing.
/// assert_eq!(value.int(), 0);
/// assert_eq!(value.string(), "");
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct Value {
    ty: Type,
    payload: Payload,
    copy_of: Option<FullName>,
}

/// Owned payload storage. `None` backs both the default-constructed value and
/// typed-but-uninitialized values.
#[derive(Debug, Clone, Default, Serialize)]
enum Payload {
    #[default]
    None,
    Int(i32),
    Double(f64),
    String(String),
    Point(Point),
    Sprite(Sprite),
    Size(Size),
    Color(Color),
    Margins(Margins),
    Font(Font),
    Fields(Vec<Field>),
}

impl Value {
    fn with(ty: Type, payload: Payload) -> Self {
        Self {
            ty,
            payload,
            copy_of: None,
        }
    }

    /// A double-tagged scalar.
    pub fn double(value: f64) -> Self {
        Self::with(Type::plain(TypeTag::Double), Payload::Double(value))
    }

    /// A plain integer.
    pub fn int(value: i32) -> Self {
        Self::with(Type::plain(TypeTag::Int), Payload::Int(value))
    }

    /// A pixel quantity. The stored integer is unscaled; density scaling
    /// happens at emission time via [`px_adjust`](crate::px_adjust).
    pub fn pixels(value: i32) -> Self {
        Self::with(Type::plain(TypeTag::Pixels), Payload::Int(value))
    }

    /// A string literal.
    pub fn string(value: impl Into<String>) -> Self {
        Self::with(Type::plain(TypeTag::String), Payload::String(value.into()))
    }

    /// A transition kind token. Tokens are validated upstream; this layer
    /// stores them as strings.
    pub fn transition(value: impl Into<String>) -> Self {
        Self::with(
            Type::plain(TypeTag::Transition),
            Payload::String(value.into()),
        )
    }

    /// A cursor kind token.
    pub fn cursor(value: impl Into<String>) -> Self {
        Self::with(Type::plain(TypeTag::Cursor), Payload::String(value.into()))
    }

    /// An alignment token.
    pub fn align(value: impl Into<String>) -> Self {
        Self::with(Type::plain(TypeTag::Align), Payload::String(value.into()))
    }

    /// A struct value conforming to the named struct declaration.
    ///
    /// Field order is preserved as given and must follow declaration order;
    /// [`Struct::check_value`](crate::Struct::check_value) verifies that.
    pub fn structure(name: FullName, fields: Vec<Field>) -> Self {
        Self::with(Type::structure(name), Payload::Fields(fields))
    }

    /// A value that carries a type but no payload yet.
    ///
    /// Accessors on an uninitialized value return zero values, and
    /// [`Value::fields`] returns `None` even for struct types.
    pub fn uninitialized(ty: Type) -> Self {
        Self::with(ty, Payload::None)
    }

    /// The value's type.
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns true unless the value is default-constructed.
    pub fn is_set(&self) -> bool {
        self.ty.is_set()
    }

    /// The integer payload of an int or pixels value; `0` otherwise.
    pub fn int(&self) -> i32 {
        match self.payload {
            Payload::Int(value) => value,
            _ => 0,
        }
    }

    /// The double payload; `0.0` otherwise.
    pub fn double(&self) -> f64 {
        match self.payload {
            Payload::Double(value) => value,
            _ => 0.0,
        }
    }

    /// The string payload of a string, transition, cursor or align value;
    /// `""` otherwise.
    pub fn string(&self) -> &str {
        match &self.payload {
            Payload::String(value) => value,
            _ => "",
        }
    }

    /// The point payload; a zero point otherwise.
    pub fn point(&self) -> Point {
        match self.payload {
            Payload::Point(value) => value,
            _ => Point::default(),
        }
    }

    /// The sprite payload; a zero rectangle otherwise.
    pub fn sprite(&self) -> Sprite {
        match self.payload {
            Payload::Sprite(value) => value,
            _ => Sprite::default(),
        }
    }

    /// The size payload; a zero size otherwise.
    pub fn size(&self) -> Size {
        match self.payload {
            Payload::Size(value) => value,
            _ => Size::default(),
        }
    }

    /// The color payload; transparent black otherwise.
    pub fn color(&self) -> Color {
        match self.payload {
            Payload::Color(value) => value,
            _ => Color::default(),
        }
    }

    /// The margins payload; zero margins otherwise.
    pub fn margins(&self) -> Margins {
        match self.payload {
            Payload::Margins(value) => value,
            _ => Margins::default(),
        }
    }

    /// The font payload; an empty font otherwise.
    pub fn font(&self) -> Font {
        match &self.payload {
            Payload::Font(value) => value.clone(),
            _ => Font::default(),
        }
    }

    /// The field list of a struct value.
    ///
    /// `Some` (possibly empty) for constructed struct values, `None` for
    /// everything else, including typed-but-uninitialized struct values.
    pub fn fields(&self) -> Option<&[Field]> {
        match &self.payload {
            Payload::Fields(fields) => Some(fields),
            _ => None,
        }
    }

    /// Mutable access to a struct value's field list.
    ///
    /// The generator rewrites field statuses in place while merging inherited
    /// values into explicit ones.
    pub fn fields_mut(&mut self) -> Option<&mut Vec<Field>> {
        match &mut self.payload {
            Payload::Fields(fields) => Some(fields),
            _ => None,
        }
    }

    /// Duplicates this value, recording the name it was copied from.
    ///
    /// The copy is payload-identical; `copy_of` is diagnostic metadata for
    /// based-on style inheritance and takes part in no other logic. The
    /// source value is untouched.
    pub fn make_copy(&self, copy_of: FullName) -> Value {
        let mut result = self.clone();
        result.copy_of = Some(copy_of);
        result
    }

    /// The name this value was copied from, if it is a provenance copy.
    pub fn copy_of(&self) -> Option<&FullName> {
        self.copy_of.as_ref()
    }
}

impl From<Point> for Value {
    fn from(value: Point) -> Self {
        Self::with(Type::plain(TypeTag::Point), Payload::Point(value))
    }
}

impl From<Sprite> for Value {
    fn from(value: Sprite) -> Self {
        Self::with(Type::plain(TypeTag::Sprite), Payload::Sprite(value))
    }
}

impl From<Size> for Value {
    fn from(value: Size) -> Self {
        Self::with(Type::plain(TypeTag::Size), Payload::Size(value))
    }
}

impl From<Color> for Value {
    fn from(value: Color) -> Self {
        Self::with(Type::plain(TypeTag::Color), Payload::Color(value))
    }
}

impl From<Margins> for Value {
    fn from(value: Margins) -> Self {
        Self::with(Type::plain(TypeTag::Margins), Payload::Margins(value))
    }
}

impl From<Font> for Value {
    fn from(value: Font) -> Self {
        Self::with(Type::plain(TypeTag::Font), Payload::Font(value))
    }
}
