//! Declarations: variables, struct fields and structs.
//!
//! A [`Variable`] names a [`Value`]. A [`Struct`] declares an ordered list of
//! named, typed fields that struct-tagged values conform to; [`Field`] is the
//! value-side counterpart of one declared field, carrying how its value was
//! obtained.

use serde::Serialize;

use crate::error::StructureError;
use crate::name::FullName;
use crate::types::{Type, TypeTag};
use crate::value::Value;

/// A named value.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Variable {
    pub name: FullName,
    pub value: Value,
}

impl Variable {
    /// Returns true if the variable has a name.
    pub fn is_set(&self) -> bool {
        !self.name.is_empty()
    }
}

/// How a struct value's field got its value.
///
/// The generator's merge logic overwrites `Implicit` entries when a based-on
/// source provides one, but never overwrites `Explicit` entries. The status
/// carries no behavior inside the value model itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldStatus {
    /// Never set.
    Uninitialized,
    /// Inherited or defaulted.
    Implicit,
    /// Written in source.
    Explicit,
}

/// One entry in a struct value's field list.
#[derive(Debug, Clone, Serialize)]
pub struct Field {
    pub variable: Variable,
    pub status: FieldStatus,
}

/// One declared field of a struct: a name and a type.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StructField {
    pub name: FullName,
    pub ty: Type,
}

impl StructField {
    /// Returns true if the field has a name.
    pub fn is_set(&self) -> bool {
        !self.name.is_empty()
    }
}

/// A struct declaration: a name and an ordered list of typed fields.
///
/// Field order is significant; it determines iteration order in generated
/// output and the order struct values carry their entries in.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Struct {
    pub name: FullName,
    pub fields: Vec<StructField>,
}

impl Struct {
    /// Returns true if the struct has a name.
    pub fn is_set(&self) -> bool {
        !self.name.is_empty()
    }

    /// Checks that a struct-tagged value conforms to this declaration.
    ///
    /// The value must be tagged with this struct's name and carry exactly one
    /// field entry per declared field, in declaration order, each entry named
    /// after its declaration and typed to match it. An entry may instead be
    /// untyped while its status is [`FieldStatus::Uninitialized`].
    ///
    /// The model never runs this itself; the generator calls it after
    /// constructing or merging a value.
    pub fn check_value(&self, value: &Value) -> Result<(), StructureError> {
        if value.ty().tag != TypeTag::Struct || value.ty().name != self.name {
            return Err(StructureError::NotAStruct {
                name: self.name.dotted(),
            });
        }
        let fields = value.fields().unwrap_or(&[]);
        if fields.len() != self.fields.len() {
            return Err(StructureError::FieldCount {
                name: self.name.dotted(),
                expected: self.fields.len(),
                found: fields.len(),
            });
        }
        for (index, (declared, field)) in self.fields.iter().zip(fields).enumerate() {
            if field.variable.name != declared.name {
                return Err(StructureError::FieldName {
                    name: self.name.dotted(),
                    index,
                    expected: declared.name.dotted(),
                    found: field.variable.name.dotted(),
                });
            }
            let value_ty = field.variable.value.ty();
            let uninitialized =
                !value_ty.is_set() && field.status == FieldStatus::Uninitialized;
            if *value_ty != declared.ty && !uninitialized {
                return Err(StructureError::FieldType {
                    name: self.name.dotted(),
                    field: declared.name.dotted(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_style() -> Struct {
        Struct {
            name: FullName::from_dotted("TextStyle"),
            fields: vec![
                StructField {
                    name: FullName::from_dotted("height"),
                    ty: Type::plain(TypeTag::Pixels),
                },
                StructField {
                    name: FullName::from_dotted("color"),
                    ty: Type::plain(TypeTag::Color),
                },
            ],
        }
    }

    fn conforming_value() -> Value {
        Value::structure(
            FullName::from_dotted("TextStyle"),
            vec![
                Field {
                    variable: Variable {
                        name: FullName::from_dotted("height"),
                        value: Value::pixels(18),
                    },
                    status: FieldStatus::Explicit,
                },
                Field {
                    variable: Variable {
                        name: FullName::from_dotted("color"),
                        value: Value::from(crate::data::Color::rgba(0, 0, 0, 255)),
                    },
                    status: FieldStatus::Implicit,
                },
            ],
        )
    }

    #[test]
    fn test_presence() {
        assert!(!Variable::default().is_set());
        assert!(!StructField::default().is_set());
        assert!(!Struct::default().is_set());
        assert!(text_style().is_set());
    }

    #[test]
    fn test_check_value_accepts_conforming() {
        assert!(text_style().check_value(&conforming_value()).is_ok());
    }

    #[test]
    fn test_check_value_accepts_uninitialized_field() {
        let mut value = conforming_value();
        value.fields_mut().unwrap()[1] = Field {
            variable: Variable {
                name: FullName::from_dotted("color"),
                value: Value::default(),
            },
            status: FieldStatus::Uninitialized,
        };
        assert!(text_style().check_value(&value).is_ok());
    }

    #[test]
    fn test_check_value_rejects_wrong_struct_name() {
        let value = Value::structure(FullName::from_dotted("IconStyle"), Vec::new());
        assert_eq!(
            text_style().check_value(&value),
            Err(StructureError::NotAStruct {
                name: "TextStyle".into()
            })
        );
    }

    #[test]
    fn test_check_value_rejects_non_struct() {
        assert!(text_style().check_value(&Value::int(1)).is_err());
    }

    #[test]
    fn test_check_value_rejects_missing_fields() {
        let value = Value::structure(FullName::from_dotted("TextStyle"), Vec::new());
        assert_eq!(
            text_style().check_value(&value),
            Err(StructureError::FieldCount {
                name: "TextStyle".into(),
                expected: 2,
                found: 0,
            })
        );
    }

    #[test]
    fn test_check_value_rejects_reordered_fields() {
        let mut value = conforming_value();
        value.fields_mut().unwrap().reverse();
        assert_eq!(
            text_style().check_value(&value),
            Err(StructureError::FieldName {
                name: "TextStyle".into(),
                index: 0,
                expected: "height".into(),
                found: "color".into(),
            })
        );
    }

    #[test]
    fn test_check_value_rejects_mismatched_field_type() {
        let mut value = conforming_value();
        value.fields_mut().unwrap()[0].variable.value = Value::int(18);
        assert_eq!(
            text_style().check_value(&value),
            Err(StructureError::FieldType {
                name: "TextStyle".into(),
                field: "height".into(),
            })
        );
    }

    #[test]
    fn test_check_value_rejects_uninitialized_value_of_struct_type() {
        let value = Value::uninitialized(Type::structure(FullName::from_dotted("TextStyle")));
        assert_eq!(
            text_style().check_value(&value),
            Err(StructureError::FieldCount {
                name: "TextStyle".into(),
                expected: 2,
                found: 0,
            })
        );
    }
}
