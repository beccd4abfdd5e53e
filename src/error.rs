//! Structure model errors.

use thiserror::Error;

/// Error returned by declaration checks and sheet insertion.
///
/// The value model itself has no fallible operations; these errors come from
/// the surfaces the generator uses to validate its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    /// The value checked against a struct declaration is not a value of that
    /// struct type.
    #[error("value is not a `{name}` struct value")]
    NotAStruct { name: String },

    /// A struct value carries the wrong number of fields.
    #[error("struct `{name}` declares {expected} fields, value carries {found}")]
    FieldCount {
        name: String,
        expected: usize,
        found: usize,
    },

    /// A struct value's field is out of declaration order or misnamed.
    #[error("field {index} of `{name}` should be `{expected}`, found `{found}`")]
    FieldName {
        name: String,
        index: usize,
        expected: String,
        found: String,
    },

    /// A struct value's field carries a value of the wrong type.
    #[error("field `{field}` of `{name}` carries a value of the wrong type")]
    FieldType { name: String, field: String },

    /// A struct with this name is already declared in the sheet.
    #[error("duplicate struct declaration `{name}`")]
    DuplicateStruct { name: String },

    /// A variable with this name is already declared in the sheet.
    #[error("duplicate variable declaration `{name}`")]
    DuplicateVariable { name: String },
}
