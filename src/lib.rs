//! In-memory structure model for a style DSL code generator.
//!
//! A style sheet describes UI constants: colors, pixel sizes, fonts, margins
//! and named composite styles. The parser turns each literal into a typed
//! value, and the emitter walks the result to generate code. This crate is the
//! model between the two:
//!
//! - [`FullName`]: hierarchical dotted names like `overview.document.bg`
//! - [`TypeTag`] and [`Type`]: the closed set of value kinds
//! - [`Value`]: a tagged union with total, zero-defaulting accessors
//! - [`Variable`], [`Struct`], [`StructField`], [`Field`]: declarations and
//!   their value-side entries
//! - [`Sheet`]: the ordered declarations of one source unit
//!
//! The model is built once per generation pass and read thereafter; it
//! performs no parsing, no emission and no I/O.
//!
//! # Example
//!
//! ```rust
//! use styledef::{Color, FullName, Sheet, TypeTag, Value, Variable};
//!
//! let mut sheet = Sheet::new();
//! sheet.add_variable(Variable {
//!     name: FullName::from_dotted("window.bg"),
//!     value: Value::from(Color::rgba(255, 255, 255, 255)),
//! })?;
//!
//! // Emitter side: probe the tag, read the matching payload.
//! let variable = sheet.find_variable(&FullName::from_dotted("window.bg")).unwrap();
//! assert_eq!(variable.value.ty().tag, TypeTag::Color);
//! assert_eq!(variable.value.color().red, 255);
//! # Ok::<(), styledef::StructureError>(())
//! ```

mod data;
mod error;
mod name;
mod sheet;
mod structure;
mod types;
mod value;

pub use data::{px_adjust, Color, Font, FontFlags, Margins, Point, Size, Sprite};
pub use error::StructureError;
pub use name::FullName;
pub use sheet::Sheet;
pub use structure::{Field, FieldStatus, Struct, StructField, Variable};
pub use types::{Type, TypeTag};
pub use value::Value;
