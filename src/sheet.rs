//! Per-source-unit declaration registry.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::StructureError;
use crate::name::FullName;
use crate::structure::{Struct, Variable};

/// The structs and variables declared in one style sheet.
///
/// Declarations keep their source order, which the emitter follows; lookup by
/// name is what the generator uses to resolve field types and based-on
/// references. Inserting a name twice is rejected, since a second declaration
/// of the same name is a defect in the source.
///
/// # Example
///
/// ```rust
/// use styledef::{FullName, Sheet, Value, Variable};
///
/// let mut sheet = Sheet::new();
/// sheet.add_variable(Variable {
///     name: FullName::from_dotted("button.bg"),
///     value: Value::pixels(4),
/// })?;
///
/// let found = sheet.find_variable(&FullName::from_dotted("button.bg"));
/// assert!(found.is_some());
/// # Ok::<(), styledef::StructureError>(())
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct Sheet {
    structs: Vec<Struct>,
    variables: Vec<Variable>,
    #[serde(skip)]
    struct_index: HashMap<FullName, usize>,
    #[serde(skip)]
    variable_index: HashMap<FullName, usize>,
}

impl Sheet {
    /// Creates an empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a struct declaration.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::DuplicateStruct`] if a struct with the same
    /// name is already declared.
    pub fn add_struct(&mut self, declaration: Struct) -> Result<(), StructureError> {
        if self.struct_index.contains_key(&declaration.name) {
            return Err(StructureError::DuplicateStruct {
                name: declaration.name.dotted(),
            });
        }
        self.struct_index
            .insert(declaration.name.clone(), self.structs.len());
        self.structs.push(declaration);
        Ok(())
    }

    /// Appends a variable declaration.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::DuplicateVariable`] if a variable with the
    /// same name is already declared.
    pub fn add_variable(&mut self, declaration: Variable) -> Result<(), StructureError> {
        if self.variable_index.contains_key(&declaration.name) {
            return Err(StructureError::DuplicateVariable {
                name: declaration.name.dotted(),
            });
        }
        self.variable_index
            .insert(declaration.name.clone(), self.variables.len());
        self.variables.push(declaration);
        Ok(())
    }

    /// Looks up a struct declaration by name.
    pub fn find_struct(&self, name: &FullName) -> Option<&Struct> {
        self.struct_index.get(name).map(|&index| &self.structs[index])
    }

    /// Looks up a variable declaration by name.
    pub fn find_variable(&self, name: &FullName) -> Option<&Variable> {
        self.variable_index
            .get(name)
            .map(|&index| &self.variables[index])
    }

    /// The struct declarations in source order.
    pub fn structs(&self) -> &[Struct] {
        &self.structs
    }

    /// The variable declarations in source order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Returns true if the sheet declares nothing.
    pub fn is_empty(&self) -> bool {
        self.structs.is_empty() && self.variables.is_empty()
    }
}
