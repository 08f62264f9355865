//! Interface type tag → dialect type name

use super::dialect::TypeTable;

/// Maps ABI type tags onto a dialect's type table
#[derive(Debug, Clone, Copy)]
pub struct TypeMapper<'a> {
    types: &'a TypeTable,
}

impl<'a> TypeMapper<'a> {
    pub fn new(types: &'a TypeTable) -> Self {
        Self { types }
    }

    /// Map a type tag; arrays map their element type and append the array suffix.
    /// Unrecognized tags degrade to the fallback type.
    pub fn infer(&self, tag: &str, is_output: bool) -> String {
        if let Some(element) = array_element(tag) {
            return format!("{}{}", self.infer(element, is_output), self.types.array_suffix);
        }

        let mapped = if is_integer_tag(tag) {
            if is_output {
                self.types.numeric_output
            } else {
                self.types.numeric_input
            }
        } else {
            match tag {
                "address" => self.types.address,
                "string" => self.types.string,
                "bool" => self.types.boolean,
                _ => self.types.fallback,
            }
        };

        mapped.to_string()
    }
}

/// `int`, `uint` and their bit-width variants (`uint8` ... `int256`)
pub fn is_integer_tag(tag: &str) -> bool {
    let width = tag
        .strip_prefix("uint")
        .or_else(|| tag.strip_prefix("int"));

    match width {
        Some(width) => width.chars().all(|c| c.is_ascii_digit()),
        None => false,
    }
}

/// Element type of `T[]` or `T[N]`
fn array_element(tag: &str) -> Option<&str> {
    let inner = tag.strip_suffix(']')?;
    let open = inner.rfind('[')?;
    let length = &inner[open + 1..];
    if !length.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(&inner[..open])
}
