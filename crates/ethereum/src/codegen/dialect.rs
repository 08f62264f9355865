//! Dialect configuration: the type table and formatting conventions the
//! dialect-agnostic pipeline is parameterized with.

use wrapgen_core::{Dialect, Framework, GeneratorConfig};

use super::tokens::{ASYNC, CLOSE_ANGLE, OPEN_ANGLE, PROMISE, PUBLIC, SPACE};

/// Target type names for each interface type family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeTable {
    /// Integers in parameter position
    pub numeric_input: &'static str,
    /// Integers in result position
    pub numeric_output: &'static str,
    pub address: &'static str,
    pub string: &'static str,
    pub boolean: &'static str,
    /// Anything not covered above
    pub fallback: &'static str,
    pub array_suffix: &'static str,
}

pub const TYPESCRIPT_TYPES: TypeTable = TypeTable {
    numeric_input: "BigNumberish",
    numeric_output: "BigNumber",
    address: "string",
    string: "string",
    boolean: "boolean",
    fallback: "any",
    array_suffix: "[]",
};

/// Used only in documentation comments; the dialect itself is annotation-free.
pub const JAVASCRIPT_TYPES: TypeTable = TypeTable {
    numeric_input: "BigNumber",
    numeric_output: "BigNumber",
    address: "string",
    string: "string",
    boolean: "boolean",
    fallback: "any",
    array_suffix: "[]",
};

/// Everything the pipeline needs to know about the output dialect
#[derive(Debug, Clone)]
pub struct DialectConfig {
    pub dialect: Dialect,
    pub framework: Framework,
    pub types: TypeTable,
    pub indent: String,
    pub unnamed_prefix: String,
    pub emit_docs: bool,
}

impl DialectConfig {
    pub fn new(config: &GeneratorConfig) -> Self {
        let types = match config.dialect {
            Dialect::JavaScript => JAVASCRIPT_TYPES,
            Dialect::TypeScript => TYPESCRIPT_TYPES,
        };

        Self {
            dialect: config.dialect,
            framework: config.framework,
            types,
            indent: config.indent.clone(),
            unnamed_prefix: config.unnamed_prefix.clone(),
            emit_docs: config.emit_docs,
        }
    }

    /// Whether parameter and return types are written into the code
    pub fn annotated(&self) -> bool {
        self.dialect == Dialect::TypeScript
    }

    /// Keywords in front of every method name
    pub fn method_keywords(&self) -> String {
        match self.dialect {
            Dialect::JavaScript => ASYNC.to_string(),
            Dialect::TypeScript => format!("{}{}{}", PUBLIC, SPACE, ASYNC),
        }
    }

    /// `Promise<inner>`
    pub fn async_of(&self, inner: &str) -> String {
        format!("{}{}{}{}", PROMISE, OPEN_ANGLE, inner, CLOSE_ANGLE)
    }

    /// `Promise<any>`, the result of state-changing and untyped calls
    pub fn fallback_async(&self) -> String {
        self.async_of(self.types.fallback)
    }

    /// `n` indentation units
    pub fn indent(&self, n: usize) -> String {
        self.indent.repeat(n)
    }
}

impl Default for DialectConfig {
    fn default() -> Self {
        Self::new(&GeneratorConfig::default())
    }
}
