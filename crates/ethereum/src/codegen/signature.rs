//! Method declaration assembly

use wrapgen_core::{Error, Result};

use super::dialect::DialectConfig;
use super::grouper::FunctionNode;
use super::tokens::{CLOSE_BRACE, NEWLINE, OPEN_BRACE, SPACE, TYPE_SEPARATOR};

/// Combines a node's name, literals and body into one method declaration
pub struct SignatureAssembler<'a> {
    dialect: &'a DialectConfig,
}

impl<'a> SignatureAssembler<'a> {
    pub fn new(dialect: &'a DialectConfig) -> Self {
        Self { dialect }
    }

    /// Reads the input, output and body literals; fails if any stage that
    /// produces them has not run yet.
    pub fn assemble(&self, node: &FunctionNode) -> Result<String> {
        let inputs = node
            .inputs
            .literal
            .as_deref()
            .ok_or_else(|| missing(node, "input literal"))?;
        let outputs = node
            .outputs
            .literal
            .as_deref()
            .ok_or_else(|| missing(node, "output literal"))?;
        let body = node
            .body_literal
            .as_deref()
            .ok_or_else(|| missing(node, "body literal"))?;

        let indent = self.dialect.indent(1);
        let mut signature = String::new();
        signature.push_str(&indent);
        signature.push_str(&self.dialect.method_keywords());
        signature.push_str(SPACE);
        signature.push_str(&node.method_name);
        signature.push_str(inputs);

        if self.dialect.annotated() {
            let return_type = if outputs.is_empty() {
                self.dialect.fallback_async()
            } else {
                outputs.to_string()
            };
            signature.push_str(TYPE_SEPARATOR);
            signature.push_str(&return_type);
            signature.push_str(SPACE);
        } else if !inputs.ends_with(SPACE) {
            signature.push_str(SPACE);
        }

        signature.push_str(OPEN_BRACE);
        signature.push_str(body);
        signature.push_str(NEWLINE);
        signature.push_str(&indent);
        signature.push_str(CLOSE_BRACE);
        signature.push_str(NEWLINE);
        signature.push_str(NEWLINE);

        Ok(signature)
    }
}

fn missing(node: &FunctionNode, what: &str) -> Error {
    Error::precondition(format!(
        "signature of '{}' assembled before its {} was built",
        node.method_name, what
    ))
}
