//! Method bodies that forward a call to the bound contract instance

use wrapgen_core::{Error, Framework, Result};

use super::dialect::DialectConfig;
use super::grouper::FunctionNode;
use super::tokens::{
    CLOSE_BRACKET, CLOSE_PAREN, INSTANCE_NAME, LIST_SEPARATOR, NEWLINE, OPEN_BRACKET, OPEN_PAREN,
    RETURN, SEMICOLON, SPACE, THIS,
};

/// Produces the statements placed between a method's braces.
///
/// Runs after the input literal is built, so allocated argument names are
/// available on `node.inputs.params`.
pub trait BodyComposer {
    fn compose(&self, node: &FunctionNode, dialect: &DialectConfig) -> Result<String>;
}

/// Forwards the arguments to the same-named function of the contract instance
#[derive(Debug, Clone, Copy, Default)]
pub struct ContractCallComposer;

impl BodyComposer for ContractCallComposer {
    fn compose(&self, node: &FunctionNode, dialect: &DialectConfig) -> Result<String> {
        if node.inputs.literal.is_none() {
            return Err(Error::precondition(format!(
                "body of '{}' composed before its inputs were built",
                node.method_name
            )));
        }

        let args: Vec<&str> = node.inputs.params.iter().map(|p| p.name.as_str()).collect();
        let instance = format!("{}.{}", THIS, INSTANCE_NAME);

        let target = match (dialect.framework, node.is_overloaded()) {
            (_, false) => format!("{}.{}", instance, node.name),
            (Framework::Ethers, true) => {
                format!("{}{}\"{}\"{}", instance, OPEN_BRACKET, node.signature, CLOSE_BRACKET)
            }
            (Framework::Truffle, true) => format!(
                "{}.methods{}\"{}\"{}",
                instance, OPEN_BRACKET, node.signature, CLOSE_BRACKET
            ),
        };

        // truffle sends a transaction unless `.call` is used
        let target = if dialect.framework == Framework::Truffle && node.constant {
            format!("{}.call", target)
        } else {
            target
        };

        Ok(format!(
            "{}{}{}{}{}{}{}{}{}",
            NEWLINE,
            dialect.indent(2),
            RETURN,
            SPACE,
            target,
            OPEN_PAREN,
            args.join(LIST_SEPARATOR),
            CLOSE_PAREN,
            SEMICOLON
        ))
    }
}
