//! Documentation comments for generated methods and constructors.
//!
//! [`DocComposer::pieces`] collects what there is to say about a function;
//! [`render`] lays the pieces out as JSDoc (annotation-free dialect, types
//! in braces) or TSDoc (annotated dialect, interface types as descriptions).

use wrapgen_core::{Dialect, Error, Framework, Result};

use super::dialect::DialectConfig;
use super::grouper::FunctionNode;
use super::tokens::{
    ABI_PARAM, ADDRESS_NAME, CLOSE_BRACE, DOC_CLOSE, DOC_LINE, DOC_OPEN, INSTANCE_NAME, NEWLINE,
    OPEN_BRACE, SIGNER_OR_PROVIDER, SPACE,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocParam {
    pub name: String,
    pub mapped_type: String,
    pub abi_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocReturns {
    /// The asynchronous type the method resolves
    pub async_type: String,
    pub abi_types: Vec<String>,
    /// Resolves a transaction response rather than the declared outputs
    pub transaction: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocPieces {
    pub summary: String,
    pub selector: String,
    pub params: Vec<DocParam>,
    pub returns: DocReturns,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DocComposer;

impl DocComposer {
    pub fn pieces(&self, node: &FunctionNode, dialect: &DialectConfig) -> Result<DocPieces> {
        let outputs = node.outputs.literal.as_deref().ok_or_else(|| {
            Error::precondition(format!("doc of '{}' needs built outputs", node.method_name))
        })?;
        if node.inputs.literal.is_none() {
            return Err(Error::precondition(format!(
                "doc of '{}' needs built inputs",
                node.method_name
            )));
        }

        let params = node
            .inputs
            .params
            .iter()
            .map(|p| DocParam {
                name: p.name.clone(),
                mapped_type: p
                    .inferred_type
                    .clone()
                    .unwrap_or_else(|| dialect.types.fallback.to_string()),
                abi_type: p.param_type.clone(),
            })
            .collect();

        let async_type = if outputs.is_empty() {
            dialect.fallback_async()
        } else {
            outputs.to_string()
        };

        Ok(DocPieces {
            summary: format!("Calls `{}` ({}).", node.signature, node.state_mutability),
            selector: node.selector.clone(),
            params,
            returns: DocReturns {
                async_type,
                abi_types: node.outputs.params.iter().map(|p| p.param_type.clone()).collect(),
                transaction: !node.constant,
            },
        })
    }
}

/// Render a method's doc comment, indented one level
pub fn render(pieces: &DocPieces, dialect: &DialectConfig) -> String {
    let mut lines = vec![
        pieces.summary.clone(),
        format!("Selector: {}", pieces.selector),
    ];

    let mut tags = Vec::new();
    for param in &pieces.params {
        tags.push(match dialect.dialect {
            Dialect::JavaScript => format!("@param {} {}", braced(&param.mapped_type), param.name),
            Dialect::TypeScript => format!("@param {} - {}", param.name, param.abi_type),
        });
    }

    let returns = &pieces.returns;
    match dialect.dialect {
        Dialect::JavaScript if returns.transaction => tags.push(format!(
            "@returns {} transaction response",
            braced(&returns.async_type)
        )),
        Dialect::JavaScript => tags.push(format!("@returns {}", braced(&returns.async_type))),
        Dialect::TypeScript if returns.transaction => {
            tags.push("@returns transaction response".to_string())
        }
        Dialect::TypeScript if !returns.abi_types.is_empty() => {
            tags.push(format!("@returns {}", returns.abi_types.join(", ")))
        }
        Dialect::TypeScript => {}
    }

    if !tags.is_empty() {
        lines.push(String::new());
        lines.extend(tags);
    }

    block(&lines, dialect)
}

/// Doc comment for the binding constructor
pub fn render_constructor(dialect: &DialectConfig) -> String {
    let params: Vec<(&str, &str, &str)> = match dialect.framework {
        Framework::Ethers => vec![
            (ADDRESS_NAME, "string", "deployed contract address"),
            (ABI_PARAM, "any", "contract interface description"),
            (
                SIGNER_OR_PROVIDER,
                "ethers.Signer | ethers.providers.Provider | undefined",
                "optional signer or provider used for calls",
            ),
        ],
        Framework::Truffle => vec![
            (ADDRESS_NAME, "string", "deployed contract address"),
            (INSTANCE_NAME, "any", "deployed contract instance"),
        ],
    };

    let lines: Vec<String> = params
        .into_iter()
        .map(|(name, ty, description)| match dialect.dialect {
            Dialect::JavaScript => format!("@param {} {}", braced(ty), name),
            Dialect::TypeScript => format!("@param {} - {}", name, description),
        })
        .collect();

    block(&lines, dialect)
}

fn braced(ty: &str) -> String {
    format!("{}{}{}", OPEN_BRACE, ty, CLOSE_BRACE)
}

fn block(lines: &[String], dialect: &DialectConfig) -> String {
    let indent = dialect.indent(1);
    let mut out = format!("{}{}{}", indent, DOC_OPEN, NEWLINE);
    for line in lines {
        out.push_str(&indent);
        out.push_str(DOC_LINE);
        if !line.is_empty() {
            out.push_str(SPACE);
            out.push_str(line);
        }
        out.push_str(NEWLINE);
    }
    out.push_str(&indent);
    out.push_str(DOC_CLOSE);
    out.push_str(NEWLINE);
    out
}
