//! Class scaffolding around the assembled methods

use wrapgen_core::{Dialect, Error, Framework, Result};

use super::dialect::DialectConfig;
use super::doc;
use super::grouper::FunctionTree;
use super::tokens::{
    ABI_PARAM, ADDRESS_NAME, CLASS, CLOSE_BRACE, CLOSE_PAREN, CONSTRUCTOR, INSTANCE_NAME,
    LIST_SEPARATOR, NEWLINE, OPEN_BRACE, OPEN_PAREN, SEMICOLON, SIGNER_OR_PROVIDER, SPACE, THIS,
    TYPE_SEPARATOR,
};

/// Wraps the method declarations of a function tree into a complete class
/// with its import preamble, fields, constructor and export statement.
pub struct ClassAssembler<'a> {
    dialect: &'a DialectConfig,
}

impl<'a> ClassAssembler<'a> {
    pub fn new(dialect: &'a DialectConfig) -> Self {
        Self { dialect }
    }

    pub fn assemble(&self, tree: &FunctionTree, class_name: &str) -> Result<String> {
        let mut out = String::new();

        out.push_str(&self.preamble());
        out.push_str(&format!("{} {} {}{}", CLASS, class_name, OPEN_BRACE, NEWLINE));
        out.push_str(&self.fields());
        out.push_str(NEWLINE);

        if self.dialect.emit_docs {
            out.push_str(&doc::render_constructor(self.dialect));
        }
        out.push_str(&self.constructor());

        for node in tree {
            let signature = node.signature_literal.as_deref().ok_or_else(|| {
                Error::precondition(format!(
                    "class assembled before the signature of '{}' was built",
                    node.method_name
                ))
            })?;
            if let Some(doc) = &node.doc {
                out.push_str(doc);
            }
            out.push_str(signature);
        }

        out.push_str(CLOSE_BRACE);
        out.push_str(NEWLINE);
        out.push_str(NEWLINE);
        out.push_str(&self.export(class_name));
        out.push_str(NEWLINE);

        Ok(out)
    }

    fn preamble(&self) -> String {
        let import = match (self.dialect.framework, self.dialect.dialect) {
            (Framework::Truffle, _) => return String::new(),
            (Framework::Ethers, Dialect::JavaScript) => {
                "const ethers = require(\"ethers\");".to_string()
            }
            (Framework::Ethers, Dialect::TypeScript) => {
                "import { ethers, BigNumber, BigNumberish } from \"ethers\";".to_string()
            }
        };
        format!("{}{}{}", import, NEWLINE, NEWLINE)
    }

    fn fields(&self) -> String {
        let indent = self.dialect.indent(1);
        let fields: Vec<String> = match self.dialect.dialect {
            Dialect::JavaScript => vec![INSTANCE_NAME.to_string(), ADDRESS_NAME.to_string()],
            Dialect::TypeScript => {
                let instance_type = match self.dialect.framework {
                    Framework::Ethers => "ethers.Contract",
                    Framework::Truffle => "any",
                };
                vec![
                    format!("{}{}{}", INSTANCE_NAME, TYPE_SEPARATOR, instance_type),
                    format!("{}{}string", ADDRESS_NAME, TYPE_SEPARATOR),
                ]
            }
        };

        fields
            .iter()
            .map(|field| format!("{}{}{}{}", indent, field, SEMICOLON, NEWLINE))
            .collect()
    }

    fn constructor_params(&self) -> Vec<String> {
        match (self.dialect.dialect, self.dialect.framework) {
            (Dialect::JavaScript, Framework::Ethers) => vec![
                ADDRESS_NAME.to_string(),
                ABI_PARAM.to_string(),
                format!("{} = undefined", SIGNER_OR_PROVIDER),
            ],
            (Dialect::JavaScript, Framework::Truffle) => {
                vec![ADDRESS_NAME.to_string(), INSTANCE_NAME.to_string()]
            }
            (Dialect::TypeScript, Framework::Ethers) => vec![
                format!("{}{}string", ADDRESS_NAME, TYPE_SEPARATOR),
                format!("{}{}any", ABI_PARAM, TYPE_SEPARATOR),
                format!(
                    "{}?{}ethers.Signer | ethers.providers.Provider",
                    SIGNER_OR_PROVIDER, TYPE_SEPARATOR
                ),
            ],
            (Dialect::TypeScript, Framework::Truffle) => vec![
                format!("{}{}string", ADDRESS_NAME, TYPE_SEPARATOR),
                format!("{}{}any", INSTANCE_NAME, TYPE_SEPARATOR),
            ],
        }
    }

    fn constructor(&self) -> String {
        let indent = self.dialect.indent(1);
        let body_indent = self.dialect.indent(2);

        let instance = match self.dialect.framework {
            Framework::Ethers => format!(
                "new ethers.Contract({}, {}, {})",
                ADDRESS_NAME, ABI_PARAM, SIGNER_OR_PROVIDER
            ),
            Framework::Truffle => INSTANCE_NAME.to_string(),
        };

        let mut out = format!(
            "{}{}{}{}{}{}{}{}",
            indent,
            CONSTRUCTOR,
            OPEN_PAREN,
            self.constructor_params().join(LIST_SEPARATOR),
            CLOSE_PAREN,
            SPACE,
            OPEN_BRACE,
            NEWLINE
        );
        out.push_str(&format!(
            "{}{}.{} = {}{}{}",
            body_indent, THIS, INSTANCE_NAME, instance, SEMICOLON, NEWLINE
        ));
        out.push_str(&format!(
            "{}{}.{} = {}{}{}",
            body_indent, THIS, ADDRESS_NAME, ADDRESS_NAME, SEMICOLON, NEWLINE
        ));
        out.push_str(&indent);
        out.push_str(CLOSE_BRACE);
        out.push_str(NEWLINE);
        out.push_str(NEWLINE);
        out
    }

    fn export(&self, class_name: &str) -> String {
        match self.dialect.dialect {
            Dialect::JavaScript => format!("module.exports = {{ {} }};", class_name),
            Dialect::TypeScript => format!("export {{ {} }};", class_name),
        }
    }
}
