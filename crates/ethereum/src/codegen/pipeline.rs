//! Generation pipeline driver
//!
//! Runs the stages in order over one function list: grouping, io literals,
//! body, doc, signature and finally the class. Every stage only reads what
//! an earlier stage wrote on the node.

use tracing::{debug, info};
use wrapgen_core::{GeneratorConfig, Result};

use super::body::{BodyComposer, ContractCallComposer};
use super::class::ClassAssembler;
use super::dialect::DialectConfig;
use super::doc::{self, DocComposer};
use super::grouper::{group, FunctionTree};
use super::io::IoLiteralBuilder;
use super::parser::AbiFunction;
use super::signature::SignatureAssembler;

pub struct Pipeline {
    config: GeneratorConfig,
    dialect: DialectConfig,
    body_composer: Box<dyn BodyComposer + Send + Sync>,
}

impl Pipeline {
    /// Create a pipeline for a validated configuration
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let dialect = DialectConfig::new(&config);
        Ok(Self {
            config,
            dialect,
            body_composer: Box::new(ContractCallComposer),
        })
    }

    /// Replace the default call-forwarding body composer
    pub fn with_body_composer<C>(mut self, composer: C) -> Self
    where
        C: BodyComposer + Send + Sync + 'static,
    {
        self.body_composer = Box::new(composer);
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn dialect(&self) -> &DialectConfig {
        &self.dialect
    }

    /// Group the functions and populate every per-function literal
    pub fn build_tree(&self, functions: &[AbiFunction]) -> Result<FunctionTree> {
        let mut tree = group(functions, self.config.overload_policy)?;
        let io = IoLiteralBuilder::new(&self.dialect);
        let signatures = SignatureAssembler::new(&self.dialect);

        for node in &mut tree {
            node.inputs = io.build_inputs(&node.inputs.params);
            node.outputs = io.build_outputs(&node.outputs.params, node.constant);
            node.body_literal = Some(self.body_composer.compose(node, &self.dialect)?);

            if self.dialect.emit_docs {
                let pieces = DocComposer.pieces(node, &self.dialect)?;
                node.doc = Some(doc::render(&pieces, &self.dialect));
            }

            node.signature_literal = Some(signatures.assemble(node)?);

            debug!(
                method = %node.method_name,
                inputs = node.inputs.params.len(),
                outputs = node.outputs.params.len(),
                constant = node.constant,
                "assembled function"
            );
        }

        Ok(tree)
    }

    /// Generate the complete wrapper text
    pub fn run(&self, functions: &[AbiFunction], class_name: &str) -> Result<String> {
        let tree = self.build_tree(functions)?;
        let output = ClassAssembler::new(&self.dialect).assemble(&tree, class_name)?;

        info!(
            class = class_name,
            dialect = %self.config.dialect,
            framework = %self.config.framework,
            methods = tree.len(),
            "generated wrapper"
        );

        Ok(output)
    }
}
