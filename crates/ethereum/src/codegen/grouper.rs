//! Overload grouping
//!
//! Turns the parsed function list into the function tree the literal
//! builders work on. Entries sharing a name are tied together by their
//! overload index and count; declaration order is never changed.

use std::collections::{HashMap, HashSet};

use tracing::warn;
use wrapgen_core::{Error, OverloadPolicy, Result};

use super::parser::{AbiFunction, AbiParameter};

/// A parameter as seen by the literal builders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDescriptor {
    /// Declared name; for built inputs, the allocated name
    pub name: String,
    /// Interface-level type tag
    pub param_type: String,
    /// Dialect type, filled in by the io literal builder
    pub inferred_type: Option<String>,
}

impl ParameterDescriptor {
    pub fn new(name: &str, param_type: &str) -> Self {
        Self {
            name: name.to_string(),
            param_type: param_type.to_string(),
            inferred_type: None,
        }
    }
}

impl From<&AbiParameter> for ParameterDescriptor {
    fn from(param: &AbiParameter) -> Self {
        Self::new(&param.name, &param.param_type)
    }
}

/// Parameters of one side of a function plus their assembled literal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IoAttribute {
    pub params: Vec<ParameterDescriptor>,
    pub literal: Option<String>,
}

impl IoAttribute {
    pub fn new(params: Vec<ParameterDescriptor>) -> Self {
        Self {
            params,
            literal: None,
        }
    }
}

/// One emitted method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionNode {
    /// Name in the interface description
    pub name: String,
    /// Name the method is emitted under
    pub method_name: String,
    /// Read-only (view/pure)
    pub constant: bool,
    pub state_mutability: String,
    /// Canonical signature, e.g. `transfer(address,uint256)`
    pub signature: String,
    pub selector: String,
    /// Position among the entries sharing `name`
    pub overload_index: usize,
    /// Number of entries sharing `name`
    pub overload_count: usize,
    pub inputs: IoAttribute,
    pub outputs: IoAttribute,
    pub body_literal: Option<String>,
    pub doc: Option<String>,
    pub signature_literal: Option<String>,
}

impl FunctionNode {
    pub fn is_overloaded(&self) -> bool {
        self.overload_count > 1
    }
}

/// Function nodes in interface declaration order
pub type FunctionTree = Vec<FunctionNode>;

/// Group the parsed functions by name, applying the overload policy
pub fn group(functions: &[AbiFunction], policy: OverloadPolicy) -> Result<FunctionTree> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for function in functions {
        *counts.entry(function.name.as_str()).or_insert(0) += 1;
    }

    if policy == OverloadPolicy::Reject {
        if let Some(function) = functions.iter().find(|f| counts[f.name.as_str()] > 1) {
            return Err(Error::AmbiguousOverload {
                name: function.name.clone(),
                count: counts[function.name.as_str()],
            });
        }
    }

    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut tree = Vec::with_capacity(functions.len());

    for function in functions {
        let overload_count = counts[function.name.as_str()];
        let index = seen.entry(function.name.as_str()).or_insert(0);
        let overload_index = *index;
        *index += 1;

        if overload_count > 1 && overload_index == 0 {
            warn!(
                name = %function.name,
                count = overload_count,
                policy = %policy,
                "overloaded function name"
            );
        }

        let method_name = match policy {
            OverloadPolicy::Mangle if overload_index > 0 => {
                format!("{}_{}", function.name, overload_index)
            }
            _ => function.name.clone(),
        };

        tree.push(FunctionNode {
            name: function.name.clone(),
            method_name,
            constant: function.constant,
            state_mutability: function.state_mutability.clone(),
            signature: function.signature.clone(),
            selector: function.selector.clone(),
            overload_index,
            overload_count,
            inputs: IoAttribute::new(function.inputs.iter().map(Into::into).collect()),
            outputs: IoAttribute::new(function.outputs.iter().map(Into::into).collect()),
            body_literal: None,
            doc: None,
            signature_literal: None,
        });
    }

    if policy == OverloadPolicy::Mangle {
        let mut names = HashSet::new();
        for node in &tree {
            if !names.insert(node.method_name.as_str()) {
                return Err(Error::NameCollision(format!(
                    "'{}' (from {}) is already declared",
                    node.method_name, node.signature
                )));
            }
        }
    }

    Ok(tree)
}
