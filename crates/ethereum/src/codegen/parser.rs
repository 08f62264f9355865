//! Ethereum ABI parser
//!
//! Reads contract interface descriptions (a bare ABI array or a build
//! artifact carrying one) and validates the function entries before any
//! code generation runs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};
use wrapgen_core::{Error, Result};

/// Parsed contract interface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterfaceDescription {
    /// Contract name taken from a build artifact, if present
    pub contract_name: Option<String>,
    /// Function entries in declaration order
    pub functions: Vec<AbiFunction>,
    /// Number of non-function entries (constructor, events, errors...) skipped
    pub skipped: usize,
}

/// ABI function definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiFunction {
    /// Function name
    pub name: String,
    /// Function inputs
    pub inputs: Vec<AbiParameter>,
    /// Function outputs
    pub outputs: Vec<AbiParameter>,
    /// State mutability (pure, view, nonpayable, payable)
    pub state_mutability: String,
    /// Whether the function is read-only (view/pure)
    pub constant: bool,
    /// Canonical signature, e.g. `transfer(address,uint256)`
    pub signature: String,
    /// 4-byte selector as 0x-prefixed hex
    pub selector: String,
}

/// ABI parameter definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiParameter {
    /// Parameter name, possibly empty
    pub name: String,
    /// Parameter type (e.g., uint256, address, string)
    pub param_type: String,
    /// Components (for tuples and structs)
    pub components: Option<Vec<AbiParameter>>,
}

impl AbiParameter {
    pub fn new(name: &str, param_type: &str) -> Self {
        Self {
            name: name.to_string(),
            param_type: param_type.to_string(),
            components: None,
        }
    }
}

impl AbiFunction {
    /// Build a function descriptor directly, computing signature and selector
    pub fn new(
        name: &str,
        inputs: Vec<AbiParameter>,
        outputs: Vec<AbiParameter>,
        constant: bool,
    ) -> Self {
        let state_mutability = if constant { "view" } else { "nonpayable" };
        let signature = function_signature(name, &inputs);
        let selector = function_selector(&signature);
        Self {
            name: name.to_string(),
            inputs,
            outputs,
            state_mutability: state_mutability.to_string(),
            constant,
            signature,
            selector,
        }
    }
}

/// Ethereum ABI parser
pub struct AbiParser;

impl AbiParser {
    /// Create a new parser instance
    pub fn new() -> Self {
        Self
    }

    /// Parse an ABI file
    pub async fn parse_file(&self, file_path: &std::path::Path) -> Result<InterfaceDescription> {
        let content = tokio::fs::read_to_string(file_path).await.map_err(|e| {
            Error::io(format!("Failed to read ABI file {}: {}", file_path.display(), e))
        })?;
        self.parse_content(&content)
    }

    /// Parse an interface description from JSON content
    pub fn parse_content(&self, content: &str) -> Result<InterfaceDescription> {
        let value: Value = serde_json::from_str(content)?;
        self.parse_value(&value)
    }

    /// Parse an interface description from a JSON value
    pub fn parse_value(&self, value: &Value) -> Result<InterfaceDescription> {
        let (entries, contract_name) = match value {
            Value::Array(entries) => (entries, None),
            Value::Object(artifact) => {
                let entries = artifact
                    .get("abi")
                    .and_then(|v| v.as_array())
                    .ok_or_else(|| Error::parse("artifact object has no `abi` array"))?;
                let contract_name = artifact
                    .get("contractName")
                    .and_then(|v| v.as_str())
                    .map(String::from);
                (entries, contract_name)
            }
            _ => {
                return Err(Error::parse(
                    "interface description must be an ABI array or an artifact object",
                ))
            }
        };

        let mut functions = Vec::new();
        let mut skipped = 0;

        for (index, item) in entries.iter().enumerate() {
            let entry = item
                .as_object()
                .ok_or_else(|| Error::malformed(index, "entry is not an object"))?;

            let entry_type = match entry.get("type") {
                None => "function",
                Some(Value::String(s)) => s.as_str(),
                Some(_) => return Err(Error::malformed(index, "`type` is not a string")),
            };

            match entry_type {
                "function" => functions.push(self.parse_function(index, entry)?),
                "constructor" | "event" | "error" | "fallback" | "receive" => {
                    skipped += 1;
                }
                other => {
                    warn!(index, entry_type = other, "skipping unknown ABI entry type");
                    skipped += 1;
                }
            }
        }

        debug!(functions = functions.len(), skipped, "parsed interface description");

        Ok(InterfaceDescription {
            contract_name,
            functions,
            skipped,
        })
    }

    /// Parse a function entry
    fn parse_function(&self, index: usize, entry: &Map<String, Value>) -> Result<AbiFunction> {
        let name = match entry.get("name") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(Value::String(_)) => {
                return Err(Error::malformed(index, "function name is empty"))
            }
            Some(_) => return Err(Error::malformed(index, "function `name` is not a string")),
            None => return Err(Error::malformed(index, "function has no `name`")),
        };

        let inputs = Self::parse_parameter_list(index, entry, "inputs")?;
        let outputs = Self::parse_parameter_list(index, entry, "outputs")?;

        let state_mutability = match entry.get("stateMutability") {
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                return Err(Error::malformed(index, "`stateMutability` is not a string"))
            }
            None => {
                // Legacy support
                if entry.get("constant").and_then(|v| v.as_bool()).unwrap_or(false) {
                    "view".to_string()
                } else if entry.get("payable").and_then(|v| v.as_bool()).unwrap_or(false) {
                    "payable".to_string()
                } else {
                    "nonpayable".to_string()
                }
            }
        };
        let constant = state_mutability == "view" || state_mutability == "pure";

        let signature = function_signature(&name, &inputs);
        let selector = function_selector(&signature);

        Ok(AbiFunction {
            name,
            inputs,
            outputs,
            state_mutability,
            constant,
            signature,
            selector,
        })
    }

    fn parse_parameter_list(
        index: usize,
        entry: &Map<String, Value>,
        field: &str,
    ) -> Result<Vec<AbiParameter>> {
        match entry.get(field) {
            Some(Value::Array(params)) => Self::parse_parameters(index, field, params),
            Some(_) => Err(Error::malformed(index, format!("`{}` is not an array", field))),
            None => Err(Error::malformed(index, format!("function has no `{}`", field))),
        }
    }

    /// Parse function parameters, recursing into tuple components
    fn parse_parameters(index: usize, field: &str, array: &[Value]) -> Result<Vec<AbiParameter>> {
        let mut parameters = Vec::with_capacity(array.len());

        for (position, param) in array.iter().enumerate() {
            let param = param.as_object().ok_or_else(|| {
                Error::malformed(index, format!("{}[{}] is not an object", field, position))
            })?;

            let name = match param.get("name") {
                None | Some(Value::Null) => String::new(),
                Some(Value::String(s)) => s.clone(),
                Some(_) => {
                    return Err(Error::malformed(
                        index,
                        format!("{}[{}].name is not a string", field, position),
                    ))
                }
            };

            let param_type = param
                .get("type")
                .and_then(|v| v.as_str())
                .ok_or_else(|| {
                    Error::malformed(index, format!("{}[{}] has no string `type`", field, position))
                })?
                .to_string();

            let components = match param.get("components") {
                Some(Value::Array(components)) => {
                    Some(Self::parse_parameters(index, field, components)?)
                }
                _ => None,
            };

            parameters.push(AbiParameter {
                name,
                param_type,
                components,
            });
        }

        Ok(parameters)
    }
}

impl Default for AbiParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonical signature used for selectors and overloaded calls
pub fn function_signature(name: &str, inputs: &[AbiParameter]) -> String {
    let types: Vec<String> = inputs.iter().map(canonical_type).collect();
    format!("{}({})", name, types.join(","))
}

/// Keccak-256 based 4-byte selector of a canonical signature
pub fn function_selector(signature: &str) -> String {
    use sha3::{Digest, Keccak256};
    let mut hasher = Keccak256::new();
    hasher.update(signature.as_bytes());
    let hash = hasher.finalize();
    format!("0x{}", hex::encode(&hash[..4]))
}

/// Convert a parameter type to canonical form
fn canonical_type(param: &AbiParameter) -> String {
    let ty = param.param_type.as_str();
    let (base, suffix) = match ty.find('[') {
        Some(pos) => ty.split_at(pos),
        None => (ty, ""),
    };

    let base = match base {
        "uint" => "uint256".to_string(),
        "int" => "int256".to_string(),
        "tuple" => {
            let inner: Vec<String> = param
                .components
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(canonical_type)
                .collect();
            format!("({})", inner.join(","))
        }
        other => other.to_string(),
    };

    format!("{}{}", base, suffix)
}
