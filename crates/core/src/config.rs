//! Configuration for wrapper generation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;


/// Words a generated class or parameter may not be named
pub const RESERVED_WORDS: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "eval", "export", "extends", "false", "finally",
    "for", "function", "if", "implements", "import", "in", "instanceof", "interface", "let",
    "new", "null", "package", "private", "protected", "public", "return", "static", "super",
    "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Output language of the generated wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Annotation-free output
    JavaScript,
    /// Statically annotated output
    #[default]
    TypeScript,
}

/// Deployment framework the wrapper binds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    /// Builds the contract instance from address, abi and signer/provider
    #[default]
    Ethers,
    /// Receives a pre-built contract instance
    Truffle,
}

/// What to do with several interface entries sharing one name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverloadPolicy {
    /// One method per entry, duplicate names kept as-is
    Preserve,
    /// Later entries of a name get a numeric suffix
    #[default]
    Mangle,
    /// Fail generation when a name is declared more than once
    Reject,
}

/// Main configuration for the wrapper generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub dialect: Dialect,
    pub framework: Framework,
    /// Explicit class name; derived from the input when absent
    pub class_name: Option<String>,
    pub overload_policy: OverloadPolicy,
    /// Prefix for placeholder names of unnamed inputs
    pub unnamed_prefix: String,
    /// One indentation unit
    pub indent: String,
    /// Emit documentation comments for the constructor and methods
    pub emit_docs: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            framework: Framework::default(),
            class_name: None,
            overload_policy: OverloadPolicy::default(),
            unnamed_prefix: "argv".to_string(),
            indent: "  ".to_string(),
            emit_docs: true,
        }
    }
}

impl GeneratorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.unnamed_prefix.is_empty() {
            return Err(ConfigError::EmptyUnnamedPrefix);
        }

        if !is_identifier(&self.unnamed_prefix) {
            return Err(ConfigError::InvalidIdentifier {
                field: "unnamed_prefix",
                value: self.unnamed_prefix.clone(),
            });
        }
        if is_reserved_word(&self.unnamed_prefix) {
            return Err(ConfigError::ReservedWord {
                field: "unnamed_prefix",
                value: self.unnamed_prefix.clone(),
            });
        }

        if self.indent.is_empty() || !self.indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(ConfigError::InvalidIndent(self.indent.clone()));
        }

        if let Some(name) = &self.class_name {
            if !is_identifier(name) {
                return Err(ConfigError::InvalidIdentifier {
                    field: "class_name",
                    value: name.clone(),
                });
            }
            if is_reserved_word(name) {
                return Err(ConfigError::ReservedWord {
                    field: "class_name",
                    value: name.clone(),
                });
            }
        }

        Ok(())
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        let config: GeneratorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file
    pub async fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            crate::Error::io(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded generator config");
        Ok(config)
    }

    /// File extension matching the configured dialect
    pub fn file_extension(&self) -> &'static str {
        match self.dialect {
            Dialect::JavaScript => "js",
            Dialect::TypeScript => "ts",
        }
    }
}

/// Returns true if `s` is usable as a JavaScript identifier
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Returns true if `s` is a reserved word of the generated language
pub fn is_reserved_word(s: &str) -> bool {
    RESERVED_WORDS.contains(&s)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unnamed parameter prefix cannot be empty")]
    EmptyUnnamedPrefix,
    #[error("Invalid identifier for {field}: '{value}'")]
    InvalidIdentifier { field: &'static str, value: String },
    #[error("Reserved word used for {field}: '{value}'")]
    ReservedWord { field: &'static str, value: String },
    #[error("Indent must be a non-empty run of spaces or tabs, got {0:?}")]
    InvalidIndent(String),
    #[error("Unknown dialect '{0}' (expected javascript or typescript)")]
    UnknownDialect(String),
    #[error("Unknown framework '{0}' (expected ethers or truffle)")]
    UnknownFramework(String),
    #[error("Unknown overload policy '{0}' (expected preserve, mangle or reject)")]
    UnknownOverloadPolicy(String),
}

impl FromStr for Dialect {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "javascript" | "js" => Ok(Dialect::JavaScript),
            "typescript" | "ts" => Ok(Dialect::TypeScript),
            _ => Err(ConfigError::UnknownDialect(s.to_string())),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::JavaScript => write!(f, "javascript"),
            Dialect::TypeScript => write!(f, "typescript"),
        }
    }
}

impl FromStr for Framework {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ethers" => Ok(Framework::Ethers),
            "truffle" => Ok(Framework::Truffle),
            _ => Err(ConfigError::UnknownFramework(s.to_string())),
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Framework::Ethers => write!(f, "ethers"),
            Framework::Truffle => write!(f, "truffle"),
        }
    }
}

impl FromStr for OverloadPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "preserve" => Ok(OverloadPolicy::Preserve),
            "mangle" => Ok(OverloadPolicy::Mangle),
            "reject" => Ok(OverloadPolicy::Reject),
            _ => Err(ConfigError::UnknownOverloadPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for OverloadPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverloadPolicy::Preserve => write!(f, "preserve"),
            OverloadPolicy::Mangle => write!(f, "mangle"),
            OverloadPolicy::Reject => write!(f, "reject"),
        }
    }
}
