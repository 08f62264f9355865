//! Wrapper generation for Ethereum contracts
//!
//! This module turns a contract ABI into the source of a JavaScript or
//! TypeScript class that forwards one asynchronous method per ABI function
//! to an ethers or truffle contract instance.

pub mod body;
pub mod class;
pub mod cli;
pub mod dialect;
pub mod doc;
pub mod grouper;
pub mod io;
pub mod names;
pub mod parser;
pub mod pipeline;
pub mod signature;
pub mod tokens;
pub mod type_mapper;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use convert_case::{Case, Casing};
use tracing::info;
use wrapgen_core::config::is_identifier;
use wrapgen_core::{Error, GeneratorConfig, Result};

pub use body::{BodyComposer, ContractCallComposer};
pub use parser::{AbiFunction, AbiParameter, AbiParser, InterfaceDescription};
pub use pipeline::Pipeline;

/// Class name used when nothing better can be derived
pub const DEFAULT_CLASS_NAME: &str = "Contract";

/// Generated wrapper source and what it was generated as
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedWrapper {
    pub class_name: String,
    /// `js` or `ts`
    pub extension: &'static str,
    pub methods: usize,
    pub source: String,
}

impl GeneratedWrapper {
    /// File name the wrapper is written under by default
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.class_name, self.extension)
    }
}

/// Generate a wrapper from ABI JSON text.
///
/// The class name is taken from the configuration, then from the artifact's
/// `contractName`, and falls back to [`DEFAULT_CLASS_NAME`].
pub fn generate_wrapper(abi_json: &str, config: &GeneratorConfig) -> Result<GeneratedWrapper> {
    let interface = AbiParser::new().parse_content(abi_json)?;
    generate_from_interface(&interface, None, config)
}

/// Generate a wrapper from an ABI file and write it to disk.
///
/// `out` may name a file or an existing directory; without it the wrapper is
/// written next to the ABI file. On a dry run the source is printed instead.
/// Returns the path the wrapper was (or would have been) written to.
pub async fn generate_wrapper_file(
    abi_path: &Path,
    out: Option<&Path>,
    config: &GeneratorConfig,
    dry_run: bool,
) -> Result<PathBuf> {
    let interface = AbiParser::new().parse_file(abi_path).await?;
    let stem = abi_path.file_stem().and_then(|s| s.to_str());
    let wrapper = generate_from_interface(&interface, stem, config)?;

    let out_is_dir = match out {
        Some(out) => tokio::fs::metadata(out).await.map(|m| m.is_dir()).unwrap_or(false),
        None => false,
    };

    let path = match out {
        Some(out) if out_is_dir => out.join(wrapper.file_name()),
        Some(out) => out.to_path_buf(),
        None => abi_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(wrapper.file_name()),
    };

    write_file(&path, &wrapper.source, dry_run).await?;

    if !dry_run {
        info!(path = %path.display(), class = %wrapper.class_name, "wrote wrapper");
    }

    Ok(path)
}

fn generate_from_interface(
    interface: &InterfaceDescription,
    file_stem: Option<&str>,
    config: &GeneratorConfig,
) -> Result<GeneratedWrapper> {
    let class_name = match &config.class_name {
        Some(name) => name.clone(),
        None => interface
            .contract_name
            .as_deref()
            .or(file_stem)
            .map(derive_class_name)
            .unwrap_or_else(|| DEFAULT_CLASS_NAME.to_string()),
    };

    let pipeline = Pipeline::new(config.clone())?;
    let source = pipeline.run(&interface.functions, &class_name)?;

    Ok(GeneratedWrapper {
        class_name,
        extension: config.file_extension(),
        methods: interface.functions.len(),
        source,
    })
}

/// PascalCase a contract or file name into a usable class name
pub fn derive_class_name(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();
    let name = cleaned.to_case(Case::Pascal);

    if is_identifier(&name) {
        name
    } else if !name.is_empty() && is_identifier(&format!("_{}", name)) {
        format!("_{}", name)
    } else {
        DEFAULT_CLASS_NAME.to_string()
    }
}

async fn write_file(path: &Path, content: &str, dry_run: bool) -> Result<()> {
    if dry_run {
        println!("\n--- {} ---", path.display());
        println!("{}", content);
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            Error::io(format!("Failed to create directory {}: {}", parent.display(), e))
        })?;
    }
    tokio::fs::write(path, content)
        .await
        .map_err(|e| Error::io(format!("Failed to write file {}: {}", path.display(), e)))
}
