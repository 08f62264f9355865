//! CLI interface for wrapper generation

use std::path::{Path, PathBuf};

use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::debug;
use wrapgen_core::{Dialect, Error, Framework, GeneratorConfig, OverloadPolicy, Result};

use super::grouper::group;
use super::{generate_wrapper_file, AbiParser};

/// Build the CLI command for wrapper generation
pub fn build_generate_command() -> Command {
    Command::new("generate")
        .about("Generate a JavaScript or TypeScript wrapper class from a contract ABI")
        .arg(
            Arg::new("abi-file")
                .help("Path to the ABI JSON file or build artifact")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("dialect")
                .long("dialect")
                .help("Output dialect (javascript, typescript)")
                .value_name("DIALECT"),
        )
        .arg(
            Arg::new("framework")
                .long("framework")
                .help("Contract framework the wrapper binds to (ethers, truffle)")
                .value_name("FRAMEWORK"),
        )
        .arg(
            Arg::new("name")
                .long("name")
                .help("Class name of the generated wrapper")
                .value_name("NAME"),
        )
        .arg(
            Arg::new("out")
                .long("out")
                .short('o')
                .help("Output file or directory")
                .value_name("PATH"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML generator configuration; flags override its values")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("overloads")
                .long("overloads")
                .help("How overloaded function names are handled (preserve, mangle, reject)")
                .value_name("POLICY"),
        )
        .arg(
            Arg::new("no-docs")
                .long("no-docs")
                .help("Do not emit documentation comments")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Print the generated wrapper without writing files")
                .action(ArgAction::SetTrue),
        )
}

/// Build the CLI command that lists the functions of an ABI
pub fn build_inspect_command() -> Command {
    Command::new("inspect")
        .about("List the methods a wrapper would expose for a contract ABI")
        .arg(
            Arg::new("abi-file")
                .help("Path to the ABI JSON file or build artifact")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML generator configuration; only its overload policy is used")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("overloads")
                .long("overloads")
                .help("How overloaded function names are handled (preserve, mangle, reject)")
                .value_name("POLICY"),
        )
}

async fn base_config(matches: &ArgMatches) -> Result<GeneratorConfig> {
    match matches.get_one::<String>("config") {
        Some(path) => GeneratorConfig::load(path).await,
        None => Ok(GeneratorConfig::default()),
    }
}

/// Resolve the generator configuration from an optional file and flags
pub async fn config_from_matches(matches: &ArgMatches) -> Result<GeneratorConfig> {
    let mut config = base_config(matches).await?;

    if let Some(dialect) = matches.get_one::<String>("dialect") {
        config.dialect = dialect.parse::<Dialect>()?;
    }
    if let Some(framework) = matches.get_one::<String>("framework") {
        config.framework = framework.parse::<Framework>()?;
    }
    if let Some(name) = matches.get_one::<String>("name") {
        config.class_name = Some(name.clone());
    }
    if let Some(policy) = matches.get_one::<String>("overloads") {
        config.overload_policy = policy.parse::<OverloadPolicy>()?;
    }
    if matches.get_flag("no-docs") {
        config.emit_docs = false;
    }

    config.validate()?;
    Ok(config)
}

/// Handle the generate command
pub async fn handle_generate_command(matches: &ArgMatches) -> Result<()> {
    let abi_file = matches
        .get_one::<String>("abi-file")
        .ok_or_else(|| Error::generic("ABI file path is required"))?;
    let out = matches.get_one::<String>("out").map(PathBuf::from);
    let dry_run = matches.get_flag("dry-run");

    let config = config_from_matches(matches).await?;
    debug!(abi_file = %abi_file, ?config, dry_run, "generate");

    let path = generate_wrapper_file(Path::new(abi_file), out.as_deref(), &config, dry_run).await?;

    if !dry_run {
        println!("Generated {}", path.display());
    }

    Ok(())
}

/// Overload policy for inspect: `--overloads`, then the config file, then the default
pub async fn inspect_policy(matches: &ArgMatches) -> Result<OverloadPolicy> {
    match matches.get_one::<String>("overloads") {
        Some(policy) => Ok(policy.parse::<OverloadPolicy>()?),
        None => Ok(base_config(matches).await?.overload_policy),
    }
}

/// Handle the inspect command
pub async fn handle_inspect_command(matches: &ArgMatches) -> Result<()> {
    let abi_file = matches
        .get_one::<String>("abi-file")
        .ok_or_else(|| Error::generic("ABI file path is required"))?;
    let policy = inspect_policy(matches).await?;
    debug!(abi_file = %abi_file, ?policy, "inspect");

    let interface = AbiParser::new().parse_file(Path::new(abi_file)).await?;
    print!("{}", inspect_report(&interface.functions, policy)?);
    Ok(())
}

/// One line per emitted method: name, signature, selector and mutability
pub fn inspect_report(functions: &[super::AbiFunction], policy: OverloadPolicy) -> Result<String> {
    let tree = group(functions, policy)?;
    let width = tree.iter().map(|n| n.method_name.len()).max().unwrap_or(0);

    let mut report = String::new();
    for node in &tree {
        report.push_str(&format!(
            "{:<width$}  {}  {}  {}\n",
            node.method_name,
            node.selector,
            node.signature,
            if node.constant { "constant" } else { "mutating" },
            width = width
        ));
    }
    Ok(report)
}
