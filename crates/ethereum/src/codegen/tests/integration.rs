//! Integration tests for Ethereum wrapper generation

use crate::codegen::dialect::{DialectConfig, JAVASCRIPT_TYPES, TYPESCRIPT_TYPES};
use crate::codegen::grouper::ParameterDescriptor;
use crate::codegen::io::IoLiteralBuilder;
use crate::codegen::type_mapper::TypeMapper;
use crate::codegen::{
    derive_class_name, generate_wrapper, generate_wrapper_file, AbiParser, Pipeline,
};
use std::fs;
use tempfile::TempDir;
use wrapgen_core::{Dialect, Error, Framework, GeneratorConfig, OverloadPolicy, Result};

/// Real ERC20 contract ABI for testing
const ERC20_ABI: &str = r#"[
  {
    "type": "constructor",
    "inputs": [
      {"name": "_name", "type": "string", "internalType": "string"},
      {"name": "_symbol", "type": "string", "internalType": "string"},
      {"name": "_decimals", "type": "uint8", "internalType": "uint8"},
      {"name": "_initialSupply", "type": "uint256", "internalType": "uint256"}
    ]
  },
  {
    "type": "function",
    "name": "name",
    "inputs": [],
    "outputs": [{"name": "", "type": "string", "internalType": "string"}],
    "stateMutability": "view"
  },
  {
    "type": "function",
    "name": "symbol",
    "inputs": [],
    "outputs": [{"name": "", "type": "string", "internalType": "string"}],
    "stateMutability": "view"
  },
  {
    "type": "function",
    "name": "decimals",
    "inputs": [],
    "outputs": [{"name": "", "type": "uint8", "internalType": "uint8"}],
    "stateMutability": "view"
  },
  {
    "type": "function",
    "name": "totalSupply",
    "inputs": [],
    "outputs": [{"name": "", "type": "uint256", "internalType": "uint256"}],
    "stateMutability": "view"
  },
  {
    "type": "function",
    "name": "balanceOf",
    "inputs": [{"name": "account", "type": "address", "internalType": "address"}],
    "outputs": [{"name": "", "type": "uint256", "internalType": "uint256"}],
    "stateMutability": "view"
  },
  {
    "type": "function",
    "name": "transfer",
    "inputs": [
      {"name": "to", "type": "address", "internalType": "address"},
      {"name": "amount", "type": "uint256", "internalType": "uint256"}
    ],
    "outputs": [{"name": "", "type": "bool", "internalType": "bool"}],
    "stateMutability": "nonpayable"
  },
  {
    "type": "function",
    "name": "allowance",
    "inputs": [
      {"name": "owner", "type": "address", "internalType": "address"},
      {"name": "spender", "type": "address", "internalType": "address"}
    ],
    "outputs": [{"name": "", "type": "uint256", "internalType": "uint256"}],
    "stateMutability": "view"
  },
  {
    "type": "function",
    "name": "approve",
    "inputs": [
      {"name": "spender", "type": "address", "internalType": "address"},
      {"name": "amount", "type": "uint256", "internalType": "uint256"}
    ],
    "outputs": [{"name": "", "type": "bool", "internalType": "bool"}],
    "stateMutability": "nonpayable"
  },
  {
    "type": "function",
    "name": "transferFrom",
    "inputs": [
      {"name": "from", "type": "address", "internalType": "address"},
      {"name": "to", "type": "address", "internalType": "address"},
      {"name": "amount", "type": "uint256", "internalType": "uint256"}
    ],
    "outputs": [{"name": "", "type": "bool", "internalType": "bool"}],
    "stateMutability": "nonpayable"
  },
  {
    "type": "event",
    "name": "Transfer",
    "inputs": [
      {"name": "from", "type": "address", "indexed": true, "internalType": "address"},
      {"name": "to", "type": "address", "indexed": true, "internalType": "address"},
      {"name": "value", "type": "uint256", "indexed": false, "internalType": "uint256"}
    ],
    "anonymous": false
  },
  {
    "type": "event",
    "name": "Approval",
    "inputs": [
      {"name": "owner", "type": "address", "indexed": true, "internalType": "address"},
      {"name": "spender", "type": "address", "indexed": true, "internalType": "address"},
      {"name": "value", "type": "uint256", "indexed": false, "internalType": "uint256"}
    ],
    "anonymous": false
  }
]"#;

/// Two functions, one read-only, one state-changing with an unnamed input
const SMALL_ABI: &str = r#"[
  {
    "type": "function",
    "name": "balanceOf",
    "inputs": [{"name": "owner", "type": "address"}],
    "outputs": [{"name": "", "type": "uint256"}],
    "stateMutability": "view"
  },
  {
    "type": "function",
    "name": "transfer",
    "inputs": [{"name": "to", "type": "address"}, {"name": "", "type": "uint256"}],
    "outputs": [{"name": "", "type": "bool"}],
    "stateMutability": "nonpayable"
  }
]"#;

const SMALL_TYPESCRIPT_ETHERS: &str = r#"import { ethers, BigNumber, BigNumberish } from "ethers";

class Token {
  contract: ethers.Contract;
  contractAddress: string;

  constructor(contractAddress: string, abi: any, signerOrProvider?: ethers.Signer | ethers.providers.Provider) {
    this.contract = new ethers.Contract(contractAddress, abi, signerOrProvider);
    this.contractAddress = contractAddress;
  }

  public async balanceOf (owner: string) : Promise<BigNumber> {
    return this.contract.balanceOf(owner);
  }

  public async transfer (to: string, argv0: BigNumberish) : Promise<any> {
    return this.contract.transfer(to, argv0);
  }

}

export { Token };
"#;

const SMALL_JAVASCRIPT_TRUFFLE: &str = r#"class Token {
  contract;
  contractAddress;

  constructor(contractAddress, contract) {
    this.contract = contract;
    this.contractAddress = contractAddress;
  }

  async balanceOf (owner) {
    return this.contract.balanceOf.call(owner);
  }

  async transfer (to, argv0) {
    return this.contract.transfer(to, argv0);
  }

}

module.exports = { Token };
"#;

fn config(dialect: Dialect, framework: Framework) -> GeneratorConfig {
    GeneratorConfig {
        dialect,
        framework,
        class_name: Some("Token".to_string()),
        emit_docs: false,
        ..GeneratorConfig::default()
    }
}

#[test]
fn test_typescript_ethers_end_to_end() -> Result<()> {
    let wrapper = generate_wrapper(SMALL_ABI, &config(Dialect::TypeScript, Framework::Ethers))?;
    assert_eq!(wrapper.source, SMALL_TYPESCRIPT_ETHERS);
    assert_eq!(wrapper.class_name, "Token");
    assert_eq!(wrapper.file_name(), "Token.ts");
    assert_eq!(wrapper.methods, 2);
    Ok(())
}

#[test]
fn test_javascript_truffle_end_to_end() -> Result<()> {
    let wrapper = generate_wrapper(SMALL_ABI, &config(Dialect::JavaScript, Framework::Truffle))?;
    assert_eq!(wrapper.source, SMALL_JAVASCRIPT_TRUFFLE);
    assert_eq!(wrapper.file_name(), "Token.js");
    Ok(())
}

#[test]
fn test_erc20_methods_in_declaration_order() -> Result<()> {
    let wrapper = generate_wrapper(ERC20_ABI, &GeneratorConfig::default())?;
    assert_eq!(wrapper.methods, 9);
    assert_eq!(wrapper.class_name, "Contract");

    let order = [
        "public async name(): Promise<string> {",
        "public async symbol(): Promise<string> {",
        "public async decimals(): Promise<BigNumber> {",
        "public async totalSupply(): Promise<BigNumber> {",
        "public async balanceOf (account: string) : Promise<BigNumber> {",
        "public async transfer (to: string, amount: BigNumberish) : Promise<any> {",
        "public async allowance (owner: string, spender: string) : Promise<BigNumber> {",
        "public async approve (spender: string, amount: BigNumberish) : Promise<any> {",
        "public async transferFrom (from: string, to: string, amount: BigNumberish) : Promise<any> {",
    ];
    let mut last = 0;
    for declaration in order {
        let position = wrapper.source[last..]
            .find(declaration)
            .unwrap_or_else(|| panic!("missing or out of order: {}", declaration));
        last += position + declaration.len();
    }

    // constructor and events do not become methods
    assert!(!wrapper.source.contains("Transfer ("));
    assert!(!wrapper.source.contains("Approval"));
    Ok(())
}

#[test]
fn test_erc20_docs() -> Result<()> {
    let wrapper = generate_wrapper(ERC20_ABI, &GeneratorConfig::default())?;
    assert!(wrapper.source.contains(
        "  /**\n   * Calls `balanceOf(address)` (view).\n   * Selector: 0x70a08231\n   *\n   * @param account - address\n   * @returns uint256\n   */\n  public async balanceOf"
    ));
    assert!(wrapper.source.contains(
        "   * Calls `transfer(address,uint256)` (nonpayable).\n   * Selector: 0xa9059cbb\n"
    ));
    assert!(wrapper.source.contains("   * @returns transaction response\n"));

    let js = generate_wrapper(
        ERC20_ABI,
        &GeneratorConfig {
            dialect: Dialect::JavaScript,
            ..GeneratorConfig::default()
        },
    )?;
    assert!(js.source.starts_with("const ethers = require(\"ethers\");\n\n"));
    assert!(js.source.contains("   * @param {BigNumber} amount\n"));
    assert!(js.source.contains("   * @returns {Promise<BigNumber>}\n   */\n  async totalSupply() {"));
    assert!(js.source.contains("  constructor(contractAddress, abi, signerOrProvider = undefined) {"));
    Ok(())
}

#[test]
fn test_artifact_contract_name_becomes_class_name() -> Result<()> {
    let artifact = format!(r#"{{"contractName": "my_token", "abi": {}}}"#, SMALL_ABI);
    let wrapper = generate_wrapper(&artifact, &GeneratorConfig::default())?;
    assert_eq!(wrapper.class_name, "MyToken");
    assert!(wrapper.source.contains("class MyToken {\n"));
    assert!(wrapper.source.ends_with("export { MyToken };\n"));
    Ok(())
}

#[test]
fn test_generation_is_idempotent() -> Result<()> {
    for dialect in [Dialect::JavaScript, Dialect::TypeScript] {
        for framework in [Framework::Ethers, Framework::Truffle] {
            let config = GeneratorConfig {
                dialect,
                framework,
                ..GeneratorConfig::default()
            };
            let first = generate_wrapper(ERC20_ABI, &config)?;
            let second = generate_wrapper(ERC20_ABI, &config)?;
            assert_eq!(first, second);
        }
    }
    Ok(())
}

#[test]
fn test_balance_of_method() -> Result<()> {
    let interface = AbiParser::new().parse_content(SMALL_ABI)?;
    let pipeline = Pipeline::new(GeneratorConfig::default())?;
    let tree = pipeline.build_tree(&interface.functions[..1])?;
    assert_eq!(
        tree[0].signature_literal.as_deref(),
        Some("  public async balanceOf (owner: string) : Promise<BigNumber> {\n    return this.contract.balanceOf(owner);\n  }\n\n")
    );
    Ok(())
}

#[test]
fn test_placeholder_counter_restarts_per_function() -> Result<()> {
    let abi = r#"[
      {"name": "a", "inputs": [{"name": "", "type": "uint8"}, {"name": "y", "type": "bool"}, {"name": "", "type": "string"}], "outputs": [], "stateMutability": "view"},
      {"name": "b", "inputs": [{"name": "", "type": "address"}], "outputs": [], "stateMutability": "view"}
    ]"#;
    let wrapper = generate_wrapper(abi, &GeneratorConfig::default())?;
    assert!(wrapper
        .source
        .contains("public async a (argv0: BigNumberish, y: boolean, argv1: string) : Promise<any> {"));
    assert!(wrapper.source.contains("public async b (argv0: string) : Promise<any> {"));
    Ok(())
}

#[test]
fn test_placeholder_never_shadows_declared_input() -> Result<()> {
    let abi = r#"[
      {"name": "f", "inputs": [{"name": "argv0", "type": "uint8"}, {"name": "", "type": "bool"}], "outputs": [], "stateMutability": "nonpayable"}
    ]"#;
    let wrapper = generate_wrapper(abi, &GeneratorConfig::default())?;
    assert!(wrapper
        .source
        .contains("public async f (argv0: BigNumberish, argv1: boolean) : Promise<any> {"));
    assert!(wrapper.source.contains("return this.contract.f(argv0, argv1);"));
    Ok(())
}

#[test]
fn test_integer_tags_with_every_width() {
    let ts = TypeMapper::new(&TYPESCRIPT_TYPES);
    let js = TypeMapper::new(&JAVASCRIPT_TYPES);
    for width in (8..=256).step_by(8) {
        for family in ["int", "uint"] {
            let tag = format!("{}{}", family, width);
            assert_eq!(ts.infer(&tag, false), "BigNumberish");
            assert_eq!(ts.infer(&tag, true), "BigNumber");
            assert_eq!(js.infer(&tag, false), "BigNumber");
            assert_eq!(ts.infer(&format!("{}[]", tag), true), "BigNumber[]");
        }
    }
    for tag in ["bytes", "bytes32", "tuple", "function", "fixed128x18"] {
        assert_eq!(ts.infer(tag, false), "any");
        assert_eq!(ts.infer(&format!("{}[]", tag), false), "any[]");
    }
}

#[test]
fn test_state_changing_outputs_never_typed() {
    let dialect = DialectConfig::default();
    let builder = IoLiteralBuilder::new(&dialect);
    let interface = AbiParser::new().parse_content(ERC20_ABI).unwrap();
    for function in &interface.functions {
        let outputs: Vec<ParameterDescriptor> =
            function.outputs.iter().map(ParameterDescriptor::from).collect();
        let built = builder.build_outputs(&outputs, function.constant);
        if !function.constant {
            assert_eq!(built.literal.as_deref(), Some("Promise<any>"), "{}", function.name);
        }
    }
}

#[test]
fn test_malformed_descriptor_is_reported_before_generation() {
    let abi = r#"[
      {"type": "function", "name": "ok", "inputs": [], "outputs": [], "stateMutability": "view"},
      {"type": "function", "name": "broken", "inputs": [], "stateMutability": "view"}
    ]"#;
    match generate_wrapper(abi, &GeneratorConfig::default()) {
        Err(Error::MalformedDescriptor { index, .. }) => assert_eq!(index, 1),
        other => panic!("expected malformed descriptor, got {:?}", other),
    }
}

#[test]
fn test_overload_policies_end_to_end() {
    let abi = r#"[
      {"type": "function", "name": "safeTransferFrom", "inputs": [{"name": "from", "type": "address"}, {"name": "to", "type": "address"}, {"name": "id", "type": "uint256"}], "outputs": [], "stateMutability": "nonpayable"},
      {"type": "function", "name": "safeTransferFrom", "inputs": [{"name": "from", "type": "address"}, {"name": "to", "type": "address"}, {"name": "id", "type": "uint256"}, {"name": "data", "type": "bytes"}], "outputs": [], "stateMutability": "nonpayable"}
    ]"#;

    let preserve = generate_wrapper(
        abi,
        &GeneratorConfig {
            overload_policy: OverloadPolicy::Preserve,
            ..GeneratorConfig::default()
        },
    )
    .unwrap();
    assert_eq!(preserve.source.matches("public async safeTransferFrom (").count(), 2);

    let mangle = generate_wrapper(abi, &GeneratorConfig::default()).unwrap();
    assert!(mangle.source.contains("public async safeTransferFrom_1 ("));
    assert!(mangle
        .source
        .contains("return this.contract[\"safeTransferFrom(address,address,uint256,bytes)\"](from, to, id, data);"));

    let reject = generate_wrapper(
        abi,
        &GeneratorConfig {
            overload_policy: OverloadPolicy::Reject,
            ..GeneratorConfig::default()
        },
    );
    assert!(matches!(reject, Err(Error::AmbiguousOverload { count: 2, .. })));
}

#[test]
fn test_derive_class_name() {
    assert_eq!(derive_class_name("my_token"), "MyToken");
    assert_eq!(derive_class_name("MyToken"), "MyToken");
    assert_eq!(derive_class_name("vault-router"), "VaultRouter");
    assert_eq!(derive_class_name("!!!"), "Contract");
}

#[tokio::test]
async fn test_generate_wrapper_file_writes_output() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let abi_path = temp_dir.path().join("simple_token.json");
    fs::write(&abi_path, SMALL_ABI).unwrap();

    let out_dir = temp_dir.path().join("generated");
    fs::create_dir(&out_dir).unwrap();

    let path = generate_wrapper_file(&abi_path, Some(&out_dir), &GeneratorConfig::default(), false)
        .await?;
    assert_eq!(path, out_dir.join("SimpleToken.ts"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("class SimpleToken {\n"));
    assert!(content.ends_with("export { SimpleToken };\n"));
    Ok(())
}

#[tokio::test]
async fn test_generate_wrapper_file_creates_parent_directories() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let abi_path = temp_dir.path().join("token.json");
    fs::write(&abi_path, SMALL_ABI).unwrap();

    let out = temp_dir.path().join("nested").join("deeper").join("token.js");
    let config = config(Dialect::JavaScript, Framework::Truffle);
    let path = generate_wrapper_file(&abi_path, Some(&out), &config, false).await?;

    assert_eq!(path, out);
    assert_eq!(fs::read_to_string(&out).unwrap(), SMALL_JAVASCRIPT_TRUFFLE);
    Ok(())
}

#[tokio::test]
async fn test_generate_wrapper_file_defaults_next_to_abi() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let abi_path = temp_dir.path().join("token.json");
    fs::write(&abi_path, SMALL_ABI).unwrap();

    let path = generate_wrapper_file(&abi_path, None, &GeneratorConfig::default(), false).await?;
    assert_eq!(path, temp_dir.path().join("Token.ts"));
    assert!(path.exists());
    Ok(())
}

#[tokio::test]
async fn test_dry_run_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let abi_path = temp_dir.path().join("token.json");
    fs::write(&abi_path, ERC20_ABI).unwrap();

    let out = temp_dir.path().join("out").join("Token.ts");
    let path = generate_wrapper_file(&abi_path, Some(&out), &GeneratorConfig::default(), true)
        .await?;

    assert_eq!(path, out);
    assert!(!out.exists());
    assert!(!temp_dir.path().join("out").exists());
    Ok(())
}

#[tokio::test]
async fn test_missing_abi_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = generate_wrapper_file(
        &temp_dir.path().join("missing.json"),
        None,
        &GeneratorConfig::default(),
        false,
    )
    .await;
    assert!(matches!(result, Err(Error::Io(_))));
}
