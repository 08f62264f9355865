//! Contract wrapper generation from Ethereum ABI descriptions

pub mod codegen;

pub use codegen::{
    generate_wrapper, generate_wrapper_file, AbiFunction, AbiParameter, AbiParser,
    BodyComposer, ContractCallComposer, GeneratedWrapper, InterfaceDescription, Pipeline,
};
