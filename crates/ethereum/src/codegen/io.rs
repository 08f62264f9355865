//! Parameter-list and return-type literals

use super::dialect::DialectConfig;
use super::grouper::{IoAttribute, ParameterDescriptor};
use super::names::NameAllocator;
use super::tokens::{
    CLOSE_BRACKET, CLOSE_PAREN, EMPTY, EMPTY_PARAMS, LIST_SEPARATOR, OPEN_BRACKET, OPEN_PAREN,
    SPACE, TYPE_SEPARATOR,
};
use super::type_mapper::TypeMapper;

/// Builds the input and output literals of one function
pub struct IoLiteralBuilder<'a> {
    dialect: &'a DialectConfig,
    mapper: TypeMapper<'a>,
}

impl<'a> IoLiteralBuilder<'a> {
    pub fn new(dialect: &'a DialectConfig) -> Self {
        Self {
            dialect,
            mapper: TypeMapper::new(&dialect.types),
        }
    }

    /// Annotate inputs with allocated names and inferred types, and build
    /// ` (a: T, b: U) ` (or `()` when there are none).
    pub fn build_inputs(&self, params: &[ParameterDescriptor]) -> IoAttribute {
        let mut names = NameAllocator::with_declared(
            &self.dialect.unnamed_prefix,
            params.iter().map(|p| p.name.as_str()),
        );

        let params: Vec<ParameterDescriptor> = params
            .iter()
            .map(|param| ParameterDescriptor {
                name: names.allocate(&param.name),
                param_type: param.param_type.clone(),
                inferred_type: Some(self.mapper.infer(&param.param_type, false)),
            })
            .collect();

        let literal = if params.is_empty() {
            EMPTY_PARAMS.to_string()
        } else {
            let entries: Vec<String> = params.iter().map(|p| self.input_entry(p)).collect();
            format!(
                "{}{}{}{}{}",
                SPACE,
                OPEN_PAREN,
                entries.join(LIST_SEPARATOR),
                CLOSE_PAREN,
                SPACE
            )
        };

        IoAttribute {
            params,
            literal: Some(literal),
        }
    }

    /// Annotate outputs with inferred types and build the asynchronous
    /// return type. State-changing functions always resolve `Promise<any>`.
    pub fn build_outputs(&self, params: &[ParameterDescriptor], is_constant: bool) -> IoAttribute {
        let params: Vec<ParameterDescriptor> = params
            .iter()
            .map(|param| ParameterDescriptor {
                name: param.name.clone(),
                param_type: param.param_type.clone(),
                inferred_type: Some(self.mapper.infer(&param.param_type, true)),
            })
            .collect();

        let types: Vec<&str> = params
            .iter()
            .filter_map(|p| p.inferred_type.as_deref())
            .collect();

        let literal = if !is_constant {
            self.dialect.fallback_async()
        } else {
            match types.as_slice() {
                [] => EMPTY.to_string(),
                [single] => self.dialect.async_of(single),
                many => self.dialect.async_of(&format!(
                    "{}{}{}",
                    OPEN_BRACKET,
                    many.join(LIST_SEPARATOR),
                    CLOSE_BRACKET
                )),
            }
        };

        IoAttribute {
            params,
            literal: Some(literal),
        }
    }

    fn input_entry(&self, param: &ParameterDescriptor) -> String {
        match (&param.inferred_type, self.dialect.annotated()) {
            (Some(ty), true) => format!("{}{}{}", param.name, TYPE_SEPARATOR, ty),
            _ => param.name.clone(),
        }
    }
}
