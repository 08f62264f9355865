//! Punctuation and keywords shared by the literal builders

pub const EMPTY: &str = "";
pub const SPACE: &str = " ";
pub const NEWLINE: &str = "\n";
pub const SEMICOLON: &str = ";";
pub const OPEN_PAREN: &str = "(";
pub const CLOSE_PAREN: &str = ")";
pub const OPEN_BRACE: &str = "{";
pub const CLOSE_BRACE: &str = "}";
pub const OPEN_ANGLE: &str = "<";
pub const CLOSE_ANGLE: &str = ">";
pub const OPEN_BRACKET: &str = "[";
pub const CLOSE_BRACKET: &str = "]";
pub const EMPTY_PARAMS: &str = "()";
pub const LIST_SEPARATOR: &str = ", ";
pub const TYPE_SEPARATOR: &str = ": ";

pub const ASYNC: &str = "async";
pub const PUBLIC: &str = "public";
pub const CLASS: &str = "class";
pub const CONSTRUCTOR: &str = "constructor";
pub const RETURN: &str = "return";
pub const THIS: &str = "this";
pub const PROMISE: &str = "Promise";

pub const DOC_OPEN: &str = "/**";
pub const DOC_LINE: &str = " *";
pub const DOC_CLOSE: &str = " */";

pub const INSTANCE_NAME: &str = "contract";
pub const ADDRESS_NAME: &str = "contractAddress";
pub const ABI_PARAM: &str = "abi";
pub const SIGNER_OR_PROVIDER: &str = "signerOrProvider";
