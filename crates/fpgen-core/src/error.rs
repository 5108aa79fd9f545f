use thiserror::Error;

use crate::template::{Family, Placeholder};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateErrorKind {
    #[error("unknown placeholder <{name}>")]
    UnknownPlaceholder { name: String },
    #[error("placeholder <{placeholder}> is not allowed in {family} templates")]
    OutOfSchema { placeholder: Placeholder, family: Family },
    #[error("placeholder <{placeholder}> has no binding")]
    Unbound { placeholder: Placeholder },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("template `{template}` at byte {offset}: {kind}")]
pub struct TemplateError {
    pub kind: TemplateErrorKind,
    pub template: &'static str,
    pub offset: usize,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("package name is empty")]
    EmptyPackage,
    #[error("package name `{0}` is not a valid identifier")]
    InvalidPackage(String),
    #[error("type list is empty")]
    EmptyTypeList,
    #[error(transparent)]
    Template(#[from] TemplateError),
}

pub type TemplateResult<T> = Result<T, TemplateError>;
pub type GenerateResult<T> = Result<T, GenerateError>;
