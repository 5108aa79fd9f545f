use std::fmt;

use tracing::debug;

use crate::distinct::{distinct, split_list};
use crate::error::{GenerateError, GenerateResult};
use crate::expand::{
    expand_basic_catalogue, expand_basic_tests, expand_pairwise_combiner, expand_pairwise_io, expand_single, type_tokens,
};
use crate::types::{BasicMatch, TypeToken};

pub const HEADER: &str = "// Code generated by 'fpgen'. DO NOT EDIT.";

/// One generation request: the target package, its declared types and any
/// extra import paths the declared types need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub package: String,
    pub types: Vec<String>,
    pub imports: Vec<String>,
    pub basic_match: BasicMatch,
}

impl GenerateRequest {
    pub fn new<S: AsRef<str>>(package: &str, types: &[S]) -> Self {
        Self {
            package: package.trim().to_string(),
            types: types.iter().map(|t| t.as_ref().trim().to_string()).collect(),
            imports: Vec::new(),
            basic_match: BasicMatch::default(),
        }
    }

    /// Builds a request from comma-separated flag values.
    pub fn parse(package: &str, types: &str, imports: Option<&str>) -> Self {
        let req = Self::new(package, &split_list(types));
        match imports {
            Some(csv) => req.with_imports(&split_list(csv)),
            None => req,
        }
    }

    pub fn with_imports<S: AsRef<str>>(mut self, imports: &[S]) -> Self {
        self.imports = imports
            .iter()
            .map(|i| i.as_ref().trim().to_string())
            .filter(|i| !i.is_empty())
            .collect();
        self
    }

    pub fn with_basic_match(mut self, basic_match: BasicMatch) -> Self {
        self.basic_match = basic_match;
        self
    }

    /// Declared types, deduplicated ignoring case and classified.
    pub fn type_tokens(&self) -> Vec<TypeToken> {
        type_tokens(&self.types, self.basic_match)
    }

    pub fn validate(&self) -> GenerateResult<()> {
        validate_package(&self.package)?;
        if self.type_tokens().is_empty() {
            return Err(GenerateError::EmptyTypeList);
        }
        Ok(())
    }
}

fn validate_package(package: &str) -> GenerateResult<()> {
    let package = package.trim();
    let mut chars = package.chars();
    let Some(first) = chars.next() else {
        return Err(GenerateError::EmptyPackage);
    };
    let valid = (first.is_alphabetic() || first == '_') && chars.all(|c| c.is_alphanumeric() || c == '_');
    if !valid {
        return Err(GenerateError::InvalidPackage(package.to_string()));
    }
    Ok(())
}

/// The text of one generated Go file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    text: String,
}

impl GeneratedUnit {
    pub fn text(&self) -> &str { &self.text }

    pub fn into_text(self) -> String { self.text }

    /// Names of the declared functions, in file order.
    pub fn function_names(&self) -> Vec<&str> {
        self.text
            .lines()
            .filter_map(|line| line.strip_prefix("func "))
            .filter_map(|rest| rest.split_once('(').map(|(name, _)| name))
            .collect()
    }
}

impl fmt::Display for GeneratedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn preamble(package: &str, needs_sync: bool, imports: &[String]) -> String {
    let mut out = format!("{HEADER}\npackage {package}\n");
    if needs_sync {
        out.push_str("import \"sync\"\n");
    }
    for path in imports {
        out.push_str(&format!("import \"{path}\"\n"));
    }
    out.push('\n');
    out
}

/// Renders the single-type, cross-type and combiner operations for `req`.
pub fn generate(req: &GenerateRequest) -> GenerateResult<GeneratedUnit> {
    req.validate()?;
    let package = req.package.trim();
    let tokens = req.type_tokens();
    debug!(package, types = tokens.len(), imports = req.imports.len(), "generating");

    let single = expand_single(package, &tokens)?;
    let io = expand_pairwise_io(package, &tokens)?;
    let combiner = expand_pairwise_combiner(package, &tokens)?;

    // only the parallel maps reference sync
    let needs_sync = !single.is_empty() || !io.is_empty();
    let mut text = preamble(package, needs_sync, &distinct(&req.imports));
    text.push_str(&single);
    text.push('\n');
    text.push_str(&io);
    text.push('\n');
    text.push_str(&combiner);
    Ok(GeneratedUnit { text })
}

/// Renders the single-type operations for every basic type into `package`.
pub fn generate_basic(package: &str) -> GenerateResult<GeneratedUnit> {
    validate_package(package)?;
    let package = package.trim();
    debug!(package, "generating basic catalogue");
    let mut text = preamble(package, true, &[]);
    text.push_str(&expand_basic_catalogue(package)?);
    Ok(GeneratedUnit { text })
}

/// Renders the `_test.go` companion of [`generate_basic`].
pub fn generate_basic_tests(package: &str) -> GenerateResult<GeneratedUnit> {
    validate_package(package)?;
    let package = package.trim();
    debug!(package, "generating basic catalogue tests");
    let mut text = preamble(package, false, &["reflect".to_string(), "testing".to_string()]);
    text.push_str(&expand_basic_tests(package)?);
    Ok(GeneratedUnit { text })
}
