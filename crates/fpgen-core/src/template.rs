//! Named-placeholder templates with a fixed schema per template family.
//!
//! A placeholder is written `<NAME>` where `NAME` is an upper-case identifier
//! (`A-Z`, `0-9`, `_`, starting with a letter). Any other `<` is ordinary
//! text, so comparisons such as `i < len(list)` in a template body pass
//! through untouched. Rendering is a single left-to-right pass: a substituted
//! value is never scanned again.

use std::collections::HashMap;
use std::fmt;

use crate::error::{TemplateError, TemplateErrorKind, TemplateResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Package,
    Type,
    ConditionalType,
    FinputType,
    FoutputType,
    InputType,
    OutputType,
    FinputType1,
    FinputType2,
    InputType1,
    InputType2,
    Ftype,
}

impl Placeholder {
    pub const ALL: [Placeholder; 12] = [
        Placeholder::Package,
        Placeholder::Type,
        Placeholder::ConditionalType,
        Placeholder::FinputType,
        Placeholder::FoutputType,
        Placeholder::InputType,
        Placeholder::OutputType,
        Placeholder::FinputType1,
        Placeholder::FinputType2,
        Placeholder::InputType1,
        Placeholder::InputType2,
        Placeholder::Ftype,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Placeholder::Package => "PACKAGE",
            Placeholder::Type => "TYPE",
            Placeholder::ConditionalType => "CONDITIONAL_TYPE",
            Placeholder::FinputType => "FINPUT_TYPE",
            Placeholder::FoutputType => "FOUTPUT_TYPE",
            Placeholder::InputType => "INPUT_TYPE",
            Placeholder::OutputType => "OUTPUT_TYPE",
            Placeholder::FinputType1 => "FINPUT_TYPE1",
            Placeholder::FinputType2 => "FINPUT_TYPE2",
            Placeholder::InputType1 => "INPUT_TYPE1",
            Placeholder::InputType2 => "INPUT_TYPE2",
            Placeholder::Ftype => "FTYPE",
        }
    }

    pub fn from_name(name: &str) -> Option<Placeholder> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which expander a template belongs to; decides the placeholders it may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Single,
    PairwiseIo,
    Combiner,
    Test,
}

impl Family {
    pub fn schema(self) -> &'static [Placeholder] {
        match self {
            Family::Single => &[Placeholder::Package, Placeholder::Type, Placeholder::ConditionalType],
            Family::PairwiseIo => &[
                Placeholder::FinputType,
                Placeholder::FoutputType,
                Placeholder::InputType,
                Placeholder::OutputType,
            ],
            Family::Combiner => &[
                Placeholder::FinputType1,
                Placeholder::FinputType2,
                Placeholder::InputType1,
                Placeholder::InputType2,
            ],
            Family::Test => &[Placeholder::Type, Placeholder::Ftype],
        }
    }

    pub fn allows(self, placeholder: Placeholder) -> bool {
        self.schema().contains(&placeholder)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Family::Single => "single-type",
            Family::PairwiseIo => "pairwise input/output",
            Family::Combiner => "pairwise combiner",
            Family::Test => "test",
        };
        f.write_str(s)
    }
}

/// Values for one instantiation of a template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    values: HashMap<Placeholder, String>,
}

impl Bindings {
    pub fn new() -> Self { Self::default() }

    pub fn bind(mut self, placeholder: Placeholder, value: impl Into<String>) -> Self {
        self.values.insert(placeholder, value.into());
        self
    }

    pub fn get(&self, placeholder: Placeholder) -> Option<&str> {
        self.values.get(&placeholder).map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub name: &'static str,
    pub family: Family,
    pub body: &'static str,
}

impl Template {
    pub const fn new(name: &'static str, family: Family, body: &'static str) -> Self {
        Self { name, family, body }
    }

    /// Checks every placeholder in the body against the family schema.
    pub fn validate(&self) -> TemplateResult<()> {
        for seg in Scanner::new(self.body) {
            if let Segment::Placeholder { name, offset } = seg {
                self.resolve(name, offset)?;
            }
        }
        Ok(())
    }

    pub fn render(&self, bindings: &Bindings) -> TemplateResult<String> {
        let mut out = String::with_capacity(self.body.len());
        for seg in Scanner::new(self.body) {
            match seg {
                Segment::Text(text) => out.push_str(text),
                Segment::Placeholder { name, offset } => {
                    let placeholder = self.resolve(name, offset)?;
                    let value = bindings
                        .get(placeholder)
                        .ok_or_else(|| self.error(TemplateErrorKind::Unbound { placeholder }, offset))?;
                    out.push_str(value);
                }
            }
        }
        tracing::trace!(template = self.name, len = out.len(), "rendered template");
        Ok(out)
    }

    fn resolve(&self, name: &str, offset: usize) -> TemplateResult<Placeholder> {
        let placeholder = Placeholder::from_name(name).ok_or_else(|| {
            self.error(TemplateErrorKind::UnknownPlaceholder { name: name.to_string() }, offset)
        })?;
        if !self.family.allows(placeholder) {
            return Err(self.error(TemplateErrorKind::OutOfSchema { placeholder, family: self.family }, offset));
        }
        Ok(placeholder)
    }

    fn error(&self, kind: TemplateErrorKind, offset: usize) -> TemplateError {
        TemplateError { kind, template: self.name, offset }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Placeholder { name: &'a str, offset: usize },
}

struct Scanner<'a> {
    src: &'a str,
    idx: usize,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str) -> Self { Self { src, idx: 0 } }

    /// Length of the `<NAME>` token starting at `at`, if there is one.
    fn placeholder_at(&self, at: usize) -> Option<usize> {
        let bytes = self.src.as_bytes();
        if bytes.get(at) != Some(&b'<') { return None; }
        let mut end = at + 1;
        if !bytes.get(end).is_some_and(u8::is_ascii_uppercase) { return None; }
        while bytes.get(end).is_some_and(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || *b == b'_') {
            end += 1;
        }
        if bytes.get(end) == Some(&b'>') { Some(end + 1 - at) } else { None }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        if self.idx >= self.src.len() { return None; }
        if let Some(len) = self.placeholder_at(self.idx) {
            let offset = self.idx;
            self.idx += len;
            return Some(Segment::Placeholder { name: &self.src[offset + 1..offset + len - 1], offset });
        }
        let start = self.idx;
        // step past a `<` that did not open a placeholder, then run to the next one
        let mut end = start + 1;
        while end < self.src.len() && self.placeholder_at(end).is_none() {
            end += 1;
        }
        self.idx = end;
        Some(Segment::Text(&self.src[start..end]))
    }
}
