use std::fmt;

/// Scalar spellings the generator treats as built-in, in catalogue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicType {
    Int,
    Int64,
    Int32,
    Int16,
    Int8,
    Uint,
    Uint64,
    Uint32,
    Uint16,
    Uint8,
    Float64,
    Float32,
    String,
    Bool,
}

impl BasicType {
    pub const ALL: [BasicType; 14] = [
        BasicType::Int,
        BasicType::Int64,
        BasicType::Int32,
        BasicType::Int16,
        BasicType::Int8,
        BasicType::Uint,
        BasicType::Uint64,
        BasicType::Uint32,
        BasicType::Uint16,
        BasicType::Uint8,
        BasicType::Float64,
        BasicType::Float32,
        BasicType::String,
        BasicType::Bool,
    ];

    pub fn spelling(self) -> &'static str {
        match self {
            BasicType::Int => "int",
            BasicType::Int64 => "int64",
            BasicType::Int32 => "int32",
            BasicType::Int16 => "int16",
            BasicType::Int8 => "int8",
            BasicType::Uint => "uint",
            BasicType::Uint64 => "uint64",
            BasicType::Uint32 => "uint32",
            BasicType::Uint16 => "uint16",
            BasicType::Uint8 => "uint8",
            BasicType::Float64 => "float64",
            BasicType::Float32 => "float32",
            BasicType::String => "string",
            BasicType::Bool => "bool",
        }
    }

    pub fn from_spelling(s: &str) -> Option<BasicType> {
        let lower = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|b| b.spelling() == lower)
    }
}

impl fmt::Display for BasicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spelling())
    }
}

/// The catalogue as one comma-joined string, searched by [`BasicMatch::Substring`].
pub const BASIC_CATALOGUE: &str =
    "int, int64, int32, int16, int8, uint, uint64, uint32, uint16, uint8, float64, float32, string, bool";

/// How a declared type name is recognised as basic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BasicMatch {
    /// Lower-cased name must equal one of the basic spellings.
    #[default]
    Exact,
    /// Lower-cased name only has to occur somewhere inside [`BASIC_CATALOGUE`],
    /// so `in` or `t` count as basic. Kept for output compatibility with older
    /// generated files.
    Substring,
}

impl BasicMatch {
    pub fn is_basic(self, name: &str) -> bool {
        let lower = name.trim().to_lowercase();
        match self {
            BasicMatch::Exact => BasicType::from_spelling(&lower).is_some(),
            BasicMatch::Substring => BASIC_CATALOGUE.contains(lower.as_str()),
        }
    }
}

/// A declared type name after trimming and classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeToken {
    raw: String,
    basic: bool,
}

impl TypeToken {
    pub fn new(raw: &str, policy: BasicMatch) -> Self {
        let raw = raw.trim().to_string();
        let basic = policy.is_basic(&raw);
        Self { raw, basic }
    }

    /// The trimmed name as declared.
    pub fn raw(&self) -> &str { &self.raw }

    pub fn is_basic(&self) -> bool { self.basic }

    /// Spelling used where the generated code names the type itself.
    pub fn value_type(&self) -> String {
        if self.basic { self.raw.to_lowercase() } else { self.raw.clone() }
    }

    /// Spelling used as a suffix inside generated function names.
    pub fn display(&self) -> String {
        display_form(&self.value_type())
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Title-cases `name`, shortens `String` to `Str` and drops any package qualifier.
pub fn display_form(name: &str) -> String {
    let titled = title_case(name);
    if titled == "String" {
        return "Str".to_string();
    }
    strip_qualifier(&titled).to_string()
}

/// Upper-cases the first letter of every word. Anything other than a letter,
/// digit or `_` separates words.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = !(ch.is_alphanumeric() || ch == '_');
    }
    out
}

/// `pkg.Type` -> `Type`, keeping only the last segment so the result is
/// always usable inside an identifier. Unqualified names come back unchanged.
pub fn strip_qualifier(s: &str) -> &str {
    match s.rsplit_once('.') {
        Some((_, rest)) => rest,
        None => s,
    }
}
