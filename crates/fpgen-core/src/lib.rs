pub mod error;
pub mod types;
pub mod distinct;
pub mod template;
pub mod catalogue;
pub mod expand;
pub mod generate;

pub use error::{GenerateError, GenerateResult, TemplateError, TemplateErrorKind, TemplateResult};
pub use types::{BasicMatch, BasicType, TypeToken, display_form, strip_qualifier, title_case};
pub use distinct::{distinct, distinct_ignore_case, split_list};
pub use template::{Bindings, Family, Placeholder, Template};
pub use expand::{
    SingleExpansion, expand_basic_catalogue, expand_basic_tests, expand_pairwise_combiner, expand_pairwise_io,
    expand_single, type_tokens,
};
pub use generate::{GenerateRequest, GeneratedUnit, HEADER, generate, generate_basic, generate_basic_tests};
