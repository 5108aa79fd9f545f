//! Expansion of the operation catalogue over a declared type list.
//!
//! Every expander takes the list already deduplicated (see [`type_tokens`])
//! and returns the concatenated Go text for its family of templates.

use tracing::debug;

use crate::catalogue;
use crate::distinct::distinct_ignore_case;
use crate::error::TemplateResult;
use crate::template::{Bindings, Placeholder, Template};
use crate::types::{display_form, strip_qualifier, BasicMatch, BasicType, TypeToken};

/// Deduplicates `names` ignoring case and classifies each survivor.
pub fn type_tokens<S: AsRef<str>>(names: &[S], policy: BasicMatch) -> Vec<TypeToken> {
    distinct_ignore_case(names)
        .iter()
        .filter(|name| !name.is_empty())
        .map(|name| TypeToken::new(name, policy))
        .collect()
}

/// Running "conditional type" of the single-type expander: the last token seen
/// whose name differs from the package name. It is carried from one type to
/// the next and never reset, so a package-named type declared after some other
/// type inherits that type's suffix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SingleExpansion {
    conditional_type: String,
}

impl SingleExpansion {
    pub fn new() -> Self { Self::default() }

    pub fn observe(&mut self, pkg: &str, token: &TypeToken) {
        if token.raw().to_lowercase() != pkg.trim().to_lowercase() {
            self.conditional_type = token.raw().to_string();
        }
    }

    pub fn conditional_type(&self) -> &str { &self.conditional_type }
}

fn render_all(templates: &[Template], bindings: &Bindings, out: &mut String) -> TemplateResult<()> {
    for template in templates {
        out.push_str(&template.render(bindings)?);
    }
    Ok(())
}

/// Emits the twelve single-type operations for every non-basic token.
pub fn expand_single(pkg: &str, tokens: &[TypeToken]) -> TemplateResult<String> {
    let _span = tracing::debug_span!("expand_single", pkg).entered();
    let mut out = String::new();
    let mut state = SingleExpansion::new();
    for token in tokens {
        state.observe(pkg, token);
        if token.is_basic() {
            debug!(ty = %token, "basic type, no single-type operations");
            continue;
        }
        let suffix = strip_qualifier(state.conditional_type());
        debug!(ty = %token, suffix, "expanding single-type operations");
        let bindings = Bindings::new()
            .bind(Placeholder::Package, pkg)
            .bind(Placeholder::Type, token.raw())
            .bind(Placeholder::ConditionalType, suffix);
        render_all(&catalogue::SINGLE, &bindings, &mut out)?;
    }
    Ok(out)
}

/// Emits cross-type map, parallel-map and filter-map for every ordered pair of
/// distinct tokens where at least one side is not basic.
pub fn expand_pairwise_io(pkg: &str, tokens: &[TypeToken]) -> TemplateResult<String> {
    let _span = tracing::debug_span!("expand_pairwise_io", pkg).entered();
    let mut out = String::new();
    for input in tokens {
        for output in tokens {
            if input.raw() == output.raw() || (input.is_basic() && output.is_basic()) {
                debug!(input = %input, output = %output, "skipping same or basic pair");
                continue;
            }
            debug!(input = %input, output = %output, "expanding cross-type operations");
            let bindings = Bindings::new()
                .bind(Placeholder::FinputType, input.display())
                .bind(Placeholder::FoutputType, output.display())
                .bind(Placeholder::InputType, input.value_type())
                .bind(Placeholder::OutputType, output.value_type());
            render_all(&catalogue::PAIRWISE_IO, &bindings, &mut out)?;
        }
    }
    Ok(out)
}

/// Emits merge and zip for every ordered pair of tokens where at least one side
/// is not basic. A type paired with itself keeps only the first name suffix,
/// and loses both when it is the package's own type.
pub fn expand_pairwise_combiner(pkg: &str, tokens: &[TypeToken]) -> TemplateResult<String> {
    let _span = tracing::debug_span!("expand_pairwise_combiner", pkg).entered();
    let mut out = String::new();
    for first in tokens {
        for second in tokens {
            if first.is_basic() && second.is_basic() {
                debug!(key = %first, value = %second, "skipping basic pair");
                continue;
            }
            let (value1, value2) = (first.value_type(), second.value_type());
            let (mut suffix1, mut suffix2) = (first.display(), second.display());
            if value1 == value2 {
                if value1.to_lowercase() == pkg.trim().to_lowercase() {
                    suffix1.clear();
                }
                suffix2.clear();
            }
            debug!(key = %first, value = %second, %suffix1, %suffix2, "expanding combiners");
            let bindings = Bindings::new()
                .bind(Placeholder::FinputType1, suffix1)
                .bind(Placeholder::FinputType2, suffix2)
                .bind(Placeholder::InputType1, value1)
                .bind(Placeholder::InputType2, value2);
            render_all(&catalogue::COMBINER, &bindings, &mut out)?;
        }
    }
    Ok(out)
}

/// Emits the single-type operations for every basic type, suffixed with its
/// display form (`MapInt`, `EveryStr`, ...).
pub fn expand_basic_catalogue(pkg: &str) -> TemplateResult<String> {
    let _span = tracing::debug_span!("expand_basic_catalogue", pkg).entered();
    let mut out = String::new();
    for basic in BasicType::ALL {
        let bindings = Bindings::new()
            .bind(Placeholder::Package, pkg)
            .bind(Placeholder::Type, basic.spelling())
            .bind(Placeholder::ConditionalType, display_form(basic.spelling()));
        render_all(&catalogue::SINGLE, &bindings, &mut out)?;
    }
    Ok(out)
}

/// Emits a Go test for every basic-type operation that has one, named
/// `Test<Op><display form>`.
pub fn expand_basic_tests(pkg: &str) -> TemplateResult<String> {
    let _span = tracing::debug_span!("expand_basic_tests", pkg).entered();
    let mut out = String::new();
    for basic in BasicType::ALL {
        let template = match basic {
            BasicType::Bool => &catalogue::DROP_LAST_BOOL_TEST,
            BasicType::String => &catalogue::DROP_LAST_STR_TEST,
            _ => &catalogue::DROP_LAST_TEST,
        };
        let bindings = Bindings::new()
            .bind(Placeholder::Type, basic.spelling())
            .bind(Placeholder::Ftype, display_form(basic.spelling()));
        out.push_str(&template.render(&bindings)?);
    }
    Ok(out)
}
