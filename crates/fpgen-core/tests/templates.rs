use fpgen_core::catalogue;
use fpgen_core::{Bindings, Family, Placeholder, Template, TemplateErrorKind};

fn single_bindings() -> Bindings {
    Bindings::new()
        .bind(Placeholder::Package, "employee")
        .bind(Placeholder::Type, "Teacher")
        .bind(Placeholder::ConditionalType, "Teacher")
}

fn render_err(template: Template, bindings: &Bindings) -> TemplateErrorKind {
    template.render(bindings).expect_err("render should fail").kind
}

#[test]
fn catalogue_templates_validate() {
    let mut count = 0;
    for template in catalogue::all() {
        template.validate().unwrap_or_else(|e| panic!("{e}"));
        count += 1;
    }
    assert_eq!(count, 20);
}

#[test]
fn catalogue_families_and_order() {
    let names: Vec<&str> = catalogue::SINGLE.iter().map(|t| t.name).collect();
    assert_eq!(
        names,
        vec![
            "map", "filter", "remove", "some", "every", "drop-while", "take-while", "parallel-map", "filter-map",
            "rest", "reduce", "drop-last",
        ]
    );
    assert!(catalogue::SINGLE.iter().all(|t| t.family == Family::Single));
    assert!(catalogue::PAIRWISE_IO.iter().all(|t| t.family == Family::PairwiseIo));
    assert!(catalogue::COMBINER.iter().all(|t| t.family == Family::Combiner));
    assert!(catalogue::TESTS.iter().all(|t| t.family == Family::Test));
}

#[test]
fn renders_every_placeholder_occurrence() {
    let out = catalogue::MAP.render(&single_bindings()).expect("render");
    assert!(out.contains("func MapTeacher(f func(Teacher) Teacher, list []Teacher) []Teacher {"));
    assert!(!out.contains("<TYPE>"));
    assert!(!out.contains("CONDITIONAL_TYPE"));
}

#[test]
fn comparison_operators_are_plain_text() {
    let t = Template::new("cmp", Family::Single, "if i < len(list) && a<b> {\n\treturn <TYPE>\n}");
    let out = t.render(&single_bindings()).expect("render");
    assert_eq!(out, "if i < len(list) && a<b> {\n\treturn Teacher\n}");
}

#[test]
fn malformed_tokens_are_plain_text() {
    let t = Template::new("odd", Family::Single, "<> <TYPE <1TYPE> <Type> <TYPE>");
    let out = t.render(&single_bindings()).expect("render");
    assert_eq!(out, "<> <TYPE <1TYPE> <Type> Teacher");
}

#[test]
fn substituted_values_are_not_rescanned() {
    let bindings = Bindings::new().bind(Placeholder::Type, "<CONDITIONAL_TYPE>");
    let t = Template::new("once", Family::Single, "[<TYPE>]");
    assert_eq!(t.render(&bindings).expect("render"), "[<CONDITIONAL_TYPE>]");
}

#[test]
fn unknown_placeholder_is_rejected() {
    let t = Template::new("bad", Family::Single, "ab<FOO>");
    let err = t.render(&single_bindings()).expect_err("unknown placeholder");
    assert_eq!(err.kind, TemplateErrorKind::UnknownPlaceholder { name: "FOO".to_string() });
    assert_eq!(err.offset, 2);
    assert_eq!(err.template, "bad");
    assert!(t.validate().is_err());
}

#[test]
fn placeholder_outside_family_schema_is_rejected() {
    let t = Template::new("mixed", Family::PairwiseIo, "func Map<FINPUT_TYPE>(x <TYPE>)");
    assert_eq!(
        t.validate().expect_err("out of schema").kind,
        TemplateErrorKind::OutOfSchema { placeholder: Placeholder::Type, family: Family::PairwiseIo }
    );
}

#[test]
fn unbound_placeholder_is_rejected() {
    let bindings = Bindings::new().bind(Placeholder::InputType1, "int");
    assert_eq!(
        render_err(catalogue::ZIP, &bindings),
        TemplateErrorKind::Unbound { placeholder: Placeholder::FinputType1 }
    );
}

#[test]
fn placeholder_names_round_trip() {
    for placeholder in Placeholder::ALL {
        assert_eq!(Placeholder::from_name(placeholder.name()), Some(placeholder));
    }
    assert_eq!(Placeholder::from_name("type"), None);
}

#[test]
fn render_is_deterministic() {
    let a = catalogue::PMAP.render(&single_bindings()).expect("render");
    let b = catalogue::PMAP.render(&single_bindings()).expect("render");
    assert_eq!(a, b);
    assert!(a.contains("var wg sync.WaitGroup"));
}

#[test]
fn test_family_renders_ftype() {
    let bindings = Bindings::new().bind(Placeholder::Type, "int").bind(Placeholder::Ftype, "Int");
    let out = catalogue::DROP_LAST_TEST.render(&bindings).expect("render");
    assert!(out.contains("func TestDropLastInt(t *testing.T) {"));
    assert!(out.contains("\tactualList := DropLastInt(list)\n"));
    assert!(!out.contains("<FTYPE>"));
}

#[test]
fn ftype_is_outside_single_schema() {
    let t = Template::new("leak", Family::Single, "func Test<FTYPE>()");
    assert_eq!(
        t.validate().expect_err("out of schema").kind,
        TemplateErrorKind::OutOfSchema { placeholder: Placeholder::Ftype, family: Family::Single }
    );
    assert_eq!(Placeholder::from_name("FTYPE"), Some(Placeholder::Ftype));
}
