use fpgen_core::{BasicMatch, BasicType, TypeToken, display_form, strip_qualifier, title_case};

fn token(name: &str) -> TypeToken {
    TypeToken::new(name, BasicMatch::Exact)
}

fn legacy(name: &str) -> TypeToken {
    TypeToken::new(name, BasicMatch::Substring)
}

#[test]
fn every_basic_spelling_is_basic() {
    for basic in BasicType::ALL {
        assert!(token(basic.spelling()).is_basic(), "{basic} should be basic");
        assert_eq!(BasicType::from_spelling(basic.spelling()), Some(basic));
    }
}

#[test]
fn classification_ignores_case_and_whitespace() {
    assert!(token(" Int ").is_basic());
    assert!(token("STRING").is_basic());
    assert_eq!(token("  Employee\t").raw(), "Employee");
    assert!(!token("Employee").is_basic());
}

#[test]
fn exact_match_rejects_partial_spellings() {
    for name in ["Float", "in", "t", "Int8Wrapper", "uint6", "str"] {
        assert!(!token(name).is_basic(), "{name} should be a user type");
    }
}

#[test]
fn substring_match_accepts_partial_spellings() {
    for name in ["Float", "in", "t", "uint6", "int, int64"] {
        assert!(legacy(name).is_basic(), "{name} should be basic under substring matching");
    }
    assert!(legacy("int64").is_basic());
    assert!(!legacy("Employee").is_basic());
    assert!(!legacy("Int8Wrapper").is_basic());
}

#[test]
fn value_type_lowercases_basic_only() {
    assert_eq!(token("Int64").value_type(), "int64");
    assert_eq!(token("Employee").value_type(), "Employee");
    assert_eq!(token("models.Employee").value_type(), "models.Employee");
}

#[test]
fn display_forms() {
    assert_eq!(token("int").display(), "Int");
    assert_eq!(token("Float64").display(), "Float64");
    assert_eq!(token("string").display(), "Str");
    assert_eq!(token("String").display(), "Str");
    assert_eq!(token("bool").display(), "Bool");
    assert_eq!(token("employee").display(), "Employee");
    assert_eq!(token("models.employee").display(), "Employee");
    assert_eq!(token("x.y.Z").display(), "Z");
}

#[test]
fn title_case_capitalises_each_word() {
    assert_eq!(title_case("employee"), "Employee");
    assert_eq!(title_case("pkg.employee"), "Pkg.Employee");
    assert_eq!(title_case("my_type"), "My_type");
    assert_eq!(title_case("uint8"), "Uint8");
    assert_eq!(title_case(""), "");
}

#[test]
fn qualifier_is_everything_before_the_last_dot() {
    assert_eq!(strip_qualifier("models.Employee"), "Employee");
    assert_eq!(strip_qualifier("Employee"), "Employee");
    assert_eq!(strip_qualifier("a.b.c"), "c");
    assert_eq!(display_form("String"), "Str");
    assert_eq!(display_form("models.string"), "String");
}
