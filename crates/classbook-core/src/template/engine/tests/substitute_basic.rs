//! Class and variable substitution tests

use super::helpers::fighter_context;
use super::*;

#[test]
fn test_no_tags_unchanged() {
    let context = fighter_context();
    let template = "# Second Wind\n\nYou have a limited well of stamina.\n";
    assert_eq!(substitute(template, &context).unwrap(), template);
}

#[test]
fn test_empty_template() {
    assert_eq!(substitute("", &fighter_context()).unwrap(), "");
}

#[test]
fn test_class_tag() {
    let context = TagContext::new("Fighter");
    let result = substitute("As a `{( class )}`, you train hard.", &context).unwrap();
    assert_eq!(result, "As a Fighter, you train hard.");
}

#[test]
fn test_variable_tag() {
    let context = fighter_context();
    let result = substitute("Roll a `{( die )}`, `{( uses )}` per rest.", &context).unwrap();
    assert_eq!(result, "Roll a d10, once per rest.");
}

#[test]
fn test_substituted_text_is_not_rescanned() {
    let context = TagContext::new("fighter").with_variable("trap", "`{( nowhere )}`");
    let result = substitute("Value: `{( trap )}`", &context).unwrap();
    assert_eq!(result, "Value: `{( nowhere )}`");
}

#[test]
fn test_inert_lookalikes_are_kept() {
    let context = fighter_context();
    let template = "`{(die)}` and {( die )} stay";
    assert_eq!(substitute(template, &context).unwrap(), template);
}

#[test]
fn test_for_feature_without_binding() {
    let feature = crate::model::Feature::new("dueling", "`{( class )}` style");
    let context = TagContext::for_feature("Fighter", &feature, "fighter");
    assert_eq!(
        substitute(&feature.template, &context).unwrap(),
        "Fighter style"
    );
    assert!(context.levels().is_empty());
}
