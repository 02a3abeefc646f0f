//! Steps that build and clone elements.

use anyhow::{Result, anyhow, ensure};
use classic_element::{CHILDREN, Element, Value, children, clone_element, create_element};
use rstest_bdd_macros::{given, then, when};

use super::parse_props;
use crate::fixtures::ElementContext;

fn original(element_context: &ElementContext) -> Result<Element> {
    element_context
        .original
        .get()
        .ok_or_else(|| anyhow!("expected an original element"))
}

fn cloned(element_context: &ElementContext) -> Result<Element> {
    element_context
        .cloned
        .get()
        .ok_or_else(|| anyhow!("expected a cloned element"))
}

#[given("a div element with child {child}")]
fn element_with_child(element_context: &ElementContext, child: String) {
    let element = create_element("div", None, vec![Value::from(child)]);
    element_context.original.set(element);
}

#[given("a div element with props {props}")]
fn element_with_props(element_context: &ElementContext, props: String) {
    let element = create_element("div", Some(&parse_props(&props)), vec![]);
    element_context.original.set(element);
}

#[when("the element is cloned without children")]
fn clone_plain(element_context: &ElementContext) -> Result<()> {
    let source = original(element_context)?;
    element_context
        .cloned
        .set(clone_element(&source, None, vec![]));
    Ok(())
}

#[when("the element is cloned with children {list}")]
fn clone_with_children(element_context: &ElementContext, list: String) -> Result<()> {
    let source = original(element_context)?;
    let replacements = list.split(',').map(|child| Value::from(child.trim())).collect();
    element_context
        .cloned
        .set(clone_element(&source, None, replacements));
    Ok(())
}

#[when("the element is cloned with props {props}")]
fn clone_with_props(element_context: &ElementContext, props: String) -> Result<()> {
    let source = original(element_context)?;
    element_context
        .cloned
        .set(clone_element(&source, Some(&parse_props(&props)), vec![]));
    Ok(())
}

#[then("the cloned children equal {expected}")]
fn cloned_children_equal(element_context: &ElementContext, expected: String) -> Result<()> {
    let element = cloned(element_context)?;
    ensure!(
        element.children() == &Value::from(expected.as_str()),
        "unexpected cloned children {:?}",
        element.children()
    );
    Ok(())
}

#[then("the original children equal {expected}")]
fn original_children_equal(element_context: &ElementContext, expected: String) -> Result<()> {
    let element = original(element_context)?;
    ensure!(
        element.children() == &Value::from(expected.as_str()),
        "original element changed: {:?}",
        element.children()
    );
    Ok(())
}

#[then("the cloned element has {count:usize} children")]
fn cloned_child_count(element_context: &ElementContext, count: usize) -> Result<()> {
    let element = cloned(element_context)?;
    let actual = children::count(element.children());
    ensure!(actual == count, "expected {count} children, found {actual}");
    Ok(())
}

#[then("the cloned props are {expected}")]
fn cloned_props_are(element_context: &ElementContext, expected: String) -> Result<()> {
    let element = cloned(element_context)?;
    let mut props = element.props().clone();
    let removed = props.remove(CHILDREN);
    ensure!(
        removed == Some(Value::Undefined),
        "children should stay undefined, found {removed:?}"
    );
    ensure!(
        props == parse_props(&expected),
        "unexpected props {props:?}; expected {expected}"
    );
    Ok(())
}
