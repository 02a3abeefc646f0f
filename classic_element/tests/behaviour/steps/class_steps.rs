//! Steps that compose classes and drive instance state.

use std::sync::Arc;

use anyhow::{Result, anyhow, ensure};
use classic_element::{Declaration, Props, Value, create_class};
use rstest_bdd_macros::{given, then, when};

use super::parse_props;
use crate::fixtures::ClassContext;

fn answering(member: &str, result: String) -> Declaration {
    Declaration::new().method(member, move |_, _| Ok(Value::from(result.as_str())))
}

#[given("a mixin defining {member} as {result}")]
fn mixin_defining(class_context: &ClassContext, member: String, result: String) {
    let mut mixins = class_context.mixins.get().unwrap_or_default();
    mixins.push(answering(&member, result));
    class_context.mixins.set(mixins);
}

#[given("a declaration defining {member} as {result}")]
fn declaration_defining(class_context: &ClassContext, member: String, result: String) {
    class_context.declaration.set(answering(&member, result));
}

#[given("a declaration with initial state {state}")]
fn declaration_with_state(class_context: &ClassContext, state: String) {
    let initial = parse_props(&state);
    class_context
        .declaration
        .set(Declaration::new().initial_state(move |_| initial.clone()));
}

#[when("the class is composed")]
fn compose(class_context: &ClassContext) {
    let declaration = class_context
        .declaration
        .get()
        .unwrap_or_default()
        .mixins(class_context.mixins.get().unwrap_or_default());
    let component = create_class(&declaration);
    class_context
        .instance
        .set(component.construct(Props::new(), Props::new()));
}

#[when("the instance state is updated with {patch}")]
fn update_state(class_context: &ClassContext, patch: String) -> Result<()> {
    let mut instance = class_context
        .instance
        .get()
        .ok_or_else(|| anyhow!("expected a constructed instance"))?;
    class_context
        .previous_state
        .set(Arc::clone(instance.state_handle()));
    instance.set_state(&parse_props(&patch));
    class_context.instance.set(instance);
    Ok(())
}

#[then("calling {member} returns {expected}")]
fn calling_returns(class_context: &ClassContext, member: String, expected: String) -> Result<()> {
    let mut instance = class_context
        .instance
        .get()
        .ok_or_else(|| anyhow!("expected a constructed instance"))?;
    let result = instance.call(&member, &[]).map_err(|err| anyhow!(err))?;
    ensure!(
        result == Value::from(expected.as_str()),
        "unexpected result {result:?}"
    );
    Ok(())
}

#[then("the resulting state is {expected}")]
fn resulting_state(class_context: &ClassContext, expected: String) -> Result<()> {
    let state = class_context
        .instance
        .with_ref(|instance| instance.state().clone())
        .ok_or_else(|| anyhow!("expected a constructed instance"))?;
    ensure!(
        state == parse_props(&expected),
        "unexpected state {state:?}"
    );
    Ok(())
}

#[then("the state before the update was {expected}")]
fn previous_state(class_context: &ClassContext, expected: String) -> Result<()> {
    let previous = class_context
        .previous_state
        .get()
        .ok_or_else(|| anyhow!("expected a captured state"))?;
    let current = class_context
        .instance
        .with_ref(|instance| Arc::clone(instance.state_handle()))
        .ok_or_else(|| anyhow!("expected a constructed instance"))?;
    ensure!(
        !Arc::ptr_eq(&previous, &current),
        "state should be replaced, not mutated"
    );
    ensure!(
        previous.as_ref() == &parse_props(&expected),
        "previous state changed: {previous:?}"
    );
    Ok(())
}
