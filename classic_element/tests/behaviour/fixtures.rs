//! Shared fixtures for the behavioural scenarios.

use std::sync::Arc;

use classic_element::{ComponentInstance, Declaration, Element, Props};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// Scenario state shared by the element cloning steps.
#[derive(Debug, Default, ScenarioState)]
pub struct ElementContext {
    /// Element built by the `Given` steps.
    pub original: Slot<Element>,
    /// Element produced by cloning.
    pub cloned: Slot<Element>,
}

/// Scenario state shared by the class composition steps.
#[derive(Debug, Default, ScenarioState)]
pub struct ClassContext {
    /// Mixins collected before composition.
    pub mixins: Slot<Vec<Declaration>>,
    /// Declaration collected before composition.
    pub declaration: Slot<Declaration>,
    /// Instance constructed from the composed class.
    pub instance: Slot<ComponentInstance>,
    /// State handle captured before the latest update.
    pub previous_state: Slot<Arc<Props>>,
}

/// Creates a clean element context for each scenario.
#[fixture]
pub fn element_context() -> ElementContext {
    ElementContext::default()
}

/// Creates a clean class context for each scenario.
#[fixture]
pub fn class_context() -> ClassContext {
    ClassContext::default()
}
