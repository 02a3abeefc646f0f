//! Binds the `classic_element` feature files to the step registry.

use crate::fixtures::{ClassContext, ElementContext, class_context, element_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/element_cloning.feature",
    fixtures = [element_context: ElementContext]
);
scenarios!(
    "tests/features/class_composition.feature",
    fixtures = [class_context: ClassContext]
);
