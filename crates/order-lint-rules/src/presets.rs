//! Rule sets and config-driven rule construction.

use crate::{OrderedSealedSubclasses, OrderedVarargArguments};
use order_lint_core::{Config, RuleBox};

/// Returns all available rules with default settings.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(OrderedVarargArguments::new()),
        Box::new(OrderedSealedSubclasses::new()),
    ]
}

/// Returns the recommended set of rules.
///
/// Currently identical to [`all_rules`]; kept separate so callers opting
/// into "recommended" keep working if more specialized rules land.
#[must_use]
pub fn recommended_rules() -> Vec<RuleBox> {
    all_rules()
}

/// Builds the rule set from a [`Config`], honoring per-rule `markers`
/// overrides.
///
/// Enabled/disabled state and severity overrides are applied by the
/// analyzer at check time, so this only wires construction-time options.
#[must_use]
pub fn rules_from_config(config: &Config) -> Vec<RuleBox> {
    let mut vararg = OrderedVarargArguments::new();
    if let Some(markers) = config
        .rules
        .get(crate::ordered_vararg_arguments::NAME)
        .and_then(|c| c.get_str_array("markers"))
    {
        vararg = vararg.markers(markers);
    }

    let mut sealed = OrderedSealedSubclasses::new();
    if let Some(markers) = config
        .rules
        .get(crate::ordered_sealed_subclasses::NAME)
        .and_then(|c| c.get_str_array("markers"))
    {
        sealed = sealed.markers(markers);
    }

    vec![Box::new(vararg), Box::new(sealed)]
}
