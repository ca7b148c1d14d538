//! Walk configuration.

use serde::{Deserialize, Serialize};

/// Options for [`BusinessTimeDelta::add_to_with_options`] and
/// [`BusinessTimeDelta::subtract_from_with_options`].
///
/// The default is an unbounded walk, identical to
/// [`BusinessTimeDelta::add_to`] apart from returning errors instead of
/// panicking.
///
/// [`BusinessTimeDelta::add_to_with_options`]: crate::BusinessTimeDelta::add_to_with_options
/// [`BusinessTimeDelta::subtract_from_with_options`]: crate::BusinessTimeDelta::subtract_from_with_options
/// [`BusinessTimeDelta::add_to`]: crate::BusinessTimeDelta::add_to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkOptions {
    /// Maximum number of periods a single walk may request from the rule
    /// provider. `None` never gives up.
    pub max_periods: Option<usize>,
}

impl WalkOptions {
    /// Options that stop a walk after `max_periods` provider queries.
    pub fn bounded(max_periods: usize) -> Self {
        Self {
            max_periods: Some(max_periods),
        }
    }
}
