//! Options for the single-choice chart control.

use serde::Serialize;

use crate::catalog::ChartKey;

/// One dropdown entry: what the user reads and the key sent back on change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DropdownOption {
    pub label: &'static str,
    pub value: &'static str,
}

/// The twelve chart choices, in page order.
pub fn dropdown_options() -> Vec<DropdownOption> {
    ChartKey::ALL
        .iter()
        .map(|k| DropdownOption {
            label: k.label(),
            value: k.as_str(),
        })
        .collect()
}
