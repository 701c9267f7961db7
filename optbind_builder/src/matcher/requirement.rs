use std::collections::HashSet;

use crate::api::OptionDescriptor;
use crate::matcher::DescriptorRegistry;

/// The required options which were not satisfied from the Cli, in ascending descriptor order.
pub(crate) fn missing_required(
    registry: &DescriptorRegistry,
    satisfied: &HashSet<usize>,
) -> Vec<OptionDescriptor> {
    let mut missing: Vec<OptionDescriptor> = registry
        .configs()
        .iter()
        .enumerate()
        .filter(|(index, config)| {
            config.descriptor().is_required() && !satisfied.contains(index)
        })
        .map(|(_, config)| config.descriptor().clone())
        .collect();
    missing.sort();
    missing
}
