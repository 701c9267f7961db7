use std::collections::HashMap;

use crate::api::OptionDescriptor;
use crate::constant::*;
use crate::model::OptionType;
use crate::parser::ConfigError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OptionConfig {
    descriptor: OptionDescriptor,
    option_type: OptionType,
}

impl OptionConfig {
    pub(crate) fn new(descriptor: OptionDescriptor, option_type: OptionType) -> Self {
        Self {
            descriptor,
            option_type,
        }
    }

    pub(crate) fn descriptor(&self) -> &OptionDescriptor {
        &self.descriptor
    }

    pub(crate) fn option_type(&self) -> OptionType {
        self.option_type
    }
}

/// A descriptor paired with the classification of its field type (`None` when unsupported).
pub(crate) type RegistryEntry = (OptionDescriptor, Option<OptionType>, &'static str);

/// The validated, index addressable set of option configs.
///
/// Indices follow the order of the entries given to [`DescriptorRegistry::new`].
#[derive(Debug)]
pub(crate) struct DescriptorRegistry {
    configs: Vec<OptionConfig>,
    short_options: HashMap<char, usize>,
    long_options: HashMap<String, usize>,
    target: Option<usize>,
}

impl DescriptorRegistry {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new(Vec::default()).unwrap()
    }

    pub(crate) fn new(entries: Vec<RegistryEntry>) -> Result<Self, ConfigError> {
        let mut configs: Vec<OptionConfig> = Vec::with_capacity(entries.len());
        let mut short_options = HashMap::default();
        let mut long_options = HashMap::default();
        let mut target: Option<usize> = None;

        for (index, (descriptor, option_type, type_name)) in entries.into_iter().enumerate() {
            let option_type = option_type.ok_or_else(|| ConfigError::UnsupportedOptionType {
                option: descriptor.to_string(),
                type_name,
            })?;

            if descriptor.is_target_option() {
                if let Some(previous) = target.replace(index) {
                    return Err(ConfigError::DuplicateTargetOption {
                        first: configs[previous].descriptor.description().to_string(),
                        second: descriptor.description().to_string(),
                    });
                }
            } else {
                let short = descriptor.short_symbol();

                if short == '-' || short.is_whitespace() {
                    return Err(ConfigError::InvalidSymbol {
                        symbol: format!("-{short}"),
                    });
                }

                if short == USAGE_SHORT || short_options.insert(short, index).is_some() {
                    return Err(ConfigError::DuplicateOption {
                        symbol: format!("-{short}"),
                    });
                }

                if let Some(long) = descriptor.long_symbol() {
                    if long.trim().is_empty()
                        || long.starts_with('-')
                        || long.contains(char::is_whitespace)
                    {
                        return Err(ConfigError::InvalidSymbol {
                            symbol: format!("--{long}"),
                        });
                    }

                    if long_options.insert(long.to_string(), index).is_some() {
                        return Err(ConfigError::DuplicateOption {
                            symbol: format!("--{long}"),
                        });
                    }
                }
            }

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Registered option {descriptor} at index {index} as {option_type:?}.");
            }

            configs.push(OptionConfig::new(descriptor, option_type));
        }

        Ok(Self {
            configs,
            short_options,
            long_options,
            target,
        })
    }

    pub(crate) fn config(&self, index: usize) -> &OptionConfig {
        &self.configs[index]
    }

    pub(crate) fn configs(&self) -> &[OptionConfig] {
        &self.configs
    }

    pub(crate) fn short(&self, symbol: char) -> Option<usize> {
        self.short_options.get(&symbol).copied()
    }

    pub(crate) fn long(&self, symbol: &str) -> Option<usize> {
        self.long_options.get(symbol).copied()
    }

    pub(crate) fn target(&self) -> Option<usize> {
        self.target
    }
}
