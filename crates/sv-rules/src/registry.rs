//! Static mapping from configuration identifiers to rule constructors.

use crate::consistency::CrossFileConsistencyRule;
use crate::existence::FileExistenceRule;
use crate::format::FileFormatRule;
use crate::physics::PhysicsValidationRule;
use crate::range::ParameterRangeRule;
use crate::traits::Rule;
use sv_config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    FileExistence,
    FileFormat,
    ParameterRanges,
    CrossFileConsistency,
    PhysicsValidation,
}

impl RuleKind {
    pub const ALL: [RuleKind; 5] = [
        RuleKind::FileExistence,
        RuleKind::FileFormat,
        RuleKind::ParameterRanges,
        RuleKind::CrossFileConsistency,
        RuleKind::PhysicsValidation,
    ];

    /// Identifier used in the `validation_rules` configuration list.
    pub fn config_id(&self) -> &'static str {
        match self {
            RuleKind::FileExistence => "file_existence",
            RuleKind::FileFormat => "file_format",
            RuleKind::ParameterRanges => "parameter_ranges",
            RuleKind::CrossFileConsistency => "cross_file_consistency",
            RuleKind::PhysicsValidation => "physics_validation",
        }
    }

    /// Identifier written into results.
    pub fn rule_id(&self) -> &'static str {
        match self {
            RuleKind::FileExistence => FileExistenceRule::ID,
            RuleKind::FileFormat => FileFormatRule::ID,
            RuleKind::ParameterRanges => ParameterRangeRule::ID,
            RuleKind::CrossFileConsistency => CrossFileConsistencyRule::ID,
            RuleKind::PhysicsValidation => PhysicsValidationRule::ID,
        }
    }

    pub fn from_config_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.config_id() == id)
    }

    /// Instantiate the rule, capturing its slice of `config`.
    pub fn build(&self, config: &Config) -> Box<dyn Rule> {
        match self {
            RuleKind::FileExistence => {
                Box::new(FileExistenceRule::new(config.required_files.clone()))
            }
            RuleKind::FileFormat => Box::new(FileFormatRule::new()),
            RuleKind::ParameterRanges => {
                Box::new(ParameterRangeRule::new(config.parameter_ranges.clone()))
            }
            RuleKind::CrossFileConsistency => Box::new(CrossFileConsistencyRule::new()),
            RuleKind::PhysicsValidation => Box::new(PhysicsValidationRule::new()),
        }
    }
}

/// Build the configured rules in order. Unknown identifiers are skipped.
pub fn build_rules(config: &Config) -> Vec<Box<dyn Rule>> {
    config
        .validation_rules
        .iter()
        .filter_map(|id| RuleKind::from_config_id(id))
        .map(|kind| kind.build(config))
        .collect()
}
