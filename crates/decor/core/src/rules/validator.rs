use arrayvec::ArrayVec;

use super::{OccupancyRule, OverlapRule, PlacementRule, RuleContext, RuleResult, SocketTypeRule};
use crate::config::DecorSettings;
use crate::env::DecorEnv;

/// Upper bound on rules in one chain.
pub const MAX_RULES: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidatorError {
    #[error("rule chain is full ({MAX_RULES} rules)")]
    TooManyRules,
}

/// Runs rules in declared order and returns the first failure.
///
/// This is a short-circuited logical AND: later rules never see a candidate
/// an earlier rule rejected.
pub struct CompositeValidator {
    rules: ArrayVec<Box<dyn PlacementRule>, MAX_RULES>,
}

impl CompositeValidator {
    pub fn new() -> Self {
        Self {
            rules: ArrayVec::new(),
        }
    }

    /// Standard chain: occupancy, socket type, overlap.
    pub fn standard(settings: &DecorSettings) -> Self {
        let penalty = settings.rule_penalty;
        let mut rules: ArrayVec<Box<dyn PlacementRule>, MAX_RULES> = ArrayVec::new();
        rules.push(Box::new(OccupancyRule::new(penalty)));
        rules.push(Box::new(SocketTypeRule::new(penalty)));
        rules.push(Box::new(OverlapRule::new(penalty)));
        Self { rules }
    }

    /// Appends a rule to the end of the chain.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::TooManyRules`] once [`MAX_RULES`] is reached.
    pub fn push(&mut self, rule: impl PlacementRule + 'static) -> Result<(), ValidatorError> {
        self.push_boxed(Box::new(rule))
    }

    pub fn push_boxed(&mut self, rule: Box<dyn PlacementRule>) -> Result<(), ValidatorError> {
        self.rules
            .try_push(rule)
            .map_err(|_| ValidatorError::TooManyRules)
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn validate(&self, ctx: &RuleContext<'_>, env: &DecorEnv<'_>) -> RuleResult {
        for rule in &self.rules {
            let result = rule.evaluate(ctx, env);
            if !result.ok {
                return result;
            }
        }
        RuleResult::ok()
    }
}

impl Default for CompositeValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for CompositeValidator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.rule_names()).finish()
    }
}
