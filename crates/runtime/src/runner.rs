//! Runs whole episodes against a provider and summarizes them.

use std::collections::BTreeMap;

use serde::Serialize;

use decor_core::Termination;

use crate::api::ActionProvider;
use crate::runtime::DecorRuntime;

/// Outcome of one finished (or truncated) episode.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EpisodeSummary {
    pub episode: u64,
    pub steps: u64,
    pub total_reward: f32,
    pub placements: u32,
    pub distinct_items: usize,
    /// Failed steps keyed by reason code.
    pub failures: BTreeMap<String, u32>,
    /// Failed steps keyed by failure class.
    pub failure_classes: BTreeMap<String, u32>,
    /// `None` when the step limit cut the episode short.
    pub termination: Option<Termination>,
    pub truncated: bool,
}

/// Drives episodes until termination or `max_steps`.
#[derive(Clone, Copy, Debug)]
pub struct EpisodeRunner {
    max_steps: u64,
}

impl EpisodeRunner {
    pub const DEFAULT_MAX_STEPS: u64 = 1_000;

    pub fn new(max_steps: u64) -> Self {
        Self {
            max_steps: max_steps.max(1),
        }
    }

    pub fn max_steps(&self) -> u64 {
        self.max_steps
    }

    /// Begins a fresh episode and plays it out with `provider`.
    pub fn run(&self, runtime: &mut DecorRuntime, provider: &mut dyn ActionProvider) -> EpisodeSummary {
        runtime.begin_episode();

        let mut failures = BTreeMap::new();
        let mut failure_classes = BTreeMap::new();
        let mut termination = None;
        while runtime.progress().steps < self.max_steps {
            let action = runtime.heuristic(provider);
            let result = runtime.act(&action);
            if let Some(failure) = result.failure {
                *failures.entry(failure.reason().to_string()).or_insert(0) += 1;
                *failure_classes
                    .entry(failure.class().as_str().to_string())
                    .or_insert(0) += 1;
            }
            if result.end_episode {
                termination = result.termination;
                break;
            }
        }

        let truncated = termination.is_none();
        if truncated {
            tracing::warn!(
                episode = runtime.progress().episode,
                max_steps = self.max_steps,
                "episode truncated at step limit"
            );
        }

        let progress = runtime.progress();
        let state = runtime.state();
        EpisodeSummary {
            episode: progress.episode,
            steps: progress.steps,
            total_reward: progress.reward,
            placements: state.total_placed(),
            distinct_items: state.distinct_items(),
            failures,
            failure_classes,
            termination,
            truncated,
        }
    }

    /// Runs `episodes` episodes back to back.
    pub fn run_many(
        &self,
        runtime: &mut DecorRuntime,
        provider: &mut dyn ActionProvider,
        episodes: usize,
    ) -> Vec<EpisodeSummary> {
        (0..episodes).map(|_| self.run(runtime, provider)).collect()
    }
}

impl Default for EpisodeRunner {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_STEPS)
    }
}
