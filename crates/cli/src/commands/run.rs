//! Heuristic episode runner.

use anyhow::Result;
use clap::Args;
use decor_runtime::{ActionProvider, EpisodeRunner, RandomHeuristicProvider, SkipProvider};

use crate::content::ContentArgs;

/// Run heuristic episodes and print JSON summaries
#[derive(Args)]
pub struct Run {
    #[command(flatten)]
    content: ContentArgs,

    /// Number of episodes to run
    #[arg(short = 'n', long, env = "DECOR_EPISODES", default_value_t = 1)]
    episodes: usize,

    /// Seed for the heuristic provider (random when omitted)
    #[arg(long, env = "DECOR_SEED")]
    seed: Option<u64>,

    /// Step limit per episode
    #[arg(long, default_value_t = EpisodeRunner::DEFAULT_MAX_STEPS)]
    max_steps: u64,

    /// Only skip, never place
    #[arg(long)]
    skip_only: bool,

    /// Print one pretty JSON document instead of one line per episode
    #[arg(long)]
    pretty: bool,
}

impl Run {
    pub fn execute(self) -> Result<()> {
        let mut runtime = self.content.load()?.into_runtime()?;

        let mut provider: Box<dyn ActionProvider> = match (self.skip_only, self.seed) {
            (true, _) => Box::new(SkipProvider),
            (false, Some(seed)) => Box::new(RandomHeuristicProvider::seeded(seed)),
            (false, None) => Box::new(RandomHeuristicProvider::from_entropy()),
        };

        let runner = EpisodeRunner::new(self.max_steps);
        tracing::info!(
            episodes = self.episodes,
            seed = ?self.seed,
            max_steps = runner.max_steps(),
            "running episodes"
        );

        let summaries = runner.run_many(&mut runtime, provider.as_mut(), self.episodes);

        if self.pretty {
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        } else {
            for summary in &summaries {
                println!("{}", serde_json::to_string(summary)?);
            }
        }

        let mean = if summaries.is_empty() {
            0.0
        } else {
            summaries.iter().map(|s| s.total_reward).sum::<f32>() / summaries.len() as f32
        };
        tracing::info!(episodes = summaries.len(), mean_reward = mean, "done");
        Ok(())
    }
}
