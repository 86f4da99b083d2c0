//! Room setup summary.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::content::ContentArgs;

/// Print action branches and observation size for a room
#[derive(Args)]
pub struct Info {
    #[command(flatten)]
    content: ContentArgs,
}

#[derive(Serialize)]
struct RoomInfo {
    sockets: usize,
    items: usize,
    recommended_branches: [i32; 4],
    observation_size: usize,
    max_sockets_for_obs: usize,
    blocking_layers: u32,
    blockers: usize,
}

impl Info {
    pub fn execute(self) -> Result<()> {
        let content = self.content.load()?;
        let blocking_layers = content.layout.blocking_layers;
        let blockers = content.layout.active_blockers().count();
        let runtime = content.into_runtime()?;

        let info = RoomInfo {
            sockets: runtime.state().socket_count(),
            items: runtime.catalog().map_or(0, |catalog| catalog.len()),
            recommended_branches: runtime.recommended_branches(),
            observation_size: runtime.observation_size(),
            max_sockets_for_obs: runtime.settings().max_sockets_for_obs,
            blocking_layers,
            blockers,
        };
        if info.sockets > info.max_sockets_for_obs {
            tracing::warn!(
                sockets = info.sockets,
                max_sockets_for_obs = info.max_sockets_for_obs,
                "room has more sockets than the observation covers"
            );
        }

        println!("{}", serde_json::to_string_pretty(&info)?);
        Ok(())
    }
}
