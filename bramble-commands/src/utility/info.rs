use bramble_core::{Context, Error};
use bramble_utils::formatting::format_compact_duration;

use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "info",
    desc: "Show bot info.",
    category: "utility",
    usage: "/info",
};

#[poise::command(slash_command, category = "Utility")]
pub async fn info(ctx: Context<'_>) -> Result<(), Error> {
    let uptime = format_compact_duration(ctx.data().started_at.elapsed().as_secs());
    ctx.say(format!(
        "I keep servers tidy: moderation, warnings, and a little fun. Uptime: {}",
        uptime
    ))
    .await?;

    Ok(())
}
