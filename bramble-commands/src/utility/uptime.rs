use bramble_core::{Context, Error};
use bramble_utils::formatting::format_compact_duration;

use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "uptime",
    desc: "Show bot uptime.",
    category: "utility",
    usage: "/uptime",
};

#[poise::command(slash_command, category = "Utility")]
pub async fn uptime(ctx: Context<'_>) -> Result<(), Error> {
    let uptime = format_compact_duration(ctx.data().started_at.elapsed().as_secs());
    ctx.say(format!("Uptime: {}", uptime)).await?;

    Ok(())
}
