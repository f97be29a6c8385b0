use tracing::error;

use crate::CommandMeta;
use crate::moderation::embeds::guild_only_message;
use bramble_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "pruneinactive",
    desc: "Kick members inactive for a number of days.",
    category: "moderation",
    usage: "/pruneinactive <days>",
};

#[poise::command(
    slash_command,
    category = "Moderation",
    required_permissions = "KICK_MEMBERS"
)]
pub async fn pruneinactive(
    ctx: Context<'_>,
    #[description = "Days of inactivity (1-30)"] days: u8,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    if days == 0 || days > 30 {
        ctx.say("Days must be between 1 and 30.").await?;
        return Ok(());
    }

    let prune = match guild_id.start_prune(ctx.http(), days).await {
        Ok(prune) => prune,
        Err(source) => {
            error!(?source, "prune request failed");
            ctx.say("I couldn't prune members. I likely need the 'Kick Members' permission.")
                .await?;
            return Ok(());
        }
    };

    ctx.say(format!("Pruned: {}", prune.pruned)).await?;

    Ok(())
}
