use tracing::error;

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::guild_only_message;
use bramble_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "slowmode",
    desc: "Set this channel's slowmode in seconds (0 to disable).",
    category: "moderation",
    usage: "/slowmode <seconds>",
};

// Discord's per-channel rate limit ceiling.
const MAX_SLOWMODE_SECS: u16 = 21_600;

#[poise::command(
    slash_command,
    category = "Moderation",
    required_permissions = "MANAGE_CHANNELS"
)]
pub async fn slowmode(
    ctx: Context<'_>,
    #[description = "Seconds between messages (0 disables)"] seconds: u16,
) -> Result<(), Error> {
    let Some(_guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    let seconds = seconds.min(MAX_SLOWMODE_SECS);
    let edit = serenity::EditChannel::new().rate_limit_per_user(seconds);

    if let Err(source) = ctx.channel_id().edit(ctx.http(), edit).await {
        error!(?source, "slowmode request failed");
        ctx.say("I couldn't change slowmode. I likely need the 'Manage Channels' permission.")
            .await?;
        return Ok(());
    }

    ctx.say(format!("Set slowmode to {}s", seconds)).await?;

    Ok(())
}
