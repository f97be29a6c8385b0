use tracing::error;

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::guild_only_message;
use bramble_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "unlock",
    desc: "Unlock this channel.",
    category: "moderation",
    usage: "/unlock",
};

#[poise::command(
    slash_command,
    category = "Moderation",
    required_permissions = "MANAGE_CHANNELS"
)]
pub async fn unlock(ctx: Context<'_>) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    let everyone = serenity::RoleId::new(guild_id.get());
    let delete_result = ctx
        .channel_id()
        .delete_permission(
            ctx.http(),
            serenity::PermissionOverwriteType::Role(everyone),
        )
        .await;

    if let Err(source) = delete_result {
        error!(?source, "channel unlock request failed");
        ctx.say("I couldn't unlock this channel. I likely need the 'Manage Channels' permission.")
            .await?;
        return Ok(());
    }

    ctx.say("Channel unlocked.").await?;

    Ok(())
}
