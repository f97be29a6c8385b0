use tracing::error;

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::guild_only_message;
use bramble_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "lock",
    desc: "Lock this channel (deny Send Messages for @everyone).",
    category: "moderation",
    usage: "/lock",
};

#[poise::command(
    slash_command,
    category = "Moderation",
    required_permissions = "MANAGE_CHANNELS"
)]
pub async fn lock(ctx: Context<'_>) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    // The @everyone role id always equals the guild id.
    let everyone = serenity::RoleId::new(guild_id.get());
    let overwrite = serenity::PermissionOverwrite {
        allow: serenity::Permissions::empty(),
        deny: serenity::Permissions::SEND_MESSAGES,
        kind: serenity::PermissionOverwriteType::Role(everyone),
    };

    if let Err(source) = ctx
        .channel_id()
        .create_permission(ctx.http(), overwrite)
        .await
    {
        error!(?source, "channel lock request failed");
        ctx.say("I couldn't lock this channel. I likely need the 'Manage Channels' permission.")
            .await?;
        return Ok(());
    }

    ctx.say("Channel locked.").await?;

    Ok(())
}
