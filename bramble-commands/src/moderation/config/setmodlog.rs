use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::guild_only_message;
use bramble_core::{Context, Error};
use bramble_store::impls::settings::{MODLOG_CHANNEL_KEY, set_setting};

pub const META: CommandMeta = CommandMeta {
    name: "setmodlog",
    desc: "Set the moderation log channel.",
    category: "moderation",
    usage: "/setmodlog <channel>",
};

#[poise::command(
    slash_command,
    category = "Moderation",
    required_permissions = "MANAGE_GUILD"
)]
pub async fn setmodlog(
    ctx: Context<'_>,
    #[description = "The moderation log channel"] channel: serenity::Channel,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    let channel_id = channel.id();
    set_setting(
        &ctx.data().store,
        guild_id.get(),
        MODLOG_CHANNEL_KEY,
        channel_id.get().to_string(),
    )
    .await?;

    ctx.say(format!("Modlog set to <#{}>", channel_id.get()))
        .await?;

    Ok(())
}
