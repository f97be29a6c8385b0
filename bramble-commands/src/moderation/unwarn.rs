use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::guild_only_message;
use bramble_core::{Context, Error};
use bramble_store::impls::warnings::remove_warnings;

pub const META: CommandMeta = CommandMeta {
    name: "unwarn",
    desc: "Remove all warnings for a member.",
    category: "moderation",
    usage: "/unwarn <user>",
};

#[poise::command(
    slash_command,
    category = "Moderation",
    required_permissions = "KICK_MEMBERS"
)]
pub async fn unwarn(
    ctx: Context<'_>,
    #[description = "The member to clear"] user: serenity::User,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    remove_warnings(&ctx.data().store, guild_id.get(), user.id.get()).await?;
    ctx.say(format!("Removed warnings for {}", user.tag())).await?;

    Ok(())
}
