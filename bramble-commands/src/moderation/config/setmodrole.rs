use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::guild_only_message;
use bramble_core::{Context, Error};
use bramble_store::impls::settings::{MOD_ROLE_KEY, set_setting};

pub const META: CommandMeta = CommandMeta {
    name: "setmodrole",
    desc: "Set the server's moderator role.",
    category: "moderation",
    usage: "/setmodrole <role>",
};

#[poise::command(
    slash_command,
    category = "Moderation",
    required_permissions = "MANAGE_GUILD"
)]
pub async fn setmodrole(
    ctx: Context<'_>,
    #[description = "The moderator role"] role: serenity::Role,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    set_setting(
        &ctx.data().store,
        guild_id.get(),
        MOD_ROLE_KEY,
        role.id.get().to_string(),
    )
    .await?;

    ctx.say(format!("Mod role set to {}", role.name)).await?;

    Ok(())
}
