use tracing::error;

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::guild_only_message;
use bramble_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "deleterole",
    desc: "Delete a role.",
    category: "moderation",
    usage: "/deleterole <role>",
};

#[poise::command(
    slash_command,
    category = "Moderation",
    required_permissions = "MANAGE_ROLES"
)]
pub async fn deleterole(
    ctx: Context<'_>,
    #[description = "The role to delete"] role: serenity::Role,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    if let Err(source) = guild_id.delete_role(ctx.http(), role.id).await {
        error!(?source, "role delete request failed");
        ctx.say("I couldn't delete that role. Check role hierarchy and permissions.")
            .await?;
        return Ok(());
    }

    ctx.say(format!("Deleted role {}", role.name)).await?;

    Ok(())
}
