use tracing::error;

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::guild_only_message;
use bramble_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "removerole",
    desc: "Remove a role from a user.",
    category: "moderation",
    usage: "/removerole <user> <role>",
};

#[poise::command(
    slash_command,
    category = "Moderation",
    required_permissions = "MANAGE_ROLES"
)]
pub async fn removerole(
    ctx: Context<'_>,
    #[description = "The member to take the role from"] user: serenity::User,
    #[description = "The role to remove"] role: serenity::Role,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    let remove_result = ctx
        .http()
        .remove_member_role(
            guild_id,
            user.id,
            role.id,
            Some(&format!("Removed by {}", ctx.author().tag())),
        )
        .await;

    if let Err(source) = remove_result {
        error!(?source, "role remove request failed");
        ctx.say("I couldn't remove that role. Check role hierarchy and permissions.")
            .await?;
        return Ok(());
    }

    ctx.say(format!("Removed {} from {}", role.name, user.tag()))
        .await?;

    Ok(())
}
