use tracing::error;

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::guild_only_message;
use bramble_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "addrole",
    desc: "Add a role to a user.",
    category: "moderation",
    usage: "/addrole <user> <role>",
};

#[poise::command(
    slash_command,
    category = "Moderation",
    required_permissions = "MANAGE_ROLES"
)]
pub async fn addrole(
    ctx: Context<'_>,
    #[description = "The member to grant the role"] user: serenity::User,
    #[description = "The role to add"] role: serenity::Role,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    let add_result = ctx
        .http()
        .add_member_role(
            guild_id,
            user.id,
            role.id,
            Some(&format!("Added by {}", ctx.author().tag())),
        )
        .await;

    if let Err(source) = add_result {
        error!(?source, "role add request failed");
        ctx.say("I couldn't add that role. Check role hierarchy and permissions.")
            .await?;
        return Ok(());
    }

    ctx.say(format!("Added {} to {}", role.name, user.tag()))
        .await?;

    Ok(())
}
