use tracing::error;

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::guild_only_message;
use bramble_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "createrole",
    desc: "Create a role.",
    category: "moderation",
    usage: "/createrole <name>",
};

#[poise::command(
    slash_command,
    category = "Moderation",
    required_permissions = "MANAGE_ROLES"
)]
pub async fn createrole(
    ctx: Context<'_>,
    #[description = "Name for the new role"] name: String,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    let audit_reason = format!("Created by {}", ctx.author().tag());
    let create_result = guild_id
        .create_role(
            ctx.http(),
            serenity::EditRole::new()
                .name(&name)
                .audit_log_reason(&audit_reason),
        )
        .await;

    let role = match create_result {
        Ok(role) => role,
        Err(source) => {
            error!(?source, "role create request failed");
            ctx.say("I couldn't create that role. I likely need the 'Manage Roles' permission.")
                .await?;
            return Ok(());
        }
    };

    ctx.say(format!("Role created: {}", role.name)).await?;

    Ok(())
}
