use tracing::error;

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::guild_only_message;
use bramble_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "forcenick",
    desc: "Force change a member's nickname.",
    category: "moderation",
    usage: "/forcenick <user> <nick>",
};

#[poise::command(
    slash_command,
    category = "Moderation",
    required_permissions = "MANAGE_NICKNAMES"
)]
pub async fn forcenick(
    ctx: Context<'_>,
    #[description = "The member to rename"] user: serenity::User,
    #[description = "The new nickname"] nick: String,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    let edit = serenity::EditMember::new().nickname(&nick);
    if let Err(source) = guild_id.edit_member(ctx.http(), user.id, edit).await {
        error!(?source, "nickname request failed");
        ctx.say("I couldn't change that nickname. Check role hierarchy and permissions.")
            .await?;
        return Ok(());
    }

    ctx.say(format!("Forced nickname for {} -> {}", user.tag(), nick))
        .await?;

    Ok(())
}
