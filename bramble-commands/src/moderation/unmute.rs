use tracing::error;

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::guild_only_message;
use bramble_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "unmute",
    desc: "Remove a member's timeout.",
    category: "moderation",
    usage: "/unmute <user>",
};

#[poise::command(
    slash_command,
    category = "Moderation",
    required_permissions = "MODERATE_MEMBERS"
)]
pub async fn unmute(
    ctx: Context<'_>,
    #[description = "The member to unmute"] user: serenity::User,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    let edit = serenity::EditMember::new().enable_communication();
    if let Err(source) = guild_id.edit_member(ctx.http(), user.id, edit).await {
        error!(?source, "unmute request failed");
        ctx.say("I couldn't unmute that user. Check role hierarchy and permissions.")
            .await?;
        return Ok(());
    }

    ctx.say(format!("Removed timeout for {}", user.tag())).await?;

    Ok(())
}
