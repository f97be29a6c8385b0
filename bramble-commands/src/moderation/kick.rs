use tracing::error;

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::{
    guild_only_message, moderation_action_embed, moderation_self_action_message,
    target_profile_from_user,
};
use bramble_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "kick",
    desc: "Kick a member from the server.",
    category: "moderation",
    usage: "/kick <user> [reason]",
};

#[poise::command(
    slash_command,
    category = "Moderation",
    required_permissions = "KICK_MEMBERS"
)]
pub async fn kick(
    ctx: Context<'_>,
    #[description = "The member to kick"] user: serenity::User,
    #[description = "Reason for the kick"] reason: Option<String>,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    if user.id == ctx.author().id {
        ctx.say(moderation_self_action_message("kick")).await?;
        return Ok(());
    }

    let kick_result = guild_id
        .kick_with_reason(
            ctx.http(),
            user.id,
            reason.as_deref().unwrap_or("No reason provided"),
        )
        .await;

    if let Err(source) = kick_result {
        error!(?source, "kick request failed");
        ctx.say("I couldn't kick that user. Check role hierarchy and permissions.")
            .await?;
        return Ok(());
    }

    let target_profile = target_profile_from_user(&user);
    let embed =
        moderation_action_embed(&target_profile, user.id, "kicked", reason.as_deref(), None);
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}
