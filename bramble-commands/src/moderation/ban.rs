use tracing::error;

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::{
    guild_only_message, moderation_action_embed, moderation_self_action_message,
    target_profile_from_user,
};
use bramble_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "ban",
    desc: "Ban a member from the server.",
    category: "moderation",
    usage: "/ban <user> [reason]",
};

#[poise::command(
    slash_command,
    category = "Moderation",
    required_permissions = "BAN_MEMBERS"
)]
pub async fn ban(
    ctx: Context<'_>,
    #[description = "The member to ban"] user: serenity::User,
    #[description = "Reason for the ban"] reason: Option<String>,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    if user.id == ctx.author().id {
        ctx.say(moderation_self_action_message("ban")).await?;
        return Ok(());
    }

    let ban_result = guild_id
        .ban_with_reason(
            ctx.http(),
            user.id,
            0,
            reason.as_deref().unwrap_or("No reason provided"),
        )
        .await;

    if let Err(source) = ban_result {
        error!(?source, "ban request failed");
        ctx.say("I couldn't ban that user. Check role hierarchy and permissions.")
            .await?;
        return Ok(());
    }

    let target_profile = target_profile_from_user(&user);
    let embed =
        moderation_action_embed(&target_profile, user.id, "banned", reason.as_deref(), None);
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}
