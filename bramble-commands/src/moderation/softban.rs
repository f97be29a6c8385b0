use tracing::error;

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::{
    guild_only_message, moderation_action_embed, moderation_self_action_message,
    target_profile_from_user,
};
use bramble_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "softban",
    desc: "Ban and immediately unban a member to clear their recent messages.",
    category: "moderation",
    usage: "/softban <user>",
};

#[poise::command(
    slash_command,
    category = "Moderation",
    required_permissions = "BAN_MEMBERS"
)]
pub async fn softban(
    ctx: Context<'_>,
    #[description = "The member to softban"] user: serenity::User,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    if user.id == ctx.author().id {
        ctx.say(moderation_self_action_message("softban")).await?;
        return Ok(());
    }

    // One day of message history is deleted by the ban half.
    let softban_result = async {
        guild_id
            .ban_with_reason(ctx.http(), user.id, 1, "Softban")
            .await?;
        guild_id.unban(ctx.http(), user.id).await
    }
    .await;

    if let Err(source) = softban_result {
        error!(?source, "softban request failed");
        ctx.say("I couldn't softban that user. Check role hierarchy and permissions.")
            .await?;
        return Ok(());
    }

    let target_profile = target_profile_from_user(&user);
    let embed = moderation_action_embed(&target_profile, user.id, "softbanned", None, None);
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}
