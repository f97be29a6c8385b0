use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::{
    guild_only_message, moderation_action_embed, target_profile_from_user,
};
use bramble_core::{Context, Error};
use bramble_store::impls::warnings::add_warning;
use bramble_store::model::warnings::Warning;
use bramble_utils::time::now_unix_millis;

pub const META: CommandMeta = CommandMeta {
    name: "warn",
    desc: "Issue a warning to a member.",
    category: "moderation",
    usage: "/warn <user> [reason]",
};

#[poise::command(
    slash_command,
    category = "Moderation",
    required_permissions = "KICK_MEMBERS"
)]
pub async fn warn(
    ctx: Context<'_>,
    #[description = "The member to warn"] user: serenity::User,
    #[description = "Reason for the warning"] reason: Option<String>,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    let reason = reason.unwrap_or_else(|| "No reason provided".to_owned());
    add_warning(
        &ctx.data().store,
        guild_id.get(),
        user.id.get(),
        Warning {
            moderator: ctx.author().tag(),
            reason: reason.clone(),
            timestamp: now_unix_millis(),
        },
    )
    .await?;

    let target_profile = target_profile_from_user(&user);
    let embed = moderation_action_embed(&target_profile, user.id, "warned", Some(&reason), None);
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}
