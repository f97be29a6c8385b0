use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tracing::error;

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::{
    guild_only_message, moderation_action_embed, moderation_self_action_message,
    target_profile_from_user,
};
use bramble_core::{Context, Error};
use bramble_utils::formatting::format_compact_duration;

pub const META: CommandMeta = CommandMeta {
    name: "timeout",
    desc: "Timeout a member for a number of minutes.",
    category: "moderation",
    usage: "/timeout <user> <minutes>",
};

#[poise::command(
    slash_command,
    category = "Moderation",
    required_permissions = "MODERATE_MEMBERS"
)]
pub async fn timeout(
    ctx: Context<'_>,
    #[description = "The member to timeout"] user: serenity::User,
    #[description = "Minutes to timeout for"] minutes: u32,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    if user.id == ctx.author().id {
        ctx.say(moderation_self_action_message("timeout")).await?;
        return Ok(());
    }

    if minutes == 0 {
        ctx.say("Duration must be at least 1 minute.").await?;
        return Ok(());
    }

    let until_unix = SystemTime::now()
        .checked_add(Duration::from_secs(u64::from(minutes) * 60))
        .unwrap_or(SystemTime::now())
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_secs()) as i64;
    let until = serenity::Timestamp::from_unix_timestamp(until_unix)?;

    let edit = serenity::EditMember::new().disable_communication_until_datetime(until);
    if let Err(source) = guild_id.edit_member(ctx.http(), user.id, edit).await {
        error!(?source, "timeout request failed");
        ctx.say("I couldn't timeout that user. Check role hierarchy and permissions.")
            .await?;
        return Ok(());
    }

    let duration_label = format_compact_duration(u64::from(minutes) * 60);
    let target_profile = target_profile_from_user(&user);
    let embed = moderation_action_embed(
        &target_profile,
        user.id,
        "timed out",
        None,
        Some(&duration_label),
    );
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}
