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
    name: "mute",
    desc: "Timeout a member (default: 10 minutes).",
    category: "moderation",
    usage: "/mute <user> [minutes]",
};

const DEFAULT_MUTE_MINUTES: u32 = 10;

#[poise::command(
    slash_command,
    category = "Moderation",
    required_permissions = "MODERATE_MEMBERS"
)]
pub async fn mute(
    ctx: Context<'_>,
    #[description = "The member to mute"] user: serenity::User,
    #[description = "Minutes to mute for"] minutes: Option<u32>,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    if user.id == ctx.author().id {
        ctx.say(moderation_self_action_message("mute")).await?;
        return Ok(());
    }

    let minutes = match minutes {
        Some(0) => {
            ctx.say("Duration must be at least 1 minute.").await?;
            return Ok(());
        }
        Some(minutes) => minutes,
        None => DEFAULT_MUTE_MINUTES,
    };

    let until_unix = SystemTime::now()
        .checked_add(Duration::from_secs(u64::from(minutes) * 60))
        .unwrap_or(SystemTime::now())
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_secs()) as i64;
    let until = serenity::Timestamp::from_unix_timestamp(until_unix)?;

    let edit = serenity::EditMember::new().disable_communication_until_datetime(until);
    if let Err(source) = guild_id.edit_member(ctx.http(), user.id, edit).await {
        error!(?source, "mute request failed");
        ctx.say("I couldn't mute that user. Check role hierarchy and permissions.")
            .await?;
        return Ok(());
    }

    let duration_label = format_compact_duration(u64::from(minutes) * 60);
    let target_profile = target_profile_from_user(&user);
    let embed = moderation_action_embed(
        &target_profile,
        user.id,
        "muted",
        None,
        Some(&duration_label),
    );
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}
