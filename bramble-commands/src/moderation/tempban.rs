use tracing::error;

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::{
    guild_only_message, moderation_action_embed, moderation_self_action_message,
    target_profile_from_user,
};
use bramble_core::{Context, Error};
use bramble_store::impls::tasks::schedule_task;
use bramble_store::model::tasks::TaskAction;
use bramble_utils::formatting::format_compact_duration;
use bramble_utils::time::{minutes_to_millis, now_unix_millis};

pub const META: CommandMeta = CommandMeta {
    name: "tempban",
    desc: "Ban a member for a number of minutes, then unban automatically.",
    category: "moderation",
    usage: "/tempban <user> <minutes> [reason]",
};

#[poise::command(
    slash_command,
    category = "Moderation",
    required_permissions = "BAN_MEMBERS"
)]
pub async fn tempban(
    ctx: Context<'_>,
    #[description = "The member to ban"] user: serenity::User,
    #[description = "Duration in minutes"] minutes: u32,
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

    if minutes == 0 {
        ctx.say("Duration must be at least 1 minute.").await?;
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
        error!(?source, "tempban request failed");
        ctx.say("I couldn't ban that user. Check role hierarchy and permissions.")
            .await?;
        return Ok(());
    }

    // The unban outlives this invocation, so it goes through the durable
    // task queue rather than an in-process timer.
    let fire_at = now_unix_millis().saturating_add(minutes_to_millis(u64::from(minutes)));
    schedule_task(
        &ctx.data().store,
        guild_id.get(),
        fire_at,
        TaskAction::Unban {
            user_id: user.id.get(),
        },
    )
    .await?;

    let duration_label = format_compact_duration(u64::from(minutes) * 60);
    let target_profile = target_profile_from_user(&user);
    let embed = moderation_action_embed(
        &target_profile,
        user.id,
        "temporarily banned",
        reason.as_deref(),
        Some(&duration_label),
    );
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}
