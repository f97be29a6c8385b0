use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::guild_only_message;
use bramble_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "user",
    desc: "Show a member's info.",
    category: "utility",
    usage: "/user [user]",
};

#[poise::command(slash_command, category = "Utility")]
pub async fn user(
    ctx: Context<'_>,
    #[description = "The member to show (defaults to you)"] user: Option<serenity::User>,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    let target = user.unwrap_or_else(|| ctx.author().clone());
    let member = guild_id.member(ctx.http(), target.id).await?;
    let joined = member
        .joined_at
        .map_or_else(|| "unknown".to_owned(), |at| format!("<t:{}:f>", at.unix_timestamp()));

    ctx.say(format!(
        "{}\nJoined: {}\nID: {}",
        target.tag(),
        joined,
        target.id.get()
    ))
    .await?;

    Ok(())
}
