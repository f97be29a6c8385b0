use tracing::error;

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::{guild_only_message, usage_message};
use bramble_core::{Context, Error};
use bramble_utils::parse::parse_user_id;

pub const META: CommandMeta = CommandMeta {
    name: "unban",
    desc: "Unban a user by id.",
    category: "moderation",
    usage: "/unban <userid>",
};

#[poise::command(
    slash_command,
    category = "Moderation",
    required_permissions = "BAN_MEMBERS"
)]
pub async fn unban(
    ctx: Context<'_>,
    #[description = "User id or mention"] userid: String,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    let Some(user_id) = parse_user_id(&userid) else {
        ctx.say(usage_message(META.usage)).await?;
        return Ok(());
    };

    if let Err(source) = guild_id
        .unban(ctx.http(), serenity::UserId::new(user_id))
        .await
    {
        error!(?source, "unban request failed");
        ctx.say("I couldn't unban that user. They may not be banned, or I lack permissions.")
            .await?;
        return Ok(());
    }

    ctx.say(format!("Unbanned <@{}>", user_id)).await?;

    Ok(())
}
