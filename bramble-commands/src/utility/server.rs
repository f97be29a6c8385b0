use crate::CommandMeta;
use crate::moderation::embeds::guild_only_message;
use bramble_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "server",
    desc: "Show server info.",
    category: "utility",
    usage: "/server",
};

#[poise::command(slash_command, category = "Utility")]
pub async fn server(ctx: Context<'_>) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    let guild = guild_id
        .to_partial_guild_with_counts(ctx.http())
        .await?;
    let member_count = guild
        .approximate_member_count
        .map_or_else(|| "unknown".to_owned(), |count| count.to_string());

    ctx.say(format!(
        "Server: {}\nMembers: {}\nID: {}",
        guild.name,
        member_count,
        guild.id.get()
    ))
    .await?;

    Ok(())
}
