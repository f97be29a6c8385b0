use crate::CommandMeta;
use bramble_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "stats",
    desc: "Show bot stats.",
    category: "utility",
    usage: "/stats",
};

#[poise::command(slash_command, category = "Utility")]
pub async fn stats(ctx: Context<'_>) -> Result<(), Error> {
    let guilds = ctx.cache().guilds().len();
    let users = ctx.cache().user_count();

    ctx.say(format!("Guilds: {}\nCached users: {}", guilds, users))
        .await?;

    Ok(())
}
