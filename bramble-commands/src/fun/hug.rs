use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use bramble_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "hug",
    desc: "Send a hug.",
    category: "fun",
    usage: "/hug [user]",
};

#[poise::command(slash_command, category = "Fun")]
pub async fn hug(
    ctx: Context<'_>,
    #[description = "Who to hug (defaults to you)"] user: Option<serenity::User>,
) -> Result<(), Error> {
    let target = user.unwrap_or_else(|| ctx.author().clone());

    ctx.say(format!(
        "{} gives {} a hug 🤗",
        ctx.author().name,
        target.name
    ))
    .await?;

    Ok(())
}
