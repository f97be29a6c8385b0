use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use bramble_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "avatar",
    desc: "Show a user's avatar.",
    category: "utility",
    usage: "/avatar [user]",
};

#[poise::command(slash_command, category = "Utility")]
pub async fn avatar(
    ctx: Context<'_>,
    #[description = "The user to show (defaults to you)"] user: Option<serenity::User>,
) -> Result<(), Error> {
    let target = user.unwrap_or_else(|| ctx.author().clone());
    ctx.say(target.face()).await?;

    Ok(())
}
