use rand::Rng;

use crate::CommandMeta;
use bramble_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "coin",
    desc: "Flip a coin.",
    category: "fun",
    usage: "/coin",
};

#[poise::command(slash_command, category = "Fun")]
pub async fn coin(ctx: Context<'_>) -> Result<(), Error> {
    let face = if rand::thread_rng().gen_bool(0.5) {
        "Heads"
    } else {
        "Tails"
    };
    ctx.say(face).await?;

    Ok(())
}
