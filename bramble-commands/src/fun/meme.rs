use rand::seq::SliceRandom;

use crate::CommandMeta;
use bramble_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "meme",
    desc: "Return a random meme.",
    category: "fun",
    usage: "/meme",
};

// Static placeholders; swap for an API integration if one ever lands.
const MEMES: &[&str] = &[
    "https://i.imgur.com/AfFp7pu.png",
    "https://i.imgur.com/5M0Y5pF.jpg",
    "https://i.imgur.com/3GvwNBf.png",
];

#[poise::command(slash_command, category = "Fun")]
pub async fn meme(ctx: Context<'_>) -> Result<(), Error> {
    let Some(url) = MEMES.choose(&mut rand::thread_rng()) else {
        return Ok(());
    };
    ctx.say(*url).await?;

    Ok(())
}
