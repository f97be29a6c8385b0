use rand::seq::SliceRandom;

use crate::CommandMeta;
use bramble_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "joke",
    desc: "Tell a joke.",
    category: "fun",
    usage: "/joke",
};

const JOKES: &[&str] = &[
    "Why don't scientists trust atoms? Because they make up everything.",
    "I told my computer I needed a break, and it said: No problem — I'll go to sleep.",
    "Why do programmers prefer dark mode? Because light attracts bugs.",
];

#[poise::command(slash_command, category = "Fun")]
pub async fn joke(ctx: Context<'_>) -> Result<(), Error> {
    let Some(line) = JOKES.choose(&mut rand::thread_rng()) else {
        return Ok(());
    };
    ctx.say(*line).await?;

    Ok(())
}
