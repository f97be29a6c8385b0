use rand::seq::SliceRandom;

use crate::CommandMeta;
use bramble_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "quote",
    desc: "Return a random quote.",
    category: "fun",
    usage: "/quote",
};

const QUOTES: &[&str] = &[
    "Be yourself; everyone else is already taken. — Oscar Wilde",
    "Simplicity is the ultimate sophistication. — Leonardo da Vinci",
    "The only limit to our realization of tomorrow is our doubts of today. — F. D. Roosevelt",
];

#[poise::command(slash_command, category = "Fun")]
pub async fn quote(ctx: Context<'_>) -> Result<(), Error> {
    let Some(line) = QUOTES.choose(&mut rand::thread_rng()) else {
        return Ok(());
    };
    ctx.say(*line).await?;

    Ok(())
}
