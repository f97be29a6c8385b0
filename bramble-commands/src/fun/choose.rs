use rand::seq::SliceRandom;

use crate::CommandMeta;
use bramble_core::{Context, Error};
use bramble_utils::formatting::neutralize_mentions;
use bramble_utils::parse::split_choices;

pub const META: CommandMeta = CommandMeta {
    name: "choose",
    desc: "Choose between comma-separated options.",
    category: "fun",
    usage: "/choose <options>",
};

#[poise::command(slash_command, category = "Fun")]
pub async fn choose(
    ctx: Context<'_>,
    #[description = "Comma-separated list of options"] options: String,
) -> Result<(), Error> {
    let choices = split_choices(&options);
    let Some(pick) = choices.choose(&mut rand::thread_rng()) else {
        ctx.say("No options provided.").await?;
        return Ok(());
    };

    ctx.say(format!("I choose: {}", neutralize_mentions(pick)))
        .await?;

    Ok(())
}
