use tracing::debug;

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use bramble_core::{Context, Error};
use bramble_utils::formatting::neutralize_mentions;

pub const META: CommandMeta = CommandMeta {
    name: "poll",
    desc: "Create a quick poll (up to 5 options).",
    category: "utility",
    usage: "/poll <question> <option1> <option2> [option3] [option4] [option5]",
};

const NUMBER_EMOJIS: [&str; 5] = ["1️⃣", "2️⃣", "3️⃣", "4️⃣", "5️⃣"];

#[poise::command(slash_command, category = "Utility")]
pub async fn poll(
    ctx: Context<'_>,
    #[description = "Poll question"] question: String,
    #[description = "Option 1"] option1: String,
    #[description = "Option 2"] option2: String,
    #[description = "Option 3"] option3: Option<String>,
    #[description = "Option 4"] option4: Option<String>,
    #[description = "Option 5"] option5: Option<String>,
) -> Result<(), Error> {
    let options: Vec<String> = [Some(option1), Some(option2), option3, option4, option5]
        .into_iter()
        .flatten()
        .collect();

    let body = options
        .iter()
        .enumerate()
        .map(|(index, option)| format!("{}. {}", index + 1, option))
        .collect::<Vec<_>>()
        .join("\n");

    let reply = ctx
        .say(neutralize_mentions(&format!("**{}**\n\n{}", question, body)))
        .await?;

    // Reactions are cosmetic; a failed react leaves the poll usable.
    let message = reply.message().await?;
    for emoji in NUMBER_EMOJIS.iter().take(options.len()) {
        if let Err(source) = message
            .react(
                ctx.http(),
                serenity::ReactionType::Unicode((*emoji).to_owned()),
            )
            .await
        {
            debug!(?source, "poll reaction failed");
        }
    }

    Ok(())
}
