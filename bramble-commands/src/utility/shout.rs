use crate::CommandMeta;
use bramble_core::{Context, Error};
use bramble_utils::formatting::neutralize_mentions;

pub const META: CommandMeta = CommandMeta {
    name: "shout",
    desc: "Shout (uppercase) a message.",
    category: "utility",
    usage: "/shout <text>",
};

#[poise::command(slash_command, category = "Utility")]
pub async fn shout(
    ctx: Context<'_>,
    #[description = "Text to shout"] text: String,
) -> Result<(), Error> {
    ctx.say(neutralize_mentions(&text.to_uppercase())).await?;

    Ok(())
}
