use crate::CommandMeta;
use bramble_core::{Context, Error};
use bramble_utils::formatting::neutralize_mentions;

pub const META: CommandMeta = CommandMeta {
    name: "say",
    desc: "Make the bot say something.",
    category: "utility",
    usage: "/say <text>",
};

#[poise::command(slash_command, category = "Utility")]
pub async fn say(
    ctx: Context<'_>,
    #[description = "Text to say"] text: String,
) -> Result<(), Error> {
    ctx.say(neutralize_mentions(&text)).await?;

    Ok(())
}
