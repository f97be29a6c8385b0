use tracing::error;

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::guild_only_message;
use bramble_core::{Context, Error};
use bramble_store::impls::settings::{MODLOG_CHANNEL_KEY, get_setting};
use bramble_utils::formatting::neutralize_mentions;

pub const META: CommandMeta = CommandMeta {
    name: "suggest",
    desc: "Send a suggestion to the staff.",
    category: "utility",
    usage: "/suggest <text>",
};

#[poise::command(slash_command, category = "Utility")]
pub async fn suggest(
    ctx: Context<'_>,
    #[description = "Your suggestion"] text: String,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    ctx.send(
        poise::CreateReply::default()
            .ephemeral(true)
            .content(format!("Suggestion received: \"{}\"", neutralize_mentions(&text))),
    )
    .await?;

    // The copy to the modlog channel is best-effort; the suggester already
    // got their ack.
    let modlog = get_setting(&ctx.data().store, guild_id.get(), MODLOG_CHANNEL_KEY).await;
    let Some(channel_id) = modlog.and_then(|raw| raw.parse::<u64>().ok()) else {
        return Ok(());
    };

    let send_result = serenity::ChannelId::new(channel_id)
        .send_message(
            ctx.http(),
            serenity::CreateMessage::new().content(format!(
                "Suggestion from {}: {}",
                ctx.author().tag(),
                neutralize_mentions(&text)
            )),
        )
        .await;

    if let Err(source) = send_result {
        error!(?source, "failed to forward suggestion to modlog channel");
    }

    Ok(())
}
