use tracing::error;

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::guild_only_message;
use bramble_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "purge",
    desc: "Bulk delete the latest messages in this channel (max 100).",
    category: "moderation",
    usage: "/purge <amount>",
};

const MAX_PURGE: u16 = 100;

#[poise::command(
    slash_command,
    category = "Moderation",
    required_permissions = "MANAGE_MESSAGES"
)]
pub async fn purge(
    ctx: Context<'_>,
    #[description = "How many messages to delete"] amount: u16,
) -> Result<(), Error> {
    let Some(_guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    if amount == 0 {
        ctx.say("Amount must be at least 1.").await?;
        return Ok(());
    }

    let amount = amount.min(MAX_PURGE);
    let channel_id = ctx.channel_id();
    let messages = channel_id
        .messages(
            ctx.http(),
            serenity::GetMessages::new().limit(amount as u8),
        )
        .await?;

    let ids: Vec<serenity::MessageId> = messages.into_iter().map(|message| message.id).collect();

    if ids.is_empty() {
        ctx.say("No messages found to delete.").await?;
        return Ok(());
    }

    let deleted = ids.len();
    let delete_result = if deleted == 1 {
        channel_id.delete_message(ctx.http(), ids[0]).await
    } else {
        channel_id.delete_messages(ctx.http(), ids).await
    };

    if let Err(source) = delete_result {
        error!(?source, "purge delete request failed");
        ctx.say("I couldn't delete messages. I likely need the 'Manage Messages' permission.")
            .await?;
        return Ok(());
    }

    ctx.send(
        poise::CreateReply::default()
            .ephemeral(true)
            .content(format!("Deleted {} message(s).", deleted)),
    )
    .await?;

    Ok(())
}
