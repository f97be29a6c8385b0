use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::{guild_only_message, target_profile_from_user};
use bramble_core::{Context, Error};
use bramble_store::impls::warnings::get_warnings;
use bramble_utils::embed::basic_embed;
use bramble_utils::formatting::neutralize_mentions;

pub const META: CommandMeta = CommandMeta {
    name: "warnings",
    desc: "List warnings for a member.",
    category: "moderation",
    usage: "/warnings <user>",
};

#[poise::command(slash_command, category = "Moderation")]
pub async fn warnings(
    ctx: Context<'_>,
    #[description = "The member to check"] user: serenity::User,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    let entries = get_warnings(&ctx.data().store, guild_id.get(), user.id.get()).await;
    let target_profile = target_profile_from_user(&user);

    if entries.is_empty() {
        ctx.say(format!("{} has no warnings.", target_profile.display_name))
            .await?;
        return Ok(());
    }

    let lines = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            format!(
                "{}. {} — by {} • <t:{}:f>",
                index + 1,
                neutralize_mentions(&entry.reason),
                neutralize_mentions(&entry.moderator),
                entry.timestamp / 1_000,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let embed = basic_embed(
        &format!("Warnings for {}", target_profile.display_name),
        lines,
    );
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}
