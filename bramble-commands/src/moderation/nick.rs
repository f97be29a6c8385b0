use tracing::error;

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::guild_only_message;
use bramble_core::{Context, Error};
use bramble_utils::permissions::member_has_permission;

pub const META: CommandMeta = CommandMeta {
    name: "nick",
    desc: "Change your nickname, or another member's if permitted.",
    category: "moderation",
    usage: "/nick [user] <nick>",
};

#[poise::command(slash_command, category = "Moderation")]
pub async fn nick(
    ctx: Context<'_>,
    #[description = "The member to rename (defaults to you)"] user: Option<serenity::User>,
    #[description = "The new nickname"] nick: String,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    let target = user.unwrap_or_else(|| ctx.author().clone());

    // Renaming yourself is always allowed; renaming anyone else needs the
    // Manage Nicknames capability.
    if target.id != ctx.author().id {
        let permitted = ctx.author_member().await.is_some_and(|member| {
            member_has_permission(&member, serenity::Permissions::MANAGE_NICKNAMES)
        });

        if !permitted {
            ctx.say("You can't change other members' nicknames.").await?;
            return Ok(());
        }
    }

    let edit = serenity::EditMember::new().nickname(&nick);
    if let Err(source) = guild_id.edit_member(ctx.http(), target.id, edit).await {
        error!(?source, "nickname request failed");
        ctx.say("I couldn't change that nickname. Check role hierarchy and permissions.")
            .await?;
        return Ok(());
    }

    ctx.say(format!("Set nickname for {} -> {}", target.tag(), nick))
        .await?;

    Ok(())
}
