use tracing::{debug, error};

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::guild_only_message;
use bramble_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "massassign",
    desc: "Assign a role to every member, optionally filtered by a role.",
    category: "moderation",
    usage: "/massassign <role> [filter_role]",
};

const MEMBER_PAGE_SIZE: u64 = 1_000;

#[poise::command(
    slash_command,
    category = "Moderation",
    required_permissions = "MANAGE_ROLES"
)]
pub async fn massassign(
    ctx: Context<'_>,
    #[description = "The role to add"] role: serenity::Role,
    #[description = "Only members holding this role are assigned"] filter_role: Option<
        serenity::Role,
    >,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    ctx.send(
        poise::CreateReply::default()
            .ephemeral(true)
            .content("Starting mass assign... (this may take a while)"),
    )
    .await?;

    let members = fetch_all_members(&ctx, guild_id).await?;
    let filter_role_id = filter_role.as_ref().map(|role| role.id);
    let targets: Vec<&serenity::Member> = members
        .iter()
        .filter(|member| is_eligible(member.user.bot, &member.roles, filter_role_id))
        .collect();

    let mut successes = 0_usize;
    for member in &targets {
        let add_result = ctx
            .http()
            .add_member_role(guild_id, member.user.id, role.id, None)
            .await;

        // Per-member failures only show up as a count shortfall.
        match add_result {
            Ok(()) => successes += 1,
            Err(source) => debug!(?source, user_id = member.user.id.get(), "mass assign skip"),
        }
    }

    if let Err(source) = ctx
        .send(
            poise::CreateReply::default()
                .ephemeral(true)
                .content(format!(
                    "Assigned {} to {}/{} member(s).",
                    role.name,
                    successes,
                    targets.len()
                )),
        )
        .await
    {
        error!(?source, "mass assign report failed");
    }

    Ok(())
}

async fn fetch_all_members(
    ctx: &Context<'_>,
    guild_id: serenity::GuildId,
) -> Result<Vec<serenity::Member>, Error> {
    let mut members = Vec::new();
    let mut after: Option<serenity::UserId> = None;

    loop {
        let page = guild_id
            .members(ctx.http(), Some(MEMBER_PAGE_SIZE), after)
            .await?;

        let Some(last) = page.last() else {
            break;
        };
        after = Some(last.user.id);

        let page_len = page.len() as u64;
        members.extend(page);

        if page_len < MEMBER_PAGE_SIZE {
            break;
        }
    }

    Ok(members)
}

/// Bot accounts are never assigned; a filter role, when given, must be held.
fn is_eligible(
    is_bot: bool,
    member_roles: &[serenity::RoleId],
    filter_role: Option<serenity::RoleId>,
) -> bool {
    if is_bot {
        return false;
    }

    match filter_role {
        Some(filter_role) => member_roles.contains(&filter_role),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::is_eligible;
    use poise::serenity_prelude as serenity;

    #[test]
    fn bots_are_never_eligible() {
        assert!(!is_eligible(true, &[], None));
        assert!(!is_eligible(
            true,
            &[serenity::RoleId::new(5)],
            Some(serenity::RoleId::new(5)),
        ));
    }

    #[test]
    fn filter_role_must_be_held() {
        let held = [serenity::RoleId::new(5)];
        assert!(is_eligible(false, &held, Some(serenity::RoleId::new(5))));
        assert!(!is_eligible(false, &held, Some(serenity::RoleId::new(6))));
        assert!(!is_eligible(false, &[], Some(serenity::RoleId::new(5))));
    }

    #[test]
    fn no_filter_means_every_human_member() {
        assert!(is_eligible(false, &[], None));
        assert!(is_eligible(false, &[serenity::RoleId::new(5)], None));
    }
}
