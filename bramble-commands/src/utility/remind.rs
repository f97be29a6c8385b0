use crate::CommandMeta;
use bramble_core::{Context, Error};
use bramble_store::impls::tasks::schedule_task;
use bramble_store::model::tasks::TaskAction;
use bramble_utils::time::{minutes_to_millis, now_unix_millis};

pub const META: CommandMeta = CommandMeta {
    name: "remind",
    desc: "Set a reminder in minutes; it arrives as a DM.",
    category: "utility",
    usage: "/remind <minutes> <message>",
};

#[poise::command(slash_command, category = "Utility")]
pub async fn remind(
    ctx: Context<'_>,
    #[description = "Minutes until the reminder"] minutes: u32,
    #[description = "Reminder message"] message: String,
) -> Result<(), Error> {
    if minutes == 0 {
        ctx.say("Minutes must be at least 1.").await?;
        return Ok(());
    }

    let fire_at = now_unix_millis().saturating_add(minutes_to_millis(u64::from(minutes)));
    let task_id = schedule_task(
        &ctx.data().store,
        ctx.guild_id().map_or(0, |guild_id| guild_id.get()),
        fire_at,
        TaskAction::Remind {
            user_id: ctx.author().id.get(),
            message,
        },
    )
    .await?;

    ctx.send(
        poise::CreateReply::default()
            .ephemeral(true)
            .content(format!(
                "I will remind you in {} minute(s). (reminder #{})",
                minutes, task_id
            )),
    )
    .await?;

    Ok(())
}
