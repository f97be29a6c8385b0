use poise::serenity_prelude as serenity;
use tracing::{debug, error};

use bramble_store::model::tasks::{ScheduledTask, TaskAction};

/// Perform one claimed task. Best-effort: failures are logged, never
/// reported back to the invocation that scheduled the task.
pub(crate) async fn execute(http: &serenity::Http, task: &ScheduledTask) {
    debug!(task_id = task.id, guild_id = task.guild_id, "executing deferred action");

    let result = match &task.action {
        TaskAction::Unban { user_id } => {
            serenity::GuildId::new(task.guild_id)
                .unban(http, serenity::UserId::new(*user_id))
                .await
        }
        TaskAction::Remind { user_id, message } => send_reminder(http, *user_id, message).await,
    };

    if let Err(source) = result {
        error!(?source, task_id = task.id, "deferred action failed");
    }
}

async fn send_reminder(
    http: &serenity::Http,
    user_id: u64,
    message: &str,
) -> Result<(), serenity::Error> {
    let user = http.get_user(serenity::UserId::new(user_id)).await?;
    let dm_channel = user.create_dm_channel(http).await?;
    dm_channel
        .send_message(
            http,
            serenity::CreateMessage::new().content(format!("Reminder: {message}")),
        )
        .await?;

    Ok(())
}
