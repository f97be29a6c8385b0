use crate::model::tasks::{ScheduledTask, TaskAction};
use crate::store::Store;

/// Persist a deferred action and return its id.
pub async fn schedule_task(
    store: &Store,
    guild_id: u64,
    fire_at: u64,
    action: TaskAction,
) -> anyhow::Result<u64> {
    store
        .mutate(|document| {
            let id = document.next_task_id;
            document.next_task_id += 1;
            document.tasks.push(ScheduledTask {
                id,
                guild_id,
                fire_at,
                action,
            });
            id
        })
        .await
}

/// Remove and return every task due at or before `now` (epoch milliseconds).
///
/// Claimed tasks are gone from the document whether or not their execution
/// later succeeds; execution is best-effort by contract.
pub async fn claim_due_tasks(store: &Store, now: u64) -> anyhow::Result<Vec<ScheduledTask>> {
    store
        .mutate(|document| {
            let mut due = Vec::new();
            document.tasks.retain(|task| {
                if task.fire_at <= now {
                    due.push(task.clone());
                    false
                } else {
                    true
                }
            });
            due
        })
        .await
}

/// Cancel a pending task by id. Returns whether a task was removed.
pub async fn cancel_task(store: &Store, id: u64) -> anyhow::Result<bool> {
    store
        .mutate(|document| {
            let before = document.tasks.len();
            document.tasks.retain(|task| task.id != id);
            document.tasks.len() != before
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::{cancel_task, claim_due_tasks, schedule_task};
    use crate::model::tasks::TaskAction;
    use crate::store::Store;

    #[tokio::test]
    async fn task_ids_are_distinct_and_increasing() {
        let store = Store::memory();
        let first = schedule_task(&store, 1, 100, TaskAction::Unban { user_id: 2 })
            .await
            .expect("schedule");
        let second = schedule_task(&store, 1, 200, TaskAction::Unban { user_id: 3 })
            .await
            .expect("schedule");

        assert!(second > first);
    }

    #[tokio::test]
    async fn claim_returns_only_due_tasks_and_removes_them() {
        let store = Store::memory();
        let due = schedule_task(&store, 1, 100, TaskAction::Unban { user_id: 2 })
            .await
            .expect("schedule");
        let pending = schedule_task(
            &store,
            1,
            5_000,
            TaskAction::Remind {
                user_id: 3,
                message: "tea".to_owned(),
            },
        )
        .await
        .expect("schedule");

        let claimed = claim_due_tasks(&store, 100).await.expect("claim");
        assert_eq!(claimed.len(), 1);
        assert_eq!(claimed[0].id, due);

        // Claimed tasks are gone; the future task is still queued.
        let reclaimed = claim_due_tasks(&store, 100).await.expect("claim");
        assert!(reclaimed.is_empty());

        let later = claim_due_tasks(&store, 10_000).await.expect("claim");
        assert_eq!(later.len(), 1);
        assert_eq!(later[0].id, pending);
    }

    #[tokio::test]
    async fn cancel_removes_a_pending_task() {
        let store = Store::memory();
        let id = schedule_task(&store, 1, 5_000, TaskAction::Unban { user_id: 2 })
            .await
            .expect("schedule");

        assert!(cancel_task(&store, id).await.expect("cancel"));
        assert!(!cancel_task(&store, id).await.expect("cancel"));
        assert!(claim_due_tasks(&store, 10_000).await.expect("claim").is_empty());
    }

    #[tokio::test]
    async fn tasks_survive_a_store_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("storage.json");

        let store = Store::file(&path);
        let id = schedule_task(
            &store,
            1,
            5_000,
            TaskAction::Remind {
                user_id: 3,
                message: "tea".to_owned(),
            },
        )
        .await
        .expect("schedule");

        let reopened = Store::file(&path);
        let claimed = claim_due_tasks(&reopened, 10_000).await.expect("claim");
        assert_eq!(claimed.len(), 1);
        assert_eq!(claimed[0].id, id);
    }
}
