use crate::model::warnings::Warning;
use crate::store::Store;

/// Append a warning for a target user, creating intermediate maps as needed.
pub async fn add_warning(
    store: &Store,
    guild_id: u64,
    user_id: u64,
    warning: Warning,
) -> anyhow::Result<()> {
    store
        .mutate(|document| {
            document
                .warnings
                .entry(guild_id.to_string())
                .or_default()
                .entry(user_id.to_string())
                .or_default()
                .push(warning);
        })
        .await
}

/// Return all warnings for a target user in insertion order.
pub async fn get_warnings(store: &Store, guild_id: u64, user_id: u64) -> Vec<Warning> {
    let document = store.load_document().await;
    document
        .warnings
        .get(&guild_id.to_string())
        .and_then(|users| users.get(&user_id.to_string()))
        .cloned()
        .unwrap_or_default()
}

/// Delete every warning for a target user. No-op when none exist.
pub async fn remove_warnings(store: &Store, guild_id: u64, user_id: u64) -> anyhow::Result<()> {
    store
        .mutate(|document| {
            if let Some(users) = document.warnings.get_mut(&guild_id.to_string()) {
                users.remove(&user_id.to_string());
            }
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::{add_warning, get_warnings, remove_warnings};
    use crate::model::warnings::Warning;
    use crate::store::Store;

    fn warning(moderator: &str, reason: &str, timestamp: u64) -> Warning {
        Warning {
            moderator: moderator.to_owned(),
            reason: reason.to_owned(),
            timestamp,
        }
    }

    #[tokio::test]
    async fn unknown_pair_has_no_warnings() {
        let store = Store::memory();
        assert!(get_warnings(&store, 1, 2).await.is_empty());
    }

    #[tokio::test]
    async fn warnings_keep_insertion_order() {
        let store = Store::memory();
        let first = warning("mod#1", "spam", 10);
        let second = warning("mod#2", "links", 20);

        add_warning(&store, 1, 2, first.clone()).await.expect("add");
        add_warning(&store, 1, 2, second.clone()).await.expect("add");

        assert_eq!(get_warnings(&store, 1, 2).await, vec![first, second]);
    }

    #[tokio::test]
    async fn duplicate_warnings_are_allowed() {
        let store = Store::memory();
        let entry = warning("mod#1", "spam", 10);

        add_warning(&store, 1, 2, entry.clone()).await.expect("add");
        add_warning(&store, 1, 2, entry.clone()).await.expect("add");

        assert_eq!(get_warnings(&store, 1, 2).await.len(), 2);
    }

    #[tokio::test]
    async fn warnings_are_scoped_per_guild_and_user() {
        let store = Store::memory();
        add_warning(&store, 1, 2, warning("mod#1", "spam", 10))
            .await
            .expect("add");

        assert!(get_warnings(&store, 1, 3).await.is_empty());
        assert!(get_warnings(&store, 9, 2).await.is_empty());
    }

    #[tokio::test]
    async fn remove_clears_everything_for_the_pair() {
        let store = Store::memory();
        add_warning(&store, 1, 2, warning("mod#1", "spam", 10))
            .await
            .expect("add");
        add_warning(&store, 1, 2, warning("mod#2", "links", 20))
            .await
            .expect("add");

        remove_warnings(&store, 1, 2).await.expect("remove");
        assert!(get_warnings(&store, 1, 2).await.is_empty());
    }

    #[tokio::test]
    async fn remove_without_prior_warnings_is_a_noop() {
        let store = Store::memory();
        remove_warnings(&store, 1, 2).await.expect("remove");
        assert!(get_warnings(&store, 1, 2).await.is_empty());
    }
}
