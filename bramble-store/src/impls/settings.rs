use crate::store::Store;

/// Setting key for the configured moderator role id.
pub const MOD_ROLE_KEY: &str = "modRole";
/// Setting key for the configured moderation-log channel id.
pub const MODLOG_CHANNEL_KEY: &str = "modlogChannel";

/// Upsert one setting for a guild, creating the guild map on first write.
pub async fn set_setting(
    store: &Store,
    guild_id: u64,
    key: &str,
    value: impl Into<String>,
) -> anyhow::Result<()> {
    let value = value.into();
    let key = key.to_owned();

    store
        .mutate(|document| {
            document
                .settings
                .entry(guild_id.to_string())
                .or_default()
                .insert(key, value);
        })
        .await
}

/// Read one setting for a guild. `None` means the key was never set.
pub async fn get_setting(store: &Store, guild_id: u64, key: &str) -> Option<String> {
    let document = store.load_document().await;
    document
        .settings
        .get(&guild_id.to_string())
        .and_then(|settings| settings.get(key))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::{MOD_ROLE_KEY, get_setting, set_setting};
    use crate::store::Store;

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let store = Store::memory();
        set_setting(&store, 1, MOD_ROLE_KEY, "123").await.expect("set");

        assert_eq!(
            get_setting(&store, 1, MOD_ROLE_KEY).await.as_deref(),
            Some("123")
        );
    }

    #[tokio::test]
    async fn missing_key_is_none() {
        let store = Store::memory();
        assert_eq!(get_setting(&store, 1, "missingKey").await, None);
    }

    #[tokio::test]
    async fn upsert_overwrites_the_previous_value() {
        let store = Store::memory();
        set_setting(&store, 1, MOD_ROLE_KEY, "123").await.expect("set");
        set_setting(&store, 1, MOD_ROLE_KEY, "456").await.expect("set");

        assert_eq!(
            get_setting(&store, 1, MOD_ROLE_KEY).await.as_deref(),
            Some("456")
        );
    }

    #[tokio::test]
    async fn settings_are_scoped_per_guild() {
        let store = Store::memory();
        set_setting(&store, 1, MOD_ROLE_KEY, "123").await.expect("set");

        assert_eq!(get_setting(&store, 2, MOD_ROLE_KEY).await, None);
    }
}
