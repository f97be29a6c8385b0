use poise::serenity_prelude as serenity;

/// Check a resolved permission set against a required capability.
///
/// `ADMINISTRATOR` implicitly grants everything.
pub fn permissions_grant(
    perms: Option<serenity::Permissions>,
    required: serenity::Permissions,
) -> bool {
    perms.is_some_and(|perms| {
        perms.contains(serenity::Permissions::ADMINISTRATOR) || perms.contains(required)
    })
}

/// Check a member's permissions as delivered with an interaction.
///
/// The `permissions` field is only populated on members attached to an
/// interaction payload; absent permissions never grant.
pub fn member_has_permission(
    member: &serenity::Member,
    required: serenity::Permissions,
) -> bool {
    permissions_grant(member.permissions, required)
}

#[cfg(test)]
mod tests {
    use super::permissions_grant;
    use poise::serenity_prelude as serenity;

    #[test]
    fn absent_permissions_never_grant() {
        assert!(!permissions_grant(None, serenity::Permissions::MANAGE_NICKNAMES));
    }

    #[test]
    fn administrator_grants_everything() {
        assert!(permissions_grant(
            Some(serenity::Permissions::ADMINISTRATOR),
            serenity::Permissions::MANAGE_NICKNAMES,
        ));
    }

    #[test]
    fn exact_capability_grants() {
        assert!(permissions_grant(
            Some(serenity::Permissions::MANAGE_NICKNAMES),
            serenity::Permissions::MANAGE_NICKNAMES,
        ));
        assert!(!permissions_grant(
            Some(serenity::Permissions::KICK_MEMBERS),
            serenity::Permissions::MANAGE_NICKNAMES,
        ));
    }
}
