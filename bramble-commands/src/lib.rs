pub mod fun;
pub mod moderation;
pub mod utility;

use bramble_core::{Data, Error};

pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    utility::ping::META,
    utility::help::META,
    utility::info::META,
    utility::uptime::META,
    utility::avatar::META,
    utility::server::META,
    utility::user::META,
    utility::stats::META,
    utility::say::META,
    utility::shout::META,
    utility::poll::META,
    utility::suggest::META,
    utility::remind::META,
    fun::roll::META,
    fun::coin::META,
    fun::choose::META,
    fun::joke::META,
    fun::quote::META,
    fun::meme::META,
    fun::hug::META,
    moderation::createrole::META,
    moderation::deleterole::META,
    moderation::addrole::META,
    moderation::removerole::META,
    moderation::massassign::META,
    moderation::purge::META,
    moderation::kick::META,
    moderation::ban::META,
    moderation::tempban::META,
    moderation::unban::META,
    moderation::softban::META,
    moderation::mute::META,
    moderation::unmute::META,
    moderation::timeout::META,
    moderation::lock::META,
    moderation::unlock::META,
    moderation::slowmode::META,
    moderation::nick::META,
    moderation::forcenick::META,
    moderation::warn::META,
    moderation::unwarn::META,
    moderation::warnings::META,
    moderation::setmodrole::META,
    moderation::setmodlog::META,
    moderation::pruneinactive::META,
];

/// Exact, case-sensitive registry lookup by command name.
pub fn find_meta(name: &str) -> Option<&'static CommandMeta> {
    COMMANDS.iter().find(|meta| meta.name == name)
}

pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        utility::ping::ping(),
        utility::help::help(),
        utility::info::info(),
        utility::uptime::uptime(),
        utility::avatar::avatar(),
        utility::server::server(),
        utility::user::user(),
        utility::stats::stats(),
        utility::say::say(),
        utility::shout::shout(),
        utility::poll::poll(),
        utility::suggest::suggest(),
        utility::remind::remind(),
        fun::roll::roll(),
        fun::coin::coin(),
        fun::choose::choose(),
        fun::joke::joke(),
        fun::quote::quote(),
        fun::meme::meme(),
        fun::hug::hug(),
        moderation::createrole::createrole(),
        moderation::deleterole::deleterole(),
        moderation::addrole::addrole(),
        moderation::removerole::removerole(),
        moderation::massassign::massassign(),
        moderation::purge::purge(),
        moderation::kick::kick(),
        moderation::ban::ban(),
        moderation::tempban::tempban(),
        moderation::unban::unban(),
        moderation::softban::softban(),
        moderation::mute::mute(),
        moderation::unmute::unmute(),
        moderation::timeout::timeout(),
        moderation::lock::lock(),
        moderation::unlock::unlock(),
        moderation::slowmode::slowmode(),
        moderation::nick::nick(),
        moderation::forcenick::forcenick(),
        moderation::warn::warn(),
        moderation::unwarn::unwarn(),
        moderation::warnings::warnings(),
        moderation::setmodrole::setmodrole(),
        moderation::setmodlog::setmodlog(),
        moderation::pruneinactive::pruneinactive(),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{COMMANDS, commands, find_meta};

    #[test]
    fn registry_names_are_unique() {
        let mut seen = HashSet::new();
        for meta in COMMANDS {
            assert!(seen.insert(meta.name), "duplicate command name: {}", meta.name);
        }
    }

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        assert!(find_meta("ping").is_some());
        assert!(find_meta("Ping").is_none());
        assert!(find_meta("ping ").is_none());
        assert!(find_meta("definitely-not-a-command").is_none());
    }

    #[test]
    fn built_commands_match_the_metadata_table() {
        let built: HashSet<String> = commands()
            .into_iter()
            .map(|command| command.name.clone())
            .collect();
        let listed: HashSet<String> = COMMANDS
            .iter()
            .map(|meta| meta.name.to_owned())
            .collect();

        assert_eq!(built, listed);
        assert_eq!(built.len(), COMMANDS.len());
    }
}
