#[path = "config/mod.rs"]
mod config_group;

pub use config_group::{setmodlog, setmodrole};

pub mod addrole;
pub mod ban;
pub mod createrole;
pub mod deleterole;
pub mod forcenick;
pub mod kick;
pub mod lock;
pub mod massassign;
pub mod mute;
pub mod nick;
pub mod pruneinactive;
pub mod purge;
pub mod removerole;
pub mod slowmode;
pub mod softban;
pub mod tempban;
pub mod timeout;
pub mod unban;
pub mod unlock;
pub mod unmute;
pub mod unwarn;
pub mod warn;
pub mod warnings;

pub(crate) mod embeds;
