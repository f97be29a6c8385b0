pub mod avatar;
pub mod help;
pub mod info;
pub mod ping;
pub mod poll;
pub mod remind;
pub mod say;
pub mod server;
pub mod shout;
pub mod stats;
pub mod suggest;
pub mod uptime;
pub mod user;
