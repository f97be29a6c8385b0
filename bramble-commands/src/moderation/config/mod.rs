pub mod setmodlog;
pub mod setmodrole;
