pub mod choose;
pub mod coin;
pub mod hug;
pub mod joke;
pub mod meme;
pub mod quote;
pub mod roll;
