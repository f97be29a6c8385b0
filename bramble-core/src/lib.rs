use std::time::Instant;

use bramble_store::Store;

pub type Error = anyhow::Error;

#[derive(Clone, Debug)]
pub struct Data {
    pub store: Store,
    pub started_at: Instant,
}

pub type Context<'a> = poise::Context<'a, Data, Error>;
