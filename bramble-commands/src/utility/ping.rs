use std::time::Instant;

use bramble_core::{Context, Error};

use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "ping",
    desc: "Check bot latency.",
    category: "utility",
    usage: "/ping",
};

#[poise::command(slash_command, category = "Utility")]
pub async fn ping(ctx: Context<'_>) -> Result<(), Error> {
    let gateway = ctx.ping().await;

    let before = Instant::now();
    let reply = ctx.say("Pinging...").await?;
    let roundtrip = before.elapsed();

    reply
        .edit(
            ctx,
            poise::CreateReply::default().content(format!(
                "Pong! Gateway: {}ms | Roundtrip: {}ms",
                gateway.as_millis(),
                roundtrip.as_millis()
            )),
        )
        .await?;

    Ok(())
}
