use std::collections::HashSet;
use std::env;
use std::time::Instant;

use poise::serenity_prelude as serenity;
use tracing::{error, info, warn};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use rustls::crypto::ring::default_provider;

use bramble_core::{Data, Error};
use bramble_scheduler::Scheduler;
use bramble_store::Store;

const DEFAULT_STORE_PATH: &str = "storage.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer().with_filter(filter_fn(|metadata| {
        let target = metadata.target();

        let within_info_level = *metadata.level() <= tracing::Level::INFO;
        if !within_info_level {
            return false;
        }

        !(target.starts_with("serenity::gateway::bridge::shard_manager")
            || target.starts_with("serenity::gateway::bridge::shard_runner"))
    }));

    tracing_subscriber::registry().with(fmt_layer).init();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    // Load the .env file
    dotenvy::dotenv().ok();

    // The token is the one non-negotiable piece of configuration.
    let token = env::var("DISCORD_TOKEN")?;

    let guild_id = match env_opt("GUILD_ID") {
        Some(raw) => Some(raw.parse::<u64>()?),
        None => None,
    };

    let store_path = env_opt("STORE_PATH").unwrap_or_else(|| DEFAULT_STORE_PATH.to_owned());
    let store = Store::file(&store_path);
    info!(path = %store_path, "store initialized");

    let commands = bramble_commands::commands();
    ensure_unique_names(&commands)?;

    let intents = serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MEMBERS
        | serenity::GatewayIntents::GUILD_MESSAGES;

    let data_store = store.clone();
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands,
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                info!("Bramble has awoken!");

                match guild_id {
                    Some(guild_id) => {
                        poise::builtins::register_in_guild(
                            ctx,
                            &framework.options().commands,
                            serenity::GuildId::new(guild_id),
                        )
                        .await?;
                        info!(guild_id, "registered guild commands");
                    }
                    None => {
                        poise::builtins::register_globally(ctx, &framework.options().commands)
                            .await?;
                        info!("registered global commands (propagation can take up to an hour)");
                    }
                }

                Ok(Data {
                    store: data_store,
                    started_at: Instant::now(),
                })
            })
        })
        .build();

    info!("Bramble is connecting...");

    let mut client_builder = serenity::ClientBuilder::new(token, intents).framework(framework);

    if let Some(status) = env_opt("STATUS").and_then(|raw| parse_status(&raw)) {
        client_builder = client_builder.status(status);
    }
    if let Some(text) = env_opt("ACTIVITY_TEXT") {
        let kind = env_opt("ACTIVITY_TYPE").unwrap_or_default();
        client_builder = client_builder.activity(parse_activity(&kind, &text));
    }

    let mut client = client_builder.await?;

    let scheduler = Scheduler::new(client.http.clone(), store);
    tokio::spawn(scheduler.run());

    client.start().await?;
    Ok(())
}

/// Read an env var, treating unset and blank as absent.
fn env_opt(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Duplicate command names are a configuration error, caught before connect.
fn ensure_unique_names(commands: &[poise::Command<Data, Error>]) -> anyhow::Result<()> {
    let mut seen = HashSet::new();
    for command in commands {
        if !seen.insert(command.name.as_str()) {
            anyhow::bail!("duplicate command name registered: {}", command.name);
        }
    }

    Ok(())
}

fn parse_status(raw: &str) -> Option<serenity::OnlineStatus> {
    match raw.to_ascii_lowercase().as_str() {
        "online" => Some(serenity::OnlineStatus::Online),
        "idle" => Some(serenity::OnlineStatus::Idle),
        "dnd" => Some(serenity::OnlineStatus::DoNotDisturb),
        "invisible" => Some(serenity::OnlineStatus::Invisible),
        other => {
            warn!(status = other, "unrecognized STATUS value; keeping default");
            None
        }
    }
}

// Accepts both the activity names and the numeric codes the config page emits.
fn parse_activity(kind: &str, text: &str) -> serenity::ActivityData {
    match kind.to_ascii_lowercase().as_str() {
        "listening" | "2" => serenity::ActivityData::listening(text),
        "watching" | "3" => serenity::ActivityData::watching(text),
        "competing" | "5" => serenity::ActivityData::competing(text),
        _ => serenity::ActivityData::playing(text),
    }
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(?error, "command error");

            let embed = serenity::CreateEmbed::new()
                .title("Command Error")
                .description("Something went wrong while running this command.")
                .color(bramble_utils::embed::DEFAULT_EMBED_COLOR);

            let _ = ctx
                .send(poise::CreateReply::default().ephemeral(true).embed(embed))
                .await;
        }
        poise::FrameworkError::MissingUserPermissions { ctx, .. } => {
            let _ = ctx
                .send(
                    poise::CreateReply::default()
                        .ephemeral(true)
                        .content("You are missing the permissions required for this command."),
                )
                .await;
        }
        poise::FrameworkError::ArgumentParse { ctx, input, .. } => {
            let usage = match bramble_commands::find_meta(&ctx.command().name) {
                Some(meta) => format!("Usage: `{}`", meta.usage),
                None => format!("Usage: `/{}`", ctx.command().qualified_name),
            };
            let description = if let Some(input) = input {
                format!("Invalid argument: `{}`\n{}", input, usage)
            } else {
                format!("Missing required argument.\n{}", usage)
            };

            let _ = ctx.say(description).await;
        }
        poise::FrameworkError::UnknownInteraction {
            ctx, interaction, ..
        } => {
            warn!(command = %interaction.data.name, "unknown command invocation");

            let _ = interaction
                .create_response(
                    ctx,
                    serenity::CreateInteractionResponse::Message(
                        serenity::CreateInteractionResponseMessage::new()
                            .ephemeral(true)
                            .content("Command not found."),
                    ),
                )
                .await;
        }
        other => {
            error!(?other, "framework error");
        }
    }
}
