use crate::{COMMANDS, CommandMeta};
use bramble_core::{Context, Error};
use bramble_utils::embed::basic_embed;

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "List all available commands.",
    category: "utility",
    usage: "/help",
};

#[poise::command(slash_command, category = "Utility")]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    let mut categories: Vec<&str> = COMMANDS.iter().map(|meta| meta.category).collect();
    categories.sort_unstable();
    categories.dedup();

    let mut sections = Vec::new();
    for category in categories {
        let mut lines = vec![format!("**{}**", capitalize(category))];
        let mut listed: Vec<&CommandMeta> = COMMANDS
            .iter()
            .filter(|meta| meta.category == category)
            .collect();
        listed.sort_unstable_by_key(|meta| meta.name);

        for meta in listed {
            lines.push(format!("`/{}` — {}", meta.name, meta.desc));
        }
        sections.push(lines.join("\n"));
    }

    let embed = basic_embed("Available Commands", sections.join("\n\n"));
    ctx.send(poise::CreateReply::default().ephemeral(true).embed(embed))
        .await?;

    Ok(())
}

fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}
