use rand::Rng;

use crate::CommandMeta;
use bramble_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "roll",
    desc: "Roll a die (default: 6 sides).",
    category: "fun",
    usage: "/roll [sides]",
};

const DEFAULT_SIDES: u32 = 6;

#[poise::command(slash_command, category = "Fun")]
pub async fn roll(
    ctx: Context<'_>,
    #[description = "Number of sides"] sides: Option<u32>,
) -> Result<(), Error> {
    let sides = sides.unwrap_or(DEFAULT_SIDES);
    if sides == 0 {
        ctx.say("Sides must be a positive number.").await?;
        return Ok(());
    }

    let rolled = roll_die(sides);
    ctx.say(format!("🎲 You rolled {} (1-{})", rolled, sides))
        .await?;

    Ok(())
}

fn roll_die(sides: u32) -> u32 {
    rand::thread_rng().gen_range(1..=sides)
}

#[cfg(test)]
mod tests {
    use super::roll_die;

    #[test]
    fn rolls_stay_in_range_and_cover_every_face() {
        let mut seen = [false; 6];
        for _ in 0..10_000 {
            let rolled = roll_die(6);
            assert!((1..=6).contains(&rolled));
            seen[(rolled - 1) as usize] = true;
        }

        // 10k trials make a missing face astronomically unlikely.
        assert!(seen.iter().all(|face| *face));
    }

    #[test]
    fn one_sided_die_always_rolls_one() {
        for _ in 0..100 {
            assert_eq!(roll_die(1), 1);
        }
    }
}
