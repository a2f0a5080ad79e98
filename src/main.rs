use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use grimoire::{Spell, SpellTable};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "grimoire", about = "In-memory spell index with per-category top-K queries")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Index a built-in sample spellbook and print per-category summaries.
    Demo,
    /// Rank the strongest spells of one category.
    TopK {
        /// Category to rank.
        #[arg(long)]
        category: String,
        /// Number of spells to return.
        #[arg(short, long, default_value_t = 3)]
        k: usize,
        /// Spell records, repeated: `name|category|power|words`.
        #[arg(long = "spell", required = true)]
        spells: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo => run_demo(),
        Commands::TopK {
            category,
            k,
            spells,
        } => run_top_k(&category, k, &spells),
    }
}

/// Parse one `name|category|power|words` record.
fn parse_spell(raw: &str) -> Result<Spell> {
    let fields: Vec<&str> = raw.splitn(4, '|').collect();
    let &[name, category, power, words] = fields.as_slice() else {
        bail!("expected `name|category|power|words`, got `{raw}`");
    };
    let power_level: i32 = power
        .trim()
        .parse()
        .with_context(|| format!("power level of `{name}` is not an integer: `{power}`"))?;
    Ok(Spell::new(name, category, power_level, words))
}

fn run_top_k(category: &str, k: usize, raw_spells: &[String]) -> Result<()> {
    let mut table = SpellTable::new(10);
    for raw in raw_spells {
        table.add_spell(parse_spell(raw)?);
    }
    info!(total = table.total_spells(), "spellbook indexed");

    match table.top_k(category, k) {
        Some(top) => {
            for spell in top {
                println!("{spell}");
            }
        }
        None => println!("no spells in category `{category}`"),
    }
    Ok(())
}

fn run_demo() -> Result<()> {
    let mut table = SpellTable::new(10);
    let spellbook = [
        ("lightning bolt", "lightning", 11, "go lightning bolt"),
        ("fireball", "fire", 10, "fireball!"),
        ("frostbolt", "ice", 7, "freeze please"),
        ("thunderstorm", "lightning", 9, "I`m going to shock you"),
        ("poison spray", "poison", 5, "sssss"),
        ("shockwave", "lightning", 8, "go pikachu!"),
        ("flamethrower", "fire", 15, "foooooooo!"),
        ("fireball II", "fire", 12, "fireball!!"),
        ("frost nova", "ice", 4, "chill dude"),
    ];
    for (name, category, power_level, words) in spellbook {
        table.add_spell(Spell::new(name, category, power_level, words));
    }

    println!("indexed {} spells", table.total_spells());
    for category in ["fire", "ice", "lightning", "poison"] {
        println!(
            "\n{category} ({} spells):",
            table.spells_in_category(category)
        );
        for spell in table.top_k(category, 3).unwrap_or_default() {
            println!("  {spell}");
        }
    }
    Ok(())
}
