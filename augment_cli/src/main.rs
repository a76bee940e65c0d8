mod args;

use anyhow::{Context, Result};
use clap::Parser;

use args::Args;
use augment_core::{rank, KnowledgeBaseLoader};
use board_state::GameState;

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let kb = KnowledgeBaseLoader::load_dir(&args.data_dir).with_context(|| {
        format!("failed to load knowledge base from {}", args.data_dir.display())
    })?;

    let state = match &args.state {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            GameState::from_json(&json)
                .with_context(|| format!("failed to parse {}", path.display()))?
        }
        None => args.game_state(),
    };

    let offered = args.offered();
    if offered.is_empty() {
        anyhow::bail!("no augments offered; pass --augments \"A,B,C\"");
    }

    let ranking = rank(&offered, &state, &kb);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&ranking)?);
    } else {
        println!("Recommended augment order:\n");
        println!("{}", ranking.explain());
    }

    Ok(())
}
