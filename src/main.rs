use anyhow::{Context, Result};
use std::io::{self, BufWriter};
use std::{env, process};
use ygconcat::{merge_files, Options};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: ygconcat <nElems>");
        process::exit(1);
    }

    let element_count: usize = args[1]
        .parse()
        .with_context(|| format!("invalid element count '{}'", args[1]))?;
    let options = Options::new().element_count(element_count);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stats = merge_files(&options, &mut out).context("merge failed")?;

    log::info!("Wrote {} merged blocks", stats.blocks);
    Ok(())
}
