mod cli;
mod data;

use clap::Parser;
use env_logger::Env;
use log::info;

use cli::Cli;
use data::{loader, sampler, saver};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Cli::parse();
    run(&args)
}

fn run(args: &Cli) -> anyhow::Result<()> {
    let table = loader::load(&args.input_file_path)?;
    info!(
        "loaded {} rows, {} columns from {}",
        table.len(),
        table.columns.len(),
        args.input_file_path.display()
    );

    let mut subset = sampler::sample(&table, &args.group_column, args.num_samples)?;
    if let Some(column) = &args.sort_by {
        subset = subset.sorted_by(column)?;
    }

    let path = saver::save(&subset, &args.output_dir_path, &args.output_file_name)?;
    info!("done: wrote {} rows to {}", subset.len(), path.display());

    Ok(())
}
