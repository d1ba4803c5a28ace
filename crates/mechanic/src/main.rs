use anyhow::Result;
use clap::Parser;
use mechanic::Args;

fn main() -> Result<()> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let args = Args::parse();
  let path = mechanic::run(&args)?;
  log::info!("wrote {}", path.display());
  Ok(())
}
