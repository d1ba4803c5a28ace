//! Driver behind the `hash-mechanic` binary.
//!
//! Selects a digest and a generator from the command line, builds the
//! catalog, writes it as a flat binary file and optionally prints it as hex.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

use std::{
  fs,
  io::{self, Write},
  path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use avalanche::{ChainedGenerator, Generator, HighDensityGenerator, LowDensityGenerator, render::to_hex_lines};
use clap::{Parser, ValueEnum};
use hashes::crypto::{Blake256, Brake256, Md5};
use log::info;
use traits::Digest;

/// Digest selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DigestKind {
  #[value(name = "blake256")]
  Blake256,
  #[value(name = "brake256")]
  Brake256,
  #[value(name = "md5")]
  Md5,
}

/// Generator selector. Values match [`Generator::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GeneratorKind {
  Test,
  #[value(name = "lowdensity")]
  LowDensity,
  #[value(name = "highdensity")]
  HighDensity,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "hash-mechanic", about = "Write avalanche digest catalogs for BLAKE-256, BRAKE-256 and MD5")]
pub struct Args {
  /// Digest to drive.
  #[arg(short, long, value_enum)]
  pub digest: DigestKind,

  /// Input perturbation pattern.
  #[arg(short, long, value_enum)]
  pub generator: GeneratorKind,

  /// Round count (BRAKE-256, or 1-4 for MD5).
  #[arg(short, long, value_name = "N")]
  pub rounds: Option<usize>,

  /// Directory the catalog is written to.
  #[arg(short, long, value_name = "DIR", default_value = ".")]
  pub out_dir: PathBuf,

  /// Also print the catalog, one hex digest per line.
  #[arg(short, long, action = clap::ArgAction::SetTrue)]
  pub print: bool,
}

/// Instantiate the selected digest.
///
/// # Errors
///
/// BLAKE-256 takes no round count; MD5 only accepts `1..=4`.
pub fn build_digest(kind: DigestKind, rounds: Option<usize>) -> Result<Box<dyn Digest>> {
  Ok(match (kind, rounds) {
    (DigestKind::Brake256, Some(rounds)) => Box::new(Brake256::with_rounds(rounds)),
    (DigestKind::Brake256, None) => Box::new(Brake256::new()),
    (DigestKind::Blake256, None) => Box::new(Blake256::new()),
    (DigestKind::Blake256, Some(rounds)) => bail!("--rounds {rounds} is not supported for blake256"),
    (DigestKind::Md5, Some(rounds)) => Box::new(Md5::with_rounds(rounds).context("invalid --rounds for md5")?),
    (DigestKind::Md5, None) => Box::new(Md5::new()),
  })
}

#[must_use]
pub fn build_generator(kind: GeneratorKind) -> Box<dyn Generator> {
  match kind {
    GeneratorKind::Test => Box::new(ChainedGenerator::default()),
    GeneratorKind::LowDensity => Box::new(LowDensityGenerator::new()),
    GeneratorKind::HighDensity => Box::new(HighDensityGenerator::new()),
  }
}

/// `{algorithm}-{generator}[-r{rounds}].dat`, algorithm lowercased with
/// non-alphanumerics removed.
#[must_use]
pub fn output_file_name(algorithm: &str, generator: &str, rounds: Option<usize>) -> String {
  let algorithm: String = algorithm
    .chars()
    .filter(char::is_ascii_alphanumeric)
    .map(|c| c.to_ascii_lowercase())
    .collect();
  match rounds {
    Some(rounds) => format!("{algorithm}-{generator}-r{rounds}.dat"),
    None => format!("{algorithm}-{generator}.dat"),
  }
}

/// Build the catalog selected by `args` and write it under `args.out_dir`.
///
/// Returns the path of the written file.
///
/// # Errors
///
/// Invalid digest/round combinations, generation failures and I/O errors.
pub fn run(args: &Args) -> Result<PathBuf> {
  let mut digest = build_digest(args.digest, args.rounds)?;
  let generator = build_generator(args.generator);

  let catalog = generator
    .generate_bytes(digest.as_mut())
    .with_context(|| format!("{} catalog for {}", generator.name(), digest.algorithm_name()))?;

  let d = digest.digest_size();
  info!(
    "{} {}: {} bytes, {} digests",
    digest.algorithm_name(),
    generator.name(),
    catalog.len(),
    catalog.len() / d.max(1)
  );

  let path = args
    .out_dir
    .join(output_file_name(digest.algorithm_name(), generator.name(), args.rounds));
  write_catalog(&path, &catalog)?;

  if args.print {
    print_catalog(&mut io::stdout().lock(), &catalog, d)?;
  }
  Ok(path)
}

fn write_catalog(path: &Path, catalog: &[u8]) -> Result<()> {
  if let Some(dir) = path.parent() {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
  }
  fs::write(path, catalog).with_context(|| format!("failed to write {}", path.display()))
}

/// Write one hex line per digest to `out`.
///
/// # Errors
///
/// I/O errors from `out`.
pub fn print_catalog(out: &mut impl Write, catalog: &[u8], digest_size: usize) -> Result<()> {
  for line in to_hex_lines(catalog, digest_size) {
    writeln!(out, "{line}").context("failed to print catalog")?;
  }
  Ok(())
}
