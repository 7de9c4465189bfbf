use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use tracing::info;

use automanifest::cli;
use automanifest::config::ProjectConfig;
use automanifest::env::BuildEnvironment;
use automanifest::logging::{self, Verbosity};
use automanifest::manifest::{self, FileManifestStore, ManifestStore, MemoryManifestStore};
use automanifest::source;
use automanifest::{Declaration, ManifestProcessor, Round};

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    let config = match &args.config {
        Some(path) => ProjectConfig::load(path).context("Failed to load project config")?,
        None => ProjectConfig::default(),
    };
    let env = BuildEnvironment::detect().with_overrides(&config.environment);
    let options = args.attributes.clone().or_else(|| config.options());

    let rounds = args
        .path
        .iter()
        .map(|path| {
            source::load_declarations(path)
                .with_context(|| format!("Failed to load declarations from {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut processor = ManifestProcessor::new(options.as_deref(), &env);
    match &args.output {
        Some(dir) => {
            let mut store = FileManifestStore::in_output_dir(dir);
            run_rounds(&mut processor, &rounds, &mut store);
            if !processor.diagnostics().has_errors() {
                info!(path = %store.path().display(), "manifest updated");
            }
        }
        None => {
            let mut store = MemoryManifestStore::new();
            run_rounds(&mut processor, &rounds, &mut store);
            if let Some(manifest) = store.manifest() {
                print!("{}", manifest::write(manifest));
            }
        }
    }

    if processor.diagnostics().has_errors() {
        anyhow::bail!("Failed to update the manifest");
    }
    Ok(())
}

fn run_rounds<S: ManifestStore>(
    processor: &mut ManifestProcessor,
    rounds: &[Vec<Declaration>],
    store: &mut S,
) {
    for roots in rounds {
        processor.process_round(&Round::new(roots), store);
    }
    processor.process_round(&Round::terminal(), store);
}
