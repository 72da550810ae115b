use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use log::{info, warn};
use romanz_engine::dataset;
use romanz_protocol::{Dataset, Lang};

#[derive(Parser)]
#[command(author, version, about = "Compiles a JSON conjugation dataset to an rkyv archive")]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Fail unless the dataset declares this language.
    #[arg(short, long)]
    lang: Option<Lang>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    info!("reading {:?}", cli.input);
    let text = fs::read_to_string(&cli.input).with_context(|| format!("cannot read {:?}", cli.input))?;

    let data = dataset::load_json(&text)?;
    dataset::validate(&data)?;
    if let Some(expected) = cli.lang {
        if data.lang != expected {
            bail!("{:?} holds a {} dataset, expected {}", cli.input, data.lang, expected);
        }
    }
    if data.verbs.is_empty() {
        warn!("{} dataset has no verbs", data.lang);
    }

    info!(
        "compiling {} dataset v{}: {} verbs, {} templates",
        data.lang,
        data.version,
        data.verbs.len(),
        data.templates.len()
    );
    let bytes = dataset::to_archive(&data)?;

    // The archive must load back before it is written
    let archived = rkyv::check_archived_root::<Dataset>(&bytes)
        .map_err(|e| anyhow::anyhow!("archive failed validation: {}", e))?;
    if archived.verbs.len() != data.verbs.len() {
        bail!("archive holds {} verbs, expected {}", archived.verbs.len(), data.verbs.len());
    }

    fs::write(&cli.output, bytes.as_slice()).with_context(|| format!("cannot write {:?}", cli.output))?;
    info!("wrote {} bytes to {:?}", bytes.len(), cli.output);
    Ok(())
}
