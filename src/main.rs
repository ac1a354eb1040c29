//! Command-line front-end: parse an ABI document and print a summary.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use abixml::{reader, Corpus, TranslationUnit};

#[derive(Parser)]
#[command(name = "abixml", about = "Inspect XML-encoded ABI documents", version)]
struct Args {
    /// abi-instr document, abi-corpus document, or ZIP corpus archive
    input: PathBuf,

    /// Treat the input as an abi-corpus document
    #[arg(long, conflicts_with = "archive")]
    corpus: bool,

    /// Treat the input as a ZIP corpus archive
    #[arg(long)]
    archive: bool,
}

#[derive(Serialize)]
struct UnitSummary {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    address_size: Option<u32>,
    declarations: usize,
}

#[derive(Serialize)]
struct Summary {
    path: String,
    translation_units: Vec<UnitSummary>,
}

fn summarize_unit(tu: &TranslationUnit) -> UnitSummary {
    let declarations = tu
        .global_scope()
        .borrow()
        .members()
        .map(|members| members.len())
        .unwrap_or(0);
    UnitSummary {
        path: tu.path.clone(),
        address_size: tu.address_size,
        declarations,
    }
}

fn summarize_corpus(corpus: &Corpus) -> Summary {
    Summary {
        path: corpus.path.clone(),
        translation_units: corpus.translation_units.iter().map(summarize_unit).collect(),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let summary = if args.archive {
        let corpus = reader::corpus_from_archive(&args.input)
            .with_context(|| format!("reading archive {}", args.input.display()))?;
        summarize_corpus(&corpus)
    } else if args.corpus {
        let corpus = reader::corpus_from_file(&args.input)
            .with_context(|| format!("reading corpus {}", args.input.display()))?;
        summarize_corpus(&corpus)
    } else {
        let tu = reader::translation_unit_from_file(&args.input)
            .with_context(|| format!("reading translation unit {}", args.input.display()))?;
        Summary {
            path: tu.path.clone(),
            translation_units: vec![summarize_unit(&tu)],
        }
    };

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
