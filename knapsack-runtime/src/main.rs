use anyhow::{anyhow, Result};
use clap::{arg, ArgAction, Command};
use knapsack_challenges::knapsack::{generate_dataset, GenerationSettings, Instance};
use knapsack_runtime::{evaluate::evaluate_dataset, handle};
use knapsack_structs::config::RuntimeConfig;
use knapsack_utils::{compress_obj, jsonify, jsonify_pretty, load_json_arg, read_json_arg};
use std::{fs, path::PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("knapsack-runtime")
        .about("Solves, generates or evaluates knapsack instances")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("solve")
                .about("Solves a knapsack request")
                .arg(
                    arg!(<REQUEST> "Request json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--config [CONFIG] "Runtime config json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the response will be saved to this file path (default json)")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--compress [COMPRESS] "If output file is set, the response will be compressed as zlib")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("generate")
                .about("Generates a dataset of random instances")
                .arg(
                    arg!(<SETTINGS> "Generation settings json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<SEED> "A string used in seed generation")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<COUNT> "Number of instances to generate")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the dataset will be saved to this file path")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("evaluate")
                .about("Compares every solver over a dataset")
                .arg(
                    arg!(<DATASET> "Dataset json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--config [CONFIG] "Runtime config json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("solve", sub_m)) => solve(
            sub_m.get_one::<String>("REQUEST").unwrap().clone(),
            sub_m.get_one::<String>("config").cloned(),
            sub_m.get_one::<PathBuf>("output").cloned(),
            *sub_m.get_one::<bool>("compress").unwrap(),
        ),
        Some(("generate", sub_m)) => generate(
            sub_m.get_one::<String>("SETTINGS").unwrap().clone(),
            sub_m.get_one::<String>("SEED").unwrap().clone(),
            *sub_m.get_one::<usize>("COUNT").unwrap(),
            sub_m.get_one::<PathBuf>("output").cloned(),
        ),
        Some(("evaluate", sub_m)) => evaluate(
            sub_m.get_one::<String>("DATASET").unwrap().clone(),
            sub_m.get_one::<String>("config").cloned(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

pub fn solve(
    request: String,
    config: Option<String>,
    output_file: Option<PathBuf>,
    compress: bool,
) -> Result<()> {
    let config = load_config(config)?;
    let body = read_json_arg(&request)?;

    let response = handle(&body, &config);
    if !response.is_success() {
        println!("{}", response.to_json());
        std::process::exit(if response.status == 400 { 1 } else { 2 });
    }

    match output_file {
        Some(path) => {
            if compress {
                fs::write(&path, compress_obj(&response.body)?)?;
            } else {
                fs::write(&path, response.to_json())?;
            }
            info!(path = %path.display(), compress, "wrote response");
        }
        None => println!("{}", response.to_json()),
    }
    Ok(())
}

pub fn generate(
    settings: String,
    seed: String,
    count: usize,
    output_file: Option<PathBuf>,
) -> Result<()> {
    let settings = load_json_arg::<GenerationSettings>(&settings)?;
    let instances = generate_dataset(&seed, count, &settings)?;

    match output_file {
        Some(path) => {
            fs::write(&path, jsonify(&instances))?;
            info!(path = %path.display(), count, "wrote dataset");
        }
        None => println!("{}", jsonify(&instances)),
    }
    Ok(())
}

pub fn evaluate(dataset: String, config: Option<String>) -> Result<()> {
    let config = load_config(config)?;
    let instances = load_json_arg::<Vec<Instance>>(&dataset)?;
    let summary = evaluate_dataset(&instances, &config)?;
    println!("{}", jsonify_pretty(&summary));
    Ok(())
}

fn load_config(config: Option<String>) -> Result<RuntimeConfig> {
    match config {
        Some(config) => load_json_arg::<RuntimeConfig>(&config),
        None => Ok(RuntimeConfig::default()),
    }
}
