use anyhow::{anyhow, Result};
use clap::{arg, Command};
use knapsack_challenges::knapsack::{Instance, Solution};
use knapsack_utils::load_json_arg;

fn cli() -> Command {
    Command::new("knapsack-verifier")
        .about("Verifies a knapsack solution")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("verify_solution")
                .about("Verifies a solution against its instance")
                .arg(
                    arg!(<INSTANCE> "Instance json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<SOLUTION> "Solution json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("verify_solution", sub_m)) => verify_solution(
            sub_m.get_one::<String>("INSTANCE").unwrap().clone(),
            sub_m.get_one::<String>("SOLUTION").unwrap().clone(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

pub fn verify_solution(instance: String, solution: String) -> Result<()> {
    let instance = load_json_arg::<Instance>(&instance)?;
    instance.validate()?;
    let solution = load_json_arg::<Solution>(&solution)?;

    instance
        .verify_solution(&solution)
        .map_err(|e| anyhow!("Invalid solution: {}", e))?;
    println!("Solution is valid");
    Ok(())
}
