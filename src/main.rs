/// CLI tool for expanding batch criteria and summarizing sweep results
use std::env;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use swarm_batch::config::SweepConfig;
use swarm_batch::criteria::{self, BatchCriteria};
use swarm_batch::measures::SteadyStateRaw;
use swarm_batch::population::ArgosPopulation;
use swarm_batch::Result;

fn main() -> ExitCode {
    let _ = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return ExitCode::FAILURE;
    }

    let result = match args[1].as_str() {
        "generate" => generate_config(&args[2..]),
        "list" => list_experiments(&args[2..]),
        "expand" => expand_criteria(&args[2..]),
        "summarize" => summarize(&args[2..]),
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("Usage: sweep_runner <command> [options]\n");
    println!("Commands:");
    println!("  generate <out.toml>                Write a default sweep configuration");
    println!("  list <criteria>                    Show the expansion of a criteria string");
    println!("  expand <criteria> <out_dir>        Write per-experiment attribute-change files");
    println!("  summarize <criteria> <sweep.toml>  Reduce collated CSVs and emit the summary graph\n");
    println!("Examples:");
    println!("  sweep_runner list oracle.entities.Z64");
    println!("  sweep_runner expand oracle.entities.Z64 batch_input");
    println!("  sweep_runner summarize oracle.entities.Z64 sweep.toml");
}

fn build_criteria(criteria_str: &str) -> BatchCriteria {
    criteria::build(criteria_str, criteria::parse(criteria_str), &ArgosPopulation)
}

fn generate_config(args: &[String]) -> Result<()> {
    let out = args.first().map(String::as_str).unwrap_or("sweep.toml");
    SweepConfig::default().to_file(Path::new(out))?;
    println!("Sweep configuration written to {}", out);
    Ok(())
}

fn list_experiments(args: &[String]) -> Result<()> {
    let criteria_str = require_arg(args, 0, "criteria string");
    let bc = build_criteria(criteria_str);

    let plan = bc.expansion()?;
    let names = bc.experiment_names()?;
    println!("Criteria: {}", bc.cli_arg());
    println!("Total experiments: {}\n", plan.len());

    for (name, changes) in names.iter().zip(plan.iter()) {
        println!("  {}", name);
        for chg in changes {
            println!("    {} @ {} = {}", chg.attr, chg.path, chg.value);
        }
        println!();
    }
    Ok(())
}

fn expand_criteria(args: &[String]) -> Result<()> {
    let criteria_str = require_arg(args, 0, "criteria string");
    let out_dir = Path::new(require_arg(args, 1, "output directory"));

    let bc = build_criteria(criteria_str);
    let plan = bc.expansion()?;
    let names = bc.experiment_names()?;

    fs::create_dir_all(out_dir).map_err(|e| swarm_batch::Error::io(out_dir, e))?;
    for (name, changes) in names.iter().zip(plan.iter()) {
        let path = out_dir.join(format!("{}.toml", name));
        let contents = toml::to_string_pretty(changes).map_err(swarm_batch::Error::from)?;
        fs::write(&path, contents).map_err(|e| swarm_batch::Error::io(&path, e))?;
    }

    println!(
        "Wrote {} attribute-change files to {}",
        plan.len(),
        out_dir.display()
    );
    Ok(())
}

fn summarize(args: &[String]) -> Result<()> {
    let criteria_str = require_arg(args, 0, "criteria string");
    let config_path = Path::new(require_arg(args, 1, "sweep config file"));

    let config = SweepConfig::from_file(config_path)?;
    let bc = build_criteria(criteria_str);
    let artifact = SteadyStateRaw::new(&config).from_batch(&bc)?;

    println!("Summary graph artifact: {}", artifact.display());
    Ok(())
}

fn require_arg<'a>(args: &'a [String], idx: usize, what: &str) -> &'a str {
    match args.get(idx) {
        Some(s) => s.as_str(),
        None => {
            eprintln!("Missing argument: {}", what);
            print_usage();
            std::process::exit(2);
        }
    }
}
