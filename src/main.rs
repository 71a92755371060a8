use clap::{Parser, Subcommand};
use log::{debug, LevelFilter};
use std::path::{Path, PathBuf};

use token_scorer::scoring::{InvalidScoresheet, Scorer, ScoringRules};
use token_scorer::sheet::ScoresheetDocument;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INVALID: i32 = 1;
const EXIT_UNKNOWN_ZONE: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a scoresheet and print each team's score
    Score {
        /// Path to the scoresheet (YAML)
        file: PathBuf,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Validate a scoresheet without scoring it
    Validate {
        /// Path to the scoresheet (YAML)
        file: PathBuf,
    },
    /// Print a blank scoresheet template
    Template,
}

#[derive(Parser, Debug)]
#[command(name = "token-scorer")]
#[command(about = "Validate and score token-collection match scoresheets", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a scoring rules file (defaults to the standard rules)
    #[arg(short, long, global = true)]
    rules: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_rules_or_exit(path: Option<&Path>) -> ScoringRules {
    let rules = match token_scorer::config::load_rules(path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = rules.validate() {
        eprintln!("Scoring rules errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    rules
}

fn load_scoresheet_or_exit(path: &Path) -> ScoresheetDocument {
    match token_scorer::sheet::load_scoresheet(path) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Scoresheet error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    }
}

fn build_scorer_or_exit<'r>(document: &ScoresheetDocument, rules: &'r ScoringRules) -> Scorer<'r> {
    match document.scorer(rules) {
        Ok(scorer) => scorer,
        Err(e) => {
            eprintln!("Scoresheet error: {}", e);
            std::process::exit(EXIT_UNKNOWN_ZONE);
        }
    }
}

fn report_invalid(err: &InvalidScoresheet, json: bool) -> ! {
    if json {
        match token_scorer::output::format_invalid_json(err) {
            Ok(output) => println!("{}", output),
            Err(e) => eprintln!("Failed to format output: {}", e),
        }
    } else {
        let use_colors = token_scorer::output::should_use_colors();
        eprintln!("{}", token_scorer::output::format_invalid(err, use_colors));
    }
    std::process::exit(EXIT_INVALID);
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Template => {
            print!("{}", token_scorer::sheet::TEMPLATE);
        }
        Commands::Validate { file } => {
            let rules = load_rules_or_exit(cli.rules.as_deref());
            let document = load_scoresheet_or_exit(&file);
            let scorer = build_scorer_or_exit(&document, &rules);

            if let Err(e) = scorer.validate(document.other.as_ref()) {
                report_invalid(&e, false);
            }
            println!("ok");
        }
        Commands::Score { file, json } => {
            let rules = load_rules_or_exit(cli.rules.as_deref());
            let document = load_scoresheet_or_exit(&file);
            let scorer = build_scorer_or_exit(&document, &rules);

            if let Err(e) = scorer.validate(document.other.as_ref()) {
                report_invalid(&e, json);
            }

            if json {
                match token_scorer::output::format_json(&scorer.calculate_scores()) {
                    Ok(output) => println!("{}", output),
                    Err(e) => {
                        eprintln!("Failed to format output: {}", e);
                        std::process::exit(EXIT_CONFIG);
                    }
                }
            } else {
                let breakdown = scorer.calculate_breakdown();
                let use_colors = token_scorer::output::should_use_colors();
                println!(
                    "{}",
                    token_scorer::output::format_score_table(&breakdown, use_colors)
                );
            }

            debug!("Scored {} teams from {}", document.teams.len(), file.display());
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
