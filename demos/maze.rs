//! Terminal maze demo: generate a random maze, solve it, print it.
//!
//! Run: cargo run --bin maze -- --rows 10 --columns 40 --seed 7

use std::io::Write;

use mazer_demos::{Settings, load_config, parse_args, print_help, run};
use mazer_paths::Solution;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            print_help();
            std::process::exit(1);
        }
    };
    if args.help {
        print_help();
        return;
    }

    let file = load_config(&args);
    let settings = Settings::resolve(&args, &file);
    let report = match run(&settings, rand::random()) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    log::info!(
        "{}x{} maze, sparseness {}, seed {}, strategy {}",
        settings.maze.rows,
        settings.maze.columns,
        settings.maze.sparseness,
        report.seed,
        settings.strategy
    );

    println!("{}", report.rendered);
    match &report.solution {
        Solution::Found(path) => log::info!("Solved in {} steps", path.steps()),
        Solution::NoSolution => println!("No solution"),
    }
}
