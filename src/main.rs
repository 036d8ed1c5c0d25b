use std::path::PathBuf;

use clap::Parser;
use medtrain::{CsvSink, Trainer};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the topics and questions from
    #[arg(short, long)]
    questions: PathBuf,

    /// CSV file the answer log is appended to
    #[arg(short, long, default_value = "answers_log.csv")]
    log: PathBuf,

    /// Name recorded in the answer log and on the leaderboard
    #[arg(short, long, default_value = "guest")]
    name: String,
}

fn main() {
    let args = Args::parse();
    let sink = Box::new(CsvSink::new(args.log));
    let trainer =
        Trainer::from_json(args.questions, sink, args.name).expect("Failed to load questions");

    if let Err(e) = trainer.run() {
        eprintln!("Error running trainer: {}", e);
        std::process::exit(1);
    }
}
