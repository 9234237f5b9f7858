use clap::Parser;
use omneuro::{cli::Args, session::run};

fn main() {
    let args = Args::parse();
    run(&args).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });
}
