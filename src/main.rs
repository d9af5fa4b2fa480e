//  ____  ____     __        __     ____
// |  _ \|  _ \ __ \ \      / /__  / ___| ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \| |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/ \____|\___|_| |_|
//
// Auther : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-02
// Version : 0.1.0
// License : Mulan PSL v2
//
// A word-weaving password generator written in Rust.

use clap::Parser;
use rpawogen::commands;

#[derive(Debug, Parser)]
#[command(name = "rpawogen")]
#[command(about = "A word-weaving password generator written in Rust", long_about = None)]
enum Cli {
    /// Record default generation options
    Init {
        /// Accept the defaults without prompting
        #[arg(short = 'y', long, default_value_t = false)]
        yes: bool,
    },

    /// Generate one or more passwords
    Gen(GenArgs),

    /// Interactive generation session with a saveable password log
    Session,

    /// Show the effective configuration
    Config,
}

#[derive(Debug, Parser)]
struct GenArgs {
    /// Password length in characters
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(4..=64))]
    length: Option<u64>,

    /// Uppercase complexity weighting (word mode only)
    #[arg(short = 'x', long, value_parser = clap::value_parser!(u8).range(1..=10))]
    complexity: Option<u8>,

    /// Assemble the password from dictionary words
    #[arg(short, long, default_value_t = false)]
    words: bool,

    /// Guarantee at least one digit
    #[arg(short, long, default_value_t = false)]
    digits: bool,

    /// Guarantee at least one punctuation character
    #[arg(short, long, default_value_t = false)]
    punct: bool,

    /// Number of passwords to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Seed the generator for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Append generated passwords to this log file
    #[arg(short = 'o', long)]
    log_file: Option<String>,
}

fn main() -> Result<(), String> {
    env_logger::init();
    let cli = Cli::parse();

    match cli {
        Cli::Init { yes } => commands::init::interactive_init(yes),
        Cli::Gen(args) => commands::password_gen::generate_batch(
            args.length.map(|v| v as usize),
            args.complexity,
            args.words,
            args.digits,
            args.punct,
            args.count,
            args.seed,
            args.log_file,
        ),
        Cli::Session => commands::session::run_session(),
        Cli::Config => commands::init::show_config(),
    }
}
