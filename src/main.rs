use clap::Parser;
use securevault::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Save {
            ref account,
            ref value,
        } => securevault::cli::commands::save::execute(&cli, account, value.as_deref()),
        Commands::Reveal { ref account, delay } => {
            securevault::cli::commands::reveal::execute(&cli, account, delay)
        }
        Commands::List => securevault::cli::commands::list::execute(&cli),
        Commands::Wipe => securevault::cli::commands::wipe::execute(),
        Commands::Completions { ref shell } => {
            securevault::cli::commands::completions::execute(shell)
        }
    };

    if let Err(e) = result {
        securevault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
