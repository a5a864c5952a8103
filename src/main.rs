use clap::Parser;
use log::error;

use lore_lang::compiler::Compiler;

/// Compiler for the Lore programming language.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Path to the `.lr` source file to compile.
    file: std::path::PathBuf,
}

fn main() {
    simple_logger::init_with_level(log::Level::Warn).unwrap();

    // Usage problems exit with status 1, like every other failure.
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    std::process::exit(0)
                }
                _ => std::process::exit(1),
            }
        }
    };

    if let Err(e) = Compiler::new(args.file).compile() {
        error!("{e}");
        std::process::exit(1);
    }
}
