use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod output;

use commands::{iterate, replace};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "renamer")]
#[command(version = VERSION)]
#[command(about = "Rename files under a directory by replacing literal text or numbering them")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace literal text in file names
    Replace(replace::ReplaceArgs),
    /// Rename files to a numbered prefix, keeping everything from the pivot on
    Iterate(iterate::IterateArgs),
}

fn main() -> ExitCode {
    if std::env::args_os().len() < 2 {
        let exit_code = output::print_usage(Cli::command());
        return ExitCode::from(exit_code_to_u8(exit_code));
    }

    let cli = Cli::parse();
    let exit_code = output::report(commands::run(cli.command));

    ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_replace_defaults() {
        let cli = Cli::try_parse_from(["renamer", "replace", "old", "new"]).unwrap();
        match cli.command {
            Commands::Replace(args) => {
                assert_eq!(args.search, "old");
                assert_eq!(args.replace, "new");
                assert_eq!(args.tree.dir, std::path::PathBuf::from("."));
                assert!(!args.tree.dry_run);
                assert_eq!(args.tree.skip, ".git,.idea,node_modules");
            }
            _ => panic!("expected replace command"),
        }
    }

    #[test]
    fn parses_replace_hyphen_values() {
        let cli = Cli::try_parse_from(["renamer", "replace", "-", "_", "--dry-run"]).unwrap();
        match cli.command {
            Commands::Replace(args) => {
                assert_eq!(args.search, "-");
                assert_eq!(args.replace, "_");
                assert!(args.tree.dry_run);
            }
            _ => panic!("expected replace command"),
        }
    }

    #[test]
    fn parses_iterate_flags() {
        let cli = Cli::try_parse_from([
            "renamer", "iterate", "--pivot", " - ", "--phrase", "S%j%E%i%", "--pad", "3",
            "--dir", "/tmp/shows", "--skip", "extras",
        ])
        .unwrap();
        match cli.command {
            Commands::Iterate(args) => {
                assert_eq!(args.pivot, " - ");
                assert_eq!(args.phrase, "S%j%E%i%");
                assert_eq!(args.pad, 3);
                assert_eq!(args.tree.dir, std::path::PathBuf::from("/tmp/shows"));
                assert_eq!(args.tree.skip, "extras");
            }
            _ => panic!("expected iterate command"),
        }
    }

    #[test]
    fn iterate_pad_defaults_to_2() {
        let cli =
            Cli::try_parse_from(["renamer", "iterate", "--pivot", "-", "--phrase", "e%i%"]).unwrap();
        match cli.command {
            Commands::Iterate(args) => assert_eq!(args.pad, 2),
            _ => panic!("expected iterate command"),
        }
    }

    #[test]
    fn iterate_rejects_oversized_pad() {
        let result = Cli::try_parse_from([
            "renamer", "iterate", "--pivot", "-", "--phrase", "e%i%", "--pad", "4000000000",
        ]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from([
            "renamer", "iterate", "--pivot", "-", "--phrase", "e%i%", "--pad", "32",
        ])
        .unwrap();
        match cli.command {
            Commands::Iterate(args) => assert_eq!(args.pad, 32),
            _ => panic!("expected iterate command"),
        }
    }

    #[test]
    fn iterate_requires_pivot_and_phrase() {
        assert!(Cli::try_parse_from(["renamer", "iterate", "--phrase", "e%i%"]).is_err());
        assert!(Cli::try_parse_from(["renamer", "iterate", "--pivot", "-"]).is_err());
    }

    #[test]
    fn rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["renamer", "shuffle"]).is_err());
    }

    #[test]
    fn exit_code_clamps() {
        assert_eq!(exit_code_to_u8(-1), 0);
        assert_eq!(exit_code_to_u8(2), 2);
        assert_eq!(exit_code_to_u8(300), 255);
    }
}
