use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use std::path::PathBuf;

use crate::error::Error;
use crate::module::{self, ExistsArgs, IsEmptyArgs, Request};

pub fn build_cli() -> Command {
    Command::new("pathfacts")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Filesystem fact queries for configuration management hosts")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("exists")
                .about("Report whether a path resolves to any filesystem entry")
                .arg(
                    Arg::new("path")
                        .short('p')
                        .long("path")
                        .value_name("PATH")
                        .help("Path of the entry to query")
                        .value_parser(value_parser!(PathBuf))
                        .required_unless_present("args-file")
                        .conflicts_with("args-file"),
                )
                .arg(
                    Arg::new("follow")
                        .short('f')
                        .long("follow")
                        .help("Resolve a terminal symlink to its target")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("args-file"),
                )
                .arg(
                    Arg::new("args-file")
                        .short('a')
                        .long("args-file")
                        .value_name("FILE")
                        .help("Read the query arguments from a JSON document")
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("check")
                        .long("check")
                        .help("Accepted for dry-run callers; the query never mutates")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("is-empty")
                .about("Report whether a directory contains zero entries")
                .arg(
                    Arg::new("path")
                        .short('p')
                        .long("path")
                        .value_name("PATH")
                        .help("Path of the directory to query")
                        .value_parser(value_parser!(PathBuf))
                        .required_unless_present("args-file")
                        .conflicts_with("args-file"),
                )
                .arg(
                    Arg::new("ignore-missing")
                        .long("ignore-missing")
                        .value_name("BOOL")
                        .help("Treat a missing directory as empty")
                        .default_value("true")
                        .value_parser(value_parser!(bool))
                        .conflicts_with("args-file"),
                )
                .arg(
                    Arg::new("args-file")
                        .short('a')
                        .long("args-file")
                        .value_name("FILE")
                        .help("Read the query arguments from a JSON document")
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("check")
                        .long("check")
                        .help("Accepted for dry-run callers; the query never mutates")
                        .action(ArgAction::SetTrue),
                ),
        )
}

pub fn parse_args() -> crate::Result<Request> {
    request_from(&build_cli().get_matches())
}

fn request_from(matches: &ArgMatches) -> crate::Result<Request> {
    match matches.subcommand() {
        Some(("exists", sub)) => {
            log_check_mode(sub);
            let args = match sub.get_one::<PathBuf>("args-file") {
                Some(file) => module::args_from_file::<ExistsArgs>(file)?,
                None => ExistsArgs {
                    path: sub.get_one::<PathBuf>("path").cloned().unwrap_or_default(),
                    follow: sub.get_flag("follow"),
                },
            };
            Ok(Request::Exists(args))
        }
        Some(("is-empty", sub)) => {
            log_check_mode(sub);
            let args = match sub.get_one::<PathBuf>("args-file") {
                Some(file) => module::args_from_file::<IsEmptyArgs>(file)?,
                None => IsEmptyArgs {
                    path: sub.get_one::<PathBuf>("path").cloned().unwrap_or_default(),
                    ignore_missing: sub.get_one::<bool>("ignore-missing").copied().unwrap_or(true),
                },
            };
            Ok(Request::IsEmpty(args))
        }
        _ => Err(Error::Args("unknown query".to_string())),
    }
}

fn log_check_mode(sub: &ArgMatches) {
    if sub.get_flag("check") {
        log::debug!("check mode requested; the query is read-only either way");
    }
}
