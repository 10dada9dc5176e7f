// opcheck binary entry
//
// Thin shell around the library: parse flags, collect files, scan, report,
// map the report onto the process exit code.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use opcheck::cli::{Cli, ScanTarget};
use opcheck::report::{render_operator_list, Report};
use opcheck::scanner::Scanner;
use opcheck::walk::{self, ExtensionFilter};
use std::process;

fn main() {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => process::exit(code),
        Err(err) => {
            // Pre-scan validation failures share clap's usage exit code.
            eprintln!("{}", Cli::command().render_usage());
            eprintln!("error: {}", err);
            process::exit(2);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    if cli.list_operators {
        print!("{}", render_operator_list(cli.version));
        return Ok(0);
    }

    let target = cli.target()?;
    let selection = match &target {
        ScanTarget::File(path) => walk::single_file(path),
        ScanTarget::Directory(dir) => {
            let filter = ExtensionFilter::from_args(
                cli.included_extensions.as_deref(),
                cli.excluded_extensions.as_deref(),
            );
            walk::collect_directory(dir, &filter)
        }
    };

    let scanner = Scanner::new(cli.version, cli.show_supported);
    let outcome = scanner.scan(selection);
    let report = Report::build(cli.version, outcome);

    if cli.json {
        println!("{}", report.render_json()?);
    } else {
        print!("{}", report.render(atty::is(atty::Stream::Stdout)));
    }
    Ok(report.exit_code())
}
