use std::io;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;

use dirsim::cli::{build_options, Args};
use dirsim::compare;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let informational = matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            );
            let _ = err.print();
            process::exit(if informational { 0 } else { 1 });
        }
    };

    let opts = match build_options(&args) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("Error: {err:#}");
            process::exit(2);
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(err) = compare::run(&args.dir1, &args.dir2, &opts, &mut stdout) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}
