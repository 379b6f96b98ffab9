use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::process::ExitCode;
use stree::cli::{self, CliOptions};
use stree::model::TrieBuilder;
use stree::render::write_tree;

fn main() -> ExitCode {
    let options = match cli::parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("stree: {err}");
            eprint!("{}", cli::USAGE);
            return ExitCode::FAILURE;
        }
    };

    if options.show_help {
        eprint!("{}", cli::USAGE);
        return ExitCode::FAILURE;
    }

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("stree: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(options: &CliOptions) -> io::Result<()> {
    let mut builder = TrieBuilder::new();
    if options.files.is_empty() {
        builder.ingest_lines(io::stdin().lock())?;
    } else {
        for path in &options.files {
            let file = File::open(path)
                .map_err(|err| io::Error::new(err.kind(), format!("{}: {err}", path.display())))?;
            builder.ingest_lines(BufReader::new(file))?;
        }
    }
    let root = builder.finish();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_tree(&mut out, &root, &options.config)?;
    out.flush()
}
