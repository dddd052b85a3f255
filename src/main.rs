use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use fasoffset::{scan_bytes, scan_reader, IndexError, IndexRecord, MappedFasta};
use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
};

/// Print the byte offsets of every header and sequence block in a FASTA file.
///
/// Each output line is `header_start header_end seq_start seq_end`, all
/// inclusive byte offsets from the start of the file.
#[derive(Parser, Debug)]
#[command(name = "fasoffset", version, about)]
struct Cli {
    /// Input FASTA file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// How the input is read
    #[arg(long, value_enum, default_value_t = Mode::Mmap)]
    mode: Mode,

    /// Output path (default: stdout)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Print only `header_start header_end` per record
    #[arg(long)]
    headers_only: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Read the file line by line
    Stream,
    /// Scan a read-only memory map of the file
    Mmap,
}

fn write_record<W: Write>(out: &mut W, record: &IndexRecord, headers_only: bool) -> io::Result<()> {
    if headers_only {
        writeln!(out, "{} {}", record.header_start, record.header_end)
    } else {
        writeln!(out, "{}", record)
    }
}

/// Scan the input and stream records to `out` as they are found.
fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<usize> {
    let mut count = 0;
    let mut sink = |record: Result<IndexRecord, IndexError>| -> Result<()> {
        write_record(&mut *out, &record?, cli.headers_only).context("Could not write index")?;
        count += 1;
        Ok(())
    };
    match cli.mode {
        Mode::Stream => {
            let file = File::open(&cli.input).map_err(|source| IndexError::SourceUnavailable {
                path: cli.input.clone(),
                source,
            })?;
            for record in scan_reader(BufReader::new(file)) {
                sink(record)?;
            }
        }
        Mode::Mmap => {
            let fasta = MappedFasta::open(&cli.input)?;
            for record in scan_bytes(fasta.as_bytes()) {
                sink(record)?;
            }
        }
    }
    Ok(count)
}

fn open_output(path: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Could not create output file {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            // Usage errors, including a missing INPUT, exit with 1.
            let _ = e.print();
            return ExitCode::from(1);
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
    };

    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();

    log::info!("Indexing {} ({:?} mode)", cli.input.display(), cli.mode);

    let result = open_output(cli.output.as_ref()).and_then(|mut out| {
        let count = run(&cli, &mut out)?;
        out.flush().context("Could not flush index output")?;
        Ok(count)
    });
    match result {
        Ok(count) => {
            log::info!("Wrote {} index records", count);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::from(1)
        }
    }
}
