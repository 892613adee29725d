use std::{io::Write, path::PathBuf, process::ExitCode};

use clap::{Parser, ValueEnum};
use podnet::{
    error::{Error, ErrorResult},
    status::network_info,
    types::NetworkInfo,
};
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Show the address and MAC address of a container's primary network interface
#[derive(Parser)]
#[clap(name = "podnet", author, version, about)]
struct Cli {
    /// Container runtime directory holding network.status
    #[clap(env = "PODNET_DIR")]
    dir: PathBuf,

    /// Output format
    #[clap(short, long, value_enum, default_value_t = Output::Text)]
    output: Output,

    /// Enable verbose output
    #[clap(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Output {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    match network_info(&cli.dir) {
        Ok(info) => {
            let printed = print_info(&mut std::io::stdout().lock(), &info, cli.output);
            match printed {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => fail(&e, cli.output),
            }
        }
        Err(e) => fail(&e, cli.output),
    }
}

fn print_info<W: Write>(out: &mut W, info: &NetworkInfo, output: Output) -> Result<(), Error> {
    let res = match output {
        Output::Text if info.is_empty() => writeln!(out, "network not configured"),
        Output::Text => writeln!(out, "ip: {}\nmac: {}", info.ip, info.mac),
        Output::Json => {
            serde_json::to_writer(&mut *out, info).map_err(|e| Error::IOFailure(e.to_string()))?;
            writeln!(out)
        }
    };
    res.map_err(|e| Error::IOFailure(e.to_string()))
}

fn fail(e: &Error, output: Output) -> ExitCode {
    debug!(details = %e.details(), "lookup failed: {e}");
    let res = ErrorResult::from(e);
    match output {
        Output::Text => eprintln!("{}: {}", res.msg, res.details),
        Output::Json => match serde_json::to_string(&res) {
            Ok(out) => println!("{out}"),
            Err(_) => eprintln!("{}: {}", res.msg, res.details),
        },
    }
    ExitCode::from(u8::try_from(res.code).unwrap_or(1))
}
