use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgGroup, Parser};
use log::{info, LevelFilter};
use mcflirt_motion::{load_table, MotionReport, MotionSeries};

/// Location of the MCFLIRT parameters inside a FEAT or MELODIC directory
const MCF_PAR_FILE: [&str; 2] = ["mc", "prefiltered_func_data_mcf.par"];

#[derive(Parser, Debug)]
#[command(name = "mcflirt-motion", version)]
#[command(about = "Summarize motion stats from a preprocessed FEAT directory")]
#[command(group(ArgGroup::new("input").required(true).args(["featdir", "par"])))]
struct Cli {
    /// FEAT directory name
    #[arg(short = 'i', long)]
    featdir: Option<PathBuf>,

    /// Read this motion parameter file directly
    #[arg(long)]
    par: Option<PathBuf>,

    /// Report the total rotation angle and axis of every frame
    #[arg(long)]
    rotations: bool,

    /// Compute per-frame rotations on all cores
    #[arg(long, requires = "rotations")]
    parallel: bool,

    /// Print the report as JSON
    #[arg(long, short = 'j')]
    json: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn par_file(&self) -> PathBuf {
        match (&self.par, &self.featdir) {
            (Some(par), _) => par.clone(),
            (None, Some(featdir)) => MCF_PAR_FILE
                .iter()
                .fold(featdir.clone(), |path, part| path.join(part)),
            (None, None) => unreachable!("clap requires --featdir or --par"),
        }
    }

    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("*** {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let par_file = cli.par_file();
    info!("reading motion parameters from {}", par_file.display());

    let report = build_report(&par_file, cli.rotations, cli.parallel)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}

fn build_report(par_file: &Path, rotations: bool, parallel: bool) -> anyhow::Result<MotionReport> {
    let table = load_table(par_file)?;
    let report = MotionReport::new(par_file, &table);
    if !rotations {
        return Ok(report);
    }

    let series = MotionSeries::try_from(&table)
        .map_err(|err| err.with_path(par_file))
        .context("motion parameters need rotation and translation columns")?;
    Ok(report.with_rotations(&series, parallel)?)
}
