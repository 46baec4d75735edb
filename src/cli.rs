// src/cli.rs
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{bail, Result, WrapErr};

use crate::combine::combine_csv_files;
use crate::config::consts::{CONFIG_FILE, DEFAULT_OUT_DIR};
use crate::config::leagues::catalog;
use crate::config::{AppOptions, CleaningPolicy, ExportFormat};
use crate::model::SeasonTag;
use crate::progress::Progress;
use crate::runner::{self, DirPageSource};

#[derive(Parser)]
#[command(name = "sofifa_scrape", version, about = "Scrape SoFIFA player tables into CSV/JSON")]
pub struct Cli {
    /// Options file. Missing file means defaults.
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse saved listing pages and export one file per league.
    Scrape(ScrapeArgs),
    /// Merge every CSV in a directory into one file.
    Combine {
        #[arg(long, default_value = DEFAULT_OUT_DIR)]
        dir: PathBuf,
        /// Output file name (".csv" added if missing). Defaults to a timestamped name.
        #[arg(long)]
        name: Option<String>,
    },
    /// Print the league catalog as `id,country,name`.
    Leagues,
}

#[derive(Args)]
pub struct ScrapeArgs {
    /// One league id.
    #[arg(long, conflicts_with = "all", required_unless_present = "all")]
    pub league: Option<u32>,
    /// Every league in the catalog.
    #[arg(long)]
    pub all: bool,
    /// Directory of saved pages, laid out as `<league_id>/<offset>.html`.
    #[arg(long)]
    pub pages: PathBuf,
    /// Tag records with a season year (needs --version).
    #[arg(long, requires = "version")]
    pub season: Option<u16>,
    /// Version label for --season, e.g. "FIFA 23".
    #[arg(long, requires = "season")]
    pub version: Option<String>,
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    /// Keep raw cell text instead of typed values.
    #[arg(long)]
    pub deferred: bool,
    /// Readable column names ("Overall Score") instead of field codes ("oa").
    #[arg(long, overrides_with = "codes")]
    pub rename: bool,
    /// Keep field codes as column names.
    #[arg(long)]
    pub codes: bool,
    /// Stop each league after this many pages.
    #[arg(long)]
    pub max_pages: Option<u32>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Csv,
    Json,
    Both,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Both => ExportFormat::Both,
        }
    }
}

/// Prints one line per page to stderr.
struct StderrProgress;

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        eprintln!("Scraping {total} league(s)");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn page_done(&mut self, league_id: u32, offset: u32, records: usize) {
        eprintln!("  league {league_id} offset {offset}: {records} players");
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Scrape(args) => scrape(&cli.config, args),
        Command::Combine { dir, name } => {
            let summary = combine_csv_files(&dir, name.as_deref())
                .wrap_err_with(|| format!("combining CSV files in {}", dir.display()))?;
            match summary.output {
                Some(out) => println!("{} ({} rows)", out.display(), summary.rows),
                None => bail!("no CSV files to combine in {}", dir.display()),
            }
            if let Some(dedup) = summary.dedup_output {
                println!("{} ({} duplicates removed)", dedup.display(), summary.duplicates_removed);
            }
            Ok(())
        }
        Command::Leagues => {
            for l in catalog().iter() {
                println!("{},{},{}", l.id, l.country, l.name);
            }
            Ok(())
        }
    }
}

fn scrape(config: &Path, args: ScrapeArgs) -> Result<()> {
    let mut options = AppOptions::load(config)
        .wrap_err_with(|| format!("loading {}", config.display()))?;
    apply_args(&mut options, &args);

    let cat = catalog();
    let ids: Vec<u32> = match args.league {
        Some(id) if !cat.contains(id) => bail!("unknown league id {id} (see `leagues`)"),
        Some(id) => vec![id],
        None => cat.ids().collect(),
    };

    let mut source = DirPageSource::new(&args.pages);
    let mut progress = StderrProgress;
    let summary = runner::run(&mut source, &ids, cat, &options, Some(&mut progress));

    for f in &summary.files_written {
        println!("{}", f.display());
    }
    logf!(
        "{} leagues done, {} failed, {} players",
        summary.leagues_done, summary.leagues_failed, summary.records
    );
    if summary.leagues_failed > 0 && summary.leagues_done == 0 {
        bail!("every league failed; see log");
    }
    Ok(())
}

fn apply_args(options: &mut AppOptions, args: &ScrapeArgs) {
    if args.deferred {
        options.scrape.cleaning = CleaningPolicy::Deferred;
    }
    if let Some(n) = args.max_pages {
        options.scrape.max_pages = Some(n);
    }
    if let (Some(year), Some(version)) = (args.season, &args.version) {
        options.scrape.season = Some(SeasonTag { year, version: version.clone() });
    }
    if let Some(f) = args.format {
        options.export.format = f.into();
    }
    if let Some(out) = &args.out {
        options.export.out_dir = out.clone();
    }
    if args.rename {
        options.export.rename_columns = true;
    } else if args.codes {
        options.export.rename_columns = false;
    }
}
