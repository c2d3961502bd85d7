use clap::{CommandFactory, Parser};
use colored::Colorize;
use excel_compare::cli::{self, OutputFormat};
use excel_compare::types::{CompareConfig, DEFAULT_COLOR, DEFAULT_SHEET};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const EXAMPLES: &str = "EXAMPLES:
  Different file combinations to compare:
    excel-compare -a a.xlsx -b b.xlsx --sheet Sheet1
    excel-compare -a a.xlsx -b b.xlsx -a a2.xlsx -b b2.xlsx
    excel-compare -a 'folder_a/*.xlsx' -b 'folder_b/*.xlsx'

  See the diff in the console:
    excel-compare -a a.xlsx -b b.xlsx --print-diff

  Modify the color of cells where changes occurred in the B group:
    excel-compare -a a.xlsx -b b.xlsx --color-sheet
    excel-compare -a a.xlsx -b b.xlsx --color-sheet --color FFE0E0";

#[derive(Parser)]
#[command(name = "excel-compare")]
#[command(about = "Compare spreadsheet files cell by cell")]
#[command(long_about = "Compare spreadsheet files cell by cell.

Files given with -a are paired by position with files given with -b and the
same sheet of each pair is compared. Cells are compared as text: '1' and
'1.0' differ, so do 'abc' and 'ABC'.

Both sheets must cover the same range of cells, and every row must hold the
same number of cells on both sides; otherwise the run stops with an error.")]
#[command(after_help = EXAMPLES)]
#[command(version)]
struct Cli {
    /// Left input files (paths or glob patterns, repeatable)
    #[arg(short = 'a', long = "files-a", value_name = "FILE", num_args = 1..)]
    files_a: Vec<String>,

    /// Right input files (paths or glob patterns, repeatable)
    #[arg(short = 'b', long = "files-b", value_name = "FILE", num_args = 1..)]
    files_b: Vec<String>,

    /// Sheet to compare
    #[arg(long, default_value = DEFAULT_SHEET, env = "EXCEL_COMPARE_SHEET")]
    sheet: String,

    /// Print the differences
    #[arg(long)]
    print_diff: bool,

    /// Change the color of cells where changes occurred in the B group (saved to a new file)
    #[arg(long)]
    color_sheet: bool,

    /// Color to use for coloring the differences in the sheet (RRGGBB)
    #[arg(long, default_value = DEFAULT_COLOR, env = "EXCEL_COMPARE_COLOR")]
    color: String,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Show debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "excel_compare=debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = CompareConfig::default()
        .with_sheet(cli.sheet)
        .with_print_diff(cli.print_diff)
        .with_color_sheet(cli.color_sheet)
        .with_color(cli.color);

    match cli::compare(cli.files_a, cli.files_b, &config, cli.format) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            eprintln!();
            eprintln!("{}", Cli::command().render_help());
            ExitCode::FAILURE
        }
    }
}
