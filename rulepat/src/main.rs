//! rulepat 命令行入口
//! 用法：rulepat <ids> <dir> <output>
//!
//! 运行命令：
//! cargo run --features cli -- snort ./rules patterns.txt

use clap::Parser;
use env_logger::{Builder, Env, Target};
use rulepat::{Dialect, ExtractConfigBuilder, RulePatResult, RulePatternExtractor};
use std::path::PathBuf;
use std::process::ExitCode;

const AFTER_HELP: &str = "\
ids supported:
  snort    Snort IDS (also fits Suricata, same rules format)
           searches for files with .rules extension
  clamav   ClamAV
           searches for .ndb files (unpacked from cvd files)";

#[derive(Parser, Debug)]
#[command(name = "rulepat")]
#[command(about = "Extract literal patterns from IDS/AV rule files", long_about = None)]
#[command(version, after_help = AFTER_HELP)]
struct Args {
    /// The ids/ips that specifies the rule format (snort, suricata, clamav)
    ids: String,

    /// Directory to search the rules files in
    dir: PathBuf,

    /// File to write the extracted patterns to
    output: PathBuf,

    /// Follow symbolic links while walking the rules directory
    #[arg(long)]
    follow_links: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn run(args: Args) -> RulePatResult<()> {
    // 方言非法时在任何扫描之前失败
    let dialect: Dialect = args.ids.parse()?;
    let config = ExtractConfigBuilder::new(dialect)
        .input_dir(args.dir)
        .output(args.output)
        .follow_links(args.follow_links)
        .build();

    let summary = RulePatternExtractor::new(config).run()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "done. {} rules were parsed to file {}",
            summary.patterns_written,
            summary.output.display()
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    Builder::from_env(Env::default().default_filter_or(default_level))
        .target(Target::Stderr)
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
