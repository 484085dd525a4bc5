//! zawgyi-converter 命令行入口

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use zawgyi_converter::{convert, rules_for, ConfigManager, Direction, RenameConfig, Renamer};

#[derive(Parser, Debug)]
#[command(name = "zawgyi-converter", version, about = "Convert Burmese text and file names between Zawgyi and Unicode")]
struct Cli {
    /// 输出调试日志
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 转换文本（未给出文本时读取标准输入）
    Text {
        #[command(flatten)]
        target: TargetArgs,
        text: Option<String>,
    },
    /// 重命名文件，只转换文件名
    Rename {
        #[command(flatten)]
        target: TargetArgs,
        #[command(flatten)]
        output: OutputArgs,
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// 重命名目录下的条目及目录本身
    Folder {
        #[command(flatten)]
        target: TargetArgs,
        #[command(flatten)]
        output: OutputArgs,
        #[arg(short, long)]
        recursive: bool,
        path: PathBuf,
    },
    /// 以 JSON 输出有序规则表
    Rules {
        #[command(flatten)]
        target: TargetArgs,
    },
}

#[derive(Args, Debug)]
struct TargetArgs {
    /// 目标编码：unicode | zawgyi
    #[arg(long = "to", default_value = "unicode")]
    direction: Direction,
}

#[derive(Args, Debug)]
struct OutputArgs {
    #[arg(long)]
    dry_run: bool,
    #[arg(long)]
    json: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn rename_config(direction: Direction, output: &OutputArgs, recursive: bool, verbose: bool) -> RenameConfig {
    ConfigManager::custom()
        .direction(direction)
        .dry_run(output.dry_run)
        .recursive(recursive)
        .verbose(verbose)
        .build()
}

fn print_result<T: Serialize>(value: &T, json: bool, message: &str) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value).context("serialize result")?);
    } else {
        println!("{}", message);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let all_ok = match cli.command {
        Command::Text { target, text } => {
            let input = match text {
                Some(text) => text,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("read text from stdin")?;
                    buf
                }
            };
            print!("{}", convert(&input, target.direction));
            true
        }
        Command::Rename { target, output, paths } => {
            let config = rename_config(target.direction, &output, false, cli.verbose);
            let mut all_ok = true;
            for path in &paths {
                let result = Renamer::rename_file(path, &config).await;
                all_ok &= result.is_success;
                print_result(&result, output.json, &result.message)?;
            }
            all_ok
        }
        Command::Folder { target, output, recursive, path } => {
            let config = rename_config(target.direction, &output, recursive, cli.verbose);
            let result = Renamer::rename_folder_and_contents(&path, &config).await;
            if !output.json {
                for entry in &result.entries {
                    println!("{}", entry.message);
                }
            }
            print_result(&result, output.json, &result.message)?;
            result.is_success
        }
        Command::Rules { target } => {
            let rules = rules_for(target.direction);
            println!("{}", serde_json::to_string_pretty(rules).context("serialize rule table")?);
            true
        }
    };

    if !all_ok {
        std::process::exit(1);
    }
    Ok(())
}
