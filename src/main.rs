use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use converto::config::{self, Config};
use converto::{app, AnyUnit, Dimension};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "converto")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "물리량 단위 변환기")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// 설정 파일 경로
    #[arg(short, long, global = true, value_name = "FILE", default_value = config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// 값을 다른 단위로 변환한다
    Convert {
        /// 변환할 값
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// 입력 단위 (기호 또는 이름, 예: mi, degF, miles)
        from: AnyUnit,

        /// 변환 단위. 생략하면 설정의 선호 단위
        #[arg(short, long)]
        to: Option<AnyUnit>,
    },
    /// 차원별 단위 목록을 표시한다
    Units {
        /// 차원 이름 (예: length, fuel-efficiency). 생략하면 전체
        dimension: Option<Dimension>,
    },
    /// 지원하는 차원을 표시한다
    Dimensions,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 요청된 명령을 실행한다.
fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(err) = try_run(cli) {
        eprintln!("오류: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn try_run(cli: Cli) -> Result<(), app::AppError> {
    match cli.command {
        Commands::Convert { value, from, to } => {
            let cfg = Config::load_or_default(&cli.config)?;
            let result = app::convert(&cfg, value, from, to)?;
            println!("{result}");
        }
        Commands::Units { dimension } => {
            let dimensions = match dimension {
                Some(d) => vec![d],
                None => Dimension::ALL.to_vec(),
            };
            for d in dimensions {
                println!("{d}:");
                for line in app::unit_lines(d) {
                    println!("  {line}");
                }
            }
        }
        Commands::Dimensions => {
            for line in app::dimension_lines() {
                println!("{line}");
            }
        }
    }
    Ok(())
}
