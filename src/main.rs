//! langmatch - 트라이그램 기반 언어 판별기

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use langmatch::config::{load_config, LangConfig};
use langmatch::corpus::{discover_corpora, make_profiles, read_text};
use langmatch::evaluation::evaluate_dir;
use langmatch::ngram::{LanguageMatcher, Result};

#[derive(Parser, Debug)]
#[command(name = "langmatch", version, about = "Character-trigram language identifier")]
struct Cli {
    /// JSON 설정 파일
    #[arg(long, global = true, default_value = "langmatch.json")]
    config: PathBuf,

    /// 프로필 디렉토리 (설정값보다 우선)
    #[arg(long, global = true)]
    profiles: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 학습 말뭉치에서 언어 프로필 생성
    Build {
        /// 학습 말뭉치 디렉토리
        #[arg(long)]
        training: Option<PathBuf>,
        /// 프로필 트라이그램 수 (0이면 무제한)
        #[arg(long)]
        size: Option<usize>,
    },
    /// 파일의 언어 판별
    Recognize {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// 입력 파일 인코딩
        #[arg(short, long)]
        encoding: Option<String>,
        /// 출력할 후보 수
        #[arg(short = 'n', long = "top")]
        top: Option<usize>,
        /// 질의 트라이그램 상한 (0이면 무제한)
        #[arg(long)]
        cap: Option<usize>,
        /// JSON으로 출력
        #[arg(long)]
        json: bool,
    },
    /// 테스트 디렉토리 평가
    Evaluate {
        #[arg(required = true)]
        dirs: Vec<PathBuf>,
        #[arg(short, long)]
        encoding: Option<String>,
        /// JSON으로 출력
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut config = load_config(&cli.config);
    if let Some(dir) = cli.profiles {
        config.profile_dir = dir;
    }

    match run(cli.command, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, config: LangConfig) -> Result<()> {
    match command {
        Command::Build { training, size } => {
            let training = training.unwrap_or_else(|| config.training_dir.clone());
            let size = size.unwrap_or(config.profile_size);
            build_profiles(&config, &training, size)?;
        }
        Command::Recognize {
            files,
            encoding,
            top,
            cap,
            json,
        } => {
            // 프로필이 아직 없으면 먼저 생성
            if !config.profile_dir.exists() {
                log::warn!(
                    "프로필 디렉토리 없음, 생성: {}",
                    config.profile_dir.display()
                );
                build_profiles(&config, &config.training_dir, config.profile_size)?;
            }

            let matcher = LanguageMatcher::new(&config.profile_dir)?;
            let encoding = encoding.unwrap_or_else(|| config.encoding.clone());
            let n = top.unwrap_or(config.top_n);
            let cap = cap.unwrap_or(config.query_cap);

            for file in files {
                let text = read_text(&file, &encoding)?;
                let matches = matcher.score(&text, n, cap)?;
                if json {
                    let value = serde_json::json!({ "file": file, "matches": matches });
                    println!("{}", serde_json::to_string(&value)?);
                    continue;
                }
                // 후보가 여러 개면 파일별로 구분해서 출력
                if n > 1 {
                    println!("{}:", file.display());
                }
                for m in matches {
                    println!("Language: {}, cosine similarity: {}", m.language, m.similarity);
                }
            }
        }
        Command::Evaluate {
            dirs,
            encoding,
            json,
        } => {
            let matcher = LanguageMatcher::new(&config.profile_dir)?;
            let encoding = encoding.unwrap_or_else(|| config.encoding.clone());

            for dir in dirs {
                let report =
                    evaluate_dir(&matcher, &dir, &config.test_labels, &encoding, config.query_cap)?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                    continue;
                }
                for row in &report.rows {
                    if row.is_correct() {
                        println!("{} {}", row.file, row.guessed);
                    } else {
                        println!("{} {} Error {}", row.file, row.guessed, row.expected);
                    }
                }
                println!(
                    "{} correct: {} incorrect: {}",
                    dir.display(),
                    report.correct(),
                    report.incorrect()
                );
            }
        }
    }
    Ok(())
}

fn build_profiles(config: &LangConfig, training: &Path, size: usize) -> Result<()> {
    let corpora = discover_corpora(training, &config.corpora)?;
    let written = make_profiles(&corpora, &config.profile_dir, size)?;
    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}
