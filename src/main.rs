use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use smart_size::{cli, config, controller, error, photo, prompt};
use smart_size_common::{submit_label, Category, ResultLines, SubmissionState};
use cli::{Cli, Commands};
use config::Config;
use controller::{SubmitOutcome, UploadController};
use error::Result;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Analyze { image, height, category, brand, consent, interactive, output, json } => {
            // バックエンドURLは起動時に一度だけ決定する
            let config = Config::load()?;
            let backend_url = config.resolve_backend_url(cli.backend_url.as_deref())?;

            if !json {
                println!("👕 Smart Size - サイズ推薦\n");
            }

            // 1. 画像読み込み
            let selected = photo::load_image(&image)?;
            if !json {
                match selected.preview() {
                    Some(p) => println!("✔ {} ({}x{}, {} bytes)", selected.file_name, p.width, p.height, selected.len()),
                    None => println!("✔ {} ({} bytes)", selected.file_name, selected.len()),
                }
            }

            // 2. フォーム入力
            let given = prompt::GivenInputs { height, category, brand, consent };
            let inputs = if interactive {
                prompt::prompt_inputs(given)?
            } else {
                given.into_inputs()
            };

            let controller = UploadController::with_backend_url(&backend_url);
            controller.select_image(selected);
            controller.set_height(inputs.height);
            controller.set_category(inputs.category);
            controller.set_brand(inputs.brand);
            controller.set_consent(inputs.consent);

            // 3. 送信
            let spinner = ProgressBar::new_spinner();
            if !json {
                spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()));
                spinner.set_message(format!("{} ({})", submit_label(&SubmissionState::Loading), backend_url));
                spinner.enable_steady_tick(Duration::from_millis(100));
            }
            let outcome = controller.submit().await;
            spinner.finish_and_clear();

            match outcome {
                SubmitOutcome::Settled(SubmissionState::Succeeded(result)) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&result)?);
                    } else {
                        println!();
                        for line in ResultLines::new(&result).to_vec() {
                            println!("  {}", line);
                        }
                    }

                    if let Some(output) = output {
                        std::fs::write(&output, serde_json::to_string_pretty(&result)?)?;
                        if !json {
                            println!("\n✔ 結果を保存: {}", output.display());
                        }
                    }
                }
                SubmitOutcome::Settled(state) => {
                    eprintln!("✗ {}", state.error().unwrap_or("Request failed"));
                    std::process::exit(1);
                }
                SubmitOutcome::Rejected(reason) => {
                    eprintln!("✗ {}", reason);
                    std::process::exit(1);
                }
            }
        }

        Commands::Categories => {
            for category in Category::ALL {
                println!("  {:<8} {}", category.key(), category.label());
            }
        }

        Commands::Config { set_backend_url, show } => {
            // 壊れた設定ファイルも --set-backend-url で上書きできるようにする
            let mut config = Config::load_or_default();

            if let Some(url) = set_backend_url {
                config.set_backend_url(&url)?;
                println!("✔ バックエンドURLを設定しました");
            }

            if show {
                println!("設定:");
                println!("  設定ファイル: {}", Config::config_path()?.display());
                println!("  バックエンドURL: {}", config.resolve_backend_url(cli.backend_url.as_deref())?);
                println!("  保存済みURL: {}", config.backend_url.as_deref().unwrap_or("未設定"));
                println!("  環境変数 {}: {}", config::BACKEND_URL_ENV, if std::env::var(config::BACKEND_URL_ENV).is_ok() { "設定済み" } else { "未設定" });
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("smart_size={level},smart_size_common={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
