use clap::Parser;
use std::path::Path;

use wireflow_rust::{ai_provider, analyzer, cli, config, error, generator, layout, scanner, synthesizer};

use ai_provider::AiProvider;
use analyzer::{HeuristicAnalyzer, ImageAnalyzer, VisionAnalyzer};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use generator::GeneratorKind;
use layout::LayoutModel;
use synthesizer::CodeSynthesizer;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ログ初期化（--verbose でdebugまで出力）
    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("RUST_LOG", default_level))
        .init();

    let config = Config::load()?;

    match cli.command {
        Commands::Generate {
            input,
            output,
            vision,
            fallback_only,
        } => {
            if input.is_dir() {
                generate_folder(
                    &input,
                    output.as_deref(),
                    vision,
                    fallback_only,
                    cli.ai_provider,
                    &config,
                )
                .await?;
            } else {
                generate_single(
                    &input,
                    output.as_deref(),
                    vision,
                    fallback_only,
                    cli.ai_provider,
                    &config,
                )
                .await?;
            }
        }

        Commands::Analyze {
            input,
            output,
            vision,
        } => {
            println!("🔍 wireflow - レイアウト解析\n");

            // 1. 画像読み込み
            println!("[1/2] 画像を読み込み中...");
            let bytes = read_image_file(&input)?;
            println!("✔ {} ({} bytes)\n", input.display(), bytes.len());

            // 2. レイアウト解析
            println!(
                "[2/2] レイアウトを解析中...{}",
                if vision { " (ビジョンモデル)" } else { "" }
            );
            let model = analyze_image(&bytes, vision, &config).await?;
            println!("✔ 要素 {}件を検出\n", model.elements.len());

            let json = serde_json::to_string_pretty(&model)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("✅ レイアウトを保存: {}", path.display());
                }
                None => println!("{}", json),
            }
        }

        Commands::Config { set_api_key, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if show {
                println!("設定:");
                println!("  APIベースURL: {}", config.api_base_url);
                println!("  モデル: {}", config.model);
                println!("  最大出力トークン: {}", config.max_output_tokens);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!(
                    "  APIキー: {}",
                    if config.api_key.is_some() {
                        "設定済み"
                    } else {
                        "未設定"
                    }
                );
            }
        }
    }

    Ok(())
}

/// 単一画像からマークアップを生成
async fn generate_single(
    input: &Path,
    output: Option<&Path>,
    vision: bool,
    fallback_only: bool,
    provider: AiProvider,
    config: &Config,
) -> Result<()> {
    println!("🎨 wireflow - マークアップ生成\n");

    // 1. 画像読み込み
    println!("[1/3] 画像を読み込み中...");
    let bytes = read_image_file(input)?;
    println!("✔ {} ({} bytes)\n", input.display(), bytes.len());

    // 2. レイアウト解析
    println!(
        "[2/3] レイアウトを解析中...{}",
        if vision { " (ビジョンモデル)" } else { "" }
    );
    let model = analyze_image(&bytes, vision, config).await?;
    println!("✔ 要素 {}件を検出\n", model.elements.len());

    // 3. マークアップ合成
    println!(
        "[3/3] マークアップを合成中...{}",
        if fallback_only { " (フォールバックのみ)" } else { "" }
    );
    let synthesizer = build_synthesizer(config, provider, fallback_only)?;
    let markup = synthesizer.synthesize(&model).await;
    println!("✔ 合成完了\n");

    match output {
        Some(path) => {
            std::fs::write(path, &markup)?;
            println!("✅ マークアップを保存: {}", path.display());
        }
        None => println!("{}", markup),
    }

    Ok(())
}

/// フォルダ内の全画像からマークアップを一括生成
async fn generate_folder(
    folder: &Path,
    output_dir: Option<&Path>,
    vision: bool,
    fallback_only: bool,
    provider: AiProvider,
    config: &Config,
) -> Result<()> {
    println!("🎨 wireflow - マークアップ一括生成\n");

    // 1. 画像スキャン
    println!("[1/2] 画像をスキャン中...");
    let images = scanner::scan_folder(folder)?;
    println!("✔ {}枚の画像を検出\n", images.len());

    if images.is_empty() {
        return Err(error::WireflowError::NoImagesFound(
            folder.display().to_string(),
        ));
    }

    // 2. 画像ごとに生成
    println!("[2/2] マークアップを生成中...");
    let synthesizer = build_synthesizer(config, provider, fallback_only)?;
    let out_dir = output_dir.unwrap_or(folder);
    std::fs::create_dir_all(out_dir)?;

    let total = images.len();
    for (i, image) in images.iter().enumerate() {
        println!("  [{}/{}] {}", i + 1, total, image.file_name);

        let bytes = std::fs::read(&image.path)?;
        let model = analyze_image(&bytes, vision, config).await?;
        let markup = synthesizer.synthesize(&model).await;

        let stem = image
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "output".to_string());
        let out_path = out_dir.join(format!("{}.jsx", stem));
        std::fs::write(&out_path, &markup)?;
    }

    println!("\n✅ {}件のマークアップを生成しました", total);
    Ok(())
}

/// 画像ファイルを読み込む
fn read_image_file(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(error::WireflowError::FileNotFound(
            path.display().to_string(),
        ));
    }
    Ok(std::fs::read(path)?)
}

/// 画像を解析してレイアウトモデルを得る
async fn analyze_image(bytes: &[u8], vision: bool, config: &Config) -> Result<LayoutModel> {
    if vision {
        VisionAnalyzer::new(config)?.analyze(bytes).await
    } else {
        HeuristicAnalyzer::new().analyze(bytes).await
    }
}

/// コマンドライン指定から合成器を構築する
fn build_synthesizer(
    config: &Config,
    provider: AiProvider,
    fallback_only: bool,
) -> Result<CodeSynthesizer<GeneratorKind>> {
    let generator = if fallback_only {
        None
    } else {
        Some(generator::create_generator(provider, config)?)
    };

    Ok(CodeSynthesizer::new(generator).with_max_output_tokens(config.max_output_tokens))
}
