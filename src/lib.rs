//! Wireflow
//!
//! ワイヤーフレーム画像からUIマークアップを生成するライブラリ:
//! - analyzer: 画像 → レイアウトモデル（ヒューリスティック / ビジョンモデル）
//! - synthesizer: レイアウトモデル → マークアップ（AI生成 + フォールバック描画）

pub mod ai_provider;
pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod layout;
pub mod normalizer;
pub mod parser;
pub mod prompts;
pub mod scanner;
pub mod synthesizer;

pub use analyzer::{is_supported_media_type, HeuristicAnalyzer, ImageAnalyzer, VisionAnalyzer};
pub use error::{Result, WireflowError};
pub use generator::{create_generator, CliGenerator, GeneratorKind, OpenAiGenerator, TextGenerator};
pub use layout::{Element, ElementType, LayoutKind, LayoutModel};
pub use parser::{extract_code, extract_json, parse_layout_response};
pub use synthesizer::CodeSynthesizer;
