//! 画像解析モジュール
//!
//! ワイヤーフレーム画像からレイアウトモデルを構築する:
//! - HeuristicAnalyzer: 画像サイズからの定型スキャフォールド（デフォルト）
//! - VisionAnalyzer: ビジョン対応モデルによる解析

mod heuristic;
mod vision;

pub use heuristic::HeuristicAnalyzer;
pub use vision::VisionAnalyzer;

use image::{ColorType, ImageFormat};

use crate::error::{Result, WireflowError};
use crate::layout::{ImageInfo, LayoutModel};

/// 画像解析器の共通インターフェース
pub trait ImageAnalyzer {
    /// 画像バイト列を解析してレイアウトモデルを返す
    fn analyze(
        &self,
        bytes: &[u8],
    ) -> impl std::future::Future<Output = Result<LayoutModel>> + Send;
}

/// メディアタイプの事前チェック
///
/// バイト列を読む前に `image/*` 以外を弾くための判定
pub fn is_supported_media_type(media_type: &str) -> bool {
    media_type.trim().to_ascii_lowercase().starts_with("image/")
}

/// 画像バイト列をデコードしてメタデータを取り出す
///
/// 画像として読めないバイト列は UnsupportedMedia
fn decode_image(bytes: &[u8]) -> Result<ImageInfo> {
    let format =
        image::guess_format(bytes).map_err(|e| WireflowError::UnsupportedMedia(e.to_string()))?;
    let decoded =
        image::load_from_memory(bytes).map_err(|e| WireflowError::UnsupportedMedia(e.to_string()))?;

    Ok(ImageInfo {
        width: decoded.width(),
        height: decoded.height(),
        format: format_name(format).to_string(),
        color_mode: color_mode_name(decoded.color()).to_string(),
    })
}

fn format_name(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Png => "PNG",
        ImageFormat::Jpeg => "JPEG",
        ImageFormat::Gif => "GIF",
        ImageFormat::Bmp => "BMP",
        ImageFormat::WebP => "WEBP",
        ImageFormat::Tiff => "TIFF",
        _ => "OTHER",
    }
}

fn color_mode_name(color: ColorType) -> &'static str {
    match color {
        ColorType::L8 | ColorType::L16 => "L",
        ColorType::La8 | ColorType::La16 => "LA",
        ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Rgb32F => "RGB",
        ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F => "RGBA",
        _ => "RGB",
    }
}
