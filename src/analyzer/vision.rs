//! ビジョンモデル解析
//!
//! 画像をData URLとしてビジョン対応モデルに送り、
//! レイアウトJSONを受け取ってモデル化する。
//! 画像メタデータはモデルの申告ではなくローカルのデコード結果を使う

use base64::engine::general_purpose;
use base64::Engine;
use log::debug;

use super::{decode_image, ImageAnalyzer};
use crate::config::Config;
use crate::error::Result;
use crate::generator::OpenAiGenerator;
use crate::layout::LayoutModel;
use crate::normalizer::normalize_model;
use crate::parser::parse_layout_response;
use crate::prompts::{build_layout_prompt, LAYOUT_SYSTEM};

#[derive(Debug, Clone)]
pub struct VisionAnalyzer {
    generator: OpenAiGenerator,
    max_output_tokens: u32,
}

impl VisionAnalyzer {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            generator: OpenAiGenerator::new(config)?,
            max_output_tokens: config.max_output_tokens,
        })
    }
}

impl ImageAnalyzer for VisionAnalyzer {
    async fn analyze(&self, bytes: &[u8]) -> Result<LayoutModel> {
        let image_info = decode_image(bytes)?;
        let prompt = build_layout_prompt(&image_info);
        let data_url = to_data_url(bytes, &image_info.format);

        debug!("レイアウト解析プロンプト長: {} chars", prompt.len());
        let response = self
            .generator
            .complete_with_image(LAYOUT_SYSTEM, &prompt, &data_url, self.max_output_tokens)
            .await?;
        debug!("レイアウト解析レスポンス長: {} chars", response.len());

        let mut model = parse_layout_response(&response)?;
        // メタデータはローカルのデコード結果を正とする
        model.image_info = image_info;
        normalize_model(&mut model);
        model.validate()?;

        Ok(model)
    }
}

/// 画像バイト列をData URLに変換
fn to_data_url(bytes: &[u8], format: &str) -> String {
    let mime = match format {
        "PNG" => "image/png",
        "JPEG" => "image/jpeg",
        "GIF" => "image/gif",
        "BMP" => "image/bmp",
        "WEBP" => "image/webp",
        _ => "application/octet-stream",
    };
    format!(
        "data:{};base64,{}",
        mime,
        general_purpose::STANDARD.encode(bytes)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // to_data_url テスト
    // =============================================

    #[test]
    fn test_to_data_url_png() {
        let url = to_data_url(b"abc", "PNG");
        assert_eq!(url, "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_to_data_url_jpeg() {
        let url = to_data_url(b"abc", "JPEG");
        assert!(url.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_to_data_url_unknown_format() {
        let url = to_data_url(b"abc", "OTHER");
        assert!(url.starts_with("data:application/octet-stream;base64,"));
    }
}
