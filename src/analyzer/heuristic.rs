//! ヒューリスティック解析
//!
//! ビジョンモデルなしで動くデフォルトの解析器。
//! 画像サイズだけを手がかりに定型のスキャフォールドを組み立てる:
//! - 横長画像 → 2カラムグリッド
//! - それ以外 → 縦積み（flex）

use std::collections::BTreeMap;

use super::{decode_image, ImageAnalyzer};
use crate::error::Result;
use crate::layout::{
    Container, Element, ElementType, ImageInfo, LayoutKind, LayoutModel, LayoutStructure, Position,
};

/// スキャフォールドの基準キャンバス
const BASE_WIDTH: f64 = 720.0;
const BASE_HEIGHT: f64 = 400.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicAnalyzer;

impl HeuristicAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl ImageAnalyzer for HeuristicAnalyzer {
    async fn analyze(&self, bytes: &[u8]) -> Result<LayoutModel> {
        let image_info = decode_image(bytes)?;
        let model = build_scaffold(image_info);
        model.validate()?;
        Ok(model)
    }
}

fn build_scaffold(image_info: ImageInfo) -> LayoutModel {
    // 基準キャンバスからの比率で位置を画像サイズに合わせる
    let sx = f64::from(image_info.width) / BASE_WIDTH;
    let sy = f64::from(image_info.height) / BASE_HEIGHT;

    // 横長画像は2カラムグリッド、それ以外は縦積み
    let layout_structure = if image_info.width > image_info.height {
        LayoutStructure {
            kind: LayoutKind::Grid,
            columns: 2,
            gap: "gap-6".into(),
            responsive: true,
        }
    } else {
        LayoutStructure::default()
    };

    let elements = vec![
        Element {
            element_type: ElementType::Header,
            content: "Welcome to Your App".into(),
            position: scaled(50.0, 30.0, 300.0, 40.0, sx, sy),
            style: style_map(&[
                ("font_size", "text-3xl"),
                ("font_weight", "font-bold"),
                ("color", "text-gray-900"),
            ]),
        },
        Element {
            element_type: ElementType::Paragraph,
            content: "This is a sample component generated from your wireframe. \
                      The layout includes responsive grid, typography, and spacing."
                .into(),
            position: scaled(50.0, 90.0, 400.0, 60.0, sx, sy),
            style: style_map(&[
                ("font_size", "text-base"),
                ("color", "text-gray-600"),
                ("line_height", "leading-relaxed"),
            ]),
        },
        Element {
            element_type: ElementType::Button,
            content: "Get Started".into(),
            position: scaled(50.0, 170.0, 120.0, 40.0, sx, sy),
            style: style_map(&[
                ("background", "bg-blue-600"),
                ("text_color", "text-white"),
                ("padding", "px-6 py-2"),
                ("border_radius", "rounded-lg"),
                ("hover", "hover:bg-blue-700"),
            ]),
        },
        Element {
            element_type: ElementType::Button,
            content: "Learn More".into(),
            position: scaled(190.0, 170.0, 120.0, 40.0, sx, sy),
            style: style_map(&[
                ("background", "border border-gray-300"),
                ("text_color", "text-gray-700"),
                ("padding", "px-6 py-2"),
                ("border_radius", "rounded-lg"),
                ("hover", "hover:bg-gray-50"),
            ]),
        },
        Element {
            element_type: ElementType::ImagePlaceholder,
            content: "Placeholder Image".into(),
            position: scaled(500.0, 30.0, 200.0, 200.0, sx, sy),
            style: style_map(&[
                ("background", "bg-gray-100"),
                ("border_radius", "rounded-lg"),
                ("padding", "p-8"),
            ]),
        },
    ];

    LayoutModel {
        image_info,
        elements,
        layout_structure,
        container: Container::default(),
    }
}

fn scaled(x: f64, y: f64, width: f64, height: f64, sx: f64, sy: f64) -> Position {
    Position {
        x: x * sx,
        y: y * sy,
        width: width * sx,
        height: height * sy,
    }
}

fn style_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WireflowError;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbImage::from_pixel(width, height, image::Rgb([240, 240, 240]));
        let mut buf = std::io::Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut buf, image::ImageFormat::Png)
            .expect("PNGエンコード失敗");
        buf.into_inner()
    }

    // =============================================
    // レイアウト判定テスト
    // =============================================

    #[tokio::test]
    async fn test_analyze_landscape_is_grid() {
        let model = HeuristicAnalyzer::new()
            .analyze(&png_bytes(720, 400))
            .await
            .unwrap();

        assert_eq!(model.layout_structure.kind, LayoutKind::Grid);
        assert_eq!(model.layout_structure.columns, 2);
        assert_eq!(model.layout_structure.gap, "gap-6");
        assert!(model.layout_structure.responsive);
    }

    #[tokio::test]
    async fn test_analyze_portrait_is_flex() {
        let model = HeuristicAnalyzer::new()
            .analyze(&png_bytes(400, 720))
            .await
            .unwrap();

        assert_eq!(model.layout_structure.kind, LayoutKind::Flex);
        assert_eq!(model.layout_structure.columns, 1);
        assert_eq!(model.layout_structure.gap, "gap-4");
    }

    #[tokio::test]
    async fn test_analyze_square_is_flex() {
        // 正方形は横長ではないので縦積み
        let model = HeuristicAnalyzer::new()
            .analyze(&png_bytes(500, 500))
            .await
            .unwrap();

        assert_eq!(model.layout_structure.kind, LayoutKind::Flex);
    }

    // =============================================
    // メタデータ・要素テスト
    // =============================================

    #[tokio::test]
    async fn test_analyze_image_metadata() {
        let model = HeuristicAnalyzer::new()
            .analyze(&png_bytes(800, 600))
            .await
            .unwrap();

        assert_eq!(model.image_info.width, 800);
        assert_eq!(model.image_info.height, 600);
        assert_eq!(model.image_info.format, "PNG");
        assert_eq!(model.image_info.color_mode, "RGB");
    }

    #[tokio::test]
    async fn test_analyze_element_order() {
        let model = HeuristicAnalyzer::new()
            .analyze(&png_bytes(720, 400))
            .await
            .unwrap();

        let types: Vec<ElementType> = model.elements.iter().map(|e| e.element_type).collect();
        assert_eq!(
            types,
            vec![
                ElementType::Header,
                ElementType::Paragraph,
                ElementType::Button,
                ElementType::Button,
                ElementType::ImagePlaceholder,
            ]
        );
        assert_eq!(model.elements[0].content, "Welcome to Your App");
        assert_eq!(model.elements[2].content, "Get Started");
    }

    #[tokio::test]
    async fn test_analyze_scaled_positions() {
        // 基準キャンバス（720x400）のちょうど2倍
        let model = HeuristicAnalyzer::new()
            .analyze(&png_bytes(1440, 800))
            .await
            .unwrap();

        let header = &model.elements[0].position;
        assert_eq!(header.x, 100.0);
        assert_eq!(header.y, 60.0);
        assert_eq!(header.width, 600.0);
        assert_eq!(header.height, 80.0);
    }

    #[tokio::test]
    async fn test_analyze_deterministic() {
        let bytes = png_bytes(720, 400);
        let analyzer = HeuristicAnalyzer::new();

        let first = analyzer.analyze(&bytes).await.unwrap();
        let second = analyzer.analyze(&bytes).await.unwrap();

        let a = serde_json::to_string(&first).expect("シリアライズ失敗");
        let b = serde_json::to_string(&second).expect("シリアライズ失敗");
        assert_eq!(a, b);
    }

    // =============================================
    // エラーケーステスト
    // =============================================

    #[tokio::test]
    async fn test_analyze_rejects_invalid_bytes() {
        let result = HeuristicAnalyzer::new().analyze(b"this is not an image").await;

        assert!(matches!(result, Err(WireflowError::UnsupportedMedia(_))));
    }

    #[tokio::test]
    async fn test_analyze_rejects_empty_bytes() {
        let result = HeuristicAnalyzer::new().analyze(&[]).await;

        assert!(result.is_err());
    }
}
