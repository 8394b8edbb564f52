//! コード合成テスト
//!
//! モック生成器を使い、AI応答の成否ごとに合成結果を検証する。
//! 生成器がどう転んでも synthesize() は必ずマークアップを返す

use std::collections::BTreeMap;

use wireflow_rust::error::{Result, WireflowError};
use wireflow_rust::generator::TextGenerator;
use wireflow_rust::layout::{Element, ElementType, LayoutKind, LayoutModel, LayoutStructure};
use wireflow_rust::synthesizer::{fallback, CodeSynthesizer};

/// 固定応答を返すテスト用生成器
enum MockGenerator {
    Respond(String),
    Fail(String),
}

impl TextGenerator for MockGenerator {
    async fn complete(
        &self,
        _system: &str,
        _prompt: &str,
        _max_output_tokens: u32,
    ) -> Result<String> {
        match self {
            MockGenerator::Respond(text) => Ok(text.clone()),
            MockGenerator::Fail(message) => Err(WireflowError::Generation(message.clone())),
        }
    }
}

fn style_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn sample_model() -> LayoutModel {
    LayoutModel {
        elements: vec![
            Element {
                element_type: ElementType::Header,
                content: "Welcome".to_string(),
                style: style_map(&[("font_size", "text-3xl"), ("font_weight", "font-bold")]),
                ..Default::default()
            },
            Element {
                element_type: ElementType::Button,
                content: "Go".to_string(),
                style: style_map(&[("background", "bg-blue-600")]),
                ..Default::default()
            },
        ],
        layout_structure: LayoutStructure {
            kind: LayoutKind::Grid,
            columns: 2,
            gap: "gap-6".to_string(),
            responsive: true,
        },
        ..Default::default()
    }
}

/// フェンス付き応答はフェンスを剥がして採用される
#[tokio::test]
async fn test_fenced_response_is_used() {
    let generator = MockGenerator::Respond(
        "Here is the code:\n```jsx\nconst App = () => <div>Hello</div>;\n```".to_string(),
    );
    let synthesizer = CodeSynthesizer::new(Some(generator));

    let markup = synthesizer.synthesize(&sample_model()).await;
    assert_eq!(markup, "const App = () => <div>Hello</div>;");
}

/// フェンスなしの応答はトリムしてそのまま採用される
#[tokio::test]
async fn test_plain_response_is_used_verbatim() {
    let generator = MockGenerator::Respond("  <div>Plain</div>\n".to_string());
    let synthesizer = CodeSynthesizer::new(Some(generator));

    let markup = synthesizer.synthesize(&sample_model()).await;
    assert_eq!(markup, "<div>Plain</div>");
}

/// 生成器のエラーはフォールバック描画に切り替わる
#[tokio::test]
async fn test_generator_error_falls_back() {
    let model = sample_model();
    let generator = MockGenerator::Fail("API接続エラー".to_string());
    let synthesizer = CodeSynthesizer::new(Some(generator));

    let markup = synthesizer.synthesize(&model).await;
    assert_eq!(markup, fallback::render(&model));
}

/// 空の応答はコード抽出に失敗してフォールバックになる
#[tokio::test]
async fn test_empty_response_falls_back() {
    let model = sample_model();
    let generator = MockGenerator::Respond("   \n".to_string());
    let synthesizer = CodeSynthesizer::new(Some(generator));

    let markup = synthesizer.synthesize(&model).await;
    assert_eq!(markup, fallback::render(&model));
}

/// 閉じフェンスのない応答もフォールバックになる
#[tokio::test]
async fn test_unterminated_fence_falls_back() {
    let model = sample_model();
    let generator =
        MockGenerator::Respond("```jsx\nconst App = () => <div>truncated".to_string());
    let synthesizer = CodeSynthesizer::new(Some(generator));

    let markup = synthesizer.synthesize(&model).await;
    assert_eq!(markup, fallback::render(&model));
}

/// 生成器なしは常にフォールバック描画
#[tokio::test]
async fn test_no_generator_falls_back() {
    let model = sample_model();
    let synthesizer = CodeSynthesizer::<MockGenerator>::new(None);

    let markup = synthesizer.synthesize(&model).await;
    assert_eq!(markup, fallback::render(&model));
    assert!(markup.contains("md:grid-cols-2"));
    assert!(markup.contains("<h1 className=\"text-3xl font-bold\">Welcome</h1>"));
}

/// 空モデル + 生成失敗でもラッパーだけのマークアップが返る
#[tokio::test]
async fn test_failure_on_empty_model_renders_wrappers() {
    let generator = MockGenerator::Fail("timeout".to_string());
    let synthesizer =
        CodeSynthesizer::new(Some(generator)).with_max_output_tokens(100);

    let markup = synthesizer.synthesize(&LayoutModel::default()).await;
    assert_eq!(
        markup,
        "<div className=\"max-w-6xl p-6 mx-auto\">\n  <div className=\"space-y-6\">\n  </div>\n</div>"
    );
}
