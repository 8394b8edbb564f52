//! プロンプト生成モジュール
//!
//! AI呼び出しに使うプロンプトを1か所に集約する:
//! - MARKUP_SYSTEM / LAYOUT_SYSTEM: システムメッセージ
//! - build_markup_prompt: レイアウトモデル → マークアップ生成用プロンプト
//! - build_layout_prompt: 画像メタデータ → レイアウト解析用プロンプト

use crate::layout::{ImageInfo, LayoutModel, STYLE_ASPECT_KEYS};

/// マークアップ生成時のシステムメッセージ
pub const MARKUP_SYSTEM: &str = "You are an expert React developer who generates clean, modern, and responsive React/JSX code using Tailwind CSS. Always respond with only the JSX code, no explanations or markdown formatting.";

/// レイアウト解析時のシステムメッセージ（ビジョンモデル用）
pub const LAYOUT_SYSTEM: &str = "You are a precise UI wireframe analyst. Always respond with only a JSON object describing the layout, no explanations or markdown formatting.";

/// 認識対象のUI要素タイプ
pub const ELEMENT_TYPES: &[&str] = &[
    "header",
    "paragraph",
    "button",
    "image_placeholder",
    "generic",
];

/// マークアップ生成プロンプト
///
/// # Arguments
/// * `model` - 解析・検証済みのレイアウトモデル
///
/// # Returns
/// マークアップ生成用のプロンプト文字列
pub fn build_markup_prompt(model: &LayoutModel) -> String {
    let structure = &model.layout_structure;
    let container = &model.container;

    let mut prompt = format!(
        r#"You are an expert React developer. Generate clean, modern React/JSX code based on the following wireframe layout data.

Layout Structure:
- Type: {}
- Columns: {}
- Gap: {}
- Responsive: {}

Container:
- Max Width: {}
- Padding: {}
- Margin: {}

Detected Elements:
"#,
        structure.kind,
        structure.columns,
        structure.gap,
        structure.responsive,
        container.max_width,
        container.padding,
        container.margin,
    );

    for element in &model.elements {
        // BTreeMapなのでスタイルのキー順は常に一定
        let style = serde_json::to_string(&element.style).unwrap_or_default();
        prompt.push_str(&format!(
            "\n- Type: {}\n- Content: {}\n- Style: {}\n",
            element.element_type, element.content, style
        ));
    }

    prompt.push_str(
        r#"
Requirements:
1. Use Tailwind CSS classes for styling
2. Make the component responsive
3. Use semantic HTML elements
4. Include proper accessibility attributes
5. Use modern React patterns
6. Generate only the JSX/TSX code, no imports or component wrapper
7. Use className instead of class
8. Make sure the code is production-ready and follows best practices

Generate the React/JSX code:"#,
    );

    prompt
}

/// レイアウト解析プロンプト生成（ビジョンモデル用）
///
/// 画像と一緒に送信し、レイアウトモデルのJSONを返させる
///
/// # Arguments
/// * `info` - ローカルでデコードした画像メタデータ
///
/// # Returns
/// レイアウト解析用のプロンプト文字列
pub fn build_layout_prompt(info: &ImageInfo) -> String {
    let width = info.width;
    let height = info.height;
    let element_types = ELEMENT_TYPES.join(", ");
    let style_keys = STYLE_ASPECT_KEYS.join(", ");

    format!(
        r#"Analyze the attached UI wireframe image ({width}x{height} px) and describe its layout.

## Element types
Use only these values for "type":
{element_types}

## Output format (respond with exactly this JSON object shape)
{{
  "elements": [
    {{
      "type": "header",
      "content": "text read from the wireframe",
      "position": {{"x": 0, "y": 0, "width": 0, "height": 0}},
      "style": {{"font_size": "text-3xl", "font_weight": "font-bold"}}
    }}
  ],
  "layoutStructure": {{"kind": "grid", "columns": 2, "gap": "gap-6", "responsive": true}},
  "container": {{"maxWidth": "max-w-6xl", "padding": "p-6", "margin": "mx-auto"}}
}}

## Rules
- List elements strictly top-to-bottom, left-to-right as they appear in the image
- Positions are pixels in the source image ({width}x{height})
- Style values are Tailwind CSS classes
- Allowed style keys: {style_keys}
- Use "grid" with a column count when elements sit side by side in columns, otherwise "flex"
- Respond with the JSON object only. No explanations"#
    )
}
