//! AIレスポンスパーサー
//!
//! テキスト生成のレスポンスからコードブロックを抽出し、
//! レイアウト解析のレスポンスをLayoutModelにパースする

use crate::error::{Result, WireflowError};
use crate::layout::LayoutModel;

/// レスポンスからコード部分を抽出
///
/// 抽出優先順位:
/// 1. ```jsx ... ``` ブロック
/// 2. ```tsx ... ``` ブロック
/// 3. 汎用 ``` ... ``` ブロック
/// 4. フェンスなしはレスポンス全体
///
/// 閉じフェンスのないブロックや空の抽出結果は None を返す
/// （呼び出し側はフォールバック描画に切り替える）
///
/// # Arguments
/// * `response` - テキスト生成のレスポンス文字列
///
/// # Returns
/// * `Some(String)` - 抽出されたコード
/// * `None` - 使えるコードがない場合
///
/// # Examples
/// ```
/// use wireflow_rust::parser::extract_code;
///
/// let response = "Here you go:\n```jsx\n<div className=\"p-6\" />\n```";
/// assert_eq!(extract_code(response).unwrap(), "<div className=\"p-6\" />");
/// ```
pub fn extract_code(response: &str) -> Option<String> {
    // 特定言語のフェンスを優先し、最後に汎用フェンスを試す
    for marker in ["```jsx", "```tsx", "```"] {
        if let Some(found) = response.find(marker) {
            let start = found + marker.len();
            let end_offset = response[start..].find("```")?;
            let code = response[start..start + end_offset].trim();
            if code.is_empty() {
                return None;
            }
            return Some(code.to_string());
        }
    }

    // フェンスなしはレスポンス全体をコードとみなす
    let trimmed = response.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// レスポンスからJSONオブジェクト部分を抽出
///
/// 抽出優先順位:
/// 1. ```json ... ``` ブロック
/// 2. 生の {...} オブジェクト
/// 3. エラー
///
/// # Arguments
/// * `response` - レイアウト解析のレスポンス文字列
///
/// # Returns
/// * `Ok(&str)` - 抽出されたJSON文字列
/// * `Err` - JSONが見つからない場合
pub fn extract_json(response: &str) -> Result<&str> {
    // ```json ... ``` ブロックを探す
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + 7; // "```json" の長さ
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    // 生の {...} を探す
    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if end >= start {
                return Ok(&response[start..=end]);
            }
        }
    }

    Err(WireflowError::LayoutParse("JSONが見つかりません".into()))
}

/// レイアウト解析レスポンスをパース
///
/// # Arguments
/// * `response` - ビジョンモデルのレスポンス
///
/// # Returns
/// * `Ok(LayoutModel)` - パース成功
/// * `Err` - JSONが見つからないかパース失敗
pub fn parse_layout_response(response: &str) -> Result<LayoutModel> {
    let json_str = extract_json(response)?;
    let model: LayoutModel = serde_json::from_str(json_str.trim())
        .map_err(|e| WireflowError::LayoutParse(e.to_string()))?;
    Ok(model)
}
