//! レイアウトモデルの型定義
//!
//! 画像解析（ImageAnalyzer）の出力であり、コード合成（CodeSynthesizer）の
//! 入力となる中間表現:
//! - LayoutModel: ルート構造（画像情報 + 要素列 + レイアウト構造 + コンテナ）
//! - Element: 検出されたUI要素1件
//!
//! `elements` の順序は描画順序そのもの。validate() を通った後は不変として扱う。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Result, WireflowError};

/// スタイル観点キー（クラス結合の固定順序）
pub const STYLE_ASPECT_KEYS: &[&str] = &[
    "font_size",
    "font_weight",
    "color",
    "line_height",
    "background",
    "text_color",
    "padding",
    "border_radius",
    "hover",
];

/// 画像メタデータ
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub format: String,
    pub color_mode: String,
}

/// UI要素の種類
///
/// 未知の値はすべて generic として扱う
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    Header,
    Paragraph,
    Button,
    ImagePlaceholder,
    #[default]
    #[serde(other)]
    Generic,
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementType::Header => write!(f, "header"),
            ElementType::Paragraph => write!(f, "paragraph"),
            ElementType::Button => write!(f, "button"),
            ElementType::ImagePlaceholder => write!(f, "image_placeholder"),
            ElementType::Generic => write!(f, "generic"),
        }
    }
}

/// 要素の検出位置（ピクセル、左上原点）
///
/// 描画自体には使わない参考情報だが、JSONで往復できる必要がある
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// 検出されたUI要素
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Element {
    #[serde(rename = "type")]
    pub element_type: ElementType,
    pub content: String,
    pub position: Position,
    /// スタイル観点キー → スタイルトークン。未知キーは保持されるが描画では無視
    pub style: BTreeMap<String, String>,
}

impl Element {
    /// スタイル観点を固定順で結合したクラス文字列
    ///
    /// STYLE_ASPECT_KEYS の順に存在する値だけを半角スペースで結合する。
    /// どの観点もなければ空文字列
    pub fn class_string(&self) -> String {
        STYLE_ASPECT_KEYS
            .iter()
            .filter_map(|key| self.style.get(*key))
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// レイアウト種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    #[default]
    Flex,
    Grid,
}

impl std::fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutKind::Flex => write!(f, "flex"),
            LayoutKind::Grid => write!(f, "grid"),
        }
    }
}

/// ページ全体のレイアウト構造
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutStructure {
    /// 旧形式のJSONは "type" キーを使うため alias で受ける
    #[serde(alias = "type")]
    pub kind: LayoutKind,
    /// グリッド時の列数（flexでは意味を持たない）
    pub columns: u32,
    pub gap: String,
    pub responsive: bool,
}

impl Default for LayoutStructure {
    fn default() -> Self {
        Self {
            kind: LayoutKind::Flex,
            columns: 1,
            gap: "gap-4".into(),
            responsive: true,
        }
    }
}

/// ルートコンテナのスタイルトークン
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Container {
    pub max_width: String,
    pub padding: String,
    pub margin: String,
}

impl Default for Container {
    fn default() -> Self {
        Self {
            max_width: "max-w-6xl".into(),
            padding: "p-6".into(),
            margin: "mx-auto".into(),
        }
    }
}

/// 解析済みレイアウトの全体像
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutModel {
    pub image_info: ImageInfo,
    pub elements: Vec<Element>,
    pub layout_structure: LayoutStructure,
    pub container: Container,
}

impl LayoutModel {
    /// 不変条件の検証
    ///
    /// - 画像サイズは正の値
    /// - 列数は1以上
    /// - 要素位置は非負
    pub fn validate(&self) -> Result<()> {
        if self.image_info.width == 0 || self.image_info.height == 0 {
            return Err(WireflowError::InvalidLayout(format!(
                "画像サイズが不正です: {}x{}",
                self.image_info.width, self.image_info.height
            )));
        }

        if self.layout_structure.columns == 0 {
            return Err(WireflowError::InvalidLayout(
                "列数は1以上が必要です".into(),
            ));
        }

        for element in &self.elements {
            let p = &element.position;
            if p.x < 0.0 || p.y < 0.0 || p.width < 0.0 || p.height < 0.0 {
                return Err(WireflowError::InvalidLayout(format!(
                    "要素の位置が負値です: ({}, {}, {}, {})",
                    p.x, p.y, p.width, p.height
                )));
            }
        }

        Ok(())
    }
}
