//! レイアウトモデルの正規化
//!
//! ビジョンモデルの出力は表記が揺れるため、検証前に機械的に補正する:
//! - 空白・空エントリの除去
//! - gap表記の統一（`6` → `gap-6`）
//! - 列数のクランプ（1〜12）
//! - 負の座標の切り上げ

use crate::layout::{Container, LayoutModel, LayoutStructure};
use regex::Regex;
use std::collections::BTreeMap;

/// レイアウトモデルを正規化する
///
/// validate() の前に呼び、軽微な揺れをエラーにせず補正する
pub fn normalize_model(model: &mut LayoutModel) {
    for element in &mut model.elements {
        element.content = element.content.trim().to_string();
        element.style = normalize_style(&element.style);

        let p = &mut element.position;
        p.x = p.x.max(0.0);
        p.y = p.y.max(0.0);
        p.width = p.width.max(0.0);
        p.height = p.height.max(0.0);
    }

    normalize_structure(&mut model.layout_structure);
    normalize_container(&mut model.container);
}

/// スタイルマップの空白と空エントリを除去
fn normalize_style(style: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    style
        .iter()
        .filter_map(|(key, value)| {
            let key = key.trim();
            let value = value.trim();
            if key.is_empty() || value.is_empty() {
                None
            } else {
                Some((key.to_string(), value.to_string()))
            }
        })
        .collect()
}

fn normalize_structure(structure: &mut LayoutStructure) {
    structure.columns = structure.columns.clamp(1, 12);
    structure.gap = normalize_gap(&structure.gap);
}

/// gap表記をTailwindクラスに統一
///
/// - 空 → デフォルト値
/// - 裸の数値（`6`） → `gap-6`
fn normalize_gap(gap: &str) -> String {
    let gap = gap.trim();
    if gap.is_empty() {
        return LayoutStructure::default().gap;
    }

    lazy_static::lazy_static! {
        static ref BARE_NUMBER_RE: Regex = Regex::new(r"^\d+$").unwrap();
    }
    if BARE_NUMBER_RE.is_match(gap) {
        return format!("gap-{}", gap);
    }

    gap.to_string()
}

fn normalize_container(container: &mut Container) {
    let defaults = Container::default();
    container.max_width = non_empty_or(&container.max_width, defaults.max_width);
    container.padding = non_empty_or(&container.padding, defaults.padding);
    container.margin = non_empty_or(&container.margin, defaults.margin);
}

fn non_empty_or(value: &str, default: String) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default
    } else {
        trimmed.to_string()
    }
}
