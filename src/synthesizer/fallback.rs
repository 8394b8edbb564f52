//! フォールバック描画
//!
//! AI生成が使えないとき・失敗したときに、レイアウトモデルから
//! 決定的にマークアップを組み立てる

use crate::layout::{Element, ElementType, LayoutKind, LayoutModel};

/// レイアウトモデルからマークアップを描画する
///
/// 同じモデルからは常に同じ文字列が得られる
pub fn render(model: &LayoutModel) -> String {
    let mut lines = Vec::new();

    let container = &model.container;
    let container_classes = format!(
        "{} {} {}",
        container.max_width, container.padding, container.margin
    );
    lines.push(format!("<div className=\"{}\">", container_classes));

    // レイアウト構造に応じた内側ラッパー
    if model.layout_structure.kind == LayoutKind::Grid {
        lines.push(format!(
            "  <div className=\"grid grid-cols-1 md:grid-cols-{} {}\">",
            model.layout_structure.columns, model.layout_structure.gap
        ));
    } else {
        lines.push("  <div className=\"space-y-6\">".to_string());
    }

    for element in &model.elements {
        render_element(&mut lines, element);
    }

    lines.push("  </div>".to_string());
    lines.push("</div>".to_string());

    lines.join("\n")
}

fn render_element(lines: &mut Vec<String>, element: &Element) {
    let class_name = element.class_string();
    let content = &element.content;

    match element.element_type {
        ElementType::Header => {
            lines.push(format!(
                "    <h1 className=\"{}\">{}</h1>",
                class_name, content
            ));
        }
        ElementType::Paragraph => {
            lines.push(format!(
                "    <p className=\"{}\">{}</p>",
                class_name, content
            ));
        }
        ElementType::Button => {
            lines.push(format!(
                "    <button className=\"{}\">{}</button>",
                class_name, content
            ));
        }
        ElementType::ImagePlaceholder => {
            lines.push(format!(
                "    <div className=\"{} flex items-center justify-center\">",
                class_name
            ));
            lines.push("      <div className=\"text-center\">".to_string());
            lines.push(
                "        <div className=\"w-16 h-16 bg-gray-300 rounded-full mx-auto mb-4\"></div>"
                    .to_string(),
            );
            lines.push(format!(
                "        <p className=\"text-gray-500\">{}</p>",
                content
            ));
            lines.push("      </div>".to_string());
            lines.push("    </div>".to_string());
        }
        ElementType::Generic => {
            lines.push(format!(
                "    <div className=\"{}\">{}</div>",
                class_name, content
            ));
        }
    }
}
