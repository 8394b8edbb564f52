//! コード合成モジュール
//!
//! レイアウトモデルからUIマークアップを作る。
//! AI生成を試み、使えなければフォールバック描画に落ちる（必ず文字列を返す）

pub mod fallback;

use log::{debug, warn};

use crate::generator::TextGenerator;
use crate::layout::LayoutModel;
use crate::parser::extract_code;
use crate::prompts::{build_markup_prompt, MARKUP_SYSTEM};

/// 出力トークン上限のデフォルト値
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 2000;

/// マークアップ合成器
///
/// 生成器なし（None）でも動作し、その場合は常にフォールバック描画
pub struct CodeSynthesizer<G: TextGenerator> {
    generator: Option<G>,
    max_output_tokens: u32,
}

impl<G: TextGenerator> CodeSynthesizer<G> {
    pub fn new(generator: Option<G>) -> Self {
        Self {
            generator,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    /// レイアウトモデルからマークアップを合成する
    ///
    /// AI生成が失敗してもエラーにはせず、フォールバック描画の結果を返す
    pub async fn synthesize(&self, model: &LayoutModel) -> String {
        if let Some(generator) = &self.generator {
            let prompt = build_markup_prompt(model);
            debug!("マークアップ生成プロンプト長: {} chars", prompt.len());

            match generator
                .complete(MARKUP_SYSTEM, &prompt, self.max_output_tokens)
                .await
            {
                Ok(response) => {
                    debug!("マークアップ生成レスポンス長: {} chars", response.len());
                    match extract_code(&response) {
                        Some(code) => return code,
                        None => {
                            warn!("レスポンスからコードを抽出できませんでした。フォールバック描画に切り替えます");
                        }
                    }
                }
                Err(e) => {
                    warn!(
                        "コード生成に失敗しました: {}。フォールバック描画に切り替えます",
                        e
                    );
                }
            }
        }

        fallback::render(model)
    }
}
