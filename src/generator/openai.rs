//! OpenAI互換API連携
//!
//! Chat Completions形式でテキスト生成を行う。
//! ビジョン対応モデルにはData URL形式で画像を添付できる

use serde::{Deserialize, Serialize};

use super::TextGenerator;
use crate::config::Config;
use crate::error::{Result, WireflowError};

/// Chat Completionsリクエスト
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: MessageContent,
}

#[derive(Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize)]
struct ImageUrl {
    url: String,
}

/// Chat Completionsレスポンス
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// OpenAI互換APIのテキスト生成器
#[derive(Debug, Clone)]
pub struct OpenAiGenerator {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl OpenAiGenerator {
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config.get_api_key()?;
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                WireflowError::Generation(format!("HTTPクライアント初期化エラー: {}", e))
            })?;
        let api_url = format!(
            "{}/chat/completions",
            config.api_base_url.trim_end_matches('/')
        );

        Ok(Self {
            client,
            api_url,
            api_key,
            model: config.model.clone(),
        })
    }

    /// 画像付きで生成（ビジョンモデル用）
    ///
    /// # Arguments
    /// * `system` - システムメッセージ
    /// * `prompt` - プロンプト本文
    /// * `data_url` - "data:image/png;base64,..." 形式のData URL
    /// * `max_output_tokens` - 出力トークン上限
    pub async fn complete_with_image(
        &self,
        system: &str,
        prompt: &str,
        data_url: &str,
        max_output_tokens: u32,
    ) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: MessageContent::Text(system.to_string()),
                },
                ChatMessage {
                    role: "user",
                    content: MessageContent::Parts(vec![
                        ContentPart::Text {
                            text: prompt.to_string(),
                        },
                        ContentPart::ImageUrl {
                            image_url: ImageUrl {
                                url: data_url.to_string(),
                            },
                        },
                    ]),
                },
            ],
            max_tokens: max_output_tokens,
            temperature: 0.1,
        };

        self.send(&request).await
    }

    /// API呼び出し（共通処理）
    async fn send(&self, request: &ChatRequest) -> Result<String> {
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| WireflowError::Generation(format!("API呼び出しエラー: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WireflowError::Generation(format!(
                "APIエラー (status {}): {}",
                status, body
            )));
        }

        let payload: ChatResponse = response
            .json()
            .await
            .map_err(|e| WireflowError::Generation(format!("レスポンス解析エラー: {}", e)))?;

        let text = payload
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(WireflowError::Generation(
                "空のレスポンスが返されました".into(),
            ));
        }

        Ok(text)
    }
}

impl TextGenerator for OpenAiGenerator {
    async fn complete(&self, system: &str, prompt: &str, max_output_tokens: u32) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: MessageContent::Text(system.to_string()),
                },
                ChatMessage {
                    role: "user",
                    content: MessageContent::Text(prompt.to_string()),
                },
            ],
            max_tokens: max_output_tokens,
            temperature: 0.3,
        };

        self.send(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // リクエスト シリアライズテスト
    // =============================================

    #[test]
    fn test_chat_request_serialize() {
        let request = ChatRequest {
            model: "gpt-4o".to_string(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: MessageContent::Text("You are a test.".to_string()),
                },
                ChatMessage {
                    role: "user",
                    content: MessageContent::Text("テストプロンプト".to_string()),
                },
            ],
            max_tokens: 2000,
            temperature: 0.3,
        };

        let json = serde_json::to_string(&request).expect("シリアライズ失敗");
        assert!(json.contains("\"model\":\"gpt-4o\""));
        assert!(json.contains("\"max_tokens\":2000"));
        assert!(json.contains("\"temperature\":0.3"));
        assert!(json.contains("\"role\":\"system\""));
        assert!(json.contains("\"role\":\"user\""));
    }

    #[test]
    fn test_message_content_text_serialize() {
        // テキストのみのcontentはプレーン文字列になること
        let message = ChatMessage {
            role: "user",
            content: MessageContent::Text("Hello".to_string()),
        };

        let json = serde_json::to_string(&message).expect("シリアライズ失敗");
        assert_eq!(json, r#"{"role":"user","content":"Hello"}"#);
    }

    #[test]
    fn test_content_part_image_url_serialize() {
        let part = ContentPart::ImageUrl {
            image_url: ImageUrl {
                url: "data:image/png;base64,iVBORw0KGgo=".to_string(),
            },
        };

        let json = serde_json::to_string(&part).expect("シリアライズ失敗");
        assert!(json.contains("\"type\":\"image_url\""));
        assert!(json.contains("\"image_url\":{\"url\":\"data:image/png;base64,iVBORw0KGgo=\"}"));
    }

    #[test]
    fn test_content_part_text_serialize() {
        let part = ContentPart::Text {
            text: "describe this".to_string(),
        };

        let json = serde_json::to_string(&part).expect("シリアライズ失敗");
        assert_eq!(json, r#"{"type":"text","text":"describe this"}"#);
    }

    // =============================================
    // レスポンス デシリアライズテスト
    // =============================================

    #[test]
    fn test_chat_response_deserialize() {
        let json = r#"{
            "id": "chatcmpl-123",
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": "<div className=\"p-6\">Hello</div>"
                },
                "finish_reason": "stop"
            }]
        }"#;

        let response: ChatResponse = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(response.choices.len(), 1);
        assert!(response.choices[0]
            .message
            .content
            .as_deref()
            .unwrap()
            .contains("className"));
    }

    #[test]
    fn test_chat_response_deserialize_null_content() {
        let json = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;

        let response: ChatResponse = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(response.choices[0].message.content.is_none());
    }

    #[test]
    fn test_chat_response_deserialize_empty_choices() {
        let json = r#"{"choices": []}"#;

        let response: ChatResponse = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(response.choices.is_empty());
    }
}
