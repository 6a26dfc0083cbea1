//! Request and response shapes for the `generateContent` endpoint.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    Text(String),
    /// Image bytes, base64-encoded on the wire.
    InlineImage { mime_type: String, data: Vec<u8> },
}

/// Server-side grounding tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    GoogleSearch,
    GoogleMaps,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub model: String,
    pub system: Option<String>,
    pub parts: Vec<Part>,
    pub tool: Option<Tool>,
}

impl GenerateRequest {
    pub fn text(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            system: None,
            parts: vec![Part::Text(prompt.into())],
            tool: None,
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_tool(mut self, tool: Tool) -> Self {
        self.tool = Some(tool);
        self
    }

    /// Put an image ahead of the text prompt.
    pub fn with_image(mut self, mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        self.parts.insert(
            0,
            Part::InlineImage {
                mime_type: mime_type.into(),
                data,
            },
        );
        self
    }

    /// JSON body for the REST call.
    pub fn to_body(&self) -> Value {
        let parts: Vec<Value> = self
            .parts
            .iter()
            .map(|part| match part {
                Part::Text(text) => json!({ "text": text }),
                Part::InlineImage { mime_type, data } => json!({
                    "inlineData": {
                        "mimeType": mime_type,
                        "data": STANDARD.encode(data),
                    }
                }),
            })
            .collect();

        let mut body = json!({
            "contents": [{ "role": "user", "parts": parts }],
        });
        if let Some(system) = &self.system {
            body["systemInstruction"] = json!({ "parts": [{ "text": system }] });
        }
        if let Some(tool) = self.tool {
            body["tools"] = match tool {
                Tool::GoogleSearch => json!([{ "googleSearch": {} }]),
                Tool::GoogleMaps => json!([{ "googleMaps": {} }]),
            };
        }
        body
    }
}

/// Concatenate the text parts of the first candidate.
///
/// Returns `None` when the response carries no text at all; callers map that
/// to their "empty response" placeholder.
pub fn response_text(response: &Value) -> Option<String> {
    let parts = response["candidates"][0]["content"]["parts"].as_array()?;
    let text: String = parts
        .iter()
        .filter_map(|p| p["text"].as_str())
        .collect::<Vec<_>>()
        .join("");
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Error message the API put in a non-2xx body, if any.
pub fn error_message(response: &Value) -> Option<&str> {
    response["error"]["message"].as_str()
}
