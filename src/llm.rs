// Copyright (c) 2025 the howto authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Synchronous chat-completion client for the OpenAI API.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{COMPLETION_MODEL, COMPLETION_TEMPERATURE, OPENAI_CHAT_COMPLETIONS_URL};

/// Narrow seam over the completion backend. One real implementation;
/// tests substitute fakes.
pub trait CompletionModel {
    /// Send one prompt, return the first choice's text.
    fn complete(&self, prompt: &str) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// OpenAI-backed [`CompletionModel`].
pub struct OpenAi {
    api_key: String,
    endpoint: String,
    client: Client,
}

impl OpenAi {
    pub fn new(api_key: String) -> Self {
        Self::with_endpoint(api_key, OPENAI_CHAT_COMPLETIONS_URL.to_string())
    }

    /// Build a client against an alternate endpoint, e.g. a local fake
    /// server in the end-to-end tests.
    pub fn with_endpoint(api_key: String, endpoint: String) -> Self {
        Self {
            api_key,
            endpoint,
            client: Client::new(),
        }
    }
}

impl CompletionModel for OpenAi {
    fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: COMPLETION_MODEL,
            temperature: COMPLETION_TEMPERATURE,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!(endpoint = %self.endpoint, model = COMPLETION_MODEL, "sending completion request");

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .context("Failed to reach the completion API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            anyhow::bail!("Completion API returned error {}: {}", status, body);
        }

        let parsed: ChatResponse = response
            .json()
            .context("Failed to parse the completion API response")?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .context("Completion API response contained no choices")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_the_wire_contract() {
        let request = ChatRequest {
            model: COMPLETION_MODEL,
            temperature: COMPLETION_TEMPERATURE,
            messages: vec![ChatMessage {
                role: "user",
                content: "how do I sharpen a knife",
            }],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-3.5-turbo");
        assert!((value["temperature"].as_f64().unwrap() - 0.1).abs() < 1e-6);
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "how do I sharpen a knife");
    }

    #[test]
    fn response_parsing_takes_the_first_choice() {
        let body = r#"{
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Sharpen a Knife\n\n1. Get a whetstone."}},
                {"index": 1, "message": {"role": "assistant", "content": "ignored"}}
            ]
        }"#;

        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        let content = parsed.choices.into_iter().next().unwrap().message.content;
        assert!(content.starts_with("Sharpen a Knife"));
    }

    #[test]
    fn empty_choices_parse_without_panicking() {
        let parsed: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(parsed.choices.into_iter().next().is_none());
    }
}
