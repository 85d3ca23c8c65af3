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

use anyhow::{Context, Result};
use tracing::warn;

use crate::credentials;
use crate::format;
use crate::llm::{CompletionModel, OpenAi};
use crate::render;
use crate::theme::{self, ColorScheme};

/// Full query pipeline: credential, completion, formatting, rendering.
pub fn cmd_ask(task: &str, endpoint: Option<String>) -> Result<()> {
    let api_key = credentials::load_key()?;
    let model = match endpoint {
        Some(endpoint) => OpenAi::with_endpoint(api_key, endpoint),
        None => OpenAi::new(api_key),
    };

    let steps = ask(&model, task)?;

    // Theme detection failure is the one non-fatal error in the tool.
    let scheme = theme::detect().unwrap_or_else(|err| {
        warn!("could not detect the preferred color scheme: {err:#}");
        ColorScheme::Light
    });

    let rendered = render::render(&steps, scheme);
    println!("\n{}\n", rendered.trim());

    Ok(())
}

/// Persist the API key for later queries.
pub fn cmd_set_key(key: &str) -> Result<()> {
    credentials::store_key(key).context("Could not set the API key")
}

fn ask(model: &impl CompletionModel, task: &str) -> Result<String> {
    let prompt = format::fill_prompt(task);
    let reply = model
        .complete(&prompt)
        .context("There was a problem with the LLM API while generating your response")?;
    Ok(format::format_steps(&reply))
}
