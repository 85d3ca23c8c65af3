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

//! Prompt templating and shaping of the model's reply into markdown.

use crate::constants::STEPS_PROMPT_TEMPLATE;

/// Marker the model uses when it declines a task.
const REFUSAL_PREFIX: &str = "I'm sorry";

/// Substitute the task into the instructional template.
pub fn fill_prompt(task: &str) -> String {
    STEPS_PROMPT_TEMPLATE.replace("{task}", task)
}

/// Shape a raw completion into the two-level markdown document we render.
///
/// Refusals are wrapped in bold and returned as-is. Anything else gets a
/// `# How To ` title, and the first `1.` is promoted into a `## Steps`
/// section. The prompt contract puts a title line first and numbers the
/// first step `1.`; this is a textual convention, not a parse.
pub fn format_steps(raw: &str) -> String {
    let steps = raw.trim();

    if steps.starts_with(REFUSAL_PREFIX) {
        return format!("**{steps}**");
    }

    format!("# How To {}", steps.replacen("1.", "## Steps\n\n1.", 1))
}
