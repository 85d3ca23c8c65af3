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

//! Terminal markdown rendering with a theme-matched skin.

use termimad::{FmtText, MadSkin};

use crate::theme::ColorScheme;

fn skin_for(scheme: ColorScheme) -> MadSkin {
    match scheme {
        ColorScheme::Light => MadSkin::default_light(),
        ColorScheme::Dark => MadSkin::default_dark(),
    }
}

/// Render markdown to a styled string, wrapped to the terminal width.
pub fn render(markdown: &str, scheme: ColorScheme) -> String {
    let (width, _) = termimad::terminal_size();
    let skin = skin_for(scheme);
    FmtText::from(&skin, markdown, Some(width as usize)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_at(markdown: &str, scheme: ColorScheme, width: usize) -> String {
        FmtText::from(&skin_for(scheme), markdown, Some(width)).to_string()
    }

    #[test]
    fn headings_and_steps_survive_rendering() {
        let out = render_at(
            "# How To Tie a Tie\n## Steps\n\n1. Drape the tie.",
            ColorScheme::Light,
            80,
        );
        assert!(out.contains("How To Tie a Tie"));
        assert!(out.contains("Steps"));
        assert!(out.contains("Drape the tie."));
    }

    #[test]
    fn both_skins_render_the_same_words() {
        let md = "**I'm sorry, but no.**";
        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            assert!(render_at(md, scheme, 80).contains("I'm sorry, but no."));
        }
    }
}
