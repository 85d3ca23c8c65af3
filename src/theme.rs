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

//! Light/dark preference, read from the XDG settings portal.

use anyhow::{Context, Result, bail};
use std::process::Command;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

/// Ask the desktop settings portal for the preferred color scheme.
///
/// Failure here is non-fatal by contract: callers log and fall back to
/// [`ColorScheme::Light`].
pub fn detect() -> Result<ColorScheme> {
    let output = Command::new("busctl")
        .args([
            "--user",
            "call",
            "org.freedesktop.portal.Desktop",
            "/org/freedesktop/portal/desktop",
            "org.freedesktop.portal.Settings",
            "Read",
            "ss",
            "org.freedesktop.appearance",
            "color-scheme",
        ])
        .output()
        .context("Could not invoke busctl to read the color scheme")?;

    if !output.status.success() {
        bail!("busctl exited with {}", output.status);
    }

    parse_scheme(&output.stdout)
}

/// The reply looks like `v u 1\n`; the byte before the trailing newline
/// carries the preference. `0` means no preference and `2` prefers light.
fn parse_scheme(stdout: &[u8]) -> Result<ColorScheme> {
    if stdout.len() < 2 {
        bail!(
            "unexpected settings reply: {:?}",
            String::from_utf8_lossy(stdout)
        );
    }

    match stdout[stdout.len() - 2] {
        b'0' | b'2' => Ok(ColorScheme::Light),
        b'1' => Ok(ColorScheme::Dark),
        _ => Ok(ColorScheme::Light),
    }
}
