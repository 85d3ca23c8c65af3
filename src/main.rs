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

//! `howto`: ask for step-by-step instructions, rendered as terminal markdown.

mod cli;
mod commands;
mod constants;
mod credentials;
mod format;
mod llm;
mod render;
mod theme;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::constants::API_URL_ENV;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version go to stdout with a zero exit; every
            // argument-shape error exits 1, on stderr.
            err.print()?;
            if err.use_stderr() {
                std::process::exit(1);
            }
            return Ok(());
        }
    };

    match (cli.command, cli.task) {
        (Some(Commands::Api { key }), _) => commands::cmd_set_key(&key),
        (None, Some(task)) => {
            let endpoint = std::env::var(API_URL_ENV).ok();
            commands::cmd_ask(&task, endpoint)
        }
        (None, None) => {
            anyhow::bail!("No operation found with this amount of args, use `howto --help`")
        }
    }
}
