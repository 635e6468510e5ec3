// Copyright 2019 Leonardo Schwarz <mail@leoschwarz.com>
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::PathBuf;
use std::process;

use anyhow::{Context as _, Result};
use clap::Parser;

use xpath_eval::DebugSettings;

/// Write an example debug settings file and read it back.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// File the settings are written to.
    #[arg(default_value = "test.xml")]
    output: PathBuf,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let failure = !matches!(
                err.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            );
            let _ = err.print();
            if failure {
                process::exit(-1);
            }
            return;
        }
    };

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err:#}");
        process::exit(-1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let settings = DebugSettings {
        file: "debug.log".to_string(),
        level: 2,
        modules: ["Admin", "Finance", "HR"]
            .iter()
            .map(|m| m.to_string())
            .collect(),
    };

    settings
        .save(&cli.output)
        .with_context(|| format!("unable to write settings to \"{}\"", cli.output.display()))?;
    println!("Wrote {}", cli.output.display());

    let restored = DebugSettings::load(&cli.output)
        .with_context(|| format!("unable to read settings from \"{}\"", cli.output.display()))?;
    println!("Restored file: {}", restored.file);
    println!("Restored level: {}", restored.level);
    println!(
        "Restored modules: {}",
        restored.modules.into_iter().collect::<Vec<_>>().join(", ")
    );
    Ok(())
}
