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

use std::fs;
use std::io::{self, Write as _};
use std::path::PathBuf;
use std::process;

use anyhow::{Context as _, Result};
use clap::Parser;

use xpath_eval::execute_xpath_expression;

/// Evaluate an XPath expression on an XML document.
///
/// The matched node set is printed to standard output, one line per
/// node in document order.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// XML document to load.
    #[arg(value_name = "xml-file")]
    xml_file: PathBuf,

    /// XPath expression to evaluate against the document.
    #[arg(value_name = "xpath-expr")]
    xpath_expr: String,

    /// Space separated list of "prefix=href" namespace bindings.
    #[arg(value_name = "known-ns-list")]
    namespaces: Option<String>,
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
    let xml = fs::read_to_string(&cli.xml_file)
        .with_context(|| format!("unable to read file \"{}\"", cli.xml_file.display()))?;

    let stdout = io::stdout();
    let mut output = stdout.lock();
    execute_xpath_expression(&xml, &cli.xpath_expr, cli.namespaces.as_deref(), &mut output)?;
    output.flush()?;
    Ok(())
}
