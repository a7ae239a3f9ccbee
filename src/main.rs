/*  Copyright (C) 2022-2026 by the Horizon authors
    This file is part of Horizon.

    Horizon is an audio processing firmware for Teensy microcontrollers.

    Horizon is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    Horizon is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <http://www.gnu.org/licenses/>.
 */

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{arg, command, ArgAction};
use log::LevelFilter;
use path_absolutize::Absolutize;
use simple_logger::SimpleLogger;

use horizon_devtools::configuration::{self, Configuration};
use horizon_devtools::database;

fn main() -> Result<()> {
    let arguments = Arguments::parse().validate()?;
    let application = Application::configure(arguments)?;
    application.run()?;

    Ok(())
}

#[derive(Debug, PartialEq)]
struct Arguments {
    root: Option<String>,
    output: Option<String>,
    config: Option<String>,
    verbose: u8,
}

impl Arguments {
    fn parse() -> Self {
        let matches = command!()
            .args(&[
                arg!(-r --root <DIR> "Path of the project root")
                    .required(false),
                arg!(-o --output <FILE> "Path of the result file")
                    .required(false),
                arg!(-c --config <FILE> "Path of the config file")
                    .required(false),
                arg!(-v --verbose ... "Sets the level of verbosity")
                    .action(ArgAction::Count),
            ])
            .get_matches();

        Arguments {
            root: matches.get_one::<String>("root")
                .map(String::to_string),
            output: matches.get_one::<String>("output")
                .map(String::to_string),
            config: matches.get_one::<String>("config")
                .map(String::to_string),
            verbose: matches.get_count("verbose"),
        }
    }

    fn validate(self) -> Result<Self> {
        if self.output.as_deref() == Some("-") {
            return Err(anyhow!("Can't write the database to the standard output."));
        }

        Ok(self)
    }

    fn prepare_logging(&self) -> Result<()> {
        let level = match &self.verbose {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            3 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        let mut logger = SimpleLogger::new()
            .with_level(level);
        if level <= LevelFilter::Debug {
            logger = logger.with_local_timestamps()
        }
        logger.init()?;

        Ok(())
    }

    fn configuration(&self) -> Result<Configuration> {
        let configuration = match self.config.as_deref() {
            Some("-") | Some("/dev/stdin") =>
                configuration::io::from_stdin()
                    .context("Failed to read configuration from stdin")?,
            Some(file) =>
                configuration::io::from_file(Path::new(file))
                    .with_context(|| format!("Failed to read configuration from file: {}", file))?,
            None =>
                Configuration::default(),
        };
        Ok(configuration)
    }
}

#[derive(Debug, PartialEq)]
struct Application {
    arguments: Arguments,
    configuration: Configuration,
}

impl Application {
    fn configure(arguments: Arguments) -> Result<Self> {
        arguments.prepare_logging()?;

        let configuration = arguments.configuration()?;

        Ok(Application { arguments, configuration })
    }

    fn run(self) -> Result<()> {
        let root = match self.arguments.root.as_deref() {
            Some(dir) => PathBuf::from(dir),
            None => std::env::current_dir()?,
        };
        let root = root.absolutize()?.to_path_buf();
        log::debug!("Project root: {:?}", root);

        let source_dir = root.join(&self.configuration.layout.source_dir);
        let units = database::scan(&source_dir, &self.configuration.compilation.unit_suffix)
            .with_context(|| format!("Failed to scan source directory: {}", source_dir.display()))?;

        let entries = database::entries(&root, &units, &self.configuration.compilation)
            .context("Failed to assemble compilation database entries")?;
        for entry in &entries {
            log::debug!("{:?}", entry);
        }

        let output = match self.arguments.output.as_deref() {
            Some(file) => PathBuf::from(file),
            None => root.join(&self.configuration.layout.output),
        };
        database::write(&output, &entries)
            .with_context(|| format!("Failed to write file: {}", output.display()))?;

        println!("Wrote {} with {} translation units", output.display(), entries.len());

        Ok(())
    }
}
