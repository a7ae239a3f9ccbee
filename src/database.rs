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

use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::configuration::Compilation;

/// Represents one translation unit of the compilation database.
///
/// Field order is the output field order; editors diff the generated
/// document, so it has to stay stable.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Entry {
    pub directory: PathBuf,
    pub file: PathBuf,
    pub arguments: Vec<String>,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error")]
    IoError(#[from] std::io::Error),
    #[error("encode error")]
    OsString,
    #[error("Syntax error")]
    SyntaxError(#[from] serde_json::Error),
}

/// Enumerate the translation units directly under the source directory.
///
/// The result is sorted, so two runs over an unchanged tree produce the
/// same document.
pub fn scan(source_dir: &Path, suffix: &str) -> Result<Vec<PathBuf>, Error> {
    let mut units = vec![];
    for candidate in fs::read_dir(source_dir)? {
        let candidate = candidate?;
        if !candidate.file_type()?.is_file() {
            continue;
        }
        let path = candidate.path();
        if path.extension().map_or(false, |extension| extension == suffix) {
            units.push(path);
        }
    }
    units.sort();

    log::debug!("Found {} translation units in {:?}", units.len(), source_dir);
    Ok(units)
}

/// The invocation prefix shared by every translation unit.
pub fn common_arguments(config: &Compilation) -> Result<Vec<String>, Error> {
    let mut arguments = vec![
        config.compiler.clone(),
        format!("-std={}", config.standard),
    ];
    for define in &config.defines {
        arguments.push(format!("-D{}", define));
    }
    for dir in &config.include_dirs {
        arguments.push(String::from("-I"));
        arguments.push(into_string(dir)?);
    }
    for header in &config.forced_includes {
        arguments.push(String::from("-include"));
        arguments.push(into_string(header)?);
    }
    Ok(arguments)
}

/// Assemble the database entries for the given units.
///
/// The unit's own path is always the final argument.
pub fn entries(root: &Path, units: &[PathBuf], config: &Compilation) -> Result<Vec<Entry>, Error> {
    let common = common_arguments(config)?;
    units
        .iter()
        .map(|unit| {
            let mut arguments = common.clone();
            arguments.push(into_string(unit)?);

            Ok(Entry {
                directory: root.to_path_buf(),
                file: unit.clone(),
                arguments,
            })
        })
        .collect()
}

/// Write the document to the output path, replacing any previous content.
///
/// The content goes to a temporary file first, so a failed run never leaves
/// a half-written database behind.
pub fn write(output: &Path, entries: &[Entry]) -> Result<(), Error> {
    let temp = format!("{}.tmp", output.display());
    // Create scope for the file, so it will be closed when the scope is over.
    {
        let file = File::create(&temp)?;
        let mut buffer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut buffer, entries)?;
        buffer.flush()?;
    }
    fs::rename(&temp, output)?;

    Ok(())
}

fn into_string(path: &Path) -> Result<String, Error> {
    path.to_path_buf()
        .into_os_string()
        .into_string()
        .map_err(|_| Error::OsString)
}
