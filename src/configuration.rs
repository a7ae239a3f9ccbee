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

use std::path::PathBuf;

use serde::Deserialize;

// Represents the tool configuration.
//
// Every field defaults to the firmware repository's conventions, so an
// absent or empty configuration file reproduces the canonical output.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct Configuration {
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub compilation: Compilation,
}

// Where the project keeps things, relative to the project root.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Layout {
    #[serde(default = "Layout::default_source_dir")]
    pub source_dir: PathBuf,
    #[serde(default = "Layout::default_output")]
    pub output: PathBuf,
    #[serde(default = "Layout::default_lint_stub_header")]
    pub lint_stub_header: PathBuf,
}

impl Layout {
    fn default_source_dir() -> PathBuf {
        PathBuf::from("src")
    }

    fn default_output() -> PathBuf {
        PathBuf::from("compile_commands.json")
    }

    fn default_lint_stub_header() -> PathBuf {
        PathBuf::from("patches/cores/teensy4/lint_stubs.h")
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            source_dir: Layout::default_source_dir(),
            output: Layout::default_output(),
            lint_stub_header: Layout::default_lint_stub_header(),
        }
    }
}

// Mirrors the flags the firmware build uses on every translation unit.
//
// This is not the real toolchain invocation; it carries just enough of the
// Teensy defines and stub includes for clangd to navigate the tree.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Compilation {
    #[serde(default = "Compilation::default_compiler")]
    pub compiler: String,
    #[serde(default = "Compilation::default_standard")]
    pub standard: String,
    #[serde(default = "Compilation::default_defines")]
    pub defines: Vec<String>,
    #[serde(default = "Compilation::default_include_dirs")]
    pub include_dirs: Vec<PathBuf>,
    #[serde(default = "Compilation::default_forced_includes")]
    pub forced_includes: Vec<PathBuf>,
    #[serde(default = "Compilation::default_unit_suffix")]
    pub unit_suffix: String,
}

impl Compilation {
    fn default_compiler() -> String {
        String::from("clang++")
    }

    fn default_standard() -> String {
        String::from("gnu++14")
    }

    fn default_defines() -> Vec<String> {
        vec![
            String::from("USB_AUDIO"),
            String::from("ARDUINO_TEENSY41"),
            String::from("HORIZON_BUILD_MAIN"),
        ]
    }

    fn default_include_dirs() -> Vec<PathBuf> {
        vec![
            PathBuf::from("patches/cores/teensy4"),
            PathBuf::from("src"),
        ]
    }

    fn default_forced_includes() -> Vec<PathBuf> {
        vec![
            PathBuf::from("stdint.h"),
            PathBuf::from("patches/cores/teensy4/lint_stubs.h"),
        ]
    }

    fn default_unit_suffix() -> String {
        String::from("cpp")
    }
}

impl Default for Compilation {
    fn default() -> Self {
        Compilation {
            compiler: Compilation::default_compiler(),
            standard: Compilation::default_standard(),
            defines: Compilation::default_defines(),
            include_dirs: Compilation::default_include_dirs(),
            forced_includes: Compilation::default_forced_includes(),
            unit_suffix: Compilation::default_unit_suffix(),
        }
    }
}

pub mod io {
    use std::io::stdin;

    use thiserror::Error;

    use super::*;

    /// This error type encompasses any error that can be returned by this module.
    #[derive(Error, Debug)]
    pub enum Error {
        #[error("IO error")]
        IoError(#[from] std::io::Error),
        #[error("Syntax error")]
        SyntaxError(#[from] serde_json::Error),
    }

    /// Load the content of the given file and parse it as Configuration.
    pub fn from_file(file: &std::path::Path) -> Result<Configuration, Error> {
        let reader = std::fs::OpenOptions::new().read(true).open(file)?;
        let result = from_reader(reader)?;

        Ok(result)
    }

    pub fn from_stdin() -> Result<Configuration, Error> {
        let reader = stdin();
        let result = from_reader(reader)?;

        Ok(result)
    }

    /// Load the content of the given stream and parse it as Configuration.
    pub fn from_reader(reader: impl std::io::Read) -> Result<Configuration, serde_json::Error> {
        serde_json::from_reader(reader)
    }

}
