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

use std::env;
use std::path::Path;

/// The environment variable that opts a build into the lint stubs.
pub const OPT_IN_VARIABLE: &str = "HORIZON_LINT_STUBS";

// Editor profiles get the stubs without the explicit opt-in.
const PROFILE_PREFIXES: [&str; 2] = ["lint", "clangd"];

/// The slice of the host build environment this hook is allowed to touch.
///
/// The host owns the full environment; it only hands out the two flag
/// collections, for appending.
pub trait BuildEnvironment {
    fn append_c_flags(&mut self, flags: &[String]);
    fn append_cxx_flags(&mut self, flags: &[String]);
}

/// Represents which signal requested the stubs.
#[derive(Debug, PartialEq)]
pub enum Trigger {
    OptIn,
    ProfilePrefix(&'static str),
}

/// Decide whether the current build wants the lint stubs.
///
/// Anything other than the literal "1" counts as not set, never as an
/// error. Normal firmware builds fall through here and keep the vendor
/// headers unmodified.
pub fn stubs_requested(opt_in: Option<&str>, profile: &str) -> Option<Trigger> {
    if let Some("1") = opt_in {
        return Some(Trigger::OptIn);
    }
    for prefix in PROFILE_PREFIXES {
        if profile.starts_with(prefix) {
            return Some(Trigger::ProfilePrefix(prefix));
        }
    }
    None
}

/// Force-include the stub header for both the C and the C++ compile steps.
///
/// Plain append: duplicate forced-includes are harmless to the compiler,
/// so repeated invocations are not guarded against.
pub fn inject(environment: &mut dyn BuildEnvironment, header: &Path) {
    let flags = [String::from("-include"), header.display().to_string()];
    environment.append_c_flags(&flags);
    environment.append_cxx_flags(&flags);
}

/// Hook entry point for the host build system's configuration phase.
///
/// Reads the opt-in variable from the process environment and reports
/// whether the stubs were injected.
pub fn apply(environment: &mut dyn BuildEnvironment, profile: &str, header: &Path) -> bool {
    let opt_in = env::var(OPT_IN_VARIABLE).ok();
    match stubs_requested(opt_in.as_deref(), profile) {
        Some(trigger) => {
            log::debug!("lint stubs enabled, {:?} : {:?}", trigger, profile);
            inject(environment, header);
            true
        }
        None => {
            log::debug!("lint stubs not requested : {:?}", profile);
            false
        }
    }
}

#[cfg(test)]
mod test {
    use std::path::PathBuf;

    use lazy_static::lazy_static;

    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct MockEnvironment {
        c_flags: Vec<String>,
        cxx_flags: Vec<String>,
    }

    impl BuildEnvironment for MockEnvironment {
        fn append_c_flags(&mut self, flags: &[String]) {
            self.c_flags.extend_from_slice(flags);
        }

        fn append_cxx_flags(&mut self, flags: &[String]) {
            self.cxx_flags.extend_from_slice(flags);
        }
    }

    lazy_static! {
        static ref HEADER: PathBuf = PathBuf::from("patches/cores/teensy4/lint_stubs.h");
        static ref EXPECTED: Vec<String> = vec![
            String::from("-include"),
            String::from("patches/cores/teensy4/lint_stubs.h"),
        ];
    }

    #[test]
    fn test_opt_in_triggers_for_any_profile() {
        assert_eq!(Some(Trigger::OptIn), stubs_requested(Some("1"), "production"));
        assert_eq!(Some(Trigger::OptIn), stubs_requested(Some("1"), "teensy41"));
    }

    #[test]
    fn test_profile_prefixes_trigger_without_opt_in() {
        assert_eq!(
            Some(Trigger::ProfilePrefix("lint")),
            stubs_requested(None, "lint_editor")
        );
        assert_eq!(
            Some(Trigger::ProfilePrefix("clangd")),
            stubs_requested(None, "clangd_host")
        );
    }

    #[test]
    fn test_production_profile_is_left_alone() {
        assert_eq!(None, stubs_requested(None, "production"));
        assert_eq!(None, stubs_requested(None, "teensy41"));
    }

    #[test]
    fn test_malformed_opt_in_counts_as_not_set() {
        assert_eq!(None, stubs_requested(Some("0"), "production"));
        assert_eq!(None, stubs_requested(Some("yes"), "production"));
        assert_eq!(None, stubs_requested(Some(""), "production"));
        // Still falls through to the profile checks.
        assert_eq!(
            Some(Trigger::ProfilePrefix("lint")),
            stubs_requested(Some("0"), "lint_editor")
        );
    }

    #[test]
    fn test_inject_appends_to_both_collections() {
        let mut environment = MockEnvironment::default();

        inject(&mut environment, HEADER.as_path());

        assert_eq!(*EXPECTED, environment.c_flags);
        assert_eq!(*EXPECTED, environment.cxx_flags);
    }

    #[test]
    fn test_inject_keeps_existing_flags() {
        let mut environment = MockEnvironment {
            c_flags: vec![String::from("-Wall")],
            cxx_flags: vec![String::from("-fno-exceptions")],
        };

        inject(&mut environment, HEADER.as_path());

        assert_eq!(Some(&String::from("-Wall")), environment.c_flags.first());
        assert_eq!(
            Some(&String::from("-fno-exceptions")),
            environment.cxx_flags.first()
        );
        assert_eq!(3, environment.c_flags.len());
        assert_eq!(3, environment.cxx_flags.len());
    }

    #[test]
    fn test_inject_does_not_deduplicate() {
        let mut environment = MockEnvironment::default();

        inject(&mut environment, HEADER.as_path());
        inject(&mut environment, HEADER.as_path());

        assert_eq!(4, environment.c_flags.len());
        assert_eq!(4, environment.cxx_flags.len());
    }
}
