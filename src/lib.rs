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

pub mod configuration;
pub mod database;
pub mod lint_stubs;

pub use configuration::Configuration;
pub use database::Entry;
pub use lint_stubs::BuildEnvironment;
