// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Input and output helpers for meal-score
// ABOUTME: Reads JSON from a file or stdin and prints JSON to stdout

use mealscore::errors::{AppError, AppResult};
use serde::Serialize;
use std::path::Path;
use std::{fs, io};
use tracing::debug;

/// Read the whole input from `path`, or stdin when no path is given
pub fn read_input(path: Option<&Path>) -> AppResult<String> {
    let body = match path {
        Some(path) => {
            debug!("Reading input from {}", path.display());
            fs::read_to_string(path).map_err(|e| {
                AppError::from(e).with_resource_id(path.display().to_string())
            })?
        }
        None => {
            debug!("Reading input from stdin");
            io::read_to_string(io::stdin())?
        }
    };

    if body.trim().is_empty() {
        return Err(AppError::invalid_input("Input is empty; expected JSON"));
    }
    Ok(body)
}

/// Print a value as JSON on stdout
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> AppResult<()> {
    let body = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|e| AppError::serialization(format!("Failed to encode output: {e}")).with_source(e))?;
    println!("{body}");
    Ok(())
}
