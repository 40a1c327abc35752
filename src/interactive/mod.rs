//
//  teamcity-client
//  interactive/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Terminal prompts used by `tc auth login`.
//!
//! Prompts require an attached terminal; scripts should pass `--username`
//! and `TC_PASSWORD` instead.

pub mod prompt;

pub use prompt::*;

/// Returns `true` when stdout is attached to a terminal.
pub fn is_interactive() -> bool {
    console::user_attended()
}
