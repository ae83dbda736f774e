// src/lib.rs
//! Filetrap core library
//!
//! A deliberately buggy little daemon: it detaches by forking, closes
//! the standard handles without opening replacements, and then opens its
//! working files, which silently inherit descriptor slots 0 through 2.
//! The library half exists so the individual pieces can be exercised by
//! tests.

pub mod cli;
pub mod core;
pub mod utils;

// Re-export core functionality
pub use crate::core::{
    business::{run_business_loop, WorkingPaths, DEVICE_FILE, OUTPUT_FILE, SYS_FILE},
    daemon::{close_standard_handles, daemonize},
    gauge::{calculate_gauge, DEFAULT_READING, GAUGE_MASK},
    options::{Options, OPT_CLOSE_STD_HANDLES, OPT_RUN_AS_DAEMON},
};

pub use crate::utils::{
    error::{FiletrapError, Result},
    logger,
};
