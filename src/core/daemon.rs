// src/core/daemon.rs
//! Process detachment
//!
//! `daemonize` forks and lets the parent half exit, then optionally
//! closes the standard handles of the surviving child. No replacement
//! handles are opened for the closed slots; the files the child opens
//! next inherit them. That ordering is the pitfall this program exists
//! to demonstrate.

use log::info;
use nix::unistd::{fork, ForkResult};

use crate::utils::error::{FiletrapError, Result};

/// Detaches into the background. The parent process exits with status 0
/// immediately; the child continues and, when asked, drops descriptors
/// 0 through 2. A failed fork is fatal to startup.
pub fn daemonize(close_std_handles: bool) -> Result<()> {
    match unsafe { fork() } {
        Ok(ForkResult::Parent { .. }) => std::process::exit(0),
        Ok(ForkResult::Child) => {}
        Err(e) => {
            return Err(FiletrapError::DaemonError(format!("fork failed: {}", e)));
        }
    }

    if close_std_handles {
        close_standard_handles();
    }

    Ok(())
}

/// Closes descriptors 0, 1 and 2, logging each one first. Nothing is
/// reopened in their place, so the lowest-free-number allocation policy
/// hands the slots to whatever gets opened next.
pub fn close_standard_handles() {
    for fd in 0..=libc::STDERR_FILENO {
        info!("standard handle {} is being closed", fd);
        unsafe { libc::close(fd) };
    }
}
