// src/core/business.rs
//! Device polling loop
//!
//! Opens the three working files and then exchanges two bytes with the
//! device once a second, forever. These opens happen after daemonization,
//! so when the standard handles were closed beforehand they are the opens
//! that inherit slots 0, 1 and 2.

use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::os::unix::io::AsRawFd;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use log::{error, info};

use crate::core::gauge::calculate_gauge;
use crate::utils::numeric::leading_i32;

/// Fixed-named system file, truncated on every run.
pub const SYS_FILE: &str = "filesys.txt";

/// Device path; a character device in realistic deployment.
pub const DEVICE_FILE: &str = "/dev/huadeng0";

/// Fixed-named output file; opened but never written by the loop.
pub const OUTPUT_FILE: &str = "fileout.txt";

/// Scratch buffer for the two-byte device exchange. The gauge never
/// exceeds 100, so three digits and a terminating NUL fit with room to
/// spare.
pub const EXCHANGE_BUFFER_SIZE: usize = 10;

/// The three paths the loop works against.
#[derive(Debug, Clone)]
pub struct WorkingPaths {
    pub sys: PathBuf,
    pub device: PathBuf,
    pub output: PathBuf,
}

impl Default for WorkingPaths {
    fn default() -> Self {
        Self {
            sys: SYS_FILE.into(),
            device: DEVICE_FILE.into(),
            output: OUTPUT_FILE.into(),
        }
    }
}

/// Runs the polling loop. There is no exit condition; the handles are
/// only released when the process is killed.
pub fn run_business_loop(paths: &WorkingPaths) -> ! {
    info!("begin business logic");

    let _sys = open_working_file("sysfile", &paths.sys, true);
    let mut device = open_working_file("device file", &paths.device, false);
    let _output = open_working_file("outfile", &paths.output, false);

    let mut buffer = [0u8; EXCHANGE_BUFFER_SIZE];
    loop {
        poll_device(device.as_mut(), &mut buffer);
        thread::sleep(Duration::from_secs(1));
    }
}

/// Opens one working file read-write, logging the descriptor it landed
/// on. An open failure is reported and tolerated; the loop runs with
/// whatever handles it got.
fn open_working_file(label: &str, path: &Path, truncate: bool) -> Option<File> {
    let result = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(truncate)
        .open(path);
    match result {
        Ok(file) => {
            info!("open {} returned {}", label, file.as_raw_fd());
            Some(file)
        }
        Err(e) => {
            info!(
                "open {} returned -1 with errno {}",
                label,
                e.raw_os_error().unwrap_or(0)
            );
            error!("open {} failed: {}", label, e);
            None
        }
    }
}

/// One poll: read a two-byte reading, compute the gauge, write the first
/// two bytes of its decimal form back to the device.
///
/// The buffer is not cleared between polls; a short or failed read
/// leaves earlier bytes in place and the parse sees them, exactly as a
/// reused C stack buffer would.
fn poll_device(device: Option<&mut File>, buffer: &mut [u8; EXCHANGE_BUFFER_SIZE]) {
    let mut device = device;

    if let Some(file) = device.as_deref_mut() {
        let _ = file.read(&mut buffer[..2]);
    }
    buffer[2] = 0;

    let reading = leading_i32(&buffer[..2]);
    let gauge = calculate_gauge(reading);

    let digits = gauge.to_string().into_bytes();
    buffer[..digits.len()].copy_from_slice(&digits);
    buffer[digits.len()] = 0;

    if let Some(file) = device.as_deref_mut() {
        let _ = file.write(&buffer[..2]);
    }
    info!("sent {} to driver", gauge);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_rw(path: &Path) -> File {
        OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .expect("open device stand-in")
    }

    #[test]
    fn test_poll_reads_computes_and_writes_back() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("device");
        std::fs::write(&path, "42").expect("seed device");

        let mut device = open_rw(&path);
        let mut buffer = [0u8; EXCHANGE_BUFFER_SIZE];
        poll_device(Some(&mut device), &mut buffer);

        // 42 & 100 == 32, appended at the shared read/write offset.
        let contents = std::fs::read(&path).expect("read back");
        assert_eq!(contents, b"4232");
    }

    #[test]
    fn test_zero_reading_falls_back_to_default_gauge() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("device");
        std::fs::write(&path, "0\n").expect("seed device");

        let mut device = open_rw(&path);
        let mut buffer = [0u8; EXCHANGE_BUFFER_SIZE];
        poll_device(Some(&mut device), &mut buffer);

        // 0 becomes 88, and 88 & 100 == 64; both digits go back.
        let contents = std::fs::read(&path).expect("read back");
        assert_eq!(contents, b"0\n64");
    }

    #[test]
    fn test_poll_survives_a_missing_device() {
        let mut buffer = [0u8; EXCHANGE_BUFFER_SIZE];
        poll_device(None, &mut buffer);
        assert_eq!(&buffer[..2], b"64");
    }

    #[test]
    fn test_stale_buffer_feeds_the_next_parse() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("device");
        std::fs::write(&path, "96").expect("seed device");

        let mut device = open_rw(&path);
        let mut buffer = [0u8; EXCHANGE_BUFFER_SIZE];
        poll_device(Some(&mut device), &mut buffer);
        // Reader is now at EOF; the second poll re-parses its own output.
        poll_device(Some(&mut device), &mut buffer);

        let contents = std::fs::read(&path).expect("read back");
        assert_eq!(contents, b"969696");
    }
}
