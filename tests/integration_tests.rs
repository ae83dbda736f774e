use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use filetrap::{calculate_gauge, logger, Options};

#[test]
fn test_default_options() {
    let options = filetrap::cli::parse_args(Vec::new()).expect("parse");
    assert_eq!(options, Options::default());
    assert!(options.run_as_daemon);
    assert!(options.close_std_handles);
    assert_eq!(options.log_level, 0);
}

#[test]
fn test_console_workaround_scenario() {
    let args = ["-c", "-w", "-l", "5"].iter().map(|t| t.to_string());
    let options = filetrap::cli::parse_args(args).expect("parse");
    assert!(!options.run_as_daemon);
    assert!(!options.close_std_handles);
    assert_eq!(options.log_level, 5);
    // Threshold 5 silences both sinks, even for a level-0 record.
    assert_eq!(
        logger::threshold_filter(options.log_level),
        log::LevelFilter::Off
    );
}

#[test]
fn test_gauge_end_to_end_values() {
    assert_eq!(calculate_gauge(0), 64);
    assert_eq!(calculate_gauge(96), 96);
    assert_eq!(calculate_gauge(101), 100);
}

#[test]
fn test_console_mode_binary_polls_until_killed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut child = Command::new(env!("CARGO_BIN_EXE_filetrap"))
        .args(["-c", "-w"])
        .current_dir(dir.path())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn filetrap");

    // The loop logs its first poll immediately after the three opens.
    let log_path = dir.path().join("filetrap.log");
    let deadline = Instant::now() + Duration::from_secs(10);
    let mut log = String::new();
    while Instant::now() < deadline {
        log = std::fs::read_to_string(&log_path).unwrap_or_default();
        if log.contains("sent 64 to driver") {
            break;
        }
        std::thread::sleep(Duration::from_millis(100));
    }

    child.kill().expect("kill filetrap");
    let _ = child.wait();

    assert!(log.contains("begin business logic"), "log was: {}", log);
    assert!(log.contains("open sysfile returned"), "log was: {}", log);
    assert!(log.contains("sent 64 to driver"), "log was: {}", log);
    assert!(dir.path().join("filesys.txt").exists());
    assert!(dir.path().join("fileout.txt").exists());
}
