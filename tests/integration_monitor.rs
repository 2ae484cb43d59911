use std::fs;
use std::process::Command;

use tempfile::TempDir;
use valuewatch::alerts::{AlertSink, Beeper, Range, ToneError};
use valuewatch::config::{MonitorConfig, SourceConfig};
use valuewatch::watch::Monitor;

fn no_native_tone(_: u32, _: u32) -> Result<(), ToneError> {
    Err(ToneError::Unavailable)
}

struct Recorder {
    alerts: usize,
}

impl AlertSink for Recorder {
    fn alert(&mut self) {
        self.alerts += 1;
    }
}

#[tokio::test]
async fn test_file_change_produces_one_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reading.txt");
    fs::write(&path, "7.0").unwrap();

    let mut config = MonitorConfig::new(SourceConfig::File(path.clone()));
    config.range = Range::new(Some(0.0), Some(10.0));
    config.threshold = 0.0;

    let mut monitor = Monitor::new(&config, Recorder { alerts: 0 }, Vec::new());
    assert!(monitor.step().await.unwrap().is_none());

    fs::write(&path, "7.5").unwrap();
    let event = monitor.step().await.unwrap().expect("change should be reported");
    assert_eq!(event.old, 7.0);
    assert_eq!(event.new, 7.5);
    assert_eq!(monitor.alerts().alerts, 1);

    let out = String::from_utf8(monitor.into_output()).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with('['));
    assert!(lines[0].ends_with("] Value changed: 7.0 -> 7.5"));
    // "[YYYY-MM-DD HH:MM:SS] " prefix
    assert_eq!(lines[0].find(']'), Some(20));
}

#[tokio::test]
async fn test_repeated_values_report_only_moves() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reading.txt");
    let config = MonitorConfig::new(SourceConfig::File(path.clone()));

    let beeper = Beeper::new(Vec::new()).with_native(no_native_tone);
    let mut monitor = Monitor::new(&config, beeper, Vec::new());

    for value in ["1", "1", "2", "2", "3"] {
        fs::write(&path, value).unwrap();
        monitor.step().await.unwrap();
    }

    let out = String::from_utf8(monitor.into_output()).unwrap();
    assert_eq!(out.lines().count(), 2);
}

#[cfg(unix)]
#[tokio::test]
async fn test_command_source_round() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("n");
    fs::write(&path, "load: 0.50, 0.40").unwrap();

    let config = MonitorConfig::new(SourceConfig::Command(format!("cat '{}'", path.display())));
    let mut monitor = Monitor::new(&config, Recorder { alerts: 0 }, Vec::new());
    monitor.step().await.unwrap();
    assert_eq!(monitor.baseline(), Some(0.5));

    fs::write(&path, "load: 0.75, 0.40").unwrap();
    let event = monitor.step().await.unwrap().unwrap();
    assert_eq!((event.old, event.new), (0.5, 0.75));
}

#[test]
fn test_both_sources_exit_non_zero() {
    let status = Command::new(env!("CARGO_BIN_EXE_valuewatch"))
        .args(["--command", "echo 1", "--file", "/tmp/value"])
        .output()
        .unwrap()
        .status;
    assert!(!status.success());
}

#[test]
fn test_no_source_exits_non_zero() {
    let status = Command::new(env!("CARGO_BIN_EXE_valuewatch"))
        .args(["--interval", "1"])
        .output()
        .unwrap()
        .status;
    assert!(!status.success());
}

#[test]
fn test_invalid_interval_exits_before_loop() {
    let output = Command::new(env!("CARGO_BIN_EXE_valuewatch"))
        .args(["--file", "/tmp/value", "--interval", "0"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("interval"));
}

#[cfg(unix)]
mod running_binary {
    use std::fs;
    use std::path::Path;
    use std::process::{Child, Command, Output, Stdio};
    use std::thread;
    use std::time::Duration;

    use tempfile::TempDir;

    fn spawn(args: &[&std::ffi::OsStr], rust_log: Option<&str>) -> Child {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_valuewatch"));
        cmd.args(args);
        match rust_log {
            Some(level) => cmd.env("RUST_LOG", level),
            None => cmd.env_remove("RUST_LOG"),
        };
        cmd.stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap()
    }

    fn stop(mut child: Child) -> Output {
        child.kill().unwrap();
        child.wait_with_output().unwrap()
    }

    fn os(s: &str) -> &std::ffi::OsStr {
        std::ffi::OsStr::new(s)
    }

    fn file_args<'a>(path: &'a Path, extra: &[&'a str]) -> Vec<&'a std::ffi::OsStr> {
        let mut args = vec![os("--file"), path.as_os_str(), os("--interval"), os("0.1")];
        args.extend(extra.iter().map(|s| os(*s)));
        args
    }

    #[test]
    fn test_json_mode_stdout_is_pure_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reading");
        fs::write(&path, "1").unwrap();

        let child = spawn(&file_args(&path, &["--json"]), None);
        thread::sleep(Duration::from_millis(1000));
        fs::write(&path, "2").unwrap();
        thread::sleep(Duration::from_millis(1000));
        let output = stop(child);

        let stdout = String::from_utf8(output.stdout).unwrap();
        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(lines.len(), 1, "stdout was {stdout:?}");
        for line in lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(value["old"], 1.0);
            assert_eq!(value["new"], 2.0);
        }
        // The bell still rings, just not on stdout.
        assert!(output.stderr.contains(&0x07));
    }

    #[test]
    fn test_missing_file_is_reported_and_retried() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent");

        let mut child = spawn(&file_args(&path, &[]), Some("off"));
        thread::sleep(Duration::from_millis(1000));
        assert!(child.try_wait().unwrap().is_none(), "monitor exited on a source failure");
        let output = stop(child);

        // RUST_LOG=off does not hide source failures.
        let stderr = String::from_utf8_lossy(&output.stderr);
        let message = format!("File '{}' not found.", path.display());
        assert!(stderr.matches(&message).count() >= 2, "stderr was {stderr:?}");
    }

    #[test]
    fn test_verbose_with_non_utf8_path_keeps_running() {
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join(std::ffi::OsStr::from_bytes(b"v\xff"));
        fs::write(&path, "3").unwrap();

        let mut child = spawn(&file_args(&path, &["--verbose"]), None);
        thread::sleep(Duration::from_millis(1000));
        let status = child.try_wait().unwrap();
        let output = stop(child);
        assert!(
            status.is_none(),
            "exited with {status:?}: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
}
