use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};

pub const BRANCH_JSON: &str = r#"{
  "name": "Centro",
  "courts": [
    { "id": 1, "name": "Pista 1" }, { "id": 2, "name": "Pista 2" },
    { "id": 3, "name": "Pista 3" }, { "id": 4, "name": "Pista 4" },
    { "id": 5, "name": "Pista 5" }, { "id": 6, "name": "Pista 6" }
  ],
  "schedule": {
    "monday": [ { "start": "09:00", "end": "12:00" } ],
    "tue": [ { "start": "17:00", "end": "22:00" } ]
  },
  "bookings": [
    { "court_id": 2, "day": "monday", "start": "10:00", "end": "11:00", "label": "Lucia" },
    { "court_id": 6, "day": "monday", "start": "09:00", "end": "10:30" }
  ]
}"#;

pub fn binary_path() -> String {
    let raw = PathBuf::from(env!("CARGO_BIN_EXE_courtboard"));
    if raw.is_absolute() {
        return raw.to_string_lossy().to_string();
    }
    let from_manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(&raw);
    if from_manifest.exists() {
        return from_manifest.to_string_lossy().to_string();
    }
    raw.to_string_lossy().to_string()
}

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn make_temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "courtboard-{prefix}-{}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = fs::create_dir_all(&dir);
    dir
}

pub fn write_default_config(dir: &Path) {
    fs::write(dir.join("config.json"), "{}").unwrap();
}

pub fn write_branch(dir: &Path) {
    fs::write(dir.join("branch.json"), BRANCH_JSON).unwrap();
}

/// Temp dir with `config.json` and `branch.json` ready for a session.
pub fn session_dir(prefix: &str) -> PathBuf {
    let dir = make_temp_dir(prefix);
    write_default_config(&dir);
    write_branch(&dir);
    dir
}

pub fn run_with_args(dir: &Path, args: &[&str], input: &str) -> Output {
    let mut child = Command::new(binary_path())
        .current_dir(dir)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn binary");

    // The process may exit before reading stdin; a broken pipe is fine.
    let _ = child.stdin.as_mut().unwrap().write_all(input.as_bytes());

    child.wait_with_output().unwrap()
}

pub fn run_with_input(dir: &Path, input: &str) -> Output {
    run_with_args(dir, &[], input)
}

fn strip_ansi(s: &str) -> String {
    let mut out = Vec::with_capacity(s.len());
    let mut bytes = s.bytes().peekable();

    while let Some(b) = bytes.next() {
        if b == 0x1B && matches!(bytes.peek(), Some(b'[')) {
            let _ = bytes.next();
            for nb in bytes.by_ref() {
                if nb.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(b);
    }

    String::from_utf8_lossy(&out).into_owned()
}

/// Output with styling removed.
pub fn plain(buf: &[u8]) -> String {
    strip_ansi(&String::from_utf8_lossy(buf))
}

pub fn read_log_contents(dir: &Path) -> Option<String> {
    let logs_dir = dir.join("logs");
    let mut entries = fs::read_dir(&logs_dir).ok()?;
    let entry = entries.find_map(|e| e.ok())?;
    fs::read_to_string(entry.path()).ok()
}
