//! Logger-Initialisierung: Konsole plus Log-Datei pro Lauf unter `logs/`.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Verzeichnis der Lauf-Logs (relativ zum Arbeitsverzeichnis).
pub const LOG_DIR: &str = "logs";
/// Anzahl der aufbewahrten Lauf-Logs.
pub const KEEP_LOG_FILES: usize = 10;

/// Dateiname des Logs für einen Startzeitpunkt.
pub fn log_file_name(unix_secs: u64) -> String {
    format!("app_{unix_secs}.log")
}

fn log_timestamp(name: &str) -> Option<u64> {
    name.strip_prefix("app_")?.strip_suffix(".log")?.parse().ok()
}

/// Löscht alle bis auf die `keep` neuesten Lauf-Logs in `dir`.
///
/// Gibt die Anzahl gelöschter Dateien zurück. Fremde Dateien bleiben unberührt.
pub fn prune_old_logs(dir: &Path, keep: usize) -> std::io::Result<usize> {
    let mut logs: Vec<(u64, PathBuf)> = std::fs::read_dir(dir)?
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let name = entry.file_name();
            log_timestamp(&name.to_string_lossy()).map(|ts| (ts, entry.path()))
        })
        .collect();
    if logs.len() <= keep {
        return Ok(0);
    }

    logs.sort_by(|a, b| b.0.cmp(&a.0));
    let mut removed = 0;
    for (_, path) in logs.drain(keep..) {
        std::fs::remove_file(&path)?;
        removed += 1;
    }
    Ok(removed)
}

/// Legt die Log-Datei dieses Laufs an und räumt alte Logs auf.
fn open_run_log(dir: &Path) -> std::io::Result<(File, PathBuf)> {
    std::fs::create_dir_all(dir)?;
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let path = dir.join(log_file_name(now));
    let file = File::create(&path)?;
    // Die eben angelegte Datei ist die neueste und bleibt daher erhalten.
    prune_old_logs(dir, KEEP_LOG_FILES)?;
    Ok((file, path))
}

/// Schreibt jede Log-Zeile auf stderr und in die Datei.
struct TeeWriter {
    file: File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        std::io::stderr().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        std::io::stderr().flush()?;
        self.file.flush()
    }
}

/// Initialisiert `env_logger`.
///
/// `debug` hebt den Standard-Level von `Info` auf `Debug`; `RUST_LOG` hat
/// weiterhin Vorrang. Gibt den Pfad der Log-Datei zurück (oder `None`, wenn
/// nur auf die Konsole geloggt wird).
pub fn init(debug: bool) -> anyhow::Result<Option<PathBuf>> {
    let level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();

    match open_run_log(Path::new(LOG_DIR)) {
        Ok((file, path)) => {
            builder.target(env_logger::Target::Pipe(Box::new(TeeWriter { file })));
            builder.try_init()?;
            log::info!("Log-Datei: {}", path.display());
            Ok(Some(path))
        }
        Err(e) => {
            builder.try_init()?;
            log::warn!("Log-Datei konnte nicht angelegt werden, nur Konsole: {}", e);
            Ok(None)
        }
    }
}
