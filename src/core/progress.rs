//! Fortschritt und kooperativer Abbruch für Ladevorgänge.

use super::LoadError;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Wird von Ladevorgängen an jeder Iterationsgrenze (Zeile / Sub-Shape) aufgerufen.
pub trait LoadMonitor: Sync {
    /// Startet eine neue Phase mit `total` Schritten.
    fn begin(&self, phase: &str, total: usize);

    /// Meldet einen erledigten Schritt; `Err(Cancelled)` beendet den Ladevorgang.
    fn advance(&self) -> Result<(), LoadError>;
}

/// Monitor ohne Fortschrittsanzeige und ohne Abbruch (CLI-Start, Tests).
#[derive(Debug, Default, Clone, Copy)]
pub struct Unmonitored;

impl LoadMonitor for Unmonitored {
    fn begin(&self, _phase: &str, _total: usize) {}

    fn advance(&self) -> Result<(), LoadError> {
        Ok(())
    }
}

/// Zwischen UI-Thread und Worker geteilter Fortschritt.
#[derive(Debug, Default)]
pub struct JobProgress {
    done: AtomicUsize,
    total: AtomicUsize,
    cancel: AtomicBool,
    phase: Mutex<String>,
}

impl JobProgress {
    /// Erstellt einen neuen Fortschritt (0 / 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Fordert den Abbruch an; der Worker reagiert beim nächsten Schritt.
    pub fn request_cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    /// Gibt `true` zurück, wenn ein Abbruch angefordert wurde.
    pub fn is_cancel_requested(&self) -> bool {
        self.cancel.load(Ordering::Relaxed)
    }

    /// Erledigte und gesamte Schritte der aktuellen Phase.
    pub fn counts(&self) -> (usize, usize) {
        (
            self.done.load(Ordering::Relaxed),
            self.total.load(Ordering::Relaxed),
        )
    }

    /// Fortschritt der aktuellen Phase in `0.0..=1.0`.
    pub fn fraction(&self) -> f32 {
        let (done, total) = self.counts();
        if total == 0 {
            0.0
        } else {
            (done as f32 / total as f32).clamp(0.0, 1.0)
        }
    }

    /// Name der aktuellen Phase.
    pub fn phase(&self) -> String {
        self.phase
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }
}

impl LoadMonitor for JobProgress {
    fn begin(&self, phase: &str, total: usize) {
        if let Ok(mut current) = self.phase.lock() {
            *current = phase.to_string();
        }
        self.done.store(0, Ordering::Relaxed);
        self.total.store(total, Ordering::Relaxed);
    }

    fn advance(&self) -> Result<(), LoadError> {
        if self.is_cancel_requested() {
            return Err(LoadError::Cancelled);
        }
        self.done.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_counts_and_cancel() {
        let progress = JobProgress::new();
        progress.begin("Rows", 4);
        progress.advance().expect("kein Abbruch angefordert");
        progress.advance().expect("kein Abbruch angefordert");

        assert_eq!(progress.counts(), (2, 4));
        assert!((progress.fraction() - 0.5).abs() < f32::EPSILON);
        assert_eq!(progress.phase(), "Rows");

        progress.request_cancel();
        assert!(matches!(progress.advance(), Err(LoadError::Cancelled)));
        assert_eq!(progress.counts(), (2, 4));
    }

    #[test]
    fn test_unmonitored_never_cancels() {
        let monitor = Unmonitored;
        monitor.begin("x", 0);
        assert!(monitor.advance().is_ok());
    }
}
