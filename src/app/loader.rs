//! Ladevorgänge: Dispatch nach Dateiendung und Hintergrund-Jobs.
//!
//! Ein Job baut ein komplett neues [`Document`] auf einem Worker-Thread.
//! Der UI-Thread sieht es erst, wenn der Job fertig ist, und tauscht es
//! dann als Ganzes ein.

use crate::cad::import_cad;
use crate::core::{Document, JobProgress, LoadError, LoadMonitor, LoadReport, LoadSettings};
use crate::kernel::{CadFormat, ViewerKernel};
use crate::sheet::{is_sheet_path, load_spreadsheet};
use crate::xml::{is_xml_path, load_network_xml};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread::JoinHandle;

/// Ergebnis eines Ladevorgangs
pub type LoadResult = Result<(Document, LoadReport), LoadError>;

/// Lädt eine Datei passend zu ihrer Endung.
///
/// Tabellen (xlsx/xlsm/xls/ods), Netzwerk-XML und CAD (step/stp/iges/igs).
pub fn load_document(
    path: &Path,
    kernel: &dyn ViewerKernel,
    settings: LoadSettings,
    monitor: &dyn LoadMonitor,
) -> LoadResult {
    if is_sheet_path(path) {
        load_spreadsheet(path, kernel, settings, monitor)
    } else if is_xml_path(path) {
        load_network_xml(path, kernel, settings, monitor)
    } else if let Some(format) = CadFormat::from_path(path) {
        import_cad(path, format, kernel, settings, monitor)
    } else {
        Err(LoadError::UnsupportedFormat(path.to_path_buf()))
    }
}

/// Gibt `true` zurück, wenn die Endung von einem Loader unterstützt wird.
pub fn is_supported_path(path: &Path) -> bool {
    is_sheet_path(path) || is_xml_path(path) || CadFormat::from_path(path).is_some()
}

/// Laufender Hintergrund-Ladevorgang
pub struct LoadJob {
    path: PathBuf,
    progress: Arc<JobProgress>,
    receiver: Receiver<LoadResult>,
    handle: Option<JoinHandle<()>>,
}

impl LoadJob {
    /// Startet den Ladevorgang auf einem eigenen Thread.
    pub fn spawn(
        path: PathBuf,
        kernel: Arc<dyn ViewerKernel>,
        settings: LoadSettings,
    ) -> anyhow::Result<Self> {
        let progress = Arc::new(JobProgress::new());
        let (tx, rx) = mpsc::channel();

        let worker_path = path.clone();
        let worker_progress = Arc::clone(&progress);
        let handle = std::thread::Builder::new()
            .name("load-job".into())
            .spawn(move || {
                let result = load_document(
                    &worker_path,
                    kernel.as_ref(),
                    settings,
                    worker_progress.as_ref(),
                );
                // Empfänger weg = Job wurde verworfen
                let _ = tx.send(result);
            })?;

        log::info!("Lade-Job gestartet: {}", path.display());
        Ok(Self {
            path,
            progress,
            receiver: rx,
            handle: Some(handle),
        })
    }

    /// Quelldatei des Jobs.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Geteilter Fortschritt (für die Fortschrittsanzeige).
    pub fn progress(&self) -> &JobProgress {
        &self.progress
    }

    /// Fordert den kooperativen Abbruch an.
    pub fn cancel(&self) {
        self.progress.request_cancel();
    }

    /// Gibt `true` zurück, wenn ein Abbruch angefordert wurde.
    pub fn is_cancel_requested(&self) -> bool {
        self.progress.is_cancel_requested()
    }

    /// Prüft ohne Blockieren, ob der Job fertig ist.
    pub fn poll(&mut self) -> Option<LoadResult> {
        let result = match self.receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(LoadError::Unexpected(anyhow::anyhow!(
                "Lade-Thread wurde ohne Ergebnis beendet"
            ))),
        };
        self.join();
        Some(result)
    }

    /// Wartet blockierend auf das Ergebnis.
    pub fn wait(mut self) -> LoadResult {
        let result = self.receiver.recv().unwrap_or_else(|_| {
            Err(LoadError::Unexpected(anyhow::anyhow!(
                "Lade-Thread wurde ohne Ergebnis beendet"
            )))
        });
        self.join();
        result
    }

    fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("Lade-Thread ist abgestürzt: {}", self.path.display());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Unmonitored;
    use crate::kernel::MeshKernel;

    #[test]
    fn test_unknown_extension_is_unsupported() {
        let result = load_document(
            Path::new("network.csv"),
            &MeshKernel::default(),
            LoadSettings::default(),
            &Unmonitored,
        );
        assert!(matches!(result, Err(LoadError::UnsupportedFormat(_))));
        assert!(!is_supported_path(Path::new("network.csv")));
        assert!(is_supported_path(Path::new("NETWORK.XLSX")));
        assert!(is_supported_path(Path::new("part.stp")));
    }

    #[test]
    fn test_missing_file_is_reported_by_job() {
        let job = LoadJob::spawn(
            PathBuf::from("/nonexistent/network.xml"),
            Arc::new(MeshKernel::default()),
            LoadSettings::default(),
        )
        .expect("Thread sollte startbar sein");
        assert!(matches!(job.wait(), Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_job_builds_document_from_xml() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis sollte erstellbar sein");
        let path = dir.path().join("net.xml");
        std::fs::write(
            &path,
            r#"<Networks><Net name="N"><SubNet name="S"><Segement name="G">
                <Network name="W"><StartPoint name="A" x="0" y="0" z="0"/><EndPoint name="B" x="100" y="0" z="0"/></Network>
            </Segement></SubNet></Net></Networks>"#,
        )
        .expect("XML sollte schreibbar sein");

        let job = LoadJob::spawn(path, Arc::new(MeshKernel::default()), LoadSettings::default())
            .expect("Thread sollte startbar sein");
        let (doc, report) = job.wait().expect("Laden sollte gelingen");
        assert_eq!(report.links, 1);
        assert_eq!(doc.records.node_count(), 2);
        // 1 Link + 2 Nodes
        assert_eq!(doc.registry.len(), 3);
    }
}
