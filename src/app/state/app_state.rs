use super::{UiState, ViewState};
use crate::app::loader::LoadJob;
use crate::core::{Document, LoadReport, SelectionController};
use crate::kernel::{MeshKernel, ViewerKernel};
use crate::shared::ViewerOptions;
use std::sync::Arc;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuelles Dokument (Record Store, Shape Registry, Tree Index)
    pub document: Document,
    /// Selektions-Zustandsmaschine
    pub selection: SelectionController,
    /// Laufender Ladevorgang
    pub load_job: Option<LoadJob>,
    /// Bericht des letzten erfolgreichen Ladevorgangs
    pub last_report: Option<LoadReport>,
    /// Geometrie-Kernel für Primitive und CAD-Transfer
    pub kernel: Arc<dyn ViewerKernel>,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Laufzeit-Optionen (Radien, Farben, Kamera)
    pub options: ViewerOptions,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(ViewerOptions::default())
    }

    /// Erstellt einen leeren App-State mit den angegebenen Optionen.
    pub fn with_options(options: ViewerOptions) -> Self {
        Self {
            document: Document::new(options.palette()),
            selection: SelectionController::new(),
            load_job: None,
            last_report: None,
            kernel: Arc::new(MeshKernel::new(options.tessellation())),
            view: ViewState::new(),
            ui: UiState::new(),
            options,
            show_options_dialog: false,
            should_exit: false,
        }
    }

    /// Gibt `true` zurück, solange ein Ladevorgang läuft.
    pub fn is_loading(&self) -> bool {
        self.load_job.is_some()
    }

    /// Gibt die Anzahl der Nodes zurück (für UI-Anzeige)
    pub fn node_count(&self) -> usize {
        self.document.records.node_count()
    }

    /// Gibt die Anzahl der Links zurück (für UI-Anzeige)
    pub fn link_count(&self) -> usize {
        self.document.records.link_count()
    }

    /// Gibt die Anzahl der registrierten Shapes zurück (für UI-Anzeige)
    pub fn shape_count(&self) -> usize {
        self.document.registry.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
