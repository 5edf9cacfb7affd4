use crate::core::{TreeNodeId, ViewPreset};
use crate::shared::ViewerOptions;
use std::path::PathBuf;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Datei-Öffnen-Dialog anzeigen
    RequestOpenFileDialog,
    /// Export-Dialog anzeigen
    RequestExportFileDialog,
    /// Datei als Hintergrund-Job laden
    StartLoad { path: PathBuf },
    /// Datei synchron laden
    LoadFileNow { path: PathBuf },
    /// Laufenden Job abbrechen
    CancelLoad,
    /// Aktuelles Dokument exportieren
    ExportDocument { path: PathBuf },
    /// Anwendung beenden
    RequestExit,

    /// Tree-Node selektieren (erneuter Klick hebt auf)
    SelectTreeNode { node: TreeNodeId },
    /// Shape unter dem Cursor picken
    PickAt { screen_pos: glam::Vec2 },
    /// Selektion aufheben
    ClearSelection,

    /// Kamera um das Ziel rotieren (Radiant)
    OrbitCamera { delta_yaw: f64, delta_pitch: f64 },
    /// Kamera-Ziel verschieben (Pixel)
    PanCamera { delta: glam::Vec2 },
    /// Zoomen (Faktor > 1 nähert an)
    ZoomCamera { factor: f64 },
    /// Ansicht wählen
    ApplyViewPreset { preset: ViewPreset },
    /// Kamera auf alle Shapes einpassen
    FitAll,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },

    /// Optionen-Dialog öffnen
    OpenOptionsDialog,
    /// Optionen-Dialog schließen
    CloseOptionsDialog,
    /// Optionen übernehmen und speichern
    ApplyOptions { options: Box<ViewerOptions> },
    /// Optionen auf Standard zurücksetzen
    ResetOptions,

    /// Fehlerfenster schließen
    DismissError,
}
