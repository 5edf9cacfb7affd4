use crate::core::{TreeNodeId, ViewPreset};
use crate::shared::ViewerOptions;
use std::path::PathBuf;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Datei öffnen (zeigt Dateidialog)
    OpenFileRequested,
    /// Datei im Dialog gewählt (lädt im Hintergrund)
    FileSelected { path: PathBuf },
    /// Startdatei von der Kommandozeile (lädt synchron)
    StartupFileRequested { path: PathBuf },
    /// Laufenden Ladevorgang abbrechen
    CancelLoadRequested,
    /// Export starten (zeigt Speicherdialog)
    ExportRequested,
    /// Exportziel im Dialog gewählt
    ExportPathSelected { path: PathBuf },
    /// Anwendung beenden
    ExitRequested,

    /// Klick auf einen Tree-Node
    TreeNodeClicked { node: TreeNodeId },
    /// Linksklick in den Viewport (Pixel relativ zur Viewport-Ecke oben links)
    ViewportClicked { screen_pos: glam::Vec2 },
    /// Selektion aufheben
    ClearSelectionRequested,

    /// Orbit per Maus-Drag (Pixel)
    CameraOrbit { delta: glam::Vec2 },
    /// Verschieben per Maus-Drag (Pixel)
    CameraPan { delta: glam::Vec2 },
    /// Mausrad (positive Schritte = hineinzoomen)
    CameraScroll { steps: f32 },
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Vordefinierte Ansicht
    ViewPresetRequested { preset: ViewPreset },
    /// Alles einpassen
    FitAllRequested,
    /// Viewport-Größe geändert
    ViewportResized { size: [f32; 2] },

    /// Optionen-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Optionen-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen geändert (aus dem Dialog)
    OptionsChanged { options: Box<ViewerOptions> },
    /// Optionen auf Standard zurücksetzen
    ResetOptionsRequested,

    /// Fehlermeldung quittiert
    ErrorDismissed,
}
