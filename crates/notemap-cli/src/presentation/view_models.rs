use serde::Serialize;

/// Severity of the status line, mapped to a color by each renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Info,
    Busy,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBarViewModel {
    pub status_message: String,
    pub status_level: StatusLevel,
    /// Zoom factor as a whole percentage (100 = 1.0)
    pub zoom_percent: u32,
    pub node_count: Option<usize>,
    pub open_popups: usize,
    /// Local time of the last successful generation ("14:03:27")
    pub generated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceTabViewModel {
    pub key: String,
    pub title: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceBarViewModel {
    pub tabs: Vec<SourceTabViewModel>,
    /// The selection key matches no loaded source
    pub unknown_selection: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopupViewModel {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceEntryViewModel {
    pub key: String,
    pub title: String,
    pub chars: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceListViewModel {
    pub sources: Vec<SourceEntryViewModel>,
}
