//! Presenters: runtime and engine state in, ViewModels out

use chrono::{DateTime, Local, Utc};
use notemap_engine::{MountTree, NodePath};
use notemap_runtime::{GenerationStatus, SourceSet, Viewport, resolve_analysis_text};

use super::view_models::{
    PopupViewModel, SourceBarViewModel, SourceEntryViewModel, SourceListViewModel,
    SourceTabViewModel, StatusBarViewModel, StatusLevel,
};

pub fn present_status_bar(
    viewport: &Viewport,
    sources: &SourceSet,
    mounted: Option<&MountTree>,
) -> StatusBarViewModel {
    let (status_message, status_level) = match viewport.status() {
        GenerationStatus::Idle if viewport.can_generate(sources.sources()) => (
            "Press [g] to generate a mind map".to_string(),
            StatusLevel::Info,
        ),
        GenerationStatus::Idle => (
            "Nothing to analyze: pick a source with content ([s])".to_string(),
            StatusLevel::Info,
        ),
        GenerationStatus::Loading => ("Generating mind map…".to_string(), StatusLevel::Busy),
        GenerationStatus::Ready(_) => ("Mind map ready".to_string(), StatusLevel::Success),
        GenerationStatus::Failed(message) => (message.clone(), StatusLevel::Error),
    };

    StatusBarViewModel {
        status_message,
        status_level,
        zoom_percent: (viewport.zoom() * 100.0).round() as u32,
        node_count: viewport.tree().map(|tree| tree.node_count()),
        open_popups: mounted.map(|m| m.open_popups().len()).unwrap_or(0),
        generated_at: viewport.generated_at().map(format_local_time),
    }
}

fn format_local_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%H:%M:%S").to_string()
}

pub fn present_source_bar(viewport: &Viewport, sources: &SourceSet) -> SourceBarViewModel {
    let selected = viewport.selected_source_key();
    let tabs: Vec<SourceTabViewModel> = sources
        .selection_keys()
        .into_iter()
        .map(|key| SourceTabViewModel {
            title: sources.title_for(&key).unwrap_or(&key).to_string(),
            selected: key == selected,
            key,
        })
        .collect();

    let unknown_selection = if tabs.iter().any(|tab| tab.selected) {
        None
    } else {
        Some(selected.to_string())
    };

    SourceBarViewModel {
        tabs,
        unknown_selection,
    }
}

/// Popup content for a mounted node; `None` if the path is not mounted
pub fn present_popup(mounted: &MountTree, path: &NodePath) -> Option<PopupViewModel> {
    mounted.node(path)?;
    let node = mounted.model_at(path)?;
    Some(PopupViewModel {
        title: node.label.clone(),
        body: node.description_or_placeholder().to_string(),
    })
}

pub fn present_source_list(sources: &SourceSet) -> SourceListViewModel {
    let mut entries = Vec::with_capacity(sources.len() + 1);
    for key in sources.selection_keys() {
        let chars = resolve_analysis_text(sources.sources(), &key)
            .map(|text| text.chars().count())
            .unwrap_or(0);
        entries.push(SourceEntryViewModel {
            title: sources.title_for(&key).unwrap_or(&key).to_string(),
            key,
            chars,
        });
    }
    SourceListViewModel { sources: entries }
}
