//! Main application state and UI coordination

use std::path::PathBuf;
use std::time::{Duration, Instant};

use eframe::egui;

use crate::core::catalog::{Catalog, Note};
use crate::core::config::{AppConfig, ViewMode};
use crate::core::print;
use crate::core::selection::SelectionList;
use crate::core::view_model::SortDirection;
use crate::ui::{catalog::CatalogPanel, preview::PreviewPanel, selection::SelectionPanel};

/// How long a status notice stays visible
const STATUS_TTL: Duration = Duration::from_secs(6);

/// A transient non-fatal notice shown in the status bar
struct StatusMessage {
    text: String,
    shown_at: Instant,
}

/// Main application state
pub struct DocforgeApp {
    /// The note catalog, read-only after load
    pub catalog: Catalog,
    /// Current search query over note titles
    pub search_query: String,
    /// Active catalog sort direction
    pub sort: SortDirection,
    /// Ordered list of selected sections
    pub selection: SelectionList,
    /// Editable preview buffer; overwritten with the recomputed
    /// concatenation after every selection mutation
    pub preview: String,
    /// Current view mode for the preview area
    pub view_mode: ViewMode,
    /// Whether the catalog/selection panel is visible
    pub panel_visible: bool,
    /// Application configuration
    pub config: AppConfig,
    /// Commonmark cache for the rendered preview
    pub commonmark_cache: egui_commonmark::CommonMarkCache,
    status: Option<StatusMessage>,
    /// Panel width changed but not yet written to the config file
    panel_width_dirty: bool,
}

/// Catalog to start the session with: the configured file if one is set
/// and loads, otherwise the embedded catalog. An empty catalog only
/// results if the embedded one is unparseable.
fn startup_catalog(config: &AppConfig) -> Catalog {
    if let Some(path) = config.catalog_path.as_deref() {
        match Catalog::load(path) {
            Ok(catalog) => return catalog,
            Err(e) => {
                tracing::error!("Failed to load catalog {}: {e:#}", path.display());
            }
        }
    }
    Catalog::embedded().unwrap_or_else(|e| {
        tracing::error!("Failed to parse embedded catalog: {e:#}");
        Catalog::default()
    })
}

impl DocforgeApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Load config or use defaults
        let config = AppConfig::load().unwrap_or_default();

        match config.ui.theme.as_str() {
            "light" => cc.egui_ctx.set_visuals(egui::Visuals::light()),
            _ => cc.egui_ctx.set_visuals(egui::Visuals::dark()),
        }

        let catalog = startup_catalog(&config);

        Self {
            catalog,
            search_query: String::new(),
            sort: config.default_sort,
            selection: SelectionList::default(),
            preview: String::new(),
            view_mode: config.view_mode,
            panel_visible: true,
            config,
            commonmark_cache: egui_commonmark::CommonMarkCache::default(),
            status: None,
            panel_width_dirty: false,
        }
    }

    /// Replace the catalog with one loaded from disk. A failed load keeps
    /// the current catalog and surfaces a notice.
    pub fn open_catalog(&mut self, path: PathBuf) {
        match Catalog::load(&path) {
            Ok(catalog) => {
                self.catalog = catalog;
                self.config.catalog_path = Some(path);
                if let Err(e) = self.config.save() {
                    tracing::warn!("Failed to save config: {e:#}");
                }
            }
            Err(e) => {
                tracing::error!("Failed to load catalog: {e:#}");
                self.set_status(format!("Could not load catalog: {e}"));
            }
        }
    }

    /// Toggle the catalog sort direction and persist it as the default
    pub fn toggle_sort(&mut self) {
        self.sort = self.sort.toggled();
        self.config.default_sort = self.sort;
        if let Err(e) = self.config.save() {
            tracing::warn!("Failed to save config: {e:#}");
        }
    }

    /// Switch the preview view mode and persist it as the default
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if self.view_mode == mode {
            return;
        }
        self.view_mode = mode;
        self.config.view_mode = mode;
        if let Err(e) = self.config.save() {
            tracing::warn!("Failed to save config: {e:#}");
        }
    }

    /// Add a note to the selection; duplicates are a silent no-op
    pub fn select_note(&mut self, note: &Note) {
        if self.selection.select(note) {
            self.sync_preview();
        }
    }

    /// Remove the selected section at `index`
    pub fn remove_section(&mut self, index: usize) {
        if self.selection.remove(index) {
            self.sync_preview();
        }
    }

    /// Apply a drag gesture moving the section at `from` to slot `to`
    pub fn move_section(&mut self, from: usize, to: usize) {
        if self.selection.move_section(from, to) {
            self.sync_preview();
        }
    }

    /// Overwrite the preview buffer with the recomputed concatenation.
    /// Manual edits made in the preview are discarded at this point.
    fn sync_preview(&mut self) {
        self.preview = self.selection.combined_markup().to_string();
    }

    /// Send the current preview buffer to the print surface
    pub fn print_preview(&mut self) {
        match print::print_preview(&self.preview) {
            Ok(path) => {
                self.set_status(format!("Print surface opened: {}", path.display()));
            }
            Err(e) => {
                tracing::error!("Print failed: {e:#}");
                self.set_status(format!("Print failed: {e}"));
            }
        }
    }

    /// Show a transient notice in the status bar
    pub fn set_status(&mut self, text: String) {
        self.status = Some(StatusMessage {
            text,
            shown_at: Instant::now(),
        });
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Catalog...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Catalog", &["json"])
                            .pick_file()
                        {
                            self.open_catalog(path);
                        }
                        ui.close();
                    }
                    if ui.button("Print").clicked() {
                        self.print_preview();
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui.button("Toggle Notes Panel").clicked() {
                        self.panel_visible = !self.panel_visible;
                        ui.close();
                    }
                    if ui
                        .button(format!("Sort {}", self.sort.toggled().label()))
                        .clicked()
                    {
                        self.toggle_sort();
                        ui.close();
                    }
                    ui.separator();
                    if ui
                        .selectable_label(self.view_mode == ViewMode::Markup, "Markup Only")
                        .clicked()
                    {
                        self.set_view_mode(ViewMode::Markup);
                        ui.close();
                    }
                    if ui
                        .selectable_label(self.view_mode == ViewMode::Rendered, "Rendered Only")
                        .clicked()
                    {
                        self.set_view_mode(ViewMode::Rendered);
                        ui.close();
                    }
                    if ui
                        .selectable_label(self.view_mode == ViewMode::Split, "Split View")
                        .clicked()
                    {
                        self.set_view_mode(ViewMode::Split);
                        ui.close();
                    }
                });
            });
        });
    }

    /// Render the status bar when a notice is active
    fn render_status_bar(&mut self, ctx: &egui::Context) {
        if self
            .status
            .as_ref()
            .is_some_and(|s| s.shown_at.elapsed() > STATUS_TTL)
        {
            self.status = None;
        }
        let Some(text) = self.status.as_ref().map(|s| s.text.clone()) else {
            return;
        };

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(text);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("\u{2715}").clicked() {
                        self.status = None;
                    }
                });
            });
        });
    }
}

impl eframe::App for DocforgeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle keyboard shortcuts
        ctx.input(|i| {
            if i.modifiers.ctrl && i.key_pressed(egui::Key::P) {
                self.print_preview();
            }
            if i.modifiers.ctrl && i.key_pressed(egui::Key::B) {
                self.panel_visible = !self.panel_visible;
            }
        });

        // Render menu and status bars
        self.render_menu_bar(ctx);
        self.render_status_bar(ctx);

        // Left panel: catalog on top, selection below
        if self.panel_visible {
            let response = egui::SidePanel::left("notes_panel")
                .resizable(true)
                .default_width(self.config.ui.panel_width)
                .min_width(200.0)
                .show(ctx, |ui| {
                    let half = ui.available_height() / 2.0 - 8.0;
                    ui.vertical(|ui| {
                        ui.set_max_height(half);
                        CatalogPanel::show(ui, self);
                    });
                    ui.separator();
                    SelectionPanel::show(ui, self);
                });

            // Track resizes; the config is written once the drag ends.
            let width = response.response.rect.width();
            if (width - self.config.ui.panel_width).abs() > 1.0 {
                self.config.ui.panel_width = width;
                self.panel_width_dirty = true;
            }
        }

        if self.panel_width_dirty && !ctx.input(|i| i.pointer.any_down()) {
            self.panel_width_dirty = false;
            if let Err(e) = self.config.save() {
                tracing::warn!("Failed to save config: {e:#}");
            }
        }

        // Main content area: the document preview
        egui::CentralPanel::default().show(ctx, |ui| {
            PreviewPanel::show(ui, self);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_catalog_falls_back_to_embedded_on_bad_path() {
        let config = AppConfig {
            catalog_path: Some(PathBuf::from("/nonexistent/notes.json")),
            ..AppConfig::default()
        };
        let catalog = startup_catalog(&config);
        assert!(!catalog.notes.is_empty());
    }

    #[test]
    fn test_startup_catalog_uses_embedded_without_configured_path() {
        let catalog = startup_catalog(&AppConfig::default());
        assert!(!catalog.notes.is_empty());
    }
}
