//! Document preview panel: editable markup plus rendered view

use eframe::egui;
use egui_commonmark::CommonMarkViewer;

use crate::app::DocforgeApp;
use crate::core::config::ViewMode;

/// Document preview panel
pub struct PreviewPanel;

impl PreviewPanel {
    /// Show the preview panel
    pub fn show(ui: &mut egui::Ui, app: &mut DocforgeApp) {
        ui.vertical(|ui| {
            // Toolbar
            ui.horizontal(|ui| {
                ui.heading("Document Preview");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("\u{1F5A8} Print").clicked() {
                        app.print_preview();
                    }
                });
            });

            ui.separator();

            match app.view_mode {
                ViewMode::Markup => Self::show_markup(ui, app),
                ViewMode::Rendered => Self::show_rendered(ui, app),
                ViewMode::Split => {
                    // Split view: markup editor on left, rendered on right
                    let available_width = ui.available_width();
                    ui.horizontal(|ui| {
                        ui.set_min_width(available_width);

                        ui.vertical(|ui| {
                            ui.set_width(available_width / 2.0 - 4.0);
                            Self::show_markup(ui, app);
                        });

                        ui.separator();

                        ui.vertical(|ui| {
                            ui.set_width(available_width / 2.0 - 4.0);
                            Self::show_rendered(ui, app);
                        });
                    });
                }
            }
        });
    }

    /// Editable markup buffer. Edits live until the next selection
    /// mutation overwrites the buffer with the recomputed concatenation.
    fn show_markup(ui: &mut egui::Ui, app: &mut DocforgeApp) {
        egui::ScrollArea::vertical()
            .id_salt("markup_scroll")
            .show(ui, |ui| {
                egui::TextEdit::multiline(&mut app.preview)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(f32::INFINITY)
                    .desired_rows(30)
                    .show(ui);
            });
    }

    /// Rendered view of the preview buffer
    fn show_rendered(ui: &mut egui::Ui, app: &mut DocforgeApp) {
        let content = app.preview.clone();

        egui::ScrollArea::vertical()
            .id_salt("rendered_scroll")
            .show(ui, |ui| {
                if content.is_empty() {
                    Self::show_empty(ui);
                } else {
                    CommonMarkViewer::new().show(ui, &mut app.commonmark_cache, &content);
                }
            });
    }

    /// Show empty state
    fn show_empty(ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(50.0);
            ui.label("No sections selected");
            ui.label("Pick notes from the catalog to build the document");
        });
    }
}
