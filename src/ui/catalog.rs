//! Catalog panel: searchable, sortable note listing grouped by category

use eframe::egui;

use crate::app::DocforgeApp;
use crate::core::catalog::Note;
use crate::core::view_model::{grouped, SortDirection};

/// Catalog panel
pub struct CatalogPanel;

impl CatalogPanel {
    /// Show the catalog panel
    pub fn show(ui: &mut egui::Ui, app: &mut DocforgeApp) {
        ui.vertical(|ui| {
            // Header with sort toggle
            ui.horizontal(|ui| {
                ui.heading("Available Notes");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let icon = match app.sort {
                        SortDirection::Ascending => "\u{2B07}",
                        SortDirection::Descending => "\u{2B06}",
                    };
                    if ui
                        .button(format!("{icon} Sort {}", app.sort.label()))
                        .on_hover_text("Toggle sort direction")
                        .clicked()
                    {
                        app.toggle_sort();
                    }
                });
            });

            ui.add(
                egui::TextEdit::singleline(&mut app.search_query)
                    .hint_text("Search notes...")
                    .desired_width(f32::INFINITY),
            );

            ui.separator();

            let clicked = Self::show_groups(ui, app);
            if let Some(note) = clicked {
                app.select_note(&note);
            }
        });
    }

    /// Show the grouped note listing; returns the note clicked this frame
    fn show_groups(ui: &mut egui::Ui, app: &DocforgeApp) -> Option<Note> {
        let mut clicked = None;

        egui::ScrollArea::vertical()
            .id_salt("catalog_scroll")
            .show(ui, |ui| {
                let buckets = grouped(&app.catalog.notes, &app.search_query, app.sort);
                if buckets.is_empty() {
                    ui.label("No notes match");
                    return;
                }

                for (category, notes) in buckets {
                    egui::CollapsingHeader::new(category)
                        .default_open(true)
                        .show(ui, |ui| {
                            for note in notes {
                                let already_selected = app
                                    .selection
                                    .sections()
                                    .iter()
                                    .any(|s| s.title == note.title);
                                let response = ui.selectable_label(
                                    already_selected,
                                    format!("\u{1F4DD} {}", note.title),
                                );
                                if response.clicked() {
                                    clicked = Some(note.clone());
                                }
                            }
                        });
                }
            });

        clicked
    }
}
