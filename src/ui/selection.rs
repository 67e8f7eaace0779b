//! Selected-sections panel with drag-to-reorder and per-row removal

use eframe::egui;

use crate::app::DocforgeApp;

/// Selected sections panel
pub struct SelectionPanel;

impl SelectionPanel {
    /// Show the selection panel
    pub fn show(ui: &mut egui::Ui, app: &mut DocforgeApp) {
        ui.vertical(|ui| {
            ui.heading("Selected Sections");
            ui.separator();

            if app.selection.is_empty() {
                ui.label("Click a note above to add it to the document");
                return;
            }

            let mut removed: Option<usize> = None;
            let mut dropped: Option<(usize, usize)> = None;

            egui::ScrollArea::vertical()
                .id_salt("selection_scroll")
                .show(ui, |ui| {
                    let frame = egui::Frame::default().inner_margin(egui::Margin::same(4));
                    let (_, zone_payload) = ui.dnd_drop_zone::<usize, ()>(frame, |ui| {
                        for (idx, section) in app.selection.sections().iter().enumerate() {
                            let item_id = egui::Id::new(("selected_section", idx));
                            let response = ui
                                .dnd_drag_source(item_id, idx, |ui| {
                                    ui.horizontal(|ui| {
                                        ui.label("\u{2630}");
                                        ui.label(&section.title);
                                        ui.with_layout(
                                            egui::Layout::right_to_left(egui::Align::Center),
                                            |ui| {
                                                if ui
                                                    .small_button("\u{1F5D1}")
                                                    .on_hover_text("Remove")
                                                    .clicked()
                                                {
                                                    removed = Some(idx);
                                                }
                                            },
                                        );
                                    });
                                })
                                .response;

                            // While a row is dragged over this one, show the
                            // insertion line and capture the drop position.
                            if let (Some(pointer), Some(hovered)) = (
                                ui.input(|i| i.pointer.interact_pos()),
                                response.dnd_hover_payload::<usize>(),
                            ) {
                                let rect = response.rect;
                                let stroke = egui::Stroke::new(1.0, egui::Color32::WHITE);

                                let insert_idx = if *hovered == idx {
                                    ui.painter().hline(rect.x_range(), rect.center().y, stroke);
                                    idx
                                } else if pointer.y < rect.center().y {
                                    ui.painter().hline(rect.x_range(), rect.top(), stroke);
                                    idx
                                } else {
                                    ui.painter().hline(rect.x_range(), rect.bottom(), stroke);
                                    idx + 1
                                };

                                if let Some(from) = response.dnd_release_payload::<usize>() {
                                    dropped = Some((*from, insert_idx));
                                }
                            }
                        }
                    });

                    // Released over the zone but below every row: move to end.
                    if dropped.is_none() {
                        if let Some(from) = zone_payload {
                            dropped = Some((*from, app.selection.len()));
                        }
                    }
                });

            if let Some(idx) = removed {
                app.remove_section(idx);
            } else if let Some((from, to)) = dropped {
                app.move_section(from, to);
            }
        });
    }
}
