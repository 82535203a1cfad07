use std::collections::HashMap;
use std::path::PathBuf;

use eframe::egui::{self, Color32, RichText};
use image_to_pdf::{AppState, Config, ExportOutcome, ImageEntry, OrderingMode};
use image_to_pdf_common::unknown_created_at;
use tracing::{info, warn};

use crate::dialogs::NativeDialogs;

const ROW_THUMB_SIZE: f32 = 64.0;

pub struct DesktopApp {
    state: AppState,
    dialogs: NativeDialogs,
    thumbs: HashMap<PathBuf, egui::TextureHandle>,
    drag_index: Option<usize>,
    drop_index: Option<usize>,
    status: String,
}

impl DesktopApp {
    pub fn new(config: Config) -> Self {
        Self {
            state: AppState::new(config),
            dialogs: NativeDialogs,
            thumbs: HashMap::new(),
            drag_index: None,
            drop_index: None,
            status: String::new(),
        }
    }

    fn add_images(&mut self) {
        let added = self.state.select_images(&mut self.dialogs);
        if added > 0 {
            self.status = format!("Added {}", image_count(added));
        }
    }

    fn save_pdf(&mut self) {
        self.status = match self.state.export_document(&mut self.dialogs) {
            ExportOutcome::Saved(path) => format!("Saved {}", path.display()),
            ExportOutcome::Failed(err) => format!("Save failed: {err}"),
            ExportOutcome::Empty | ExportOutcome::Cancelled => return,
        };
    }

    fn set_mode(&mut self, mode: OrderingMode) {
        self.state.set_mode(mode);
        self.drag_index = None;
        self.drop_index = None;
    }

    /// Upload previews that have not been turned into textures yet
    fn load_textures(&mut self, ctx: &egui::Context) {
        for entry in self.state.collection().entries() {
            let Some(thumb) = entry.thumbnail() else {
                continue;
            };
            if self.thumbs.contains_key(entry.path()) {
                continue;
            }
            let size = [thumb.width as usize, thumb.height as usize];
            let image = egui::ColorImage::from_rgba_unmultiplied(size, &thumb.rgba);
            let texture = ctx.load_texture(
                entry.path().to_string_lossy(),
                image,
                egui::TextureOptions::default(),
            );
            self.thumbs.insert(entry.path().to_path_buf(), texture);
        }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let button_size = egui::vec2(0.0, 30.0);
            if ui
                .add(egui::Button::new("Add images").min_size(button_size))
                .clicked()
            {
                self.add_images();
            }
            if ui
                .add(egui::Button::new("Save as PDF").min_size(button_size))
                .clicked()
            {
                self.save_pdf();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let current = self.state.collection().mode();
                let mut selected = current;
                egui::ComboBox::from_id_source("ordering_mode")
                    .selected_text(selected.label())
                    .show_ui(ui, |ui| {
                        for mode in OrderingMode::ALL {
                            ui.selectable_value(&mut selected, mode, mode.label());
                        }
                    });
                ui.label("Sort by:");
                if selected != current {
                    self.set_mode(selected);
                }
            });
        });
    }

    fn render_list(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let collection = self.state.collection();
        if collection.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No images yet. Use \"Add images\" to pick files.").color(Color32::GRAY));
            });
            return;
        }

        let can_reorder = collection.can_reorder();
        let pointer = ctx.pointer_interact_pos();
        let thumbs = &self.thumbs;
        let drag_index = self.drag_index;
        let drop_index = self.drop_index;
        let mut started = None;
        let mut hovered = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .drag_to_scroll(!can_reorder)
            .show(ui, |ui| {
                for (index, entry) in collection.entries().iter().enumerate() {
                    let highlighted = drag_index == Some(index) || drop_index == Some(index);
                    let response = render_row(ui, entry, thumbs.get(entry.path()), highlighted);
                    if !can_reorder {
                        continue;
                    }
                    let response = response.interact(egui::Sense::drag());
                    if response.drag_started() {
                        started = Some(index);
                    }
                    if pointer.is_some_and(|pos| response.rect.contains(pos)) {
                        hovered = Some(index);
                    }
                }
            });

        if started.is_some() {
            self.drag_index = started;
        }
        if self.drag_index.is_some() {
            ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
            self.drop_index = hovered;
        }

        if ctx.input(|i| i.pointer.any_released()) {
            let from = self.drag_index.take();
            self.drop_index = None;
            if let (Some(from), Some(to)) = (from, hovered) {
                if from != to {
                    match self.state.move_entry(from, to) {
                        Ok(()) => info!("Moved entry {} -> {}", from, to),
                        Err(err) => warn!("Move rejected: {}", err),
                    }
                }
            }
        }
    }

    fn summary(&self) -> String {
        let collection = self.state.collection();
        let hint = if collection.can_reorder() {
            "drag rows to reorder"
        } else {
            "choose Manual to reorder by hand"
        };
        format!("{} · {}", image_count(collection.len()), hint)
    }
}

fn render_row(
    ui: &mut egui::Ui,
    entry: &ImageEntry,
    texture: Option<&egui::TextureHandle>,
    highlighted: bool,
) -> egui::Response {
    let frame = egui::Frame::none()
        .fill(if highlighted { Color32::from_rgb(31, 35, 48) } else { Color32::TRANSPARENT })
        .stroke(egui::Stroke::new(
            1.0,
            if highlighted { Color32::from_rgb(246, 196, 69) } else { Color32::from_gray(60) },
        ))
        .rounding(egui::Rounding::same(4.0))
        .inner_margin(egui::Margin::same(4.0));

    frame
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                let size = egui::vec2(ROW_THUMB_SIZE, ROW_THUMB_SIZE);
                match texture {
                    Some(texture) => {
                        ui.add_sized(size, egui::Image::new(texture).max_size(size));
                    }
                    None => {
                        ui.allocate_exact_size(size, egui::Sense::hover());
                    }
                }
                ui.add_space(8.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(entry.display_name()).strong());
                    ui.label(RichText::new(entry_details(entry)).small().color(Color32::GRAY));
                });
            });
        })
        .response
}

fn entry_details(entry: &ImageEntry) -> String {
    let created = if entry.created_at() == unknown_created_at() {
        "-".to_string()
    } else {
        entry.created_at().format("%Y-%m-%d %H:%M").to_string()
    };
    let extension = if entry.extension().is_empty() { "-" } else { entry.extension() };
    format!("{} · {} · {}", format_size(entry.size_bytes()), created, extension)
}

fn image_count(count: usize) -> String {
    if count == 1 {
        "1 image".to_string()
    } else {
        format!("{count} images")
    }
}

fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    let b = bytes as f64;
    if b >= KB * KB {
        format!("{:.1} MB", b / (KB * KB))
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{bytes} B")
    }
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.load_textures(ctx);

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(4.0);
            self.render_controls(ui);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(self.summary()).color(Color32::from_gray(170)));
                if !self.status.is_empty() {
                    ui.separator();
                    ui.label(RichText::new(&self.status).color(Color32::from_rgb(246, 196, 69)));
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_list(ui, ctx);
        });
    }
}
