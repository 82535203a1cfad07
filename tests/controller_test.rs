//! Command handler tests with scripted dialogs

use image::{Rgb, RgbImage};
use image_to_pdf::{AppState, Config, Dialogs, ExportOutcome, OrderingMode};
use std::path::{Path, PathBuf};
use tempfile::tempdir;

#[derive(Default)]
struct ScriptedDialogs {
    images: Option<Vec<PathBuf>>,
    destination: Option<PathBuf>,
    image_picks: usize,
    destination_picks: usize,
    warnings: Vec<String>,
    errors: Vec<String>,
    infos: Vec<String>,
}

impl Dialogs for ScriptedDialogs {
    fn pick_images(&mut self, extensions: &[String]) -> Option<Vec<PathBuf>> {
        assert!(extensions.iter().any(|e| e == "png"));
        self.image_picks += 1;
        self.images.take()
    }

    fn pick_destination(&mut self, extension: &str) -> Option<PathBuf> {
        assert_eq!(extension, "pdf");
        self.destination_picks += 1;
        self.destination.take()
    }

    fn warning(&mut self, _title: &str, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn error(&mut self, _title: &str, message: &str) {
        self.errors.push(message.to_string());
    }

    fn info(&mut self, _title: &str, message: &str) {
        self.infos.push(message.to_string());
    }
}

fn write_png(dir: &Path, name: &str, edge: u32) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_fn(edge, edge, |x, y| Rgb([(x * 7) as u8, (y * 13) as u8, 0]))
        .save(&path)
        .expect("Failed to write test image");
    path
}

fn names(state: &AppState) -> Vec<String> {
    state
        .collection()
        .entries()
        .iter()
        .map(|e| e.display_name().to_string())
        .collect()
}

#[test]
fn test_export_empty_warns_without_save_dialog() {
    let state = AppState::new(Config::default());
    let mut dialogs = ScriptedDialogs::default();

    let outcome = state.export_document(&mut dialogs);

    assert!(matches!(outcome, ExportOutcome::Empty));
    assert_eq!(dialogs.warnings.len(), 1);
    assert_eq!(dialogs.destination_picks, 0);
    assert!(dialogs.errors.is_empty());
    assert!(dialogs.infos.is_empty());
}

#[test]
fn test_cancelled_selection_changes_nothing() {
    let dir = tempdir().unwrap();
    let mut state = AppState::new(Config::default());
    state.add_paths(&[write_png(dir.path(), "a.png", 4)]);
    let mut dialogs = ScriptedDialogs::default();

    let added = state.select_images(&mut dialogs);

    assert_eq!(added, 0);
    assert_eq!(dialogs.image_picks, 1);
    assert_eq!(names(&state), ["a.png"]);
}

#[test]
fn test_selection_appends_after_existing() {
    let dir = tempdir().unwrap();
    let mut state = AppState::new(Config::default());
    let mut dialogs = ScriptedDialogs {
        images: Some(vec![write_png(dir.path(), "z.png", 4), write_png(dir.path(), "y.png", 4)]),
        ..Default::default()
    };
    assert_eq!(state.select_images(&mut dialogs), 2);

    dialogs.images = Some(vec![write_png(dir.path(), "a.png", 4)]);
    assert_eq!(state.select_images(&mut dialogs), 1);

    assert_eq!(names(&state), ["z.png", "y.png", "a.png"]);
}

#[test]
fn test_name_then_size_scenario() {
    let dir = tempdir().unwrap();
    let b = dir.path().join("b.png");
    let a = dir.path().join("a.png");
    std::fs::write(&b, vec![0u8; 100]).unwrap();
    std::fs::write(&a, vec![0u8; 200]).unwrap();

    let mut state = AppState::new(Config::default());
    state.add_paths(&[b, a]);
    assert_eq!(names(&state), ["b.png", "a.png"]);

    state.set_mode(OrderingMode::ByName);
    assert_eq!(names(&state), ["a.png", "b.png"]);

    state.set_mode(OrderingMode::BySize);
    assert_eq!(names(&state), ["b.png", "a.png"]);
}

#[test]
fn test_selection_resorts_in_automatic_mode() {
    let dir = tempdir().unwrap();
    let mut state = AppState::new(Config::default());
    state.set_mode(OrderingMode::ByName);
    state.add_paths(&[write_png(dir.path(), "m.png", 4)]);

    let mut dialogs = ScriptedDialogs {
        images: Some(vec![write_png(dir.path(), "z.png", 4), write_png(dir.path(), "b.png", 4)]),
        ..Default::default()
    };
    state.select_images(&mut dialogs);

    assert_eq!(names(&state), ["b.png", "m.png", "z.png"]);
}

#[test]
fn test_move_only_in_manual_mode() {
    let dir = tempdir().unwrap();
    let mut state = AppState::new(Config::default());
    state.add_paths(&[write_png(dir.path(), "a.png", 4), write_png(dir.path(), "b.png", 4)]);

    state.move_entry(1, 0).unwrap();
    assert_eq!(names(&state), ["b.png", "a.png"]);

    state.set_mode(OrderingMode::ByName);
    assert!(state.move_entry(1, 0).is_err());
    assert_eq!(names(&state), ["a.png", "b.png"]);
}

#[test]
fn test_cancelled_save_writes_nothing() {
    let dir = tempdir().unwrap();
    let mut state = AppState::new(Config::default());
    state.add_paths(&[write_png(dir.path(), "a.png", 4)]);
    let mut dialogs = ScriptedDialogs::default();

    let outcome = state.export_document(&mut dialogs);

    assert!(matches!(outcome, ExportOutcome::Cancelled));
    assert_eq!(dialogs.destination_picks, 1);
    assert!(dialogs.infos.is_empty() && dialogs.errors.is_empty());
}

#[test]
fn test_successful_export_names_path() {
    let dir = tempdir().unwrap();
    let mut state = AppState::new(Config::default());
    state.add_paths(&[
        write_png(dir.path(), "a.png", 4),
        write_png(dir.path(), "b.png", 6),
        write_png(dir.path(), "c.png", 8),
    ]);
    let mut dialogs = ScriptedDialogs {
        destination: Some(dir.path().join("Album")),
        ..Default::default()
    };

    let outcome = state.export_document(&mut dialogs);

    let expected = dir.path().join("Album.pdf");
    match outcome {
        ExportOutcome::Saved(path) => assert_eq!(path, expected),
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert!(expected.exists());
    assert_eq!(dialogs.infos.len(), 1);
    assert!(dialogs.infos[0].contains("Album.pdf"));
}

#[test]
fn test_failed_export_reports_and_keeps_entries() {
    let dir = tempdir().unwrap();
    let broken = dir.path().join("broken.jpg");
    std::fs::write(&broken, b"garbage").unwrap();

    let mut state = AppState::new(Config::default());
    state.add_paths(&[broken, write_png(dir.path(), "fine.png", 4)]);
    let mut dialogs = ScriptedDialogs {
        destination: Some(dir.path().join("out.pdf")),
        ..Default::default()
    };

    let outcome = state.export_document(&mut dialogs);

    assert!(matches!(outcome, ExportOutcome::Failed(_)));
    assert_eq!(dialogs.errors.len(), 1);
    assert!(dialogs.errors[0].contains("broken.jpg"));
    assert!(dialogs.infos.is_empty());
    assert!(!dir.path().join("out.pdf").exists());
    assert_eq!(names(&state), ["broken.jpg", "fine.png"]);
}
