//! # Rendering Module
//!
//! Turns an [`AppView`] snapshot into styled terminal text.
//!
//! Layout calculations (centering, truncation, line splitting) stay in Rust because they need
//! Unicode-aware widths. Templates handle presentation: which style a fragment gets, blank lines
//! between sections, and what shows up conditionally (errors, empty messages, overlays).
//!
//! The palette follows the header's `theme`, so the environment is built per render.

use super::styles::{names, palette_for, Palette};
use super::templates::TEMPLATES;
use catatan::api::{AppView, CmdMessage, MessageLevel};
use catatan::components::note_collection::EntryView;
use catatan::components::note_creator::{FieldView, NotificationView};
use catatan::components::note_item::{DialogView, ItemView};
use colored::Colorize;
use minijinja::{Environment, Value};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width of the board.
pub const LINE_WIDTH: usize = 72;
/// Indent in front of note dates, bodies and actions.
const ITEM_INDENT: usize = 4;

#[derive(Serialize)]
struct FieldLine {
    label: &'static str,
    counter: String,
    text: String,
    text_style: &'static str,
    error: Option<&'static str>,
}

#[derive(Serialize)]
struct ButtonData {
    text: String,
    style: &'static str,
}

#[derive(Serialize)]
struct ItemData {
    index: String,
    title: String,
    status: &'static str,
    status_style: &'static str,
    date: String,
    body_lines: Vec<String>,
    archive_label: &'static str,
    delete_label: &'static str,
    hint: String,
}

#[derive(Serialize)]
struct BoardData<'a> {
    rule: String,
    header_title: String,
    header_subtitle: String,
    creator_heading: &'static str,
    fields: Vec<FieldLine>,
    submit_text: String,
    submit_style: &'static str,
    toolbar: Vec<ButtonData>,
    search_line: String,
    search_style: &'static str,
    info: &'a str,
    empty_message: Option<&'static str>,
    items: Vec<ItemData>,
    hidden_line: Option<String>,
    footer: String,
    popup: Option<&'a NotificationView>,
    dialog: Option<&'a DialogView>,
}

/// Renders the whole board.
pub fn render_board(view: &AppView, use_color: bool) -> String {
    try_render(view, use_color).unwrap_or_else(|e| {
        format!(
            "{}\n{}\n(render error: {})",
            view.header.title, view.collection.info, e
        )
    })
}

fn try_render(view: &AppView, use_color: bool) -> Result<String, minijinja::Error> {
    let data = board_data(view);
    let env = environment(palette_for(view.header.theme), use_color)?;
    let template = env.get_template("board.tmp")?;
    template.render(&data)
}

fn environment(
    palette: &'static Palette,
    use_color: bool,
) -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_filter("style", move |value: Value, name: String| -> String {
        palette.apply(&name, &value.to_string(), use_color)
    });
    for (name, source) in TEMPLATES {
        env.add_template(name, source)?;
    }
    Ok(env)
}

fn board_data(view: &AppView) -> BoardData<'_> {
    let creator = &view.creator;
    let collection = &view.collection;

    let hidden = collection.count - collection.visible_count;
    let hidden_line =
        (hidden > 0).then(|| format!("({} catatan disembunyikan oleh pencarian)", hidden));

    let (search_line, search_style) = if collection.search_term.is_empty() {
        (collection.search_placeholder.to_string(), names::PLACEHOLDER)
    } else {
        (format!("Cari: {}", collection.search_term), names::REGULAR)
    };

    let popup = creator.notification.as_ref();
    let dialog = collection
        .items
        .iter()
        .find_map(|entry| entry.item.dialog.as_ref());

    BoardData {
        rule: "─".repeat(LINE_WIDTH),
        header_title: center(view.header.title, LINE_WIDTH),
        header_subtitle: center(view.header.subtitle, LINE_WIDTH),
        creator_heading: creator.heading,
        fields: vec![field_line(&creator.title), field_line(&creator.body)],
        submit_text: format!("[ {} ]", creator.submit_label),
        submit_style: if creator.submit_enabled {
            names::BUTTON
        } else {
            names::DISABLED
        },
        toolbar: view
            .toolbar
            .buttons
            .iter()
            .map(|button| ButtonData {
                text: format!(" {} ", button.label),
                style: if button.active {
                    names::FILTER_ACTIVE
                } else {
                    names::FILTER_IDLE
                },
            })
            .collect(),
        search_line,
        search_style,
        info: &collection.info,
        empty_message: collection.empty_message,
        items: collection
            .items
            .iter()
            .filter(|entry| entry.visible)
            .map(item_data)
            .collect(),
        hidden_line,
        footer: center(&view.footer.text, LINE_WIDTH),
        popup,
        dialog,
    }
}

fn field_line(field: &FieldView) -> FieldLine {
    let (text, text_style) = if field.value.is_empty() {
        (field.placeholder.to_string(), names::PLACEHOLDER)
    } else {
        (
            truncate_to_width(&single_line(&field.value), LINE_WIDTH - 2),
            names::REGULAR,
        )
    };
    FieldLine {
        label: field.label,
        counter: field.counter.clone(),
        text,
        text_style,
        error: field.error,
    }
}

fn item_data(entry: &EntryView) -> ItemData {
    let item: &ItemView = &entry.item;
    let index = format!("{}.", entry.index);
    let status = item.status_label;
    let title_width = LINE_WIDTH.saturating_sub(index.width() + status.width() + 3);
    let body_width = LINE_WIDTH - ITEM_INDENT;

    ItemData {
        title: truncate_to_width(&item.title, title_width),
        index,
        status,
        status_style: if item.archived {
            names::ARCHIVED
        } else {
            names::ACTIVE
        },
        date: item.date.clone(),
        body_lines: item
            .body
            .lines()
            .map(|line| truncate_to_width(line, body_width))
            .collect(),
        archive_label: item.archive_label,
        delete_label: item.delete_label,
        hint: format!("a {0} · rm {0}", entry.index),
    }
}

/// Prints command messages to stdout, colored by level.
pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn single_line(s: &str) -> String {
    s.chars().map(|c| if c == '\n' { ' ' } else { c }).collect()
}

fn center(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width()) / 2;
    format!("{}{}", " ".repeat(pad), s)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use catatan::api::CatatanApi;
    use catatan::config::{NotesConfig, Theme};
    use catatan::model::{FilterMode, Note, NoteId};
    use catatan::store::memory::MemoryStore;
    use catatan::store::NoteStore;
    use chrono::{Duration, TimeZone, Utc};

    fn api(store: MemoryStore) -> CatatanApi<MemoryStore> {
        CatatanApi::new(store, &NotesConfig::default()).unwrap()
    }

    fn store_with(notes: &[(&str, &str, bool)]) -> MemoryStore {
        let base = Utc.with_ymd_and_hms(2026, 3, 10, 9, 0, 0).unwrap();
        let mut store = MemoryStore::new();
        for (i, &(title, body, archived)) in notes.iter().enumerate() {
            let at = base + Duration::minutes(i as i64);
            let mut note = Note::new(NoteId::new(format!("note-{}", i + 1)), title, body, at);
            note.archived = archived;
            store.append(note).unwrap();
        }
        store
    }

    fn board(api: &CatatanApi<MemoryStore>) -> String {
        render_board(&api.view(), false)
    }

    #[test]
    fn test_empty_board() {
        let output = board(&api(MemoryStore::new()));
        assert!(output.contains("Aditya's NotesApp"));
        assert!(output.contains("Store ur best idea here!"));
        assert!(output.contains("Buat Catatan Baru"));
        assert!(output.contains("Judul catatan..."));
        assert!(output.contains("0/50"));
        assert!(output.contains("[ Simpan Catatan ]"));
        assert!(output.contains(" Semua   Aktif   Arsip "));
        assert!(output.contains("Cari catatan..."));
        assert!(output.contains("Menampilkan semua catatan (0 catatan)"));
        assert!(output.contains("Tidak ada catatan yang ditemukan."));
        assert!(output.contains("Dibuat dengan ❤ untuk Dicoding"));
        assert!(!output.contains("(!?)"));
    }

    #[test]
    fn test_items_with_badges() {
        let store = store_with(&[
            ("Belanja", "Beli sayur\ndan buah", false),
            ("Resep lama", "Nasi goreng", true),
        ]);
        let output = board(&api(store));

        assert!(output.contains("1. Belanja  Aktif"));
        assert!(output.contains("2. Resep lama  Diarsipkan"));
        assert!(output.contains("    Beli sayur\n    dan buah"));
        assert!(output.contains("Kembalikan · Hapus  a 2 · rm 2"));
        assert!(!output.contains("Invalid Date"));
    }

    #[test]
    fn test_validation_errors_show_after_input() {
        let mut api = api(MemoryStore::new());
        api.input_title("Hi").unwrap();
        let output = board(&api);
        assert!(output.contains("Judul wajib diisi (minimal 3 karakter)"));
        assert!(!output.contains("Isi catatan wajib diisi"));
        assert!(output.contains("2/50"));
    }

    #[test]
    fn test_popup_and_dialog() {
        let mut api = api(MemoryStore::new());
        api.input_title("Hello").unwrap();
        api.input_body("World!").unwrap();
        api.submit().unwrap();

        let output = board(&api);
        assert!(output.contains("Sukses"));
        assert!(output.contains("Catatan \"Hello\" berhasil disimpan!"));
        assert!(output.contains("[ OK ]"));

        api.dismiss_notification().unwrap();
        api.request_delete(1).unwrap();
        let output = board(&api);
        assert!(!output.contains("Sukses"));
        assert!(output.contains("Konfirmasi Penghapusan"));
        assert!(output.contains("Apakah Anda yakin ingin menghapus catatan ini?"));
        assert!(output.contains("[ Batal ]  [ Hapus ]"));
    }

    #[test]
    fn test_search_hides_items() {
        let store = store_with(&[
            ("Catatan 1", "Isi catatan nomor 1", false),
            ("Catatan 2", "Isi catatan nomor 2", false),
            ("Catatan 3", "Isi catatan nomor 3", false),
        ]);
        let mut api = api(store);
        api.search("nomor 2").unwrap();

        let output = board(&api);
        assert!(output.contains("Cari: nomor 2"));
        assert!(output.contains("2. Catatan 2"));
        assert!(!output.contains("1. Catatan 1"));
        assert!(output.contains("(2 catatan disembunyikan oleh pencarian)"));
    }

    #[test]
    fn test_filtered_empty_message() {
        let store = store_with(&[("Catatan 1", "Isi catatan nomor 1", false)]);
        let mut api = api(store);
        api.select_filter(FilterMode::Archived).unwrap();
        let output = board(&api);
        assert!(output.contains("Menampilkan catatan terarsip (0 catatan)"));
        assert!(output.contains("Tidak ada catatan terarsip yang ditemukan."));
    }

    #[test]
    fn test_color_follows_flag_and_theme() {
        let mut api = api(MemoryStore::new());
        assert!(!render_board(&api.view(), false).contains('\u{1b}'));
        let light = render_board(&api.view(), true);
        assert!(light.contains('\u{1b}'));

        api.set_theme(Theme::Dark).unwrap();
        assert_ne!(render_board(&api.view(), true), light);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Catatan", 10), "Catatan");
        assert_eq!(truncate_to_width("Catatan panjang", 8), "Catatan…");
        assert_eq!(center("ab", 6), "  ab");
    }
}
