//! UI language selection and the captions the core supplies itself.
//!
//! Window captions come from the embedding UI's own resources. The annotation
//! menu, the text dialog titles, and the validation messages are produced here
//! so they can be re-translated whenever the language changes at runtime.

use serde::{Deserialize, Serialize};

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    Bulgarian,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::English, Locale::Bulgarian];

    /// Two-letter language code ("en", "bg").
    pub fn code(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Bulgarian => "bg",
        }
    }

    /// Accepts a bare language code or a culture name such as `bg-BG`.
    pub fn from_code(code: &str) -> Option<Self> {
        let lang = code.split(['-', '_']).next()?.to_ascii_lowercase();
        match lang.as_str() {
            "en" => Some(Locale::English),
            "bg" => Some(Locale::Bulgarian),
            _ => None,
        }
    }

    /// Language name as shown in the language selector.
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::English => "English",
            Locale::Bulgarian => "Български",
        }
    }
}

/// Captions of the programmatically built annotation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCaption {
    /// Top-level "Text" menu
    TextMenu,
    AddText,
    EditSelected,
    DeleteSelected,
}

/// Dialog titles and button labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogCaption {
    AddTextTitle,
    EditTextTitle,
    OpenImageTitle,
    SaveImageTitle,
    FontButton,
    ColorButton,
    OkButton,
    CancelButton,
}

/// User-facing notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    NoSelectionTitle,
    NoSelection,
    MissingTextTitle,
    MissingText,
    /// Shown in the status area while a ghost follows the pointer
    PlacementHint,
    ImportFailedTitle,
    ImportFailed,
    ExportFailedTitle,
    ExportFailed,
}

/// String table for the active locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Catalog {
    locale: Locale,
}

impl Catalog {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn menu(&self, caption: MenuCaption) -> &'static str {
        use MenuCaption::*;
        match (self.locale, caption) {
            (Locale::English, TextMenu) => "Text",
            (Locale::English, AddText) => "Add Text...",
            (Locale::English, EditSelected) => "Edit Selected...",
            (Locale::English, DeleteSelected) => "Delete Selected",
            (Locale::Bulgarian, TextMenu) => "Текст",
            (Locale::Bulgarian, AddText) => "Добави текст...",
            (Locale::Bulgarian, EditSelected) => "Редактирай избрания...",
            (Locale::Bulgarian, DeleteSelected) => "Изтрий избрания",
        }
    }

    pub fn dialog(&self, caption: DialogCaption) -> &'static str {
        use DialogCaption::*;
        match (self.locale, caption) {
            (Locale::English, AddTextTitle) => "Add Text",
            (Locale::English, EditTextTitle) => "Edit Text",
            (Locale::English, OpenImageTitle) => "Open Image",
            (Locale::English, SaveImageTitle) => "Save Image",
            (Locale::English, FontButton) => "Font...",
            (Locale::English, ColorButton) => "Color...",
            (Locale::English, OkButton) => "OK",
            (Locale::English, CancelButton) => "Cancel",
            (Locale::Bulgarian, AddTextTitle) => "Добавяне на текст",
            (Locale::Bulgarian, EditTextTitle) => "Редакция на текст",
            (Locale::Bulgarian, OpenImageTitle) => "Отвори изображение",
            (Locale::Bulgarian, SaveImageTitle) => "Запази изображение",
            (Locale::Bulgarian, FontButton) => "Шрифт...",
            (Locale::Bulgarian, ColorButton) => "Цвят...",
            (Locale::Bulgarian, OkButton) => "OK",
            (Locale::Bulgarian, CancelButton) => "Отказ",
        }
    }

    pub fn message(&self, message: Message) -> &'static str {
        use Message::*;
        match (self.locale, message) {
            (Locale::English, NoSelectionTitle) => "No selection",
            (Locale::English, NoSelection) => "Click a text first to select it.",
            (Locale::English, MissingTextTitle) => "Missing text",
            (Locale::English, MissingText) => "Please enter some text.",
            (Locale::English, PlacementHint) => "(click on the image to place the text)",
            (Locale::English, ImportFailedTitle) => "Open failed",
            (Locale::English, ImportFailed) => "The file could not be opened as an image.",
            (Locale::English, ExportFailedTitle) => "Save failed",
            (Locale::English, ExportFailed) => "The image could not be saved.",
            (Locale::Bulgarian, NoSelectionTitle) => "Няма избран текст",
            (Locale::Bulgarian, NoSelection) => "Първо избери текст с клик върху него.",
            (Locale::Bulgarian, MissingTextTitle) => "Липсва текст",
            (Locale::Bulgarian, MissingText) => "Моля въведи текст.",
            (Locale::Bulgarian, PlacementHint) => "(кликни върху картинката, за да сложиш текста)",
            (Locale::Bulgarian, ImportFailedTitle) => "Грешка при отваряне",
            (Locale::Bulgarian, ImportFailed) => "Файлът не може да бъде отворен като изображение.",
            (Locale::Bulgarian, ExportFailedTitle) => "Грешка при запис",
            (Locale::Bulgarian, ExportFailed) => "Изображението не може да бъде записано.",
        }
    }

    /// The annotation menu in display order: the menu title followed by its items.
    pub fn annotation_menu(&self) -> [(MenuCaption, &'static str); 4] {
        [
            MenuCaption::TextMenu,
            MenuCaption::AddText,
            MenuCaption::EditSelected,
            MenuCaption::DeleteSelected,
        ]
        .map(|caption| (caption, self.menu(caption)))
    }
}
