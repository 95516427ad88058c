#![allow(dead_code)]

use std::collections::HashMap;
use word_count::{DisplayField, FileSource, Mode, ModeSelector, ResultDisplay, SelectedFile};

/// Records every display write so tests can check what was (not) touched.
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub fields: HashMap<DisplayField, String>,
    pub markup: Option<String>,
    pub field_writes: usize,
    pub markup_writes: usize,
}

impl RecordingDisplay {
    pub fn field(&self, field: DisplayField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }
}

impl ResultDisplay for RecordingDisplay {
    fn set_field(&mut self, field: DisplayField, text: &str) {
        self.field_writes += 1;
        self.fields.insert(field, text.to_string());
    }

    fn set_markup(&mut self, markup: &str) {
        self.markup_writes += 1;
        self.markup = Some(markup.to_string());
    }
}

pub struct PickedFile(pub Option<SelectedFile>);

impl FileSource for PickedFile {
    fn selected_file(&self) -> Option<SelectedFile> {
        self.0.clone()
    }
}

pub struct Selector(pub Mode);

impl ModeSelector for Selector {
    fn mode(&self) -> Mode {
        self.0
    }
}

pub fn text_file(name: &str, contents: &str) -> PickedFile {
    PickedFile(Some(SelectedFile::new(name, contents.as_bytes())))
}
