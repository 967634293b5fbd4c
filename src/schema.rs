use crate::models::{Category, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Full,
    Compact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub field: &'static str,
    pub header: &'static str,
}

const fn col(field: &'static str, header: &'static str) -> Column {
    Column { field, header }
}

const MOUSE_FULL: &[Column] = &[
    col("time", "Time"),
    col("action", "Action"),
    col("position", "Position"),
    col("duration", "Duration"),
    col("clicks", "Clicks"),
];
const KEYBOARD_FULL: &[Column] = &[
    col("time", "Time"),
    col("key", "Keys"),
    col("duration", "Duration"),
    col("backspace_rate", "Backspace rate"),
];
const EMOTION_FULL: &[Column] = &[
    col("time", "Time"),
    col("emotion", "Emotion"),
    col("description", "Description"),
];
const MOUSE_COMPACT: &[Column] = &[
    col("time", "Time"),
    col("action", "Action"),
    col("position", "Position"),
];
const KEYBOARD_COMPACT: &[Column] = &[
    col("time", "Time"),
    col("key", "Keys"),
    col("duration", "Duration"),
];

pub fn columns(category: Category, layout: Layout) -> &'static [Column] {
    match (category, layout) {
        (Category::Mouse, Layout::Full) => MOUSE_FULL,
        (Category::Keyboard, Layout::Full) => KEYBOARD_FULL,
        (Category::Mouse, Layout::Compact) => MOUSE_COMPACT,
        (Category::Keyboard, Layout::Compact) => KEYBOARD_COMPACT,
        (Category::Emotion, _) => EMOTION_FULL,
    }
}

pub fn row_cells(record: &Record, columns: &[Column]) -> Vec<String> {
    columns.iter().map(|column| record.text(column.field)).collect()
}
