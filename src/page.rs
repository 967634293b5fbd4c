use crate::messages::Messages;
use crate::models::Category;
use crate::schema::{columns, Column, Layout};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Admin,
    Student,
}

impl Variant {
    pub fn layout(self) -> Layout {
        match self {
            Variant::Admin => Layout::Full,
            Variant::Student => Layout::Compact,
        }
    }

    pub fn no_data_text(self, messages: &Messages) -> &'static str {
        match self {
            Variant::Admin => messages.no_data,
            Variant::Student => messages.no_activity_data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub colspan: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<Cell>,
    pub placeholder: bool,
}

#[derive(Debug, Clone)]
pub struct TableBody {
    pub columns: &'static [Column],
    pub rows: Vec<Row>,
}

impl TableBody {
    pub fn new(columns: &'static [Column]) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn set_records(&mut self, rows: Vec<Vec<String>>) {
        self.rows = rows
            .into_iter()
            .map(|cells| Row {
                cells: cells
                    .into_iter()
                    .map(|text| Cell { text, colspan: 1 })
                    .collect(),
                placeholder: false,
            })
            .collect();
    }

    pub fn set_message(&mut self, text: impl Into<String>) {
        self.rows = vec![Row {
            cells: vec![Cell {
                text: text.into(),
                colspan: self.column_count(),
            }],
            placeholder: true,
        }];
    }

    pub fn data_row_count(&self) -> usize {
        self.rows.iter().filter(|row| !row.placeholder).count()
    }

    pub fn placeholder_text(&self) -> Option<&str> {
        match self.rows.as_slice() {
            [row] if row.placeholder => row.cells.first().map(|cell| cell.text.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Panel {
    pub category: Category,
    pub visible: bool,
    pub body: Option<TableBody>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabButton {
    pub id: String,
    pub category: Category,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct Page {
    pub variant: Variant,
    pub panels: Vec<Panel>,
    pub buttons: Vec<TabButton>,
    pub selected_student: String,
    pub details_visible: bool,
    pub monitor_mouse: bool,
    pub monitor_keyboard: bool,
    pub modal_open: bool,
    pub alerts: Vec<String>,
    pub reload_requested: bool,
}

impl Page {
    pub fn new(variant: Variant) -> Self {
        let layout = variant.layout();
        let panels = Category::ALL
            .into_iter()
            .map(|category| {
                // The student page's emotion tab holds the self-report form, not a table.
                let has_body = variant == Variant::Admin || category != Category::Emotion;
                Panel {
                    category,
                    visible: false,
                    body: has_body.then(|| TableBody::new(columns(category, layout))),
                }
            })
            .collect();
        let buttons = Category::ALL
            .into_iter()
            .map(|category| TabButton {
                id: format!("{category}-tab"),
                category,
                active: false,
            })
            .collect();

        let mut page = Self {
            variant,
            panels,
            buttons,
            selected_student: String::new(),
            details_visible: false,
            monitor_mouse: false,
            monitor_keyboard: false,
            modal_open: variant == Variant::Student,
            alerts: Vec::new(),
            reload_requested: false,
        };
        page.show_panel(Category::Mouse);
        page.mark_active(&format!("{}-tab", Category::Mouse));
        page
    }

    pub fn admin() -> Self {
        Self::new(Variant::Admin)
    }

    pub fn student() -> Self {
        Self::new(Variant::Student)
    }

    pub fn body(&self, category: Category) -> Option<&TableBody> {
        self.panels
            .iter()
            .find(|panel| panel.category == category)
            .and_then(|panel| panel.body.as_ref())
    }

    pub fn body_mut(&mut self, category: Category) -> Option<&mut TableBody> {
        self.panels
            .iter_mut()
            .find(|panel| panel.category == category)
            .and_then(|panel| panel.body.as_mut())
    }

    pub fn show_panel(&mut self, category: Category) {
        for panel in &mut self.panels {
            panel.visible = panel.category == category;
        }
    }

    pub fn mark_active(&mut self, id: &str) -> bool {
        if !self.buttons.iter().any(|button| button.id == id) {
            return false;
        }
        for button in &mut self.buttons {
            button.active = button.id == id;
        }
        true
    }

    pub fn button_for(&self, category: Category) -> Option<&TabButton> {
        self.buttons.iter().find(|button| button.category == category)
    }

    pub fn visible_panels(&self) -> Vec<Category> {
        self.panels
            .iter()
            .filter(|panel| panel.visible)
            .map(|panel| panel.category)
            .collect()
    }

    pub fn active_buttons(&self) -> Vec<&str> {
        self.buttons
            .iter()
            .filter(|button| button.active)
            .map(|button| button.id.as_str())
            .collect()
    }

    pub fn alert(&mut self, message: impl Into<String>) {
        self.alerts.push(message.into());
    }

    pub fn render_html(&self) -> String {
        let header = match self.variant {
            Variant::Admin => format!(
                r#"<div id="student-details" style="display: {}">
  <h2>Student: <span id="selected-student">{}</span></h2>
"#,
                display(self.details_visible),
                escape_text(&self.selected_student)
            ),
            Variant::Student => format!(
                r#"<div id="monitor-controls">
  <input type="checkbox" id="monitor-mouse"{}>
  <input type="checkbox" id="monitor-keyboard"{}>
"#,
                checked(self.monitor_mouse),
                checked(self.monitor_keyboard)
            ),
        };

        let buttons: String = self
            .buttons
            .iter()
            .map(|button| {
                let class = if button.active { "tab-btn active" } else { "tab-btn" };
                format!(
                    "    <button id=\"{}\" class=\"{class}\">{}</button>\n",
                    button.id, button.category
                )
            })
            .collect();

        let panels: String = self
            .panels
            .iter()
            .map(|panel| {
                format!(
                    "  <div id=\"{}\" class=\"tab-content\" style=\"display: {}\">\n{}  </div>\n",
                    panel.category.panel_id(),
                    display(panel.visible),
                    panel
                        .body
                        .as_ref()
                        .map(|body| render_table(panel.category, body))
                        .unwrap_or_default()
                )
            })
            .collect();

        format!("{header}  <div class=\"tabs\">\n{buttons}  </div>\n{panels}</div>\n")
    }
}

fn render_table(category: Category, body: &TableBody) -> String {
    let headers: String = body
        .columns
        .iter()
        .map(|column| format!("<th>{}</th>", column.header))
        .collect();
    let rows: String = body
        .rows
        .iter()
        .map(|row| {
            let cells: String = row
                .cells
                .iter()
                .map(|cell| match cell.colspan {
                    0 | 1 => format!("<td>{}</td>", escape_text(&cell.text)),
                    span => format!(r#"<td colspan="{span}">{}</td>"#, escape_text(&cell.text)),
                })
                .collect();
            format!("        <tr>{cells}</tr>\n")
        })
        .collect();

    format!(
        r#"    <table>
      <thead><tr>{headers}</tr></thead>
      <tbody id="{}">
{rows}      </tbody>
    </table>
"#,
        category.body_id()
    )
}

fn display(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}

fn checked(flag: bool) -> &'static str {
    if flag { " checked" } else { "" }
}

pub fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_page_shows_default_tab() {
        let page = Page::admin();
        assert_eq!(page.visible_panels(), vec![Category::Mouse]);
        assert_eq!(page.active_buttons(), vec!["mouse-tab"]);
        assert!(!page.details_visible);
    }

    #[test]
    fn student_page_has_no_emotion_table() {
        let page = Page::student();
        assert!(page.body(Category::Mouse).is_some());
        assert!(page.body(Category::Keyboard).is_some());
        assert!(page.body(Category::Emotion).is_none());
        assert_eq!(page.body(Category::Mouse).unwrap().column_count(), 3);
    }

    #[test]
    fn message_row_spans_columns() {
        let mut page = Page::admin();
        let body = page.body_mut(Category::Keyboard).unwrap();
        body.set_records(vec![vec!["a".into(); 4]]);
        body.set_message("No data");
        assert_eq!(body.rows.len(), 1);
        assert_eq!(body.data_row_count(), 0);
        assert_eq!(body.rows[0].cells[0].colspan, 4);
        assert_eq!(body.placeholder_text(), Some("No data"));
    }

    #[test]
    fn unknown_button_leaves_indicator_alone() {
        let mut page = Page::admin();
        assert!(!page.mark_active("scroll-tab"));
        assert_eq!(page.active_buttons(), vec!["mouse-tab"]);
    }

    #[test]
    fn render_escapes_cell_text() {
        let mut page = Page::admin();
        page.selected_student = "<b>eve</b>".into();
        page.body_mut(Category::Emotion)
            .unwrap()
            .set_records(vec![vec![
                "10:00".into(),
                "<script>alert(1)</script>".into(),
                "\"quoted\" & 'single'".into(),
            ]]);
        let html = page.render_html();
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("&quot;quoted&quot; &amp; &#39;single&#39;"));
        assert!(html.contains("&lt;b&gt;eve&lt;/b&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn render_marks_visible_panel_and_spanning_placeholder() {
        let mut page = Page::admin();
        page.show_panel(Category::Keyboard);
        page.mark_active("keyboard-tab");
        page.body_mut(Category::Mouse).unwrap().set_message("No data");
        let html = page.render_html();
        assert!(html.contains(r#"<button id="keyboard-tab" class="tab-btn active">keyboard</button>"#));
        assert!(html.contains(r#"<button id="mouse-tab" class="tab-btn">mouse</button>"#));
        assert!(html.contains(r#"<div id="keyboard-data" class="tab-content" style="display: block">"#));
        assert!(html.contains(r#"<div id="mouse-data" class="tab-content" style="display: none">"#));
        assert!(html.contains(r#"<tbody id="mouse-data-body">"#));
        assert!(html.contains(r#"<tr><td colspan="5">No data</td></tr>"#));
        assert_eq!(html.matches("<table>").count(), 3);
    }
}
