use crate::error::Result;
use crate::navigation::{Located, format_link};
use crate::quiz::Sheet;
use handlebars::Handlebars;
use serde_json::json;

/// HTML views of the quiz, rendered from templates compiled into the binary.
pub struct Renderer {
    registry: Handlebars<'static>,
}

impl Renderer {
    /// Register every template. Fails on a malformed template.
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_partial("header", include_str!("./static/header.hbs"))?;
        registry.register_partial("footer", include_str!("./static/footer.hbs"))?;
        registry.register_template_string("sheets", include_str!("./static/sheets.hbs"))?;
        registry.register_template_string("question", include_str!("./static/question.hbs"))?;
        registry.register_template_string("error", include_str!("./static/error.hbs"))?;

        Ok(Renderer { registry })
    }

    /// List every sheet with a link to its first screen.
    pub fn render_sheets(&self, sheets: &[Sheet]) -> Result<String> {
        let sheets: Vec<_> = sheets
            .iter()
            .map(|sheet| {
                json!({
                    "name": sheet.name(),
                    "question_count": sheet.questions().len(),
                    "start_link": sheet.start_link(),
                })
            })
            .collect();

        Ok(self.registry.render(
            "sheets",
            &json!({ "title": "Trivia sheets", "sheets": sheets }),
        )?)
    }

    pub fn render_state(&self, located: &Located<'_>) -> Result<String> {
        let state = located.state;
        let sheet_name = located.sheet.name();

        Ok(self.registry.render(
            "question",
            &json!({
                "title": format!("{} - {}", sheet_name, state.header),
                "sheet": sheet_name,
                "position": located.index + 1,
                "total": located.total,
                "header": state.header,
                "body_text": state.body_text,
                "answers": state.revealed_answers,
                "back_link": format_link(sheet_name, state.previous_index),
                "next_link": format_link(sheet_name, state.next_index),
            }),
        )?)
    }

    pub fn render_error(&self, message: &str) -> Result<String> {
        Ok(self
            .registry
            .render("error", &json!({ "title": "Error", "error": message }))?)
    }
}
