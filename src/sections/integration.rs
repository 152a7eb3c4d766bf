use crate::sections::section_header;
use crate::theme::Theme;
use eframe::egui::{self, RichText};

#[derive(Debug, Clone, Copy)]
pub struct Snippet {
    pub title: &'static str,
    pub language: &'static str,
    pub code: &'static str,
}

pub const SNIPPETS: [Snippet; 2] = [
    Snippet {
        title: "Add the widget script",
        language: "html",
        code: r#"// 1. Add our script to your HTML
<script src="https://cdn.searchai.com/widget.js"></script>

// 2. Initialize the search bar
<script>
  SearchAI.init({
    apiKey: 'your_api_key',
    selector: '#search-container',
    theme: 'light',
    placeholder: 'Search your website...'
  });
</script>

// 3. Add the search container
<div id="search-container"></div>"#,
    },
    Snippet {
        title: "Or use our React component",
        language: "jsx",
        code: r#"import { SearchAI } from '@searchai/react';

function App() {
  return (
    <SearchAI
      apiKey="your_api_key"
      theme="light"
      placeholder="Search your website..."
      onResult={(result) => {
        console.log(result.answer, result.sources);
      }}
    />
  );
}"#,
    },
];

pub fn render(ui: &mut egui::Ui, theme: &Theme) {
    section_header(
        ui,
        theme,
        Some("Integration"),
        "Simple to integrate, powerful to use",
        "Add our AI-powered search to your website with just a few lines of code",
    );

    for snippet in &SNIPPETS {
        theme.card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(snippet.title)
                        .color(theme.text_primary)
                        .size(18.0)
                        .strong(),
                );
                ui.label(RichText::new(snippet.language).color(theme.text_muted).small());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Copy").clicked() {
                        ui.ctx().copy_text(snippet.code.to_string());
                        tracing::debug!(snippet = snippet.title, "snippet copied");
                    }
                });
            });
            ui.add_space(theme.spacing_8);
            theme.code_frame().show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    RichText::new(snippet.code)
                        .color(theme.text_code)
                        .monospace(),
                );
            });
        });
        ui.add_space(theme.spacing_24);
    }
}

#[cfg(test)]
mod tests {
    use super::SNIPPETS;

    #[test]
    fn script_snippet_initializes_the_widget() {
        let script = SNIPPETS[0].code;
        assert!(script.contains("SearchAI.init({"));
        assert!(script.contains("selector: '#search-container'"));
        assert!(script.contains(r#"<div id="search-container"></div>"#));
    }

    #[test]
    fn component_snippet_matches_the_demo_answer() {
        let answer = crate::demo::responses::CANNED_RESPONSES[1].answer;
        assert!(answer.contains("<SearchAI>"));
        assert!(SNIPPETS[1].code.contains("<SearchAI"));
        assert!(SNIPPETS[1].code.contains("result.sources"));
    }
}
