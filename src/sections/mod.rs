use crate::theme::Theme;
use eframe::egui::{self, RichText};

pub mod features;
pub mod integration;
pub mod pricing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    Features,
    Pricing,
    Integration,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Features,
        Section::Pricing,
        Section::Integration,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Features => "Features",
            Self::Pricing => "Pricing",
            Self::Integration => "Integration",
        }
    }
}

/// Eyebrow, headline and lead paragraph shared by every section.
pub(crate) fn section_header(ui: &mut egui::Ui, theme: &Theme, eyebrow: Option<&str>, title: &str, lead: &str) {
    ui.vertical_centered(|ui| {
        if let Some(eyebrow) = eyebrow {
            ui.label(theme.eyebrow(eyebrow));
            ui.add_space(theme.spacing_4);
        }
        ui.label(
            RichText::new(title)
                .color(theme.text_primary)
                .size(30.0)
                .strong(),
        );
        ui.add_space(theme.spacing_8);
        ui.label(RichText::new(lead).color(theme.text_muted).size(18.0));
    });
    ui.add_space(theme.spacing_48);
}
