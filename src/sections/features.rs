use crate::sections::section_header;
use crate::theme::Theme;
use eframe::egui::{self, RichText};

#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        name: "Intelligent Search",
        description: "Advanced AI algorithms understand context and user intent for more accurate results.",
        icon: "🔍",
    },
    Feature {
        name: "Easy Integration",
        description: "Simple API and drop-in components for quick implementation in any website.",
        icon: "💻",
    },
    Feature {
        name: "Secure & Private",
        description: "Enterprise-grade security with data encryption and privacy controls.",
        icon: "🛡",
    },
    Feature {
        name: "Lightning Fast",
        description: "Optimized performance with response times under 100ms.",
        icon: "⏱",
    },
    Feature {
        name: "Smart Indexing",
        description: "Automatic content indexing with custom crawling schedules.",
        icon: "🗄",
    },
    Feature {
        name: "Real-time Updates",
        description: "Content updates are reflected instantly in search results.",
        icon: "⚡",
    },
];

const COLUMNS: usize = 3;

pub fn render(ui: &mut egui::Ui, theme: &Theme) {
    section_header(
        ui,
        theme,
        Some("Features"),
        "Everything you need for intelligent search",
        "Powerful features to enhance your website's search capabilities and user experience.",
    );

    for row in FEATURES.chunks(COLUMNS) {
        ui.columns(COLUMNS, |columns| {
            for (column, feature) in columns.iter_mut().zip(row) {
                render_card(column, theme, feature);
            }
        });
        ui.add_space(theme.spacing_24);
    }
}

fn render_card(ui: &mut egui::Ui, theme: &Theme, feature: &Feature) {
    theme.card_frame().show(ui, |ui| {
        ui.set_min_height(140.0);
        egui::Frame::new()
            .fill(theme.accent)
            .inner_margin(egui::Margin::same(theme.spacing_8 as i8))
            .corner_radius(egui::CornerRadius::same(theme.radius_8))
            .show(ui, |ui| {
                ui.label(RichText::new(feature.icon).color(theme.text_on_accent).size(20.0));
            });
        ui.add_space(theme.spacing_8);
        ui.label(
            RichText::new(feature.name)
                .color(theme.text_primary)
                .size(18.0)
                .strong(),
        );
        ui.label(RichText::new(feature.description).color(theme.text_muted));
    });
}
