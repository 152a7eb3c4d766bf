use crate::sections::section_header;
use crate::theme::Theme;
use eframe::egui::{self, RichText};

pub const TRIAL_DAYS: u32 = 14;

#[derive(Debug, Clone, Copy)]
pub struct Tier {
    pub name: &'static str,
    pub monthly_price: u32,
    pub features: &'static [&'static str],
}

pub static TIERS: [Tier; 3] = [
    Tier {
        name: "Starter",
        monthly_price: 29,
        features: &[
            "100,000 searches/month",
            "Basic AI responses",
            "Standard support",
            "Up to 1,000 pages indexed",
            "Basic analytics",
        ],
    },
    Tier {
        name: "Pro",
        monthly_price: 99,
        features: &[
            "500,000 searches/month",
            "Advanced AI responses",
            "Priority support",
            "Up to 10,000 pages indexed",
            "Advanced analytics",
            "Custom styling",
            "API access",
        ],
    },
    Tier {
        name: "Enterprise",
        monthly_price: 299,
        features: &[
            "Unlimited searches",
            "Custom AI model training",
            "24/7 dedicated support",
            "Unlimited pages indexed",
            "Custom analytics",
            "White-labeling",
            "Advanced API access",
            "SLA guarantee",
        ],
    },
];

impl Tier {
    pub fn price_label(&self) -> String {
        format!("${}", self.monthly_price)
    }
}

/// Renders the tier grid. Returns the tier whose call to action was clicked.
pub fn render(ui: &mut egui::Ui, theme: &Theme) -> Option<&'static Tier> {
    section_header(
        ui,
        theme,
        None,
        "Simple, transparent pricing",
        &format!("Choose the perfect plan for your needs. All plans include a {TRIAL_DAYS}-day free trial."),
    );

    let mut clicked = None;
    ui.columns(TIERS.len(), |columns| {
        for (column, tier) in columns.iter_mut().zip(TIERS.iter()) {
            if render_tier(column, theme, tier) {
                clicked = Some(tier);
            }
        }
    });
    clicked
}

fn render_tier(ui: &mut egui::Ui, theme: &Theme, tier: &Tier) -> bool {
    let mut clicked = false;
    theme.card_frame().show(ui, |ui| {
        ui.label(
            RichText::new(tier.name)
                .color(theme.text_primary)
                .size(22.0)
                .strong(),
        );
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(tier.price_label())
                    .color(theme.text_primary)
                    .size(40.0)
                    .strong(),
            );
            ui.label(RichText::new("/month").color(theme.text_muted).size(18.0));
        });
        ui.add_space(theme.spacing_8);
        let button = theme
            .primary_button("Start free trial")
            .min_size(egui::vec2(ui.available_width(), 40.0));
        clicked = ui.add(button).clicked();

        ui.separator();
        for feature in tier.features {
            ui.horizontal(|ui| {
                ui.label(RichText::new("✔").color(theme.success));
                ui.label(RichText::new(*feature).color(theme.text_secondary));
            });
        }
    });
    clicked
}
