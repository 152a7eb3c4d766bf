use eframe::egui::{self, Color32, CornerRadius, FontId, Frame, Margin, RichText, Stroke, TextStyle};

#[derive(Debug, Clone)]
pub struct Theme {
    pub page_background: Color32,
    pub section_background: Color32,
    pub surface: Color32,
    pub surface_muted: Color32,
    pub code_background: Color32,
    pub accent: Color32,
    pub accent_hover: Color32,
    pub accent_soft: Color32,
    pub success: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub text_on_accent: Color32,
    pub text_code: Color32,
    pub border: Color32,
    pub spacing_4: f32,
    pub spacing_8: f32,
    pub spacing_12: f32,
    pub spacing_16: f32,
    pub spacing_24: f32,
    pub spacing_48: f32,
    pub radius_8: u8,
    pub radius_12: u8,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            page_background: Color32::WHITE,
            section_background: Color32::from_rgb(0xF9, 0xFA, 0xFB),
            surface: Color32::WHITE,
            surface_muted: Color32::from_rgb(0xF3, 0xF4, 0xF6),
            code_background: Color32::from_rgb(0x1F, 0x29, 0x37),
            accent: Color32::from_rgb(0x4F, 0x46, 0xE5),
            accent_hover: Color32::from_rgb(0x43, 0x38, 0xCA),
            accent_soft: Color32::from_rgb(0xE0, 0xE7, 0xFF),
            success: Color32::from_rgb(0x22, 0xC5, 0x5E),
            text_primary: Color32::from_rgb(0x11, 0x18, 0x27),
            text_secondary: Color32::from_rgb(0x4B, 0x55, 0x63),
            text_muted: Color32::from_rgb(0x6B, 0x72, 0x80),
            text_on_accent: Color32::WHITE,
            text_code: Color32::from_rgb(0xF3, 0xF4, 0xF6),
            border: Color32::from_rgb(0xE5, 0xE7, 0xEB),
            spacing_4: 4.0,
            spacing_8: Self::P8,
            spacing_12: 12.0,
            spacing_16: Self::P16,
            spacing_24: Self::P24,
            spacing_48: 48.0,
            radius_8: Self::R8,
            radius_12: Self::R12,
        }
    }
}

impl Theme {
    pub const R8: u8 = 8;
    pub const R12: u8 = 12;
    pub const P8: f32 = 8.0;
    pub const P16: f32 = 16.0;
    pub const P24: f32 = 24.0;

    pub fn apply_visuals(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::light();
        visuals.panel_fill = self.page_background;
        visuals.override_text_color = Some(self.text_primary);
        visuals.widgets.noninteractive.bg_fill = self.surface;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.inactive.bg_fill = self.surface_muted;
        visuals.widgets.inactive.weak_bg_fill = self.surface_muted;
        visuals.widgets.inactive.bg_stroke = Stroke::NONE;
        visuals.widgets.hovered.bg_fill = self.border;
        visuals.widgets.hovered.weak_bg_fill = self.border;
        visuals.widgets.hovered.bg_stroke = Stroke::NONE;
        visuals.widgets.active.bg_fill = self.accent_hover;
        visuals.widgets.active.bg_stroke = Stroke::NONE;
        visuals.selection.bg_fill = self.accent_soft;
        visuals.selection.stroke = Stroke::new(1.0, self.accent);
        visuals.hyperlink_color = self.accent;
        visuals.extreme_bg_color = self.surface;

        let mut style = (*ctx.style()).clone();
        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(10.0, 10.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.text_styles.insert(TextStyle::Heading, FontId::proportional(28.0));
        style.text_styles.insert(TextStyle::Body, FontId::proportional(14.0));
        style.text_styles.insert(TextStyle::Button, FontId::proportional(14.0));
        style.text_styles.insert(TextStyle::Monospace, FontId::monospace(13.0));
        style.text_styles.insert(TextStyle::Small, FontId::proportional(12.0));
        ctx.set_style(style);
    }

    pub fn card_frame(&self) -> Frame {
        Frame::new()
            .fill(self.surface)
            .inner_margin(Margin::same(self.spacing_24 as i8))
            .corner_radius(CornerRadius::same(self.radius_12))
            .stroke(Stroke::new(1.0, self.border))
            .shadow(egui::epaint::Shadow {
                offset: [0, 2],
                blur: 8,
                spread: 0,
                color: Color32::from_rgba_premultiplied(0, 0, 0, 16),
            })
    }

    pub fn code_frame(&self) -> Frame {
        Frame::new()
            .fill(self.code_background)
            .inner_margin(Margin::same(self.spacing_16 as i8))
            .corner_radius(CornerRadius::same(self.radius_8))
    }

    pub fn bubble_frame(&self, from_user: bool) -> Frame {
        let fill = if from_user {
            self.accent
        } else {
            self.surface_muted
        };
        Frame::new()
            .fill(fill)
            .inner_margin(Margin::same(self.spacing_12 as i8))
            .corner_radius(CornerRadius::same(self.radius_8))
    }

    /// Small uppercase label shown above section headlines.
    pub fn eyebrow(&self, text: &str) -> RichText {
        RichText::new(text.to_uppercase())
            .color(self.accent)
            .size(14.0)
            .strong()
    }

    pub fn primary_button<'a>(&self, text: &'a str) -> egui::Button<'a> {
        egui::Button::new(RichText::new(text).color(self.text_on_accent).strong())
            .fill(self.accent)
            .stroke(Stroke::NONE)
            .corner_radius(CornerRadius::same(self.radius_8))
    }

    pub fn toggle_button<'a>(&self, text: &'a str, selected: bool) -> egui::Button<'a> {
        let (fill, color) = if selected {
            (self.accent, self.text_on_accent)
        } else {
            (self.surface_muted, self.text_secondary)
        };
        egui::Button::new(RichText::new(text).color(color))
            .fill(fill)
            .stroke(Stroke::NONE)
            .corner_radius(CornerRadius::same(self.radius_8))
    }
}
