use crate::demo::conversation::Conversation;
use crate::demo::{DisplayMode, Message, Role};
use crate::event::AppEvent;
use crate::scheduler::ReplyScheduler;
use crate::sections::{self, Section};
use crate::theme::Theme;
use eframe::egui::{self, Align, Layout, RichText, ScrollArea};
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;
use tracing::{debug, info, warn};

const DEMO_HEIGHT: f32 = 500.0;
const DEMO_WIDTH: f32 = 448.0;
const LOADING_REPAINT: Duration = Duration::from_millis(60);

pub struct LandingApp {
    rx: Receiver<AppEvent>,
    scheduler: ReplyScheduler,
    conversation: Conversation,
    theme: Theme,
    section: Section,
    scroll_to_bottom: bool,
}

impl LandingApp {
    pub fn new(
        rx: Receiver<AppEvent>,
        scheduler: ReplyScheduler,
        conversation: Conversation,
        theme: Theme,
    ) -> Self {
        Self {
            rx,
            scheduler,
            conversation,
            theme,
            section: Section::default(),
            scroll_to_bottom: false,
        }
    }

    fn submit_input(&mut self) {
        match self.conversation.submit() {
            Ok(ticket) => {
                self.scheduler.schedule(ticket);
                self.scroll_to_bottom = true;
            }
            Err(reason) => debug!(%reason, "submission ignored"),
        }
    }

    fn drain_events(&mut self) {
        loop {
            match self.rx.try_recv() {
                Ok(event) => self.apply_event(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    warn!("event channel disconnected");
                    break;
                }
            }
        }
    }

    fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ReplyDue(ticket) => {
                if self.conversation.complete(ticket.id) {
                    self.scroll_to_bottom = true;
                }
            }
        }
    }

    fn navigate(&mut self, section: Section) {
        if self.section != section {
            info!(section = section.label(), "navigated");
            self.section = section;
        }
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        let mut target = None;
        egui::TopBottomPanel::top("top_bar")
            .frame(
                egui::Frame::new()
                    .fill(self.theme.surface)
                    .inner_margin(egui::Margin::symmetric(self.theme.spacing_24 as i8, 12)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("🔍 SearchAI")
                            .color(self.theme.accent)
                            .size(20.0)
                            .strong(),
                    );
                    ui.add_space(self.theme.spacing_24);
                    for section in Section::ALL {
                        let selected = self.section == section;
                        if ui
                            .add(self.theme.toggle_button(section.label(), selected))
                            .clicked()
                        {
                            target = Some(section);
                        }
                    }
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.add(self.theme.primary_button("Get started")).clicked() {
                            target = Some(Section::Pricing);
                        }
                    });
                });
            });

        if let Some(section) = target {
            self.navigate(section);
        }
    }

    fn render_center_panel(&mut self, ctx: &egui::Context) {
        let fill = match self.section {
            Section::Features | Section::Integration => self.theme.section_background,
            Section::Home | Section::Pricing => self.theme.page_background,
        };
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(fill)
                    .inner_margin(egui::Margin::same(self.theme.spacing_48 as i8)),
            )
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .id_salt("page")
                    .auto_shrink([false, false])
                    .show(ui, |ui| match self.section {
                        Section::Home => self.render_home(ui),
                        Section::Features => sections::features::render(ui, &self.theme),
                        Section::Pricing => {
                            if let Some(tier) = sections::pricing::render(ui, &self.theme) {
                                info!(tier = tier.name, "free trial requested");
                            }
                        }
                        Section::Integration => sections::integration::render(ui, &self.theme),
                    });
            });
    }

    fn render_home(&mut self, ui: &mut egui::Ui) {
        ui.columns(2, |columns| {
            let theme = &self.theme;
            let hero = &mut columns[0];
            hero.add_space(theme.spacing_48);
            hero.label(
                RichText::new("Intelligent search for your website")
                    .color(theme.text_primary)
                    .size(40.0)
                    .strong(),
            );
            hero.add_space(theme.spacing_16);
            hero.label(
                RichText::new(
                    "Give your visitors instant answers with AI-powered search and chat, \
                     complete with source citations. Try the demo: ask about our pricing, \
                     features, integration, or security.",
                )
                .color(theme.text_muted)
                .size(18.0),
            );

            self.render_demo(&mut columns[1]);
        });
    }

    fn render_demo(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme.clone();
        theme.card_frame().show(ui, |ui| {
            ui.set_max_width(DEMO_WIDTH);
            ui.set_min_height(DEMO_HEIGHT);

            ui.horizontal(|ui| {
                for (mode, icon) in [(DisplayMode::Search, "🔍"), (DisplayMode::Chat, "💬")] {
                    let label = format!("{icon} {}", mode.label());
                    let selected = self.conversation.mode() == mode;
                    if ui.add(theme.toggle_button(&label, selected)).clicked() {
                        self.conversation.set_mode(mode);
                    }
                }
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.small_button("Copy transcript").clicked() {
                        match self.conversation.transcript_json() {
                            Ok(json) => ui.ctx().copy_text(json),
                            Err(err) => warn!(%err, "failed to serialize transcript"),
                        }
                    }
                });
            });
            ui.separator();

            let transcript_height = (DEMO_HEIGHT - 120.0).max(120.0);
            ScrollArea::vertical()
                .id_salt("demo_transcript")
                .max_height(transcript_height)
                .min_scrolled_height(transcript_height)
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for message in self.conversation.transcript() {
                        render_message(ui, &theme, message);
                    }
                    if self.conversation.is_loading() {
                        render_typing_indicator(ui, &theme);
                    }
                    if self.scroll_to_bottom {
                        ui.scroll_to_cursor(Some(Align::BOTTOM));
                    }
                });
            self.scroll_to_bottom = false;

            ui.separator();
            let mut send_now = false;
            ui.horizontal(|ui| {
                let hint = self.conversation.mode().placeholder();
                let send_width = 44.0;
                let response = ui.add(
                    egui::TextEdit::singleline(self.conversation.input_mut())
                        .desired_width(ui.available_width() - send_width)
                        .hint_text(hint),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    send_now = true;
                    response.request_focus();
                }

                let enabled = self.conversation.can_submit();
                let button = if enabled {
                    theme.primary_button("➡")
                } else {
                    theme.toggle_button("➡", false)
                };
                send_now |= ui.add_enabled(enabled, button).clicked();
            });

            if send_now {
                self.submit_input();
            }
        });
    }
}

fn render_message(ui: &mut egui::Ui, theme: &Theme, message: &Message) {
    let from_user = message.role == Role::User;
    let layout = if from_user {
        Layout::right_to_left(Align::TOP)
    } else {
        Layout::left_to_right(Align::TOP)
    };

    ui.with_layout(layout, |ui| {
        let avatar = if from_user { "👤" } else { "🤖" };
        ui.label(RichText::new(avatar).color(theme.accent));
        theme.bubble_frame(from_user).show(ui, |ui| {
            ui.set_max_width(DEMO_WIDTH * 0.8);
            let (text_color, meta_color) = if from_user {
                (theme.text_on_accent, theme.surface_muted)
            } else {
                (theme.text_secondary, theme.text_muted)
            };
            ui.vertical(|ui| {
                ui.label(RichText::new(&message.text).color(text_color));
                if let Some(sources) = &message.sources {
                    ui.label(
                        RichText::new(format!("🗄 Sources: {}", sources.join(", ")))
                            .color(meta_color)
                            .small(),
                    );
                }
            });
        });
    });
}

fn render_typing_indicator(ui: &mut egui::Ui, theme: &Theme) {
    let time = ui.input(|i| i.time);
    ui.horizontal(|ui| {
        ui.label(RichText::new("🤖").color(theme.accent));
        theme.bubble_frame(false).show(ui, |ui| {
            ui.horizontal(|ui| {
                for dot in 0..3 {
                    let phase = (time * 6.0 - dot as f64).sin();
                    let color = if phase > 0.0 {
                        theme.text_muted
                    } else {
                        theme.border
                    };
                    ui.label(RichText::new("●").color(color));
                }
            });
        });
    });
}

impl eframe::App for LandingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events();
        self.render_top_bar(ctx);
        self.render_center_panel(ctx);

        if self.conversation.is_loading() {
            ctx.request_repaint_after(LOADING_REPAINT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LandingApp;
    use crate::demo::conversation::{Conversation, PendingPolicy};
    use crate::demo::matcher::ResponseMatcher;
    use crate::demo::responses::CANNED_RESPONSES;
    use crate::demo::Role;
    use crate::scheduler::ReplyScheduler;
    use crate::theme::Theme;
    use std::sync::mpsc;
    use tokio::runtime::Handle;
    use tokio::time::{self, Duration};

    fn app(policy: PendingPolicy) -> LandingApp {
        let (tx, rx) = mpsc::channel();
        let scheduler = ReplyScheduler::new(Handle::current(), tx, Duration::from_millis(800));
        let conversation = Conversation::new(ResponseMatcher::new(Some(1)), policy);
        LandingApp::new(rx, scheduler, conversation, Theme::default())
    }

    async fn settle(duration: Duration) {
        time::sleep(duration).await;
        tokio::task::yield_now().await;
    }

    #[tokio::test(start_paused = true)]
    async fn reply_is_appended_after_the_simulated_delay() {
        let mut app = app(PendingPolicy::Serialize);
        *app.conversation.input_mut() = "What about integration?".to_string();
        app.submit_input();
        assert_eq!(app.conversation.transcript().len(), 2);

        settle(Duration::from_millis(500)).await;
        app.drain_events();
        assert!(app.conversation.is_loading());
        assert_eq!(app.conversation.transcript().len(), 2);

        settle(Duration::from_millis(400)).await;
        app.drain_events();
        assert!(!app.conversation.is_loading());
        let transcript = app.conversation.transcript();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[2].role, Role::Assistant);
        assert_eq!(transcript[2].text, CANNED_RESPONSES[1].answer);
    }

    #[tokio::test(start_paused = true)]
    async fn blank_submission_schedules_nothing() {
        let mut app = app(PendingPolicy::Serialize);
        *app.conversation.input_mut() = "   ".to_string();
        app.submit_input();

        settle(Duration::from_secs(2)).await;
        assert!(app.rx.try_recv().is_err());
        assert_eq!(app.conversation.transcript().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn overlapping_exchanges_each_get_one_reply() {
        let mut app = app(PendingPolicy::Overlap);
        for query in ["pricing", "features", "anything else"] {
            *app.conversation.input_mut() = query.to_string();
            app.submit_input();
            settle(Duration::from_millis(100)).await;
        }

        settle(Duration::from_secs(1)).await;
        app.drain_events();
        let transcript = app.conversation.transcript();
        assert_eq!(transcript.len(), 1 + 3 * 2);
        let assistant_replies = transcript[1..]
            .iter()
            .filter(|m| m.role == Role::Assistant)
            .count();
        assert_eq!(assistant_replies, 3);
        assert!(!app.conversation.is_loading());
    }

    #[test]
    fn navigation_switches_sections() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("test runtime should build");
        let mut app = {
            let _guard = runtime.enter();
            app(PendingPolicy::Serialize)
        };
        app.navigate(crate::sections::Section::Pricing);
        assert_eq!(app.section, crate::sections::Section::Pricing);
    }
}
