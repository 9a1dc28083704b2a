use eframe::{App, CreationContext};
use egui::{CollapsingHeader, Color32, Frame, ScrollArea, Slider, Ui};
use egui_adaptive::{AdaptivePanel, CursorVisual, InputPointer, PointerTracker, Settings};

#[cfg(feature = "events")]
use crossbeam::channel::{unbounded, Receiver, Sender};
#[cfg(feature = "events")]
use egui_adaptive::events::Event;

#[cfg(feature = "events")]
const EVENTS_LIMIT: usize = 200;

const SIDE_PANEL_WIDTH: f32 = 260.;

pub struct DemoApp {
    settings: Settings,
    hide_native_cursor: bool,
    #[cfg(feature = "events")]
    sender: Sender<Event>,
    #[cfg(feature = "events")]
    receiver: Receiver<Event>,
    #[cfg(feature = "events")]
    events: Vec<Event>,
}

impl DemoApp {
    pub fn new(cc: &CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        #[cfg(feature = "events")]
        let (sender, receiver) = unbounded();

        Self {
            settings: Settings::default(),
            hide_native_cursor: true,
            #[cfg(feature = "events")]
            sender,
            #[cfg(feature = "events")]
            receiver,
            #[cfg(feature = "events")]
            events: Vec::new(),
        }
    }

    #[cfg(feature = "events")]
    fn drain_events(&mut self) {
        while let Ok(event) = self.receiver.try_recv() {
            self.events.push(event);
        }
        if self.events.len() > EVENTS_LIMIT {
            let overflow = self.events.len() - EVENTS_LIMIT;
            self.events.drain(..overflow);
        }
    }

    fn sidebar(&mut self, ui: &mut Ui) {
        CollapsingHeader::new("Resize bounds")
            .default_open(true)
            .show(ui, |ui| {
                ui.add(
                    Slider::new(&mut self.settings.resize.min_width, 100.0..=400.0)
                        .text("min width"),
                );
                ui.add(
                    Slider::new(&mut self.settings.resize.max_width, 400.0..=1200.0)
                        .text("max width"),
                );
                let min = self.settings.resize.min_width;
                self.settings.resize.max_width = self.settings.resize.max_width.max(min);
            });

        CollapsingHeader::new("Handle")
            .default_open(true)
            .show(ui, |ui| {
                ui.add(
                    Slider::new(&mut self.settings.handle.hit_zone_margin, 0.0..=60.0)
                        .text("hit-zone margin"),
                );
                ui.add(
                    Slider::new(&mut self.settings.handle.snap_offset, 0.0..=30.0)
                        .text("snap offset"),
                );
            });

        CollapsingHeader::new("Cursor")
            .default_open(true)
            .show(ui, |ui| {
                ui.checkbox(&mut self.hide_native_cursor, "hide native cursor");
                ui.add(
                    Slider::new(&mut self.settings.animation.follow_duration, 0.0..=0.5)
                        .text("follow duration"),
                );
            });

        ui.separator();
        if ui.button("Reset").clicked() {
            let ctx = ui.ctx().clone();
            AdaptivePanel::reset(&ctx);
            CursorVisual::reset(&ctx);
            self.settings = Settings::default();
        }

        #[cfg(feature = "events")]
        self.events_log(ui);
    }

    #[cfg(feature = "events")]
    fn events_log(&mut self, ui: &mut Ui) {
        ui.separator();
        ui.label(format!("Events ({})", self.events.len()));
        ScrollArea::vertical()
            .max_height(300.)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for event in &self.events {
                    ui.monospace(format!("{event:?}"));
                }
            });
        if ui.button("Clear").clicked() {
            self.events.clear();
        }
    }
}

impl App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        PointerTracker::track(ctx, &InputPointer);

        #[cfg(feature = "events")]
        self.drain_events();

        egui::SidePanel::right("settings")
            .default_width(SIDE_PANEL_WIDTH)
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| self.sidebar(ui));
            });

        egui::CentralPanel::default()
            .frame(Frame::new().fill(Color32::BLACK))
            .show(ctx, |ui| {
                let panel = AdaptivePanel::new(&self.settings);
                #[cfg(feature = "events")]
                let panel = panel.with_events(&self.sender);
                ui.centered_and_justified(|ui| {
                    ui.add(&panel);
                });

                let mut cursor = CursorVisual::new(&self.settings);
                if !self.hide_native_cursor {
                    cursor = cursor.with_native_cursor();
                }
                ui.add(&cursor);
            });
    }
}
