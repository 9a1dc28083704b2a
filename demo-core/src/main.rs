fn main() -> eframe::Result {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1080., 640.]),
        ..Default::default()
    };
    eframe::run_native(
        "egui_adaptive demo",
        native_options,
        Box::new(|cc| Ok(Box::new(demo_core::DemoApp::new(cc)))),
    )
}
