use gpui::{
    div, px, size, AppContext as _, Application, Bounds, Context, IntoElement,
    ParentElement as _, Render, SharedString, Styled as _, Window, WindowBounds, WindowOptions,
};
use tracker_ui::{v_flex, ActiveTheme as _, HeaderBar};
use tracker_ui_assets::Assets;

struct TrackerWindow {
    reason: SharedString,
}

impl Render for TrackerWindow {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .size_full()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .text_size(cx.theme().font_size)
            .font_family(cx.theme().font_family.clone())
            .child(HeaderBar::new(self.reason.clone(), |_, window, cx| {
                tracing::info!("tracker dismissed");
                window.remove_window();
                cx.quit();
            }))
            .child(
                div()
                    .flex_1()
                    .p_4()
                    .text_color(cx.theme().muted_foreground)
                    .child("Tracker body goes here."),
            )
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Usage: `cargo run -p tracker-demo -- "<reason>"`
    let reason: SharedString = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "You accessed a private folder with max.".into())
        .into();

    let app = Application::new().with_assets(Assets);

    app.run(move |cx| {
        tracker_ui::init(cx);
        cx.activate(true);

        let bounds = Bounds::centered(None, size(px(380.), px(480.)), cx);
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            ..Default::default()
        };

        let open = cx.open_window(options, move |_, cx| {
            cx.new(move |_| TrackerWindow { reason })
        });

        if let Err(err) = open {
            tracing::error!(%err, "failed to open tracker window");
            cx.quit();
        }
    });
}
