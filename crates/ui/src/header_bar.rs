use gpui::{
    div, px, App, ClickEvent, Div, InteractiveElement as _, IntoElement, ParentElement as _,
    RenderOnce, SharedString, StyleRefinement, Styled, Window,
};

use crate::{h_flex, ActiveTheme as _, Button, IconName};

/// Height of the header bar.
pub const HEADER_BAR_HEIGHT: f32 = 48.;

/// The tracker window header: a reason string as the title and a close
/// button on the trailing edge.
///
/// Both the reason and the close handler are required, there is no default
/// for either. The bar holds no state of its own; the owner recreates it on
/// every render and acts on the close event (e.g. removes the window).
///
/// # Examples
///
/// ```ignore
/// HeaderBar::new("You accessed a private folder with max.", |_, window, _| {
///     window.remove_window();
/// })
/// ```
#[derive(IntoElement)]
pub struct HeaderBar {
    base: Div,
    reason: SharedString,
    on_close: Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>,
}

impl HeaderBar {
    pub fn new(
        reason: impl Into<SharedString>,
        on_close: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        Self {
            base: h_flex(),
            reason: reason.into(),
            on_close: Box::new(on_close),
        }
    }
}

impl Styled for HeaderBar {
    fn style(&mut self) -> &mut StyleRefinement {
        self.base.style()
    }
}

impl RenderOnce for HeaderBar {
    fn render(self, _: &mut Window, cx: &mut App) -> impl IntoElement {
        let on_close = self.on_close;

        self.base
            .id("header-bar")
            .w_full()
            .flex_none()
            .h(px(HEADER_BAR_HEIGHT))
            .gap_2()
            .px_3()
            .bg(cx.theme().title_bar)
            .border_b_1()
            .border_color(cx.theme().title_bar_border)
            .text_color(cx.theme().foreground)
            .cursor_default()
            // Leading slot stays empty, mirror the trailing control so the
            // title keeps its place.
            .child(div().size_6().flex_none())
            .child(
                div()
                    .flex_1()
                    .overflow_hidden()
                    .whitespace_nowrap()
                    .text_ellipsis()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child(self.reason),
            )
            .child(
                Button::new("close")
                    .icon(IconName::Close)
                    .on_click(move |event, window, cx| on_close(event, window, cx)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_reason_kept_verbatim() {
        let bar = HeaderBar::new("  Example  ", |_, _, _| {});
        assert_eq!(bar.reason.as_ref(), "  Example  ");

        let bar = HeaderBar::new("", |_, _, _| {});
        assert_eq!(bar.reason.as_ref(), "");
    }

    #[test]
    fn test_close_handler_not_called_on_construction() {
        let calls = Rc::new(Cell::new(0));

        let counter = calls.clone();
        let _bar = HeaderBar::new("Example", move |_, _, _| {
            counter.set(counter.get() + 1);
        });
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_rebuild_with_new_reason() {
        // The owner recreates the bar on each render pass; a new reason must
        // flow through untouched.
        for reason in ["first", "second"] {
            let bar = HeaderBar::new(reason, |_, _, _| {});
            assert_eq!(bar.reason.as_ref(), reason);
        }
    }
}
