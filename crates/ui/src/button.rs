use gpui::{
    div, prelude::FluentBuilder as _, App, ClickEvent, Div, ElementId, InteractiveElement as _,
    IntoElement, ParentElement as _, RenderOnce, StatefulInteractiveElement as _, StyleRefinement,
    Styled, Window,
};

use crate::{ActiveTheme as _, Icon};

/// A ghost icon button.
///
/// This is the dismiss control of the [`HeaderBar`](crate::HeaderBar), kept
/// to the surface that use needs: an icon and a click handler.
#[derive(IntoElement)]
pub struct Button {
    base: Div,
    id: ElementId,
    icon: Option<Icon>,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            base: div().flex().items_center().justify_center(),
            id: id.into(),
            icon: None,
            on_click: None,
        }
    }

    pub fn icon(mut self, icon: impl Into<Icon>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl Styled for Button {
    fn style(&mut self) -> &mut StyleRefinement {
        self.base.style()
    }
}

impl RenderOnce for Button {
    fn render(self, _: &mut Window, cx: &mut App) -> impl IntoElement {
        self.base
            .id(self.id)
            .size_6()
            .flex_none()
            .rounded(cx.theme().radius)
            .text_color(cx.theme().muted_foreground)
            .cursor_pointer()
            .hover(|this| {
                this.bg(cx.theme().secondary_hover)
                    .text_color(cx.theme().foreground)
            })
            .active(|this| this.bg(cx.theme().secondary_active))
            .when_some(self.icon, |this, icon| this.child(icon))
            .when_some(self.on_click, |this, on_click| {
                this.on_click(move |event, window, cx| on_click(event, window, cx))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IconName;

    #[test]
    fn test_builder() {
        let button = Button::new("close").icon(IconName::Close);
        assert!(button.icon.is_some());
        assert!(button.on_click.is_none());

        let button = button.on_click(|_, _, _| {});
        assert!(button.on_click.is_some());
    }
}
