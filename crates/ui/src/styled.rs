use gpui::{div, Div, Styled as _};

/// Horizontally stacked flex div with centered items.
pub fn h_flex() -> Div {
    div().flex().flex_row().items_center()
}

/// Vertically stacked flex div.
pub fn v_flex() -> Div {
    div().flex().flex_col()
}
