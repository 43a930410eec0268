use iced::{
    Alignment, Element, Length,
    widget::{column, container, image, image::Handle, row, text},
};

/// Control with a fixed-width label in front of it
pub fn labeled<'a, Message>(
    label: &'a str,
    control: impl Into<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: 'a,
{
    row![text(label).width(Length::Fixed(150.0)), control.into()]
        .spacing(10)
        .align_y(Alignment::Center)
        .into()
}

/// Titled, bordered pane showing one preview (or a placeholder)
pub fn preview_pane<'a, Message>(
    title: &'a str,
    handle: Option<&Handle>,
    width: u32,
    height: u32,
) -> Element<'a, Message>
where
    Message: 'a,
{
    let (w, h) = (Length::Fixed(width as f32), Length::Fixed(height as f32));
    let body: Element<'a, Message> = match handle {
        Some(handle) => image(handle.clone()).width(w).height(h).into(),
        None => container(text("No image"))
            .center_x(w)
            .center_y(h)
            .into(),
    };

    container(column![text(title).size(16), body].spacing(6))
        .style(container::bordered_box)
        .padding(8)
        .into()
}
