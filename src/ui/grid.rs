use iced::widget::{column, container, image, mouse_area, scrollable, text, text_input};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use crate::state::data::Entry;
use crate::Message;

/// Thumbnail edge length inside a card, in logical pixels
const THUMBNAIL_SIZE: f32 = 50.0;

/// Widget id of the item input, so update logic can refocus it
pub fn input_id() -> text_input::Id {
    text_input::Id::new("item-input")
}

/// The grid of entry cards, wrapping to the window width.
/// Pressing a card removes its entry.
pub fn entry_grid(entries: &[Entry]) -> Element<'_, Message> {
    let cards: Vec<Element<'_, Message>> = entries.iter().map(entry_card).collect();

    let grid = Wrap::with_elements(cards)
        .spacing(16.0)
        .line_spacing(16.0)
        .padding(16.0);

    scrollable(container(grid).width(Length::Fill))
        .height(Length::Fill)
        .into()
}

/// One card: thumbnail above title, press to remove.
fn entry_card(entry: &Entry) -> Element<'_, Message> {
    let card = container(
        column![
            image(entry.thumbnail.handle())
                .width(THUMBNAIL_SIZE)
                .height(THUMBNAIL_SIZE),
            text(entry.title.as_str()).size(16),
        ]
        .spacing(8)
        .align_x(Alignment::Center),
    )
    .padding(10)
    .style(container::rounded_box);

    mouse_area(card)
        .on_press(Message::EntryPressed(entry.id.clone()))
        .into()
}

/// The bottom input row: a single text field that submits on Enter.
pub fn input_row(input: &str) -> Element<'_, Message> {
    let field = text_input("Type a new item", input)
        .id(input_id())
        .on_input(Message::InputChanged)
        .on_submit(Message::InputSubmitted)
        .padding(10);

    container(field).padding(16).width(Length::Fill).into()
}
