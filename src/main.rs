use iced::widget::{column, text, text_input};
use iced::{Element, Length, Task, Theme};

// Declare the application modules
mod assets;
mod state;
mod ui;

use state::screen::{Screen, Submit};

/// Main application state
struct GearGrid {
    /// The screen's data model: catalog, collection, input text
    screen: Screen,
    /// Status message to display to the user.
    /// Purely presentational; the data model never reads it.
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User edited the input field
    InputChanged(String),
    /// User pressed Enter in the input field
    InputSubmitted,
    /// User pressed an entry card in the grid
    EntryPressed(String),
}

impl GearGrid {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        // Load the bundled catalog
        // If this fails, we panic because the bundled assets are defective
        // and the app cannot recognize any item
        let screen = Screen::new()
            .expect("Failed to load the bundled item catalog. The binary is misbuilt.");

        println!(
            "🧤 Gear Grid initialized, {} item names recognized",
            screen.catalog_len()
        );

        let status = format!("Ready. {} item names recognized.", screen.catalog_len());

        (
            GearGrid { screen, status },
            text_input::focus(ui::grid::input_id()),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::InputChanged(value) => {
                self.screen.set_input(value);
                Task::none()
            }
            Message::InputSubmitted => {
                let submitted = self.screen.input().trim().to_string();
                match self.screen.submit() {
                    Submit::Added => {
                        self.status = format!("{} on the grid.", count_label(&self.screen));
                    }
                    Submit::NotRecognized if submitted.is_empty() => {}
                    Submit::NotRecognized => {
                        // The model stays untouched; only this status line
                        // tells the user the name meant nothing
                        self.status = format!("'{}' is not a known item.", submitted);
                    }
                }

                // Keep the input focused so the user can keep typing
                text_input::focus(ui::grid::input_id())
            }
            Message::EntryPressed(id) => {
                self.screen.remove_entry(&id);
                self.status = format!("{} on the grid.", count_label(&self.screen));
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        column![
            ui::grid::entry_grid(self.screen.entries()),
            text(&self.status).size(14),
            ui::grid::input_row(self.screen.input()),
        ]
        .height(Length::Fill)
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// "N item(s)" label for the status line
fn count_label(screen: &Screen) -> String {
    match screen.entries().len() {
        1 => "1 item".to_string(),
        n => format!("{} items", n),
    }
}

fn main() -> iced::Result {
    iced::application("Gear Grid", GearGrid::update, GearGrid::view)
        .theme(GearGrid::theme)
        .centered()
        .run_with(GearGrid::new)
}
