//! Interactive console menu.

use std::io::{self, Write};

use sabor_core::MenuItem;
use tracing::debug;

use crate::api::{describe_error, RestaurantApi};
use crate::input::LineReader;
use crate::ui;

const OPTIONS: &[(&str, &str)] = &[
    ("1", "List restaurants"),
    ("2", "View menu"),
    ("3", "Register restaurant"),
    ("4", "Activate/deactivate restaurant"),
    ("5", "Exit"),
];

/// What the main loop does after a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Result of prompting for a free-text field.
enum Field {
    Value(String),
    /// Empty input; an error has already been shown.
    Rejected,
    /// Input is closed.
    Closed,
}

/// Unwrap a [`Field`] inside a handler, returning early unless it holds a value.
macro_rules! field {
    ($field:expr) => {
        match $field {
            Field::Value(value) => value,
            Field::Rejected => return Ok(Flow::Continue),
            Field::Closed => return Ok(Flow::Exit),
        }
    };
}

/// The console application: reads choices from `input`, calls `api`, and
/// renders to `out`.
pub struct MenuApp<A, R, W> {
    api: A,
    input: R,
    out: W,
    clear: bool,
}

impl<A, R, W> MenuApp<A, R, W>
where
    A: RestaurantApi,
    R: LineReader,
    W: Write,
{
    pub fn new(api: A, input: R, out: W) -> Self {
        Self {
            api,
            input,
            out,
            clear: true,
        }
    }

    /// Clear the screen before each view.
    pub fn with_clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    /// Run the main loop until the user exits or input closes.
    pub async fn run(&mut self) -> io::Result<()> {
        loop {
            self.subtitle("Main Menu")?;
            writeln!(self.out, "{}\n", ui::APP_TITLE)?;
            writeln!(self.out, "{}", ui::options(OPTIONS))?;

            let Some(choice) = self.read("\nChoose an option: ")? else {
                return Ok(());
            };
            debug!(choice = %choice.trim(), "Menu choice");

            let flow = match choice.trim() {
                "1" => self.list_restaurants().await?,
                "2" => self.view_menu().await?,
                "3" => self.register_restaurant().await?,
                "4" => self.toggle_status().await?,
                "5" => {
                    self.subtitle("Closing application...")?;
                    writeln!(self.out, "Thank you for using Sabor Express! Goodbye!\n")?;
                    self.out.flush()?;
                    return Ok(());
                }
                _ => {
                    self.error("Invalid option!")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit || !self.pause()? {
                return Ok(());
            }
        }
    }

    async fn list_restaurants(&mut self) -> io::Result<Flow> {
        self.subtitle("Listing restaurants")?;

        match self.api.list_restaurants().await {
            Ok(restaurants) if restaurants.is_empty() => {
                self.success("There are no registered restaurants to display.")?;
            }
            Ok(restaurants) => {
                writeln!(self.out, "{}", ui::restaurant_table(&restaurants))?;
            }
            Err(e) => self.error(&describe_error(&e))?,
        }

        Ok(Flow::Continue)
    }

    async fn view_menu(&mut self) -> io::Result<Flow> {
        self.subtitle("View a restaurant's menu")?;

        let restaurants = match self.api.list_restaurants().await {
            Ok(restaurants) => restaurants,
            Err(e) => {
                self.error(&describe_error(&e))?;
                return Ok(Flow::Continue);
            }
        };
        if restaurants.is_empty() {
            self.error("There are no registered restaurants to display.")?;
            return Ok(Flow::Continue);
        }
        writeln!(self.out, "{}", ui::restaurant_table(&restaurants))?;

        let name = field!(
            self.field("\nEnter the name of the restaurant whose menu you want to see: ")?
        );

        let restaurant = match self.api.get_restaurant(&name).await {
            Ok(restaurant) => restaurant,
            Err(e) => {
                self.error(&describe_error(&e))?;
                return Ok(Flow::Continue);
            }
        };
        if restaurant.menu.is_empty() {
            self.error("This restaurant has no menu items.")?;
            return Ok(Flow::Continue);
        }

        let categories = restaurant.menu_categories();
        writeln!(self.out, "\nSelect a category to see its items:")?;
        writeln!(self.out, "{}", ui::category_choices(&categories))?;

        let Some(choice) = self.read("\nChoose an option: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(index) = ui::parse_choice(&choice, categories.len()) else {
            self.error("Invalid category selection.")?;
            return Ok(Flow::Continue);
        };

        let category = categories[index];
        let items: Vec<&MenuItem> = restaurant
            .menu
            .iter()
            .filter(|item| item.category == category)
            .collect();

        self.subtitle(&format!("Items in category: {category}"))?;
        writeln!(self.out, "{}", ui::item_table(&items))?;

        Ok(Flow::Continue)
    }

    async fn register_restaurant(&mut self) -> io::Result<Flow> {
        self.subtitle("Register a new restaurant")?;

        let name = field!(self.field("Enter the restaurant name: ")?);
        let category = field!(self.field("Enter the restaurant category: ")?);

        match self.api.create_restaurant(&name, &category).await {
            Ok(restaurant) => self.success(&format!(
                "Restaurant '{}' registered successfully!",
                restaurant.name
            ))?,
            Err(e) => self.error(&describe_error(&e))?,
        }

        Ok(Flow::Continue)
    }

    async fn toggle_status(&mut self) -> io::Result<Flow> {
        self.subtitle("Changing restaurant status")?;

        let name = field!(
            self.field("Enter the name of the restaurant to activate or deactivate: ")?
        );

        match self.api.toggle_active(&name).await {
            Ok(restaurant) => {
                let status = if restaurant.active {
                    "activated"
                } else {
                    "deactivated"
                };
                self.success(&format!(
                    "Restaurant '{}' was {} successfully!",
                    restaurant.name, status
                ))?
            }
            Err(e) => self.error(&describe_error(&e))?,
        }

        Ok(Flow::Continue)
    }

    /// Wait for Enter. Returns false when input is closed.
    fn pause(&mut self) -> io::Result<bool> {
        Ok(self
            .read("\nPress Enter to return to the main menu.")?
            .is_some())
    }

    fn read(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.out.flush()?;
        Ok(self.input.read_line(prompt))
    }

    fn field(&mut self, prompt: &str) -> io::Result<Field> {
        let Some(raw) = self.read(prompt)? else {
            return Ok(Field::Closed);
        };

        let value = raw.trim();
        if value.is_empty() {
            self.error("Invalid input: value cannot be empty.")?;
            return Ok(Field::Rejected);
        }
        Ok(Field::Value(value.to_string()))
    }

    fn subtitle(&mut self, text: &str) -> io::Result<()> {
        if self.clear {
            write!(self.out, "{}", ui::CLEAR_SCREEN)?;
        }
        writeln!(self.out, "{}", ui::subtitle(text))
    }

    fn success(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", ui::message(text, false))
    }

    fn error(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", ui::message(text, true))
    }
}
