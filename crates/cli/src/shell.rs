//! Menu loop and the five inventory operations.

use std::io::Write;

use sunrise_core::DomainError;
use sunrise_inventory::{
    AddItem, EMPTY_INVENTORY, InventoryStore, ItemName, SackCount, UpdateItem, render_summary,
    render_table,
};

use crate::error::ShellError;
use crate::input::LineSource;
use crate::menu::{MenuChoice, render_menu};
use crate::prompt::{prompt_integer, prompt_line};

const CHOICE_PROMPT: &str = "Select an option (1-6): ";
const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
const FAREWELL: &str = "Exiting the Inventory Management System.";
const NOTHING_TO_DELETE: &str = "No products to delete.";
const RICE_TYPE_NOT_FOUND: &str = "Rice type not found.";
const PRODUCT_NOT_FOUND: &str = "Product not found.";

const PREVIEW_HEADING: &str = "Current Inventory:";
const REPORT_HEADING: &str = "Inventory Report:";

/// How a session ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user chose Exit.
    Exit,
    /// The input source ran dry.
    InputClosed,
}

/// Interactive dispatcher over one store.
pub struct Shell<S, I, W> {
    store: S,
    input: I,
    out: W,
}

impl<S, I, W> Shell<S, I, W>
where
    S: InventoryStore,
    I: LineSource,
    W: Write,
{
    pub fn new(store: S, input: I, out: W) -> Self {
        Self { store, input, out }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_parts(self) -> (S, I, W) {
        (self.store, self.input, self.out)
    }

    /// Show the menu and dispatch choices until Exit or end of input.
    pub fn run(&mut self) -> Result<SessionEnd, ShellError> {
        match self.run_loop() {
            Err(ShellError::InputClosed) => {
                tracing::info!(items = self.store.len(), "input closed; ending session");
                Ok(SessionEnd::InputClosed)
            }
            other => other,
        }
    }

    fn run_loop(&mut self) -> Result<SessionEnd, ShellError> {
        loop {
            write!(self.out, "{}", render_menu())?;
            let raw = prompt_line(&mut self.input, &mut self.out, CHOICE_PROMPT)?;

            let Some(choice) = MenuChoice::parse(&raw) else {
                tracing::debug!(input = %raw, "invalid menu choice");
                self.say(INVALID_CHOICE)?;
                continue;
            };

            tracing::debug!(?choice, "dispatching menu choice");
            if let Some(end) = self.dispatch(choice)? {
                return Ok(end);
            }
        }
    }

    /// Run one menu action. Returns `Some` when the action ends the session.
    fn dispatch(&mut self, choice: MenuChoice) -> Result<Option<SessionEnd>, ShellError> {
        match choice {
            MenuChoice::Add => self.add_item()?,
            MenuChoice::Update => self.update_item()?,
            MenuChoice::Delete => self.delete_item()?,
            MenuChoice::Search => self.search_item()?,
            MenuChoice::ViewAll => self.view_all()?,
            MenuChoice::Exit => {
                self.say(FAREWELL)?;
                self.out.flush()?;
                return Ok(Some(SessionEnd::Exit));
            }
        }
        Ok(None)
    }

    fn add_item(&mut self) -> Result<(), ShellError> {
        let raw = prompt_line(&mut self.input, &mut self.out, "Enter rice type: ")?;

        // Reject before asking for numbers.
        let name = match ItemName::parse(&raw) {
            Ok(name) => name,
            Err(e) => return self.reject("add", &e),
        };
        if self.store.contains(name.as_str()) {
            return self.reject("add", &DomainError::duplicate(name.as_str()));
        }

        let quantity = self.prompt_sacks("Enter quantity in sacks: ")?;
        let reorder_level = self.prompt_sacks("Enter reorder level in sacks: ")?;

        let cmd = AddItem {
            name: name.as_str().to_string(),
            quantity,
            reorder_level,
        };
        let added = self
            .store
            .add(cmd)
            .map(|item| (item.name().clone(), item.quantity(), item.reorder_level()));
        match added {
            Ok((name, quantity, reorder_level)) => {
                tracing::info!(
                    item = %name,
                    quantity = quantity.get(),
                    reorder_level = reorder_level.get(),
                    "item added"
                );
                self.say(&format!("Added {quantity} sacks of '{name}'."))
            }
            Err(e) => self.reject("add", &e),
        }
    }

    fn update_item(&mut self) -> Result<(), ShellError> {
        if self.store.is_empty() {
            return self.say(EMPTY_INVENTORY);
        }
        self.show_table(PREVIEW_HEADING)?;

        let name = prompt_line(&mut self.input, &mut self.out, "Enter rice type to update: ")?;
        if !self.store.contains(&name) {
            return self.reject("update", &DomainError::not_found(name));
        }

        let quantity = self.prompt_sacks("Enter new quantity in sacks: ")?;
        let reorder_level = self.prompt_sacks("Enter new reorder level in sacks: ")?;

        let updated = self
            .store
            .update(UpdateItem {
                name,
                quantity,
                reorder_level,
            })
            .map(|item| item.name().clone());
        match updated {
            Ok(name) => {
                tracing::info!(
                    item = %name,
                    quantity = quantity.get(),
                    reorder_level = reorder_level.get(),
                    "item updated"
                );
                self.say(&format!("'{name}' updated successfully!"))
            }
            Err(e) => self.reject("update", &e),
        }
    }

    fn delete_item(&mut self) -> Result<(), ShellError> {
        if self.store.is_empty() {
            return self.say(NOTHING_TO_DELETE);
        }
        self.show_table(PREVIEW_HEADING)?;

        let name = prompt_line(&mut self.input, &mut self.out, "Enter rice type to delete: ")?;
        match self.store.delete(&name) {
            Ok(item) => {
                tracing::info!(item = %item.name(), remaining = self.store.len(), "item deleted");
                self.say(&format!("Deleted '{}'.", item.name()))
            }
            Err(e) => self.reject("delete", &e),
        }
    }

    fn search_item(&mut self) -> Result<(), ShellError> {
        let name = prompt_line(&mut self.input, &mut self.out, "Enter rice type to search: ")?;
        let line = match self.store.find_by_name(&name) {
            Ok(item) => render_summary(item),
            Err(e) => {
                tracing::debug!(error = %e, "search missed");
                PRODUCT_NOT_FOUND.to_string()
            }
        };
        self.say(&line)
    }

    fn view_all(&mut self) -> Result<(), ShellError> {
        self.show_table(REPORT_HEADING)
    }

    fn show_table(&mut self, heading: &str) -> Result<(), ShellError> {
        let items = self.store.list_all();
        write!(self.out, "{}", render_table(heading, &items))?;
        Ok(())
    }

    fn prompt_sacks(&mut self, prompt: &str) -> Result<SackCount, ShellError> {
        let value = prompt_integer(&mut self.input, &mut self.out, prompt, SackCount::MIN)?;
        Ok(SackCount::new(value)?)
    }

    /// Log a rejected operation and tell the user why.
    fn reject(&mut self, op: &'static str, err: &DomainError) -> Result<(), ShellError> {
        tracing::warn!(op, kind = err.kind(), error = %err, "operation rejected");
        let message = user_message(err);
        self.say(&message)
    }

    fn say(&mut self, line: &str) -> Result<(), ShellError> {
        writeln!(self.out, "{line}")?;
        Ok(())
    }
}

fn user_message(err: &DomainError) -> String {
    match err {
        DomainError::EmptyName => "Rice type cannot be empty.".to_string(),
        DomainError::DuplicateName(name) => {
            format!("Rice type '{name}' already exists. Use update option to modify.")
        }
        DomainError::NotFound(_) => RICE_TYPE_NOT_FOUND.to_string(),
        DomainError::InvalidSackCount(_) => "1 is the minimum value allowed.".to_string(),
    }
}
