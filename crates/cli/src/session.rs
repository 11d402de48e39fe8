//! Interactive session: login, then a numbered menu until exit.
//!
//! Generic over the line source and the sink so it can be scripted.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use stockroom_auth::Authenticator;
use stockroom_core::{Clock, DomainError, SystemClock};
use stockroom_inventory::{DeleteOutcome, InventoryStore, ItemField, ItemUpdate, NewItem};

use crate::render;

const MENU: &str = "\n=== Inventory Management System ===
1. Add Item
2. Update Item
3. Delete Item
4. View Inventory
5. View Audit Trail
6. View Deleted Items
7. Sync with External System
8. Exit";

/// How a session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    AuthenticationFailed,
    /// The operator chose "Exit".
    Exited,
    /// Input reached end-of-file.
    InputClosed,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Failure of one menu action. Only `Closed` and `Io` end the session.
#[derive(Debug, Error)]
enum ActionError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Input(String),

    #[error("input closed")]
    Closed,

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub struct Session<R, W, C = SystemClock> {
    input: R,
    output: W,
    authenticator: Authenticator,
    store: InventoryStore<C>,
}

impl<R: BufRead, W: Write, C: Clock> Session<R, W, C> {
    pub fn new(input: R, output: W, authenticator: Authenticator, store: InventoryStore<C>) -> Self {
        Self {
            input,
            output,
            authenticator,
            store,
        }
    }

    pub fn store(&self) -> &InventoryStore<C> {
        &self.store
    }

    pub fn into_parts(self) -> (InventoryStore<C>, W) {
        (self.store, self.output)
    }

    /// Run login and the menu loop to completion.
    pub fn run(&mut self) -> Result<SessionEnd, SessionError> {
        match self.login() {
            Ok(true) => {}
            Ok(false) => {
                writeln!(self.output, "Authentication failed.")?;
                return Ok(SessionEnd::AuthenticationFailed);
            }
            Err(ActionError::Io(e)) => return Err(e.into()),
            Err(_) => return Ok(SessionEnd::InputClosed),
        }

        loop {
            writeln!(self.output, "{MENU}")?;

            let choice = match self.prompt("Choose an option: ") {
                Ok(line) => line,
                Err(ActionError::Io(e)) => return Err(e.into()),
                Err(_) => return Ok(SessionEnd::InputClosed),
            };

            let Ok(choice) = choice.trim().parse::<u32>() else {
                writeln!(self.output, "Invalid input. Please enter a number.")?;
                continue;
            };

            let result = match choice {
                1 => self.add_item(),
                2 => self.update_item(),
                3 => self.delete_item(),
                4 => self.view_inventory(),
                5 => self.view_audit_trail(),
                6 => self.view_deleted_items(),
                7 => self.sync(),
                8 => {
                    writeln!(self.output, "Exiting system...")?;
                    return Ok(SessionEnd::Exited);
                }
                _ => {
                    writeln!(self.output, "Invalid option.")?;
                    continue;
                }
            };

            match result {
                Ok(()) => {}
                Err(ActionError::Closed) => return Ok(SessionEnd::InputClosed),
                Err(ActionError::Io(e)) => return Err(e.into()),
                Err(e) => writeln!(self.output, "Error: {e}")?,
            }
        }
    }

    fn login(&mut self) -> Result<bool, ActionError> {
        let username = self.prompt("Username: ")?;
        let password = self.prompt("Password: ")?;
        Ok(self.authenticator.authenticate(&username, &password))
    }

    fn add_item(&mut self) -> Result<(), ActionError> {
        let sku = self.prompt("SKU: ")?;
        let name = self.prompt("Name: ")?;
        let category = self.prompt("Category: ")?;
        let quantity = self.prompt_quantity("Quantity: ")?;
        let supplier = self.prompt("Supplier: ")?;
        let price = self.prompt_price("Price: ")?;
        let location = self.prompt("Location: ")?;

        self.store.add_item(
            sku.as_str(),
            NewItem {
                name,
                category,
                quantity,
                supplier,
                price,
                location,
            },
        )?;

        writeln!(self.output, "Item {sku} added successfully.")?;
        Ok(())
    }

    fn update_item(&mut self) -> Result<(), ActionError> {
        let sku = self.prompt("SKU to update: ")?;

        let mut updates = Vec::new();
        for field in ItemField::ALL {
            let answer = self.prompt(&format!("Update {field}? (y/n): "))?;
            if !answer.trim().eq_ignore_ascii_case("y") {
                continue;
            }

            let label = format!("New {field}: ");
            let update = match field {
                ItemField::Name => ItemUpdate::SetName(self.prompt(&label)?),
                ItemField::Category => ItemUpdate::SetCategory(self.prompt(&label)?),
                ItemField::Quantity => ItemUpdate::SetQuantity(self.prompt_quantity(&label)?),
                ItemField::Supplier => ItemUpdate::SetSupplier(self.prompt(&label)?),
                ItemField::Price => ItemUpdate::SetPrice(self.prompt_price(&label)?),
                ItemField::Location => ItemUpdate::SetLocation(self.prompt(&label)?),
            };
            updates.push(update);
        }

        self.store.update_item(&sku, &updates)?;

        writeln!(self.output, "Item {sku} updated successfully.")?;
        Ok(())
    }

    fn delete_item(&mut self) -> Result<(), ActionError> {
        let sku = self.prompt("SKU to delete: ")?;

        // No point asking for confirmation of something that is not there.
        if self.store.get_item(&sku).is_none() {
            return Err(DomainError::not_found(sku).into());
        }

        let answer = self.prompt(&format!(
            "Are you sure you want to delete {sku}? (yes/no): "
        ))?;
        let confirmed = answer.trim().eq_ignore_ascii_case("yes");

        match self.store.delete_item(&sku, confirmed)? {
            DeleteOutcome::Deleted => writeln!(self.output, "Item {sku} deleted successfully.")?,
            DeleteOutcome::Cancelled => writeln!(self.output, "Deletion cancelled.")?,
        }
        Ok(())
    }

    fn view_inventory(&mut self) -> Result<(), ActionError> {
        let listing = self.store.list_inventory();
        if listing.is_empty() {
            writeln!(self.output, "No items in inventory.")?;
            return Ok(());
        }
        for (sku, item) in listing {
            writeln!(self.output, "{}", render::item_line(sku, item))?;
        }
        Ok(())
    }

    fn view_audit_trail(&mut self) -> Result<(), ActionError> {
        let listing = self.store.list_audit_trail();
        if listing.is_empty() {
            writeln!(self.output, "No audit records found.")?;
            return Ok(());
        }
        for entry in listing {
            writeln!(self.output, "{}", render::audit_line(entry))?;
        }
        Ok(())
    }

    fn view_deleted_items(&mut self) -> Result<(), ActionError> {
        let listing = self.store.list_deleted_items();
        if listing.is_empty() {
            writeln!(self.output, "No deleted items.")?;
            return Ok(());
        }
        for deleted in listing {
            writeln!(self.output, "{}", render::deleted_line(deleted))?;
        }
        Ok(())
    }

    fn sync(&mut self) -> Result<(), ActionError> {
        let system = self.prompt("System name: ")?;
        let report = self.store.sync_with_external_system(&system);
        writeln!(self.output, "Syncing with {}... (Simulated)", report.system)?;
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> Result<String, ActionError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn prompt_quantity(&mut self, label: &str) -> Result<i64, ActionError> {
        let raw = self.prompt(label)?;
        raw.trim()
            .parse()
            .map_err(|_| ActionError::Input(format!("'{}' is not a whole number", raw.trim())))
    }

    fn prompt_price(&mut self, label: &str) -> Result<f64, ActionError> {
        let raw = self.prompt(label)?;
        raw.trim()
            .parse()
            .map_err(|_| ActionError::Input(format!("'{}' is not a number", raw.trim())))
    }

    /// Next line without its terminator; `Closed` at end of input.
    fn read_line(&mut self) -> Result<String, ActionError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ActionError::Closed);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}
