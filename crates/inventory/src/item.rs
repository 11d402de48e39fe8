use serde::{Deserialize, Serialize};

use stockroom_core::{DomainResult, Sku};

use crate::update::ItemUpdate;
use crate::validation;

/// One stocked product.
///
/// The SKU is not part of the item: it is the key the item is stored under.
/// Fields are only reachable through getters so that every mutation goes
/// through [`Item::apply`] and its validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    category: String,
    quantity: i64,
    supplier: String,
    price: f64,
    location: String,
}

impl Item {
    /// Validate and build an item from creation input.
    pub fn new(input: NewItem) -> DomainResult<Self> {
        validation::ensure_text_fields(&input)?;
        validation::ensure_quantity(input.quantity)?;
        validation::ensure_price(input.price)?;

        Ok(Self {
            name: input.name,
            category: input.category,
            quantity: input.quantity,
            supplier: input.supplier,
            price: input.price,
            location: input.location,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn supplier(&self) -> &str {
        &self.supplier
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Validate a single update and, if it passes, write it in place.
    ///
    /// On error the item is left untouched.
    pub(crate) fn apply(&mut self, update: &ItemUpdate) -> DomainResult<()> {
        update.validate()?;

        match update {
            ItemUpdate::SetName(v) => self.name = v.clone(),
            ItemUpdate::SetCategory(v) => self.category = v.clone(),
            ItemUpdate::SetQuantity(v) => self.quantity = *v,
            ItemUpdate::SetSupplier(v) => self.supplier = v.clone(),
            ItemUpdate::SetPrice(v) => self.price = *v,
            ItemUpdate::SetLocation(v) => self.location = v.clone(),
        }

        Ok(())
    }
}

/// Creation input for [`crate::InventoryStore::add_item`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub supplier: String,
    pub price: f64,
    pub location: String,
}

/// An item removed from the live inventory, kept together with the SKU it
/// was stored under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletedItem {
    pub sku: Sku,
    pub item: Item,
}
