use serde::{Deserialize, Serialize};

use crate::app_system::AddressError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedAddress {
    pub id: u64,
    pub label: String,
    pub address: String,
    pub is_default: bool,
}

/// The shopper's saved delivery addresses.
///
/// Whenever the book is not empty exactly one address is the default. The
/// first address added becomes the default, and deleting the default hands
/// the flag to the first remaining address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressBook {
    addresses: Vec<SavedAddress>,
}

impl AddressBook {
    pub fn all(&self) -> &[SavedAddress] {
        &self.addresses
    }

    pub fn get(&self, id: u64) -> Option<&SavedAddress> {
        self.addresses.iter().find(|a| a.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// The flagged default, or the first address if a stored book lost its flag.
    pub fn default_address(&self) -> Option<&SavedAddress> {
        self.addresses
            .iter()
            .find(|a| a.is_default)
            .or_else(|| self.addresses.first())
    }

    /// Saves a new address and returns its id. Both fields are required.
    pub fn add(&mut self, label: &str, address: &str) -> Result<u64, AddressError> {
        let missing: Vec<&'static str> = [("label", label), ("address", address)]
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect();
        if !missing.is_empty() {
            return Err(AddressError::MissingFields(missing));
        }

        let id = self.addresses.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        self.addresses.push(SavedAddress {
            id,
            label: label.trim().to_string(),
            address: address.trim().to_string(),
            is_default: self.addresses.is_empty(),
        });
        Ok(id)
    }

    /// Replaces the address text; the label and default flag stay.
    pub fn edit(&mut self, id: u64, address: &str) -> Result<(), AddressError> {
        if address.trim().is_empty() {
            return Err(AddressError::MissingFields(vec!["address"]));
        }
        let entry = self
            .addresses
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(AddressError::NotFound(id))?;
        entry.address = address.trim().to_string();
        Ok(())
    }

    pub fn delete(&mut self, id: u64) -> Result<SavedAddress, AddressError> {
        let index = self
            .addresses
            .iter()
            .position(|a| a.id == id)
            .ok_or(AddressError::NotFound(id))?;
        let removed = self.addresses.remove(index);
        if removed.is_default {
            if let Some(first) = self.addresses.first_mut() {
                first.is_default = true;
            }
        }
        Ok(removed)
    }
}
