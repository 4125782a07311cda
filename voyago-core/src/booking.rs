use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A confirmed booking in the ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub booking_id: u32,
    pub package_id: u32,
    pub customer_name: String,
    pub booking_date: NaiveDate,
    pub seats: u32,
}

/// Payload for creating a booking; the id is assigned by the ledger
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub package_id: u32,
    pub customer_name: String,
    pub booking_date: NaiveDate,
    pub seats: u32,
}

/// Append-only booking ledger. Bookings are never updated or deleted,
/// so ids derived from the length stay unique.
pub struct Ledger {
    bookings: Vec<Booking>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            bookings: Vec::new(),
        }
    }

    /// Append a booking with the next sequential id and return the stored
    /// record. The package id is NOT checked against the catalog, and no
    /// slots are consumed here; that is the catalog's seat update.
    pub fn add(&mut self, new: NewBooking) -> Booking {
        let booking = Booking {
            booking_id: self.bookings.len() as u32 + 1,
            package_id: new.package_id,
            customer_name: new.customer_name,
            booking_date: new.booking_date,
            seats: new.seats,
        };
        self.bookings.push(booking.clone());
        booking
    }

    /// All bookings for a package, in insertion order. Empty when none match.
    pub fn for_package(&self, package_id: u32) -> Vec<Booking> {
        self.bookings
            .iter()
            .filter(|b| b.package_id == package_id)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
