pub mod booking;
pub mod package;
pub mod store;

pub use booking::{Booking, Ledger, NewBooking};
pub use package::{Catalog, CatalogError, Package};
pub use store::Store;
