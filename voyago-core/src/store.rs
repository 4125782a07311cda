use crate::booking::Ledger;
use crate::package::{Catalog, Package};

/// Owns both collections for the lifetime of the process. The dispatcher
/// holds this behind its shared state; tests build their own instances.
pub struct Store {
    pub catalog: Catalog,
    pub ledger: Ledger,
}

impl Store {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ledger: Ledger::new(),
        }
    }

    /// Static seed catalog and an empty ledger
    pub fn seeded() -> Self {
        Self::new(Catalog::new(seed_packages()))
    }
}

fn seed_packages() -> Vec<Package> {
    vec![
        Package {
            package_id: 1,
            destination: "Paris".to_string(),
            price: 1500.0,
            duration: 7,
            available_slots: 10,
        },
        Package {
            package_id: 2,
            destination: "Bali".to_string(),
            price: 2500.0,
            duration: 10,
            available_slots: 5,
        },
        Package {
            package_id: 3,
            destination: "Tokyo".to_string(),
            price: 3200.0,
            duration: 12,
            available_slots: 8,
        },
        Package {
            package_id: 4,
            destination: "Rome".to_string(),
            price: 1800.0,
            duration: 6,
            available_slots: 12,
        },
        Package {
            package_id: 5,
            destination: "Cancun".to_string(),
            price: 2100.0,
            duration: 8,
            available_slots: 6,
        },
    ]
}
