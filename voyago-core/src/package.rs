use serde::{Deserialize, Serialize};

/// A travel package in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub package_id: u32,
    pub destination: String,
    pub price: f64,
    pub duration: u32,
    pub available_slots: u32,
}

/// In-memory package catalog. Contents are fixed at construction;
/// only `available_slots` changes afterwards.
pub struct Catalog {
    packages: Vec<Package>,
}

impl Catalog {
    pub fn new(packages: Vec<Package>) -> Self {
        Self { packages }
    }

    /// All packages in catalog order
    pub fn list(&self) -> &[Package] {
        &self.packages
    }

    /// First package whose destination matches exactly, by catalog order.
    /// Case-sensitive; duplicated destinations resolve to the earliest entry.
    pub fn find_by_destination(&self, destination: &str) -> Option<&Package> {
        self.packages.iter().find(|p| p.destination == destination)
    }

    /// Take `seats_booked` slots off a package. The availability check and the
    /// decrement are a single critical section under `&mut self`.
    pub fn book_seats(
        &mut self,
        package_id: u32,
        seats_booked: u32,
    ) -> Result<&Package, CatalogError> {
        let package = self
            .packages
            .iter_mut()
            .find(|p| p.package_id == package_id)
            .ok_or(CatalogError::PackageNotFound(package_id))?;

        if seats_booked > package.available_slots {
            return Err(CatalogError::InsufficientSlots {
                requested: seats_booked,
                available: package.available_slots,
            });
        }

        package.available_slots -= seats_booked;
        Ok(package)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Package not found: {0}")]
    PackageNotFound(u32),

    #[error("Insufficient slots: requested {requested}, available {available}")]
    InsufficientSlots { requested: u32, available: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
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
        ])
    }

    #[test]
    fn test_book_seats_lifecycle() {
        let mut catalog = sample_catalog();

        let updated = catalog.book_seats(1, 3).unwrap();
        assert_eq!(updated.available_slots, 7);

        // Over-booking fails and leaves the count untouched
        let err = catalog.book_seats(1, 8).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InsufficientSlots {
                requested: 8,
                available: 7
            }
        ));
        assert_eq!(catalog.find_by_destination("Paris").unwrap().available_slots, 7);
    }

    #[test]
    fn test_book_seats_down_to_zero() {
        let mut catalog = sample_catalog();

        assert_eq!(catalog.book_seats(2, 5).unwrap().available_slots, 0);
        assert!(catalog.book_seats(2, 1).is_err());
    }

    #[test]
    fn test_book_seats_unknown_package() {
        let mut catalog = sample_catalog();

        let err = catalog.book_seats(99, 1).unwrap_err();
        assert!(matches!(err, CatalogError::PackageNotFound(99)));
        assert_eq!(catalog.list()[0].available_slots, 10);
        assert_eq!(catalog.list()[1].available_slots, 5);
    }

    #[test]
    fn test_list_is_stable_without_mutation() {
        let catalog = sample_catalog();

        let first: Vec<Package> = catalog.list().to_vec();
        let second: Vec<Package> = catalog.list().to_vec();
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.package_id, b.package_id);
            assert_eq!(a.available_slots, b.available_slots);
        }
    }

    #[test]
    fn test_find_by_destination_is_exact() {
        let catalog = sample_catalog();

        assert_eq!(catalog.find_by_destination("Paris").unwrap().package_id, 1);
        assert!(catalog.find_by_destination("paris").is_none());
        assert!(catalog.find_by_destination("Nowhere").is_none());
    }

    #[test]
    fn test_find_by_destination_first_match_wins() {
        let catalog = Catalog::new(vec![
            Package {
                package_id: 1,
                destination: "Rome".to_string(),
                price: 1800.0,
                duration: 6,
                available_slots: 12,
            },
            Package {
                package_id: 2,
                destination: "Rome".to_string(),
                price: 2000.0,
                duration: 9,
                available_slots: 4,
            },
        ]);

        assert_eq!(catalog.find_by_destination("Rome").unwrap().package_id, 1);
    }

    #[test]
    fn test_package_wire_format() {
        let package = Package {
            package_id: 1,
            destination: "Paris".to_string(),
            price: 1500.0,
            duration: 7,
            available_slots: 10,
        };

        let value = serde_json::to_value(&package).unwrap();
        assert_eq!(value["packageId"], 1);
        assert_eq!(value["destination"], "Paris");
        assert_eq!(value["availableSlots"], 10);
    }
}
