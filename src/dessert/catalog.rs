//! Dessert catalog and the threshold lookup that decides which dessert is on
//! display.

use std::fmt;

use serde::Deserialize;

/// Built-in catalog, embedded at compile time.
const BUILTIN_CATALOG: &str = include_str!("../../assets/desserts.json");

/// A dessert that can be sold.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Dessert {
    pub name: String,
    /// Revenue earned per unit sold.
    pub price: u64,
    /// Units sold at which this dessert starts being produced.
    pub start_threshold: u64,
}

/// Why a catalog could not be built.
#[derive(Debug)]
pub enum CatalogError {
    Empty,
    /// Entry at `index` has a lower threshold than the one before it.
    Unsorted { index: usize, name: String },
    Parse(serde_json::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "dessert catalog is empty"),
            CatalogError::Unsorted { index, name } => write!(
                f,
                "dessert catalog is not sorted by threshold: entry {index} ({name}) is out of order"
            ),
            CatalogError::Parse(e) => write!(f, "failed to parse dessert catalog: {e}"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e)
    }
}

/// Non-empty list of desserts, sorted ascending by `start_threshold`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    desserts: Vec<Dessert>,
}

impl Catalog {
    /// Validate and wrap a dessert list. Equal thresholds are allowed.
    pub fn new(desserts: Vec<Dessert>) -> Result<Self, CatalogError> {
        if desserts.is_empty() {
            return Err(CatalogError::Empty);
        }
        if let Some(index) = desserts
            .windows(2)
            .position(|w| w[1].start_threshold < w[0].start_threshold)
        {
            let index = index + 1;
            return Err(CatalogError::Unsorted {
                index,
                name: desserts[index].name.clone(),
            });
        }
        Ok(Self { desserts })
    }

    /// Parse a JSON array of desserts.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let desserts: Vec<Dessert> = serde_json::from_str(json)?;
        Self::new(desserts)
    }

    /// The catalog shipped with the app.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn desserts(&self) -> &[Dessert] {
        &self.desserts
    }

    pub fn len(&self) -> usize {
        self.desserts.len()
    }

    pub fn first(&self) -> &Dessert {
        &self.desserts[0]
    }

    /// Index of the last dessert whose threshold is `<= sold`, or 0 when
    /// `sold` is below every threshold.
    pub fn select_index(&self, sold: u64) -> usize {
        self.desserts
            .partition_point(|d| d.start_threshold <= sold)
            .saturating_sub(1)
    }

    /// The dessert to display after `sold` units have been sold.
    pub fn select(&self, sold: u64) -> &Dessert {
        &self.desserts[self.select_index(sold)]
    }

    /// The next dessert still locked at `sold`, if any.
    pub fn next_unlock(&self, sold: u64) -> Option<&Dessert> {
        let idx = self.desserts.partition_point(|d| d.start_threshold <= sold);
        self.desserts.get(idx)
    }
}

#[cfg(test)]
pub(crate) fn dessert(name: &str, price: u64, start_threshold: u64) -> Dessert {
    Dessert {
        name: name.into(),
        price,
        start_threshold,
    }
}

/// cupcake(5, 0) / donut(10, 5) / eclair(15, 10)
#[cfg(test)]
pub(crate) fn small_catalog() -> Catalog {
    Catalog::new(vec![
        dessert("Cupcake", 5, 0),
        dessert("Donut", 10, 5),
        dessert("Eclair", 15, 10),
    ])
    .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_loads_sorted() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 13);
        assert_eq!(catalog.first().name, "Cupcake");
        assert_eq!(catalog.first().start_threshold, 0);
        assert!(catalog
            .desserts()
            .windows(2)
            .all(|w| w[0].start_threshold <= w[1].start_threshold));
    }

    #[test]
    fn empty_catalog_rejected() {
        assert!(matches!(Catalog::new(vec![]), Err(CatalogError::Empty)));
        assert!(matches!(Catalog::from_json("[]"), Err(CatalogError::Empty)));
    }

    #[test]
    fn unsorted_catalog_rejected() {
        let err = Catalog::new(vec![
            dessert("Cupcake", 5, 0),
            dessert("Eclair", 15, 10),
            dessert("Donut", 10, 5),
        ])
        .unwrap_err();
        match err {
            CatalogError::Unsorted { index, name } => {
                assert_eq!(index, 2);
                assert_eq!(name, "Donut");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = Catalog::from_json(r#"[{"name": "Cupcake"}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse dessert catalog"));
    }

    #[test]
    fn select_walks_thresholds() {
        let catalog = small_catalog();
        assert_eq!(catalog.select(0).name, "Cupcake");
        assert_eq!(catalog.select(4).name, "Cupcake");
        assert_eq!(catalog.select(5).name, "Donut");
        assert_eq!(catalog.select(9).name, "Donut");
        assert_eq!(catalog.select(10).name, "Eclair");
        assert_eq!(catalog.select(u64::MAX).name, "Eclair");
    }

    #[test]
    fn select_below_every_threshold_returns_first() {
        let catalog = Catalog::new(vec![dessert("Donut", 10, 5), dessert("Eclair", 15, 10)]).unwrap();
        assert_eq!(catalog.select(3).name, "Donut");
        assert_eq!(catalog.select_index(3), 0);
    }

    #[test]
    fn select_equal_thresholds_later_entry_wins() {
        let catalog = Catalog::new(vec![
            dessert("Cupcake", 5, 0),
            dessert("Donut", 10, 5),
            dessert("Cruller", 12, 5),
        ])
        .unwrap();
        assert_eq!(catalog.select(5).name, "Cruller");
        assert_eq!(catalog.select(4).name, "Cupcake");
    }

    #[test]
    fn next_unlock_points_at_first_locked() {
        let catalog = small_catalog();
        assert_eq!(catalog.next_unlock(0).unwrap().name, "Donut");
        assert_eq!(catalog.next_unlock(7).unwrap().name, "Eclair");
        assert!(catalog.next_unlock(10).is_none());
    }
}
