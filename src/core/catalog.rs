//! The destination catalog.
//!
//! The catalog is a fixed list compiled into the binary. Records are never
//! created, updated or removed at runtime; `id` is the only field used for
//! lookup and equality, everything else is display data.

use std::fmt;
use std::str::FromStr;

use hashbrown::{HashMap, HashSet};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DestinationKind {
    Beach,
    Palace,
    Hill,
    City,
    International,
}

impl DestinationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DestinationKind::Beach => "beach",
            DestinationKind::Palace => "palace",
            DestinationKind::Hill => "hill",
            DestinationKind::City => "city",
            DestinationKind::International => "international",
        }
    }

    pub fn all() -> &'static [DestinationKind] {
        &[
            DestinationKind::Beach,
            DestinationKind::Palace,
            DestinationKind::Hill,
            DestinationKind::City,
            DestinationKind::International,
        ]
    }
}

impl fmt::Display for DestinationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DestinationKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        DestinationKind::all()
            .iter()
            .copied()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| CatalogError::UnknownKind(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Budget {
    Low,
    Medium,
    High,
    Luxury,
}

impl Budget {
    pub fn as_str(self) -> &'static str {
        match self {
            Budget::Low => "low",
            Budget::Medium => "medium",
            Budget::High => "high",
            Budget::Luxury => "luxury",
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Budget {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Budget::Low),
            "medium" => Ok(Budget::Medium),
            "high" => Ok(Budget::High),
            "luxury" => Ok(Budget::Luxury),
            _ => Err(CatalogError::UnknownBudget(s.to_string())),
        }
    }
}

/// One wedding destination as shown on the site.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DestinationRecord {
    /// Lowercase slug, used in query strings.
    pub id: &'static str,
    pub title: &'static str,
    /// Relative image path.
    pub image: &'static str,
    /// Display string such as `"50+"`.
    pub venue_count: &'static str,
    pub description: &'static str,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: DestinationKind,
    pub budget: Budget,
    pub location: &'static str,
    /// Decimal string in `[0, 5]`.
    pub rating: &'static str,
    pub guests: &'static str,
    pub price: &'static str,
}

impl PartialEq for DestinationRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for DestinationRecord {}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog is empty")]
    Empty,
    #[error("duplicate destination id: {0}")]
    DuplicateId(String),
    #[error("destination id is not a lowercase slug: {0:?}")]
    InvalidId(String),
    #[error("destination {id}: rating {rating:?} is not a decimal in [0, 5]")]
    InvalidRating { id: String, rating: String },
    #[error("unknown destination type: {0:?}")]
    UnknownKind(String),
    #[error("unknown budget: {0:?}")]
    UnknownBudget(String),
}

/// Read-only view over a record slice with an id index.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: &'static [DestinationRecord],
    by_id: HashMap<&'static str, usize>,
}

impl Catalog {
    /// Wraps a static record slice. Later duplicates of an id never shadow the
    /// first occurrence; [`Catalog::validate`] reports them.
    pub fn new(records: &'static [DestinationRecord]) -> Self {
        let mut by_id = HashMap::with_capacity(records.len());
        for (idx, rec) in records.iter().enumerate() {
            by_id.entry(rec.id).or_insert(idx);
        }
        Self { records, by_id }
    }

    /// The catalog shipped with the site.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_DESTINATIONS)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in catalog order.
    pub fn records(&self) -> &'static [DestinationRecord] {
        self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static DestinationRecord> {
        self.records.iter()
    }

    pub fn get(&self, id: &str) -> Option<&'static DestinationRecord> {
        self.by_id.get(id).map(|&idx| &self.records[idx])
    }

    pub fn by_kind(&self, kind: DestinationKind) -> impl Iterator<Item = &'static DestinationRecord> {
        self.records.iter().filter(move |r| r.kind == kind)
    }

    pub fn by_budget(&self, budget: Budget) -> impl Iterator<Item = &'static DestinationRecord> {
        self.records.iter().filter(move |r| r.budget == budget)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.records.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(self.records.len());
        for rec in self.records {
            if !is_slug(rec.id) {
                return Err(CatalogError::InvalidId(rec.id.to_string()));
            }
            if !seen.insert(rec.id) {
                return Err(CatalogError::DuplicateId(rec.id.to_string()));
            }
            let rating_ok = rec
                .rating
                .parse::<f32>()
                .map(|r| (0.0..=5.0).contains(&r))
                .unwrap_or(false);
            if !rating_ok {
                return Err(CatalogError::InvalidRating {
                    id: rec.id.to_string(),
                    rating: rec.rating.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn is_slug(id: &str) -> bool {
    !id.is_empty()
        && id
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

pub static BUILTIN_DESTINATIONS: &[DestinationRecord] = &[
    DestinationRecord {
        id: "goa",
        title: "Goa",
        image: "image/d1.jpg",
        venue_count: "50+",
        description: "Tropical paradise where your wedding becomes a celebration of sun, sand, and sea.",
        kind: DestinationKind::Beach,
        budget: Budget::Medium,
        location: "West Coast, India",
        rating: "4.8",
        guests: "50-500",
        price: "₹5L",
    },
    DestinationRecord {
        id: "jaipur",
        title: "Jaipur",
        image: "image/d2.jpg",
        venue_count: "40+",
        description: "Unveil royal grandeur in the majestic and culturally rich Pink City.",
        kind: DestinationKind::Palace,
        budget: Budget::High,
        location: "Rajasthan, India",
        rating: "4.9",
        guests: "100-1000",
        price: "₹10L",
    },
    DestinationRecord {
        id: "udaipur",
        title: "Udaipur",
        image: "image/d3.jpg",
        venue_count: "50+",
        description: "Royal affair among the majestic palaces of the City of Lakes.",
        kind: DestinationKind::Palace,
        budget: Budget::Luxury,
        location: "Rajasthan, India",
        rating: "5.0",
        guests: "100-800",
        price: "₹20L",
    },
    DestinationRecord {
        id: "lonavla",
        title: "Lonavla",
        image: "image/d4.jpg",
        venue_count: "30+",
        description: "Celebrate your eternal bond in the breathtaking hills of Lonavla.",
        kind: DestinationKind::Hill,
        budget: Budget::Medium,
        location: "Maharashtra, India",
        rating: "4.7",
        guests: "50-400",
        price: "₹4L",
    },
    DestinationRecord {
        id: "kerala",
        title: "Kerala",
        image: "image/Backwaters-Wedding-in-Kerala3.jpg",
        venue_count: "35+",
        description: "Exchange vows in the serene backwaters and lush greenery of God's Own Country.",
        kind: DestinationKind::Beach,
        budget: Budget::Medium,
        location: "South India",
        rating: "4.8",
        guests: "50-300",
        price: "₹6L",
    },
    DestinationRecord {
        id: "mussoorie",
        title: "Mussoorie",
        image: "image/mussorie.jpeg",
        venue_count: "25+",
        description: "A romantic wedding amidst the misty hills and panoramic views of the Himalayas.",
        kind: DestinationKind::Hill,
        budget: Budget::Medium,
        location: "Uttarakhand, India",
        rating: "4.7",
        guests: "50-300",
        price: "₹5L",
    },
    DestinationRecord {
        id: "rishikesh",
        title: "Rishikesh",
        image: "image/rishikesh.jpeg",
        venue_count: "20+",
        description: "A spiritual and scenic destination by the holy Ganges for a unique wedding.",
        kind: DestinationKind::Hill,
        budget: Budget::Low,
        location: "Uttarakhand, India",
        rating: "4.6",
        guests: "50-250",
        price: "₹3L",
    },
    DestinationRecord {
        id: "shimla",
        title: "Shimla",
        image: "image/shimla.jpeg",
        venue_count: "30+",
        description: "Classic colonial charm and snow-capped peaks for a fairytale wedding.",
        kind: DestinationKind::Hill,
        budget: Budget::Medium,
        location: "Himachal Pradesh, India",
        rating: "4.7",
        guests: "50-400",
        price: "₹6L",
    },
    DestinationRecord {
        id: "agra",
        title: "Agra",
        image: "image/agra.jpeg",
        venue_count: "15+",
        description: "Celebrate love in the city of the Taj Mahal, the ultimate symbol of eternal devotion.",
        kind: DestinationKind::City,
        budget: Budget::Medium,
        location: "Uttar Pradesh, India",
        rating: "4.5",
        guests: "100-600",
        price: "₹7L",
    },
    DestinationRecord {
        id: "andaman",
        title: "Andaman",
        image: "image/Beach-Wedding3.jpeg",
        venue_count: "10+",
        description: "Exotic island weddings with turquoise waters and white sandy beaches.",
        kind: DestinationKind::Beach,
        budget: Budget::High,
        location: "Andaman Islands, India",
        rating: "4.9",
        guests: "20-150",
        price: "₹12L",
    },
    DestinationRecord {
        id: "jodhpur",
        title: "Jodhpur",
        image: "image/s4.jpg",
        venue_count: "30+",
        description: "The Blue City offers magnificent forts and palaces for a truly regal wedding experience.",
        kind: DestinationKind::Palace,
        budget: Budget::Luxury,
        location: "Rajasthan, India",
        rating: "4.9",
        guests: "100-800",
        price: "₹15L",
    },
    DestinationRecord {
        id: "dubai",
        title: "Dubai",
        image: "image/dubai.jpg",
        venue_count: "60+",
        description: "Modern luxury meets desert tradition in the cosmopolitan city of gold.",
        kind: DestinationKind::International,
        budget: Budget::Luxury,
        location: "UAE",
        rating: "5.0",
        guests: "100-2000",
        price: "₹50L",
    },
    DestinationRecord {
        id: "thailand",
        title: "Thailand",
        image: "image/thailand.jpg",
        venue_count: "80+",
        description: "Perfect tropical escape with world-class hospitality and stunning sunset beaches.",
        kind: DestinationKind::International,
        budget: Budget::High,
        location: "Southeast Asia",
        rating: "4.8",
        guests: "50-500",
        price: "₹25L",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 13);
        assert_eq!(catalog.validate(), Ok(()));
    }

    #[test]
    fn builtin_order_is_stable() {
        let ids: Vec<&str> = Catalog::builtin().iter().map(|r| r.id).collect();
        assert_eq!(
            ids,
            [
                "goa", "jaipur", "udaipur", "lonavla", "kerala", "mussoorie", "rishikesh",
                "shimla", "agra", "andaman", "jodhpur", "dubai", "thailand"
            ]
        );
    }

    #[test]
    fn lookup_is_by_id_only() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get("udaipur").map(|r| r.title), Some("Udaipur"));
        assert!(catalog.get("Udaipur").is_none());
        assert!(catalog.get("atlantis").is_none());
    }

    #[test]
    fn filters_follow_catalog_order() {
        let catalog = Catalog::builtin();
        let palaces: Vec<&str> = catalog.by_kind(DestinationKind::Palace).map(|r| r.id).collect();
        assert_eq!(palaces, ["jaipur", "udaipur", "jodhpur"]);

        let luxury: Vec<&str> = catalog.by_budget(Budget::Luxury).map(|r| r.id).collect();
        assert_eq!(luxury, ["udaipur", "jodhpur", "dubai"]);
    }

    #[test]
    fn kind_and_budget_parse_case_insensitively() {
        assert_eq!("Beach".parse::<DestinationKind>(), Ok(DestinationKind::Beach));
        assert_eq!(" LUXURY ".parse::<Budget>(), Ok(Budget::Luxury));
        assert!(matches!(
            "castle".parse::<DestinationKind>(),
            Err(CatalogError::UnknownKind(_))
        ));
    }

    fn leak(records: Vec<DestinationRecord>) -> &'static [DestinationRecord] {
        Box::leak(records.into_boxed_slice())
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let goa = BUILTIN_DESTINATIONS[0];
        let catalog = Catalog::new(leak(vec![goa, goa]));
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateId("goa".to_string()))
        );
        // First occurrence stays addressable.
        assert!(catalog.get("goa").is_some());
    }

    #[test]
    fn validate_rejects_out_of_range_rating() {
        let bad = DestinationRecord {
            rating: "5.5",
            ..BUILTIN_DESTINATIONS[1]
        };
        assert!(matches!(
            Catalog::new(leak(vec![bad])).validate(),
            Err(CatalogError::InvalidRating { .. })
        ));
    }

    #[test]
    fn validate_rejects_uppercase_ids() {
        let bad = DestinationRecord {
            id: "Goa",
            ..BUILTIN_DESTINATIONS[0]
        };
        assert_eq!(
            Catalog::new(leak(vec![bad])).validate(),
            Err(CatalogError::InvalidId("Goa".to_string()))
        );
    }

    #[test]
    fn validate_rejects_empty_catalog() {
        assert_eq!(Catalog::new(&[]).validate(), Err(CatalogError::Empty));
    }
}
