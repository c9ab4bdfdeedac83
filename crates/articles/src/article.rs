use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stromlager_core::{ArticleId, LocationId};

/// Equipment category of an article.
///
/// The wire tokens are the legacy German labels; they are part of the
/// persisted data contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EquipmentType {
    Kabel,
    #[serde(rename = "Verlängerung")]
    Verlaengerung,
    Verteiler,
    Box,
    Kabelrolle,
    Steckerleiste,
}

/// Current-rating classification, an ordered ladder of tiers.
///
/// The two extreme tiers are open-ended catch-alls: `UpTo13` covers every
/// rating at or under 13 A, `AtLeast125` everything at or above 125 A.
/// Interior tiers stand for exactly their boundary rating. Articles store a
/// plain ampere number; tiering is applied query-side only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AmpacityClass {
    #[serde(rename = "≤13A")]
    UpTo13,
    #[serde(rename = "16A")]
    A16,
    #[serde(rename = "32A")]
    A32,
    #[serde(rename = "63A")]
    A63,
    #[serde(rename = "≥125A")]
    AtLeast125,
}

impl AmpacityClass {
    /// All tiers, in ladder order (lowest first).
    pub const LADDER: [AmpacityClass; 5] = [
        AmpacityClass::UpTo13,
        AmpacityClass::A16,
        AmpacityClass::A32,
        AmpacityClass::A63,
        AmpacityClass::AtLeast125,
    ];

    /// Representative numeric boundary of the tier, in amperes.
    pub fn boundary_amperes(self) -> u32 {
        match self {
            AmpacityClass::UpTo13 => 13,
            AmpacityClass::A16 => 16,
            AmpacityClass::A32 => 32,
            AmpacityClass::A63 => 63,
            AmpacityClass::AtLeast125 => 125,
        }
    }
}

/// Plug/socket standard of a connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Connector {
    T13,
    T23,
    #[serde(rename = "CEE16")]
    Cee16,
    #[serde(rename = "CEE32")]
    Cee32,
    #[serde(rename = "CEE63")]
    Cee63,
    #[serde(rename = "CEE125")]
    Cee125,
    #[serde(rename = "Powerlock 500A")]
    Powerlock500,
    #[serde(rename = "Powerlock 800A")]
    Powerlock800,
}

/// Qualitative marker on an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tag {
    #[serde(rename = "Zähler")]
    Zaehler,
    Hauptschalter,
    #[serde(rename = "defekt")]
    Defekt,
}

/// Read model of a single stock article.
///
/// Articles are owned and mutated by the catalog (take-out/return, edits);
/// the search engine only reads point-in-time snapshots of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub equipment_type: EquipmentType,
    /// Rated current in amperes, stored plain (tiering happens query-side).
    pub ampacity_amperes: u32,
    /// The article's own plug, if it has one.
    pub connector: Option<Connector>,
    /// Available output sockets per connector type. Sparse: absent means zero.
    #[serde(default)]
    pub outputs: BTreeMap<Connector, u32>,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
    /// Physical length in metres, non-negative.
    pub length_m: f64,
    /// The warehouse/bin the article belongs to when stocked.
    pub storage_location_id: LocationId,
    /// Where the article currently is.
    pub current_location_id: LocationId,
    /// Bin/shelf number within the storage location.
    pub storage_section: Option<u32>,
    pub created_at: DateTime<Utc>,
}

impl Article {
    /// An article is in storage iff it currently sits at its designated
    /// storage location (not deployed on a project).
    pub fn is_in_storage(&self) -> bool {
        self.current_location_id == self.storage_location_id
    }

    /// Socket count for a connector type; absent entries count as zero.
    pub fn output_count(&self, connector: Connector) -> u32 {
        self.outputs.get(&connector).copied().unwrap_or(0)
    }
}
