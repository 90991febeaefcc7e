// src/domain/listing.rs

use serde::{Deserialize, Serialize};

/// A property listing, the only persisted entity in the system.
///
/// This is the typed boundary between the HTTP layer and the store: every
/// document coming out of the database passes through exactly one mapping
/// step into this struct, so schema drift is contained in `db::listings`.
///
/// `id` is assigned by the store on insert and surfaced to clients as a
/// string. It is never read from request bodies (`skip_deserializing`), so
/// a stray `id` key on create is silently ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub slug: String,
    pub name: String,
    pub summary: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub province: String,
    #[serde(default = "default_country")]
    pub country: String,

    pub category: Category,
    pub development_type: Option<DevelopmentType>,
    pub commercial_type: Option<CommercialType>,
    pub hospitality_type: Option<HospitalityType>,

    pub size_sqft: Option<f64>,
    pub lot_acres: Option<f64>,
    pub year_built: Option<i64>,
    pub coordinates: Option<Coordinates>,

    #[serde(default)]
    pub status: ListingStatus,
    pub price: Option<f64>,

    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

fn default_country() -> String {
    "Canada".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Listing {
    /// Range checks that serde cannot express. Enum membership is already
    /// enforced by deserialization; this only guards the numeric fields.
    /// Must run before the slug uniqueness check on create.
    pub fn validate(&self) -> Result<(), String> {
        if self.size_sqft.is_some_and(|v| v < 0.0) {
            return Err("size_sqft must be non-negative".to_string());
        }
        if self.lot_acres.is_some_and(|v| v < 0.0) {
            return Err("lot_acres must be non-negative".to_string());
        }
        if self.price.is_some_and(|v| v < 0.0) {
            return Err("price must be non-negative".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Land,
    Residential,
    Commercial,
    Development,
    Hospitality,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Land => "land",
            Category::Residential => "residential",
            Category::Commercial => "commercial",
            Category::Development => "development",
            Category::Hospitality => "hospitality",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "land" => Some(Category::Land),
            "residential" => Some(Category::Residential),
            "commercial" => Some(Category::Commercial),
            "development" => Some(Category::Development),
            "hospitality" => Some(Category::Hospitality),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DevelopmentType {
    #[serde(rename = "high rise")]
    HighRise,
    #[serde(rename = "mid rise")]
    MidRise,
    #[serde(rename = "low rise")]
    LowRise,
}

impl DevelopmentType {
    pub fn as_str(self) -> &'static str {
        match self {
            DevelopmentType::HighRise => "high rise",
            DevelopmentType::MidRise => "mid rise",
            DevelopmentType::LowRise => "low rise",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "high rise" => Some(DevelopmentType::HighRise),
            "mid rise" => Some(DevelopmentType::MidRise),
            "low rise" => Some(DevelopmentType::LowRise),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommercialType {
    Plaza,
    Office,
    Medical,
    Industrial,
}

impl CommercialType {
    pub fn as_str(self) -> &'static str {
        match self {
            CommercialType::Plaza => "plaza",
            CommercialType::Office => "office",
            CommercialType::Medical => "medical",
            CommercialType::Industrial => "industrial",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "plaza" => Some(CommercialType::Plaza),
            "office" => Some(CommercialType::Office),
            "medical" => Some(CommercialType::Medical),
            "industrial" => Some(CommercialType::Industrial),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HospitalityType {
    Hotel,
    Apartment,
    Retirement,
}

impl HospitalityType {
    pub fn as_str(self) -> &'static str {
        match self {
            HospitalityType::Hotel => "hotel",
            HospitalityType::Apartment => "apartment",
            HospitalityType::Retirement => "retirement",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "hotel" => Some(HospitalityType::Hotel),
            "apartment" => Some(HospitalityType::Apartment),
            "retirement" => Some(HospitalityType::Retirement),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    #[default]
    Available,
    Leased,
    Sold,
    #[serde(rename = "under development")]
    UnderDevelopment,
}

impl ListingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ListingStatus::Available => "available",
            ListingStatus::Leased => "leased",
            ListingStatus::Sold => "sold",
            ListingStatus::UnderDevelopment => "under development",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "available" => Some(ListingStatus::Available),
            "leased" => Some(ListingStatus::Leased),
            "sold" => Some(ListingStatus::Sold),
            "under development" => Some(ListingStatus::UnderDevelopment),
            _ => None,
        }
    }
}
