use crate::db::connection::Database;
use crate::db::listings::{count_listings, insert_listing};
use crate::domain::listing::{
    Category, CommercialType, DevelopmentType, HospitalityType, Listing, ListingStatus,
};
use crate::errors::ServerError;

/// What the seeder did, for the `/seed` response.
#[derive(Debug)]
pub struct SeedOutcome {
    pub message: &'static str,
    pub count: i64,
}

/// Inserts the four demo listings, but only into an empty store. The gate
/// is the collection count, not content: a store holding any listing at
/// all (demo or not) is left untouched.
pub fn seed_demo_listings(db: &Database) -> Result<SeedOutcome, ServerError> {
    let existing = count_listings(db)?;
    if existing > 0 {
        return Ok(SeedOutcome {
            message: "Collection already seeded",
            count: existing,
        });
    }

    let samples = demo_listings();
    for listing in &samples {
        insert_listing(db, listing)?;
    }

    Ok(SeedOutcome {
        message: "Seeded demo properties",
        count: samples.len() as i64,
    })
}

/// One exemplar per major category. These are literal fixtures, not a
/// general fixture loader.
fn demo_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: None,
            slug: "isherwood-plaza".to_string(),
            name: "Isherwood Plaza".to_string(),
            summary: "Modern retail plaza with excellent frontage".to_string(),
            description: "A high-visibility retail plaza with ample parking and strong tenant mix."
                .to_string(),
            address: "123 Main St".to_string(),
            city: "Cambridge".to_string(),
            province: "ON".to_string(),
            country: "Canada".to_string(),
            category: Category::Commercial,
            development_type: None,
            commercial_type: Some(CommercialType::Plaza),
            hospitality_type: None,
            size_sqft: Some(45000.0),
            lot_acres: Some(3.5),
            year_built: Some(2010),
            coordinates: None,
            status: ListingStatus::Available,
            price: Some(12_500_000.0),
            images: vec![],
            highlights: vec![
                "Prime corner exposure".to_string(),
                "Ample surface parking".to_string(),
                "Strong traffic counts".to_string(),
            ],
        },
        Listing {
            id: None,
            slug: "riverside-towers".to_string(),
            name: "Riverside Towers".to_string(),
            summary: "Waterfront high-rise residential development".to_string(),
            description: "Proposed twin-tower high rise with panoramic river views.".to_string(),
            address: "500 Riverside Dr".to_string(),
            city: "Kitchener".to_string(),
            province: "ON".to_string(),
            country: "Canada".to_string(),
            category: Category::Development,
            development_type: Some(DevelopmentType::HighRise),
            commercial_type: None,
            hospitality_type: None,
            size_sqft: None,
            lot_acres: Some(2.2),
            year_built: None,
            coordinates: None,
            status: ListingStatus::UnderDevelopment,
            price: None,
            images: vec![],
            highlights: vec![
                "Waterfront location".to_string(),
                "Transit adjacent".to_string(),
                "Zoning in progress".to_string(),
            ],
        },
        Listing {
            id: None,
            slug: "isherwood-industrial-park".to_string(),
            name: "Isherwood Industrial Park".to_string(),
            summary: "Modern industrial bays with clear heights".to_string(),
            description: "Flex industrial with loading docks and ample marshalling.".to_string(),
            address: "200 Industry Rd".to_string(),
            city: "Guelph".to_string(),
            province: "ON".to_string(),
            country: "Canada".to_string(),
            category: Category::Commercial,
            development_type: None,
            commercial_type: Some(CommercialType::Industrial),
            hospitality_type: None,
            size_sqft: Some(120_000.0),
            lot_acres: Some(8.0),
            year_built: None,
            coordinates: None,
            status: ListingStatus::Available,
            price: Some(28_900_000.0),
            images: vec![],
            highlights: vec![
                "32' clear height".to_string(),
                "ESFR sprinklers".to_string(),
                "Multiple dock doors".to_string(),
            ],
        },
        Listing {
            id: None,
            slug: "grandview-retirement-residence".to_string(),
            name: "Grandview Retirement Residence".to_string(),
            summary: "Thoughtfully designed retirement community".to_string(),
            description: "A full-service retirement home with wellness amenities.".to_string(),
            address: "88 Grandview Ave".to_string(),
            city: "Waterloo".to_string(),
            province: "ON".to_string(),
            country: "Canada".to_string(),
            category: Category::Hospitality,
            development_type: None,
            commercial_type: None,
            hospitality_type: Some(HospitalityType::Retirement),
            size_sqft: None,
            lot_acres: None,
            year_built: None,
            coordinates: None,
            status: ListingStatus::Available,
            price: None,
            images: vec![],
            highlights: vec![
                "On-site healthcare".to_string(),
                "Chef-led dining".to_string(),
                "Landscaped courtyards".to_string(),
            ],
        },
    ]
}
