use crate::db::connection::Database;
use crate::domain::listing::{
    Category, CommercialType, Coordinates, DevelopmentType, HospitalityType, Listing,
    ListingStatus,
};
use crate::errors::ServerError;
use chrono::Utc;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::{params, OptionalExtension, Row, ToSql};

pub const DEFAULT_LIMIT: i64 = 50;

/// Exact-match filters for `list_listings`. Unset fields impose no
/// constraint. Values are kept as raw strings: a value outside the
/// enum vocabulary simply matches nothing, same as querying the store
/// directly would.
#[derive(Debug, Default)]
pub struct ListingFilter {
    pub category: Option<String>,
    pub development_type: Option<String>,
    pub commercial_type: Option<String>,
    pub hospitality_type: Option<String>,
    pub city: Option<String>,
    pub status: Option<String>,
}

// Stores each enum as its wire string and refuses to load anything
// outside the vocabulary, so a corrupted row surfaces as a DbError
// instead of leaking through the typed model.
macro_rules! impl_sql_text_enum {
    ($ty:ty, $label:expr) => {
        impl ToSql for $ty {
            fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                Ok(ToSqlOutput::from(self.as_str()))
            }
        }

        impl FromSql for $ty {
            fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                let text = value.as_str()?;
                <$ty>::parse(text).ok_or_else(|| {
                    FromSqlError::Other(format!("unrecognized {} value: {text}", $label).into())
                })
            }
        }
    };
}

impl_sql_text_enum!(Category, "category");
impl_sql_text_enum!(DevelopmentType, "development_type");
impl_sql_text_enum!(CommercialType, "commercial_type");
impl_sql_text_enum!(HospitalityType, "hospitality_type");
impl_sql_text_enum!(ListingStatus, "status");

const LISTING_COLUMNS: &str = r#"
    id, slug, name, summary, description,
    address, city, province, country,
    category, development_type, commercial_type, hospitality_type,
    size_sqft, lot_acres, year_built, latitude, longitude,
    status, price, images, highlights
"#;

/// The single translation point from the store-native row shape to the
/// typed `Listing`. Column list must stay in sync with `LISTING_COLUMNS`.
fn listing_from_row(row: &Row<'_>) -> rusqlite::Result<Listing> {
    let latitude: Option<f64> = row.get("latitude")?;
    let longitude: Option<f64> = row.get("longitude")?;
    let coordinates = match (latitude, longitude) {
        (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
        _ => None,
    };

    Ok(Listing {
        id: Some(row.get::<_, i64>("id")?.to_string()),
        slug: row.get("slug")?,
        name: row.get("name")?,
        summary: row.get("summary")?,
        description: row.get("description")?,
        address: row.get("address")?,
        city: row.get("city")?,
        province: row.get("province")?,
        country: row.get("country")?,
        category: row.get("category")?,
        development_type: row.get("development_type")?,
        commercial_type: row.get("commercial_type")?,
        hospitality_type: row.get("hospitality_type")?,
        size_sqft: row.get("size_sqft")?,
        lot_acres: row.get("lot_acres")?,
        year_built: row.get("year_built")?,
        coordinates,
        status: row.get("status")?,
        price: row.get("price")?,
        images: string_list_from_column(row, "images")?,
        highlights: string_list_from_column(row, "highlights")?,
    })
}

// images/highlights are stored as JSON arrays in a TEXT column; order
// is preserved by the JSON encoding.
fn string_list_from_column(row: &Row<'_>, column: &str) -> rusqlite::Result<Vec<String>> {
    let raw: String = row.get(column)?;
    serde_json::from_str(&raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            format!("bad JSON in {column} column: {e}").into(),
        )
    })
}

/// Returns up to `limit` listings matching the filter, in insertion order
/// (ascending rowid). A `limit` of 0 returns an empty list, it does not
/// mean "unlimited".
pub fn list_listings(
    db: &Database,
    filter: &ListingFilter,
    limit: i64,
) -> Result<Vec<Listing>, ServerError> {
    db.with_conn(|conn| {
        let mut sql = format!("SELECT {LISTING_COLUMNS} FROM listings");
        let mut clauses: Vec<&str> = Vec::new();
        let mut bound: Vec<&dyn ToSql> = Vec::new();

        if let Some(v) = &filter.category {
            clauses.push("category = ?");
            bound.push(v);
        }
        if let Some(v) = &filter.development_type {
            clauses.push("development_type = ?");
            bound.push(v);
        }
        if let Some(v) = &filter.commercial_type {
            clauses.push("commercial_type = ?");
            bound.push(v);
        }
        if let Some(v) = &filter.hospitality_type {
            clauses.push("hospitality_type = ?");
            bound.push(v);
        }
        if let Some(v) = &filter.city {
            clauses.push("city = ?");
            bound.push(v);
        }
        if let Some(v) = &filter.status {
            clauses.push("status = ?");
            bound.push(v);
        }

        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY id LIMIT ?");
        bound.push(&limit);

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(&bound[..], listing_from_row)?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    })
}

/// Looks a listing up by its unique slug.
pub fn get_listing_by_slug(db: &Database, slug: &str) -> Result<Listing, ServerError> {
    db.with_conn(|conn| {
        conn.query_row(
            &format!("SELECT {LISTING_COLUMNS} FROM listings WHERE slug = ?1"),
            params![slug],
            listing_from_row,
        )
        .optional()?
        .ok_or_else(|| ServerError::NotFound("Property not found".to_string()))
    })
}

/// Validates and inserts a new listing, returning the store-assigned id
/// as a string.
///
/// The slug pre-check gives a clean Conflict error in the common case;
/// the UNIQUE constraint on `slug` is what actually guarantees uniqueness
/// if two creates race, in which case the loser surfaces as a DbError.
pub fn insert_listing(db: &Database, listing: &Listing) -> Result<String, ServerError> {
    listing.validate().map_err(ServerError::Invalid)?;

    db.with_conn(|conn| {
        let existing: Option<i64> = conn
            .query_row(
                "SELECT id FROM listings WHERE slug = ?1",
                params![&listing.slug],
                |row| row.get(0),
            )
            .optional()?;
        if existing.is_some() {
            return Err(ServerError::Conflict("Slug already exists".to_string()));
        }

        let images = serde_json::to_string(&listing.images)
            .map_err(|e| ServerError::DbError(e.to_string()))?;
        let highlights = serde_json::to_string(&listing.highlights)
            .map_err(|e| ServerError::DbError(e.to_string()))?;
        let now = Utc::now().naive_utc();

        conn.execute(
            r#"
            INSERT INTO listings (
                slug, name, summary, description,
                address, city, province, country,
                category, development_type, commercial_type, hospitality_type,
                size_sqft, lot_acres, year_built, latitude, longitude,
                status, price, images, highlights, created_at
            ) VALUES (
                ?1, ?2, ?3, ?4,
                ?5, ?6, ?7, ?8,
                ?9, ?10, ?11, ?12,
                ?13, ?14, ?15, ?16, ?17,
                ?18, ?19, ?20, ?21, ?22
            )
            "#,
            params![
                &listing.slug,
                &listing.name,
                &listing.summary,
                &listing.description,
                &listing.address,
                &listing.city,
                &listing.province,
                &listing.country,
                listing.category,
                listing.development_type,
                listing.commercial_type,
                listing.hospitality_type,
                listing.size_sqft,
                listing.lot_acres,
                listing.year_built,
                listing.coordinates.map(|c| c.lat),
                listing.coordinates.map(|c| c.lng),
                listing.status,
                listing.price,
                images,
                highlights,
                now,
            ],
        )?;

        Ok(conn.last_insert_rowid().to_string())
    })
}

/// Total number of stored listings. Drives the seeder's empty-collection
/// gate and the diagnostic endpoint.
pub fn count_listings(db: &Database) -> Result<i64, ServerError> {
    db.with_conn(|conn| {
        conn.query_row("SELECT COUNT(*) FROM listings", [], |row| row.get(0))
            .map_err(ServerError::from)
    })
}
