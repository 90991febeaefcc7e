// src/domain/responder.rs

use crate::domain::listing::Listing;

// Keyword sets for the four topic detectors. Matching is plain substring
// matching, not tokenized: "pricing" triggers the price topic via "price",
// and "type" matches inside longer words. That looseness is intentional and
// must not be "fixed" to whole-word matching.
const PRICE_KEYWORDS: [&str; 3] = ["price", "cost", "listing"];
const SIZE_KEYWORDS: [&str; 3] = ["size", "square", "sqft"];
const ZONING_KEYWORDS: [&str; 3] = ["zoning", "use", "type"];
const STATUS_KEYWORDS: [&str; 2] = ["status", "available"];

const MAX_HIGHLIGHTS: usize = 5;

/// Answers a free-text question about a listing from its stored fields.
///
/// Pure function: same listing and question always produce the same reply,
/// and no fact is ever invented beyond what the listing holds. Topics are
/// independent and additive; a question mentioning both price and size gets
/// both blocks. The highlights overview only appears when no topic keyword
/// matched at all.
pub fn respond(listing: &Listing, message: &str) -> String {
    let q = message.to_lowercase();

    let mut lines = vec![format!(
        "You're asking about {} in {}. Here's what I can share:",
        listing.name, listing.city
    )];

    let asked_price = contains_any(&q, &PRICE_KEYWORDS);
    let asked_size = contains_any(&q, &SIZE_KEYWORDS);
    let asked_zoning = contains_any(&q, &ZONING_KEYWORDS);
    let asked_status = contains_any(&q, &STATUS_KEYWORDS);

    if asked_price {
        match listing.price {
            Some(price) => lines.push(format!(
                "- Current guidance price is ${}.",
                format_amount(price)
            )),
            None => lines.push("- Pricing is available upon request.".to_string()),
        }
    }

    if asked_size {
        // A stored zero is treated the same as absent for both fields.
        if let Some(size) = listing.size_sqft.filter(|v| *v != 0.0) {
            lines.push(format!(
                "- Interior size is approx. {} sq ft.",
                format_amount(size)
            ));
        }
        if let Some(acres) = listing.lot_acres.filter(|v| *v != 0.0) {
            lines.push(format!("- Lot size is approx. {acres:.2} acres."));
        }
    }

    if asked_zoning {
        let mut parts = vec![title_case(listing.category.as_str())];
        if let Some(t) = listing.development_type {
            parts.push(title_case(t.as_str()));
        }
        if let Some(t) = listing.commercial_type {
            parts.push(title_case(t.as_str()));
        }
        if let Some(t) = listing.hospitality_type {
            parts.push(title_case(t.as_str()));
        }
        lines.push(format!("- Property type: {}", parts.join(", ")));
    }

    if asked_status {
        lines.push(format!(
            "- Status: {}",
            title_case(listing.status.as_str())
        ));
    }

    if !(asked_price || asked_size || asked_zoning || asked_status) {
        if listing.highlights.is_empty() {
            lines.push(
                "Let me know if you'd like details on price, size, zoning, or availability."
                    .to_string(),
            );
        } else {
            lines.push("Key highlights:".to_string());
            for highlight in listing.highlights.iter().take(MAX_HIGHLIGHTS) {
                lines.push(format!("  \u{2022} {highlight}"));
            }
        }
    }

    lines.join("\n")
}

fn contains_any(q: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| q.contains(k))
}

/// Rounds to a whole number and inserts thousands separators,
/// e.g. 12500000.0 -> "12,500,000".
fn format_amount(amount: f64) -> String {
    let digits = (amount.round() as i64).to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 && c.is_ascii_digit() {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Capitalizes the first letter of each word: "under development"
/// becomes "Under Development". Stored enum values are already lowercase.
fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
