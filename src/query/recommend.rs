//! Best-store recommendation: the cheapest listing within a subset.

use crate::catalog::Listing;

/// Returns the cheapest listing in the subset, or `None` for an empty
/// subset.
///
/// Ties keep the first occurrence in subset order, so the result is
/// deterministic for any input. Listings without a comparable price
/// (missing or non-finite) are never chosen over a priced listing; when no
/// listing in the subset carries a comparable price, the first listing is
/// returned so the caller still has a card to show.
pub fn recommend<'a>(subset: &[&'a Listing]) -> Option<&'a Listing> {
    let first = *subset.first()?;

    let mut best: Option<(&Listing, f64)> = None;
    for &listing in subset {
        let Some(price) = listing.comparable_price() else {
            continue;
        };
        match best {
            Some((_, lowest)) if price >= lowest => {}
            _ => best = Some((listing, price)),
        }
    }

    Some(best.map_or(first, |(listing, _)| listing))
}

/// How much pricier the most expensive displayable match is, compared to
/// the pick. `None` when there is nothing meaningful to compare.
pub fn max_savings(subset: &[&Listing], pick: &Listing) -> Option<f64> {
    let pick_price = pick.display_price()?;
    let priciest = subset
        .iter()
        .filter_map(|l| l.display_price())
        .fold(None, |acc: Option<f64>, p| Some(acc.map_or(p, |a| a.max(p))))?;

    let savings = priciest - pick_price;
    if savings > 0.0 {
        Some(savings)
    } else {
        None
    }
}
