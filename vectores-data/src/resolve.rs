//! Turning selected work orders into located visit targets.

use std::collections::HashSet;

use futures_util::future::join_all;
use geo::Coord;
use thiserror::Error;
use vectores_core::{LocationSource, VisitTarget, WorkOrder};

use crate::book::WorkOrderBook;
use crate::geocode::Geocoder;

/// Problems with the set of orders chosen for a route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Nothing was selected.
    #[error("select at least one order")]
    Empty,
    /// A selected identifier is not in the book.
    #[error("no work order with id \"{id}\"")]
    UnknownOrder {
        /// Identifier as supplied.
        id: String,
    },
}

/// Look up `ids` in `book`, keeping selection order.
///
/// Identifiers are trimmed; blank ones are ignored and repeats after the
/// first are dropped.
///
/// # Errors
///
/// Returns [`SelectionError::Empty`] when no identifier remains and
/// [`SelectionError::UnknownOrder`] for the first identifier the book lacks.
pub fn select_orders<'a, I, S>(
    book: &'a WorkOrderBook,
    ids: I,
) -> Result<Vec<&'a WorkOrder>, SelectionError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut selected = Vec::new();
    for raw in ids {
        let id = raw.as_ref().trim();
        if id.is_empty() || !seen.insert(id.to_owned()) {
            continue;
        }
        let order = book.get(id).ok_or_else(|| SelectionError::UnknownOrder {
            id: id.to_owned(),
        })?;
        selected.push(order);
    }
    if selected.is_empty() {
        return Err(SelectionError::Empty);
    }
    Ok(selected)
}

/// Geocode every order's address concurrently and build its visit target.
///
/// All lookups are awaited before returning, and targets come back in the
/// same order as `orders`. An order whose lookup fails is placed at
/// `fallback` and marked [`LocationSource::Fallback`].
pub async fn resolve_targets<G>(
    orders: &[&WorkOrder],
    geocoder: &G,
    fallback: Coord<f64>,
) -> Vec<VisitTarget>
where
    G: Geocoder + ?Sized,
{
    let lookups = orders.iter().map(|order| async move {
        match geocoder.geocode(&order.resident.address).await {
            Ok(location) => order.to_visit_target(location, LocationSource::Geocoded),
            Err(err) => {
                log::warn!(
                    "order {} ({}): {err}; placing it at the fallback coordinate",
                    order.formatted_number(),
                    order.id
                );
                order.to_visit_target(fallback, LocationSource::Fallback)
            }
        }
    });
    join_all(lookups).await
}
