//! Fault isolation for the concurrent domain fetches.
//!
//! The dashboard never aborts on a failed collaborator call: every fetch is
//! settled individually, and a failure degrades that domain to its empty
//! default while siblings proceed untouched. This is the only place in the
//! engine where failure containment happens - downstream aggregators assume
//! they always receive a valid (possibly empty) slice.

use log::warn;

use crate::errors::Result;

/// Outcome of one settled domain fetch: the real value or the type's
/// default, with the failure recorded for observability.
#[derive(Debug, Clone)]
pub struct Settled<T> {
    pub value: T,
    pub failed: bool,
}

/// Collapses a fetch outcome into a usable value.
///
/// A failed fetch yields `T::default()` (the empty list for record slices)
/// so aggregators always receive valid input; the error is logged and
/// flagged, never propagated.
pub fn settle<T: Default>(domain: &str, outcome: Result<T>) -> Settled<T> {
    match outcome {
        Ok(value) => Settled {
            value,
            failed: false,
        },
        Err(e) => {
            warn!(
                "{} fetch failed, continuing with empty data: {}",
                domain, e
            );
            Settled {
                value: T::default(),
                failed: true,
            }
        }
    }
}
