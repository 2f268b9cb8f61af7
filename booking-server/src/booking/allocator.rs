//! Table allocator
//!
//! First-fit table selection: candidates are the active tables big enough
//! for the party; a location preference moves matching tables to the front;
//! within each group the smallest table wins, to keep large tables free for
//! large parties. The first candidate without a blocking booking is taken.
//!
//! The search runs over a snapshot read on the caller's connection, so the
//! booking service can keep it inside the transaction that inserts the
//! booking.

use chrono::{DateTime, Utc};
use shared::models::DiningTable;
use sqlx::SqliteConnection;

use crate::db::repository::{RepoResult, booking, dining_table};

/// Order candidate tables: preferred location first, then the rest, each
/// group ascending by seat count.
///
/// Deliberately an explicit two-list merge rather than one sort with a
/// compound comparator; the tie-break rules stay visible and testable.
/// Preference is a case-insensitive substring match on `location_tag`.
pub fn order_candidates(tables: Vec<DiningTable>, prefer_tag: Option<&str>) -> Vec<DiningTable> {
    let mut tables = tables;
    // Stable smallest-first base order; id breaks seat-count ties
    tables.sort_by_key(|t| (t.seats_count, t.id));

    let Some(tag) = prefer_tag.map(str::to_lowercase).filter(|t| !t.is_empty()) else {
        return tables;
    };

    let (mut preferred, others): (Vec<_>, Vec<_>) = tables.into_iter().partition(|t| {
        t.location_tag
            .as_deref()
            .is_some_and(|loc| loc.to_lowercase().contains(&tag))
    });
    preferred.extend(others);
    preferred
}

/// Find the first free table for the party and window, or `None`.
///
/// `None` is a valid outcome, not an error: the booking is then created
/// without a table and staff assigns one manually. Only `pending` and
/// `confirmed` bookings block a slot; a pending hold reserves the table just
/// as a confirmed one does, so a request cannot double-book a slot that is
/// mid-confirmation.
pub async fn find_available_table(
    conn: &mut SqliteConnection,
    guests_count: i64,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    prefer_tag: Option<&str>,
) -> RepoResult<Option<DiningTable>> {
    let candidates = dining_table::find_candidates(conn, guests_count).await?;
    if candidates.is_empty() {
        return Ok(None);
    }

    for table in order_candidates(candidates, prefer_tag) {
        if !booking::has_blocking_conflict(conn, table.id, start, end).await? {
            return Ok(Some(table));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(id: i64, seats: i64, tag: Option<&str>) -> DiningTable {
        DiningTable {
            id,
            name: format!("T{id}"),
            seats_count: seats,
            location_tag: tag.map(str::to_string),
            is_active: true,
        }
    }

    fn ids(tables: &[DiningTable]) -> Vec<i64> {
        tables.iter().map(|t| t.id).collect()
    }

    #[test]
    fn no_preference_orders_by_seats_then_id() {
        let ordered = order_candidates(
            vec![table(1, 6, None), table(2, 2, None), table(3, 4, None)],
            None,
        );
        assert_eq!(ids(&ordered), vec![2, 3, 1]);
    }

    #[test]
    fn preferred_tables_come_first_regardless_of_size() {
        // The big window table must outrank the small untagged one
        let ordered = order_candidates(
            vec![table(1, 2, None), table(2, 6, Some("window")), table(3, 4, Some("window"))],
            Some("window"),
        );
        assert_eq!(ids(&ordered), vec![3, 2, 1]);
    }

    #[test]
    fn preference_match_is_case_insensitive_substring() {
        let ordered = order_candidates(
            vec![table(1, 4, Some("By the Window")), table(2, 2, None)],
            Some("window"),
        );
        assert_eq!(ids(&ordered), vec![1, 2]);
    }

    #[test]
    fn unknown_preference_leaves_base_order() {
        let ordered = order_candidates(
            vec![table(1, 4, Some("terrace")), table(2, 2, None)],
            Some("window"),
        );
        assert_eq!(ids(&ordered), vec![2, 1]);
    }

    #[test]
    fn empty_preference_is_ignored() {
        let ordered = order_candidates(vec![table(1, 4, None), table(2, 2, None)], Some(""));
        assert_eq!(ids(&ordered), vec![2, 1]);
    }

    #[test]
    fn untagged_tables_are_never_preferred() {
        let ordered = order_candidates(
            vec![table(1, 2, None), table(2, 4, Some("window"))],
            Some("window"),
        );
        assert_eq!(ids(&ordered), vec![2, 1]);
    }
}
