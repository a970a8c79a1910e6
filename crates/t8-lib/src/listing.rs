//! Snapshot listing extraction
//!
//! Collection responses identify each snapshot through its self URL, whose
//! trailing path segment is the capture epoch. Epoch 0 is the server's
//! "no snapshot" sentinel and never appears in listings. Partial entries
//! (no `_links`, no `self`, non-numeric segment) are skipped silently.
//! Response order is preserved; the server's ordering is the contract.

use tracing::debug;

use crate::models::ListingItem;
use crate::timestamp;

/// Extract the valid snapshot timestamps of a collection response as
/// formatted UTC date strings, in response order.
pub fn extract_timestamps(items: &[ListingItem]) -> Vec<String> {
    let timestamps: Vec<String> = items
        .iter()
        .filter_map(snapshot_epoch)
        .filter(|&epoch| epoch != 0)
        .map(timestamp::format_utc)
        .collect();

    debug!(
        items = items.len(),
        valid = timestamps.len(),
        "extracted snapshot timestamps"
    );

    timestamps
}

/// Pull the epoch out of an item's self URL, if it has one.
fn snapshot_epoch(item: &ListingItem) -> Option<i64> {
    let url = item.links.as_ref()?.self_url.as_deref()?;
    url.trim_end_matches('/')
        .rsplit('/')
        .next()?
        .parse::<i64>()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_sentinel_and_linkless_items() {
        let items = vec![
            ListingItem::with_self_url("http://host/rest/waves/M/P/Q/0"),
            ListingItem::with_self_url("http://host/rest/waves/M/P/Q/1678883445"),
            ListingItem::unlinked(),
        ];
        assert_eq!(extract_timestamps(&items), vec!["2023-03-15T12:30:45"]);
    }

    #[test]
    fn preserves_response_order() {
        let items = vec![
            ListingItem::with_self_url(".../1678883445"),
            ListingItem::with_self_url(".../946684800"),
        ];
        assert_eq!(
            extract_timestamps(&items),
            vec!["2023-03-15T12:30:45", "2000-01-01T00:00:00"]
        );
    }

    #[test]
    fn skips_non_numeric_trailing_segments() {
        let items = vec![
            ListingItem::with_self_url("http://host/rest/waves/M/P/Q/latest"),
            ListingItem::with_self_url("http://host/rest/waves/M/P/Q/946684800"),
        ];
        assert_eq!(extract_timestamps(&items), vec!["2000-01-01T00:00:00"]);
    }

    #[test]
    fn tolerates_trailing_slash_in_self_url() {
        let items = vec![ListingItem::with_self_url(
            "http://host/rest/waves/M/P/Q/946684800/",
        )];
        assert_eq!(extract_timestamps(&items), vec!["2000-01-01T00:00:00"]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(extract_timestamps(&[]).is_empty());
    }
}
