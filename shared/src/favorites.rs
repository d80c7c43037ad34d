//! Favorites-list helpers.
//!
//! The list holds at most one entry per ticker symbol; the optimistic
//! append on add goes through [`push_unique`] so a racing reload can never
//! introduce a duplicate.

use crate::dto::market::Favorite;

/// Append a favorite unless its ticker is already present.
/// Returns whether the list changed.
pub fn push_unique(list: &mut Vec<Favorite>, favorite: Favorite) -> bool {
    if contains_ticker(list, &favorite.ticker) {
        return false;
    }
    list.push(favorite);
    true
}

/// Drop every entry for the given ticker.
pub fn remove_ticker(list: &mut Vec<Favorite>, ticker: &str) {
    list.retain(|favorite| favorite.ticker != ticker);
}

pub fn contains_ticker(list: &[Favorite], ticker: &str) -> bool {
    list.iter().any(|favorite| favorite.ticker == ticker)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn favorite(ticker: &str, name: &str) -> Favorite {
        Favorite {
            ticker: ticker.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn duplicate_append_is_suppressed() {
        let mut list = vec![favorite("AIR.PA", "Airbus")];
        assert!(!push_unique(&mut list, favorite("AIR.PA", "Airbus")));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn no_duplicates_across_add_remove_reload_interleavings() {
        // Optimistic add, reload echoing the server copy, remove, re-add.
        let mut list: Vec<Favorite> = vec![];
        assert!(push_unique(&mut list, favorite("MC.PA", "LVMH")));
        // Reload merge path: server already has the ticker.
        assert!(!push_unique(&mut list, favorite("MC.PA", "LVMH")));
        assert!(push_unique(&mut list, favorite("AIR.PA", "Airbus")));
        remove_ticker(&mut list, "MC.PA");
        assert!(!contains_ticker(&list, "MC.PA"));
        assert!(push_unique(&mut list, favorite("MC.PA", "LVMH")));

        let mut tickers: Vec<&str> = list.iter().map(|f| f.ticker.as_str()).collect();
        tickers.sort_unstable();
        tickers.dedup();
        assert_eq!(tickers.len(), list.len());
    }

    #[test]
    fn remove_is_a_no_op_on_absent_ticker() {
        let mut list = vec![favorite("AIR.PA", "Airbus")];
        remove_ticker(&mut list, "MC.PA");
        assert_eq!(list.len(), 1);
    }
}
