use tracing::{debug, error};

use super::{arg, read_balance, OpResult};
use crate::balance;
use crate::cell::Cell;
use crate::error::HandlerError;
use crate::rpc::Request;

/// `transfer(from, to, amount)`: debits `from` and credits `to`.
///
/// Both balances are read and validated before anything is written, so every
/// input or read failure leaves the cell untouched. The two writes are not
/// atomic. When the credit to `to` fails after `from` was already debited,
/// the old balance of `from` is written back once; whether that write lands
/// is not checked, and the response carries the credit failure either way.
///
/// There is no funds check: balances may go negative.
pub fn transfer(cell: &dyn Cell, request: &Request) -> OpResult {
    let from = arg(request, "transfer", 0)?;
    let to = arg(request, "transfer", 1)?;
    let raw_amount = arg(request, "transfer", 2)?;
    debug!("invoke - transfer {}/{}:{}", from, to, raw_amount);

    let amount = balance::parse(raw_amount).map_err(HandlerError::InvalidAmount)?;
    let from_balance = read_balance(cell, from)?;
    let to_balance = read_balance(cell, to)?;

    let overflow = || HandlerError::BalanceOverflow {
        from: from.to_string(),
        to: to.to_string(),
        amount,
    };
    let new_from = from_balance.checked_sub(amount).ok_or_else(overflow)?;
    let new_to = to_balance.checked_add(amount).ok_or_else(overflow)?;

    cell.put(from, &balance::encode(new_from))?;

    if let Err(err) = cell.put(to, &balance::encode(new_to)) {
        // new_from + amount cannot overflow: it is from_balance.
        let restored = new_from + amount;
        if let Err(undo_err) = cell.put(from, &balance::encode(restored)) {
            error!(
                "transfer {} -> {}: credit failed ({}) and restoring {} to {} failed: {}",
                from, to, err, from, restored, undo_err
            );
        }
        return Err(err.into());
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use parking_lot::Mutex;

    use super::*;
    use crate::cell::{CellError, CellIter, MemoryCell};

    /// Rejects every write to the listed keys and records write order.
    struct FlakyCell {
        inner: MemoryCell,
        failing: Mutex<HashSet<String>>,
        writes: Mutex<Vec<String>>,
    }

    impl FlakyCell {
        fn new(entries: &[(&str, &str)]) -> Self {
            let inner = MemoryCell::new();
            for (k, v) in entries {
                inner.put(k, v.as_bytes()).unwrap();
            }
            FlakyCell {
                inner,
                failing: Mutex::new(HashSet::new()),
                writes: Mutex::new(Vec::new()),
            }
        }

        fn fail_writes_to(&self, key: &str) {
            self.failing.lock().insert(key.to_string());
        }
    }

    impl Cell for FlakyCell {
        fn get(&self, key: &str) -> Result<Vec<u8>, CellError> {
            self.inner.get(key)
        }

        fn put(&self, key: &str, value: &[u8]) -> Result<(), CellError> {
            self.writes.lock().push(key.to_string());
            if self.failing.lock().contains(key) {
                return Err(CellError::Rejected {
                    key: key.to_string(),
                    reason: "disk full".to_string(),
                });
            }
            self.inner.put(key, value)
        }

        fn iter_prefix(&self, prefix: &str) -> CellIter<'_> {
            self.inner.iter_prefix(prefix)
        }
    }

    fn run(cell: &dyn Cell, args: [&str; 3]) -> OpResult {
        transfer(cell, &Request::invoke("transfer", args))
    }

    #[test]
    fn moves_amount_between_accounts() {
        let cell = MemoryCell::new();
        cell.put("a", b"100").unwrap();
        cell.put("b", b"5").unwrap();
        assert_eq!(run(&cell, ["a", "b", "30"]).unwrap(), None);
        assert_eq!(cell.get("a").unwrap(), b"70");
        assert_eq!(cell.get("b").unwrap(), b"35");
    }

    #[test]
    fn allows_negative_results() {
        let cell = MemoryCell::new();
        cell.put("a", b"10").unwrap();
        cell.put("b", b"0").unwrap();
        run(&cell, ["a", "b", "25"]).unwrap();
        assert_eq!(cell.get("a").unwrap(), b"-15");
        assert_eq!(cell.get("b").unwrap(), b"25");
    }

    #[test]
    fn bad_amount_writes_nothing() {
        let cell = FlakyCell::new(&[("a", "10"), ("b", "10")]);
        let err = run(&cell, ["a", "b", "ten"]).unwrap_err();
        assert!(matches!(err, HandlerError::InvalidAmount(_)));
        assert!(cell.writes.lock().is_empty());
    }

    #[test]
    fn empty_destination_is_no_data() {
        let cell = FlakyCell::new(&[("a", "10"), ("b", "")]);
        let err = run(&cell, ["a", "b", "1"]).unwrap_err();
        assert!(matches!(err, HandlerError::NoData));
        assert!(cell.writes.lock().is_empty());
    }

    #[test]
    fn missing_destination_writes_nothing() {
        let cell = FlakyCell::new(&[("a", "10")]);
        let err = run(&cell, ["a", "ghost", "1"]).unwrap_err();
        assert!(matches!(err, HandlerError::Cell(CellError::NotFound(ref key)) if key == "ghost"));
        assert!(cell.writes.lock().is_empty());
        assert_eq!(cell.get("a").unwrap(), b"10");
    }

    #[test]
    fn malformed_destination_balance_writes_nothing() {
        let cell = FlakyCell::new(&[("a", "10"), ("b", "x1")]);
        let err = run(&cell, ["a", "b", "1"]).unwrap_err();
        assert!(matches!(err, HandlerError::InvalidBalance { ref key, .. } if key == "b"));
        assert!(cell.writes.lock().is_empty());
        assert_eq!(cell.get("a").unwrap(), b"10");
        assert_eq!(cell.get("b").unwrap(), b"x1");
    }

    #[test]
    fn malformed_source_balance_writes_nothing() {
        let cell = FlakyCell::new(&[("a", "1e3"), ("b", "10")]);
        let err = run(&cell, ["a", "b", "1"]).unwrap_err();
        assert!(matches!(err, HandlerError::InvalidBalance { ref key, .. } if key == "a"));
        assert!(cell.writes.lock().is_empty());
    }

    #[test]
    fn overflow_writes_nothing() {
        let cell = FlakyCell::new(&[("a", "0"), ("b", i64::MAX.to_string().as_str())]);
        let err = run(&cell, ["a", "b", "1"]).unwrap_err();
        assert!(matches!(err, HandlerError::BalanceOverflow { amount: 1, .. }));
        assert!(cell.writes.lock().is_empty());
    }

    #[test]
    fn failed_debit_stops_before_credit() {
        let cell = FlakyCell::new(&[("a", "10"), ("b", "10")]);
        cell.fail_writes_to("a");
        let err = run(&cell, ["a", "b", "4"]).unwrap_err();
        assert!(matches!(err, HandlerError::Cell(CellError::Rejected { .. })));
        assert_eq!(*cell.writes.lock(), vec!["a".to_string()]);
        assert_eq!(cell.get("b").unwrap(), b"10");
    }

    #[test]
    fn failed_credit_restores_source() {
        let cell = FlakyCell::new(&[("a", "10"), ("b", "10")]);
        cell.fail_writes_to("b");
        let err = run(&cell, ["a", "b", "4"]).unwrap_err();
        assert!(matches!(err, HandlerError::Cell(CellError::Rejected { ref key, .. }) if key == "b"));
        assert_eq!(
            *cell.writes.lock(),
            vec!["a".to_string(), "b".to_string(), "a".to_string()]
        );
        assert_eq!(cell.get("a").unwrap(), b"10");
        assert_eq!(cell.get("b").unwrap(), b"10");
    }
}
