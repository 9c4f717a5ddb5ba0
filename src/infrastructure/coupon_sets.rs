// src/infrastructure/coupon_sets.rs
use crate::domain::coupon::CouponCode;
use std::collections::{HashMap, HashSet};
use std::io::{self, BufRead};

/// Codes that appear in at least two of the given coupon sets, in the
/// order they first reached that count. Malformed codes are skipped.
pub fn shared_codes<R: BufRead>(sets: impl IntoIterator<Item = R>) -> io::Result<Vec<String>> {
    let mut seen_in: HashMap<String, usize> = HashMap::new();
    let mut shared = Vec::new();

    for set in sets {
        let mut in_this_set = HashSet::new();
        for line in set.lines() {
            let line = line?;
            let Some(code) = CouponCode::parse(line.trim_end_matches('\r')) else {
                continue;
            };
            if !in_this_set.insert(code.clone()) {
                continue;
            }
            let count = seen_in.entry(code.as_str().to_string()).or_insert(0);
            *count += 1;
            if *count == 2 {
                shared.push(code.into());
            }
        }
    }

    Ok(shared)
}
