use std::collections::HashMap;

use crate::Error;

/// Override value pinning a configuration key to never match any field.
pub(crate) const NEVER_MATCHES: &str = "-";

/// Merge caller-supplied override pairs into forward and backward lookup tables.
///
/// Pairs are processed in order. A pair whose key is already a forward key, or whose value is
/// already a backward key, fails the whole merge with [`Error::DuplicateOverride`]; nothing is
/// partially applied. The relation therefore stays one-to-one in both directions, with one
/// exception: [`NEVER_MATCHES`] is only meaningful as a forward value, so it is left out of the
/// backward table and any number of keys may carry it.
pub(crate) fn merge(
    pairs: impl IntoIterator<Item = (String, String)>,
) -> Result<(HashMap<String, String>, HashMap<String, String>), Error> {
    let mut forward = HashMap::new();
    let mut backward = HashMap::new();

    for (key, value) in pairs {
        if forward.contains_key(&key) || backward.contains_key(&value) {
            return Err(Error::DuplicateOverride(key));
        }
        if value != NEVER_MATCHES {
            backward.insert(value.clone(), key.clone());
        }
        forward.insert(key, value);
    }

    Ok((forward, backward))
}
