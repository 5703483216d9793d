use crate::{
    errors::{ExpenseError, Result},
    expense::ExpenseItem,
};

/// Encodes the full item sequence as the persisted JSON array.
///
/// Fails on the first non-finite amount: JSON has no representation for
/// `inf` or `NaN`, and `serde_json` would otherwise write `null`, which no
/// longer decodes.
pub fn encode_items(items: &[ExpenseItem], pretty: bool) -> Result<Vec<u8>> {
    if let Some(item) = items.iter().find(|item| !item.amount.is_finite()) {
        return Err(ExpenseError::NonFiniteAmount(item.id));
    }
    let bytes = if pretty {
        serde_json::to_vec_pretty(items)?
    } else {
        serde_json::to_vec(items)?
    };
    Ok(bytes)
}

/// Decodes a persisted JSON array back into items, in stored order.
pub fn decode_items(bytes: &[u8]) -> Result<Vec<ExpenseItem>> {
    Ok(serde_json::from_slice(bytes)?)
}
