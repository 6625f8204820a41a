// templates/components/money.rs

const CRORE: i64 = 10_000_000;
const LAKH: i64 = 100_000;

/// Price formatting in Indian units: 4,50,00,000 reads as "₹4.5 Cr",
/// 6,50,000 as "₹6.5 L", anything smaller gets plain comma grouping.
pub fn format_inr(amount: i64) -> String {
    if amount >= CRORE {
        format!("₹{} Cr", trim_decimal(amount as f64 / CRORE as f64))
    } else if amount >= LAKH {
        format!("₹{} L", trim_decimal(amount as f64 / LAKH as f64))
    } else {
        format!("₹{}", group_thousands(amount))
    }
}

fn trim_decimal(value: f64) -> String {
    let s = format!("{value:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn group_thousands(amount: i64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    format!("{head},{tail}")
}
