use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use tally_types::{Item, Price, Receipt};

/// Compute the point score for a receipt.
///
/// Every rule is evaluated unconditionally and the results are summed;
/// the total is never capped.
pub fn score(receipt: &Receipt) -> u64 {
    retailer_points(&receipt.retailer)
        + total_points(&receipt.total)
        + item_pair_points(receipt.items.len())
        + description_points(&receipt.items)
        + purchase_day_points(&receipt.purchase_date)
        + purchase_time_points(&receipt.purchase_time)
}

/// One point per ASCII alphanumeric character in the retailer name.
/// Punctuation, whitespace, and non-ASCII characters do not count.
fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

/// 50 points for a whole-dollar total plus 25 for a quarter multiple.
/// Both fire together for round totals. An unparseable total degrades to
/// zero cents, which satisfies both conditions.
fn total_points(total: &str) -> u64 {
    let total = Price::parse(total).unwrap_or(Price::ZERO);
    let mut points = 0;
    if total.is_whole_dollars() {
        points += 50;
    }
    if total.is_quarter_multiple() {
        points += 25;
    }
    points
}

/// Five points for every two items.
fn item_pair_points(count: usize) -> u64 {
    (count as u64 / 2) * 5
}

/// `ceil(price * 0.2)` points for each item whose trimmed description
/// length is a multiple of three. A zero-length trimmed description
/// qualifies; an unparseable price contributes nothing.
fn description_points(items: &[Item]) -> u64 {
    items
        .iter()
        .filter(|item| item.short_description.trim().chars().count() % 3 == 0)
        .map(|item| {
            let price = Price::parse(&item.price).unwrap_or(Price::ZERO);
            // price * 0.2 dollars == cents / 500, rounded up.
            price.cents().div_ceil(500)
        })
        .sum()
}

/// Six points when the day of the month is odd. An unparseable date is
/// treated as the zero value and earns nothing.
fn purchase_day_points(date: &str) -> u64 {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(date) if date.day() % 2 == 1 => 6,
        _ => 0,
    }
}

/// Ten points when the purchase hour is 14: any minute of the 2pm hour,
/// nothing before or after. An unparseable time is treated as midnight.
fn purchase_time_points(time: &str) -> u64 {
    match NaiveTime::parse_from_str(time, "%H:%M") {
        Ok(time) if time.hour() == 14 => 10,
        _ => 0,
    }
}
