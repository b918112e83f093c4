use std::cmp::Ordering;

use chrono_tz::Tz;

use crate::content::ContentRecord;
use crate::date::{parse_date, DateError};

/// Sorts `records` by date, newest first.
///
/// Records without a date go last. Ties are broken by slug so the order is
/// the same on every build.
pub fn sort_records_by_date(records: &mut Vec<ContentRecord>) -> Result<(), DateError> {
    let mut keyed = Vec::with_capacity(records.len());
    for record in records.drain(..) {
        let date = record
            .date
            .as_deref()
            .map(|date| parse_date(date, Tz::UTC))
            .transpose()?;
        keyed.push((date, record));
    }

    keyed.sort_by(|(a_date, a), (b_date, b)| {
        let ord = match (a_date, b_date) {
            (Some(a_date), Some(b_date)) => b_date.cmp(a_date),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };

        ord.then_with(|| a.slug.cmp(&b.slug))
    });

    records.extend(keyed.into_iter().map(|(_, record)| record));

    Ok(())
}
