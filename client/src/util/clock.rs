//! Local wall-clock access and date/time labels for weight entries.
//!
//! The browser's local time comes from `js_sys::Date`; off-browser (SSR and
//! tests) the UTC clock stands in.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::macros::format_description;
use time::{Date, PrimitiveDateTime};

/// Current local date and time.
pub fn local_now() -> PrimitiveDateTime {
    #[cfg(feature = "hydrate")]
    {
        browser_now().unwrap_or_else(utc_now)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        utc_now()
    }
}

fn utc_now() -> PrimitiveDateTime {
    let now = time::OffsetDateTime::now_utc();
    PrimitiveDateTime::new(now.date(), now.time())
}

#[cfg(feature = "hydrate")]
fn browser_now() -> Option<PrimitiveDateTime> {
    let now = js_sys::Date::new_0();
    let month = time::Month::try_from(u8::try_from(now.get_month() + 1).ok()?).ok()?;
    let date = Date::from_calendar_date(
        i32::try_from(now.get_full_year()).ok()?,
        month,
        u8::try_from(now.get_date()).ok()?,
    )
    .ok()?;
    let time = time::Time::from_hms(
        u8::try_from(now.get_hours()).ok()?,
        u8::try_from(now.get_minutes()).ok()?,
        u8::try_from(now.get_seconds()).ok()?,
    )
    .ok()?;
    Some(PrimitiveDateTime::new(date, time))
}

/// "Today", "Yesterday", or a short calendar date such as "Mar 4, 2025".
pub fn format_entry_date(date: Date, today: Date) -> String {
    if date == today {
        return "Today".to_owned();
    }
    if today.previous_day() == Some(date) {
        return "Yesterday".to_owned();
    }
    date.format(format_description!("[month repr:short] [day padding:none], [year]"))
        .unwrap_or_else(|_| date.to_string())
}

/// 24-hour clock label, e.g. "07:45".
pub fn format_entry_time(at: PrimitiveDateTime) -> String {
    at.format(format_description!("[hour]:[minute]"))
        .unwrap_or_else(|_| at.time().to_string())
}
