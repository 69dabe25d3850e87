use crate::bucket::{BucketKind, BucketOptions, TODAY_LABEL, TOMORROW_LABEL};
use chrono::{Datelike, NaiveDate};
use verific_types::{Locale, YearDisplay};

const PT_BR_MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

const EN_US_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Long month name for `month` (1-12)
pub fn month_name(locale: Locale, month: u32) -> &'static str {
    let table = match locale {
        Locale::PtBr => &PT_BR_MONTHS,
        Locale::EnUs => &EN_US_MONTHS,
    };
    table[(month.clamp(1, 12) - 1) as usize]
}

/// Format a calendar day as "20 de janeiro" / "January 20", optionally with the year
pub fn format_day(day: NaiveDate, locale: Locale, with_year: bool) -> String {
    let month = month_name(locale, day.month());
    match (locale, with_year) {
        (Locale::PtBr, false) => format!("{} de {}", day.day(), month),
        (Locale::PtBr, true) => format!("{} de {} de {}", day.day(), month, day.year()),
        (Locale::EnUs, false) => format!("{} {}", month, day.day()),
        (Locale::EnUs, true) => format!("{} {}, {}", month, day.day(), day.year()),
    }
}

/// Classify `day` relative to `today` and produce its display label
pub fn classify(day: NaiveDate, today: NaiveDate, options: &BucketOptions) -> (BucketKind, String) {
    if day == today {
        return (BucketKind::Today, TODAY_LABEL.to_string());
    }
    if today.succ_opt() == Some(day) {
        return (BucketKind::Tomorrow, TOMORROW_LABEL.to_string());
    }

    let with_year = match options.year_display {
        YearDisplay::Never => false,
        YearDisplay::Auto => day.year() != today.year(),
        YearDisplay::Always => true,
    };
    (BucketKind::Date, format_day(day, options.locale, with_year))
}
