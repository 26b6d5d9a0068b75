use caldiff::{
    compare_desc, difference_in_calendar_iso_weeks, difference_in_quarters, start_of_iso_week,
    Instant, RoundingMethod, RoundingOptions,
};
use chrono::{Local, TimeZone};

fn main() {
    let now = Instant::now();
    let new_year = Local.with_ymd_and_hms(2014, 1, 1, 0, 0, 0).single();

    println!("Now: {now}");
    println!("Start of ISO week: {}", start_of_iso_week(now, &Local));
    println!(
        "ISO weeks since 2014-01-01: {}",
        difference_in_calendar_iso_weeks(now, new_year, &Local)
    );
    println!(
        "Quarters since 2014-01-01 (ceil): {}",
        difference_in_quarters(now, new_year, &Local, RoundingOptions::new(RoundingMethod::Ceil))
    );
    println!("compare_desc(now, 2014-01-01) = {}", compare_desc(now, new_year));
}
