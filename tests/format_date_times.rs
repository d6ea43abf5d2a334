use lxfmt::{
    format_date_time, Calendar, DateTimeFields, FormatError, FormatOptions, Formatter, Locale,
    NumberingSystem, ZoneInfo,
};

fn edt(hour: u32, minute: u32) -> DateTimeFields {
    DateTimeFields::new(1983, 10, 14)
        .unwrap()
        .with_time(hour, minute, 23, 0)
        .unwrap()
        .with_zone(ZoneInfo::named(
            "America/New_York",
            -240,
            "EDT",
            "Eastern Daylight Time",
        ))
}

fn formatter(locale: &str) -> Formatter {
    Formatter::new(FormatOptions::default().with_locale(locale.parse().unwrap()))
}

#[test]
fn test_twelve_hour_clock() {
    assert_eq!(format_date_time(&edt(0, 15), "h:mm a").unwrap(), "12:15 AM");
    assert_eq!(format_date_time(&edt(12, 0), "h:mm a").unwrap(), "12:00 PM");
    assert_eq!(format_date_time(&edt(13, 0), "hh a").unwrap(), "01 PM");
    assert_eq!(format_date_time(&edt(0, 0), "HH").unwrap(), "00");
}

#[test]
fn test_utc_offset_shorthand() {
    let utc = DateTimeFields::new(2020, 1, 1).unwrap();
    assert_eq!(format_date_time(&utc, "HH:mmZZ").unwrap(), "00:00Z");
    assert_eq!(format_date_time(&utc, "HH:mmZZZ").unwrap(), "00:00+0000");
}

#[test]
fn test_fixed_zone_names() {
    let dt = DateTimeFields::new(2020, 1, 1)
        .unwrap()
        .with_zone(ZoneInfo::fixed(330));
    assert_eq!(format_date_time(&dt, "Z").unwrap(), "+5:30");
    assert_eq!(format_date_time(&dt, "z").unwrap(), "UTC+5:30");
}

#[test]
fn test_unknown_tokens_pass_through() {
    let dt = edt(9, 30);
    assert_eq!(format_date_time(&dt, "j").unwrap(), "j");
    assert_eq!(format_date_time(&dt, "yyyyy").unwrap(), "yyyyy");
}

#[test]
fn test_strict_mode_rejects_unknown_tokens() {
    let strict = Formatter::new(FormatOptions::default().with_strict(true));
    assert_eq!(
        strict.format_date_time_from_string(&edt(9, 30), "yyyy q"),
        Err(FormatError::UnknownToken {
            token: "q".to_string()
        })
    );
    assert_eq!(
        strict.format_date_time_from_string(&edt(9, 30), "yyyy 'q'"),
        Ok("1983 q".to_string())
    );
}

#[test]
fn test_rendering_is_repeatable() {
    let f = Formatter::default();
    let dt = edt(9, 30);
    let pattern = "EEEE, MMMM d, yyyy 'at' h:mm a ZZZZ";
    let first = f.format_date_time_from_string(&dt, pattern).unwrap();
    let second = f.format_date_time_from_string(&dt, pattern).unwrap();
    assert_eq!(first, "Friday, October 14, 1983 at 9:30 AM EDT");
    assert_eq!(first, second);
}

#[test]
fn test_russian_month_context() {
    let ru = formatter("ru-RU");
    let dt = edt(9, 30);
    assert_eq!(ru.format_date_time_from_string(&dt, "d MMMM").unwrap(), "14 октября");
    assert_eq!(ru.format_date_time_from_string(&dt, "LLLL").unwrap(), "октябрь");
    assert_eq!(ru.format_date_time_from_string(&dt, "cccc").unwrap(), "пятница");
}

#[test]
fn test_numbering_system_digits() {
    let arab = formatter("en-US-u-nu-arab");
    assert_eq!(
        arab.format_date_time_from_string(&edt(9, 30), "dd/MM").unwrap(),
        "١٤/١٠"
    );

    let deva = Formatter::new(
        FormatOptions::default()
            .with_locale(Locale::en_us().with_numbering_system(NumberingSystem::Deva)),
    );
    assert_eq!(
        deva.format_date_time_from_string(&edt(9, 30), "HH:mm").unwrap(),
        "०९:३०"
    );
}

#[test]
fn test_islamic_output_calendar() {
    let f = formatter("en-US-u-ca-islamic");
    let dt = edt(9, 30);
    assert_eq!(
        f.format_date_time_from_string(&dt, "d MMMM y G").unwrap(),
        "7 Muharram 1404 AH"
    );
    // Time and ISO week tokens are unaffected
    assert_eq!(f.format_date_time_from_string(&dt, "HH:mm kkkk").unwrap(), "09:30 1983");
}

#[test]
fn test_buddhist_output_calendar() {
    let f = Formatter::new(
        FormatOptions::default()
            .with_locale(Locale::en_us().with_output_calendar(Calendar::Buddhist)),
    );
    assert_eq!(
        f.format_date_time_from_string(&edt(9, 30), "yyyy-MM-dd G").unwrap(),
        "2526-10-14 BE"
    );
}

#[test]
fn test_negative_and_small_years() {
    let ancient = DateTimeFields::new(-44, 3, 15).unwrap();
    assert_eq!(format_date_time(&ancient, "y G").unwrap(), "-44 BC");

    let early = DateTimeFields::new(5, 1, 1).unwrap();
    assert_eq!(format_date_time(&early, "yyyy yy").unwrap(), "0005 05");
}

#[test]
fn test_islamic_epoch_is_proleptic_gregorian() {
    let f = formatter("en-US-u-ca-islamic");
    let epoch = DateTimeFields::new(622, 7, 19).unwrap();
    assert_eq!(
        f.format_date_time_from_string(&epoch, "d MMMM y").unwrap(),
        "1 Muharram 1"
    );
    let medieval = DateTimeFields::new(1000, 1, 1).unwrap();
    assert_eq!(
        f.format_date_time_from_string(&medieval, "d MMMM y").unwrap(),
        "15 Muharram 390"
    );
}

#[test]
fn test_two_digit_year_matches_with_and_without_calendar() {
    let dt = DateTimeFields::new(-5, 6, 1).unwrap();
    let gregory = Formatter::new(
        FormatOptions::default()
            .with_locale(Locale::en_us().with_output_calendar(Calendar::Gregory)),
    );
    assert_eq!(format_date_time(&dt, "yy").unwrap(), "05");
    assert_eq!(gregory.format_date_time_from_string(&dt, "yy").unwrap(), "05");
}
