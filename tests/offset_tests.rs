use lxfmt::{FormatOptions, Formatter, Locale, NumberingSystem, OffsetStyle};

#[test]
fn test_offset_styles() {
    let f = Formatter::default();
    assert_eq!(f.format_offset(-300, OffsetStyle::Short, true, false), "-05:00");
    assert_eq!(f.format_offset(0, OffsetStyle::Narrow, true, true), "Z");
    assert_eq!(f.format_offset(330, OffsetStyle::Techie, false, false), "+0530");
    assert_eq!(f.format_offset(90, OffsetStyle::Narrow, true, false), "+1:30");
}

#[test]
fn test_zero_offset_without_shorthand() {
    let f = Formatter::default();
    assert_eq!(f.format_offset(0, OffsetStyle::Techie, false, true), "+0000");
    assert_eq!(f.format_offset(0, OffsetStyle::Narrow, true, false), "+0");
}

#[test]
fn test_offset_style_names() {
    for style in [OffsetStyle::Short, OffsetStyle::Narrow, OffsetStyle::Techie] {
        assert_eq!(style.to_string().parse::<OffsetStyle>(), Ok(style));
    }
    assert!("medium".parse::<OffsetStyle>().is_err());
}

#[test]
fn test_offset_digits_follow_locale() {
    let f = Formatter::new(
        FormatOptions::default()
            .with_locale(Locale::en_us().with_numbering_system(NumberingSystem::Fullwide)),
    );
    assert_eq!(f.format_offset(-300, OffsetStyle::Short, true, false), "-０５:００");
}

#[test]
fn test_sub_hour_negative_offset_sign_follows_hours() {
    let f = Formatter::default();
    assert_eq!(f.format_offset(-30, OffsetStyle::Short, false, false), "+00:30");
    assert_eq!(f.format_offset(-30, OffsetStyle::Narrow, false, false), "+0:30");
    assert_eq!(f.format_offset(-30, OffsetStyle::Techie, false, false), "+0030");
    assert_eq!(f.format_offset(-60, OffsetStyle::Short, false, false), "-01:00");

    let dt = lxfmt::DateTimeFields::new(2020, 1, 1)
        .unwrap()
        .with_zone(lxfmt::ZoneInfo::fixed(-30));
    assert_eq!(lxfmt::format_date_time(&dt, "ZZ").unwrap(), "+00:30");
}
