//! Built-in locale data.

use super::fields::TextStyle;

/// Narrow, short and long forms of a set of names.
#[derive(Debug, Clone, Copy)]
pub struct NameSet<const N: usize> {
    pub narrow: [&'static str; N],
    pub short: [&'static str; N],
    pub long: [&'static str; N],
}

impl<const N: usize> NameSet<N> {
    /// Name at a zero-based index.
    pub fn get(&self, style: TextStyle, index: usize) -> &'static str {
        let names = match style {
            TextStyle::Narrow => &self.narrow,
            TextStyle::Short => &self.short,
            TextStyle::Long => &self.long,
        };
        names[index]
    }
}

/// One element of a whole-value date layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    Text(&'static str),
    Day,
    Day2,
    Month,
    Month2,
    MonthShort,
    MonthLong,
    Year,
    WeekdayLong,
}

/// Date layouts by month style.
#[derive(Debug, Clone, Copy)]
pub struct DateLayouts {
    /// `10/14/1983`
    pub numeric: &'static [Piece],
    /// `Oct 14, 1983`
    pub medium: &'static [Piece],
    /// `October 14, 1983`
    pub long: &'static [Piece],
    /// `Friday, October 14, 1983`
    pub full: &'static [Piece],
}

/// Static data for one locale.
#[derive(Debug)]
pub struct LocaleData {
    pub tag: &'static str,
    pub decimal_separator: char,
    pub am_string: &'static str,
    pub pm_string: &'static str,
    /// Month names combined with a day, like "14 октября".
    pub month_names: NameSet<12>,
    /// Month names on their own, like "октябрь".
    pub month_names_standalone: NameSet<12>,
    /// Monday first.
    pub day_names: NameSet<7>,
    pub day_names_standalone: NameSet<7>,
    /// Before and after the epoch.
    pub era_names: NameSet<2>,
    pub islamic_month_names: NameSet<12>,
    pub islamic_era: &'static str,
    pub buddhist_era: &'static str,
    /// Whether the locale defaults to a 12-hour clock.
    pub hour12: bool,
    pub date_layouts: DateLayouts,
    /// Joins date and time in numeric and medium layouts.
    pub date_time_separator: &'static str,
    /// Joins date and time in long and full layouts.
    pub date_time_separator_long: &'static str,
}

const ISLAMIC_NARROW: [&str; 12] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12",
];

/// US English.
pub static EN_US: LocaleData = LocaleData {
    tag: "en-US",
    decimal_separator: '.',
    am_string: "AM",
    pm_string: "PM",
    month_names: EN_MONTHS,
    month_names_standalone: EN_MONTHS,
    day_names: EN_DAYS,
    day_names_standalone: EN_DAYS,
    era_names: NameSet {
        narrow: ["B", "A"],
        short: ["BC", "AD"],
        long: ["Before Christ", "Anno Domini"],
    },
    islamic_month_names: NameSet {
        narrow: ISLAMIC_NARROW,
        short: [
            "Muh.", "Saf.", "Rab. I", "Rab. II", "Jum. I", "Jum. II", "Raj.", "Sha.", "Ram.",
            "Shaw.", "Dhuʻl-Q.", "Dhuʻl-H.",
        ],
        long: [
            "Muharram",
            "Safar",
            "Rabiʻ I",
            "Rabiʻ II",
            "Jumada I",
            "Jumada II",
            "Rajab",
            "Shaʻban",
            "Ramadan",
            "Shawwal",
            "Dhuʻl-Qiʻdah",
            "Dhuʻl-Hijjah",
        ],
    },
    islamic_era: "AH",
    buddhist_era: "BE",
    hour12: true,
    date_layouts: DateLayouts {
        numeric: &[
            Piece::Month,
            Piece::Text("/"),
            Piece::Day,
            Piece::Text("/"),
            Piece::Year,
        ],
        medium: &[
            Piece::MonthShort,
            Piece::Text(" "),
            Piece::Day,
            Piece::Text(", "),
            Piece::Year,
        ],
        long: &[
            Piece::MonthLong,
            Piece::Text(" "),
            Piece::Day,
            Piece::Text(", "),
            Piece::Year,
        ],
        full: &[
            Piece::WeekdayLong,
            Piece::Text(", "),
            Piece::MonthLong,
            Piece::Text(" "),
            Piece::Day,
            Piece::Text(", "),
            Piece::Year,
        ],
    },
    date_time_separator: ", ",
    date_time_separator_long: " at ",
};

const EN_MONTHS: NameSet<12> = NameSet {
    narrow: ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"],
    short: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    long: [
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
    ],
};

const EN_DAYS: NameSet<7> = NameSet {
    narrow: ["M", "T", "W", "T", "F", "S", "S"],
    short: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
    long: [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ],
};

/// Russian. Month names differ between format (genitive) and standalone
/// (nominative) forms.
pub static RU_RU: LocaleData = LocaleData {
    tag: "ru-RU",
    decimal_separator: ',',
    am_string: "AM",
    pm_string: "PM",
    month_names: NameSet {
        narrow: RU_MONTHS_NARROW,
        short: [
            "янв.", "февр.", "мар.", "апр.", "мая", "июн.", "июл.", "авг.", "сент.", "окт.",
            "нояб.", "дек.",
        ],
        long: [
            "января",
            "февраля",
            "марта",
            "апреля",
            "мая",
            "июня",
            "июля",
            "августа",
            "сентября",
            "октября",
            "ноября",
            "декабря",
        ],
    },
    month_names_standalone: NameSet {
        narrow: RU_MONTHS_NARROW,
        short: [
            "янв.", "февр.", "март", "апр.", "май", "июнь", "июль", "авг.", "сент.", "окт.",
            "нояб.", "дек.",
        ],
        long: [
            "январь",
            "февраль",
            "март",
            "апрель",
            "май",
            "июнь",
            "июль",
            "август",
            "сентябрь",
            "октябрь",
            "ноябрь",
            "декабрь",
        ],
    },
    day_names: RU_DAYS,
    day_names_standalone: RU_DAYS,
    era_names: NameSet {
        narrow: ["до н.э.", "н.э."],
        short: ["до н. э.", "н. э."],
        long: ["до Рождества Христова", "от Рождества Христова"],
    },
    islamic_month_names: NameSet {
        narrow: ISLAMIC_NARROW,
        short: [
            "мух.", "саф.", "раб. I", "раб. II", "джум. I", "джум. II", "радж.", "шааб.",
            "рам.", "шав.", "зуль-к.", "зуль-х.",
        ],
        long: [
            "мухаррам",
            "сафар",
            "раби-уль-авваль",
            "раби-уль-ахир",
            "джумад-уль-авваль",
            "джумад-уль-ахир",
            "раджаб",
            "шаабан",
            "рамадан",
            "шавваль",
            "зуль-каада",
            "зуль-хиджжа",
        ],
    },
    islamic_era: "AH",
    buddhist_era: "BE",
    hour12: false,
    date_layouts: DateLayouts {
        numeric: &[
            Piece::Day2,
            Piece::Text("."),
            Piece::Month2,
            Piece::Text("."),
            Piece::Year,
        ],
        medium: &[
            Piece::Day,
            Piece::Text(" "),
            Piece::MonthShort,
            Piece::Text(" "),
            Piece::Year,
            Piece::Text(" г."),
        ],
        long: &[
            Piece::Day,
            Piece::Text(" "),
            Piece::MonthLong,
            Piece::Text(" "),
            Piece::Year,
            Piece::Text(" г."),
        ],
        full: &[
            Piece::WeekdayLong,
            Piece::Text(", "),
            Piece::Day,
            Piece::Text(" "),
            Piece::MonthLong,
            Piece::Text(" "),
            Piece::Year,
            Piece::Text(" г."),
        ],
    },
    date_time_separator: ", ",
    date_time_separator_long: " в ",
};

const RU_MONTHS_NARROW: [&str; 12] = ["Я", "Ф", "М", "А", "М", "И", "И", "А", "С", "О", "Н", "Д"];

const RU_DAYS: NameSet<7> = NameSet {
    narrow: ["П", "В", "С", "Ч", "П", "С", "В"],
    short: ["пн", "вт", "ср", "чт", "пт", "сб", "вс"],
    long: [
        "понедельник",
        "вторник",
        "среда",
        "четверг",
        "пятница",
        "суббота",
        "воскресенье",
    ],
};
