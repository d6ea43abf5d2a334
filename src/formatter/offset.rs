//! UTC offset formatting

use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

use super::Formatter;

/// Display style for a UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetStyle {
    /// `+05:00`
    Short,
    /// `+5`, or `+5:30` when there are minutes
    Narrow,
    /// `+0500`
    Techie,
}

impl OffsetStyle {
    pub fn name(&self) -> &'static str {
        match self {
            OffsetStyle::Short => "short",
            OffsetStyle::Narrow => "narrow",
            OffsetStyle::Techie => "techie",
        }
    }
}

impl FromStr for OffsetStyle {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(OffsetStyle::Short),
            "narrow" => Ok(OffsetStyle::Narrow),
            "techie" => Ok(OffsetStyle::Techie),
            _ => Err(FormatError::invalid_option("format", s)),
        }
    }
}

impl fmt::Display for OffsetStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Formatter {
    /// Format an offset in minutes from UTC.
    ///
    /// Returns `Z` when `allow_z` is set and the value is a fixed zero offset.
    /// Digits go through the locale's number formatting.
    pub fn format_offset(
        &self,
        offset: i32,
        style: OffsetStyle,
        allow_z: bool,
        is_offset_fixed: bool,
    ) -> String {
        render_offset(offset, style, allow_z, is_offset_fixed, |n, pad| {
            self.num(n, pad)
        })
    }
}

/// Render an offset with the given number renderer.
pub(crate) fn render_offset<F>(
    offset: i32,
    style: OffsetStyle,
    allow_z: bool,
    is_offset_fixed: bool,
    num: F,
) -> String
where
    F: Fn(i64, usize) -> String,
{
    if allow_z && is_offset_fixed && offset == 0 {
        return "Z".to_string();
    }

    let offset = i64::from(offset);
    // Integer division truncates toward zero
    let hours = offset / 60;
    let minutes = (offset % 60).abs();
    // Sign follows the truncated hours, so -30 renders as +00:30
    let sign = if hours >= 0 { '+' } else { '-' };
    let hours = hours.abs();

    match style {
        OffsetStyle::Short => format!("{}{}:{}", sign, num(hours, 2), num(minutes, 2)),
        OffsetStyle::Narrow => {
            if minutes > 0 {
                format!("{}{}:{}", sign, num(hours, 0), num(minutes, 0))
            } else {
                format!("{}{}", sign, num(hours, 0))
            }
        }
        OffsetStyle::Techie => format!("{}{}{}", sign, num(hours, 2), num(minutes, 2)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascii(offset: i32, style: OffsetStyle, allow_z: bool, fixed: bool) -> String {
        render_offset(offset, style, allow_z, fixed, |n, pad| {
            format!("{:0pad$}", n, pad = pad)
        })
    }

    #[test]
    fn test_short() {
        assert_eq!(ascii(-300, OffsetStyle::Short, true, false), "-05:00");
        assert_eq!(ascii(345, OffsetStyle::Short, true, false), "+05:45");
    }

    #[test]
    fn test_narrow() {
        assert_eq!(ascii(90, OffsetStyle::Narrow, true, false), "+1:30");
        assert_eq!(ascii(-240, OffsetStyle::Narrow, true, false), "-4");
        assert_eq!(ascii(0, OffsetStyle::Narrow, true, false), "+0");
    }

    #[test]
    fn test_techie() {
        assert_eq!(ascii(330, OffsetStyle::Techie, false, false), "+0530");
        assert_eq!(ascii(0, OffsetStyle::Techie, false, true), "+0000");
    }

    #[test]
    fn test_zero_shorthand() {
        assert_eq!(ascii(0, OffsetStyle::Narrow, true, true), "Z");
        assert_eq!(ascii(0, OffsetStyle::Short, true, true), "Z");
        // A zone that only happens to be at zero does not get the shorthand
        assert_eq!(ascii(0, OffsetStyle::Short, true, false), "+00:00");
    }

    #[test]
    fn test_sub_hour_negative_offset() {
        assert_eq!(ascii(-30, OffsetStyle::Short, false, false), "+00:30");
        assert_eq!(ascii(-30, OffsetStyle::Narrow, false, false), "+0:30");
        assert_eq!(ascii(-30, OffsetStyle::Techie, false, false), "+0030");
        assert_eq!(ascii(-90, OffsetStyle::Short, false, false), "-01:30");
    }

    #[test]
    fn test_style_from_str() {
        assert_eq!("techie".parse::<OffsetStyle>(), Ok(OffsetStyle::Techie));
        assert_eq!(
            "long".parse::<OffsetStyle>(),
            Err(FormatError::InvalidFormatOption {
                option: "format",
                value: "long".to_string()
            })
        );
    }
}
