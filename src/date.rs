//! Post date parsing and display formatting.
//!
//! Dates arrive as frontmatter-style strings ("YYYY-MM-DD" or RFC 3339
//! "YYYY-MM-DDTHH:MM:SSZ"). Parsing is byte-level with no timezone
//! handling; the display format is the blog's `"Mon D, YYYY"` style.

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Date shown when a post has no parsable date.
const FALLBACK_DATE: PostDate = PostDate {
    year: 2022,
    month: 12,
    day: 27,
};

/// Calendar date of a post (no time-of-day, no timezone).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PostDate {
    year: u16,
    month: u8,
    day: u8,
}

impl PostDate {
    /// Parse from "YYYY-MM-DD" or "YYYY-MM-DDTHH:MM:SSZ" format.
    fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();

        // Minimum: "YYYY-MM-DD" (10 chars)
        if bytes.len() < 10 {
            return None;
        }

        let year = parse_u16(&bytes[0..4])?;
        if bytes[4] != b'-' {
            return None;
        }
        let month = parse_u8(&bytes[5..7])?;
        if bytes[7] != b'-' {
            return None;
        }
        let day = parse_u8(&bytes[8..10])?;

        // Accept a bare date or a full RFC 3339 timestamp; the time part
        // is validated for shape but otherwise ignored.
        if bytes.len() != 10 {
            if bytes.len() < 20 || bytes[10] != b'T' || bytes[19] != b'Z' {
                return None;
            }
            if bytes[13] != b':' || bytes[16] != b':' {
                return None;
            }
            parse_u8(&bytes[11..13])?;
            parse_u8(&bytes[14..16])?;
            parse_u8(&bytes[17..19])?;
        }

        let date = Self { year, month, day };
        date.is_valid().then_some(date)
    }

    fn is_valid(self) -> bool {
        (1..=12).contains(&self.month)
            && self.day >= 1
            && self.day <= Self::days_in_month(self.year, self.month)
    }

    #[inline]
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// Format as `"Mon D, YYYY"` (3-letter month, no zero-padded day).
    fn display(self) -> String {
        format!(
            "{} {}, {}",
            MONTHS[(self.month - 1) as usize],
            self.day,
            self.year
        )
    }
}

/// Format a post date as `"Mon D, YYYY"`.
///
/// Absent or unparsable input falls back to `"Dec 27, 2022"`.
pub fn format_post_date(date: Option<&str>) -> String {
    date.and_then(PostDate::parse)
        .unwrap_or(FALLBACK_DATE)
        .display()
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u16::from(d);
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_iso_date() {
        assert_eq!(format_post_date(Some("2024-06-15")), "Jun 15, 2024");
        assert_eq!(format_post_date(Some("2023-01-05")), "Jan 5, 2023");
    }

    #[test]
    fn test_format_rfc3339() {
        assert_eq!(
            format_post_date(Some("2024-06-15T14:30:45Z")),
            "Jun 15, 2024"
        );
    }

    #[test]
    fn test_fallback_when_absent() {
        assert_eq!(format_post_date(None), "Dec 27, 2022");
    }

    #[test]
    fn test_fallback_when_unparsable() {
        assert_eq!(format_post_date(Some("soon")), "Dec 27, 2022");
        assert_eq!(format_post_date(Some("2024-13-01")), "Dec 27, 2022");
        assert_eq!(format_post_date(Some("2024-06-15T99")), "Dec 27, 2022");
    }

    #[test]
    fn test_leap_day() {
        assert_eq!(format_post_date(Some("2024-02-29")), "Feb 29, 2024");
        assert_eq!(format_post_date(Some("2023-02-29")), "Dec 27, 2022");
    }
}
