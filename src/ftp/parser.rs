//! LIST response parser.
//!
//! FTP has no machine-readable listing format: servers emit at least
//! seven structurally different layouts. The parser holds a
//! priority-ordered table of patterns, most specific first, and the
//! first structural match wins:
//!
//! 1. Unix-style, named owner/group, 4-digit year
//! 2. Unix-style, numeric owner/group, 4-digit year
//! 3. Unix-style, numeric owner/group, `hh:mm` time
//! 4. Unix-style, named owner/group, `hh:mm` time
//! 5. Unix variant with the size field duplicated around the
//!    owner/group pair, `hh:mm` time
//! 6. DOS/IIS-style `mm-dd-yy hh:mmAM|PM [<DIR>|size] name`
//! 7. Same DOS shape, tolerating leading text before the timestamp
//!
//! Owner and group tokens match `\S+`, not `\w+`, so hyphenated
//! usernames and groupnames parse correctly.

use crate::ftp::types::FileEntry;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Utc};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Priority-ordered listing patterns. Order matters: the DOS rules
    /// at the tail would also match degenerate timestamp-first lines,
    /// so the stricter Unix rules are consulted first and the first
    /// match ends the search.
    static ref PARSE_FORMATS: Vec<Regex> = vec![
        Regex::new(r"^(?P<dir>[-d])(?P<permission>([-r][-w][-xs]){3})\s+\d+\s+(?P<groupname>\S+)\s+(?P<username>\S+)\s+(?P<size>\d+)\s+(?P<timestamp>\w+\s+\d+\s+\d{4})\s+(?P<name>.+)$").unwrap(),
        Regex::new(r"^(?P<dir>[-d])(?P<permission>([-r][-w][-xs]){3})\s+(?P<groupname>\d+)\s+(?P<username>\d+)\s+(?P<size>\d+)\s+(?P<timestamp>\w+\s+\d+\s+\d{4})\s+(?P<name>.+)$").unwrap(),
        Regex::new(r"^(?P<dir>[-d])(?P<permission>([-r][-w][-xs]){3})\s+(?P<groupname>\d+)\s+(?P<username>\d+)\s+(?P<size>\d+)\s+(?P<timestamp>\w+\s+\d+\s+\d{1,2}:\d{2})\s+(?P<name>.+)$").unwrap(),
        Regex::new(r"^(?P<dir>[-d])(?P<permission>([-r][-w][-xs]){3})\s+\d+\s+(?P<groupname>\S+)\s+(?P<username>\S+)\s+(?P<size>\d+)\s+(?P<timestamp>\w+\s+\d+\s+\d{1,2}:\d{2})\s+(?P<name>.+)$").unwrap(),
        Regex::new(r"^(?P<dir>[-d])(?P<permission>([-r][-w][-xs]){3})\s+(?P<size>\d+)\s+(?P<ctbit>\w+\s\w+)\s+(?P<size2>\d+)\s+(?P<timestamp>\w+\s+\d+\s+\d{2}:\d{2})\s+(?P<name>.+)$").unwrap(),
        Regex::new(r"^(?P<timestamp>\d{2}-\d{2}-\d{2}\s+\d{2}:\d{2}[AaPp][Mm])\s+(?P<dir><\w+>)?(?P<size>\d+)?\s+(?P<name>.+)$").unwrap(),
        Regex::new(r"(?P<timestamp>\d{2}-\d{2}-\d{2}\s+\d{2}:\d{2}[AaPp][Mm])\s+(?P<dir><\w+>)?(?P<size>\d+)?\s+(?P<name>.+)$").unwrap(),
    ];
}

/// Parse a full multi-line LIST response body. Lines matching no
/// pattern are dropped; source order is preserved.
pub fn parse_listing(raw: &str) -> Vec<FileEntry> {
    raw.lines().filter_map(parse_line).collect()
}

/// Parse a single listing line into a [`FileEntry`].
///
/// Returns `None` for lines matching no pattern, and for matched lines
/// whose size field fails integer parsing — a half-filled record is
/// never produced. An unparsable timestamp is not a failure; the entry
/// comes back with both timestamp fields unset.
pub fn parse_line(line: &str) -> Option<FileEntry> {
    let caps = PARSE_FORMATS.iter().find_map(|re| re.captures(line))?;

    let mut entry = FileEntry::new(caps.name("name")?.as_str());

    let dir = caps.name("dir").map(|m| m.as_str()).unwrap_or("");
    if !dir.is_empty() && dir != "-" {
        entry.is_folder = true;
    } else {
        let size = caps.name("size").map(|m| m.as_str()).unwrap_or("");
        entry.size = Some(size.parse::<u64>().ok()?);
    }

    if let Some(t) = caps.name("timestamp").and_then(|m| parse_timestamp(m.as_str())) {
        entry.last_modification = Some(t);
        entry.last_access = Some(t);
    }

    Some(entry)
}

/// Parse the captured timestamp against the known layouts:
/// `Jan 5 2023`, `Jan 5 04:00` (current year implied) and the DOS
/// `01-02-23 03:15PM` / `01-02-23 15:15` forms.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let text = raw.split_whitespace().collect::<Vec<_>>().join(" ");

    if let Ok(date) = NaiveDate::parse_from_str(&text, "%b %d %Y") {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
    }

    let with_year = format!("{} {}", Utc::now().year(), text);
    if let Ok(dt) = NaiveDateTime::parse_from_str(&with_year, "%Y %b %d %H:%M") {
        return Some(Utc.from_utc_datetime(&dt));
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(&text, "%m-%d-%y %I:%M%p") {
        return Some(Utc.from_utc_datetime(&dt));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(&text, "%m-%d-%y %H:%M") {
        return Some(Utc.from_utc_datetime(&dt));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.from_utc_datetime(
            &NaiveDate::from_ymd_opt(y, mo, d)
                .unwrap()
                .and_hms_opt(h, mi, 0)
                .unwrap(),
        )
    }

    #[test]
    fn unix_dir_named_owner() {
        let e = parse_line("drwxr-xr-x 2 alice staff 4096 Jan 5 2023 reports").unwrap();
        assert_eq!(e.name, "reports");
        assert!(e.is_folder);
        assert_eq!(e.size, None);
    }

    #[test]
    fn unix_file_named_owner_long_year() {
        let e = parse_line("-rw-r--r-- 1 alice staff 1024 Jan 5 2023 report.txt").unwrap();
        assert_eq!(e.name, "report.txt");
        assert!(!e.is_folder);
        assert_eq!(e.size, Some(1024));
        assert_eq!(e.last_modification, Some(utc(2023, 1, 5, 0, 0)));
        assert_eq!(e.last_access, e.last_modification);
    }

    #[test]
    fn unix_file_numeric_owner_long_year() {
        let e = parse_line("-rw-r--r-- 1000 1000 52428800 Feb 14 2022 dump.bin").unwrap();
        assert!(!e.is_folder);
        assert_eq!(e.size, Some(52_428_800));
        assert_eq!(e.last_modification, Some(utc(2022, 2, 14, 0, 0)));
    }

    #[test]
    fn unix_file_numeric_owner_short_time() {
        let e = parse_line("-rw-r--r-- 1000 1000 512 Mar 3 11:45 notes.txt").unwrap();
        assert_eq!(e.name, "notes.txt");
        assert_eq!(e.size, Some(512));
        // Current year implied; only the calendar day is predictable.
        let t = e.last_modification.unwrap();
        assert_eq!((t.month(), t.day()), (3, 3));
        assert_eq!(t.year(), Utc::now().year());
    }

    #[test]
    fn unix_file_named_owner_short_time() {
        let e = parse_line("-rwxr-xr-x 3 backup-svc www-data 2048 Dec 31 23:59 rollover.log")
            .unwrap();
        assert_eq!(e.name, "rollover.log");
        assert_eq!(e.size, Some(2048));
    }

    #[test]
    fn unix_duplicated_size_variant() {
        let e = parse_line("-rw-r--r-- 2048 ftp ftp 2048 Aug 12 04:00 duplicity.vol1").unwrap();
        assert_eq!(e.name, "duplicity.vol1");
        assert_eq!(e.size, Some(2048));
    }

    #[test]
    fn hyphenated_owner_and_group() {
        let e = parse_line("-rw-r--r-- 1 web-backup data-ops 777 Jan 5 2023 snapshot.zip")
            .unwrap();
        assert_eq!(e.name, "snapshot.zip");
        assert_eq!(e.size, Some(777));
    }

    #[test]
    fn dos_dir() {
        let e = parse_line("01-02-23 03:15PM <DIR> archive").unwrap();
        assert_eq!(e.name, "archive");
        assert!(e.is_folder);
        assert_eq!(e.size, None);
    }

    #[test]
    fn dos_file() {
        let e = parse_line("01-02-23 03:15PM 31337 BACKUP.DAT").unwrap();
        assert_eq!(e.name, "BACKUP.DAT");
        assert!(!e.is_folder);
        assert_eq!(e.size, Some(31337));
        assert_eq!(e.last_modification, Some(utc(2023, 1, 2, 15, 15)));
    }

    #[test]
    fn dos_with_leading_tag() {
        // Only the permissive tail rule accepts a prefixed line.
        let e = parse_line("listing: 01-02-23 09:00AM <DIR> inbox").unwrap();
        assert_eq!(e.name, "inbox");
        assert!(e.is_folder);
    }

    #[test]
    fn size_and_folder_mutually_exclusive() {
        for line in [
            "drwxr-xr-x 2 alice staff 4096 Jan 5 2023 reports",
            "-rw-r--r-- 1 alice staff 1024 Jan 5 2023 report.txt",
            "-rw-r--r-- 1000 1000 52428800 Feb 14 2022 dump.bin",
            "-rw-r--r-- 1000 1000 512 Mar 3 11:45 notes.txt",
            "-rwxr-xr-x 3 backup-svc www-data 2048 Dec 31 23:59 rollover.log",
            "-rw-r--r-- 2048 ftp ftp 2048 Aug 12 04:00 duplicity.vol1",
            "01-02-23 03:15PM <DIR> archive",
        ] {
            let e = parse_line(line).unwrap();
            assert_ne!(e.is_folder, e.size.is_some(), "line: {}", line);
        }
    }

    #[test]
    fn unparsable_timestamp_still_yields_entry() {
        let e = parse_line("-rw-r--r-- 1 alice staff 9 Xxx 99 9999 weird.txt").unwrap();
        assert_eq!(e.name, "weird.txt");
        assert_eq!(e.size, Some(9));
        assert_eq!(e.last_modification, None);
        assert_eq!(e.last_access, None);
    }

    #[test]
    fn unmatched_line_yields_none() {
        assert!(parse_line("total 42").is_none());
        assert!(parse_line("").is_none());
        assert!(parse_line("220 vsftpd ready").is_none());
    }

    #[test]
    fn names_with_spaces_survive() {
        let e = parse_line("01-02-23 12:00PM <DIR> My Documents").unwrap();
        assert_eq!(e.name, "My Documents");

        let e = parse_line("-rw-r--r-- 1 ftp ftp 64 Jan 5 2023 yearly report.txt").unwrap();
        assert_eq!(e.name, "yearly report.txt");
    }

    #[test]
    fn listing_skips_junk_and_preserves_order() {
        let raw = "total 3\n\
                   drwxr-xr-x 2 alice staff 4096 Jan 5 2023 reports\n\
                   garbage line\n\
                   -rw-r--r-- 1 alice staff 1024 Jan 5 2023 report.txt\n\
                   \n\
                   01-02-23 03:15PM 31337 BACKUP.DAT";
        let entries = parse_listing(raw);
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["reports", "report.txt", "BACKUP.DAT"]);
    }
}
