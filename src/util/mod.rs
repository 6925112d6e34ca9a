//
//  brightcove-mapi
//  util/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Utility Module
//!
//! Small helpers shared by the API layer and the `mapi` binary.
//!
//! ## Categories
//!
//! - **Time Utilities**: [`minutes_since_epoch`], [`millis_to_datetime`], [`datetime_to_millis`]
//! - **File Utilities**: [`md5_file_hex`]
//!
//! ## Example
//!
//! ```rust
//! use brightcove_mapi::util::millis_to_datetime;
//!
//! let created = millis_to_datetime(1_262_304_000_000).unwrap();
//! assert_eq!(created.to_rfc3339(), "2010-01-01T00:00:00+00:00");
//! ```

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use chrono::{DateTime, Utc};
use md5::{Digest, Md5};

/// Converts a point in time to whole minutes since the Unix epoch.
///
/// The Media API expresses the `from_date` of modified-video queries in minutes.
///
/// # Example
///
/// ```rust
/// use brightcove_mapi::util::minutes_since_epoch;
/// use chrono::{TimeZone, Utc};
///
/// let date = Utc.with_ymd_and_hms(1970, 1, 1, 2, 30, 59).unwrap();
/// assert_eq!(minutes_since_epoch(date), 150);
/// ```
pub fn minutes_since_epoch(date: DateTime<Utc>) -> i64 {
    date.timestamp().div_euclid(60)
}

/// Converts epoch milliseconds to a UTC datetime.
///
/// Returns `None` when the value is out of range.
pub fn millis_to_datetime(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}

/// Converts a UTC datetime to epoch milliseconds.
pub fn datetime_to_millis(date: DateTime<Utc>) -> i64 {
    date.timestamp_millis()
}

/// Computes the MD5 digest of a file as lowercase hex.
///
/// The file is streamed, so large uploads are never held in memory.
///
/// # Errors
///
/// Returns the underlying I/O error if the file cannot be opened or read.
pub fn md5_file_hex(path: impl AsRef<Path>) -> io::Result<String> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut hasher = Md5::new();
    let mut buffer = [0u8; 64 * 1024];

    loop {
        let read = reader.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::io::Write;

    #[test]
    fn test_minutes_since_epoch() {
        let date = Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(minutes_since_epoch(date), 1_262_304_000 / 60);
    }

    #[test]
    fn test_millis_conversions() {
        let date = millis_to_datetime(1_262_304_000_123).unwrap();
        assert_eq!(datetime_to_millis(date), 1_262_304_000_123);
        assert!(millis_to_datetime(i64::MAX).is_none());
    }

    #[test]
    fn test_md5_file_hex() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"The quick brown fox jumps over the lazy dog")
            .unwrap();
        assert_eq!(
            md5_file_hex(file.path()).unwrap(),
            "9e107d9d372bb6826bd81d3542a419d6"
        );
    }

    #[test]
    fn test_md5_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(
            md5_file_hex(file.path()).unwrap(),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
    }
}
