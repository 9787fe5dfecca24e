// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Time related utils.

use chrono::TimeZone;
use chrono::Utc;

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Create a new DateTime with current time.
///
/// Signers never call this on their own; callers take `now()` and pass it in
/// so that signing stays deterministic.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into the decimal Unix timestamp in seconds: "1700000000"
pub fn format_unix_timestamp(t: DateTime) -> String {
    t.timestamp().to_string()
}

/// Build a DateTime from Unix seconds.
///
/// Returns `None` if the value is out of range.
pub fn from_unix_timestamp(secs: i64) -> Option<DateTime> {
    Utc.timestamp_opt(secs, 0).single()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_unix_timestamp() {
        let t = from_unix_timestamp(1_700_000_000).expect("in range");
        assert_eq!(format_unix_timestamp(t), "1700000000");

        let t = from_unix_timestamp(0).expect("in range");
        assert_eq!(format_unix_timestamp(t), "0");
    }

    #[test]
    fn test_sub_second_is_truncated() {
        let t = Utc.timestamp_opt(1_700_000_000, 999_000_000).unwrap();
        assert_eq!(format_unix_timestamp(t), "1700000000");
    }
}
