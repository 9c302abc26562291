use std::fmt;
use time::OffsetDateTime;

/// Local wall-clock time used to stamp log lines.
#[derive(Debug, PartialEq, Eq)]
pub struct DateTime {
    odt: OffsetDateTime,
}

impl DateTime {
    pub fn now() -> Self {
        let odt: OffsetDateTime = match OffsetDateTime::now_local() {
            Ok(dt) => dt,
            Err(_) => OffsetDateTime::now_utc(),
        };
        DateTime { odt }
    }

    pub fn from_unix_timestamp(ts: i64) -> Self {
        let odt = match OffsetDateTime::from_unix_timestamp(ts) {
            Ok(x) => x,
            Err(_) => OffsetDateTime::UNIX_EPOCH,
        };
        DateTime { odt }
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:03}",
            self.odt.year(),
            self.odt.month() as u8,
            self.odt.day(),
            self.odt.hour(),
            self.odt.minute(),
            self.odt.second(),
            self.odt.millisecond(),
        )
    }
}
