use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimeserieError {
    #[error("invalid date {year:04}-{month:02}-{day:02}: {source}")]
    InvalidDate {
        year: i16,
        month: i8,
        day: i8,
        source: jiff::Error,
    },
    #[error("date out of timestamp range: {0}")]
    OutOfRange(jiff::Error),
}

impl TimeserieError {
    pub fn invalid_date(year: i16, month: i8, day: i8, source: jiff::Error) -> Self {
        TimeserieError::InvalidDate {
            year,
            month,
            day,
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TimeserieError>;
