// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Supplies the date for resources whose input omits one.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
