pub mod catalog;
pub mod generator;
pub mod map;
pub mod models;
pub mod query;
pub mod stats;

pub use generator::generate;
pub use models::{CaseRecord, CaseStats, MonthlyCount};
pub use stats::aggregate;

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{DateTime, TimeZone, Utc};
    use rand::RngCore;

    /// A random source that only ever yields zero bits.
    pub struct ZeroRng;

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    pub fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 15, 9, 26)
            .single()
            .expect("valid fixed timestamp")
    }
}
