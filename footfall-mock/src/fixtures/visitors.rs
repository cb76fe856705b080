use chrono::{Datelike, Duration};
use chrono_tz::Asia::Tokyo;
use footfall_core::{RawSample, VisitorRequest, VisitorSeries, night_grid};

// Splitmix-style generator so fixtures stay deterministic per (shop, date)
// without pulling in a rand dependency.
struct Rng(u64);

impl Rng {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}

fn seed_for(req: &VisitorRequest) -> u64 {
    let mut seed = 0xDEAD_BEEFu64;
    for b in req.shop.as_str().bytes() {
        seed = seed.wrapping_mul(31).wrapping_add(u64::from(b));
    }
    seed.wrapping_add(u64::from(req.date.num_days_from_ce().unsigned_abs()))
}

/// Deterministic overnight series: samples near most 10-minute marks with a
/// little jitter and occasional gaps, so aligned output shows both matched
/// and absent slots.
pub fn series(req: &VisitorRequest) -> VisitorSeries {
    let mut rng = Rng(seed_for(req));
    let mut samples = Vec::new();
    for slot in night_grid(req.date, Tokyo) {
        // Roughly one slot in eight goes unobserved.
        if rng.below(8) == 0 {
            continue;
        }
        let jitter = i64::try_from(rng.below(9)).unwrap_or(0) - 4;
        let male = rng.below(40) as u32;
        let female = rng.below(40) as u32;
        samples.push(RawSample {
            ts: slot + Duration::minutes(jitter),
            male,
            female,
        });
    }
    VisitorSeries {
        shop: req.shop.clone(),
        date: req.date,
        samples,
    }
}
