//! Sample dataset generator
//!
//! Builds `id,platform,text` CSV files with random platforms and phrases,
//! valid input for `/analyze`.

use std::io::Write;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub const SAMPLE_PLATFORMS: &[&str] = &[
    "Twitter/X", "Facebook", "Instagram", "YouTube", "Telegram",
    "Reddit", "Quora", "Koo", "LinkedIn", "WhatsApp",
];

/// Favourable phrases
pub const PRO_TEXTS: &[&str] = &[
    "भारत के वैज्ञानिकों पर गर्व है।",
    "India’s startups are growing fast.",
    "हमारी एकता ही हमारी ताकत है।",
    "ISRO की success ने दुनिया को inspire किया।",
    "Make in India बढ़ा रहा है manufacturing.",
];

/// Critical phrases
pub const AGAINST_TEXTS: &[&str] = &[
    "India को गलत तरीके से दिखाया जा रहा है।",
    "Misleading claims about Indian policies.",
    "भारत के खिलाफ biased narrative है।",
    "Unverified allegations used to criticise India.",
    "India को unfair तरीके से judge किया गया।",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleRow {
    pub id: usize,
    pub platform: &'static str,
    pub text: &'static str,
}

/// Random rows; a seed makes the output reproducible
pub fn generate_rows(count: usize, seed: Option<u64>) -> Vec<SampleRow> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    (1..=count)
        .map(|id| {
            let pool = if rng.gen_bool(0.5) { PRO_TEXTS } else { AGAINST_TEXTS };
            SampleRow {
                id,
                platform: SAMPLE_PLATFORMS.choose(&mut rng).copied().unwrap_or("Twitter/X"),
                text: pool.choose(&mut rng).copied().unwrap_or_default(),
            }
        })
        .collect()
}

/// Write rows as CSV with an `id,platform,text` header
pub fn write_csv<W: Write>(writer: W, rows: &[SampleRow]) -> Result<(), ::csv::Error> {
    let mut out = ::csv::Writer::from_writer(writer);
    out.write_record(["id", "platform", "text"])?;
    for row in rows {
        out.write_record([row.id.to_string().as_str(), row.platform, row.text])?;
    }
    out.flush()?;
    Ok(())
}
