use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use rand::{thread_rng, Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::sequence::Sequence;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceSource {
    #[default]
    Thread,
    Seeded(u64),
}

impl SequenceSource {
    pub fn to_rng(&self) -> Box<dyn RngCore> {
        match self {
            SequenceSource::Thread => Box::new(thread_rng()),
            SequenceSource::Seeded(seed) => {
                let rng: rand::rngs::StdRng = SeedableRng::seed_from_u64(*seed);
                Box::new(rng)
            }
        }
    }
}

impl fmt::Display for SequenceSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SequenceSource::Thread => write!(f, "thread"),
            SequenceSource::Seeded(seed) => write!(f, "seed:{}", seed),
        }
    }
}

impl FromStr for SequenceSource {
    type Err = eyre::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "thread" {
            Ok(SequenceSource::Thread)
        } else if let Some(seed) = s.strip_prefix("seed:") {
            Ok(SequenceSource::Seeded(seed.parse()?))
        } else {
            Err(eyre::eyre!("Invalid SequenceSource: {}", s))
        }
    }
}

/// Draws `len` integers uniformly from `range`.
pub fn generate(
    len: usize,
    range: RangeInclusive<i64>,
    source: SequenceSource,
) -> eyre::Result<Sequence> {
    if range.is_empty() {
        eyre::bail!(
            "Empty value range {}..={}",
            range.start(),
            range.end()
        );
    }

    let mut rng = source.to_rng();

    let values = (0..len).map(|_| rng.gen_range(range.clone())).collect();

    tracing::debug!(len, %source, "Generated sequence");

    Ok(Sequence(values))
}
