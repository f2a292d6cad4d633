//! Mock data and deterministic random sources.
use anyhow::Result;
use passgen_password::{UniformSource, Words};
use rand::{rngs::StdRng, CryptoRng, RngCore, SeedableRng};
use std::{io::Write, path::PathBuf};
use tempfile::TempDir;

/// Seeded RNG for reproducible tests.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Uniform source over a seeded RNG.
pub fn source(seed: u64) -> UniformSource<StdRng> {
    UniformSource::new(seeded(seed))
}

/// RNG that replays scripted 32-bit values then continues
/// with a seeded generator.
pub struct ScriptedRng {
    script: Vec<u32>,
    rest: StdRng,
}

impl ScriptedRng {
    /// Create a scripted RNG.
    pub fn new(script: impl Into<Vec<u32>>) -> Self {
        let mut script = script.into();
        script.reverse();
        Self {
            script,
            rest: seeded(0),
        }
    }

    /// Number of scripted values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.script.pop().unwrap_or_else(|| self.rest.next_u32())
    }

    fn next_u64(&mut self) -> u64 {
        self.next_u32() as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(
        &mut self,
        dest: &mut [u8],
    ) -> std::result::Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for ScriptedRng {}

/// Small alphabetic word list.
pub fn words() -> Words {
    Words::new([
        "amber", "birch", "cedar", "delta", "ember", "fjord", "grove",
        "harbor", "island", "juniper",
    ])
    .expect("mock words are not empty")
}

/// Write a word list file into a temporary directory.
pub fn wordlist_file(lines: &[&str]) -> Result<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("wordlist.txt");
    let mut file = std::fs::File::create(&path)?;
    for line in lines {
        writeln!(file, "{}", line)?;
    }
    Ok((dir, path))
}
