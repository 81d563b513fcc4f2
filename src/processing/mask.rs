//! Word masking.
use itertools::Itertools;
use rand::Rng;

use crate::error::Error;

/// Replaces masked words.
pub const MASK_TOKEN: &str = "<mask>";

/// Corrupts sentences by masking words independently.
///
/// Each space-separated word is replaced by [MASK_TOKEN] with probability `percentage`/100.
/// Word count and positions are kept.
#[derive(Debug, Clone, Copy)]
pub struct Masker {
    percentage: u8,
}

impl Masker {
    pub fn new(percentage: u8) -> Result<Self, Error> {
        if percentage > 100 {
            return Err(Error::Config(format!(
                "mask percentage must be within 0..=100, got {percentage}"
            )));
        }
        Ok(Self { percentage })
    }

    pub fn percentage(&self) -> u8 {
        self.percentage
    }

    /// Mask a sentence, drawing once per word from `rng`.
    pub fn mask<G: Rng + ?Sized>(&self, sentence: &str, rng: &mut G) -> String {
        sentence
            .split(' ')
            .map(|word| {
                if rng.gen_range(1..=100) <= self.percentage {
                    MASK_TOKEN
                } else {
                    word
                }
            })
            .join(" ")
    }
}

impl Default for Masker {
    /// 15% of words are masked by default.
    fn default() -> Self {
        Self { percentage: 15 }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    const SENTENCES: [&str; 3] = [
        "Der Hund läuft schnell",
        "Gregor Samsa erwachte eines Morgens aus unruhigen Träumen.",
        "x",
    ];

    #[test]
    fn never_mask() {
        let m = Masker::new(0).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            for s in SENTENCES {
                assert_eq!(m.mask(s, &mut rng), s);
            }
        }
    }

    #[test]
    fn always_mask() {
        let m = Masker::new(100).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            m.mask("Der Hund läuft schnell", &mut rng),
            "<mask> <mask> <mask> <mask>"
        );
    }

    #[test]
    fn positions_kept() {
        let m = Masker::new(50).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for s in SENTENCES {
            let masked = m.mask(s, &mut rng);
            let words: Vec<&str> = s.split(' ').collect();
            let masked_words: Vec<&str> = masked.split(' ').collect();
            assert_eq!(words.len(), masked_words.len());
            for (w, mw) in words.iter().zip(masked_words) {
                assert!(mw == *w || mw == MASK_TOKEN);
            }
        }
    }

    #[test]
    fn seeded_is_deterministic() {
        let m = Masker::new(30).unwrap();
        let s = SENTENCES[1];
        let a = m.mask(s, &mut StdRng::seed_from_u64(3));
        let b = m.mask(s, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn rate_is_close() {
        let m = Masker::new(15).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let sentence = vec!["wort"; 10_000].join(" ");
        let masked = m.mask(&sentence, &mut rng);
        let nb_masked = masked.split(' ').filter(|w| *w == MASK_TOKEN).count();
        assert!((1_200..1_800).contains(&nb_masked), "{nb_masked}");
    }

    #[test]
    fn invalid_percentage() {
        assert!(matches!(Masker::new(101), Err(Error::Config(_))));
    }
}
