use anyhow::{Result, bail};

use game_types::{Score, Word};

pub struct ScoringEngine;

impl ScoringEngine {
    /// Score a guess against the target word.
    ///
    /// Two passes: the first counts exact-position matches and
    /// consumes those letters on both sides; the second counts
    /// remaining guess letters that appear among the unconsumed target
    /// letters, consuming the lowest-index occurrence each time.
    /// Dictionary words never repeat a letter, but the consumption
    /// rule keeps the result well-defined for arbitrary input.
    pub fn evaluate(guess: &Word, target: &Word) -> Result<Score> {
        if guess.len() != target.len() {
            bail!(
                "Guess length {} does not match target length {}",
                guess.len(),
                target.len()
            );
        }

        let guess_chars: Vec<char> = guess.letters().collect();
        let target_chars: Vec<char> = target.letters().collect();

        let mut consumed = vec![false; target_chars.len()];
        let mut correct_position = 0u32;

        for (i, &ch) in guess_chars.iter().enumerate() {
            if ch == target_chars[i] {
                correct_position += 1;
                consumed[i] = true;
            }
        }

        let mut correct_letter = 0u32;
        for (i, &ch) in guess_chars.iter().enumerate() {
            if target_chars[i] == ch {
                continue; // consumed in the first pass
            }
            let slot = (0..target_chars.len()).find(|&j| !consumed[j] && target_chars[j] == ch);
            if let Some(j) = slot {
                consumed[j] = true;
                correct_letter += 1;
            }
        }

        Ok(Score {
            correct_position,
            correct_letter,
        })
    }
}
