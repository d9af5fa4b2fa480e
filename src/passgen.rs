//  ____  ____     __        __     ____
// |  _ \|  _ \ __ \ \      / /__  / ___| ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \| |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/ \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-02
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password generation engine

use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

// 引入编译生成的单词列表
include!(concat!(env!("OUT_DIR"), "/word_data.rs"));

/// Word-mode retries this many assembly attempts before giving up.
pub const MAX_ATTEMPTS: usize = 1000;

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 64;
pub const MIN_COMPLEXITY: u8 = 1;
pub const MAX_COMPLEXITY: u8 = 10;

// Uppercasing only kicks in from this complexity level on.
const COMPLEXITY_THRESHOLD: u8 = 3;

pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

// 密码生成选项
#[derive(Debug, Clone)]
pub struct PasswordOptions {
    pub length: usize,
    pub complexity: u8,
    pub use_words: bool,
    pub use_digits: bool,
    pub use_punct: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 12,
            complexity: 1,
            use_words: false,
            use_digits: false,
            use_punct: false,
        }
    }
}

impl PasswordOptions {
    pub fn validate(&self) -> Result<(), PassGenError> {
        if self.length < MIN_LENGTH || self.length > MAX_LENGTH {
            return Err(PassGenError::InvalidRequest(format!(
                "Password length must be between {} and {}, got {}",
                MIN_LENGTH, MAX_LENGTH, self.length
            )));
        }
        if self.complexity < MIN_COMPLEXITY || self.complexity > MAX_COMPLEXITY {
            return Err(PassGenError::InvalidRequest(format!(
                "Complexity must be between {} and {}, got {}",
                MIN_COMPLEXITY, MAX_COMPLEXITY, self.complexity
            )));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum PassGenError {
    ConstraintsUnsatisfiable,
    InvalidRequest(String),
}

impl fmt::Display for PassGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassGenError::ConstraintsUnsatisfiable => {
                write!(f, "Couldn't build a valid password with required components")
            }
            PassGenError::InvalidRequest(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for PassGenError {}

/// Generate a password under the requested constraints.
///
/// Dispatches to word assembly when `use_words` is set, otherwise draws
/// independent characters. The random source is caller-supplied so that
/// seeded generators produce reproducible output.
pub fn generate_password<R: Rng>(
    options: &PasswordOptions,
    rng: &mut R,
) -> Result<String, PassGenError> {
    options.validate()?;
    if options.use_words {
        let assembled = assemble_from_words(options, rng)?;
        Ok(apply_complexity(&assembled, options.complexity, rng))
    } else {
        Ok(draw_from_charset(options, rng))
    }
}

// Candidate words keep one character of headroom below the requested
// length, so there is always room for a boundary decoration.
fn word_pool(length: usize) -> Vec<String> {
    let max_word_len = length.saturating_sub(1);
    WORDS
        .iter()
        .filter(|w| w.chars().all(|c| c.is_ascii_alphabetic()))
        .filter(|w| w.len() >= 2 && w.len() <= max_word_len)
        .map(|w| w.to_ascii_lowercase())
        .collect()
}

fn assemble_from_words<R: Rng>(
    options: &PasswordOptions,
    rng: &mut R,
) -> Result<String, PassGenError> {
    let pool = word_pool(options.length);
    if pool.is_empty() {
        return Err(PassGenError::ConstraintsUnsatisfiable);
    }
    log::debug!(
        "word pool holds {} candidates for length {}",
        pool.len(),
        options.length
    );

    let digits: Vec<char> = DIGITS.chars().collect();
    let punct: Vec<char> = PUNCTUATION.chars().collect();

    for attempt in 1..=MAX_ATTEMPTS {
        let mut parts: Vec<String> = Vec::new();
        let mut total_len = 0;
        let mut digit_used = false;
        let mut punct_used = false;

        while total_len < options.length {
            let word = pool.choose(rng).unwrap();

            // Each word carries at most one extra character. Required
            // classes come first; after that a coin flip may attach one
            // more, digits winning when both classes are requested.
            let mut special: Option<char> = None;
            if options.use_digits && !digit_used {
                special = digits.choose(rng).copied();
                digit_used = true;
            } else if options.use_punct && !punct_used {
                special = punct.choose(rng).copied();
                punct_used = true;
            } else if (options.use_digits || options.use_punct) && rng.gen_bool(0.5) {
                special = if options.use_digits {
                    digits.choose(rng).copied()
                } else {
                    punct.choose(rng).copied()
                };
            }

            let modified_word = match special {
                Some(c) => {
                    if rng.gen_bool(0.5) {
                        format!("{}{}", c, word)
                    } else {
                        format!("{}{}", word, c)
                    }
                }
                None => word.clone(),
            };

            if total_len + modified_word.len() > options.length {
                break;
            }

            total_len += modified_word.len();
            parts.push(modified_word);
        }

        if total_len == options.length
            && (!options.use_digits || digit_used)
            && (!options.use_punct || punct_used)
        {
            log::debug!("assembled password in {} attempt(s)", attempt);
            return Ok(parts.concat());
        }
    }

    Err(PassGenError::ConstraintsUnsatisfiable)
}

/// 随机大写处理（complexity >= 3 时生效）
fn apply_complexity<R: Rng>(password: &str, complexity: u8, rng: &mut R) -> String {
    if complexity < COMPLEXITY_THRESHOLD {
        return password.to_string();
    }
    let probability = f64::from(complexity) / 10.0;
    password
        .chars()
        .map(|c| {
            if rng.gen_bool(probability) {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

fn draw_from_charset<R: Rng>(options: &PasswordOptions, rng: &mut R) -> String {
    let mut charset = LETTERS.to_string();
    if options.use_digits {
        charset.push_str(DIGITS);
    }
    if options.use_punct {
        charset.push_str(PUNCTUATION);
    }
    let all_chars: Vec<char> = charset.chars().collect();
    let digits: Vec<char> = DIGITS.chars().collect();
    let punct: Vec<char> = PUNCTUATION.chars().collect();

    let mut password: Vec<char> = (0..options.length)
        .map(|_| *all_chars.choose(rng).unwrap())
        .collect();

    // Guarantee one digit by overwriting a random position.
    if options.use_digits {
        let idx = rng.gen_range(0..options.length);
        password[idx] = *digits.choose(rng).unwrap();
    }

    // Guarantee punctuation the same way. The position is drawn
    // independently and may land on the digit slot, in which case the
    // punctuation character replaces it.
    if options.use_punct {
        let idx = rng.gen_range(0..options.length);
        password[idx] = *punct.choose(rng).unwrap();
    }

    password.into_iter().collect()
}
