use crate::configtool::load_config;
use crate::passgen::{self, PasswordOptions};
use crate::passlog::PasswordLog;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::OsRng;
use rand_chacha::ChaCha20Rng;

pub fn generate_batch(
    length: Option<usize>,
    complexity: Option<u8>,
    words: bool,
    digits: bool,
    punct: bool,
    count: usize,
    seed: Option<u64>,
    log_file: Option<String>,
) -> Result<(), String> {
    let config = load_config().map_err(|e| format!("Failed to load config: {}", e))?;

    // 命令行参数优先，未指定时退回配置默认值
    let options = PasswordOptions {
        length: length.unwrap_or(config.length),
        complexity: complexity.unwrap_or(config.complexity),
        use_words: words || config.use_words,
        use_digits: digits || config.use_digits,
        use_punct: punct || config.use_punct,
    };
    let log_path = log_file.or(config.log_file);

    let mut log = PasswordLog::new();
    match seed {
        Some(seed) => emit(&options, count, &mut ChaCha20Rng::seed_from_u64(seed), &mut log)?,
        None => emit(&options, count, &mut OsRng, &mut log)?,
    }

    if let Some(path) = log_path {
        if !log.is_empty() {
            let saved = log
                .save_to_file(&path)
                .map_err(|e| format!("Failed to save password log: {}", e))?;
            log::info!("appended {} entries to {}", saved, path);
            println!("Appended {} password(s) to: {}", saved, path);
        }
    }

    Ok(())
}

fn emit<R: Rng>(
    options: &PasswordOptions,
    count: usize,
    rng: &mut R,
    log: &mut PasswordLog,
) -> Result<(), String> {
    for _ in 0..count {
        let password = passgen::generate_password(options, rng)
            .map_err(|e| format!("Failed to generate password: {}", e))?;
        println!("{}", password);
        log.record(password);
    }
    Ok(())
}
