use crate::configtool::{AppConfig, load_config, prompt_input, save_config};
use crate::passgen::{MAX_COMPLEXITY, MAX_LENGTH, MIN_COMPLEXITY, MIN_LENGTH};

pub fn interactive_init(accept_defaults: bool) -> Result<(), String> {
    let mut config = AppConfig::default();

    if !accept_defaults {
        let input = prompt_input(&format!(
            "Default password length ({}-{}, default: {}): ",
            MIN_LENGTH, MAX_LENGTH, config.length
        ))?;
        if !input.is_empty() {
            config.length = input
                .parse()
                .map_err(|_| "Invalid length. Please enter a number.".to_string())?;
        }
        if config.length < MIN_LENGTH || config.length > MAX_LENGTH {
            return Err(format!(
                "Length must be between {} and {}",
                MIN_LENGTH, MAX_LENGTH
            ));
        }

        let input = prompt_input(&format!(
            "Default uppercase complexity ({}-{}, default: {}): ",
            MIN_COMPLEXITY, MAX_COMPLEXITY, config.complexity
        ))?;
        if !input.is_empty() {
            config.complexity = input
                .parse()
                .map_err(|_| "Invalid complexity. Please enter a number.".to_string())?;
        }
        if config.complexity < MIN_COMPLEXITY || config.complexity > MAX_COMPLEXITY {
            return Err(format!(
                "Complexity must be between {} and {}",
                MIN_COMPLEXITY, MAX_COMPLEXITY
            ));
        }

        let input = prompt_input("Assemble from dictionary words by default? [y/N]: ")?;
        config.use_words = input.to_lowercase() == "y";

        let input = prompt_input("Require at least one digit by default? [y/N]: ")?;
        config.use_digits = input.to_lowercase() == "y";

        let input = prompt_input("Require punctuation by default? [y/N]: ")?;
        config.use_punct = input.to_lowercase() == "y";

        let input = prompt_input("Default log file (empty for none): ")?;
        config.log_file = if input.is_empty() { None } else { Some(input) };
    }

    let path = save_config(&config).map_err(|e| format!("Failed to save config: {}", e))?;
    println!("Configuration saved to: {}", path.display());
    Ok(())
}

pub fn show_config() -> Result<(), String> {
    let config = load_config().map_err(|e| format!("Failed to load config: {}", e))?;
    println!("length     : {}", config.length);
    println!("complexity : {}", config.complexity);
    println!("use_words  : {}", config.use_words);
    println!("use_digits : {}", config.use_digits);
    println!("use_punct  : {}", config.use_punct);
    println!("log_file   : {}", config.log_file.as_deref().unwrap_or("(none)"));
    Ok(())
}
