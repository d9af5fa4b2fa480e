use crate::configtool::{load_config, prompt_input};
use crate::passgen::{self, PasswordOptions};
use crate::passlog::{PassLogError, PasswordLog};
use chrono::Local;
use rand::rngs::OsRng;

pub fn run_session() -> Result<(), String> {
    let config = load_config().map_err(|e| format!("Failed to load config: {}", e))?;
    let mut options = PasswordOptions {
        length: config.length,
        complexity: config.complexity,
        use_words: config.use_words,
        use_digits: config.use_digits,
        use_punct: config.use_punct,
    };

    println!("Password generation session.");
    println!("Current options: {}", describe_options(&options));

    let mut log = PasswordLog::new();
    let mut rng = OsRng;

    loop {
        let command =
            prompt_input("Command [g=generate, o=options, v=view log, s=save, c=clear, q=quit]: ")?;
        match command.as_str() {
            "g" => match passgen::generate_password(&options, &mut rng) {
                Ok(password) => {
                    let entry = log.record(password);
                    println!("{}", entry.display_line());
                }
                Err(e) => println!("{}", e),
            },
            "o" => match prompt_options(&options) {
                Ok(updated) => {
                    options = updated;
                    println!("Current options: {}", describe_options(&options));
                }
                Err(e) => println!("{}", e),
            },
            "v" => {
                if log.is_empty() {
                    println!("Password log is empty.");
                } else {
                    for entry in log.entries() {
                        println!("{}", entry.display_line());
                    }
                }
            }
            "s" => save_pending(&mut log)?,
            "c" => {
                log.clear();
                println!("Password log cleared.");
            }
            "q" | "quit" | "exit" => break,
            "" => continue,
            other => println!("Unknown command: {}", other),
        }
    }

    Ok(())
}

// 保存当前待导出的密码日志；失败时保留全部条目
fn save_pending(log: &mut PasswordLog) -> Result<(), String> {
    if log.is_empty() {
        println!("No passwords have been generated yet.");
        return Ok(());
    }

    let default_name = format!("password_{}.txt", Local::now().format("%Y-%m-%d"));
    let path = prompt_input(&format!("Save to file (default: {}): ", default_name))?;
    let path = if path.is_empty() { default_name } else { path };

    match log.save_to_file(&path) {
        Ok(saved) => {
            log::info!("appended {} entries to {}", saved, path);
            println!("{} password(s) saved to: {}", saved, path);
        }
        Err(PassLogError::NothingToSave) => {
            println!("No passwords have been generated yet.");
        }
        Err(e) => println!("Failed to save file: {}", e),
    }
    Ok(())
}

fn prompt_options(current: &PasswordOptions) -> Result<PasswordOptions, String> {
    let mut options = current.clone();

    let input = prompt_input(&format!("Password length (4-64, default: {}): ", options.length))?;
    if !input.is_empty() {
        options.length = input
            .parse()
            .map_err(|_| "Invalid length. Please enter a number.".to_string())?;
    }

    let input = prompt_input(&format!(
        "Uppercase complexity (1-10, default: {}): ",
        options.complexity
    ))?;
    if !input.is_empty() {
        options.complexity = input
            .parse()
            .map_err(|_| "Invalid complexity. Please enter a number.".to_string())?;
    }

    let input = prompt_input("Assemble from dictionary words? [y/N]: ")?;
    options.use_words = input.to_lowercase() == "y";

    let input = prompt_input("Require at least one digit? [y/N]: ")?;
    options.use_digits = input.to_lowercase() == "y";

    let input = prompt_input("Require at least one punctuation character? [y/N]: ")?;
    options.use_punct = input.to_lowercase() == "y";

    options.validate().map_err(|e| e.to_string())?;
    Ok(options)
}

fn describe_options(options: &PasswordOptions) -> String {
    format!(
        "length={} complexity={} words={} digits={} punct={}",
        options.length,
        options.complexity,
        if options.use_words { "on" } else { "off" },
        if options.use_digits { "on" } else { "off" },
        if options.use_punct { "on" } else { "off" },
    )
}
