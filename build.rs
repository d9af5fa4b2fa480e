use std::io::{BufRead, BufReader};
use std::{env, fs, path::Path};

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("word_data.rs");

    // 读取数据文件
    let data_file = "data/wordlist.txt";
    let file = fs::File::open(data_file).expect("Failed to open data file");
    let reader = BufReader::new(file);

    let mut word_array = Vec::new();

    for line in reader.lines() {
        let line = line.expect("Error reading line");
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // 每行格式: 序号<TAB>单词
        let word = match line.split_once('\t') {
            Some((_, word)) => word.trim(),
            None => panic!("Invalid data format: {}", line),
        };

        word_array.push(format!("\"{}\"", word));
    }

    let code = format!(
        r#"pub static WORDS: [&str; {}] = [{}];"#,
        word_array.len(),
        word_array.join(", ")
    );

    fs::write(dest_path, code).expect("Failed to write generated file");

    // 确保数据文件变化时重建
    println!("cargo:rerun-if-changed={}", data_file);
}
