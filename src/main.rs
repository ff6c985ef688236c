//! franko - 프랑코(아랍지) 입력을 아랍 문자로 변환하는 대화형 도구

use franko::config::load_config;
use franko::data::load_transliterator;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

fn main() {
    // 로깅 초기화 (error/warn만 출력, RUST_LOG로 조정)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let data_dir = std::env::var("FRANKO_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"));
    let config_path = std::env::var("FRANKO_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| data_dir.join("config.json"));
    let json_output = std::env::var("FRANKO_JSON").is_ok_and(|v| v == "1");

    let config = load_config(&config_path);
    let tr = match load_transliterator(&data_dir, config) {
        Ok(tr) => tr,
        Err(e) => {
            log::error!("데이터 로드 실패 ({}): {}", data_dir.display(), e);
            eprintln!("데이터 디렉토리를 확인해주세요: {}", data_dir.display());
            std::process::exit(1);
        }
    };

    eprintln!("Type Franko text (Ctrl+D to exit):");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("입력 읽기 실패: {}", e);
                break;
            }
        };

        let result = tr.transliterate(&line);
        for note in &result.notes {
            log::debug!("{}", note);
        }

        let written = if json_output {
            match serde_json::to_string(&result) {
                Ok(json) => writeln!(stdout, "{}", json),
                Err(e) => {
                    log::error!("직렬화 실패: {}", e);
                    continue;
                }
            }
        } else {
            writeln!(stdout, "{}", result.output_text)
        };

        if written.is_err() {
            break;
        }
    }
}
