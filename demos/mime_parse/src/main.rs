//! MIME タイプをパースして結果を表示する例
//!
//! 使い方:
//!   cargo run -p mime_parse -- 'TEXT/HTML; Charset="utf-8"'
//!   printf 'text/plain;a=1;a=2\n/plain\n' | cargo run -p mime_parse

use std::io::BufRead;

use shiguredo_mimesniff::MimeType;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = noargs::raw_args();
    args.metadata_mut().app_name = "mime_parse";

    // --help フラグ
    noargs::HELP_FLAG.take_help(&mut args);

    // --version フラグ
    let version_flag: bool = noargs::flag("version")
        .short('V')
        .doc("Show version")
        .take(&mut args)
        .is_present();
    if version_flag {
        println!("{}", env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    }

    // --debug フラグ
    let debug: bool = noargs::flag("debug")
        .doc("Enable debug logging")
        .take(&mut args)
        .is_present();

    // 位置引数: MIME タイプ文字列 (複数可)
    let mut inputs = Vec::new();
    while let Some(input) = noargs::arg("[INPUT]...")
        .doc("MIME type strings to parse (reads lines from stdin if omitted)")
        .take(&mut args)
        .present_and_then(|a| Ok::<_, &str>(a.value().to_string()))
        .map_err(|e| format!("{:?}", e))?
    {
        inputs.push(input);
    }

    // 未知の引数があればエラー、ヘルプが返されたら表示
    if let Some(help) = args.finish().map_err(|e| format!("{:?}", e))? {
        print!("{}", help);
        return Ok(());
    }

    if inputs.is_empty() {
        log_debug(debug, "no arguments, reading from stdin");
        for line in std::io::stdin().lock().lines() {
            inputs.push(line?);
        }
    }

    let mut failed = 0;
    for input in &inputs {
        log_debug(debug, &format!("parse {:?}", input));
        match MimeType::parse(input) {
            Ok(mime) => print_mime_type(input, &mime),
            Err(e) => {
                failed += 1;
                eprintln!("{:?}: {}", input, e);
            }
        }
    }

    log_debug(
        debug,
        &format!("{} parsed, {} failed", inputs.len() - failed, failed),
    );

    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn print_mime_type(input: &str, mime: &MimeType) {
    println!("{:?}", input);
    println!("  essence:    {}", mime.essence());
    for (name, value) in mime.parameters().iter() {
        println!("  parameter:  {} = {:?}", name, value);
    }
    println!("  serialized: {}", mime);
}

fn log_debug(enabled: bool, message: &str) {
    if enabled {
        eprintln!("[{}] DEBUG: {}", now_timestamp(), message);
    }
}

fn now_timestamp() -> String {
    let duration = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_else(|_| std::time::Duration::from_secs(0));
    format!("{}.{:03}", duration.as_secs(), duration.subsec_millis())
}
