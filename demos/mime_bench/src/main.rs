//! MIME タイプパースのベンチマーク
//!
//! web-platform-tests 形式の JSON フィクスチャから `input` を集め、
//! パースとシリアライズを繰り返して処理速度を表示する。
//!
//! 使い方:
//!   cargo run --release -p mime_bench -- tests/wpt/generated-mime-types.json
//!   cargo run --release -p mime_bench -- --iterations 5000 tests/wpt/mime-types.json

use std::hint::black_box;
use std::time::{Duration, Instant};

use nojson::{JsonValueKind, RawJson};
use shiguredo_mimesniff::parse_mime_type;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = noargs::raw_args();
    args.metadata_mut().app_name = "mime_bench";

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

    // --iterations オプション
    let iterations: usize = noargs::opt("iterations")
        .short('n')
        .doc("Number of passes over the corpus (default: 1000)")
        .default("1000")
        .take(&mut args)
        .then(|o| o.value().parse())
        .map_err(|e| format!("{:?}", e))?;

    // 位置引数: フィクスチャ
    let fixture: String = noargs::arg("<FIXTURE>")
        .doc("Path to a JSON fixture (e.g., tests/wpt/generated-mime-types.json)")
        .take(&mut args)
        .then(|a| Ok::<_, &str>(a.value().to_string()))
        .map_err(|e| format!("{:?}", e))?;

    // 未知の引数があればエラー、ヘルプが返されたら表示
    if let Some(help) = args.finish().map_err(|e| format!("{:?}", e))? {
        print!("{}", help);
        return Ok(());
    }

    let text = std::fs::read_to_string(&fixture)
        .map_err(|e| format!("failed to read {}: {}", fixture, e))?;
    let corpus = load_inputs(&text)?;
    if corpus.is_empty() {
        return Err(format!("no inputs found in {}", fixture).into());
    }
    let corpus_bytes: usize = corpus.iter().map(|s| s.len()).sum();
    log_debug(
        debug,
        &format!("loaded {} inputs ({} bytes)", corpus.len(), corpus_bytes),
    );

    // ウォームアップ
    let accepted = run_pass(&corpus).0;

    let mut best = Duration::MAX;
    let mut total = Duration::ZERO;
    let mut output_bytes = 0;
    for i in 0..iterations {
        let start = Instant::now();
        let (_, bytes) = run_pass(&corpus);
        let elapsed = start.elapsed();
        output_bytes += bytes;
        total += elapsed;
        best = best.min(elapsed);
        if i % 1000 == 0 {
            log_debug(debug, &format!("iteration {}: {:?}", i, elapsed));
        }
    }
    log_debug(debug, &format!("serialized {} bytes in total", output_bytes));

    if iterations == 0 {
        println!("inputs: {} ({} accepted)", corpus.len(), accepted);
        return Ok(());
    }

    let mean = total / iterations as u32;
    println!("fixture:     {}", fixture);
    println!("inputs:      {} ({} accepted)", corpus.len(), accepted);
    println!("bytes:       {}", corpus_bytes);
    println!("iterations:  {}", iterations);
    println!("mean/pass:   {:?}", mean);
    println!("best/pass:   {:?}", best);
    println!(
        "ns/mime:     {:.2}",
        best.as_nanos() as f64 / corpus.len() as f64
    );
    println!(
        "ns/byte:     {:.3}",
        best.as_nanos() as f64 / corpus_bytes.max(1) as f64
    );
    println!(
        "mime/s:      {:.0}",
        corpus.len() as f64 / best.as_secs_f64().max(f64::MIN_POSITIVE)
    );
    println!(
        "speed:       {:.2} MB/s",
        corpus_bytes as f64 / best.as_secs_f64().max(f64::MIN_POSITIVE) / 1e6
    );

    Ok(())
}

/// コーパスを 1 回パースし、(パースに成功した数, シリアライズ結果の合計バイト数) を返す
fn run_pass(corpus: &[String]) -> (usize, usize) {
    let mut accepted = 0;
    let mut bytes = 0;
    for input in corpus {
        if let Some(mime) = parse_mime_type(black_box(input)) {
            accepted += 1;
            bytes += mime.serialized().len();
        }
    }
    (accepted, bytes)
}

/// フィクスチャから `input` を集める
///
/// セクション名の文字列は読み飛ばす。
fn load_inputs(text: &str) -> Result<Vec<String>, nojson::JsonParseError> {
    let raw = RawJson::parse(text)?;
    let mut inputs = Vec::new();
    for element in raw.value().to_array()? {
        if element.kind() != JsonValueKind::Object {
            continue;
        }
        let input = element.to_member("input")?.required()?;
        inputs.push(input.to_unquoted_string_str()?.into_owned());
    }
    Ok(inputs)
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
