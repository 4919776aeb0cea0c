//! voxlate-cli: drive the translation / text-to-speech backend from a terminal.
//!
//! Usage:
//!   voxlate-cli translate <text> [--target <code>] [--copy] [--speak]
//!   voxlate-cli speak <text> [--lang <code>] [--out <path>] [--play]
//!   voxlate-cli detect <text>
//!   voxlate-cli voices [--lang <code>]
//!   voxlate-cli langs

use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use voxlate::config::{self, ServiceConfig};
use voxlate::console::DOWNLOAD_FILENAME;
use voxlate::{
    AudioSink, Console, Field, MemorySink, Panel, SpeechAction, Surface, TerminalSurface,
    TextSource, TranslateClient, TtsClient,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let code = match args[1].as_str() {
        "translate" => cmd_translate(&args[2..]).await,
        "speak" => cmd_speak(&args[2..]).await,
        "detect" => cmd_detect(&args[2..]).await,
        "voices" => cmd_voices(&args[2..]).await,
        "langs" => cmd_langs(),
        "version" | "--version" | "-V" => cmd_version(),
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            1
        }
    };
    std::process::exit(code);
}

fn print_usage() {
    println!(
        r#"voxlate-cli - translation / text-to-speech console

USAGE:
    voxlate-cli <COMMAND> [OPTIONS]

COMMANDS:
    translate <text> [--target <code>] [--copy] [--speak]
                                Translate text; optionally copy the result to
                                the clipboard or read it aloud
    speak <text> [--lang <code>] [--out <path>] [--play]
                                Synthesize speech; saves to {DOWNLOAD_FILENAME}
                                unless --out or --play is given
    detect <text>               Detect the language of the given text
    voices [--lang <code>]      List the voices the backend offers
    langs                       List the fixed target-language table
    version                     Show version information
    help                        Show this help message

ENVIRONMENT:
    VOXLATE_BASE_URL            Backend base URL (default http://127.0.0.1:5000)
    VOXLATE_HTTP_TIMEOUT_SECS   Request timeout in seconds"#
    );
}

fn cmd_version() -> i32 {
    println!("voxlate-cli {}", env!("CARGO_PKG_VERSION"));
    0
}

/// First argument that is not a `--flag` or a flag's value.
fn positional(args: &[String]) -> Option<&str> {
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(flag) = arg.strip_prefix("--") {
            skip_next = flag_takes_value(flag);
            continue;
        }
        return Some(arg);
    }
    None
}

fn flag_takes_value(flag: &str) -> bool {
    matches!(flag, "target" | "lang" | "out")
}

fn flag_value(args: &[String], name: &str) -> Option<String> {
    for (i, arg) in args.iter().enumerate() {
        if arg == name {
            return args.get(i + 1).cloned();
        }
    }
    None
}

fn has_flag(args: &[String], name: &str) -> bool {
    args.iter().any(|a| a == name)
}

/// Build the shared audio slot. Without the `playback` feature (or without
/// an output device) speech lands in a silent in-memory slot.
#[cfg(feature = "playback")]
fn make_sink(want_playback: bool) -> (Arc<dyn AudioSink>, Option<Arc<voxlate::audio::RodioSink>>) {
    if want_playback {
        match voxlate::audio::RodioSink::spawn() {
            Ok(sink) => {
                let player = Arc::new(sink);
                let slot: Arc<dyn AudioSink> = player.clone();
                return (slot, Some(player));
            }
            Err(e) => eprintln!("Audio playback unavailable ({e}); continuing silently."),
        }
    }
    let slot: Arc<dyn AudioSink> = Arc::new(MemorySink::new());
    (slot, None)
}

#[cfg(not(feature = "playback"))]
fn make_sink(want_playback: bool) -> (Arc<dyn AudioSink>, Option<()>) {
    if want_playback {
        eprintln!("Built without the `playback` feature; audio will not play.");
    }
    let slot: Arc<dyn AudioSink> = Arc::new(MemorySink::new());
    (slot, None)
}

async fn cmd_translate(args: &[String]) -> i32 {
    let Some(text) = positional(args) else {
        eprintln!("Usage: voxlate-cli translate <text> [--target <code>] [--copy] [--speak]");
        return 1;
    };
    let target = flag_value(args, "--target").unwrap_or_else(|| "en".to_string());
    if config::language(&target).is_none() {
        eprintln!("Unknown target language '{target}'; see `voxlate-cli langs`.");
        return 1;
    }

    let speak = has_flag(args, "--speak");
    let (sink, player) = make_sink(speak);
    let surface: Arc<dyn Surface> = Arc::new(TerminalSurface::new());
    let console = match Console::new(ServiceConfig::from_env(), surface, sink) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    console.surface().set_field_value(Field::TranslateInput, text);
    console.surface().set_field_value(Field::TargetLang, &target);

    if console.translate_text().await.is_err() {
        // The surface already rendered the failure.
        return 1;
    }

    if has_flag(args, "--copy") {
        console.copy_panel(Panel::TranslationOutput);
    }
    if speak {
        console
            .speak_inline(TextSource::Panel(Panel::TranslationOutput), Field::TargetLang)
            .await;
        wait_for_playback(&player);
    }
    0
}

async fn cmd_speak(args: &[String]) -> i32 {
    let Some(text) = positional(args) else {
        eprintln!("Usage: voxlate-cli speak <text> [--lang <code>] [--out <path>] [--play]");
        return 1;
    };
    let lang = flag_value(args, "--lang").unwrap_or_else(|| "en".to_string());
    let play = has_flag(args, "--play");

    let action = if play {
        SpeechAction::Play
    } else {
        let path = flag_value(args, "--out")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DOWNLOAD_FILENAME));
        SpeechAction::Download { path }
    };

    let (sink, player) = make_sink(play);
    let surface: Arc<dyn Surface> = Arc::new(TerminalSurface::new());
    let console = match Console::new(ServiceConfig::from_env(), surface, sink) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    console.surface().set_field_value(Field::SpeechInput, text);
    console.surface().set_field_value(Field::SpeechLang, &lang);

    let saved_to = match &action {
        SpeechAction::Download { path } => Some(path.clone()),
        SpeechAction::Play => None,
    };

    if console.speak_with_controls(action).await.is_err() {
        return 1;
    }

    match saved_to {
        Some(path) => println!("Saved {}", path.display()),
        None => wait_for_playback(&player),
    }
    0
}

#[cfg(feature = "playback")]
fn wait_for_playback(player: &Option<Arc<voxlate::audio::RodioSink>>) {
    if let Some(player) = player {
        player.wait_until_done();
    }
}

#[cfg(not(feature = "playback"))]
fn wait_for_playback(_player: &Option<()>) {}

async fn cmd_detect(args: &[String]) -> i32 {
    let Some(text) = positional(args) else {
        eprintln!("Usage: voxlate-cli detect <text>");
        return 1;
    };
    let config = ServiceConfig::from_env();
    let client = match TranslateClient::builder()
        .base_url(&config.base_url)
        .timeout_secs(config.timeout_secs)
        .build()
    {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };
    match client.detect(text).await {
        Ok(detection) => {
            println!("{} (confidence {:.2})", detection.language, detection.confidence);
            0
        }
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

async fn cmd_voices(args: &[String]) -> i32 {
    let lang = flag_value(args, "--lang");
    let config = ServiceConfig::from_env();
    let client = match TtsClient::builder()
        .base_url(&config.base_url)
        .timeout_secs(config.timeout_secs)
        .build()
    {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };
    match client.voices(lang.as_deref()).await {
        Ok(voices) if voices.is_empty() => {
            println!("No voices reported.");
            0
        }
        Ok(voices) => {
            println!("{:<32} {:<10} {}", "Voice", "Language", "Gender");
            println!("{}", "-".repeat(52));
            for voice in &voices {
                println!(
                    "{:<32} {:<10} {}",
                    voice.name,
                    voice.language.as_deref().unwrap_or("-"),
                    voice.gender.as_deref().unwrap_or("-"),
                );
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

fn cmd_langs() -> i32 {
    println!("{:<8} {}", "Code", "Language");
    println!("{}", "-".repeat(28));
    for lang in config::LANGUAGES {
        println!("{:<8} {}", lang.code, lang.name);
    }
    0
}
