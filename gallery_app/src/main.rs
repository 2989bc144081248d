//! Emoji gallery demo application
//!
//! Drives the gallery against a headless render host. Key names are
//! read line by line from stdin (`1`-`4`, `r`, `t`, `n`, `g`, `s`,
//! `s up`, `s down`, `b`, `a`, `escape`); after each one a short burst
//! of frames is simulated and summarized in the log.

mod headless;

use emoji_gallery::config::{Config, GalleryConfig};
use emoji_gallery::input::{command_for, KeyInput};
use emoji_gallery::EmojiGallery;
use headless::HeadlessHost;
use std::io::BufRead;

/// Fixed simulation step, same cadence as a 60 Hz host loop
const FRAME_DT: f32 = 1.0 / 60.0;

/// Frames simulated after every key press
const FRAMES_PER_BURST: u32 = 30;

const CONFIG_PATH: &str = "gallery.toml";

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting Emoji Gallery demo");
    log::info!("Keys: 1-4 arrange | r idle rotation | t idle zoom | n node mode");
    log::info!("      g grayscale | s sepia (s up / s down for amount) | b/a conceptual | escape quit");

    let config = GalleryConfig::load_or_default(CONFIG_PATH);
    let mut host = HeadlessHost::new();
    let mut gallery = EmojiGallery::new(config, &mut host);
    log::info!("Headless host holds {} texture(s)", host.texture_count());

    let mut elapsed = 0.0_f32;
    run_burst(&mut gallery, &mut host, &mut elapsed);

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let Some((key, sepia_held)) = parse_key_line(&line) else {
            if !line.trim().is_empty() {
                log::warn!("Unrecognized key {:?}", line.trim());
            }
            continue;
        };
        let Some(command) = command_for(key, sepia_held) else {
            continue;
        };
        gallery.handle_command(&mut host, command);
        if !gallery.is_running() {
            break;
        }
        run_burst(&mut gallery, &mut host, &mut elapsed);
    }

    log::info!("Emoji Gallery demo finished");
}

/// Simulate a burst of frames and log the last frame's summary.
fn run_burst(gallery: &mut EmojiGallery, host: &mut HeadlessHost, elapsed: &mut f32) {
    for _ in 0..FRAMES_PER_BURST {
        host.begin_frame();
        gallery.update(host, *elapsed, FRAME_DT);
        *elapsed += FRAME_DT;
    }
    log::info!(
        "[{:?}, t={:.2}s] {}",
        gallery.arrangement(),
        elapsed,
        host.frame_summary()
    );
}

/// Map one input line onto a key. `s up` / `s down` stand for the
/// arrow keys pressed while `s` is held.
fn parse_key_line(line: &str) -> Option<(KeyInput, bool)> {
    let trimmed = line.trim().to_lowercase();
    match trimmed.as_str() {
        "1" => Some((KeyInput::Digit1, false)),
        "2" => Some((KeyInput::Digit2, false)),
        "3" => Some((KeyInput::Digit3, false)),
        "4" => Some((KeyInput::Digit4, false)),
        "r" => Some((KeyInput::R, false)),
        "t" => Some((KeyInput::T, false)),
        "n" => Some((KeyInput::N, false)),
        "g" => Some((KeyInput::G, false)),
        "s" => Some((KeyInput::S, false)),
        "b" => Some((KeyInput::B, false)),
        "a" => Some((KeyInput::A, false)),
        "s up" => Some((KeyInput::Up, true)),
        "s down" => Some((KeyInput::Down, true)),
        "escape" | "esc" | "q" => Some((KeyInput::Escape, false)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_line_covers_the_fixed_map() {
        assert_eq!(parse_key_line("1"), Some((KeyInput::Digit1, false)));
        assert_eq!(parse_key_line(" S "), Some((KeyInput::S, false)));
        assert_eq!(parse_key_line("s up"), Some((KeyInput::Up, true)));
        assert_eq!(parse_key_line("s down"), Some((KeyInput::Down, true)));
        assert_eq!(parse_key_line("esc"), Some((KeyInput::Escape, false)));
        assert_eq!(parse_key_line("zz"), None);
    }
}
