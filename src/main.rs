//! Demo binary: one recommendation turn per invocation.
//!
//! Plays the role of the hosting agent layer: picks the engine operation
//! for an explicit intent, seeds it from the persisted session state,
//! prints the rendered table (or the error sentence), and saves the
//! state back so a later `more` resumes without repeats.

use anyhow::{bail, Result};
use std::sync::Arc;

use tunescout::{
    format_tracks, DeezerClient, EngineConfig, JsonFileSessionStore, SearchEngine, SearchOptions,
    SessionStore,
};

const USAGE: &str = "usage: tunescout [--session <id>] <artist|genre|mood|track> <value...>
       tunescout [--session <id>] more";

struct Cli {
    session_id: String,
    command: String,
    value: String,
}

fn parse_args() -> Result<Cli> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let mut session_id = "default".to_string();
    if args.first().map(String::as_str) == Some("--session") {
        if args.len() < 2 {
            bail!("{}", USAGE);
        }
        session_id = args[1].clone();
        args.drain(..2);
    }

    let Some(command) = args.first().cloned() else {
        bail!("{}", USAGE);
    };
    let value = args[1..].join(" ");

    match command.as_str() {
        "more" => {
            if !value.is_empty() {
                bail!("{}", USAGE);
            }
        }
        "artist" | "genre" | "mood" | "track" => {
            if value.is_empty() {
                bail!("{}", USAGE);
            }
        }
        _ => bail!("{}", USAGE),
    }

    Ok(Cli {
        session_id,
        command,
        value,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = parse_args()?;

    let config = EngineConfig::default();
    let catalog = Arc::new(DeezerClient::new(&config)?);
    let engine = SearchEngine::new(catalog);
    let store = JsonFileSessionStore::in_config_dir();

    let mut state = store.load(&cli.session_id).await;
    let mut exclude = state.seen_track_ids.clone();
    let options = SearchOptions::from_config(&config);

    let outcome = match cli.command.as_str() {
        "artist" => {
            engine
                .search_by_artist(&cli.value, &mut exclude, &options)
                .await
        }
        "genre" => {
            engine
                .search_by_genre(&cli.value, &mut exclude, &options)
                .await
        }
        "mood" => {
            engine
                .search_by_mood_with_genre_fallback(&cli.value, &mut exclude, &options)
                .await
        }
        "track" => {
            engine
                .search_by_track(&cli.value, &mut exclude, &options)
                .await
        }
        "more" => {
            let Some(context) = state.last_context.clone() else {
                // Nothing to continue; this is the caller's condition to
                // handle, the engine has no notion of "no previous search".
                println!("Ask for an artist, genre, mood, or song first, then I can find more.");
                return Ok(());
            };
            let resume = SearchOptions {
                start_index: state.next_index,
                ..options
            };
            engine.continue_from(&context, &mut exclude, &resume).await
        }
        _ => unreachable!("validated in parse_args"),
    };

    match outcome {
        Ok(batch) => {
            log::info!("returning {} track(s)", batch.len());
            println!("{}", format_tracks(&batch.tracks));
            state.apply(&batch);
            store.save(&cli.session_id, &state).await;
        }
        Err(e) => {
            log::warn!("search failed: {}", e);
            println!("{}", e.user_message());
        }
    }

    Ok(())
}
