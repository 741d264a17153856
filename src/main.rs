//! Headless driver: load a file through the runtime, optionally move the
//! cursor and search, then print the status line (and tokens).

mod cli;

use anyhow::{bail, Result};
use clap::Parser;

use ded::config_paths;
use ded::messages::{AppMsg, DocumentMsg, EditorMsg, InputMsg, SearchMsg};
use ded::update::search_matches_at;
use ded::{AppModel, EditorConfig, Runtime};

use cli::CliArgs;

fn main() -> Result<()> {
    ded::tracing::init();
    let args = CliArgs::parse();

    if args.init_config {
        EditorConfig::default().save()?;
        if let Some(path) = config_paths::config_file() {
            println!("Wrote {}", path.display());
        }
        return Ok(());
    }

    let config = EditorConfig::load();
    let mut runtime = Runtime::new(AppModel::new(config));

    if let Some(path) = args.path.clone() {
        runtime.dispatch(AppMsg::OpenFile(path.clone()));
        if runtime.model.document.file_path.is_none() {
            bail!("could not open {}", path.display());
        }
    }

    if let Some((line, column)) = args.initial_position() {
        runtime.dispatch(EditorMsg::GotoPosition { line, column });
    }

    if let Some(query) = &args.find {
        runtime.dispatch(SearchMsg::Start);
        runtime.dispatch(DocumentMsg::InsertText(query.as_bytes().to_vec()));
        let cursor = runtime.model.clamped_cursor();
        if !search_matches_at(&runtime.model, cursor) {
            println!("not found: {}", query);
        }
        runtime.dispatch(InputMsg::Confirm);
    }

    for popup in runtime.model.popups.popups() {
        println!("[{}] {}", popup.color, popup.message);
    }
    println!("{}", runtime.model.status_text());

    if args.tokens {
        let doc = &runtime.model.document;
        for token in doc.tokens() {
            println!(
                "{}:{} {} {:?}",
                token.position.row + 1,
                token.position.col + 1,
                token.kind.name(),
                String::from_utf8_lossy(token.text(doc.data()))
            );
        }
    }

    Ok(())
}
