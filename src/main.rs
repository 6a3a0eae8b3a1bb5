use anyhow::{anyhow, Result};
use clap::Parser;
use std::io::BufRead;
use std::thread;
use std::time::Duration;

use keybridge::cli::CliArgs;
use keybridge::config::KeyboardConfiguration;
use keybridge::editable::{EditSession, Selection};
use keybridge::keyboard::{KeyboardBridge, KeyboardCallback, KeyboardProducer};
use keybridge::validation::TextValidator;

/// Consumer tick interval
const TICK: Duration = Duration::from_millis(16);

/// Prints every dispatched notification on stdout
struct Printer;

impl KeyboardCallback for Printer {
    fn on_text_edit_update(&mut self, text: &str, selection: Selection) {
        println!(
            "text edit: {:?} (selection {}..{})",
            text,
            selection.start(),
            selection.end()
        );
    }

    fn on_surface_shown(
        &mut self,
        text: &str,
        selection: Selection,
        configuration: &KeyboardConfiguration,
    ) {
        println!(
            "surface shown: {:?} (caret {}, mode {}, line type {})",
            text,
            selection.end(),
            configuration.character_validation.name(),
            configuration.line_type.name()
        );
    }

    fn on_surface_hidden(&mut self) {
        println!("surface hidden");
    }
}

/// Read stdin line by line, feeding each line (with its newline) as one paste
fn run_producer(
    producer: KeyboardProducer,
    configuration: KeyboardConfiguration,
    validator: TextValidator,
    initial_text: String,
) -> Result<()> {
    let mut session = EditSession::new(initial_text, validator);
    producer.show_surface(session.text(), session.selection(), configuration);

    for line in std::io::stdin().lock().lines() {
        let mut input = line?;
        input.push('\n');

        let result = producer.apply_edit(&mut session, &input);
        tracing::debug!(
            "accepted {} of {} chars",
            result.accepted,
            input.chars().count()
        );

        if result.submit_requested {
            tracing::info!("submit requested, closing input");
            break;
        }
    }

    producer.hide_surface();
    Ok(())
}

fn main() -> Result<()> {
    keybridge::tracing::init();

    let startup = CliArgs::parse().into_config().map_err(|e| anyhow!(e))?;
    if let Some(path) = &startup.config_path {
        tracing::info!("Using keyboard configuration {}", path.display());
    }

    let (validator, diagnostics) = startup.configuration.text_validator();
    for diagnostic in &diagnostics {
        eprintln!("warning: {}", diagnostic);
    }

    let bridge = KeyboardBridge::new();
    bridge.enable_updates();

    let producer = bridge.producer();
    let configuration = startup.configuration;
    let initial_text = startup.initial_text;
    let handle =
        thread::spawn(move || run_producer(producer, configuration, validator, initial_text));

    let mut printer = Printer;
    loop {
        let finished = handle.is_finished();
        bridge.update(&mut printer);
        if finished && bridge.pending() == 0 {
            break;
        }
        thread::sleep(TICK);
    }

    handle
        .join()
        .map_err(|_| anyhow!("producer thread panicked"))??;

    bridge.disable_updates();
    Ok(())
}
