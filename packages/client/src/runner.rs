//! Interactive read-send-print loop.

use rustyline::{DefaultEditor, error::ReadlineError};

use crate::{cli::ClientArgs, error::ClientError, sender::SmsSender};

const PROMPT: &str = "sms> ";

/// Run the interactive client until Ctrl-C or Ctrl-D
pub async fn run_client(args: ClientArgs) -> Result<(), ClientError> {
    let sender = SmsSender::new(&args.url, &args.from, args.method);
    let mut editor = DefaultEditor::new()?;

    println!("Sending as {} to {} ({:?})", args.from, args.url, args.method);
    println!("Type a message and press Enter. Ctrl-D to quit.");

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(text);

        match sender.send(text).await {
            Ok(messages) => {
                for message in messages {
                    println!("veda> {message}");
                }
            }
            Err(e) => {
                tracing::error!("Failed to deliver message: {}", e);
                eprintln!("error: {e}");
            }
        }
    }

    Ok(())
}
