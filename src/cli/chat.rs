use std::io::Write;

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::mpsc;

use crate::chat::{ChatSession, LlmClient};
use crate::core::{AppConfig, Language};

pub async fn run(config: &AppConfig, lang: Language) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    let llm = LlmClient::new(&config.llm_host, &config.llm_model);
    let mut session = ChatSession::new(llm, lang).streaming(tx);

    for message in session.messages() {
        println!("{}", message.content);
    }
    println!("(type /lang en|es|fr to switch language, Ctrl-D to quit)");

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                if let Some(code) = line.trim().strip_prefix("/lang") {
                    match code.trim().parse::<Language>() {
                        Ok(lang) => {
                            session.set_language(lang);
                            println!("{}", lang.chat_welcome());
                        }
                        Err(e) => println!("{}", e),
                    }
                    continue;
                }

                // Print fragments as they stream in until the reply
                // is complete
                let send = session.send(&line);
                tokio::pin!(send);
                loop {
                    tokio::select! {
                        Some(fragment) = rx.recv() => {
                            print!("{}", fragment);
                            std::io::stdout().flush()?;
                        }
                        _ = &mut send => {
                            while let Ok(fragment) = rx.try_recv() {
                                print!("{}", fragment);
                            }
                            break;
                        }
                    }
                }
                println!();
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
