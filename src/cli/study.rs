use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::client::panels::PlayerCommand;
use crate::client::{HttpLearningApi, LearningApp};

const HELP: &str = "Commands:
  topic <text>     generate a syllabus
  select <id>      open a module and load its transcript
  transcript       show the transcript
  line <n>         jump the video to transcript line n
  ask <question>   ask the tutor about the video
  seek <n>         jump to the n-th timestamp of the last reply
  show             redraw every panel
  help             show this message
  quit             exit";

fn print_commands(commands: &[PlayerCommand]) {
    for command in commands {
        match command {
            PlayerCommand::Load { video_id } => println!("Loading video {}", video_id),
            PlayerCommand::Seek { seconds } => println!("Seeking to {}s", seconds),
        }
    }
}

pub async fn run(server: &str) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut app = LearningApp::new(HttpLearningApi::new(server));

    println!("{}", HELP);

    loop {
        let readline = rl.readline(">>> ");
        let line = match readline {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        };
        let _ = rl.add_history_entry(line.as_str());

        let (command, arg) = line
            .trim()
            .split_once(' ')
            .map(|(c, a)| (c, a.trim()))
            .unwrap_or((line.trim(), ""));

        match command {
            "" => continue,
            "topic" => {
                println!("Generating...");
                app.submit_topic(arg).await;
                println!("{}", app.render_syllabus()?);
            }
            "select" => match arg.parse::<i64>() {
                Ok(id) => {
                    let commands = app.select_module(id).await;
                    if commands.is_empty() && app.store.selected_module_id() != Some(id) {
                        println!("No module with id {}", id);
                        continue;
                    }
                    print_commands(&commands);
                    println!("{}", app.render_video_player()?);
                    println!("{}", app.render_transcript()?);
                }
                Err(_) => println!("Usage: select <id>"),
            },
            "transcript" => println!("{}", app.render_transcript()?),
            "line" => match arg.parse::<usize>() {
                Ok(n) => {
                    print_commands(&app.click_transcript_line(n));
                    println!("{}", app.render_video_player()?);
                }
                Err(_) => println!("Usage: line <n>"),
            },
            "ask" => {
                if !app.ask(arg).await {
                    println!("Load a transcript and type a question first");
                }
                println!("{}", app.render_chat()?);
            }
            "seek" => {
                let timestamps = app.latest_timestamps();
                match arg
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| timestamps.get(n.checked_sub(1)?))
                {
                    Some(reference) => {
                        print_commands(&app.seek(reference));
                        println!("{}", app.render_video_player()?);
                    }
                    None => println!("Usage: seek <n> ({} timestamps)", timestamps.len()),
                }
            }
            "show" => println!("{}", app.render()?),
            "help" => println!("{}", HELP),
            "quit" | "exit" => break,
            other => println!("Unknown command: {}", other),
        }
    }

    Ok(())
}
