use rustyline::history::DefaultHistory;

use usym_rs::{Inspector, SearchPolicy, Session};

use crate::helper;

pub fn run_command_loop(
    policy: &SearchPolicy,
    inspector: &Inspector,
    session: &mut dyn Session,
) -> Result<(), String> {
    let mut editor = rustyline::Editor::<helper::CliHelper, DefaultHistory>::new()
        .map_err(|e| format!("failed to create line editor: {}", e))?;
    editor.set_helper(Some(helper::CliHelper::new(loop_commands(policy))));

    loop {
        let readline = editor.readline("usym> ");
        match readline {
            Ok(line) => {
                editor
                    .add_history_entry(line.as_str())
                    .map_err(|e| format!("failed to add history entry: {}", e))?;

                match handle_command(policy, inspector, session, line.trim()) {
                    Ok(true) => break,
                    Ok(false) => (),
                    // a failed attach ends the invocation, not the session
                    Err(e) => eprintln!("{}", e),
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(e) => Err(format!("failed to read line: {}", e))?,
        }
    }

    Ok(())
}

fn loop_commands(policy: &SearchPolicy) -> Vec<String> {
    let mut commands = vec!["exit".to_owned(), "list".to_owned(), "quit".to_owned()];
    commands.extend(policy.available_programs());
    commands
}

fn handle_command(
    policy: &SearchPolicy,
    inspector: &Inspector,
    session: &mut dyn Session,
    line: &str,
) -> Result<bool, String> {
    match line {
        "" => Ok(false),
        "quit" | "exit" => Ok(true),
        "list" => {
            for name in policy.available_programs() {
                println!("{}", name);
            }
            Ok(false)
        }
        name => {
            crate::attach(name, policy, inspector, session)?;
            Ok(false)
        }
    }
}
