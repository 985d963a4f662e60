use std::{fs, io, process::exit};

use clap::Parser;
use usym_rs::{Inspector, SearchPolicy, Session, WriterSession};

mod args;
mod commands;
mod helper;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", e);
        exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = args::Args::parse();

    let policy = SearchPolicy::new(
        vec![("init".to_owned(), args.init_path.clone().into())],
        vec![
            args.user_dir.clone().into(),
            args.fallback_dir.clone().into(),
        ],
        &args.suffix,
    );
    let inspector = Inspector::new(&args.objdump);

    let mut session: Box<dyn Session> = match &args.out {
        Some(path) => {
            let file = fs::File::create(path)
                .map_err(|e| format!("failed to create command file {}: {}", path, e))?;
            Box::new(WriterSession::new(file))
        }
        None => Box::new(WriterSession::new(io::stdout())),
    };

    match &args.program {
        Some(name) => attach(name, &policy, &inspector, session.as_mut()),
        None => commands::run_command_loop(&policy, &inspector, session.as_mut()),
    }
}

fn attach(
    name: &str,
    policy: &SearchPolicy,
    inspector: &Inspector,
    session: &mut dyn Session,
) -> Result<(), String> {
    let (path, vma) = usym_rs::attach_userland(name, policy, inspector, session)?;

    eprintln!("VMA of the .text section of {}: 0x{:x}", path.display(), vma);

    Ok(())
}
