use rustyline::{
    completion::{Completer, Pair},
    highlight::Highlighter,
    hint::Hinter,
    validate::Validator,
    Helper,
};

/// Completes loop commands and the program names present in the search
/// directories at startup.
#[derive(Helper)]
pub struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    pub fn new(mut commands: Vec<String>) -> CliHelper {
        commands.sort();
        commands.dedup();
        CliHelper { commands }
    }
}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let word = &line[..pos];

        // every loop command is a single word, so nothing past the first
        // word is completable
        if word.contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }

        let mut candidates: Vec<Pair> = self
            .commands
            .iter()
            .filter(|c| c.starts_with(word))
            .map(|c| Pair {
                display: c[pos..].to_owned(),
                replacement: c[pos..].to_owned(),
            })
            .collect();

        let prefix =
            rustyline::completion::longest_common_prefix(&candidates).map(|s| s.to_owned());
        if let Some(prefix) = prefix {
            if !prefix.is_empty() {
                candidates.clear();
                candidates.push(Pair {
                    display: prefix.clone(),
                    replacement: prefix,
                });
            }
        }

        Ok((pos, candidates))
    }
}

impl Validator for CliHelper {}

impl Hinter for CliHelper {
    type Hint = String;
}

impl Highlighter for CliHelper {}
