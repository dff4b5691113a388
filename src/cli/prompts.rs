//! Interactive replacement prompts
//!
//! Each character walks a small state machine, one answer line per
//! transition:
//!
//! ```text
//! Seen ──n──▶ Skipped
//!  │y
//!  ▼
//! AwaitingValue ──blank──▶ Skipped
//!  │value      ▲
//!  ▼           │n
//! AwaitingConfirm ──y──▶ Committed
//! ```
//!
//! The machine only sees strings, so the same loop drives a real terminal
//! (dialoguer) or any line-based reader.

use std::io::{BufRead, IsTerminal, Write};

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::pipeline::{unicode_codepoint, ReplaceError, ReplaceResult, ReplacementMap};
use crate::utils::{print_found_char, print_skipped};

/// Source of answers and sink for prompt chatter.
pub trait Prompt {
    /// Ask a question and return the answer line without its terminator.
    fn ask(&mut self, prompt: &str) -> ReplaceResult<String>;

    /// Show an informational line.
    fn say(&mut self, message: &str) -> ReplaceResult<()>;

    /// Introduce the character about to be decided.
    fn announce(&mut self, c: char) -> ReplaceResult<()> {
        self.say(&format!(
            "Found character: '{}' ({})",
            c,
            unicode_codepoint(c)
        ))
    }

    /// Note that a character was left alone.
    fn skipped(&mut self) -> ReplaceResult<()> {
        self.say("Skipped.\n")
    }
}

impl<P: Prompt + ?Sized> Prompt for Box<P> {
    fn ask(&mut self, prompt: &str) -> ReplaceResult<String> {
        (**self).ask(prompt)
    }

    fn say(&mut self, message: &str) -> ReplaceResult<()> {
        (**self).say(message)
    }

    fn announce(&mut self, c: char) -> ReplaceResult<()> {
        (**self).announce(c)
    }

    fn skipped(&mut self) -> ReplaceResult<()> {
        (**self).skipped()
    }
}

/// Per-character prompt state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptState {
    Seen,
    AwaitingValue,
    AwaitingConfirm(String),
    Skipped,
    Committed(String),
}

impl PromptState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PromptState::Skipped | PromptState::Committed(_))
    }

    /// The question asked in this state, or `None` once terminal.
    pub fn question(&self, c: char) -> Option<String> {
        match self {
            PromptState::Seen => Some("Replace it? [y/N]".to_string()),
            PromptState::AwaitingValue => {
                Some(format!("Replace '{}' with (leave blank to skip)", c))
            }
            PromptState::AwaitingConfirm(replacement) => Some(format!(
                "Confirm replacement: '{}' → '{}' [y/N]",
                c, replacement
            )),
            PromptState::Skipped | PromptState::Committed(_) => None,
        }
    }

    /// Advance on one answer line.
    pub fn next(self, answer: &str) -> PromptState {
        match self {
            PromptState::Seen => {
                if is_yes(answer) {
                    PromptState::AwaitingValue
                } else {
                    PromptState::Skipped
                }
            }
            PromptState::AwaitingValue => {
                if answer.is_empty() {
                    PromptState::Skipped
                } else {
                    PromptState::AwaitingConfirm(answer.to_string())
                }
            }
            PromptState::AwaitingConfirm(replacement) => {
                if is_yes(answer) {
                    PromptState::Committed(replacement)
                } else {
                    PromptState::AwaitingValue
                }
            }
            terminal => terminal,
        }
    }
}

/// Only `y` (any case, surrounding whitespace ignored) counts as yes.
pub fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Run the state machine for one character.
///
/// Returns the confirmed replacement, or `None` if the character was skipped.
pub fn resolve_char<P: Prompt + ?Sized>(c: char, prompt: &mut P) -> ReplaceResult<Option<String>> {
    prompt.announce(c)?;

    let mut state = PromptState::Seen;
    while let Some(question) = state.question(c) {
        let answer = prompt.ask(&question)?;
        state = state.next(&answer);
    }

    match state {
        PromptState::Committed(replacement) => Ok(Some(replacement)),
        _ => {
            prompt.skipped()?;
            Ok(None)
        }
    }
}

/// Ask about every character in order and collect the confirmed replacements.
pub fn prompt_replacements<P: Prompt + ?Sized>(
    chars: &[char],
    prompt: &mut P,
) -> ReplaceResult<ReplacementMap> {
    let mut map = ReplacementMap::new();
    for &c in chars {
        if let Some(replacement) = resolve_char(c, prompt)? {
            map.insert(c, replacement);
        }
    }
    Ok(map)
}

/// Terminal prompts through dialoguer's colorful theme.
#[derive(Debug, Default)]
pub struct TermPrompt;

impl Prompt for TermPrompt {
    fn ask(&mut self, prompt: &str) -> ReplaceResult<String> {
        let theme = prompt_theme();
        Input::<String>::with_theme(&theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| ReplaceError::Prompt(e.to_string()))
    }

    fn say(&mut self, message: &str) -> ReplaceResult<()> {
        println!("{}", message);
        Ok(())
    }

    fn announce(&mut self, c: char) -> ReplaceResult<()> {
        print_found_char(c, &unicode_codepoint(c));
        Ok(())
    }

    fn skipped(&mut self) -> ReplaceResult<()> {
        print_skipped();
        Ok(())
    }
}

/// Theme for terminal questions.
pub fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

/// Plain line-based prompts, for piped input.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn ask(&mut self, prompt: &str) -> ReplaceResult<String> {
        write!(self.output, "{}: ", prompt).map_err(io_error)?;
        self.output.flush().map_err(io_error)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(io_error)?;
        if read == 0 {
            return Err(ReplaceError::InputClosed);
        }

        Ok(strip_line_ending(&line).to_string())
    }

    fn say(&mut self, message: &str) -> ReplaceResult<()> {
        writeln!(self.output, "{}", message).map_err(io_error)
    }
}

/// Pick dialoguer when attached to a terminal, plain stdio otherwise.
pub fn stdio_prompt() -> Box<dyn Prompt> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() && console::Term::stdout().is_term() {
        Box::new(TermPrompt)
    } else {
        Box::new(LinePrompt::new(stdin.lock(), std::io::stdout()))
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

fn io_error(err: std::io::Error) -> ReplaceError {
    ReplaceError::Prompt(err.to_string())
}
