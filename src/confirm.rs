//! Yes/no decisions for destructive operations such as `clear_logs`.

/// Asks whether to go ahead. Anything other than an explicit yes is a no.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// `y`/`yes` in any case, surrounding whitespace ignored.
#[must_use]
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Reads the answer from the terminal.
#[cfg(feature = "cli")]
#[derive(Debug, Default)]
pub struct PromptConfirm;

#[cfg(feature = "cli")]
impl Confirm for PromptConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        let Ok(mut editor) = rustyline::DefaultEditor::new() else {
            crate::internal::error("CONFIRM", "Could not open terminal for confirmation");
            return false;
        };
        editor
            .readline(&format!("{prompt} "))
            .is_ok_and(|answer| is_yes(&answer))
    }
}
