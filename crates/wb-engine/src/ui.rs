//! The presentation port the engine drives.
//!
//! The engine never draws or polls input devices. Everything a player sees
//! goes out through [`StoryUi`], and every answer comes back as a
//! [`Selection`], which carries the quit signal so that any blocking prompt
//! can unwind the session immediately.

use std::time::Duration;

use wb_core::PlayerState;

/// How a player answered a blocking prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    /// The player picked a value.
    Picked(T),
    /// The player asked to preview the outcome of choice `n` before
    /// committing. Honored at choice menus; elsewhere treated as a re-prompt.
    Preview(usize),
    /// The player backed out of the prompt. Interactions that permit no
    /// cancellation re-prompt instead of honoring this.
    Back,
    /// The player asked to quit. The session unwinds without saving.
    Quit,
}

/// Weight of a transient message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Ordinary narration-adjacent notice.
    Info,
    /// A denied choice or refused action.
    Warn,
    /// Broken content surfaced to the player.
    Error,
}

/// The narrow surface between the engine and whatever renders it.
pub trait StoryUi {
    /// Display a story passage.
    fn narrate(&mut self, text: &str);

    /// Present options and wait for a pick (by index).
    fn choose(&mut self, prompt: &str, options: &[String]) -> Selection<usize>;

    /// Present options for picking up to `limit` of them. An empty pick is a
    /// valid answer and distinct from backing out.
    fn choose_many(&mut self, prompt: &str, options: &[String], limit: usize)
    -> Selection<Vec<usize>>;

    /// Ask for an amount of money, at most `max`.
    fn amount(&mut self, prompt: &str, max: i32) -> Selection<i32>;

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &str) -> Selection<bool>;

    /// Show a transient message. The duration is an advisory display hint;
    /// the message must not block the loop.
    fn message(&mut self, text: &str, severity: Severity, duration_hint: Duration);

    /// Called with a snapshot of the player state before each choice menu,
    /// so a frontend can offer meta-actions (character sheet, explicit
    /// save). The default does nothing.
    fn checkpoint(&mut self, _state: &PlayerState) {}
}

#[cfg(test)]
pub(crate) mod scripted {
    //! A scripted frontend for driving sessions in tests.

    use std::collections::VecDeque;

    use super::*;

    /// Plays back canned answers and records everything shown to it.
    /// Exhausted queues answer `Quit`, so a test that scripts too little
    /// ends its session instead of hanging.
    #[derive(Debug, Default)]
    pub struct ScriptedUi {
        pub picks: VecDeque<Selection<usize>>,
        pub multi: VecDeque<Selection<Vec<usize>>>,
        pub amounts: VecDeque<Selection<i32>>,
        pub confirms: VecDeque<Selection<bool>>,
        pub narrated: Vec<String>,
        pub messages: Vec<String>,
        pub prompts: Vec<String>,
    }

    impl ScriptedUi {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn pick(mut self, index: usize) -> Self {
            self.picks.push_back(Selection::Picked(index));
            self
        }

        pub fn preview(mut self, index: usize) -> Self {
            self.picks.push_back(Selection::Preview(index));
            self
        }

        pub fn back(mut self) -> Self {
            self.picks.push_back(Selection::Back);
            self
        }

        pub fn pick_many(mut self, indices: &[usize]) -> Self {
            self.multi.push_back(Selection::Picked(indices.to_vec()));
            self
        }

        pub fn back_many(mut self) -> Self {
            self.multi.push_back(Selection::Back);
            self
        }

        pub fn give(mut self, amount: i32) -> Self {
            self.amounts.push_back(Selection::Picked(amount));
            self
        }

        pub fn answer(mut self, yes: bool) -> Self {
            self.confirms.push_back(Selection::Picked(yes));
            self
        }
    }

    impl StoryUi for ScriptedUi {
        fn narrate(&mut self, text: &str) {
            self.narrated.push(text.to_string());
        }

        fn choose(&mut self, prompt: &str, _options: &[String]) -> Selection<usize> {
            self.prompts.push(prompt.to_string());
            self.picks.pop_front().unwrap_or(Selection::Quit)
        }

        fn choose_many(
            &mut self,
            prompt: &str,
            _options: &[String],
            _limit: usize,
        ) -> Selection<Vec<usize>> {
            self.prompts.push(prompt.to_string());
            self.multi.pop_front().unwrap_or(Selection::Quit)
        }

        fn amount(&mut self, prompt: &str, _max: i32) -> Selection<i32> {
            self.prompts.push(prompt.to_string());
            self.amounts.pop_front().unwrap_or(Selection::Quit)
        }

        fn confirm(&mut self, prompt: &str) -> Selection<bool> {
            self.prompts.push(prompt.to_string());
            self.confirms.pop_front().unwrap_or(Selection::Quit)
        }

        fn message(&mut self, text: &str, _severity: Severity, _duration_hint: Duration) {
            self.messages.push(text.to_string());
        }
    }
}
