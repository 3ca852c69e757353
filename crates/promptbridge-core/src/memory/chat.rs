//! Chat memory - turn-bounded conversation history
//!
//! Keeps an ordered user/assistant history plus a separately-held system
//! prompt, and evicts the oldest *complete turns* (one user message and the
//! assistant messages that answer it) once the user-message count exceeds
//! the configured bound. Designed for runtime use over stateless single-turn
//! engines: the retained window is what the next generation call sees.
//!
//! # Example
//!
//! ```
//! use promptbridge_core::memory::ChatMemory;
//!
//! let mut memory = ChatMemory::new(10);
//! memory.push_user("Hello");
//! memory.push_assistant("Hi there!");
//!
//! assert_eq!(memory.turn_count(), 1);
//! assert_eq!(memory.render_prompt(), "USER: Hello\nASSISTANT: Hi there!");
//! ```

use promptbridge_models::{ChatMessage, ChatSnapshot, Role};

/// Default maximum number of retained user messages
pub const DEFAULT_MAX_TURNS: usize = 10;

const CHARS_PER_TOKEN: usize = 4;
const ROLE_OVERHEAD_TOKENS: usize = 4;

/// Configuration for [`ChatMemory`], with defaults resolved at construction.
#[derive(Debug, Clone)]
pub struct ChatMemoryConfig {
    pub max_turns: usize,
    pub system_prompt: Option<String>,
}

impl Default for ChatMemoryConfig {
    fn default() -> Self {
        Self {
            max_turns: DEFAULT_MAX_TURNS,
            system_prompt: None,
        }
    }
}

impl ChatMemoryConfig {
    /// Override the retained-turn bound.
    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Set the initial system prompt.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }
}

/// Conversation memory with complete-turn eviction
///
/// Stores user and assistant messages in insertion order; system text never
/// enters the turn sequence and is held separately, exempt from eviction.
/// After every mutation that can grow the user count or shrink the bound,
/// the oldest complete turns are evicted until at most `max_turns` user
/// messages remain.
///
/// # Design Decisions
///
/// - **Turn-based, not token-based**: the bound counts user messages, so a
///   turn and its replies are always evicted together and the window never
///   starts with an unanswered assistant message.
/// - **No summarization**: evicted turns are discarded. Callers that need
///   the old context must persist a [`snapshot`](ChatMemory::snapshot)
///   before it is trimmed.
/// - **Single owner**: one caller context owns one instance; independent
///   conversations get independent instances.
#[derive(Debug, Clone)]
pub struct ChatMemory {
    /// User/assistant messages in order (oldest first)
    turns: Vec<ChatMessage>,
    /// System prompt, held outside the turn sequence
    system_prompt: Option<String>,
    /// Maximum number of user messages to retain
    max_turns: usize,
}

impl Default for ChatMemory {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TURNS)
    }
}

impl ChatMemory {
    /// Create a new memory retaining at most `max_turns` user messages.
    pub fn new(max_turns: usize) -> Self {
        Self {
            turns: Vec::new(),
            system_prompt: None,
            max_turns,
        }
    }

    /// Create a memory from an explicit configuration.
    pub fn with_config(config: ChatMemoryConfig) -> Self {
        let mut memory = Self::new(config.max_turns);
        if let Some(prompt) = config.system_prompt {
            memory.set_system_prompt(prompt);
        }
        memory
    }

    /// Append a user message, then re-evaluate the bound.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push(ChatMessage::user(content));
    }

    /// Append an assistant message, then re-evaluate the bound.
    ///
    /// Normally a no-op trim (an assistant reply never grows the user
    /// count), but the bound is still checked so a reply appended after
    /// [`set_max_turns`](Self::set_max_turns) lowered the limit cannot
    /// leave the memory over the bound.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.push(ChatMessage::assistant(content));
    }

    /// Append a message of any role.
    ///
    /// System messages route to the system prompt and never enter the turn
    /// sequence; user and assistant messages append in order. This is the
    /// entry point for relaying a heterogeneous message array built
    /// elsewhere.
    pub fn push(&mut self, message: ChatMessage) {
        match message.role {
            Role::System => self.set_system_prompt(message.content),
            Role::User | Role::Assistant => {
                self.turns.push(message);
                self.trim();
            }
        }
    }

    /// All messages the next generation call should see: the system entry
    /// (when set) followed by the retained turns, as a fresh copy.
    pub fn messages(&self) -> Vec<ChatMessage> {
        let mut out = Vec::with_capacity(self.turns.len() + 1);
        if let Some(prompt) = &self.system_prompt {
            out.push(ChatMessage::system(prompt.clone()));
        }
        out.extend(self.turns.iter().cloned());
        out
    }

    /// The retained turns alone, without the system entry.
    pub fn history(&self) -> &[ChatMessage] {
        &self.turns
    }

    /// Render the conversation as a single prompt string.
    ///
    /// One line per message, `LABEL: content` with the upper-cased role
    /// label, joined by `'\n'` with no trailing newline. Engines that accept
    /// only one text prompt consume this form; the structured-message
    /// platform falls back to it when no system slot is available.
    pub fn render_prompt(&self) -> String {
        let lines: Vec<String> = self
            .messages()
            .iter()
            .map(|msg| format!("{}: {}", msg.role.prompt_label(), msg.content))
            .collect();
        lines.join("\n")
    }

    /// Number of user messages currently retained.
    pub fn turn_count(&self) -> usize {
        self.turns
            .iter()
            .filter(|msg| msg.role == Role::User)
            .count()
    }

    /// Total stored messages (user and assistant).
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Check if no turns are stored.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The configured retained-turn bound.
    pub fn max_turns(&self) -> usize {
        self.max_turns
    }

    /// Overwrite the bound and re-trim immediately.
    ///
    /// A bound of zero retains zero turns: the next trim evicts every
    /// complete turn.
    pub fn set_max_turns(&mut self, max_turns: usize) {
        self.max_turns = max_turns;
        self.trim();
    }

    /// Current system prompt, if set.
    pub fn system_prompt(&self) -> Option<&str> {
        self.system_prompt.as_deref()
    }

    /// Overwrite the system prompt. Empty text clears it.
    pub fn set_system_prompt(&mut self, prompt: impl Into<String>) {
        let prompt = prompt.into();
        self.system_prompt = if prompt.is_empty() { None } else { Some(prompt) };
    }

    /// Clear the system prompt.
    pub fn clear_system_prompt(&mut self) {
        self.system_prompt = None;
    }

    /// Empty the turns; the system prompt is kept.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// Empty the turns and clear the system prompt.
    pub fn reset(&mut self) {
        self.turns.clear();
        self.system_prompt = None;
    }

    /// Read-only composite view for diagnostics and caller persistence.
    pub fn snapshot(&self) -> ChatSnapshot {
        ChatSnapshot {
            messages: self.messages(),
            system_prompt: self.system_prompt.clone(),
            turn_count: self.turn_count(),
            max_turns: self.max_turns,
        }
    }

    /// Heuristic context-cost estimate for the current window
    ///
    /// Bytes / 4 plus a per-message role overhead. Never an input to
    /// eviction; use a real tokenizer for accurate counts.
    pub fn approx_tokens(&self) -> usize {
        let system = self
            .system_prompt
            .as_ref()
            .map(|prompt| prompt.len() / CHARS_PER_TOKEN + ROLE_OVERHEAD_TOKENS)
            .unwrap_or(0);

        system
            + self
                .turns
                .iter()
                .map(|msg| msg.content.len() / CHARS_PER_TOKEN + ROLE_OVERHEAD_TOKENS)
                .sum::<usize>()
    }

    /// Evict oldest complete turns until at most `max_turns` user messages
    /// remain.
    ///
    /// The cut point lands after the excess-th oldest user message and the
    /// assistant messages that immediately follow it, so the retained
    /// prefix always starts a complete turn and relative order is
    /// unchanged.
    fn trim(&mut self) {
        let user_indices: Vec<usize> = self
            .turns
            .iter()
            .enumerate()
            .filter(|(_, msg)| msg.role == Role::User)
            .map(|(idx, _)| idx)
            .collect();

        let excess = user_indices.len().saturating_sub(self.max_turns);
        if excess == 0 {
            return;
        }

        // Cut after the excess-th oldest user message, consuming the
        // assistant replies that belong to its turn.
        let boundary = user_indices[excess - 1];
        let mut cut = boundary + 1;
        while cut < self.turns.len() && self.turns[cut].role == Role::Assistant {
            cut += 1;
        }

        tracing::debug!(
            evicted = cut,
            retained = self.turns.len() - cut,
            "evicting oldest complete turns"
        );
        self.turns.drain(..cut);
    }
}
