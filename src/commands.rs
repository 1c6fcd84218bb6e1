//! Command types for the Elm-style architecture
//!
//! Commands are the side effects the host performs after an update: redraws,
//! changing the global time scale, and swapping the mouse cursor.

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Panel geometry, opacity or draw order changed
    Redraw,
    /// Set the host's global time scale (0 = paused, 1 = running)
    SetTimeScale(f32),
    /// Switch the cursor image; `None` restores the default cursor
    SetCursor(Option<String>),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Combine optional commands, dropping empty ones
    ///
    /// Returns `None` when nothing remains and the command itself when only
    /// one does.
    pub fn merge<I>(cmds: I) -> Option<Cmd>
    where
        I: IntoIterator<Item = Option<Cmd>>,
    {
        let mut out: Vec<Cmd> = cmds
            .into_iter()
            .flatten()
            .filter(|c| !matches!(c, Cmd::None))
            .collect();
        match out.len() {
            0 => None,
            1 => out.pop(),
            _ => Some(Cmd::Batch(out)),
        }
    }

    /// Nested batches expanded into a flat list, `None`s removed
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }
}
