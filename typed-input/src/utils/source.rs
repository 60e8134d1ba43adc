//! # Line Sources
//!
//! Where the prompt loop gets its lines from. A source hands back one line
//! at a time, without the trailing newline, and `None` once the input is
//! exhausted.
//!
//! - [`LineSource`]: blocking reads, the calling thread waits for a line.
//! - [`AsyncLineSource`] (`tokio-dep` feature): the read yields to the Tokio
//!   scheduler while waiting.
//!
//! [`StdinLines`] and [`TokioStdinLines`] read the process' standard input;
//! [`ScriptedLines`] replays a fixed list of lines and implements both traits,
//! which makes it handy for tests.
use std::{
    collections::VecDeque,
    io::{self, BufRead},
};

pub trait LineSource {
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// Blocking reader over the process' standard input.
pub struct StdinLines {
    stdin: io::Stdin,
}

impl StdinLines {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl Default for StdinLines {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for StdinLines {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.stdin.lock().read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(strip_line_ending(line))),
        }
    }
}

/// Replays a fixed list of lines, then reports end of input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedLines {
    lines: VecDeque<String>,
}

impl ScriptedLines {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedLines {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "tokio-dep")] {
        use async_trait::async_trait;
        use once_cell::sync::Lazy;
        use tokio::{
            io::{AsyncBufReadExt, BufReader, Lines, Stdin},
            sync::{Mutex, MutexGuard},
        };

        type SharedLines = Lines<BufReader<Stdin>>;

        /// One buffered reader for the whole process. Bytes read ahead of the
        /// current line stay here for the next prompt.
        static SHARED_STDIN: Lazy<Mutex<SharedLines>> =
            Lazy::new(|| Mutex::new(BufReader::new(tokio::io::stdin()).lines()));

        #[async_trait]
        pub trait AsyncLineSource: Send {
            async fn read_line(&mut self) -> io::Result<Option<String>>;
        }

        /// Suspending handle on the process' standard input.
        ///
        /// Created per prompt call. The first read locks the shared reader
        /// and the lock is released when the handle is dropped, so
        /// concurrent prompts take turns instead of splitting lines.
        #[derive(Default)]
        pub struct TokioStdinLines {
            guard: Option<MutexGuard<'static, SharedLines>>,
        }

        impl TokioStdinLines {
            pub fn new() -> Self {
                Self { guard: None }
            }
        }

        #[async_trait]
        impl AsyncLineSource for TokioStdinLines {
            async fn read_line(&mut self) -> io::Result<Option<String>> {
                let mut lines = match self.guard.take() {
                    Some(guard) => guard,
                    None => SHARED_STDIN.lock().await,
                };
                let line = lines.next_line().await;
                self.guard = Some(lines);
                line
            }
        }

        #[async_trait]
        impl AsyncLineSource for ScriptedLines {
            async fn read_line(&mut self) -> io::Result<Option<String>> {
                tokio::task::yield_now().await;
                Ok(self.lines.pop_front())
            }
        }
    }
}
